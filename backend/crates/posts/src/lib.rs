//! Posts Backend Module
//!
//! Users and their posts, served as a JSON CRUD API.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Guarantees
//! - Every request is validated before any database call
//! - View registration and publish toggling are single atomic UPDATEs
//! - Signup inserts the user and its nested posts in one transaction

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{PostsError, PostsResult};
pub use infra::postgres::PgPostsRepository;
pub use presentation::router::{posts_router, posts_router_generic};
