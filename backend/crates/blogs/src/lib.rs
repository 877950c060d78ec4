//! Blogs Backend Module
//!
//! CRUD over standalone blog entries under `/api/blogs`, laid out like
//! the `posts` crate:
//! - `domain/` - Blog entity, value objects, repository trait
//! - `application/` - Use case
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use error::{BlogsError, BlogsResult};
pub use infra::postgres::PgBlogRepository;
pub use presentation::router::{blogs_router, blogs_router_generic};
