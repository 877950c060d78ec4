//! Application Layer - Use Cases
//!
//! Each use case validates its input into domain values and issues
//! exactly one repository operation.

pub mod browse;
pub mod create_post;
pub mod manage_post;
pub mod sign_up;

pub use browse::BrowseUseCase;
pub use create_post::{CreatePostInput, CreatePostUseCase};
pub use manage_post::ManagePostUseCase;
pub use sign_up::{SignUpInput, SignUpPostInput, SignUpUseCase};
