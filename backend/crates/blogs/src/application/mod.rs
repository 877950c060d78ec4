//! Application Layer - Use Cases

pub mod manage_blogs;

pub use manage_blogs::{BlogInput, ManageBlogsUseCase};
