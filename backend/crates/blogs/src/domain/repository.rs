//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{Blog, BlogDraft};
use crate::domain::value_objects::BlogId;
use crate::error::BlogsResult;

/// Blog repository trait
///
/// Single-row operations return `None` when no blog has the given id.
#[trait_variant::make(BlogRepository: Send)]
pub trait LocalBlogRepository {
    /// All blogs, newest first
    async fn list(&self) -> BlogsResult<Vec<Blog>>;

    async fn find_by_id(&self, blog_id: BlogId) -> BlogsResult<Option<Blog>>;

    async fn create(&self, draft: &BlogDraft) -> BlogsResult<Blog>;

    /// Replace title and content
    async fn update(&self, blog_id: BlogId, draft: &BlogDraft) -> BlogsResult<Option<Blog>>;

    /// Delete and return the removed blog
    async fn delete(&self, blog_id: BlogId) -> BlogsResult<Option<Blog>>;
}
