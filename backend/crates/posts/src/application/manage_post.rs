//! Manage Post Use Case
//!
//! Single-post mutations addressed by id: view registration,
//! publish toggle and deletion.

use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::PostId;
use crate::error::{PostsError, PostsResult};

pub struct ManagePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> ManagePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    /// Add one view to the post
    pub async fn register_view(&self, post_id: PostId) -> PostsResult<Post> {
        let post = self
            .post_repo
            .increment_views(post_id)
            .await?
            .ok_or(PostsError::PostNotFound(post_id))?;

        tracing::debug!(post_id = %post_id, views = post.view_count, "View registered");

        Ok(post)
    }

    /// Flip the published flag
    pub async fn toggle_publish(&self, post_id: PostId) -> PostsResult<Post> {
        let post = self
            .post_repo
            .toggle_published(post_id)
            .await?
            .ok_or(PostsError::PostNotFound(post_id))?;

        tracing::info!(post_id = %post_id, published = post.published, "Publish toggled");

        Ok(post)
    }

    pub async fn delete(&self, post_id: PostId) -> PostsResult<Post> {
        let post = self
            .post_repo
            .delete(post_id)
            .await?
            .ok_or(PostsError::PostNotFound(post_id))?;

        tracing::info!(post_id = %post_id, "Post deleted");

        Ok(post)
    }
}
