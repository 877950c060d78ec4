//! Create Post Use Case

use std::sync::Arc;

use crate::domain::entities::{NewPost, Post};
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::{Email, PostTitle};
use crate::error::PostsResult;

/// Create post input
pub struct CreatePostInput {
    pub title: String,
    pub content: Option<String>,
    pub author_email: String,
}

/// Create post use case
pub struct CreatePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> CreatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, input: CreatePostInput) -> PostsResult<Post> {
        let new_post = NewPost {
            title: PostTitle::new(input.title)?,
            content: input.content,
            author_email: Email::new(input.author_email)?,
        };

        let post = self.post_repo.create(&new_post).await?;

        tracing::info!(
            post_id = %post.id,
            author_id = %post.author_id,
            "Post created"
        );

        Ok(post)
    }
}
