//! Manage Blogs Use Case
//!
//! The five CRUD operations of the blogs resource.

use std::sync::Arc;

use crate::domain::entities::{Blog, BlogDraft};
use crate::domain::repository::BlogRepository;
use crate::domain::value_objects::{BlogId, BlogTitle};
use crate::error::{BlogsError, BlogsResult};

/// Title and content as received
pub struct BlogInput {
    pub title: String,
    pub content: Option<String>,
}

impl BlogInput {
    fn validate(self) -> BlogsResult<BlogDraft> {
        Ok(BlogDraft {
            title: BlogTitle::new(self.title)?,
            content: self.content,
        })
    }
}

pub struct ManageBlogsUseCase<B>
where
    B: BlogRepository,
{
    blog_repo: Arc<B>,
}

impl<B> ManageBlogsUseCase<B>
where
    B: BlogRepository,
{
    pub fn new(blog_repo: Arc<B>) -> Self {
        Self { blog_repo }
    }

    pub async fn list(&self) -> BlogsResult<Vec<Blog>> {
        self.blog_repo.list().await
    }

    pub async fn get(&self, blog_id: BlogId) -> BlogsResult<Blog> {
        self.blog_repo
            .find_by_id(blog_id)
            .await?
            .ok_or(BlogsError::BlogNotFound(blog_id))
    }

    pub async fn create(&self, input: BlogInput) -> BlogsResult<Blog> {
        let draft = input.validate()?;
        let blog = self.blog_repo.create(&draft).await?;

        tracing::info!(blog_id = %blog.id, "Blog created");

        Ok(blog)
    }

    pub async fn update(&self, blog_id: BlogId, input: BlogInput) -> BlogsResult<Blog> {
        let draft = input.validate()?;
        let blog = self
            .blog_repo
            .update(blog_id, &draft)
            .await?
            .ok_or(BlogsError::BlogNotFound(blog_id))?;

        tracing::info!(blog_id = %blog_id, "Blog updated");

        Ok(blog)
    }

    pub async fn delete(&self, blog_id: BlogId) -> BlogsResult<Blog> {
        let blog = self
            .blog_repo
            .delete(blog_id)
            .await?
            .ok_or(BlogsError::BlogNotFound(blog_id))?;

        tracing::info!(blog_id = %blog_id, "Blog deleted");

        Ok(blog)
    }
}
