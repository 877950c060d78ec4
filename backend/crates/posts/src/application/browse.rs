//! Browse Use Case
//!
//! Read-only queries over users and posts.

use std::sync::Arc;

use crate::domain::entities::{Post, PostWithAuthor, User};
use crate::domain::repository::{PostRepository, UserRepository};
use crate::domain::value_objects::{FeedQuery, PostId, UserId};
use crate::error::PostsResult;

pub struct BrowseUseCase<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    user_repo: Arc<U>,
    post_repo: Arc<P>,
}

impl<U, P> BrowseUseCase<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    pub fn new(user_repo: Arc<U>, post_repo: Arc<P>) -> Self {
        Self {
            user_repo,
            post_repo,
        }
    }

    pub async fn list_users(&self) -> PostsResult<Vec<User>> {
        self.user_repo.list().await
    }

    /// Unpublished posts of one author; empty for unknown authors
    pub async fn list_drafts(&self, author_id: UserId) -> PostsResult<Vec<Post>> {
        self.post_repo.find_drafts_by_author(author_id).await
    }

    /// `None` when the post does not exist
    pub async fn get_post(&self, post_id: PostId) -> PostsResult<Option<Post>> {
        self.post_repo.find_by_id(post_id).await
    }

    pub async fn feed(&self, query: &FeedQuery) -> PostsResult<Vec<PostWithAuthor>> {
        let posts = self.post_repo.feed(query).await?;

        tracing::debug!(
            search = ?query.search,
            skip = ?query.skip,
            take = ?query.take,
            results = posts.len(),
            "Feed queried"
        );

        Ok(posts)
    }
}
