//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{NewPost, NewUser, Post, PostWithAuthor, User, UserWithPosts};
use crate::domain::value_objects::{FeedQuery, PostId, UserId};
use crate::error::PostsResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert the user and all nested posts atomically
    ///
    /// Fails with `PostsError::EmailTaken` if the email is already registered.
    async fn create_with_posts(&self, new_user: &NewUser) -> PostsResult<UserWithPosts>;

    /// All users, ordered by id
    async fn list(&self) -> PostsResult<Vec<User>>;
}

/// Post repository trait
///
/// Single-row mutations return `None` when no post has the given id.
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Insert a post for the user owning `author_email`
    ///
    /// Fails with `PostsError::AuthorNotFound` if no such user exists.
    async fn create(&self, new_post: &NewPost) -> PostsResult<Post>;

    /// Find post by ID
    async fn find_by_id(&self, post_id: PostId) -> PostsResult<Option<Post>>;

    /// Atomically add one to the view counter
    async fn increment_views(&self, post_id: PostId) -> PostsResult<Option<Post>>;

    /// Atomically flip the published flag
    async fn toggle_published(&self, post_id: PostId) -> PostsResult<Option<Post>>;

    /// Delete and return the removed post
    async fn delete(&self, post_id: PostId) -> PostsResult<Option<Post>>;

    /// Unpublished posts of one author, ordered by id
    async fn find_drafts_by_author(&self, author_id: UserId) -> PostsResult<Vec<Post>>;

    /// Published posts matching the query, with their authors
    async fn feed(&self, query: &FeedQuery) -> PostsResult<Vec<PostWithAuthor>>;
}
