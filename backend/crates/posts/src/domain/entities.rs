//! Domain Entities
//!
//! Persisted records of the posts domain and the payloads used to create them.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{Email, PostId, PostTitle, UserId};

/// User entity - the author of zero or more posts
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    /// Unique, used to attach new posts to their author
    pub email: Email,
    pub name: Option<String>,
}

/// Post entity
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub created_at: DateTime<Utc>,
    /// Maintained by the store on every edit
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
    /// Only ever incremented, one per registered view
    pub view_count: i64,
    pub author_id: UserId,
}

/// Post joined with its author, as listed in the feed
#[derive(Debug, Clone, PartialEq)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: User,
}

/// User together with the posts created alongside it at signup
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithPosts {
    pub user: User,
    pub posts: Vec<Post>,
}

/// Validated signup payload
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Email,
    pub posts: Vec<NewUserPost>,
}

/// Post created together with its author at signup
#[derive(Debug, Clone)]
pub struct NewUserPost {
    pub title: PostTitle,
    pub content: Option<String>,
}

/// Validated post-creation payload; the author is resolved by email
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub content: Option<String>,
    pub author_email: Email,
}
