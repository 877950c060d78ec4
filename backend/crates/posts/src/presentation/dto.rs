//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Post, PostWithAuthor, User, UserWithPosts};
use crate::domain::value_objects::{PostId, UserId};

// ============================================================================
// Requests
// ============================================================================

/// POST /signup
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub posts: Vec<SignUpPostRequest>,
}

/// Nested post of a signup request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpPostRequest {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// POST /post
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    pub author_email: String,
}

/// GET /feed query string
///
/// Kept as raw strings: malformed values are ignored, not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedParams {
    pub search_string: Option<String>,
    pub skip: Option<String>,
    pub take: Option<String>,
    pub order_by: Option<String>,
}

impl FeedParams {
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "searchString" => &mut params.search_string,
                "skip" => &mut params.skip,
                "take" => &mut params.take,
                "orderBy" => &mut params.order_by,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

// ============================================================================
// Responses
// ============================================================================

/// GET /
#[derive(Debug, Clone, Serialize)]
pub struct HelloResponse {
    #[serde(rename = "Hello")]
    pub hello: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub name: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email.as_str().to_owned(),
            name: user.name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: PostId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
    pub view_count: i64,
    pub author_id: UserId,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            created_at: post.created_at,
            updated_at: post.updated_at,
            title: post.title,
            content: post.content,
            published: post.published,
            view_count: post.view_count,
            author_id: post.author_id,
        }
    }
}

/// Feed entry: the post with its author embedded
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPostResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub author: UserResponse,
}

impl From<PostWithAuthor> for FeedPostResponse {
    fn from(entry: PostWithAuthor) -> Self {
        Self {
            post: entry.post.into(),
            author: entry.author.into(),
        }
    }
}

/// POST /signup: the created user with its posts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub posts: Vec<PostResponse>,
}

impl From<UserWithPosts> for SignUpResponse {
    fn from(created: UserWithPosts) -> Self {
        Self {
            user: created.user.into(),
            posts: created.posts.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_feed_params_first_value_wins() {
        let params = FeedParams::from_pairs(pairs(&[
            ("skip", "1"),
            ("skip", "2"),
            ("searchString", "rust"),
            ("orderBy", "asc"),
            ("page", "7"),
        ]));

        assert_eq!(params.skip.as_deref(), Some("1"));
        assert_eq!(params.search_string.as_deref(), Some("rust"));
        assert_eq!(params.order_by.as_deref(), Some("asc"));
        assert_eq!(params.take, None);
    }

    #[test]
    fn test_post_response_serializes_large_view_counts() {
        let timestamp = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        let post = Post {
            id: PostId::from_db(7),
            created_at: timestamp,
            updated_at: timestamp,
            title: "Popular".to_owned(),
            content: None,
            published: true,
            view_count: i64::from(i32::MAX) + 1,
            author_id: UserId::from_db(3),
        };

        let value = serde_json::to_value(PostResponse::from(post)).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["authorId"], 3);
        assert_eq!(value["viewCount"], 2_147_483_648_i64);
    }
}
