//! API DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Blog;
use crate::domain::value_objects::BlogId;

/// Body of POST /api/blogs and PUT /api/blogs/{id}
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogRequest {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: BlogId,
    pub title: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            content: blog.content,
            created_at: blog.created_at,
            updated_at: blog.updated_at,
        }
    }
}
