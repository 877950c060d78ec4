//! Domain Entities

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{BlogId, BlogTitle};

/// Blog entry
#[derive(Debug, Clone, PartialEq)]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated title and content, used for both create and update
#[derive(Debug, Clone)]
pub struct BlogDraft {
    pub title: BlogTitle,
    pub content: Option<String>,
}
