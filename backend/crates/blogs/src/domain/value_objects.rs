//! Domain Value Objects

use kernel::error::app_error::{AppError, AppResult};
use kernel::id::Id;

pub struct BlogMarker;
pub type BlogId = Id<BlogMarker>;

/// Non-blank blog title, stored as given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogTitle(String);

impl BlogTitle {
    pub fn new(title: impl Into<String>) -> AppResult<Self> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err(AppError::bad_request("title must not be empty"));
        }

        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_title() {
        assert_eq!(BlogTitle::new("Release notes").unwrap().as_str(), "Release notes");
        assert!(BlogTitle::new("").is_err());
        assert!(BlogTitle::new("\t\n").is_err());
        assert!(BlogTitle::new("é".repeat(1_000)).is_ok());
    }

    #[test]
    fn test_blog_id_parse() {
        assert_eq!(BlogId::parse("8").unwrap().value(), 8);
        assert!(BlogId::parse("0").is_err());
    }
}
