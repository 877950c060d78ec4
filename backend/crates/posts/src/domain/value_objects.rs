//! Domain Value Objects
//!
//! Validated, immutable values for the posts domain.

use kernel::error::app_error::{AppError, AppResult};
use kernel::id::Id;

pub struct UserMarker;
pub type UserId = Id<UserMarker>;

pub struct PostMarker;
pub type PostId = Id<PostMarker>;

// ============================================================================
// Email
// ============================================================================

/// Author email, the key that attaches new posts to their user
///
/// Stored as given apart from surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into();
        let email = email.trim();

        if email.is_empty() {
            return Err(AppError::bad_request("email must not be empty"));
        }

        Ok(Self(email.to_owned()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// PostTitle
// ============================================================================

/// Non-blank post title, stored as given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
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

// ============================================================================
// Feed query
// ============================================================================

/// Sort direction on `updated_at`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Unknown values fall back to newest-first.
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Filter, pagination and ordering for the published-post feed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    /// Case-sensitive substring matched against title or content
    pub search: Option<String>,
    pub skip: Option<i64>,
    pub take: Option<i64>,
    pub order: SortOrder,
}

impl FeedQuery {
    /// Build from raw query-string values.
    ///
    /// Never fails: empty search strings, non-numeric or non-positive
    /// `skip`/`take` and unknown `orderBy` values are ignored.
    pub fn from_raw(
        search: Option<&str>,
        skip: Option<&str>,
        take: Option<&str>,
        order_by: Option<&str>,
    ) -> Self {
        Self {
            search: search.filter(|s| !s.is_empty()).map(str::to_owned),
            skip: parse_positive(skip),
            take: parse_positive(take),
            order: SortOrder::parse_lenient(order_by),
        }
    }

    /// True when `title`/`content` satisfy the search filter
    pub fn matches(&self, title: &str, content: Option<&str>) -> bool {
        match &self.search {
            Some(needle) => {
                title.contains(needle.as_str())
                    || content.is_some_and(|c| c.contains(needle.as_str()))
            }
            None => true,
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_email_accepts_any_non_blank_address() {
        assert_eq!(Email::new("ann@x.com").unwrap().as_str(), "ann@x.com");
        assert_eq!(Email::new("ann@localhost").unwrap().as_str(), "ann@localhost");
    }

    #[test]
    fn test_email_rejects_blank() {
        assert!(Email::new("").is_err());
        assert!(Email::new("   ").is_err());
    }

    #[test]
    fn test_email_keeps_case() {
        let email = Email::new("  Ann@X.COM ").unwrap();
        assert_eq!(email.as_str(), "Ann@X.COM");
    }

    #[test]
    fn test_post_title() {
        assert_eq!(PostTitle::new("T1").unwrap().as_str(), "T1");
        let err = PostTitle::new("  ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert!(PostTitle::new("x".repeat(1_000)).is_ok());
    }

    #[test]
    fn test_sort_order_lenient() {
        assert_eq!(SortOrder::parse_lenient(Some("asc")), SortOrder::Asc);
        assert_eq!(SortOrder::parse_lenient(Some("ASC")), SortOrder::Asc);
        assert_eq!(SortOrder::parse_lenient(Some("desc")), SortOrder::Desc);
        assert_eq!(SortOrder::parse_lenient(Some("sideways")), SortOrder::Desc);
        assert_eq!(SortOrder::parse_lenient(None), SortOrder::Desc);
    }

    #[test]
    fn test_feed_query_ignores_malformed_values() {
        let query = FeedQuery::from_raw(Some(""), Some("abc"), Some("-3"), Some("up"));
        assert_eq!(query, FeedQuery::default());

        let query = FeedQuery::from_raw(Some("rust"), Some("10"), Some("5"), Some("asc"));
        assert_eq!(query.search.as_deref(), Some("rust"));
        assert_eq!(query.skip, Some(10));
        assert_eq!(query.take, Some(5));
        assert_eq!(query.order, SortOrder::Asc);
    }

    #[test]
    fn test_feed_query_matches() {
        let query = FeedQuery::from_raw(Some("Rust"), None, None, None);
        assert!(query.matches("Learning Rust", None));
        assert!(query.matches("Notes", Some("Rust is fun")));
        assert!(!query.matches("learning rust", Some("lowercase only")));
        assert!(FeedQuery::default().matches("anything", None));
    }
}
