//! Common ID Types
//!
//! Type-safe wrappers around database-assigned numeric keys.

use std::fmt;
use std::marker::PhantomData;

use serde::{Serialize, Serializer};

use crate::error::app_error::{AppError, AppResult};

/// Generic typed ID wrapper over a positive `BIGSERIAL` key
///
/// Usage:
/// ```
/// use kernel::id::Id;
///
/// struct PostMarker;
/// type PostId = Id<PostMarker>;
///
/// let id = PostId::parse("42").unwrap();
/// assert_eq!(id.value(), 42);
/// assert!(PostId::parse("0").is_err());
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Wrap a key that is known to be positive (e.g. read back from the database)
    pub const fn from_db(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Validate an externally supplied key
    pub fn new(value: i64) -> AppResult<Self> {
        if value <= 0 {
            return Err(AppError::bad_request(format!(
                "id must be a positive integer, got {}",
                value
            )));
        }
        Ok(Self::from_db(value))
    }

    /// Parse a path segment such as `"42"`
    pub fn parse(raw: &str) -> AppResult<Self> {
        let value: i64 = raw
            .trim()
            .parse()
            .map_err(|e| {
                AppError::bad_request(format!("id must be a positive integer, got {:?}", raw))
                    .with_source(e)
            })?;
        Self::new(value)
    }

    /// Validate a `{id}` path segment; undecodable segments are 400s too
    #[cfg(feature = "axum")]
    pub fn from_path(
        path: Result<axum::extract::Path<String>, axum::extract::rejection::PathRejection>,
    ) -> AppResult<Self> {
        let axum::extract::Path(raw) = path?;
        Self::parse(&raw)
    }

    pub const fn value(&self) -> i64 {
        self.value
    }
}

// Manual impls: derives would put bounds on the marker type.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    struct Marker;
    type TestId = Id<Marker>;

    #[test]
    fn test_parse_positive() {
        let id = TestId::parse("17").unwrap();
        assert_eq!(id.value(), 17);
        assert_eq!(id.to_string(), "17");
    }

    #[test]
    fn test_rejects_zero_and_negative() {
        assert_eq!(TestId::parse("0").unwrap_err().kind(), ErrorKind::BadRequest);
        assert_eq!(TestId::parse("-5").unwrap_err().kind(), ErrorKind::BadRequest);
        assert!(TestId::new(0).is_err());
    }

    #[test]
    fn test_rejects_non_numeric() {
        let err = TestId::parse("abc").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert!(err.message().contains("abc"));
        assert!(TestId::parse("1.5").is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        let id = TestId::from_db(3);
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
    }
}
