//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary shared by the `posts` and `blogs` crates:
//! - Unified error type ([`error::app_error::AppError`]) and result alias
//! - Numeric, type-safe entity IDs ([`id::Id`])
//!
//! Only things with the same meaning in every domain belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
