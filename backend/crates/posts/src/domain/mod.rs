//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (User, Post and their creation payloads)
//! - Domain value objects (Email, PostTitle, FeedQuery)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
