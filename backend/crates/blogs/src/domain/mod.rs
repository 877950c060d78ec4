//! Domain Layer
//!
//! Blog entity, its value objects and the repository trait.

pub mod entities;
pub mod repository;
pub mod value_objects;
