//! `qchaos-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no terminal concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod stability;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ObjectId;
pub use stability::Stability;
pub use value_object::ValueObject;
