//! # Blogspace Core
//!
//! The domain layer of Blogspace.
//! Entities, editor helpers, ports and the derived view functions live here;
//! nothing in this crate touches storage directly.

pub mod domain;
pub mod error;
pub mod policy;
pub mod ports;
pub mod views;

pub use error::{DomainError, StoreError};
