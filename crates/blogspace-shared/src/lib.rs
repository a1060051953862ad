//! # Blogspace Shared
//!
//! Presentation-facing types: what a page receives, independent of how the
//! domain models it.

pub mod dto;
pub mod response;

pub use response::{Notice, NoticeKind, PageResponse};
