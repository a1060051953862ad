//! Application errors and their user-visible notices.

use std::fmt;

use blogspace_core::DomainError;
use blogspace_shared::Notice;

/// Application-level error type that converts to a user-visible [`Notice`].
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Unauthorized,
    Validation(String),
    Conflict(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// The message shown to the user. Internal details stay in the logs.
    pub fn notice(&self) -> Notice {
        match self {
            AppError::NotFound(detail) => Notice::error(detail.clone()),
            AppError::Unauthorized => Notice::error("You need to be signed in as the author to do that"),
            AppError::Validation(detail) => Notice::warning(detail.clone()),
            AppError::Conflict(detail) => Notice::error(detail.clone()),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                Notice::error("Something went wrong, please try again")
            }
        }
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} {} not found", entity_type, id))
            }
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::Duplicate(msg) => AppError::Conflict(msg),
            DomainError::Unauthorized => AppError::Unauthorized,
            DomainError::Storage(e) => {
                tracing::error!("Storage error: {}", e);
                AppError::Internal("Storage error".to_string())
            }
            DomainError::Serialization(msg) => {
                tracing::error!("Serialization error: {}", msg);
                AppError::Internal("Storage error".to_string())
            }
        }
    }
}

/// Result type alias for application operations.
pub type AppResult<T> = Result<T, AppError>;
