//! # AppError
//!
//! Centralized error handling for the LocalLegends crates.
//! Store operations never fail; these errors come from form validation
//! and from the device ports.

use thiserror::Error;

/// The primary error type for all ll-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Resource not found (e.g., ForumPost, ServiceRequest)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// A form was submitted with missing or malformed fields.
    /// The message is shown to the user as-is.
    #[error("validation error: {0}")]
    Validation(String),

    /// A device capability (dialer, WhatsApp, GPS) could not be used.
    #[error("unavailable: {0}")]
    Unavailable(String),

    #[error("internal service error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(kind: &str, id: impl ToString) -> Self {
        Self::NotFound(kind.to_string(), id.to_string())
    }

    /// The message a form would show in its alert.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::Unavailable(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// A specialized Result type for LocalLegends logic.
pub type Result<T> = std::result::Result<T, AppError>;
