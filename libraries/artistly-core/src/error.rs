/// Core error types for Artistly
use crate::types::BookingStatus;
use crate::validation::ValidationErrors;
use thiserror::Error;

/// Result type alias using `ArtistlyError`
pub type Result<T> = std::result::Result<T, ArtistlyError>;

/// Core error type for Artistly
///
/// Filtering never produces one of these; an unknown filter value just
/// matches nothing.
#[derive(Error, Debug)]
pub enum ArtistlyError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Submission failed field validation
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Booking status change not allowed by the lifecycle
    #[error("Booking cannot move from {from} to {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Data source failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl ArtistlyError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<ValidationErrors> for ArtistlyError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
