//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// state-machine violations, missing records). Infrastructure concerns belong
/// elsewhere. Every variant is per-request and recoverable by the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input, arithmetic overflow).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The referenced booking does not exist.
    #[error("booking not found")]
    BookingNotFound,

    /// The referenced technician does not exist.
    #[error("technician not found")]
    TechnicianNotFound,

    /// The referenced sub-service does not exist in the catalog.
    #[error("sub-service not found")]
    SubServiceNotFound,

    /// A booking-status move not permitted by the transition table.
    #[error("invalid status transition: {0}")]
    InvalidTransition(String),

    /// A payment-status move not permitted by the payment table.
    #[error("invalid payment transition: {0}")]
    InvalidPaymentTransition(String),

    /// Booking creation/pricing with a quantity of zero or less.
    #[error("invalid quantity: must be at least 1")]
    InvalidQuantity,

    /// Assignment attempted on a deactivated technician.
    #[error("technician is inactive")]
    TechnicianInactive,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_transition(msg: impl Into<String>) -> Self {
        Self::InvalidTransition(msg.into())
    }

    pub fn invalid_payment_transition(msg: impl Into<String>) -> Self {
        Self::InvalidPaymentTransition(msg.into())
    }
}
