//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic failures live here. Errors raised by external
/// collaborators (payment, seat reservation) are owned by those collaborators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A purchase attempt broke a structural or business rule.
    ///
    /// The message is the human-readable reason shown to the purchaser.
    #[error("{0}")]
    InvalidPurchase(String),

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_purchase(msg: impl Into<String>) -> Self {
        Self::InvalidPurchase(msg.into())
    }

    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Returns the purchase rejection reason, if this is a purchase failure.
    pub fn purchase_reason(&self) -> Option<&str> {
        match self {
            Self::InvalidPurchase(reason) => Some(reason),
            _ => None,
        }
    }
}
