//! Domain-level error type used by value constructors and parsers.
//!
//! This error type is transport-agnostic. Application code returns
//! `Result<T, crate::error::AppError>` and converts from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation failure kinds for domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Unknown suit letter or name.
    InvalidSuit,
    /// Card value outside the suit's range.
    InvalidCardValue,
    /// Malformed compact card token such as `"X12"`.
    ParseCard,
    /// Task type string outside the closed set.
    InvalidTaskType,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or value-range violation
    Validation(ValidationKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn kind(&self) -> &ValidationKind {
        match self {
            DomainError::Validation(kind, _) => kind,
        }
    }
}
