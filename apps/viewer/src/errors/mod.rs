//! Error handling for the crew viewer.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
