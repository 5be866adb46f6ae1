//! Errors the domain layer can produce.
//!
//! The set is small on purpose: the client has no I/O or protocol error
//! classes, only form validation and construction-time rejections.

use thiserror::Error;

/// Domain custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Budget limit must be greater than zero for \"{0}\"")]
    NonPositiveLimit(String),
    #[error("{0} is required")]
    EmptyField(&'static str),
}
