//! # Error Types
//!
//! Errors raised by the value model itself. Validation failures live in
//! `typeshape-schema`; this crate only fails when a value cannot cross a
//! representation boundary or a kind token is not recognised.

use thiserror::Error;

/// A value could not be converted to JSON.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// JSON has no representation for NaN or infinities.
    #[error("number {0} has no JSON representation")]
    NonFiniteNumber(f64),

    /// Functions and symbols cannot be serialized.
    #[error("value of kind '{kind}' at '{path}' has no JSON representation")]
    Unrepresentable {
        /// Runtime kind of the offending value.
        kind: String,
        /// Dotted path to the offending value.
        path: String,
    },
}

/// A kind token did not name a primitive kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown kind token '{0}'")]
pub struct UnknownKind(pub String);
