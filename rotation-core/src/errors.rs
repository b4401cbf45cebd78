//! Error types for rotation conversions.
//!
//! This module provides a unified error type [`RotationError`] covering the failure
//! modes of the Euler-angle engine: unknown or malformed conventions, angle triples of
//! the wrong length, and matrices that are not proper rotations.
//!
//! # Error Categories
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`UnknownConvention`](RotationError::UnknownConvention) | Name or alias not in the registry |
//! | [`InvalidTripleLength`](RotationError::InvalidTripleLength) | Angle slice with length other than 3 |
//! | [`NonOrthonormalMatrix`](RotationError::NonOrthonormalMatrix) | Input matrix rejected before decomposition |
//! | [`UnresolvedConvention`](RotationError::UnresolvedConvention) | Broken parent chain |
//! | [`DuplicateConvention`](RotationError::DuplicateConvention) | Alias registered twice |
//! | [`InvalidConvention`](RotationError::InvalidConvention) | Malformed axis code or reparameterization |
//!
//! Gimbal lock is not an error. A rotation at the singularity has a non-unique angle
//! representation and the decomposer returns one of them.
//!
//! # Usage
//!
//! ```
//! use rotation_core::{RotationError, RotationResult};
//!
//! fn triple(values: &[f64]) -> RotationResult<[f64; 3]> {
//!     match values {
//!         [a, b, c] => Ok([*a, *b, *c]),
//!         _ => Err(RotationError::invalid_triple_length(values.len())),
//!     }
//! }
//!
//! assert!(triple(&[1.0, 2.0]).is_err());
//! ```

use thiserror::Error;

/// Unified error type for rotation conversions.
///
/// Use the constructor methods ([`unknown_convention`](Self::unknown_convention),
/// [`invalid_triple_length`](Self::invalid_triple_length), etc.) for consistent error creation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RotationError {
    /// No convention name or alias matched (case-insensitive exact match).
    #[error("Unknown Euler angles convention: {name}")]
    UnknownConvention { name: String },

    /// An angle triple was built from a slice that does not hold exactly three values.
    #[error("Euler angles triple must have exactly 3 elements, got {len}")]
    InvalidTripleLength { len: usize },

    /// The matrix is not orthonormal with determinant +1 within tolerance.
    #[error("Matrix is not a proper rotation: deviation {deviation:e} exceeds tolerance {tolerance:e}")]
    NonOrthonormalMatrix { deviation: f64, tolerance: f64 },

    /// Walking the parent chain of a derived convention did not reach a base convention.
    #[error("Unresolved convention {convention}: {message}")]
    UnresolvedConvention { convention: String, message: String },

    /// An alias is already claimed by another convention.
    #[error("Convention alias already registered: {alias}")]
    DuplicateConvention { alias: String },

    /// The convention definition itself is malformed.
    #[error("Invalid convention {name}: {message}")]
    InvalidConvention { name: String, message: String },
}

/// Convenience alias for `Result<T, RotationError>`.
pub type RotationResult<T> = Result<T, RotationError>;

impl RotationError {
    /// Creates an [`UnknownConvention`](Self::UnknownConvention) error.
    pub fn unknown_convention(name: &str) -> Self {
        Self::UnknownConvention {
            name: name.to_string(),
        }
    }

    /// Creates an [`InvalidTripleLength`](Self::InvalidTripleLength) error.
    pub fn invalid_triple_length(len: usize) -> Self {
        Self::InvalidTripleLength { len }
    }

    /// Creates a [`NonOrthonormalMatrix`](Self::NonOrthonormalMatrix) error.
    pub fn non_orthonormal(deviation: f64, tolerance: f64) -> Self {
        Self::NonOrthonormalMatrix {
            deviation,
            tolerance,
        }
    }

    /// Creates an [`UnresolvedConvention`](Self::UnresolvedConvention) error.
    pub fn unresolved_convention(convention: &str, reason: &str) -> Self {
        Self::UnresolvedConvention {
            convention: convention.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates a [`DuplicateConvention`](Self::DuplicateConvention) error.
    pub fn duplicate_convention(alias: &str) -> Self {
        Self::DuplicateConvention {
            alias: alias.to_string(),
        }
    }

    /// Creates an [`InvalidConvention`](Self::InvalidConvention) error.
    pub fn invalid_convention(name: &str, reason: &str) -> Self {
        Self::InvalidConvention {
            name: name.to_string(),
            message: reason.to_string(),
        }
    }

    /// Returns `true` if retrying might succeed.
    ///
    /// Every operation is a pure function of its inputs, so nothing is.
    pub fn is_recoverable(&self) -> bool {
        false
    }
}
