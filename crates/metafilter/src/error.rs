//! Error types for the metafilter crate.
//!
//! Evaluating a filter never fails. These errors only come from the
//! checked constructors, for callers who want bad configuration rejected
//! up front instead of silently matching nothing.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur when building filters through checked entry points.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Cost bounds that can never accept a record (or are not numbers).
    #[error("invalid cost range: min {min} must be below max {max}")]
    InvalidCostRange { min: f32, max: f32 },

    /// An element of a version list could not be parsed as an integer.
    #[error("invalid version '{input}'")]
    InvalidVersion {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

/// Result type for metafilter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
