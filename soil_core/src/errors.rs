//! # Error Types
//!
//! Structured error types for soil_core. Every error carries enough context
//! (field, depth, method, offending value) to locate the bad input or the
//! formula that rejected it.
//!
//! ## Taxonomy
//!
//! - **Configuration** (`InvalidInput`, `MissingField`): raised by constructors,
//!   before any analysis runs.
//! - **Domain** (`DomainError`): an empirical formula is undefined for the
//!   value it was given at one depth.
//! - **Numerical** (`NonConvergence`): an iterative correction did not settle
//!   within its iteration cap.
//! - **State** (`NegativeEffectiveStress`): the stress model produced a
//!   physically impossible value for the given profile.
//!
//! ## Example
//!
//! ```rust
//! use soil_core::errors::{CalcError, CalcResult};
//!
//! fn validate_thickness(thickness: f64) -> CalcResult<()> {
//!     if !(thickness > 0.0) {
//!         return Err(CalcError::invalid_input(
//!             "thickness",
//!             thickness.to_string(),
//!             "Layer thickness must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_thickness(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for soil_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for profile construction and liquefaction analysis.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, non-finite, empty collection)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// An empirical formula is undefined for the supplied value
    #[error("Domain error in {method} at depth {depth:?}: {field} = {value} - {reason}")]
    DomainError {
        method: String,
        depth: Option<f64>,
        field: String,
        value: f64,
        reason: String,
    },

    /// An iterative solver exceeded its iteration cap
    #[error("{method} did not converge at depth {depth:?} after {iterations} iterations (last change {residual:e})")]
    NonConvergence {
        method: String,
        depth: Option<f64>,
        iterations: usize,
        residual: f64,
    },

    /// Pore pressure exceeds total stress at a depth
    #[error("Negative effective stress {value} at depth {depth}")]
    NegativeEffectiveStress { depth: f64, value: f64 },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a DomainError without depth context
    pub fn domain(method: impl Into<String>, field: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        CalcError::DomainError {
            method: method.into(),
            depth: None,
            field: field.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Create a NonConvergence error without depth context
    pub fn non_convergence(method: impl Into<String>, iterations: usize, residual: f64) -> Self {
        CalcError::NonConvergence {
            method: method.into(),
            depth: None,
            iterations,
            residual,
        }
    }

    /// Attach the analysed depth to errors raised by depth-agnostic formulas.
    ///
    /// Errors that already carry a depth, or that have no depth slot, pass
    /// through unchanged.
    pub fn at_depth(self, at: f64) -> Self {
        match self {
            CalcError::DomainError { method, depth: None, field, value, reason } => CalcError::DomainError {
                method,
                depth: Some(at),
                field,
                value,
                reason,
            },
            CalcError::NonConvergence { method, depth: None, iterations, residual } => CalcError::NonConvergence {
                method,
                depth: Some(at),
                iterations,
                residual,
            },
            other => other,
        }
    }

    /// Whether this error only invalidates the depth it was raised at.
    ///
    /// Configuration errors invalidate the whole analysis.
    pub fn is_depth_local(&self) -> bool {
        matches!(
            self,
            CalcError::DomainError { .. }
                | CalcError::NonConvergence { .. }
                | CalcError::NegativeEffectiveStress { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::DomainError { .. } => "DOMAIN_ERROR",
            CalcError::NonConvergence { .. } => "NON_CONVERGENCE",
            CalcError::NegativeEffectiveStress { .. } => "NEGATIVE_EFFECTIVE_STRESS",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
