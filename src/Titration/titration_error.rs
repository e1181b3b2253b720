use super::regime::Regime;
use std::path::PathBuf;
use thiserror::Error;

/// error type for every fallible operation of the titration engine
///
/// Errors are raised where they are detected and propagated to the caller
/// unchanged: they signal either an out-of-domain input or a model that has
/// left its range of validity, never a transient condition.
#[derive(Debug, Error)]
pub enum TitrationError {
    /// Non-physical input: a non-positive volume, concentration or constant,
    /// an empty sample grid, or a quadratic with a negative discriminant.
    #[error("Domain error: {0}")]
    DomainError(String),

    /// The equilibrium quadratic of a regime model has no unique physically
    /// valid root: no root, or both, keep every equilibrium concentration of
    /// the ICE table non-negative.
    #[error(
        "Model inconsistency in regime {regime} at V = {volume:.6e} L: roots {roots:?} give no unique physical concentration"
    )]
    ModelInconsistencyError {
        regime: Regime,
        volume: f64,
        roots: (f64, f64),
    },

    /// A task file could not be read.
    #[error("I/O error at path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A task file is not valid JSON or does not match the expected structure.
    #[error("Failed to deserialize titration task: {0}")]
    DeserializationError(#[from] serde_json::Error),
}

impl TitrationError {
    pub(crate) fn domain(msg: impl Into<String>) -> Self {
        TitrationError::DomainError(msg.into())
    }
}

/// checks that a physical quantity is finite and strictly positive
pub(crate) fn require_positive(name: &str, value: f64) -> Result<f64, TitrationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TitrationError::domain(format!(
            "{} must be a finite positive number, got {}",
            name, value
        )))
    }
}

/// checks that a physical quantity is finite and not negative
pub(crate) fn require_non_negative(name: &str, value: f64) -> Result<f64, TitrationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(TitrationError::domain(format!(
            "{} must be a finite non-negative number, got {}",
            name, value
        )))
    }
}
