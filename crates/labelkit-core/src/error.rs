//! Error handling for LabelKit
//!
//! Provides error types for the layers of the label engine:
//! - Symbol errors (barcode values a symbology cannot encode)
//! - Dimension errors (non-finite or non-positive sizes supplied from outside)
//! - I/O and JSON errors for the file helpers
//!
//! Interactive operations never return these. They are used at the edges
//! (symbol encoding, file helpers, configuration) and are logged or converted
//! into no-ops before they reach the layout engine.

use thiserror::Error;

/// Barcode symbol error type
///
/// Raised when a value cannot be encoded in the requested symbology.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    /// The value contains a character the symbology cannot represent
    #[error("{symbology} cannot encode character {character:?}")]
    InvalidCharacter {
        /// The symbology that rejected the value.
        symbology: String,
        /// The offending character.
        character: char,
    },

    /// The value has a length the symbology does not accept
    #[error("{symbology} expects {expected} characters, got {actual}")]
    InvalidLength {
        /// The symbology that rejected the value.
        symbology: String,
        /// Human readable description of the accepted lengths.
        expected: String,
        /// The length that was supplied.
        actual: usize,
    },

    /// The underlying encoder rejected the value
    #[error("{symbology} encoder failed: {reason}")]
    Encoder {
        /// The symbology that rejected the value.
        symbology: String,
        /// The encoder's description of the failure.
        reason: String,
    },
}

/// Main error type for LabelKit
#[derive(Error, Debug)]
pub enum Error {
    /// Barcode symbol error
    #[error(transparent)]
    Symbol(#[from] SymbolError),

    /// A dimension that must be positive and finite was not
    #[error("Invalid dimension '{name}': {value}")]
    InvalidDimension {
        /// The name of the dimension.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if this is a symbol error
    pub fn is_symbol_error(&self) -> bool {
        matches!(self, Error::Symbol(_))
    }
}

/// Checks that a dimension is positive and finite.
pub fn ensure_dimension(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidDimension {
            name: name.to_string(),
            value,
        })
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
