//! Error types for parsing pollutant data in airq-types.

use thiserror::Error;

/// Errors that can occur when parsing pollutant names or concentrations.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The pollutant name is not one of the tracked pollutants.
    #[error("Unknown pollutant: {0}")]
    UnknownPollutant(String),

    /// The concentration text could not be read as a number.
    #[error("Invalid concentration '{0}': expected a number in µg/m³")]
    InvalidConcentration(String),
}

/// Result type alias using airq-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
