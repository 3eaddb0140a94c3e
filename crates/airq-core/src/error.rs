//! Error types for airq-core.
//!
//! The index engine itself is total: [`crate::compute_aqi`] never fails, and
//! out-of-range concentrations are floored or clamped rather than rejected.
//! Errors only arise at the edges, when a caller asks for something the
//! engine cannot answer:
//!
//! | Error | Cause |
//! |-------|-------|
//! | [`Error::NotIndexed`] | Sub-index requested for SO2 or CO, which have no breakpoint table |
//! | [`Error::InvalidTable`] | A breakpoint table breaks ordering or contiguity |
//! | [`Error::Parse`] | A pollutant name could not be parsed |

use airq_types::{ParseError, PollutantKind};
use thiserror::Error;

/// Errors that can occur in airq-core.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The pollutant is carried for display only and has no breakpoints.
    #[error("{0} has no breakpoint table and does not contribute to the index")]
    NotIndexed(PollutantKind),

    /// A breakpoint table violates its invariants.
    #[error("Invalid breakpoint table for {pollutant}: {reason}")]
    InvalidTable {
        /// Pollutant the table belongs to.
        pollutant: PollutantKind,
        /// Which invariant failed.
        reason: String,
    },

    /// Parsing a pollutant name or value failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result type alias using airq-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;
