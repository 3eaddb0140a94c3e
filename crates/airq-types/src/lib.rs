//! Platform-agnostic types for CPCB air quality index calculations.
//!
//! This crate provides the value types shared by the index engine
//! (airq-core), the HTTP service and the command-line tool.
//!
//! # Features
//!
//! - Pollutant identifiers with provider alias parsing
//! - Pollutant readings with explicit "not measured" semantics
//! - Breakpoint tiers and per-pollutant sub-indices
//! - Error types for parsing
//!
//! # Example
//!
//! ```
//! use airq_types::{PollutantKind, PollutantReading};
//!
//! let reading = PollutantReading::from_measurements([("pm25", 35.6), ("o3", 0.0)]);
//! assert_eq!(reading.measured(PollutantKind::Pm25), Some(35.6));
//! assert_eq!(reading.measured(PollutantKind::O3), None);
//! ```

pub mod error;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use types::{Breakpoint, Measurement, PollutantKind, PollutantReading, SubIndex};
