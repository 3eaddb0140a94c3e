//! Air quality index engine following the CPCB (India) National AQI.
//!
//! This crate turns pollutant concentrations into a single 0-500 index, a
//! health category, a display colour and an ordered public advisory.
//!
//! # Features
//!
//! - **Breakpoint tables**: six-tier CPCB tables for PM2.5, PM10, NO2 and O3
//! - **Sub-indices**: piecewise-linear interpolation with half-up rounding
//! - **Aggregation**: overall index is the worst sub-index, with the dominant pollutant
//! - **Categories**: Good through Severe, with colours and health guidance
//! - **Validation**: warnings for negative, zero, non-finite and out-of-table inputs
//!
//! # Indexed Pollutants
//!
//! | Pollutant | Unit | Table ceiling |
//! |-----------|------|---------------|
//! | PM2.5 | µg/m³ | 350 |
//! | PM10 | µg/m³ | 500 |
//! | NO2 | µg/m³ | 1000 |
//! | O3 | µg/m³ | 1000 |
//!
//! SO2 (µg/m³) and CO (mg/m³) are accepted and carried through for display,
//! but have no breakpoints and never affect the index.
//!
//! # Quick Start
//!
//! ```
//! use airq_core::{compute_aqi, AqiCategory};
//! use airq_types::{PollutantKind, PollutantReading};
//!
//! let reading = PollutantReading::new()
//!     .with(PollutantKind::Pm25, 48.0)
//!     .with(PollutantKind::Pm10, 175.0);
//!
//! let result = compute_aqi(&reading);
//! assert_eq!(result.index, 150);
//! assert_eq!(result.category, AqiCategory::Moderate);
//! assert_eq!(result.dominant, Some(PollutantKind::Pm10));
//!
//! for advice in &result.advisory {
//!     println!("- {}", advice);
//! }
//! ```
//!
//! The engine is pure and synchronous. Every function here is safe to call
//! from any thread and never fails on numeric input.

pub mod aqi;
pub mod breakpoints;
pub mod category;
pub mod error;
pub mod subindex;
pub mod validation;

// Re-export the data model so most callers only need this crate
pub use airq_types::types;
pub use airq_types::{
    Breakpoint, Measurement, ParseError, PollutantKind, PollutantReading, SubIndex,
};

// Core exports
pub use aqi::{AqiResult, compute_aqi, sub_indices};
pub use breakpoints::{BreakpointTable, MAX_INDEX, table_for};
pub use category::AqiCategory;
pub use error::{Error, Result};
pub use subindex::{sub_index, sub_index_by_name, sub_index_in};
pub use validation::{ReadingValidator, ValidationResult, ValidationWarning, ValidatorConfig};
