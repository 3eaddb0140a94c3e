//! Composite index calculation.
//!
//! The overall index is the maximum of the sub-indices of every measured
//! indexed pollutant: the single worst pollutant sets the public-facing
//! severity. With nothing measured the index is 0 (Good) and
//! [`AqiResult::has_data`] is false, so callers can tell "no data" apart from
//! clean air if they need to.

use serde::{Deserialize, Serialize};
use tracing::debug;

use airq_types::{PollutantKind, PollutantReading, SubIndex};

use crate::breakpoints::MAX_INDEX;
use crate::category::AqiCategory;
use crate::subindex::sub_index_in;

/// Result of an index calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiResult {
    /// Overall index, 0-500.
    pub index: u16,
    /// Category for `index`.
    pub category: AqiCategory,
    /// Hex colour token for `category`.
    pub color: String,
    /// Health implications for `category`.
    pub health_implications: String,
    /// Ordered advisory for `category`.
    pub advisory: Vec<String>,
    /// Pollutant whose sub-index set the overall index.
    pub dominant: Option<PollutantKind>,
    /// Sub-index of every measured indexed pollutant, in PM2.5, PM10, NO2, O3 order.
    pub sub_indices: Vec<SubIndex>,
}

impl AqiResult {
    /// Build a result for a bare index, with no per-pollutant detail.
    ///
    /// ```
    /// use airq_core::{AqiCategory, AqiResult};
    ///
    /// let result = AqiResult::from_index(320);
    /// assert_eq!(result.category, AqiCategory::VeryPoor);
    /// assert_eq!(result.advisory.len(), 4);
    /// ```
    #[must_use]
    pub fn from_index(index: u16) -> Self {
        let index = index.min(MAX_INDEX);
        let category = AqiCategory::from_index(i32::from(index));
        Self {
            index,
            category,
            color: category.color().to_string(),
            health_implications: category.health_implications().to_string(),
            advisory: category
                .advisory()
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            dominant: None,
            sub_indices: Vec::new(),
        }
    }

    /// Whether at least one pollutant contributed to the index.
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.sub_indices.is_empty()
    }

    /// Sub-index for one pollutant, if it was measured.
    #[must_use]
    pub fn sub_index(&self, pollutant: PollutantKind) -> Option<u16> {
        self.sub_indices
            .iter()
            .find(|s| s.pollutant == pollutant)
            .map(|s| s.index)
    }
}

/// Sub-indices of every measured indexed pollutant in a reading.
///
/// Pollutants that are absent, zero, negative or non-finite are skipped.
#[must_use]
pub fn sub_indices(reading: &PollutantReading) -> Vec<SubIndex> {
    crate::breakpoints::ALL_TABLES
        .iter()
        .filter_map(|table| {
            reading.measured(table.pollutant).map(|concentration| SubIndex {
                pollutant: table.pollutant,
                concentration,
                index: sub_index_in(concentration, table),
            })
        })
        .collect()
}

/// Compute the overall index, category and guidance for a reading.
///
/// ```
/// use airq_core::{compute_aqi, AqiCategory};
/// use airq_types::{PollutantKind, PollutantReading};
///
/// let reading = PollutantReading::new()
///     .with(PollutantKind::Pm25, 35.6)
///     .with(PollutantKind::Pm10, 58.2)
///     .with(PollutantKind::No2, 42.1)
///     .with(PollutantKind::O3, 68.5);
///
/// let result = compute_aqi(&reading);
/// assert_eq!(result.index, 69);
/// assert_eq!(result.category, AqiCategory::Satisfactory);
/// assert_eq!(result.dominant, Some(PollutantKind::O3));
/// ```
#[must_use]
pub fn compute_aqi(reading: &PollutantReading) -> AqiResult {
    let sub_indices = sub_indices(reading);

    // First pollutant wins ties.
    let mut dominant: Option<&SubIndex> = None;
    for s in &sub_indices {
        if dominant.is_none_or(|d| s.index > d.index) {
            dominant = Some(s);
        }
    }

    let index = dominant.map_or(0, |d| d.index);
    let dominant = dominant.map(|d| d.pollutant);

    let mut result = AqiResult::from_index(index);
    result.dominant = dominant;
    result.sub_indices = sub_indices;

    debug!(
        index = result.index,
        category = %result.category,
        dominant = ?result.dominant,
        measured = result.sub_indices.len(),
        "computed AQI"
    );

    result
}
