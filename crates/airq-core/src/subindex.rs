//! Per-pollutant sub-index calculation.
//!
//! A concentration is located in its breakpoint tier and linearly
//! interpolated onto that tier's index range:
//!
//! ```text
//! I = (I_hi - I_lo) / (C_hi - C_lo) * (C - C_lo) + I_lo
//! ```
//!
//! rounded half-up to an integer.
//!
//! Floor and ceiling rules keep the function total:
//! - negative or NaN concentrations give 0,
//! - concentrations above the last tier give [`MAX_INDEX`] (no extrapolation),
//! - fractional concentrations that fall between two integer-bounded tiers
//!   (PM2.5 30.4, say) are interpolated across the gap from the lower tier's
//!   top to the upper tier's bottom, so the mapping stays monotone.
//!
//! # Example
//!
//! ```
//! use airq_core::sub_index;
//! use airq_types::PollutantKind;
//!
//! assert_eq!(sub_index(30.0, PollutantKind::Pm25).unwrap(), 50);
//! assert_eq!(sub_index(31.0, PollutantKind::Pm25).unwrap(), 51);
//! assert_eq!(sub_index(10_000.0, PollutantKind::No2).unwrap(), 500);
//! ```

use tracing::trace;

use airq_types::{Breakpoint, PollutantKind};

use crate::breakpoints::{self, BreakpointTable, MAX_INDEX};
use crate::error::{Error, Result};

/// Sub-index of `concentration` for an indexed pollutant.
///
/// # Errors
///
/// Returns [`Error::NotIndexed`] for SO2 and CO.
pub fn sub_index(concentration: f64, pollutant: PollutantKind) -> Result<u16> {
    let table = breakpoints::table_for(pollutant).ok_or(Error::NotIndexed(pollutant))?;
    Ok(sub_index_in(concentration, table))
}

/// Sub-index for a pollutant given by name (`"pm2.5"`, `"no2"`, ...).
///
/// # Errors
///
/// Returns [`Error::Parse`] for unknown names and [`Error::NotIndexed`] for
/// SO2 and CO.
pub fn sub_index_by_name(concentration: f64, pollutant: &str) -> Result<u16> {
    let kind: PollutantKind = pollutant.parse()?;
    sub_index(concentration, kind)
}

/// Sub-index of `concentration` against an explicit table.
///
/// Never fails and always returns a value in `0..=500`.
#[must_use]
pub fn sub_index_in(concentration: f64, table: &BreakpointTable) -> u16 {
    if concentration.is_nan() || concentration < 0.0 {
        return 0;
    }

    let mut previous: Option<&Breakpoint> = None;
    for bp in table.tiers {
        if bp.contains(concentration) {
            trace!(
                pollutant = %table.pollutant,
                concentration,
                tier_low = bp.concentration_low,
                tier_high = bp.concentration_high,
                "matched breakpoint tier"
            );
            return interpolate(
                concentration,
                (bp.concentration_low, bp.index_low),
                (bp.concentration_high, bp.index_high),
            );
        }

        if concentration < bp.concentration_low {
            // Between the previous tier's top and this tier's bottom.
            return match previous {
                Some(prev) => interpolate(
                    concentration,
                    (prev.concentration_high, prev.index_high),
                    (bp.concentration_low, bp.index_low),
                ),
                None => bp.index_low,
            };
        }

        previous = Some(bp);
    }

    MAX_INDEX
}

/// Linear interpolation between two `(concentration, index)` points.
fn interpolate(concentration: f64, low: (f64, u16), high: (f64, u16)) -> u16 {
    let (c_lo, i_lo) = (low.0, f64::from(low.1));
    let (c_hi, i_hi) = (high.0, f64::from(high.1));

    let value = if c_hi > c_lo {
        (i_hi - i_lo) / (c_hi - c_lo) * (concentration - c_lo) + i_lo
    } else {
        i_hi
    };

    round_half_up(value).clamp(0.0, f64::from(MAX_INDEX)) as u16
}

/// Round to the nearest integer, halves going up.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
