//! CPCB breakpoint tables.
//!
//! Each indexed pollutant maps its concentration (µg/m³) onto the 0-500
//! index through six linear tiers. Tiers are contiguous on integer bounds:
//! every tier starts one unit above the previous tier's upper bound, for
//! both concentration and index.
//!
//! # Example
//!
//! ```
//! use airq_core::breakpoints::{self, PM25};
//! use airq_types::PollutantKind;
//!
//! let table = breakpoints::table_for(PollutantKind::Pm25).unwrap();
//! assert_eq!(table, &PM25);
//! assert_eq!(table.tiers.len(), 6);
//! assert!(breakpoints::table_for(PollutantKind::Co).is_none());
//! ```

use serde::Serialize;

use airq_types::{Breakpoint, PollutantKind};

use crate::error::{Error, Result};

/// Highest value on the index scale.
pub const MAX_INDEX: u16 = 500;

/// Ordered breakpoint tiers for one pollutant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakpointTable {
    /// Pollutant this table applies to.
    pub pollutant: PollutantKind,
    /// Tiers sorted by ascending concentration.
    pub tiers: &'static [Breakpoint],
}

/// PM2.5 (µg/m³).
pub const PM25: BreakpointTable = BreakpointTable {
    pollutant: PollutantKind::Pm25,
    tiers: &[
        Breakpoint::new(0.0, 30.0, 0, 50),
        Breakpoint::new(31.0, 60.0, 51, 100),
        Breakpoint::new(61.0, 90.0, 101, 200),
        Breakpoint::new(91.0, 120.0, 201, 300),
        Breakpoint::new(121.0, 250.0, 301, 400),
        Breakpoint::new(251.0, 350.0, 401, 500),
    ],
};

/// PM10 (µg/m³).
pub const PM10: BreakpointTable = BreakpointTable {
    pollutant: PollutantKind::Pm10,
    tiers: &[
        Breakpoint::new(0.0, 50.0, 0, 50),
        Breakpoint::new(51.0, 100.0, 51, 100),
        Breakpoint::new(101.0, 250.0, 101, 200),
        Breakpoint::new(251.0, 350.0, 201, 300),
        Breakpoint::new(351.0, 430.0, 301, 400),
        Breakpoint::new(431.0, 500.0, 401, 500),
    ],
};

/// NO2 (µg/m³).
pub const NO2: BreakpointTable = BreakpointTable {
    pollutant: PollutantKind::No2,
    tiers: &[
        Breakpoint::new(0.0, 40.0, 0, 50),
        Breakpoint::new(41.0, 80.0, 51, 100),
        Breakpoint::new(81.0, 180.0, 101, 200),
        Breakpoint::new(181.0, 280.0, 201, 300),
        Breakpoint::new(281.0, 400.0, 301, 400),
        Breakpoint::new(401.0, 1000.0, 401, 500),
    ],
};

/// O3 (µg/m³).
pub const O3: BreakpointTable = BreakpointTable {
    pollutant: PollutantKind::O3,
    tiers: &[
        Breakpoint::new(0.0, 50.0, 0, 50),
        Breakpoint::new(51.0, 100.0, 51, 100),
        Breakpoint::new(101.0, 168.0, 101, 200),
        Breakpoint::new(169.0, 208.0, 201, 300),
        Breakpoint::new(209.0, 748.0, 301, 400),
        Breakpoint::new(749.0, 1000.0, 401, 500),
    ],
};

/// All tables, in aggregation order.
pub const ALL_TABLES: [&BreakpointTable; 4] = [&PM25, &PM10, &NO2, &O3];

/// Look up the table for a pollutant. SO2 and CO have none.
#[must_use]
pub fn table_for(pollutant: PollutantKind) -> Option<&'static BreakpointTable> {
    match pollutant {
        PollutantKind::Pm25 => Some(&PM25),
        PollutantKind::Pm10 => Some(&PM10),
        PollutantKind::No2 => Some(&NO2),
        PollutantKind::O3 => Some(&O3),
        PollutantKind::So2 | PollutantKind::Co => None,
    }
}

impl BreakpointTable {
    /// Highest concentration covered by the table. Anything above maps to
    /// [`MAX_INDEX`].
    #[must_use]
    pub fn max_concentration(&self) -> f64 {
        self.tiers
            .last()
            .map_or(0.0, |bp| bp.concentration_high)
    }

    /// The tier whose inclusive range contains `concentration`, if any.
    #[must_use]
    pub fn tier_for(&self, concentration: f64) -> Option<&Breakpoint> {
        self.tiers.iter().find(|bp| bp.contains(concentration))
    }

    /// Check the table's invariants.
    ///
    /// A valid table is non-empty, starts at concentration 0 and index 0,
    /// has `low < high` in every tier, continues each tier exactly one unit
    /// above the previous one, and tops out at [`MAX_INDEX`].
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Error::InvalidTable {
            pollutant: self.pollutant,
            reason,
        };

        let (first, last) = match (self.tiers.first(), self.tiers.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(invalid("table has no tiers".to_string())),
        };

        if first.concentration_low != 0.0 || first.index_low != 0 {
            return Err(invalid("first tier must start at 0".to_string()));
        }
        if last.index_high != MAX_INDEX {
            return Err(invalid(format!(
                "last tier ends at index {}, expected {}",
                last.index_high, MAX_INDEX
            )));
        }

        for (i, bp) in self.tiers.iter().enumerate() {
            if bp.concentration_low >= bp.concentration_high || bp.index_low >= bp.index_high {
                return Err(invalid(format!("tier {} has an empty range", i)));
            }
            if i > 0 {
                let prev = &self.tiers[i - 1];
                if bp.concentration_low != prev.concentration_high + 1.0
                    || bp.index_low != prev.index_high + 1
                {
                    return Err(invalid(format!(
                        "tier {} does not continue tier {}",
                        i,
                        i - 1
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() {
        for table in ALL_TABLES {
            table
                .validate()
                .unwrap_or_else(|e| panic!("{} table invalid: {}", table.pollutant, e));
        }
    }

    #[test]
    fn test_table_for_indexed_pollutants() {
        for kind in PollutantKind::INDEXED {
            let table = table_for(kind).expect("indexed pollutant has a table");
            assert_eq!(table.pollutant, kind);
        }
        assert!(table_for(PollutantKind::So2).is_none());
        assert!(table_for(PollutantKind::Co).is_none());
    }

    #[test]
    fn test_max_concentration() {
        assert_eq!(PM25.max_concentration(), 350.0);
        assert_eq!(PM10.max_concentration(), 500.0);
        assert_eq!(NO2.max_concentration(), 1000.0);
        assert_eq!(O3.max_concentration(), 1000.0);
    }

    #[test]
    fn test_tier_for() {
        assert_eq!(PM25.tier_for(30.0), Some(&PM25.tiers[0]));
        assert_eq!(PM25.tier_for(31.0), Some(&PM25.tiers[1]));
        assert_eq!(PM25.tier_for(30.5), None);
        assert_eq!(PM25.tier_for(351.0), None);
    }

    #[test]
    fn test_validate_rejects_empty() {
        let table = BreakpointTable {
            pollutant: PollutantKind::Pm25,
            tiers: &[],
        };
        assert!(matches!(table.validate(), Err(Error::InvalidTable { .. })));
    }

    #[test]
    fn test_validate_rejects_gap() {
        static TIERS: [Breakpoint; 2] = [
            Breakpoint::new(0.0, 30.0, 0, 50),
            Breakpoint::new(35.0, 60.0, 51, 500),
        ];
        let table = BreakpointTable {
            pollutant: PollutantKind::Pm25,
            tiers: &TIERS,
        };
        let err = table.validate().unwrap_err();
        assert!(err.to_string().contains("does not continue tier 0"));
    }

    #[test]
    fn test_validate_rejects_short_scale() {
        static TIERS: [Breakpoint; 1] = [Breakpoint::new(0.0, 30.0, 0, 50)];
        let table = BreakpointTable {
            pollutant: PollutantKind::O3,
            tiers: &TIERS,
        };
        let err = table.validate().unwrap_err();
        assert!(err.to_string().contains("expected 500"));
    }

    #[test]
    fn test_table_serialization() {
        let json = serde_json::to_value(PM25).unwrap();
        assert_eq!(json["pollutant"], "pm25");
        assert_eq!(json["tiers"].as_array().unwrap().len(), 6);
        assert_eq!(json["tiers"][1]["index_low"], 51);
    }
}
