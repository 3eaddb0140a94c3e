//! AQI categories, colours and health guidance.
//!
//! This module maps an integer index onto the six CPCB bands and carries the
//! fixed texts shown to the public for each band.
//!
//! # Example
//!
//! ```
//! use airq_core::AqiCategory;
//!
//! let category = AqiCategory::from_index(150);
//! assert_eq!(category, AqiCategory::Moderate);
//! assert_eq!(category.color(), "#FF7E00");
//!
//! for (n, advice) in category.advisory().iter().enumerate() {
//!     println!("{}. {}", n + 1, advice);
//! }
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

/// CPCB air quality category.
///
/// Variants are ordered by severity, so `category >= AqiCategory::Poor`
/// reads naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AqiCategory {
    /// Index 0-50.
    Good,
    /// Index 51-100.
    Satisfactory,
    /// Index 101-200.
    Moderate,
    /// Index 201-300.
    Poor,
    /// Index 301-400.
    #[serde(rename = "Very Poor")]
    VeryPoor,
    /// Index 401 and above.
    Severe,
}

impl AqiCategory {
    /// Every category, least to most severe.
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Satisfactory,
        AqiCategory::Moderate,
        AqiCategory::Poor,
        AqiCategory::VeryPoor,
        AqiCategory::Severe,
    ];

    /// Resolve the category for an index.
    ///
    /// Total over all integers: anything below 0 is Good and anything above
    /// the 500 ceiling is Severe.
    #[must_use]
    pub fn from_index(index: i32) -> Self {
        match index {
            i32::MIN..=50 => AqiCategory::Good,
            51..=100 => AqiCategory::Satisfactory,
            101..=200 => AqiCategory::Moderate,
            201..=300 => AqiCategory::Poor,
            301..=400 => AqiCategory::VeryPoor,
            _ => AqiCategory::Severe,
        }
    }

    /// Inclusive index range. Severe is open-ended above 401.
    #[must_use]
    pub fn index_range(&self) -> (u16, Option<u16>) {
        match self {
            AqiCategory::Good => (0, Some(50)),
            AqiCategory::Satisfactory => (51, Some(100)),
            AqiCategory::Moderate => (101, Some(200)),
            AqiCategory::Poor => (201, Some(300)),
            AqiCategory::VeryPoor => (301, Some(400)),
            AqiCategory::Severe => (401, None),
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Satisfactory => "Satisfactory",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::Poor => "Poor",
            AqiCategory::VeryPoor => "Very Poor",
            AqiCategory::Severe => "Severe",
        }
    }

    /// Hex colour token for the category.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            AqiCategory::Good => "#00E400",
            AqiCategory::Satisfactory => "#FFFF00",
            AqiCategory::Moderate => "#FF7E00",
            AqiCategory::Poor => "#FF0000",
            AqiCategory::VeryPoor => "#99004C",
            AqiCategory::Severe => "#7E0023",
        }
    }

    /// Colour as an RGB triple, for terminals and image output.
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            AqiCategory::Good => (0x00, 0xE4, 0x00),
            AqiCategory::Satisfactory => (0xFF, 0xFF, 0x00),
            AqiCategory::Moderate => (0xFF, 0x7E, 0x00),
            AqiCategory::Poor => (0xFF, 0x00, 0x00),
            AqiCategory::VeryPoor => (0x99, 0x00, 0x4C),
            AqiCategory::Severe => (0x7E, 0x00, 0x23),
        }
    }

    /// Health implications for the category.
    #[must_use]
    pub fn health_implications(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Minimal impact. Air quality is satisfactory.",
            AqiCategory::Satisfactory => "Minor breathing discomfort to sensitive people.",
            AqiCategory::Moderate => "Breathing discomfort to people with lung, heart disease.",
            AqiCategory::Poor => "Breathing discomfort to most people on prolonged exposure.",
            AqiCategory::VeryPoor => "Respiratory illness on prolonged exposure.",
            AqiCategory::Severe => {
                "Affects healthy people and seriously impacts those with existing diseases."
            }
        }
    }

    /// Ordered public advisory for the category.
    #[must_use]
    pub fn advisory(&self) -> &'static [&'static str] {
        match self {
            AqiCategory::Good => &[
                "Enjoy outdoor activities",
                "Air quality is ideal for outdoor exercise",
            ],
            AqiCategory::Satisfactory => &[
                "Sensitive individuals should limit prolonged outdoor exertion",
                "General public can carry on normal activities",
            ],
            AqiCategory::Moderate => &[
                "People with lung disease, children and elderly should limit prolonged outdoor activities",
                "General public should reduce prolonged or heavy exertion",
            ],
            AqiCategory::Poor => &[
                "People with lung disease, children and elderly should avoid outdoor activities",
                "General public should minimize outdoor exertion",
                "Consider wearing N95 masks outdoors",
            ],
            AqiCategory::VeryPoor => &[
                "Everyone should avoid all outdoor physical activities",
                "People with lung/heart disease should remain indoors",
                "Wear N95 masks if you must go out",
                "Use air purifiers indoors",
            ],
            AqiCategory::Severe => &[
                "Emergency conditions. Everyone should avoid outdoor activities",
                "Remain indoors and keep windows/doors closed",
                "Run air purifiers continuously",
                "Seek medical help if experiencing breathing difficulties",
            ],
        }
    }

    /// Whether `index` is worse than the top of `self`'s band.
    ///
    /// Useful for alerting: `AqiCategory::Satisfactory.exceeded_by(120)` is
    /// true. Severe has no upper bound and is never exceeded.
    #[must_use]
    pub fn exceeded_by(&self, index: u16) -> bool {
        match self.index_range() {
            (_, Some(high)) => index > high,
            (_, None) => false,
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_values() {
        assert_eq!(AqiCategory::from_index(0), AqiCategory::Good);
        assert_eq!(AqiCategory::from_index(50), AqiCategory::Good);
        assert_eq!(AqiCategory::from_index(51), AqiCategory::Satisfactory);
        assert_eq!(AqiCategory::from_index(100), AqiCategory::Satisfactory);
        assert_eq!(AqiCategory::from_index(101), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_index(200), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_index(201), AqiCategory::Poor);
        assert_eq!(AqiCategory::from_index(300), AqiCategory::Poor);
        assert_eq!(AqiCategory::from_index(301), AqiCategory::VeryPoor);
        assert_eq!(AqiCategory::from_index(400), AqiCategory::VeryPoor);
        assert_eq!(AqiCategory::from_index(401), AqiCategory::Severe);
        assert_eq!(AqiCategory::from_index(500), AqiCategory::Severe);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(AqiCategory::from_index(-1), AqiCategory::Good);
        assert_eq!(AqiCategory::from_index(i32::MIN), AqiCategory::Good);
        assert_eq!(AqiCategory::from_index(501), AqiCategory::Severe);
        assert_eq!(AqiCategory::from_index(i32::MAX), AqiCategory::Severe);
    }

    #[test]
    fn test_ranges_agree_with_from_index() {
        for category in AqiCategory::ALL {
            let (low, high) = category.index_range();
            assert_eq!(AqiCategory::from_index(i32::from(low)), category);
            if let Some(high) = high {
                assert_eq!(AqiCategory::from_index(i32::from(high)), category);
            }
        }
    }

    #[test]
    fn test_severity_ordering() {
        assert!(AqiCategory::Severe > AqiCategory::VeryPoor);
        assert!(AqiCategory::Satisfactory > AqiCategory::Good);
        let mut sorted = AqiCategory::ALL;
        sorted.sort();
        assert_eq!(sorted, AqiCategory::ALL);
    }

    #[test]
    fn test_colors() {
        assert_eq!(AqiCategory::Good.color(), "#00E400");
        assert_eq!(AqiCategory::Satisfactory.color(), "#FFFF00");
        assert_eq!(AqiCategory::Moderate.color(), "#FF7E00");
        assert_eq!(AqiCategory::Poor.color(), "#FF0000");
        assert_eq!(AqiCategory::VeryPoor.color(), "#99004C");
        assert_eq!(AqiCategory::Severe.color(), "#7E0023");
    }

    #[test]
    fn test_rgb_matches_hex() {
        for category in AqiCategory::ALL {
            let (r, g, b) = category.rgb();
            assert_eq!(format!("#{:02X}{:02X}{:02X}", r, g, b), category.color());
        }
    }

    #[test]
    fn test_advisory_lengths() {
        assert_eq!(AqiCategory::Good.advisory().len(), 2);
        assert_eq!(AqiCategory::Satisfactory.advisory().len(), 2);
        assert_eq!(AqiCategory::Moderate.advisory().len(), 2);
        assert_eq!(AqiCategory::Poor.advisory().len(), 3);
        assert_eq!(AqiCategory::VeryPoor.advisory().len(), 4);
        assert_eq!(AqiCategory::Severe.advisory().len(), 4);
        assert_eq!(
            AqiCategory::Poor.advisory()[2],
            "Consider wearing N95 masks outdoors"
        );
    }

    #[test]
    fn test_health_implications() {
        assert!(AqiCategory::Good.health_implications().starts_with("Minimal impact"));
        assert_eq!(
            AqiCategory::VeryPoor.health_implications(),
            "Respiratory illness on prolonged exposure."
        );
    }

    #[test]
    fn test_exceeded_by() {
        assert!(!AqiCategory::Good.exceeded_by(50));
        assert!(AqiCategory::Good.exceeded_by(51));
        assert!(!AqiCategory::Moderate.exceeded_by(200));
        assert!(AqiCategory::Moderate.exceeded_by(201));
        assert!(!AqiCategory::Severe.exceeded_by(u16::MAX));
    }

    #[test]
    fn test_display_and_serialization() {
        assert_eq!(AqiCategory::VeryPoor.to_string(), "Very Poor");
        assert_eq!(
            serde_json::to_string(&AqiCategory::VeryPoor).unwrap(),
            "\"Very Poor\""
        );
        let parsed: AqiCategory = serde_json::from_str("\"Satisfactory\"").unwrap();
        assert_eq!(parsed, AqiCategory::Satisfactory);
    }
}
