//! Plausibility checks for pollutant readings.
//!
//! The index engine accepts anything: negative values floor to 0, values
//! past the last breakpoint clamp to 500 and zero means "not measured". This
//! module surfaces those silent corrections as warnings so callers can tell
//! a clean reading apart from one that was quietly repaired.
//!
//! # Example
//!
//! ```
//! use airq_core::ReadingValidator;
//! use airq_types::{PollutantKind, PollutantReading};
//!
//! let validator = ReadingValidator::default();
//!
//! let reading = PollutantReading::new()
//!     .with(PollutantKind::Pm25, 35.6)
//!     .with(PollutantKind::Pm10, -4.0);
//!
//! let result = validator.validate(&reading);
//! assert!(result.is_valid);
//! assert!(result.has_warnings());
//! ```

use serde::{Deserialize, Serialize};

use airq_types::{PollutantKind, PollutantReading};

use crate::breakpoints;

/// Warning types for validation issues.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new warning types
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ValidationWarning {
    /// Concentration is negative and is treated as not measured.
    Negative { pollutant: PollutantKind, value: f64 },
    /// Concentration is NaN or infinite.
    NotFinite { pollutant: PollutantKind },
    /// Concentration is zero and is treated as not measured.
    Zero { pollutant: PollutantKind },
    /// Concentration is above the last breakpoint; its sub-index is clamped.
    BeyondBreakpoints {
        pollutant: PollutantKind,
        value: f64,
        max: f64,
    },
    /// Concentration is above the plausibility ceiling for the pollutant.
    Implausible {
        pollutant: PollutantKind,
        value: f64,
        max: f64,
    },
    /// No indexed pollutant was measured, so the index defaults to 0.
    NoIndexedData,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationWarning::Negative { pollutant, value } => {
                write!(f, "{} {} is negative and was ignored", pollutant, value)
            }
            ValidationWarning::NotFinite { pollutant } => {
                write!(f, "{} is not a finite number", pollutant)
            }
            ValidationWarning::Zero { pollutant } => {
                write!(f, "{} is zero and was treated as not measured", pollutant)
            }
            ValidationWarning::BeyondBreakpoints {
                pollutant,
                value,
                max,
            } => write!(
                f,
                "{} {} {} exceeds the last breakpoint {}; sub-index clamped to 500",
                pollutant,
                value,
                pollutant.unit(),
                max
            ),
            ValidationWarning::Implausible {
                pollutant,
                value,
                max,
            } => write!(
                f,
                "{} {} {} exceeds plausible maximum {} {}",
                pollutant,
                value,
                pollutant.unit(),
                max,
                pollutant.unit()
            ),
            ValidationWarning::NoIndexedData => {
                write!(f, "No indexed pollutant measured - index defaults to 0")
            }
        }
    }
}

/// Result of validating a reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// Whether the reading passed validation.
    pub is_valid: bool,
    /// List of warnings (may be non-empty even if valid).
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Create a successful validation result with no warnings.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            warnings: Vec::new(),
        }
    }

    /// Create an invalid result with the given warnings.
    pub fn invalid(warnings: Vec<ValidationWarning>) -> Self {
        Self {
            is_valid: false,
            warnings,
        }
    }

    /// Create a valid result with warnings.
    pub fn valid_with_warnings(warnings: Vec<ValidationWarning>) -> Self {
        Self {
            is_valid: true,
            warnings,
        }
    }

    /// Check if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Warnings rendered as display strings.
    pub fn messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

/// Configuration for reading validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Plausibility ceiling for pollutants measured in µg/m³.
    pub max_plausible: f64,
    /// Plausibility ceiling for CO (mg/m³).
    pub co_max_plausible: f64,
    /// Warn when a pollutant is present but exactly zero.
    pub warn_on_zero: bool,
    /// Warn when no indexed pollutant was measured.
    pub warn_on_empty: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_plausible: 2000.0,
            co_max_plausible: 100.0,
            warn_on_zero: true,
            warn_on_empty: true,
        }
    }
}

impl ValidatorConfig {
    /// Create new validator config with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the plausibility ceiling for µg/m³ pollutants.
    #[must_use]
    pub fn max_plausible(mut self, max: f64) -> Self {
        self.max_plausible = max;
        self
    }

    /// Set the plausibility ceiling for CO (mg/m³).
    #[must_use]
    pub fn co_max_plausible(mut self, max: f64) -> Self {
        self.co_max_plausible = max;
        self
    }

    /// Set whether to warn on zero concentrations.
    #[must_use]
    pub fn warn_on_zero(mut self, warn: bool) -> Self {
        self.warn_on_zero = warn;
        self
    }

    /// Set whether to warn when nothing indexable was measured.
    #[must_use]
    pub fn warn_on_empty(mut self, warn: bool) -> Self {
        self.warn_on_empty = warn;
        self
    }

    /// Relaxed config: only non-finite values and breakpoint overruns are reported.
    pub fn relaxed() -> Self {
        Self {
            max_plausible: f64::INFINITY,
            co_max_plausible: f64::INFINITY,
            warn_on_zero: false,
            warn_on_empty: false,
        }
    }

    /// Plausibility ceiling that applies to `pollutant`.
    pub fn ceiling_for(&self, pollutant: PollutantKind) -> f64 {
        match pollutant {
            PollutantKind::Co => self.co_max_plausible,
            _ => self.max_plausible,
        }
    }
}

/// Validator for pollutant readings.
#[derive(Debug, Clone, Default)]
pub struct ReadingValidator {
    config: ValidatorConfig,
}

impl ReadingValidator {
    /// Create a new validator with the given configuration.
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a pollutant reading.
    ///
    /// Only non-finite values make a reading invalid; everything else the
    /// engine can absorb and is reported as a warning.
    pub fn validate(&self, reading: &PollutantReading) -> ValidationResult {
        let mut warnings = Vec::new();

        for pollutant in PollutantKind::ALL {
            let Some(value) = reading.get(pollutant) else {
                continue;
            };

            if !value.is_finite() {
                warnings.push(ValidationWarning::NotFinite { pollutant });
                continue;
            }

            if value < 0.0 {
                warnings.push(ValidationWarning::Negative { pollutant, value });
                continue;
            }

            if value == 0.0 {
                if self.config.warn_on_zero {
                    warnings.push(ValidationWarning::Zero { pollutant });
                }
                continue;
            }

            if let Some(table) = breakpoints::table_for(pollutant)
                && value > table.max_concentration()
            {
                warnings.push(ValidationWarning::BeyondBreakpoints {
                    pollutant,
                    value,
                    max: table.max_concentration(),
                });
            }

            let ceiling = self.config.ceiling_for(pollutant);
            if value > ceiling {
                warnings.push(ValidationWarning::Implausible {
                    pollutant,
                    value,
                    max: ceiling,
                });
            }
        }

        if self.config.warn_on_empty && !reading.has_indexed_data() {
            warnings.push(ValidationWarning::NoIndexedData);
        }

        if warnings.is_empty() {
            ValidationResult::valid()
        } else if warnings
            .iter()
            .any(|w| matches!(w, ValidationWarning::NotFinite { .. }))
        {
            ValidationResult::invalid(warnings)
        } else {
            ValidationResult::valid_with_warnings(warnings)
        }
    }

    /// Quick check if a single concentration is usable as-is.
    pub fn is_value_plausible(&self, pollutant: PollutantKind, value: f64) -> bool {
        value.is_finite() && value > 0.0 && value <= self.config.ceiling_for(pollutant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_reading(pm25: f64, pm10: f64) -> PollutantReading {
        PollutantReading::new()
            .with(PollutantKind::Pm25, pm25)
            .with(PollutantKind::Pm10, pm10)
    }

    #[test]
    fn test_valid_reading() {
        let validator = ReadingValidator::default();
        let result = validator.validate(&make_reading(35.6, 58.2));
        assert!(result.is_valid);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_negative_value() {
        let validator = ReadingValidator::default();
        let result = validator.validate(&make_reading(35.6, -4.0));
        assert!(result.is_valid);
        assert_eq!(
            result.warnings,
            vec![ValidationWarning::Negative {
                pollutant: PollutantKind::Pm10,
                value: -4.0
            }]
        );
    }

    #[test]
    fn test_non_finite_is_invalid() {
        let validator = ReadingValidator::default();
        let result = validator.validate(&make_reading(f64::NAN, 58.2));
        assert!(!result.is_valid);
        assert!(
            result
                .warnings
                .iter()
                .any(|w| matches!(w, ValidationWarning::NotFinite { .. }))
        );
    }

    #[test]
    fn test_zero_value() {
        let validator = ReadingValidator::default();
        let result = validator.validate(&make_reading(0.0, 58.2));
        assert!(result.is_valid);
        assert_eq!(
            result.warnings,
            vec![ValidationWarning::Zero {
                pollutant: PollutantKind::Pm25
            }]
        );

        let quiet = ReadingValidator::new(ValidatorConfig::new().warn_on_zero(false));
        assert!(!quiet.validate(&make_reading(0.0, 58.2)).has_warnings());
    }

    #[test]
    fn test_beyond_breakpoints() {
        let validator = ReadingValidator::default();
        let result = validator.validate(&make_reading(400.0, 58.2));
        assert!(result.is_valid);
        assert_eq!(
            result.warnings,
            vec![ValidationWarning::BeyondBreakpoints {
                pollutant: PollutantKind::Pm25,
                value: 400.0,
                max: 350.0
            }]
        );
    }

    #[test]
    fn test_implausible_value() {
        let validator = ReadingValidator::new(ValidatorConfig::new().max_plausible(300.0));
        let result = validator.validate(&make_reading(320.0, 58.2));
        assert!(result.is_valid);
        assert!(
            result
                .warnings
                .iter()
                .any(|w| matches!(w, ValidationWarning::Implausible { max, .. } if *max == 300.0))
        );
    }

    #[test]
    fn test_co_uses_its_own_ceiling() {
        let validator = ReadingValidator::default();
        let reading = make_reading(35.6, 58.2).with(PollutantKind::Co, 150.0);
        let result = validator.validate(&reading);
        assert_eq!(
            result.warnings,
            vec![ValidationWarning::Implausible {
                pollutant: PollutantKind::Co,
                value: 150.0,
                max: 100.0
            }]
        );
    }

    #[test]
    fn test_empty_reading() {
        let validator = ReadingValidator::default();
        let result = validator.validate(&PollutantReading::default());
        assert!(result.is_valid);
        assert_eq!(result.warnings, vec![ValidationWarning::NoIndexedData]);

        let display_only = PollutantReading::new().with(PollutantKind::So2, 20.0);
        assert_eq!(
            validator.validate(&display_only).warnings,
            vec![ValidationWarning::NoIndexedData]
        );
    }

    #[test]
    fn test_relaxed_config() {
        let validator = ReadingValidator::new(ValidatorConfig::relaxed());
        assert!(!validator.validate(&PollutantReading::default()).has_warnings());
        assert!(!validator.validate(&make_reading(0.0, 5000.0)).warnings.iter().any(
            |w| matches!(w, ValidationWarning::Implausible { .. } | ValidationWarning::Zero { .. })
        ));
    }

    #[test]
    fn test_is_value_plausible() {
        let validator = ReadingValidator::default();
        assert!(validator.is_value_plausible(PollutantKind::Pm25, 35.6));
        assert!(!validator.is_value_plausible(PollutantKind::Pm25, 0.0));
        assert!(!validator.is_value_plausible(PollutantKind::Pm25, f64::INFINITY));
        assert!(!validator.is_value_plausible(PollutantKind::Co, 120.0));
    }

    #[test]
    fn test_warning_display() {
        let warning = ValidationWarning::BeyondBreakpoints {
            pollutant: PollutantKind::No2,
            value: 1200.0,
            max: 1000.0,
        };
        assert_eq!(
            warning.to_string(),
            "NO2 1200 µg/m³ exceeds the last breakpoint 1000; sub-index clamped to 500"
        );
        assert_eq!(
            ValidationWarning::Zero {
                pollutant: PollutantKind::O3
            }
            .to_string(),
            "O3 is zero and was treated as not measured"
        );
    }

    #[test]
    fn test_warning_serialization() {
        let json = serde_json::to_value(ValidationWarning::Zero {
            pollutant: PollutantKind::Pm25,
        })
        .unwrap();
        assert_eq!(json["kind"], "zero");
        assert_eq!(json["pollutant"], "pm25");
    }
}
