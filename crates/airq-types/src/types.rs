//! Core types for pollutant data.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A pollutant tracked by the dashboard.
///
/// Only PM2.5, PM10, NO2 and O3 take part in the index; SO2 and CO are
/// carried along for display.
///
/// # Examples
///
/// ```
/// use airq_types::PollutantKind;
///
/// assert_eq!("pm2.5".parse::<PollutantKind>(), Ok(PollutantKind::Pm25));
/// assert_eq!("NO2".parse::<PollutantKind>(), Ok(PollutantKind::No2));
/// assert!(PollutantKind::O3.is_indexed());
/// assert!(!PollutantKind::Co.is_indexed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PollutantKind {
    /// Fine particulate matter, diameter ≤ 2.5 µm.
    Pm25,
    /// Coarse particulate matter, diameter ≤ 10 µm.
    Pm10,
    /// Nitrogen dioxide.
    No2,
    /// Ozone.
    O3,
    /// Sulfur dioxide.
    So2,
    /// Carbon monoxide.
    Co,
}

impl PollutantKind {
    /// Every tracked pollutant, in display order.
    pub const ALL: [PollutantKind; 6] = [
        PollutantKind::Pm25,
        PollutantKind::Pm10,
        PollutantKind::No2,
        PollutantKind::O3,
        PollutantKind::So2,
        PollutantKind::Co,
    ];

    /// Pollutants that contribute to the index, in aggregation order.
    pub const INDEXED: [PollutantKind; 4] = [
        PollutantKind::Pm25,
        PollutantKind::Pm10,
        PollutantKind::No2,
        PollutantKind::O3,
    ];

    /// Whether this pollutant has a breakpoint table.
    #[must_use]
    pub fn is_indexed(&self) -> bool {
        Self::INDEXED.contains(self)
    }

    /// Short machine key, as used in JSON and query strings.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            PollutantKind::Pm25 => "pm25",
            PollutantKind::Pm10 => "pm10",
            PollutantKind::No2 => "no2",
            PollutantKind::O3 => "o3",
            PollutantKind::So2 => "so2",
            PollutantKind::Co => "co",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            PollutantKind::Pm25 => "PM2.5",
            PollutantKind::Pm10 => "PM10",
            PollutantKind::No2 => "Nitrogen Dioxide",
            PollutantKind::O3 => "Ozone",
            PollutantKind::So2 => "Sulfur Dioxide",
            PollutantKind::Co => "Carbon Monoxide",
        }
    }

    /// Chemical formula with subscripts.
    #[must_use]
    pub fn formula(&self) -> &'static str {
        match self {
            PollutantKind::Pm25 => "PM₂.₅",
            PollutantKind::Pm10 => "PM₁₀",
            PollutantKind::No2 => "NO₂",
            PollutantKind::O3 => "O₃",
            PollutantKind::So2 => "SO₂",
            PollutantKind::Co => "CO",
        }
    }

    /// Unit that upstream providers report this pollutant in.
    #[must_use]
    pub fn unit(&self) -> &'static str {
        match self {
            PollutantKind::Co => "mg/m³",
            _ => "µg/m³",
        }
    }
}

impl FromStr for PollutantKind {
    type Err = ParseError;

    /// Parse a pollutant name, accepting the spellings used by air quality
    /// providers (`pm25`, `pm2_5`, `pm2.5`, ...). Matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pm25" | "pm2_5" | "pm2.5" => Ok(PollutantKind::Pm25),
            "pm10" => Ok(PollutantKind::Pm10),
            "no2" => Ok(PollutantKind::No2),
            "o3" => Ok(PollutantKind::O3),
            "so2" => Ok(PollutantKind::So2),
            "co" => Ok(PollutantKind::Co),
            _ => Err(ParseError::UnknownPollutant(s.to_string())),
        }
    }
}

impl fmt::Display for PollutantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollutantKind::Pm25 => write!(f, "PM2.5"),
            PollutantKind::Pm10 => write!(f, "PM10"),
            PollutantKind::No2 => write!(f, "NO2"),
            PollutantKind::O3 => write!(f, "O3"),
            PollutantKind::So2 => write!(f, "SO2"),
            PollutantKind::Co => write!(f, "CO"),
        }
    }
}

/// One `name=value` measurement as reported by a provider.
///
/// ```
/// use airq_types::{Measurement, PollutantKind};
///
/// let m: Measurement = "pm2.5=35.6".parse().unwrap();
/// assert_eq!(m.pollutant, PollutantKind::Pm25);
/// assert_eq!(m.value, 35.6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement {
    /// Which pollutant was measured.
    pub pollutant: PollutantKind,
    /// Concentration in the pollutant's unit.
    pub value: f64,
}

impl FromStr for Measurement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| ParseError::InvalidConcentration(s.to_string()))?;
        let pollutant = name.parse()?;
        let value = value
            .trim()
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidConcentration(value.trim().to_string()))?;
        Ok(Measurement { pollutant, value })
    }
}

/// A set of pollutant concentrations, any of which may be missing.
///
/// Values are in µg/m³ (CO in mg/m³). A value only counts as *measured* when
/// it is present, finite and strictly positive; see [`PollutantReading::measured`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PollutantReading {
    /// Fine particulate matter, PM2.5.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    #[cfg_attr(feature = "serde", serde(alias = "pm2_5", alias = "pm2.5"))]
    pub pm25: Option<f64>,
    /// Coarse particulate matter, PM10.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub pm10: Option<f64>,
    /// Nitrogen dioxide.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub no2: Option<f64>,
    /// Ozone.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub o3: Option<f64>,
    /// Sulfur dioxide, display only.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub so2: Option<f64>,
    /// Carbon monoxide in mg/m³, display only.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub co: Option<f64>,
}

impl PollutantReading {
    /// Create an empty reading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    ///
    /// ```
    /// use airq_types::{PollutantKind, PollutantReading};
    ///
    /// let reading = PollutantReading::new()
    ///     .with(PollutantKind::Pm25, 35.6)
    ///     .with(PollutantKind::O3, 68.5);
    /// assert_eq!(reading.pm25, Some(35.6));
    /// ```
    #[must_use]
    pub fn with(mut self, kind: PollutantKind, value: f64) -> Self {
        self.set(kind, Some(value));
        self
    }

    /// Raw value for a pollutant, without any filtering.
    #[must_use]
    pub fn get(&self, kind: PollutantKind) -> Option<f64> {
        match kind {
            PollutantKind::Pm25 => self.pm25,
            PollutantKind::Pm10 => self.pm10,
            PollutantKind::No2 => self.no2,
            PollutantKind::O3 => self.o3,
            PollutantKind::So2 => self.so2,
            PollutantKind::Co => self.co,
        }
    }

    /// Replace the value for a pollutant.
    pub fn set(&mut self, kind: PollutantKind, value: Option<f64>) {
        let slot = match kind {
            PollutantKind::Pm25 => &mut self.pm25,
            PollutantKind::Pm10 => &mut self.pm10,
            PollutantKind::No2 => &mut self.no2,
            PollutantKind::O3 => &mut self.o3,
            PollutantKind::So2 => &mut self.so2,
            PollutantKind::Co => &mut self.co,
        };
        *slot = value;
    }

    /// The value for a pollutant if it counts as measured.
    ///
    /// Zero, negative and non-finite values are treated as "not measured".
    /// A reported `0` is indistinguishable from a missing sensor upstream, so
    /// it is excluded as well.
    #[must_use]
    pub fn measured(&self, kind: PollutantKind) -> Option<f64> {
        self.get(kind).filter(|v| v.is_finite() && *v > 0.0)
    }

    /// Whether any pollutant that feeds the index is measured.
    #[must_use]
    pub fn has_indexed_data(&self) -> bool {
        PollutantKind::INDEXED
            .iter()
            .any(|kind| self.measured(*kind).is_some())
    }

    /// Build a reading from a provider's list of `(parameter, value)` pairs.
    ///
    /// Parameter names go through [`PollutantKind::from_str`], so `pm2_5` and
    /// `pm2.5` both land in `pm25`. Unknown parameters are skipped. When a
    /// pollutant appears more than once, the first value wins.
    ///
    /// ```
    /// use airq_types::PollutantReading;
    ///
    /// let reading = PollutantReading::from_measurements([
    ///     ("pm2.5", 35.6),
    ///     ("humidity", 60.0),
    ///     ("pm25", 99.0),
    /// ]);
    /// assert_eq!(reading.pm25, Some(35.6));
    /// ```
    pub fn from_measurements<I, S>(measurements: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut reading = Self::default();
        for (name, value) in measurements {
            let Ok(kind) = name.as_ref().parse::<PollutantKind>() else {
                continue;
            };
            if reading.get(kind).is_none() {
                reading.set(kind, Some(value));
            }
        }
        reading
    }

    /// Iterate over the pollutants that have a value, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (PollutantKind, f64)> + '_ {
        PollutantKind::ALL
            .into_iter()
            .filter_map(move |kind| self.get(kind).map(|value| (kind, value)))
    }
}

impl FromIterator<Measurement> for PollutantReading {
    fn from_iter<T: IntoIterator<Item = Measurement>>(iter: T) -> Self {
        let mut reading = Self::default();
        for m in iter {
            if reading.get(m.pollutant).is_none() {
                reading.set(m.pollutant, Some(m.value));
            }
        }
        reading
    }
}

/// One tier of a piecewise-linear concentration-to-index mapping.
///
/// Both ranges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Breakpoint {
    /// Lowest concentration covered by this tier.
    pub concentration_low: f64,
    /// Highest concentration covered by this tier.
    pub concentration_high: f64,
    /// Index at `concentration_low`.
    pub index_low: u16,
    /// Index at `concentration_high`.
    pub index_high: u16,
}

impl Breakpoint {
    /// Create a breakpoint tier.
    #[must_use]
    pub const fn new(
        concentration_low: f64,
        concentration_high: f64,
        index_low: u16,
        index_high: u16,
    ) -> Self {
        Self {
            concentration_low,
            concentration_high,
            index_low,
            index_high,
        }
    }

    /// Whether `concentration` falls within this tier (inclusive).
    #[must_use]
    pub fn contains(&self, concentration: f64) -> bool {
        concentration >= self.concentration_low && concentration <= self.concentration_high
    }
}

/// The index contribution of a single pollutant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubIndex {
    /// Pollutant the sub-index was computed for.
    pub pollutant: PollutantKind,
    /// Concentration that was fed in.
    pub concentration: f64,
    /// Resulting sub-index (0-500).
    pub index: u16,
}
