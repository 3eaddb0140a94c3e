//! Output formatting utilities for text, JSON, and CSV output.

use anyhow::Result;
use airq_core::{
    AqiCategory, AqiResult, BreakpointTable, PollutantKind, PollutantReading, ValidationResult,
};
use serde::Serialize;

use crate::style;

/// Formatting options for output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Disable colored output.
    pub no_color: bool,
    /// Omit header row in CSV output.
    pub no_header: bool,
    /// Use compact JSON output (no pretty-printing).
    pub compact: bool,
    /// Include the advisory in text output.
    pub advisory: bool,
}

impl FormatOptions {
    pub fn new(no_color: bool) -> Self {
        Self {
            no_color,
            no_header: false,
            compact: false,
            advisory: true,
        }
    }

    /// Create with no_header option for CSV output.
    pub fn with_no_header(mut self, no_header: bool) -> Self {
        self.no_header = no_header;
        self
    }

    /// Create with compact JSON option.
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Create with advisory option for text output.
    pub fn with_advisory(mut self, advisory: bool) -> Self {
        self.advisory = advisory;
        self
    }

    /// Serialize value to JSON string, respecting compact option.
    pub fn as_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        Ok(json + "\n")
    }

    fn csv_header(&self, header: &str) -> String {
        if self.no_header {
            String::new()
        } else {
            format!("{}\n", header)
        }
    }
}

/// Escape a string for CSV output.
/// Wraps the value in quotes if it contains commas, quotes, or newlines.
/// Double quotes are escaped by doubling them.
#[must_use]
pub fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Format a concentration without trailing zeros (35.6, 58, 0.75).
#[must_use]
pub fn format_concentration(value: f64) -> String {
    let s = format!("{:.2}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn optional_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

// ============================================================================
// AQI result formatting
// ============================================================================

#[must_use]
pub fn format_aqi_text(
    result: &AqiResult,
    reading: &PollutantReading,
    validation: &ValidationResult,
    opts: &FormatOptions,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "AQI:         {}  {}\n",
        style::format_index_colored(result.index, opts.no_color),
        style::format_category_colored(result.category, opts.no_color)
    ));
    output.push_str(&format!(
        "             {}\n",
        style::format_index_bar(result.index, opts.no_color)
    ));
    match result.dominant {
        Some(kind) => output.push_str(&format!("Dominant:    {}\n", kind)),
        None => output.push_str("Dominant:    none (no indexed pollutant measured)\n"),
    }
    output.push_str(&format!("Color:       {}\n", result.color));

    if reading.iter().next().is_some() {
        output.push('\n');
        output.push_str(&style::format_title("Pollutants", opts.no_color));
        output.push('\n');
        for (kind, value) in reading.iter() {
            let sub_index = match result.sub_index(kind) {
                Some(index) => format!(
                    "sub-index {}",
                    style::format_index_colored(index, opts.no_color)
                ),
                None if kind.is_indexed() => "not measured".to_string(),
                None => "display only".to_string(),
            };
            output.push_str(&format!(
                "{:<6} {:>8} {:<6} {}\n",
                kind.to_string(),
                format_concentration(value),
                kind.unit(),
                sub_index
            ));
        }
    }

    output.push('\n');
    output.push_str(&format!("Health:      {}\n", result.health_implications));

    if opts.advisory {
        output.push('\n');
        output.push_str(&style::format_title("Advisory", opts.no_color));
        output.push('\n');
        for (n, advice) in result.advisory.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", n + 1, advice));
        }
    }

    if validation.has_warnings() {
        output.push('\n');
        for warning in &validation.warnings {
            output.push_str(&style::format_warning(&warning.to_string(), opts.no_color));
            output.push('\n');
        }
    }

    output
}

#[must_use]
pub fn format_aqi_csv(result: &AqiResult, reading: &PollutantReading, opts: &FormatOptions) -> String {
    let mut output = opts.csv_header(
        "aqi,category,color,dominant,pm25,pm10,no2,o3,so2,co,\
         pm25_index,pm10_index,no2_index,o3_index",
    );
    output.push_str(&format!(
        "{},{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
        result.index,
        csv_escape(result.category.label()),
        result.color,
        result.dominant.map(|k| k.key()).unwrap_or_default(),
        optional_value(reading.pm25),
        optional_value(reading.pm10),
        optional_value(reading.no2),
        optional_value(reading.o3),
        optional_value(reading.so2),
        optional_value(reading.co),
        result.sub_index(PollutantKind::Pm25).map(|i| i.to_string()).unwrap_or_default(),
        result.sub_index(PollutantKind::Pm10).map(|i| i.to_string()).unwrap_or_default(),
        result.sub_index(PollutantKind::No2).map(|i| i.to_string()).unwrap_or_default(),
        result.sub_index(PollutantKind::O3).map(|i| i.to_string()).unwrap_or_default(),
    ));
    output
}

pub fn format_aqi_json(
    result: &AqiResult,
    reading: &PollutantReading,
    validation: &ValidationResult,
    opts: &FormatOptions,
) -> Result<String> {
    #[derive(Serialize)]
    struct AqiJson<'a> {
        #[serde(flatten)]
        result: &'a AqiResult,
        pollutants: &'a PollutantReading,
        warnings: Vec<String>,
    }

    opts.as_json(&AqiJson {
        result,
        pollutants: reading,
        warnings: validation.messages(),
    })
}

// ============================================================================
// Sub-index formatting
// ============================================================================

/// One sub-index calculation, as shown by `airq sub-index`.
#[derive(Debug, Serialize)]
pub struct SubIndexRow {
    pub pollutant: PollutantKind,
    pub concentration: f64,
    pub index: u16,
    pub category: AqiCategory,
}

#[must_use]
pub fn format_sub_index_text(row: &SubIndexRow, opts: &FormatOptions) -> String {
    format!(
        "{} {} {} -> sub-index {} ({})\n",
        row.pollutant,
        format_concentration(row.concentration),
        row.pollutant.unit(),
        style::format_index_colored(row.index, opts.no_color),
        style::format_category_colored(row.category, opts.no_color)
    )
}

#[must_use]
pub fn format_sub_index_csv(row: &SubIndexRow, opts: &FormatOptions) -> String {
    let mut output = opts.csv_header("pollutant,concentration,index,category");
    output.push_str(&format!(
        "{},{},{},{}\n",
        row.pollutant.key(),
        row.concentration,
        row.index,
        csv_escape(row.category.label())
    ));
    output
}

// ============================================================================
// Reference data formatting
// ============================================================================

fn range_label(category: AqiCategory) -> String {
    match category.index_range() {
        (low, Some(high)) => format!("{}-{}", low, high),
        (low, None) => format!("{}+", low),
    }
}

#[must_use]
pub fn format_categories_text(opts: &FormatOptions) -> String {
    let mut output = String::new();
    for (i, category) in AqiCategory::ALL.into_iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!(
            "{:<14} {:<8} {}\n",
            style::format_category_colored(category, opts.no_color),
            range_label(category),
            style::format_swatch(category, opts.no_color)
        ));
        output.push_str(&format!("  {}\n", category.health_implications()));
        if opts.advisory {
            for advice in category.advisory() {
                output.push_str(&format!("  - {}\n", advice));
            }
        }
    }
    output
}

#[must_use]
pub fn format_categories_csv(opts: &FormatOptions) -> String {
    let mut output = opts.csv_header("category,min_index,max_index,color,health_implications");
    for category in AqiCategory::ALL {
        let (low, high) = category.index_range();
        output.push_str(&format!(
            "{},{},{},{},{}\n",
            csv_escape(category.label()),
            low,
            high.map(|h| h.to_string()).unwrap_or_default(),
            category.color(),
            csv_escape(category.health_implications())
        ));
    }
    output
}

pub fn format_categories_json(opts: &FormatOptions) -> Result<String> {
    #[derive(Serialize)]
    struct CategoryJson {
        category: AqiCategory,
        min_index: u16,
        max_index: Option<u16>,
        color: &'static str,
        health_implications: &'static str,
        advisory: &'static [&'static str],
    }

    let categories: Vec<CategoryJson> = AqiCategory::ALL
        .into_iter()
        .map(|category| {
            let (min_index, max_index) = category.index_range();
            CategoryJson {
                category,
                min_index,
                max_index,
                color: category.color(),
                health_implications: category.health_implications(),
                advisory: category.advisory(),
            }
        })
        .collect();
    opts.as_json(&categories)
}

#[must_use]
pub fn format_breakpoints_text(tables: &[&BreakpointTable], opts: &FormatOptions) -> String {
    let mut output = String::new();
    for (i, table) in tables.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let title = format!("{} ({})", table.pollutant, table.pollutant.unit());
        output.push_str(&style::format_title(&title, opts.no_color));
        output.push('\n');
        for bp in table.tiers {
            let category = AqiCategory::from_index(i32::from(bp.index_high));
            output.push_str(&format!(
                "{:>7} - {:<7} {:>3} - {:<3}  {}\n",
                format_concentration(bp.concentration_low),
                format_concentration(bp.concentration_high),
                bp.index_low,
                bp.index_high,
                style::format_category_colored(category, opts.no_color)
            ));
        }
    }
    output
}

#[must_use]
pub fn format_breakpoints_csv(tables: &[&BreakpointTable], opts: &FormatOptions) -> String {
    let mut output =
        opts.csv_header("pollutant,concentration_low,concentration_high,index_low,index_high");
    for table in tables {
        for bp in table.tiers {
            output.push_str(&format!(
                "{},{},{},{},{}\n",
                table.pollutant.key(),
                bp.concentration_low,
                bp.concentration_high,
                bp.index_low,
                bp.index_high
            ));
        }
    }
    output
}

#[must_use]
pub fn format_pollutants_text(opts: &FormatOptions) -> String {
    let mut output = String::new();
    for kind in PollutantKind::ALL {
        let role = if kind.is_indexed() {
            "indexed"
        } else {
            "display only"
        };
        output.push_str(&format!(
            "{:<6} {:<18} {:<6} {}\n",
            kind.key(),
            kind.name(),
            kind.unit(),
            role
        ));
    }
    if !opts.no_header {
        output.insert_str(0, &format!("{:<6} {:<18} {:<6} {}\n", "KEY", "NAME", "UNIT", "ROLE"));
    }
    output
}

#[must_use]
pub fn format_pollutants_csv(opts: &FormatOptions) -> String {
    let mut output = opts.csv_header("key,name,formula,unit,indexed");
    for kind in PollutantKind::ALL {
        output.push_str(&format!(
            "{},{},{},{},{}\n",
            kind.key(),
            csv_escape(kind.name()),
            kind.formula(),
            kind.unit(),
            kind.is_indexed()
        ));
    }
    output
}

pub fn format_pollutants_json(opts: &FormatOptions) -> Result<String> {
    #[derive(Serialize)]
    struct PollutantJson {
        key: &'static str,
        name: &'static str,
        formula: &'static str,
        unit: &'static str,
        indexed: bool,
    }

    let pollutants: Vec<PollutantJson> = PollutantKind::ALL
        .into_iter()
        .map(|kind| PollutantJson {
            key: kind.key(),
            name: kind.name(),
            formula: kind.formula(),
            unit: kind.unit(),
            indexed: kind.is_indexed(),
        })
        .collect();
    opts.as_json(&pollutants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use airq_core::{ReadingValidator, breakpoints, compute_aqi};

    fn sample() -> (AqiResult, PollutantReading, ValidationResult) {
        let reading = PollutantReading::new()
            .with(PollutantKind::Pm25, 35.6)
            .with(PollutantKind::Pm10, 58.2)
            .with(PollutantKind::No2, 42.1)
            .with(PollutantKind::O3, 68.5)
            .with(PollutantKind::Co, 0.9);
        let validation = ReadingValidator::default().validate(&reading);
        (compute_aqi(&reading), reading, validation)
    }

    fn plain() -> FormatOptions {
        FormatOptions::new(true)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("Good"), "Good");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_format_concentration() {
        assert_eq!(format_concentration(35.6), "35.6");
        assert_eq!(format_concentration(58.0), "58");
        assert_eq!(format_concentration(0.75), "0.75");
        assert_eq!(format_concentration(0.0), "0");
    }

    #[test]
    fn test_as_json_compact() {
        let opts = plain().with_compact(true);
        assert_eq!(opts.as_json(&[1, 2]).unwrap(), "[1,2]\n");
    }

    // ========================================================================
    // AQI result
    // ========================================================================

    #[test]
    fn test_aqi_text() {
        let (result, reading, validation) = sample();
        let text = format_aqi_text(&result, &reading, &validation, &plain());

        assert!(text.contains("AQI:         69  Satisfactory"));
        assert!(text.contains("Dominant:    O3"));
        assert!(text.contains("sub-index 59"));
        assert!(text.contains("display only"));
        assert!(text.contains("1. Sensitive individuals should limit prolonged outdoor exertion"));
        assert!(!text.contains("[!!]"));
    }

    #[test]
    fn test_aqi_text_without_advisory() {
        let (result, reading, validation) = sample();
        let text = format_aqi_text(
            &result,
            &reading,
            &validation,
            &plain().with_advisory(false),
        );
        assert!(!text.contains("Advisory"));
        assert!(text.contains("Health:"));
    }

    #[test]
    fn test_aqi_text_empty_reading_warns() {
        let reading = PollutantReading::default();
        let validation = ReadingValidator::default().validate(&reading);
        let text = format_aqi_text(&compute_aqi(&reading), &reading, &validation, &plain());

        assert!(text.contains("AQI:         0  Good"));
        assert!(text.contains("Dominant:    none"));
        assert!(text.contains("[!!] No indexed pollutant measured"));
    }

    #[test]
    fn test_aqi_csv() {
        let (result, reading, _) = sample();
        let csv = format_aqi_csv(&result, &reading, &plain());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("aqi,category,color,dominant"));
        assert_eq!(lines[1], "69,Satisfactory,#FFFF00,o3,35.6,58.2,42.1,68.5,,0.9,59,58,52,69");

        let no_header = format_aqi_csv(&result, &reading, &plain().with_no_header(true));
        assert_eq!(no_header.lines().count(), 1);
    }

    #[test]
    fn test_aqi_json() {
        let (result, reading, validation) = sample();
        let json = format_aqi_json(&result, &reading, &validation, &plain()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["index"], 69);
        assert_eq!(value["dominant"], "o3");
        assert_eq!(value["pollutants"]["co"], 0.9);
        assert!(value["warnings"].as_array().unwrap().is_empty());
    }

    // ========================================================================
    // Sub-index and reference data
    // ========================================================================

    #[test]
    fn test_sub_index_text_and_csv() {
        let row = SubIndexRow {
            pollutant: PollutantKind::Pm25,
            concentration: 31.0,
            index: 51,
            category: AqiCategory::Satisfactory,
        };
        assert_eq!(
            format_sub_index_text(&row, &plain()),
            "PM2.5 31 µg/m³ -> sub-index 51 (Satisfactory)\n"
        );
        assert_eq!(
            format_sub_index_csv(&row, &plain()),
            "pollutant,concentration,index,category\npm25,31,51,Satisfactory\n"
        );
    }

    #[test]
    fn test_categories_outputs() {
        let text = format_categories_text(&plain());
        assert!(text.contains("401+"));
        assert!(text.contains("#99004C"));

        let csv = format_categories_csv(&plain());
        assert_eq!(csv.lines().count(), 7);
        assert!(csv.contains("Very Poor,301,400,#99004C"));

        let json: serde_json::Value =
            serde_json::from_str(&format_categories_json(&plain()).unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 6);
        assert!(json[5]["max_index"].is_null());
    }

    #[test]
    fn test_breakpoints_outputs() {
        let tables = [&breakpoints::PM25];
        let text = format_breakpoints_text(&tables, &plain());
        assert!(text.starts_with("PM2.5 (µg/m³)"));
        assert_eq!(text.lines().count(), 8);

        let csv = format_breakpoints_csv(&breakpoints::ALL_TABLES, &plain());
        assert_eq!(csv.lines().count(), 25);
        assert!(csv.contains("pm25,31,60,51,100"));
    }

    #[test]
    fn test_pollutants_outputs() {
        let text = format_pollutants_text(&plain());
        assert!(text.starts_with("KEY"));
        assert!(text.contains("display only"));

        let csv = format_pollutants_csv(&plain());
        assert!(csv.contains("co,Carbon Monoxide,CO,mg/m³,false"));

        let json: serde_json::Value =
            serde_json::from_str(&format_pollutants_json(&plain()).unwrap()).unwrap();
        assert_eq!(json[0]["key"], "pm25");
    }
}
