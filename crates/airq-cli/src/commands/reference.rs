//! Sub-index lookup and reference table commands.

use std::path::PathBuf;

use airq_core::{AqiCategory, BreakpointTable, PollutantKind, breakpoints, sub_index};
use anyhow::{Result, anyhow, bail};

use crate::cli::OutputFormat;
use crate::format::{
    FormatOptions, SubIndexRow, format_breakpoints_csv, format_breakpoints_text,
    format_categories_csv, format_categories_json, format_categories_text, format_pollutants_csv,
    format_pollutants_json, format_pollutants_text, format_sub_index_csv, format_sub_index_text,
};
use crate::util::write_output;

pub fn cmd_sub_index(
    pollutant: PollutantKind,
    value: f64,
    format: OutputFormat,
    output: Option<&PathBuf>,
    opts: &FormatOptions,
) -> Result<()> {
    if !value.is_finite() {
        bail!("{} concentration is not a finite number", pollutant);
    }
    let index = sub_index(value, pollutant)?;
    let row = SubIndexRow {
        pollutant,
        concentration: value,
        index,
        category: AqiCategory::from_index(i32::from(index)),
    };

    let content = match format {
        OutputFormat::Text => format_sub_index_text(&row, opts),
        OutputFormat::Json => opts.as_json(&row)?,
        OutputFormat::Csv => format_sub_index_csv(&row, opts),
    };
    write_output(output, &content)
}

pub fn cmd_categories(
    format: OutputFormat,
    output: Option<&PathBuf>,
    opts: &FormatOptions,
) -> Result<()> {
    let content = match format {
        OutputFormat::Text => format_categories_text(opts),
        OutputFormat::Json => format_categories_json(opts)?,
        OutputFormat::Csv => format_categories_csv(opts),
    };
    write_output(output, &content)
}

pub fn cmd_breakpoints(
    pollutant: Option<PollutantKind>,
    format: OutputFormat,
    output: Option<&PathBuf>,
    opts: &FormatOptions,
) -> Result<()> {
    let tables: Vec<&BreakpointTable> = match pollutant {
        Some(kind) => vec![breakpoints::table_for(kind).ok_or_else(|| {
            anyhow!(
                "No breakpoint table for {}; it is reported for display only",
                kind
            )
        })?],
        None => breakpoints::ALL_TABLES.to_vec(),
    };

    let content = match format {
        OutputFormat::Text => format_breakpoints_text(&tables, opts),
        OutputFormat::Json => opts.as_json(&tables)?,
        OutputFormat::Csv => format_breakpoints_csv(&tables, opts),
    };
    write_output(output, &content)
}

pub fn cmd_pollutants(
    format: OutputFormat,
    output: Option<&PathBuf>,
    opts: &FormatOptions,
) -> Result<()> {
    let content = match format {
        OutputFormat::Text => format_pollutants_text(opts),
        OutputFormat::Json => format_pollutants_json(opts)?,
        OutputFormat::Csv => format_pollutants_csv(opts),
    };
    write_output(output, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> FormatOptions {
        FormatOptions::new(true)
    }

    #[test]
    fn test_sub_index_rejects_display_only() {
        let err = cmd_sub_index(PollutantKind::So2, 40.0, OutputFormat::Text, None, &opts())
            .unwrap_err();
        assert!(err.to_string().contains("SO2"));
    }

    #[test]
    fn test_sub_index_rejects_non_finite() {
        for value in [f64::NAN, f64::INFINITY] {
            let err = cmd_sub_index(PollutantKind::Pm25, value, OutputFormat::Json, None, &opts())
                .unwrap_err();
            assert_eq!(err.to_string(), "PM2.5 concentration is not a finite number");
        }
    }

    #[test]
    fn test_breakpoints_rejects_display_only() {
        let err = cmd_breakpoints(Some(PollutantKind::Co), OutputFormat::Text, None, &opts())
            .unwrap_err();
        assert!(err.to_string().starts_with("No breakpoint table for CO"));
    }

    #[test]
    fn test_breakpoints_json_to_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("no2.json");

        cmd_breakpoints(
            Some(PollutantKind::No2),
            OutputFormat::Json,
            Some(&path),
            &opts(),
        )
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value[0]["pollutant"], "no2");
        assert_eq!(value[0]["tiers"].as_array().unwrap().len(), 6);
    }
}
