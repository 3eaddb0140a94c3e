//! Compute command implementation.

use std::path::PathBuf;

use airq_core::{PollutantReading, ReadingValidator, compute_aqi};
use anyhow::{Result, bail};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::format::{FormatOptions, format_aqi_csv, format_aqi_json, format_aqi_text};
use crate::style;
use crate::util::write_output;

pub fn cmd_compute(
    reading: &PollutantReading,
    format: OutputFormat,
    output: Option<&PathBuf>,
    quiet: bool,
    opts: &FormatOptions,
) -> Result<()> {
    let validation = ReadingValidator::default().validate(reading);
    if !validation.is_valid {
        bail!("Invalid reading: {}", validation.messages().join("; "));
    }

    let result = compute_aqi(reading);
    debug!(
        index = result.index,
        dominant = ?result.dominant,
        "Computed AQI"
    );

    // Text output carries its own warnings; structured formats keep stdout clean.
    if format != OutputFormat::Text && !quiet {
        for warning in &validation.warnings {
            eprintln!(
                "{}",
                style::format_warning(&warning.to_string(), opts.no_color)
            );
        }
    }

    let content = match format {
        OutputFormat::Text => format_aqi_text(&result, reading, &validation, opts),
        OutputFormat::Json => format_aqi_json(&result, reading, &validation, opts)?,
        OutputFormat::Csv => format_aqi_csv(&result, reading, opts),
    };

    write_output(output, &content)
}
