//! CLI argument definitions using clap.

use std::path::PathBuf;

use airq_core::{Measurement, PollutantKind, PollutantReading};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    /// Parse a format name as stored in the config file.
    pub fn from_config(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value, true).ok()
    }
}

/// Reusable output format arguments
#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Output format (defaults to the config file, then text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Omit header row in CSV output (useful for appending)
    #[arg(long)]
    pub no_header: bool,
}

/// Pollutant concentrations given as flags.
#[derive(Debug, Clone, Default, Args)]
pub struct ReadingArgs {
    /// PM2.5 concentration (µg/m³)
    #[arg(long, allow_negative_numbers = true)]
    pub pm25: Option<f64>,

    /// PM10 concentration (µg/m³)
    #[arg(long, allow_negative_numbers = true)]
    pub pm10: Option<f64>,

    /// NO2 concentration (µg/m³)
    #[arg(long, allow_negative_numbers = true)]
    pub no2: Option<f64>,

    /// O3 concentration (µg/m³)
    #[arg(long, allow_negative_numbers = true)]
    pub o3: Option<f64>,

    /// SO2 concentration (µg/m³, display only)
    #[arg(long, allow_negative_numbers = true)]
    pub so2: Option<f64>,

    /// CO concentration (mg/m³, display only)
    #[arg(long, allow_negative_numbers = true)]
    pub co: Option<f64>,

    /// Extra measurements as NAME=VALUE (e.g. pm2.5=35.6); flags take precedence
    #[arg(value_name = "NAME=VALUE")]
    pub measurements: Vec<Measurement>,
}

impl ReadingArgs {
    /// Merge flags and positional measurements into one reading.
    pub fn to_reading(&self) -> PollutantReading {
        let mut reading: PollutantReading = self.measurements.iter().copied().collect();
        for (kind, value) in [
            (PollutantKind::Pm25, self.pm25),
            (PollutantKind::Pm10, self.pm10),
            (PollutantKind::No2, self.no2),
            (PollutantKind::O3, self.o3),
            (PollutantKind::So2, self.so2),
            (PollutantKind::Co, self.co),
        ] {
            if value.is_some() {
                reading.set(kind, value);
            }
        }
        reading
    }
}

#[derive(Parser)]
#[command(name = "airq")]
#[command(author, version, about = "CPCB air quality index calculator", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as JSON (shorthand for --format json)
    #[arg(long, global = true)]
    pub json: bool,

    /// Output compact JSON (no pretty-printing)
    #[arg(long, global = true)]
    pub compact: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Path to the configuration file
    #[arg(long, global = true, env = "AIRQ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write output to file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the AQI for a set of pollutant concentrations
    Compute {
        #[command(flatten)]
        reading: ReadingArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Hide the health advisory in text output
        #[arg(long)]
        no_advisory: bool,
    },

    /// Compute the sub-index of a single pollutant
    SubIndex {
        /// Pollutant name (pm25, pm10, no2, o3)
        pollutant: PollutantKind,

        /// Concentration (µg/m³)
        #[arg(allow_negative_numbers = true)]
        value: f64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List AQI categories with ranges, colours and advisories
    Categories {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show breakpoint tables
    Breakpoints {
        /// Only show the table for this pollutant
        pollutant: Option<PollutantKind>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List supported pollutants and their units
    Pollutants {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Configuration keys
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ConfigKey {
    /// Default output format
    Format,
    /// Disable colored output
    NoColor,
    /// Compact JSON output
    Compact,
    /// Show the health advisory in text output
    Advisory,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        #[arg(value_enum)]
        key: ConfigKey,
        /// Configuration value
        value: String,
    },

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init,
}

/// Parse boolean argument with flexible input
pub fn parse_bool_arg(s: &str) -> Result<bool, String> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" | "enable" | "enabled" => Ok(true),
        "false" | "no" | "off" | "0" | "disable" | "disabled" => Ok(false),
        _ => Err(format!(
            "Invalid boolean value '{}'. Use: true/false, yes/no, on/off, 1/0",
            s
        )),
    }
}
