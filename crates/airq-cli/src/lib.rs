//! Command-line interface for the CPCB air quality index.
//!
//! The `airq` binary turns pollutant concentrations into the CPCB National
//! Air Quality Index, and prints the reference tables the index is built on.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `compute` | Compute the AQI, category, dominant pollutant and advisory |
//! | `sub-index` | Compute one pollutant's sub-index |
//! | `categories` | List categories with index ranges, colours and advisories |
//! | `breakpoints` | Show the breakpoint tables |
//! | `pollutants` | List supported pollutants and their units |
//! | `config` | Manage CLI configuration |
//! | `completions` | Generate shell completions |
//!
//! # Output Formats
//!
//! - **Text** (default): Human-readable output coloured with the category colours
//! - **JSON**: Machine-readable JSON format
//! - **CSV**: Comma-separated values for spreadsheets
//!
//! # Configuration
//!
//! The CLI stores configuration in `~/.config/airq/config.toml` (or platform equivalent):
//!
//! - `format`: Default output format
//! - `no_color`: Disable colored output
//! - `compact`: Compact JSON output
//! - `advisory`: Show the health advisory in text output
//!
//! # Environment Variables
//!
//! - `AIRQ_CONFIG`: Alternative config file path (overridden by `--config`)
//! - `NO_COLOR`: Disable colored output when set
//!
//! # Examples
//!
//! Compute the index from flags:
//! ```bash
//! airq compute --pm25 35.6 --pm10 58.2 --no2 42.1 --o3 68.5
//! ```
//!
//! Compute from provider-style measurements as JSON:
//! ```bash
//! airq compute pm2.5=35.6 o3=68.5 --json
//! ```
//!
//! Export the breakpoint tables:
//! ```bash
//! airq breakpoints --format csv --output breakpoints.csv
//! ```

// Re-export the engine for programmatic use
pub use airq_core;
