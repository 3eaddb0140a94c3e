//! HTTP REST API for the CPCB air quality index engine.
//!
//! This crate wraps [`airq_core`] in a small axum service so dashboards and
//! station feeds can compute the index without linking Rust code.
//!
//! # REST API Endpoints
//!
//! - `GET /api/health` - Service health check
//! - `POST /api/aqi` - Compute the index for a JSON reading
//! - `GET /api/aqi?pm25=..&pm10=..` - Compute the index from query parameters
//! - `POST /api/aqi/measurements` - Compute from `[{parameter, value}]` pairs
//! - `GET /api/aqi/sub-index?pollutant=..&value=..` - Sub-index of one pollutant
//! - `GET /api/aqi/categories` - Category ranges, colours and advisories
//! - `GET /api/aqi/breakpoints` - All breakpoint tables
//! - `GET /api/aqi/breakpoints/{pollutant}` - One breakpoint table
//! - `GET /api/pollutants` - Accepted pollutants and their units
//!
//! # Configuration
//!
//! The service reads configuration from `~/.config/airq/server.toml`:
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:8080"
//!
//! [validation]
//! max_plausible = 2000.0     # µg/m³ ceiling before a value is flagged
//! co_max_plausible = 100.0   # mg/m³ ceiling for CO
//! warn_on_zero = true
//! warn_on_empty = true
//! ```

pub mod api;
pub mod config;
pub mod state;

pub use config::{Config, ConfigError, ServerConfig, ValidationError};
pub use state::AppState;
