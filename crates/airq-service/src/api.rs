//! REST API endpoints for the airq-service.
//!
//! Every endpoint is a pure function of its input and the read-only
//! [`AppState`], so handlers never block on each other.
//!
//! ## Error Handling
//!
//! All endpoints return structured JSON errors via [`AppError`]. Unknown or
//! non-indexed pollutants and unusable readings return HTTP 400, missing
//! breakpoint tables HTTP 404.
//!
//! # Example
//!
//! ```ignore
//! use axum::Router;
//! use airq_service::api;
//!
//! let app = api::router().with_state(state);
//! ```

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::debug;

use airq_core::{
    AqiCategory, AqiResult, BreakpointTable, PollutantKind, PollutantReading, breakpoints,
    compute_aqi,
};

use crate::state::AppState;

/// Create the API router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(health))
        // Index calculation
        .route("/api/aqi", get(compute_from_query).post(compute_from_body))
        .route("/api/aqi/measurements", post(compute_from_measurements))
        .route("/api/aqi/sub-index", get(get_sub_index))
        // Reference data
        .route("/api/aqi/categories", get(list_categories))
        .route("/api/aqi/breakpoints", get(list_breakpoints))
        .route("/api/aqi/breakpoints/{pollutant}", get(get_breakpoints))
        .route("/api/pollutants", get(list_pollutants))
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub uptime_secs: i64,
}

/// Health check endpoint.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let now = OffsetDateTime::now_utc();
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: now,
        uptime_secs: (now - state.started_at).whole_seconds(),
    })
}

/// Result of an index calculation, with the inputs echoed back.
#[derive(Debug, Serialize)]
pub struct AqiResponse {
    #[serde(flatten)]
    pub result: AqiResult,
    /// The reading the index was computed from.
    pub pollutants: PollutantReading,
    /// Validation warnings for the reading, if any.
    pub warnings: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub computed_at: OffsetDateTime,
}

/// Validate a reading and compute its index.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] when the validator rejects the reading.
fn respond(state: &AppState, reading: PollutantReading) -> Result<Json<AqiResponse>, AppError> {
    let validation = state.validator.validate(&reading);
    if !validation.is_valid {
        return Err(AppError::BadRequest(format!(
            "Invalid reading: {}",
            validation.messages().join("; ")
        )));
    }

    let result = compute_aqi(&reading);
    debug!(
        index = result.index,
        warnings = validation.warnings.len(),
        "served AQI request"
    );

    Ok(Json(AqiResponse {
        result,
        pollutants: reading,
        warnings: validation.messages(),
        computed_at: OffsetDateTime::now_utc(),
    }))
}

/// Compute the index for a reading posted as JSON.
async fn compute_from_body(
    State(state): State<Arc<AppState>>,
    Json(reading): Json<PollutantReading>,
) -> Result<Json<AqiResponse>, AppError> {
    respond(&state, reading)
}

/// Compute the index from query parameters (`?pm25=35.6&o3=68.5`).
async fn compute_from_query(
    State(state): State<Arc<AppState>>,
    Query(reading): Query<PollutantReading>,
) -> Result<Json<AqiResponse>, AppError> {
    respond(&state, reading)
}

/// One `(parameter, value)` pair as reported by a monitoring station feed.
#[derive(Debug, Deserialize)]
pub struct MeasurementInput {
    pub parameter: String,
    /// Feeds report `null` for parameters a station did not measure.
    pub value: Option<f64>,
}

/// Compute the index from a list of station measurements.
///
/// Unknown parameters and `null` values are skipped; the first value for a
/// pollutant wins.
async fn compute_from_measurements(
    State(state): State<Arc<AppState>>,
    Json(measurements): Json<Vec<MeasurementInput>>,
) -> Result<Json<AqiResponse>, AppError> {
    let reading = PollutantReading::from_measurements(
        measurements
            .iter()
            .filter_map(|m| m.value.map(|value| (m.parameter.as_str(), value))),
    );
    respond(&state, reading)
}

/// Query parameters for a single sub-index.
#[derive(Debug, Deserialize)]
pub struct SubIndexQuery {
    pub pollutant: String,
    pub value: f64,
}

/// Sub-index of one pollutant.
#[derive(Debug, Serialize)]
pub struct SubIndexResponse {
    pub pollutant: PollutantKind,
    pub concentration: f64,
    pub index: u16,
    pub category: AqiCategory,
}

/// Compute the sub-index of a single pollutant.
async fn get_sub_index(
    Query(query): Query<SubIndexQuery>,
) -> Result<Json<SubIndexResponse>, AppError> {
    let pollutant: PollutantKind = query
        .pollutant
        .parse()
        .map_err(|e: airq_core::ParseError| AppError::BadRequest(e.to_string()))?;
    if !query.value.is_finite() {
        return Err(AppError::BadRequest(format!(
            "{} concentration is not a finite number",
            pollutant
        )));
    }
    let index = airq_core::sub_index(query.value, pollutant)?;

    Ok(Json(SubIndexResponse {
        pollutant,
        concentration: query.value,
        index,
        category: AqiCategory::from_index(i32::from(index)),
    }))
}

/// Category reference entry.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub category: AqiCategory,
    pub min_index: u16,
    /// `None` for the open-ended top category.
    pub max_index: Option<u16>,
    pub color: &'static str,
    pub health_implications: &'static str,
    pub advisory: &'static [&'static str],
}

impl From<AqiCategory> for CategoryResponse {
    fn from(category: AqiCategory) -> Self {
        let (min_index, max_index) = category.index_range();
        Self {
            category,
            min_index,
            max_index,
            color: category.color(),
            health_implications: category.health_implications(),
            advisory: category.advisory(),
        }
    }
}

/// List every category with its range, colour and guidance.
async fn list_categories() -> Json<Vec<CategoryResponse>> {
    Json(AqiCategory::ALL.into_iter().map(Into::into).collect())
}

/// List the breakpoint tables of every indexed pollutant.
async fn list_breakpoints() -> Json<Vec<BreakpointTable>> {
    Json(breakpoints::ALL_TABLES.into_iter().copied().collect())
}

/// Get the breakpoint table of one pollutant.
async fn get_breakpoints(Path(pollutant): Path<String>) -> Result<Json<BreakpointTable>, AppError> {
    let kind: PollutantKind = pollutant
        .parse()
        .map_err(|e: airq_core::ParseError| AppError::BadRequest(e.to_string()))?;
    let table = breakpoints::table_for(kind).ok_or(AppError::NotFound(format!(
        "No breakpoint table for {}",
        kind
    )))?;
    Ok(Json(*table))
}

/// Pollutant metadata.
#[derive(Debug, Serialize)]
pub struct PollutantResponse {
    pub key: &'static str,
    pub name: &'static str,
    pub formula: &'static str,
    pub unit: &'static str,
    pub indexed: bool,
}

impl From<PollutantKind> for PollutantResponse {
    fn from(kind: PollutantKind) -> Self {
        Self {
            key: kind.key(),
            name: kind.name(),
            formula: kind.formula(),
            unit: kind.unit(),
            indexed: kind.is_indexed(),
        }
    }
}

/// List every pollutant the service accepts.
async fn list_pollutants() -> Json<Vec<PollutantResponse>> {
    Json(PollutantKind::ALL.into_iter().map(Into::into).collect())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl From<airq_core::Error> for AppError {
    fn from(e: airq_core::Error) -> Self {
        match e {
            airq_core::Error::NotIndexed(_) | airq_core::Error::Parse(_) => {
                AppError::BadRequest(e.to_string())
            }
            _ => AppError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message,
        });

        (status, Json(body)).into_response()
    }
}
