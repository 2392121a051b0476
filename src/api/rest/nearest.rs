use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::Router;
use axum::extract::{Query, State};
use axum::routing::get;
use serde::Deserialize;
use tracing::error;

use crate::error::AppError;
use crate::models::driver::Driver;
use crate::resolver;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/drivers/nearest", get(nearest_driver))
}

/// All parameters arrive as raw strings; latitude/longitude are parsed
/// here so a missing or non-numeric value maps to the coordinate error,
/// not to a generic deserialization failure.
#[derive(Deserialize)]
pub struct NearestDriverQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub day: Option<String>,
    pub hour: Option<String>,
}

/// Answers with the nearest available driver, or a JSON `null` body
/// when the pipeline completes without a candidate.
async fn nearest_driver(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NearestDriverQuery>,
) -> Result<Json<Option<Driver>>, AppError> {
    let start = Instant::now();

    let result = resolve(&state, query).await;

    let outcome = match &result {
        Ok(Some(_)) => "found",
        Ok(None) => "none",
        Err(_) => "error",
    };

    let elapsed = start.elapsed().as_secs_f64();
    state
        .metrics
        .resolution_latency_seconds
        .with_label_values(&[outcome])
        .observe(elapsed);
    state
        .metrics
        .resolutions_total
        .with_label_values(&[outcome])
        .inc();

    if let Err(err) = &result {
        error!(error = %err, "nearest-driver resolution failed");
    }

    result.map(Json)
}

async fn resolve(
    state: &AppState,
    query: NearestDriverQuery,
) -> Result<Option<Driver>, AppError> {
    let latitude = parse_coordinate("latitude", query.latitude.as_deref())?;
    let longitude = parse_coordinate("longitude", query.longitude.as_deref())?;
    let day = query.day.unwrap_or_default();
    let hour = query.hour.unwrap_or_default();

    resolver::find_nearest_available_driver(state, latitude, longitude, &day, &hour).await
}

fn parse_coordinate(name: &str, raw: Option<&str>) -> Result<i64, AppError> {
    let raw = raw.ok_or_else(|| AppError::InvalidCoordinate(format!("missing {name}")))?;

    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidCoordinate(format!("{name} {raw:?} is not an integer")))
}
