use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AppError;
use crate::models::driver::{Driver, DriverId};
use crate::models::order::Order;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/drivers", post(create_driver).get(list_drivers))
        .route("/drivers/:id", get(get_driver).delete(delete_driver))
        .route("/drivers/:id/orders/:day", get(driver_orders_for_day))
}

#[derive(Deserialize)]
pub struct CreateDriverRequest {
    pub first_name: String,
    pub last_name: String,
}

async fn create_driver(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateDriverRequest>,
) -> Result<Json<Driver>, AppError> {
    if payload.first_name.trim().is_empty() || payload.last_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "first_name and last_name cannot be empty".to_string(),
        ));
    }

    let driver = state.drivers.create(payload.first_name, payload.last_name);
    state.metrics.registered_drivers.inc();

    tracing::info!(driver_id = driver.id, "driver registered");
    Ok(Json(driver))
}

async fn list_drivers(State(state): State<Arc<AppState>>) -> Json<Vec<Driver>> {
    Json(state.drivers.list())
}

async fn get_driver(
    State(state): State<Arc<AppState>>,
    Path(id): Path<DriverId>,
) -> Result<Json<Driver>, AppError> {
    let driver = state
        .drivers
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("driver {id} not found")))?;

    Ok(Json(driver))
}

async fn delete_driver(
    State(state): State<Arc<AppState>>,
    Path(id): Path<DriverId>,
) -> Result<Json<Driver>, AppError> {
    let driver = state
        .drivers
        .remove(id)
        .ok_or_else(|| AppError::NotFound(format!("driver {id} not found")))?;

    state.metrics.registered_drivers.dec();

    tracing::info!(driver_id = driver.id, "driver removed");
    Ok(Json(driver))
}

/// A driver's schedule for one day, sorted by pickup time.
async fn driver_orders_for_day(
    State(state): State<Arc<AppState>>,
    Path((id, day)): Path<(DriverId, String)>,
) -> Result<Json<Vec<Order>>, AppError> {
    let day = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("{day:?} is not a YYYY-MM-DD day")))?;

    if state.drivers.get(id).is_none() {
        return Err(AppError::NotFound(format!("driver {id} not found")));
    }

    Ok(Json(state.orders.for_driver_on_day(id, day)))
}
