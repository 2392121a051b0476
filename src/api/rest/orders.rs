use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::coordinate::Coordinate;
use crate::models::driver::DriverId;
use crate::models::order::{Order, default_end_time};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/orders", post(create_order).get(list_orders))
        .route("/orders/:id", get(get_order))
        .route("/orders/day/:day", get(orders_for_day))
}

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub title: String,
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    pub driver_id: DriverId,
    pub pickup_point: Coordinate,
    pub destination_point: Coordinate,
}

async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<Json<Order>, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::BadRequest("title cannot be empty".to_string()));
    }

    if state.drivers.get(payload.driver_id).is_none() {
        return Err(AppError::BadRequest(format!(
            "unknown driver {}",
            payload.driver_id
        )));
    }

    payload.pickup_point.validate()?;
    payload.destination_point.validate()?;

    let order = Order {
        id: Uuid::new_v4(),
        title: payload.title,
        day: payload.day,
        start_time: payload.start_time,
        end_time: payload
            .end_time
            .unwrap_or_else(|| default_end_time(payload.start_time)),
        driver_id: payload.driver_id,
        pickup_point: payload.pickup_point,
        destination_point: payload.destination_point,
    };

    state.orders.insert(order.clone());
    state.metrics.scheduled_orders.inc();

    tracing::info!(
        order_id = %order.id,
        driver_id = order.driver_id,
        day = %order.day,
        "order scheduled"
    );

    Ok(Json(order))
}

async fn list_orders(State(state): State<Arc<AppState>>) -> Json<Vec<Order>> {
    Json(state.orders.list())
}

async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Order>, AppError> {
    let order = state
        .orders
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("order {id} not found")))?;

    Ok(Json(order))
}

async fn orders_for_day(
    State(state): State<Arc<AppState>>,
    Path(day): Path<String>,
) -> Result<Json<Vec<Order>>, AppError> {
    let day = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("{day:?} is not a YYYY-MM-DD day")))?;

    Ok(Json(state.orders.for_day(day)))
}
