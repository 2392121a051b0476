//! The four-stage nearest-available-driver pipeline: fetch the live
//! location snapshot, narrow it to fresh entries, drop drivers that are
//! mid-order, pick the closest survivor.
//!
//! Runs at most once per request, all-or-nothing: any stage failure
//! aborts the whole resolution and no partial result is returned.

pub mod availability;
pub mod freshness;
pub mod nearest;

use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::AppError;
use crate::feed::LiveDriverLocation;
use crate::models::coordinate::validate_point;
use crate::models::driver::{Driver, DriverId};
use crate::state::AppState;

/// Resolves the driver nearest to `(latitude, longitude)` that is free
/// at `hour` on `day`. `Ok(None)` means the pipeline completed with no
/// eligible driver, which is a valid outcome.
pub async fn find_nearest_available_driver(
    state: &AppState,
    latitude: i64,
    longitude: i64,
    day: &str,
    hour: &str,
) -> Result<Option<Driver>, AppError> {
    // Entry guard, before any feed or store access.
    validate_point(latitude, longitude)?;

    let locations = state.feed.fetch_locations().await?;
    debug!(total = locations.len(), "fetched location snapshot");

    let fresh = freshness::filter_fresh(locations, day, hour);
    debug!(fresh = fresh.len(), "applied freshness filter");

    let available: HashSet<DriverId> =
        availability::available_driver_ids(&state.drivers, &state.orders, &fresh, day, hour)?
            .into_iter()
            .collect();

    // Join the available ids back to the fresh snapshot so the selector
    // sees raw coordinates in original feed order.
    let candidates: Vec<LiveDriverLocation> = fresh
        .into_iter()
        .filter(|location| available.contains(&location.id))
        .collect();
    debug!(candidates = candidates.len(), "applied availability filter");

    let winner = nearest::select_nearest(latitude, longitude, &candidates);

    // The winning record is fetched fresh; if the driver vanished from
    // the directory in the meantime, degrade to "no driver found".
    let driver = winner.and_then(|id| state.drivers.get(id));

    match &driver {
        Some(driver) => info!(driver_id = driver.id, "nearest available driver resolved"),
        None => info!("no driver available"),
    }

    Ok(driver)
}
