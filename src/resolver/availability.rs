use chrono::{NaiveDate, NaiveTime};

use crate::error::AppError;
use crate::feed::LiveDriverLocation;
use crate::models::driver::DriverId;
use crate::store::{DriverDirectory, OrderStore};

const HOUR_FORMAT: &str = "%H:%M:%S";
const DAY_FORMAT: &str = "%Y-%m-%d";

pub fn parse_hour(hour: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(hour, HOUR_FORMAT)
        .map_err(|_| AppError::InvalidTimeFormat(format!("{hour:?} is not HH:MM:SS")))
}

/// Drops candidates that are mid-order at the requested day and hour.
///
/// Candidate ids come from the fresh location list; only drivers the
/// directory knows survive. A driver is busy when any of its orders for
/// the day covers the hour, window inclusive on both ends. An
/// unparseable or empty day matches no stored orders, so every known
/// driver comes back available.
pub fn available_driver_ids(
    directory: &DriverDirectory,
    orders: &OrderStore,
    candidates: &[LiveDriverLocation],
    day: &str,
    hour: &str,
) -> Result<Vec<DriverId>, AppError> {
    let at = parse_hour(hour)?;
    let candidate_ids: Vec<DriverId> = candidates.iter().map(|location| location.id).collect();
    let drivers = directory.get_many(&candidate_ids);
    let day = NaiveDate::parse_from_str(day, DAY_FORMAT).ok();

    let mut available = Vec::new();
    for driver in drivers {
        let day_orders = match day {
            Some(day) => orders.for_driver_on_day(driver.id, day),
            None => Vec::new(),
        };

        let busy = day_orders.iter().any(|order| order.covers(at));
        if !busy {
            available.push(driver.id);
        }
    }

    Ok(available)
}
