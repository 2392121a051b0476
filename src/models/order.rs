use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::coordinate::Coordinate;
use crate::models::driver::DriverId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub title: String,
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub driver_id: DriverId,
    pub pickup_point: Coordinate,
    pub destination_point: Coordinate,
}

impl Order {
    /// An order's active window is inclusive on both ends.
    pub fn covers(&self, at: NaiveTime) -> bool {
        self.start_time <= at && at <= self.end_time
    }
}

/// Default end time when none is given at creation: one hour after the
/// start, as plain time-of-day arithmetic (wraps at midnight).
pub fn default_end_time(start_time: NaiveTime) -> NaiveTime {
    start_time.overflowing_add_signed(Duration::hours(1)).0
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use uuid::Uuid;

    use super::{Order, default_end_time};
    use crate::models::coordinate::Coordinate;

    fn time(raw: &str) -> NaiveTime {
        NaiveTime::parse_from_str(raw, "%H:%M:%S").unwrap()
    }

    fn order(start: &str, end: &str) -> Order {
        Order {
            id: Uuid::new_v4(),
            title: "grocery run".to_string(),
            day: NaiveDate::from_ymd_opt(2021, 12, 10).unwrap(),
            start_time: time(start),
            end_time: time(end),
            driver_id: 1,
            pickup_point: Coordinate {
                latitude: 5,
                longitude: 9,
            },
            destination_point: Coordinate {
                latitude: 2,
                longitude: 6,
            },
        }
    }

    #[test]
    fn end_time_defaults_to_one_hour_after_start() {
        assert_eq!(default_end_time(time("09:15:00")), time("10:15:00"));
    }

    #[test]
    fn default_end_time_wraps_at_midnight() {
        assert_eq!(default_end_time(time("23:30:00")), time("00:30:00"));
    }

    #[test]
    fn window_is_inclusive_on_both_ends() {
        let order = order("10:00:00", "11:00:00");

        assert!(order.covers(time("10:00:00")));
        assert!(order.covers(time("10:30:00")));
        assert!(order.covers(time("11:00:00")));
        assert!(!order.covers(time("11:00:01")));
        assert!(!order.covers(time("09:59:59")));
    }
}
