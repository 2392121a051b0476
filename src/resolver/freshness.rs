use crate::feed::LiveDriverLocation;

/// Narrows the snapshot to drivers whose `lastUpdate` looks current for
/// the requested time.
///
/// The day argument only gates whether the filter runs at all; the
/// actual match is hour-substring containment in `lastUpdate`. That
/// asymmetry is long-standing upstream behavior and is kept as-is
/// rather than tightened here (see the tests below).
pub fn filter_fresh(
    locations: Vec<LiveDriverLocation>,
    day: &str,
    hour: &str,
) -> Vec<LiveDriverLocation> {
    if day.is_empty() || hour.is_empty() {
        return locations;
    }

    locations
        .into_iter()
        .filter(|location| location.last_update.contains(hour))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::filter_fresh;
    use crate::feed::LiveDriverLocation;

    fn location(id: i64, last_update: &str) -> LiveDriverLocation {
        LiveDriverLocation {
            id,
            lat: 1.0,
            lng: 1.0,
            last_update: last_update.to_string(),
        }
    }

    #[test]
    fn keeps_only_locations_containing_the_hour() {
        let locations = vec![
            location(1, "2021-12-10T08:00:00Z"),
            location(2, "2021-12-10T09:30:00Z"),
        ];

        let fresh = filter_fresh(locations, "2021-12-10", "08:00:00");
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].id, 1);
    }

    #[test]
    fn empty_day_skips_the_filter_entirely() {
        let locations = vec![
            location(1, "2021-12-10T08:00:00Z"),
            location(2, "2021-12-10T09:30:00Z"),
        ];

        let fresh = filter_fresh(locations, "", "08:00:00");
        assert_eq!(fresh.len(), 2);
    }

    #[test]
    fn empty_hour_skips_the_filter_entirely() {
        let locations = vec![location(1, "2021-12-10T08:00:00Z")];

        let fresh = filter_fresh(locations, "2021-12-10", "");
        assert_eq!(fresh.len(), 1);
    }

    // Documents the inherited quirk: a location stamped on a completely
    // different day still passes as long as the hour substring matches.
    #[test]
    fn day_content_never_constrains_the_match() {
        let locations = vec![
            location(1, "2020-01-01T08:00:00Z"),
            location(2, "2021-12-10T09:30:00Z"),
        ];

        let fresh = filter_fresh(locations, "2021-12-10", "08:00:00");
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].id, 1);
    }
}
