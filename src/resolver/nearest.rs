use crate::feed::LiveDriverLocation;
use crate::geo::euclidean_distance;
use crate::models::driver::DriverId;

/// Transient ranking entry, produced and discarded within one
/// resolution call.
#[derive(Debug, Clone)]
pub struct DistanceCandidate {
    pub driver_id: DriverId,
    pub distance: f64,
}

/// Ranks the surviving candidates by straight-line distance to the
/// query point, ascending. The sort is stable, so equal distances keep
/// their feed order and the earlier entry wins.
pub fn rank_by_distance(
    latitude: i64,
    longitude: i64,
    candidates: &[LiveDriverLocation],
) -> Vec<DistanceCandidate> {
    let mut ranked: Vec<DistanceCandidate> = candidates
        .iter()
        .map(|location| DistanceCandidate {
            driver_id: location.id,
            distance: euclidean_distance(latitude, longitude, location.lat, location.lng),
        })
        .collect();

    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}

/// An empty candidate list is a valid outcome, not an error.
pub fn select_nearest(
    latitude: i64,
    longitude: i64,
    candidates: &[LiveDriverLocation],
) -> Option<DriverId> {
    rank_by_distance(latitude, longitude, candidates)
        .first()
        .map(|candidate| candidate.driver_id)
}
