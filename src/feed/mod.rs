use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, de};

use crate::error::AppError;
use crate::models::driver::DriverId;

/// One driver's last known position as reported by the live feed.
/// Ephemeral: fetched per request, never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct LiveDriverLocation {
    pub id: DriverId,
    #[serde(deserialize_with = "coordinate_value")]
    pub lat: f64,
    #[serde(deserialize_with = "coordinate_value")]
    pub lng: f64,
    #[serde(rename = "lastUpdate")]
    pub last_update: String,
}

/// The upstream wraps the location list under a fixed top-level key.
#[derive(Debug, Deserialize)]
struct FeedPayload {
    alfreds: Vec<LiveDriverLocation>,
}

// The feed is inconsistent about coordinate types and sends either a
// bare number or a numeric string.
fn coordinate_value<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("non-numeric coordinate {raw:?}"))),
    }
}

#[async_trait]
pub trait LocationFeed: Send + Sync {
    /// Pulls the full driver-location snapshot. No retries here; a
    /// failed or malformed read surfaces to the caller as
    /// [`AppError::UpstreamUnavailable`].
    async fn fetch_locations(&self) -> Result<Vec<LiveDriverLocation>, AppError>;
}

pub struct HttpLocationFeed {
    client: reqwest::Client,
    url: String,
}

impl HttpLocationFeed {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| AppError::Internal(format!("failed to build feed client: {err}")))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl LocationFeed for HttpLocationFeed {
    async fn fetch_locations(&self) -> Result<Vec<LiveDriverLocation>, AppError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| AppError::UpstreamUnavailable(format!("request failed: {err}")))?;

        let payload: FeedPayload = response
            .json()
            .await
            .map_err(|err| AppError::UpstreamUnavailable(format!("malformed payload: {err}")))?;

        Ok(payload.alfreds)
    }
}

/// Canned feed for tests and offline development: either a fixed
/// snapshot or a permanently failing upstream.
pub struct StaticLocationFeed {
    snapshot: Result<Vec<LiveDriverLocation>, String>,
}

impl StaticLocationFeed {
    pub fn with_locations(locations: Vec<LiveDriverLocation>) -> Self {
        Self {
            snapshot: Ok(locations),
        }
    }

    pub fn unavailable(reason: &str) -> Self {
        Self {
            snapshot: Err(reason.to_string()),
        }
    }
}

#[async_trait]
impl LocationFeed for StaticLocationFeed {
    async fn fetch_locations(&self) -> Result<Vec<LiveDriverLocation>, AppError> {
        match &self.snapshot {
            Ok(locations) => Ok(locations.clone()),
            Err(reason) => Err(AppError::UpstreamUnavailable(reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FeedPayload, LiveDriverLocation, LocationFeed, StaticLocationFeed};
    use crate::error::AppError;

    #[test]
    fn parses_numeric_and_string_coordinates() {
        let raw = r#"{
            "alfreds": [
                {"id": 1, "lat": "57", "lng": -2.5, "lastUpdate": "2021-12-10T00:00:00Z"},
                {"id": 2, "lat": 3, "lng": "4.7", "lastUpdate": "2021-12-10T00:00:00Z"}
            ]
        }"#;

        let payload: FeedPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.alfreds.len(), 2);
        assert_eq!(payload.alfreds[0].lat, 57.0);
        assert_eq!(payload.alfreds[0].lng, -2.5);
        assert_eq!(payload.alfreds[1].lng, 4.7);
    }

    #[test]
    fn rejects_non_numeric_coordinate_string() {
        let raw = r#"{"alfreds": [{"id": 1, "lat": "north", "lng": 2, "lastUpdate": "x"}]}"#;
        assert!(serde_json::from_str::<FeedPayload>(raw).is_err());
    }

    #[test]
    fn rejects_payload_missing_top_level_key() {
        let raw = r#"{"drivers": []}"#;
        assert!(serde_json::from_str::<FeedPayload>(raw).is_err());
    }

    #[tokio::test]
    async fn static_feed_returns_snapshot() {
        let feed = StaticLocationFeed::with_locations(vec![LiveDriverLocation {
            id: 7,
            lat: 1.0,
            lng: 2.0,
            last_update: "2021-12-10T08:00:00Z".to_string(),
        }]);

        let locations = feed.fetch_locations().await.unwrap();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].id, 7);
    }

    #[tokio::test]
    async fn static_feed_can_simulate_outage() {
        let feed = StaticLocationFeed::unavailable("connection refused");
        let err = feed.fetch_locations().await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamUnavailable(_)));
    }
}
