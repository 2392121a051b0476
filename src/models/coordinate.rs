use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A stored pickup or destination point. The domain only deals in
/// non-negative integer grid coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Coordinate {
    pub latitude: i64,
    pub longitude: i64,
}

impl Coordinate {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_point(self.latitude, self.longitude)
    }
}

/// Rejects negative query or storage points before any I/O happens.
pub fn validate_point(latitude: i64, longitude: i64) -> Result<(), AppError> {
    if latitude < 0 || longitude < 0 {
        return Err(AppError::InvalidCoordinate(format!(
            "({latitude}, {longitude}) must be non-negative"
        )));
    }

    Ok(())
}
