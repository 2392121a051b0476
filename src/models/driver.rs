use serde::{Deserialize, Serialize};

/// Integer ids, not uuids: the live location feed keys its records by
/// integer driver id and the resolution pipeline joins on it.
pub type DriverId = i64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub first_name: String,
    pub last_name: String,
}
