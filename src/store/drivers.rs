use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;

use crate::models::driver::{Driver, DriverId};

/// In-memory driver directory. Reads always return drivers in stable id
/// order so downstream filtering stays deterministic.
pub struct DriverDirectory {
    drivers: DashMap<DriverId, Driver>,
    next_id: AtomicI64,
}

impl DriverDirectory {
    pub fn new() -> Self {
        Self {
            drivers: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn create(&self, first_name: String, last_name: String) -> Driver {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let driver = Driver {
            id,
            first_name,
            last_name,
        };

        self.drivers.insert(id, driver.clone());
        driver
    }

    pub fn get(&self, id: DriverId) -> Option<Driver> {
        self.drivers.get(&id).map(|entry| entry.value().clone())
    }

    /// Fetches the subset of `ids` the directory actually knows, sorted
    /// by id. Ids without a record drop out silently.
    pub fn get_many(&self, ids: &[DriverId]) -> Vec<Driver> {
        let mut found: Vec<Driver> = ids.iter().filter_map(|id| self.get(*id)).collect();
        found.sort_by_key(|driver| driver.id);
        found.dedup_by_key(|driver| driver.id);
        found
    }

    pub fn remove(&self, id: DriverId) -> Option<Driver> {
        self.drivers.remove(&id).map(|(_, driver)| driver)
    }

    pub fn list(&self) -> Vec<Driver> {
        let mut all: Vec<Driver> = self
            .drivers
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by_key(|driver| driver.id);
        all
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}

impl Default for DriverDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::DriverDirectory;

    #[test]
    fn assigns_sequential_ids() {
        let directory = DriverDirectory::new();
        let first = directory.create("Ada".to_string(), "Lovelace".to_string());
        let second = directory.create("Grace".to_string(), "Hopper".to_string());

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn get_many_is_sorted_and_skips_unknown_ids() {
        let directory = DriverDirectory::new();
        directory.create("Ada".to_string(), "Lovelace".to_string());
        directory.create("Grace".to_string(), "Hopper".to_string());

        let found = directory.get_many(&[2, 99, 1]);
        let ids: Vec<i64> = found.iter().map(|driver| driver.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn remove_makes_driver_unresolvable() {
        let directory = DriverDirectory::new();
        let driver = directory.create("Ada".to_string(), "Lovelace".to_string());

        assert!(directory.remove(driver.id).is_some());
        assert!(directory.get(driver.id).is_none());
        assert!(directory.remove(driver.id).is_none());
    }
}
