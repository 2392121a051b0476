use chrono::NaiveDate;
use dashmap::DashMap;
use uuid::Uuid;

use crate::models::driver::DriverId;
use crate::models::order::Order;

/// In-memory order store. Orders are immutable once inserted; the
/// resolution pipeline only ever reads from here.
pub struct OrderStore {
    orders: DashMap<Uuid, Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            orders: DashMap::new(),
        }
    }

    pub fn insert(&self, order: Order) {
        self.orders.insert(order.id, order);
    }

    pub fn get(&self, id: Uuid) -> Option<Order> {
        self.orders.get(&id).map(|entry| entry.value().clone())
    }

    pub fn list(&self) -> Vec<Order> {
        self.sorted_by_start_time(|_| true)
    }

    pub fn for_day(&self, day: NaiveDate) -> Vec<Order> {
        self.sorted_by_start_time(|order| order.day == day)
    }

    pub fn for_driver_on_day(&self, driver_id: DriverId, day: NaiveDate) -> Vec<Order> {
        self.sorted_by_start_time(|order| order.driver_id == driver_id && order.day == day)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn sorted_by_start_time(&self, keep: impl Fn(&Order) -> bool) -> Vec<Order> {
        let mut matching: Vec<Order> = self
            .orders
            .iter()
            .filter(|entry| keep(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        matching.sort_by_key(|order| (order.start_time, order.id));
        matching
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}
