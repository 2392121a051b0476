use std::sync::Arc;

use crate::feed::LocationFeed;
use crate::observability::metrics::Metrics;
use crate::store::{DriverDirectory, OrderStore};

pub struct AppState {
    pub drivers: DriverDirectory,
    pub orders: OrderStore,
    pub feed: Arc<dyn LocationFeed>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(feed: Arc<dyn LocationFeed>) -> Self {
        Self {
            drivers: DriverDirectory::new(),
            orders: OrderStore::new(),
            feed,
            metrics: Metrics::new(),
        }
    }
}
