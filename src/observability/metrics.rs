use prometheus::{Encoder, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub resolutions_total: IntCounterVec,
    pub resolution_latency_seconds: HistogramVec,
    pub registered_drivers: IntGauge,
    pub scheduled_orders: IntGauge,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let resolutions_total = IntCounterVec::new(
            Opts::new(
                "resolutions_total",
                "Total nearest-driver resolutions by outcome",
            ),
            &["outcome"],
        )
        .expect("valid resolutions_total metric");

        let resolution_latency_seconds = HistogramVec::new(
            prometheus::HistogramOpts::new(
                "resolution_latency_seconds",
                "Latency of nearest-driver resolutions in seconds",
            ),
            &["outcome"],
        )
        .expect("valid resolution_latency_seconds metric");

        let registered_drivers =
            IntGauge::new("registered_drivers", "Current number of registered drivers")
                .expect("valid registered_drivers metric");

        let scheduled_orders =
            IntGauge::new("scheduled_orders", "Current number of scheduled orders")
                .expect("valid scheduled_orders metric");

        registry
            .register(Box::new(resolutions_total.clone()))
            .expect("register resolutions_total");
        registry
            .register(Box::new(resolution_latency_seconds.clone()))
            .expect("register resolution_latency_seconds");
        registry
            .register(Box::new(registered_drivers.clone()))
            .expect("register registered_drivers");
        registry
            .register(Box::new(scheduled_orders.clone()))
            .expect("register scheduled_orders");

        Self {
            registry,
            resolutions_total,
            resolution_latency_seconds,
            registered_drivers,
            scheduled_orders,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
