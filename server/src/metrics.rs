use prometheus::{register_int_counter_with_registry, IntCounter, Registry};

#[derive(Clone)]
pub struct ServerMetrics {
    pub ticks: IntCounter,
    pub emitted_units: IntCounter,
    pub saves: IntCounter,
    pub failed_saves: IntCounter,
    pub loads: IntCounter,
    pub failed_loads: IntCounter,
}

impl ServerMetrics {
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let ticks = register_int_counter_with_registry!("server_ticks", "server_ticks", registry)?;

        let emitted_units = register_int_counter_with_registry!(
            "server_emitted_units",
            "server_emitted_units",
            registry
        )?;

        let saves = register_int_counter_with_registry!("server_saves", "server_saves", registry)?;

        let failed_saves = register_int_counter_with_registry!(
            "server_failed_saves",
            "server_failed_saves",
            registry
        )?;

        let loads = register_int_counter_with_registry!("server_loads", "server_loads", registry)?;

        let failed_loads = register_int_counter_with_registry!(
            "server_failed_loads",
            "server_failed_loads",
            registry
        )?;

        Ok(Self {
            ticks,
            emitted_units,
            saves,
            failed_saves,
            loads,
            failed_loads,
        })
    }
}
