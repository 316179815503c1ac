//! The node's main loop
//!
//! One tick is a fixed sleep followed by one measurement of every sensor in
//! registration order. Every `window_size` ticks the averages are reported
//! and reset; every `reports_per_restart` reports the device restarts
//! itself. Everything runs on one thread and blocks; the only pauses are the
//! tick sleep and network I/O.

use std::time::Duration;

use crate::config::NodeConfig;
use crate::lifecycle::{Lifecycle, LifecycleEvent};
use crate::registry::Registry;
use crate::report::{build_report, send_report};
use crate::sensor::SensorBus;
use crate::transport::{System, Transport};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Sampled,
    Reported { delivered: bool },
    Restarted { delivered: bool },
}

/// Owns the registry, the sensor bus and the lifecycle counters.
pub struct SamplingLoop<B, T, S> {
    registry: Registry,
    lifecycle: Lifecycle,
    bus: B,
    transport: T,
    system: S,
    tick_interval: Duration,
    report_path: String,
}

impl<B, T, S> SamplingLoop<B, T, S>
where
    B: SensorBus,
    T: Transport,
    S: System,
{
    pub fn new(registry: Registry, bus: B, transport: T, system: S, config: &NodeConfig) -> Self {
        log::info!(
            "Sampling {} sensors every {} ms, reporting every {} ticks, restarting every {} reports",
            registry.len(),
            config.tick_interval_ms,
            config.window_size,
            config.reports_per_restart
        );
        Self {
            registry,
            lifecycle: Lifecycle::new(config.window_size, config.reports_per_restart),
            bus,
            transport,
            system,
            tick_interval: config.tick_interval(),
            report_path: config.report_path.clone(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    /// Run a single tick.
    pub fn step(&mut self) -> TickOutcome {
        self.system.sleep(self.tick_interval);
        self.registry.measure_all(&mut self.bus);

        match self.lifecycle.advance() {
            LifecycleEvent::Continue => TickOutcome::Sampled,
            LifecycleEvent::ReportDue => TickOutcome::Reported {
                delivered: self.report_cycle(),
            },
            LifecycleEvent::RestartDue => {
                let delivered = self.report_cycle();
                log::info!("Scheduled restart after {} reports", self.lifecycle.reports_per_restart());
                self.system.restart();
                TickOutcome::Restarted { delivered }
            }
        }
    }

    /// Loop forever. On hardware the scheduled restart ends this.
    pub fn run(mut self) -> ! {
        loop {
            self.step();
        }
    }

    fn report_cycle(&mut self) -> bool {
        let report = build_report(&self.registry);
        let delivered = match send_report(&mut self.transport, &self.report_path, &report) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Report not delivered: {}", e);
                false
            }
        };
        self.registry.reset_all();
        delivered
    }
}
