/// Protocol and timing settings, fixed at compile time
use std::time::Duration;

use crate::averager::TRACE_CAPACITY;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct NodeConfig {
    pub firmware_version: i64,

    // Sampling
    pub tick_interval_ms: u64,
    pub window_size: u32,
    pub reports_per_restart: u32,

    // Server endpoints
    pub hello_path: String,
    pub report_path: String,
    pub firmware_path: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            firmware_version: 11,
            tick_interval_ms: 800,
            window_size: 60,
            reports_per_restart: 60,
            hello_path: "/hello".to_string(),
            report_path: "/post_measurements".to_string(),
            firmware_path: "/static/sensor.bin".to_string(),
        }
    }
}

impl NodeConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Wall time between scheduled restarts.
    pub fn restart_period(&self) -> Duration {
        self.tick_interval() * self.window_size * self.reports_per_restart
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(Error::InvalidConfig("window_size must be at least 1".into()));
        }
        if self.reports_per_restart == 0 {
            return Err(Error::InvalidConfig("reports_per_restart must be at least 1".into()));
        }
        if self.tick_interval_ms == 0 {
            return Err(Error::InvalidConfig("tick_interval_ms must be non-zero".into()));
        }
        if self.window_size as usize > TRACE_CAPACITY {
            log::warn!(
                "Sampling window of {} exceeds trace capacity {}; debug traces will be truncated",
                self.window_size,
                TRACE_CAPACITY
            );
        }
        Ok(())
    }
}
