// Measurement report: built from the registry once per sampling window

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::transport::Transport;

/// One sensor's contribution to a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    /// Window mean; `null` if the window had no samples.
    pub val: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<Vec<f64>>,
}

/// Body of `POST /post_measurements`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementReport {
    pub measurements: Vec<MeasurementEntry>,
}

impl MeasurementReport {
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| Error::NetworkSendFailure(format!("encode report: {}", e)))
    }
}

/// One entry per registered sensor, in registration order, present or not.
pub fn build_report(registry: &Registry) -> MeasurementReport {
    MeasurementReport {
        measurements: registry.iter().map(|sensor| sensor.emit()).collect(),
    }
}

/// Single attempt to deliver a report. The response body is only logged.
pub fn send_report<T: Transport + ?Sized>(transport: &mut T, path: &str, report: &MeasurementReport) -> Result<()> {
    let body = report.to_json()?;
    log::info!("Posting {} measurements ({} bytes) to {}", report.len(), body.len(), path);

    let response = transport.post_json(path, &body)?;
    log::info!("Server: {}", String::from_utf8_lossy(&response));
    Ok(())
}
