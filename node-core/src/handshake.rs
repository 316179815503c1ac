//! Boot-time hello exchange and update check
//!
//! The node announces its chip id, firmware version and sensor set. The
//! server answers with the newest firmware version it holds. An update is
//! attempted only when that version is known and strictly newer than ours;
//! a missing or unparseable answer means "no decision", never a comparison
//! against a default.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::identity::DeviceId;
use crate::registry::Registry;
use crate::transport::Transport;
use crate::update::{log_outcome, UpdateOutcome, Updater};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

/// Body of `POST /hello`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelloRequest {
    pub chip: String,
    pub version: i64,
    pub sensors: Vec<SensorDescriptor>,
}

impl HelloRequest {
    pub fn new(device: DeviceId, firmware_version: i64, registry: &Registry) -> Self {
        Self {
            chip: device.hex(),
            version: firmware_version,
            sensors: registry
                .descriptors()
                .map(|(kind, id)| SensorDescriptor {
                    kind: kind.name().to_string(),
                    id: id.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HelloResponse {
    #[serde(default)]
    pub data: Option<HelloData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HelloData {
    #[serde(default)]
    pub fwversion: Option<i64>,
}

/// Extract the server's firmware version from a hello response body.
pub fn parse_server_version(body: &[u8]) -> Result<i64> {
    let response: HelloResponse =
        serde_json::from_slice(body).map_err(|e| Error::MalformedServerResponse(e.to_string()))?;

    response
        .data
        .and_then(|data| data.fwversion)
        .ok_or_else(|| Error::MalformedServerResponse("missing data.fwversion".to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateDecision {
    UpToDate,
    Newer(i64),
}

pub fn decide(local_version: i64, server_version: i64) -> UpdateDecision {
    if server_version > local_version {
        UpdateDecision::Newer(server_version)
    } else {
        UpdateDecision::UpToDate
    }
}

/// What the boot-time exchange ended with.
#[derive(Debug, Clone, PartialEq)]
pub enum HandshakeOutcome {
    /// The hello POST itself failed.
    Unreachable,
    /// The server answered but gave no usable version.
    NoVersionInfo,
    UpToDate { server_version: i64 },
    UpdateAttempted { server_version: i64, outcome: UpdateOutcome },
}

/// Run the hello exchange and, if warranted, the update.
pub fn say_hello<T, U>(transport: &mut T, updater: &mut U, path: &str, request: &HelloRequest) -> HandshakeOutcome
where
    T: Transport + ?Sized,
    U: Updater + ?Sized,
{
    log::info!("Version {}", request.version);

    let body = match serde_json::to_vec(request) {
        Ok(body) => body,
        Err(e) => {
            log::error!("Failed to encode hello: {}", e);
            return HandshakeOutcome::Unreachable;
        }
    };

    let response = match transport.post_json(path, &body) {
        Ok(response) => response,
        Err(e) => {
            log::error!("Hello failed: {}", e);
            return HandshakeOutcome::Unreachable;
        }
    };
    log::info!("Hello response: {}", String::from_utf8_lossy(&response));

    let server_version = match parse_server_version(&response) {
        Ok(version) => version,
        Err(e) => {
            log::warn!("{}; skipping update check", e);
            return HandshakeOutcome::NoVersionInfo;
        }
    };
    log::info!("Server has version {}", server_version);

    match decide(request.version, server_version) {
        UpdateDecision::UpToDate => HandshakeOutcome::UpToDate { server_version },
        UpdateDecision::Newer(server_version) => {
            log::info!("Server has version {}. Doing update.", server_version);
            let outcome = updater.apply_update();
            log_outcome(&outcome);
            HandshakeOutcome::UpdateAttempted { server_version, outcome }
        }
    }
}
