// OTA update outcome and the updater contract

use std::fmt;

use crate::error::{Error, Result};

/// Result of one attempt to fetch and install firmware.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// Download or flashing failed; the running firmware stays.
    Failed(String),
    /// The server had nothing newer for us.
    NoUpdateAvailable,
    /// A new image was written. On hardware the device restarts before this
    /// is ever returned.
    Applied,
}

impl fmt::Display for UpdateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(reason) => write!(f, "update failed: {}", reason),
            Self::NoUpdateAvailable => write!(f, "no update available"),
            Self::Applied => write!(f, "update applied"),
        }
    }
}

impl From<Error> for UpdateOutcome {
    fn from(err: Error) -> Self {
        match err {
            Error::UpdateFailure(reason) => Self::Failed(reason),
            other => Self::Failed(other.to_string()),
        }
    }
}

/// What the firmware endpoint's status line says is coming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirmwareStatus {
    /// 304: the server has nothing newer than the version we sent.
    NotModified,
    /// 2xx: an image body follows.
    Image,
}

const HTTP_NOT_MODIFIED: u16 = 304;

/// Classify the firmware GET before anything is flashed.
pub fn firmware_status(status: u16) -> Result<FirmwareStatus> {
    match status {
        HTTP_NOT_MODIFIED => Ok(FirmwareStatus::NotModified),
        200..=299 => Ok(FirmwareStatus::Image),
        _ => Err(Error::UpdateFailure(format!("HTTP {}", status))),
    }
}

/// An image must have at least one byte before it is committed.
pub fn check_image_size(bytes_written: usize) -> Result<()> {
    if bytes_written == 0 {
        return Err(Error::UpdateFailure("firmware body is empty".into()));
    }
    Ok(())
}

/// Fetches the firmware image from the update host and installs it.
///
/// Called at most once per boot.
pub trait Updater {
    fn apply_update(&mut self) -> UpdateOutcome;
}

/// Log an outcome the way every caller wants it logged.
pub fn log_outcome(outcome: &UpdateOutcome) {
    match outcome {
        UpdateOutcome::Failed(reason) => log::error!("[update] Update failed: {}", reason),
        UpdateOutcome::NoUpdateAvailable => log::info!("[update] No update available"),
        UpdateOutcome::Applied => log::info!("[update] Update ok"),
    }
}
