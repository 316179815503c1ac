//! Error types for the sensor node.
//!
//! Nothing in normal sampling or reporting is fatal. Each variant is logged
//! by whoever receives it and the node carries on with the next scheduled
//! cycle.
//!
//! | Error | Raised by | Consequence |
//! |-------|-----------|-------------|
//! | [`Error::SensorUnavailable`] | [`crate::SensorBus`] reads | sensor marked not present, reading 0 |
//! | [`Error::NetworkSendFailure`] | [`crate::Transport`] | logged, next cycle is the retry |
//! | [`Error::MalformedServerResponse`] | hello response parsing | no update decision this boot |
//! | [`Error::UpdateFailure`] | [`crate::Updater`] | current firmware kept |
//! | [`Error::AssociationFailure`] | WiFi bootstrap | device keeps waiting |
//! | [`Error::InvalidConfig`] | [`crate::NodeConfig::validate`] | boot refuses the config |

use thiserror::Error;

/// Errors that can occur on the sensor node.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A hardware read failed.
    #[error("sensor unavailable: {0}")]
    SensorUnavailable(String),

    /// A handshake or report POST did not complete.
    #[error("network send failed: {0}")]
    NetworkSendFailure(String),

    /// The server answered with something we could not interpret.
    #[error("malformed server response: {0}")]
    MalformedServerResponse(String),

    /// Fetching or flashing a firmware image failed.
    #[error("update failed: {0}")]
    UpdateFailure(String),

    /// No candidate network could be joined.
    #[error("wifi association failed: {0}")]
    AssociationFailure(String),

    /// Compile-time configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias using the node's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
