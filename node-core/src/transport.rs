// Platform contracts used by the protocol and the sampling loop

use std::time::Duration;

use crate::error::{Error, Result};

/// Posts JSON to the server.
///
/// Each call opens its own connection, sends one request and closes the
/// connection again. No retries: the caller's next scheduled cycle is the
/// retry.
pub trait Transport {
    /// POST `body` to `path` and return the response body.
    fn post_json(&mut self, path: &str, body: &[u8]) -> Result<Vec<u8>>;
}

/// Blocking sleep and restart, injectable so the loop can be driven in tests.
pub trait System {
    fn sleep(&mut self, duration: Duration);

    /// Restart the whole device. On hardware this does not return.
    fn restart(&mut self);
}

/// Only a 2xx answer counts as delivered.
pub fn check_post_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(Error::NetworkSendFailure(format!("HTTP {}", status)))
    }
}
