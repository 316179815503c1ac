//! Device and sensor identity formatting
//!
//! The device identity is a 24-bit chip id taken from the low three bytes of
//! the factory MAC address, printed as eight upper-case hex digits. Sensors
//! wired directly to the board share that id; 1-Wire probes are identified
//! by their own 64-bit ROM address instead.

use std::fmt;

/// Stable hardware-derived identifier of this node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceId(u32);

impl DeviceId {
    pub fn new(chip_id: u32) -> Self {
        Self(chip_id)
    }

    /// Derive the chip id from a station MAC address.
    pub fn from_mac(mac: &[u8; 6]) -> Self {
        Self(u32::from(mac[3]) << 16 | u32::from(mac[4]) << 8 | u32::from(mac[5]))
    }

    pub fn chip_id(&self) -> u32 {
        self.0
    }

    /// Eight-digit upper-case hex form sent to the server as `chip`.
    pub fn hex(&self) -> String {
        format!("{:08X}", self.0)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

/// ROM address of a probe on the 1-Wire bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProbeAddress(pub u64);

impl ProbeAddress {
    pub fn hex(&self) -> String {
        format!("{:016X}", self.0)
    }
}

impl fmt::Display for ProbeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016X}", self.0)
    }
}

/// Identity of a sensor wired to the board: kind name followed by the chip id.
pub fn chip_identity(kind_name: &str, device: DeviceId) -> String {
    format!("{}{}", kind_name, device.hex())
}

/// Identity of a 1-Wire probe, independent of the device it hangs off.
pub fn probe_identity(address: ProbeAddress) -> String {
    address.hex()
}
