//! Node Core - hardware-independent logic for the sensor node firmware
//!
//! Sampling, averaging, reporting and the boot-time update check live here
//! so they can be tested on the host. The firmware crate supplies the
//! hardware behind [`SensorBus`], [`Transport`], [`Updater`] and [`System`].

pub mod averager;
pub mod config;
pub mod error;
pub mod handshake;
pub mod identity;
pub mod lifecycle;
pub mod registry;
pub mod report;
pub mod sampling;
pub mod sensor;
pub mod transport;
pub mod update;
pub mod wifi;

pub use averager::{Averager, TRACE_CAPACITY};
pub use config::NodeConfig;
pub use error::{Error, Result};
pub use handshake::{say_hello, HandshakeOutcome, HelloRequest};
pub use identity::{DeviceId, ProbeAddress};
pub use lifecycle::{Lifecycle, LifecycleEvent};
pub use registry::Registry;
pub use report::{build_report, send_report, MeasurementEntry, MeasurementReport};
pub use sampling::{SamplingLoop, TickOutcome};
pub use sensor::{Sensor, SensorBus, SensorKind};
pub use transport::{check_post_status, System, Transport};
pub use update::{check_image_size, firmware_status, FirmwareStatus, UpdateOutcome, Updater};
pub use wifi::{select_network, Candidate};
