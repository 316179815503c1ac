// Sensor abstraction: one variant per kind of transducer on the node

use crate::averager::Averager;
use crate::error::Result;
use crate::identity::{chip_identity, probe_identity, DeviceId, ProbeAddress};
use crate::report::MeasurementEntry;

/// Raw hardware reads the node depends on.
///
/// The sampling loop is the only owner of the bus, so implementations need
/// no locking.
pub trait SensorBus {
    /// Averaged raw count from the load-cell ADC.
    fn read_scale(&mut self) -> Result<f64>;

    /// Level of the PIR output pin, 0.0 or 1.0.
    fn read_motion(&mut self) -> Result<f64>;

    /// Temperature in degrees Celsius from one probe.
    fn read_probe(&mut self, address: ProbeAddress) -> Result<f64>;

    /// Called once after every sensor has been measured in a tick.
    fn end_pass(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    Scale,
    Motion,
    Thermal(ProbeAddress),
}

impl SensorKind {
    /// Name sent on the wire as `type`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scale => "strain",
            Self::Motion => "pir",
            Self::Thermal(_) => "temp",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sensor {
    kind: SensorKind,
    display_name: String,
    identity: String,
    present: bool,
    debug_enabled: bool,
    averager: Averager,
}

impl Sensor {
    fn new(kind: SensorKind, display_name: String, identity: String) -> Self {
        Self {
            kind,
            display_name,
            identity,
            present: true,
            debug_enabled: false,
            averager: Averager::new(),
        }
    }

    pub fn scale(device: DeviceId) -> Self {
        let kind = SensorKind::Scale;
        Self::new(kind, "Load cell".to_string(), chip_identity(kind.name(), device))
    }

    pub fn motion(device: DeviceId) -> Self {
        let kind = SensorKind::Motion;
        Self::new(kind, "PIR".to_string(), chip_identity(kind.name(), device))
    }

    pub fn thermal(address: ProbeAddress) -> Self {
        Self::new(
            SensorKind::Thermal(address),
            format!("DS18B20 {}", address),
            probe_identity(address),
        )
    }

    /// Include the raw trace of each window in reports.
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// False once any read has failed. Never goes back to true.
    pub fn is_present(&self) -> bool {
        self.present
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    pub fn averager(&self) -> &Averager {
        &self.averager
    }

    /// Read the transducer. A failed read yields 0.0 and clears `present`.
    pub fn read_raw<B: SensorBus + ?Sized>(&mut self, bus: &mut B) -> f64 {
        let reading = match self.kind {
            SensorKind::Scale => bus.read_scale(),
            SensorKind::Motion => bus.read_motion(),
            SensorKind::Thermal(address) => bus.read_probe(address),
        };

        match reading {
            Ok(value) => {
                log::debug!("{}: {}", self.display_name, value);
                value
            }
            Err(e) => {
                if self.present {
                    log::warn!("{} ({}) not responding: {}", self.display_name, self.identity, e);
                } else {
                    log::debug!("{} still unavailable: {}", self.display_name, e);
                }
                self.present = false;
                0.0
            }
        }
    }

    /// Read once and feed the value into this window's average.
    pub fn measure<B: SensorBus + ?Sized>(&mut self, bus: &mut B) {
        let value = self.read_raw(bus);
        self.averager.submit(value);
    }

    /// Report entry for the window that just elapsed.
    pub fn emit(&self) -> MeasurementEntry {
        let debug = if self.debug_enabled {
            if self.averager.dropped() > 0 {
                log::warn!(
                    "{}: trace holds {} of {} samples, {} dropped",
                    self.display_name,
                    self.averager.trace().len(),
                    self.averager.count(),
                    self.averager.dropped()
                );
            }
            Some(self.averager.trace().to_vec())
        } else {
            None
        };

        MeasurementEntry {
            kind: self.kind.name().to_string(),
            id: self.identity.clone(),
            val: self.averager.mean(),
            debug,
        }
    }

    pub fn reset(&mut self) {
        self.averager.reset();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::Error;

    /// Bus that returns fixed values and can be told to fail.
    #[derive(Default)]
    pub(crate) struct FixedBus {
        pub scale: f64,
        pub motion: f64,
        pub probe: f64,
        pub scale_fails: bool,
    }

    impl SensorBus for FixedBus {
        fn read_scale(&mut self) -> Result<f64> {
            if self.scale_fails {
                Err(Error::SensorUnavailable("HX711 not found".into()))
            } else {
                Ok(self.scale)
            }
        }

        fn read_motion(&mut self) -> Result<f64> {
            Ok(self.motion)
        }

        fn read_probe(&mut self, address: ProbeAddress) -> Result<f64> {
            Ok(self.probe + (address.0 & 0xF) as f64)
        }
    }

    #[test]
    fn test_chip_sensors_share_device_suffix() {
        let device = DeviceId::new(0x00C0FFEE);
        let scale = Sensor::scale(device);
        let pir = Sensor::motion(device);

        assert_eq!(scale.identity(), "strain00C0FFEE");
        assert_eq!(pir.identity(), "pir00C0FFEE");
        assert!(scale.identity().ends_with(&device.hex()));
        assert!(pir.identity().ends_with(&device.hex()));
    }

    #[test]
    fn test_thermal_identity_comes_from_probe() {
        let a = Sensor::thermal(ProbeAddress(0x28FF_0000_0000_0001));
        let b = Sensor::thermal(ProbeAddress(0x28FF_0000_0000_0002));

        assert_ne!(a.identity(), b.identity());
        assert_eq!(a.identity(), "28FF000000000001");
        assert!(!a.identity().contains("C0FFEE"));
    }

    #[test]
    fn test_measure_feeds_averager() {
        let mut bus = FixedBus { scale: 1200.0, ..Default::default() };
        let mut sensor = Sensor::scale(DeviceId::new(1));

        sensor.measure(&mut bus);
        bus.scale = 1000.0;
        sensor.measure(&mut bus);

        assert_eq!(sensor.averager().mean(), Some(1100.0));
        assert!(sensor.is_present());
    }

    #[test]
    fn test_failed_read_is_sticky_and_counts_as_zero() {
        let mut bus = FixedBus { scale: 10.0, scale_fails: true, ..Default::default() };
        let mut sensor = Sensor::scale(DeviceId::new(1));

        sensor.measure(&mut bus);
        assert!(!sensor.is_present());

        bus.scale_fails = false;
        sensor.measure(&mut bus);

        // recovered reads still count but presence stays cleared
        assert!(!sensor.is_present());
        assert_eq!(sensor.averager().mean(), Some(5.0));
    }

    #[test]
    fn test_emit_includes_trace_only_when_debug() {
        let mut bus = FixedBus { motion: 1.0, ..Default::default() };
        let mut plain = Sensor::motion(DeviceId::new(7));
        let mut traced = Sensor::motion(DeviceId::new(7)).with_debug(true);

        for _ in 0..3 {
            plain.measure(&mut bus);
            traced.measure(&mut bus);
        }

        assert_eq!(plain.emit().debug, None);
        let entry = traced.emit();
        assert_eq!(entry.kind, "pir");
        assert_eq!(entry.val, Some(1.0));
        assert_eq!(entry.debug, Some(vec![1.0, 1.0, 1.0]));
    }
}
