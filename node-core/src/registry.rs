// Ordered set of sensors discovered at boot

use crate::identity::{DeviceId, ProbeAddress};
use crate::sensor::{Sensor, SensorBus, SensorKind};

/// Sensors in discovery order. Built once at boot, never grows afterwards.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    sensors: Vec<Sensor>,
}

impl Registry {
    pub fn builder(device: DeviceId) -> RegistryBuilder {
        RegistryBuilder {
            device,
            sensors: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sensor> {
        self.sensors.iter()
    }

    /// `(kind, identity)` pairs in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = (SensorKind, &str)> {
        self.sensors.iter().map(|s| (s.kind(), s.identity()))
    }

    /// Measure every sensor once, in registration order.
    pub(crate) fn measure_all<B: SensorBus + ?Sized>(&mut self, bus: &mut B) {
        for sensor in &mut self.sensors {
            sensor.measure(bus);
        }
        bus.end_pass();
    }

    pub(crate) fn reset_all(&mut self) {
        for sensor in &mut self.sensors {
            sensor.reset();
        }
    }
}

/// Collects sensors during boot: board transducers first, then bus probes.
pub struct RegistryBuilder {
    device: DeviceId,
    sensors: Vec<Sensor>,
}

impl RegistryBuilder {
    pub fn scale(mut self, debug: bool) -> Self {
        self.sensors.push(Sensor::scale(self.device).with_debug(debug));
        self
    }

    pub fn motion(mut self, debug: bool) -> Self {
        self.sensors.push(Sensor::motion(self.device).with_debug(debug));
        self
    }

    pub fn probes<I>(mut self, addresses: I, debug: bool) -> Self
    where
        I: IntoIterator<Item = ProbeAddress>,
    {
        for address in addresses {
            self.sensors.push(Sensor::thermal(address).with_debug(debug));
        }
        self
    }

    pub fn build(self) -> Registry {
        for (i, sensor) in self.sensors.iter().enumerate() {
            log::info!("Sensor {}: {} id={}", i, sensor.display_name(), sensor.identity());
        }
        Registry {
            sensors: self.sensors,
        }
    }
}
