//! Static device metadata.
//!
//! The descriptor is declarative configuration, not logic: endpoint topology,
//! the capabilities delegated verbatim to the host's standard converters, the
//! numeric capabilities with their wire bindings and valid ranges, and the
//! hand-declared exposure records. It is built once per device definition and
//! never mutated; every decode and every outbound write reads the same copy.

pub mod expose;
pub mod numeric;

pub use expose::{Expose, ExposeType};
pub use numeric::{
    AccessMode, NumericCapability, ReportingConfig, ReportingInterval, ValueRange,
};

use crate::error::{ConverterError, Result};

/// Logical role of each endpoint on the physical device.
///
/// Assigned by firmware and fixed for the device's lifetime: the decoder uses
/// the id to tell otherwise identical cluster/attribute pairs apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EndpointRole {
    /// Temperature, humidity and pressure measurements.
    Primary = 1,
    /// Cumulative rainfall counter.
    RainGauge = 2,
    /// Deep-sleep interval configuration channel.
    SleepConfig = 3,
}

impl EndpointRole {
    /// Wire endpoint id.
    pub const fn id(self) -> u8 {
        self as u8
    }

    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Primary),
            2 => Some(Self::RainGauge),
            3 => Some(Self::SleepConfig),
            _ => None,
        }
    }
}

/// Capabilities decoded entirely by the host framework's standard converters.
///
/// Battery appears here only for first-generation firmware; the second
/// generation replaces it with the custom power-configuration decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardCapability {
    Temperature,
    Humidity,
    Pressure,
    Battery,
}

/// Immutable per-device-type metadata consumed by the host.
#[derive(Debug, Clone)]
pub struct DeviceDescriptor {
    /// Model identifier advertised in listings.
    pub model: &'static str,
    pub vendor: &'static str,
    pub description: &'static str,
    /// Zigbee model strings used to fingerprint the device at join time.
    pub zigbee_models: &'static [&'static str],
    /// Whether firmware updates are offered over the air.
    pub ota: bool,
    pub endpoints: &'static [EndpointRole],
    pub standard_capabilities: &'static [StandardCapability],
    pub numeric_capabilities: Vec<NumericCapability>,
    /// Hand-declared exposure records for custom-decoded fields.
    pub exposes: Vec<Expose>,
}

impl DeviceDescriptor {
    /// Look up a numeric capability by its published name.
    pub fn numeric(&self, name: &str) -> Option<&NumericCapability> {
        self.numeric_capabilities.iter().find(|c| c.name == name)
    }

    /// Validate an outbound write against the named capability's declared
    /// access mode and range. The host must call this before constructing
    /// the wire write command.
    pub fn validate_write(&self, name: &str, value: f64) -> Result<()> {
        let capability = self
            .numeric(name)
            .ok_or_else(|| ConverterError::UnknownCapability(name.to_string()))?;
        capability.validate_write(value)
    }
}
