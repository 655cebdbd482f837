//! Per-revision device definitions.
//!
//! Two firmware generations of the Caelum hardware are in the field and use
//! incompatible unit encodings. Each revision gets its own decoder set and
//! descriptor; nothing branches on the revision at decode time.

use crate::decoders::{DecoderChain, PowerConfigDecoder, RainfallDecoder, RainfallResolution};
use crate::descriptor::{
    AccessMode, DeviceDescriptor, EndpointRole, Expose, NumericCapability, ReportingConfig,
    ReportingInterval, StandardCapability, ValueRange,
};
use crate::reading::{FIELD_BATTERY, FIELD_RAINFALL, FIELD_VOLTAGE, Reading};
use crate::report::{ATTR_PRESENT_VALUE, AttributeReport, Cluster};
use log::info;

const MODEL: &str = "caelum";
const VENDOR: &str = "ESPRESSIF";
const DESCRIPTION: &str = "Caelum - Battery-powered Zigbee weather station with rain gauge";
const ZIGBEE_MODELS: &[&str] = &["caelum"];

const ENDPOINTS: &[EndpointRole] = &[
    EndpointRole::Primary,
    EndpointRole::RainGauge,
    EndpointRole::SleepConfig,
];

/// Firmware generations of the Caelum hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirmwareRevision {
    /// Integer-millimeter rainfall; battery via the standard capability.
    RevisionA,
    /// Centi-millimeter rainfall; battery via the custom power-configuration
    /// decoder with hand-declared exposures.
    RevisionB,
}

/// One revision's descriptor and decoder chain, bundled.
///
/// Built once at device-definition load time and shared read-only afterwards;
/// `decode` is safe to call from any number of threads concurrently.
pub struct DeviceDefinition {
    revision: FirmwareRevision,
    descriptor: DeviceDescriptor,
    decoders: DecoderChain,
}

impl DeviceDefinition {
    pub fn for_revision(revision: FirmwareRevision) -> Self {
        info!("Loading Caelum device definition for {revision:?}");
        match revision {
            FirmwareRevision::RevisionA => Self::revision_a(),
            FirmwareRevision::RevisionB => Self::revision_b(),
        }
    }

    fn revision_a() -> Self {
        let descriptor = DeviceDescriptor {
            model: MODEL,
            vendor: VENDOR,
            description: DESCRIPTION,
            zigbee_models: ZIGBEE_MODELS,
            ota: true,
            endpoints: ENDPOINTS,
            standard_capabilities: &[
                StandardCapability::Temperature,
                StandardCapability::Humidity,
                StandardCapability::Pressure,
                StandardCapability::Battery,
            ],
            // Rainfall is intentionally a bare custom-decoded field on this
            // revision; only the decoder knows about it.
            numeric_capabilities: vec![sleep_duration_capability()],
            exposes: Vec::new(),
        };

        let decoders =
            DecoderChain::new().register(RainfallDecoder::new(RainfallResolution::Millimeters));

        Self {
            revision: FirmwareRevision::RevisionA,
            descriptor,
            decoders,
        }
    }

    fn revision_b() -> Self {
        let descriptor = DeviceDescriptor {
            model: MODEL,
            vendor: VENDOR,
            description: DESCRIPTION,
            zigbee_models: ZIGBEE_MODELS,
            ota: true,
            endpoints: ENDPOINTS,
            standard_capabilities: &[
                StandardCapability::Temperature,
                StandardCapability::Humidity,
                StandardCapability::Pressure,
            ],
            numeric_capabilities: vec![
                sleep_duration_capability(),
                NumericCapability {
                    name: FIELD_RAINFALL,
                    cluster: Cluster::AnalogInput,
                    attribute: ATTR_PRESENT_VALUE,
                    endpoint: EndpointRole::RainGauge,
                    unit: "mm",
                    description: "Cumulative rainfall",
                    access: AccessMode::ReadOnly,
                    reporting: ReportingConfig {
                        min: ReportingInterval::ProtocolMin,
                        max: ReportingInterval::ProtocolMax,
                        change: 0.01,
                    },
                    range: Some(ValueRange::new(0.0, 10000.0)),
                },
            ],
            exposes: vec![
                Expose::numeric(FIELD_BATTERY, "Remaining battery level", "%")
                    .with_range(ValueRange::new(0.0, 100.0)),
                Expose::numeric(FIELD_VOLTAGE, "Battery voltage", "mV"),
            ],
        };

        let decoders = DecoderChain::new()
            .register(RainfallDecoder::new(RainfallResolution::CentiMillimeters))
            .register(PowerConfigDecoder);

        Self {
            revision: FirmwareRevision::RevisionB,
            descriptor,
            decoders,
        }
    }

    pub fn revision(&self) -> FirmwareRevision {
        self.revision
    }

    pub fn descriptor(&self) -> &DeviceDescriptor {
        &self.descriptor
    }

    /// Run the report through this revision's decoder chain.
    ///
    /// `None` means no custom decoder claimed it and the host's standard
    /// converters should process the report instead.
    pub fn decode(&self, report: &AttributeReport) -> Option<Reading> {
        self.decoders.decode(report)
    }
}

fn sleep_duration_capability() -> NumericCapability {
    NumericCapability {
        name: "sleep_duration",
        cluster: Cluster::AnalogInput,
        attribute: ATTR_PRESENT_VALUE,
        endpoint: EndpointRole::SleepConfig,
        unit: "s",
        description: "Deep sleep interval (seconds)",
        access: AccessMode::Settable,
        reporting: ReportingConfig {
            min: ReportingInterval::ProtocolMin,
            max: ReportingInterval::ProtocolMax,
            change: 1.0,
        },
        range: Some(ValueRange::new(60.0, 7200.0)),
    }
}
