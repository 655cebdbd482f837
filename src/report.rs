//! Inbound attribute reports.
//!
//! The transport layer parses the raw Zigbee frames and delivers one
//! [`AttributeReport`] per inbound message: the cluster it belongs to, the
//! source endpoint, and the attribute-name/raw-value pairs it carried. This
//! module only models that event; byte-level decoding stays in the transport.

use serde::Deserialize;
use std::collections::BTreeMap;
use strum::{Display, EnumString};

/// Generic analog-input attribute carrying the scaled reading
/// (reused for rainfall and sleep duration).
pub const ATTR_PRESENT_VALUE: &str = "presentValue";

/// Battery voltage attribute on the power configuration cluster, in deci-volts.
pub const ATTR_BATTERY_VOLTAGE: &str = "batteryVoltage";

/// Battery percentage attribute on the 0-200 half-percent scale.
pub const ATTR_BATTERY_PERCENTAGE: &str = "batteryPercentageRemaining";

/// Wire clusters the Caelum reports on.
///
/// The measurement clusters are listed so their reports deserialize and flow
/// through the decoder chain; they are decoded by the host's standard
/// converters, not by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Deserialize)]
pub enum Cluster {
    #[strum(serialize = "genAnalogInput")]
    #[serde(rename = "genAnalogInput")]
    AnalogInput,
    #[strum(serialize = "genPowerCfg")]
    #[serde(rename = "genPowerCfg")]
    PowerConfiguration,
    #[strum(serialize = "msTemperatureMeasurement")]
    #[serde(rename = "msTemperatureMeasurement")]
    TemperatureMeasurement,
    #[strum(serialize = "msRelativeHumidity")]
    #[serde(rename = "msRelativeHumidity")]
    RelativeHumidity,
    #[strum(serialize = "msPressureMeasurement")]
    #[serde(rename = "msPressureMeasurement")]
    PressureMeasurement,
}

/// How the report reached us: unsolicited push or answer to a read.
///
/// Both kinds carry the same payload shape and decode identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Deserialize)]
pub enum ReportType {
    #[strum(serialize = "attributeReport")]
    #[serde(rename = "attributeReport")]
    AttributeReport,
    #[strum(serialize = "readResponse")]
    #[serde(rename = "readResponse")]
    ReadResponse,
}

/// One inbound attribute report. Immutable once constructed.
#[derive(Debug, Clone, Deserialize)]
pub struct AttributeReport {
    pub cluster: Cluster,
    pub endpoint: u8,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub data: BTreeMap<String, f64>,
}

impl AttributeReport {
    pub fn new(
        cluster: Cluster,
        endpoint: u8,
        report_type: ReportType,
        data: BTreeMap<String, f64>,
    ) -> Self {
        Self {
            cluster,
            endpoint,
            report_type,
            data,
        }
    }

    /// Get the raw value of a named attribute, if the report carried it.
    pub fn value(&self, attribute: &str) -> Option<f64> {
        self.data.get(attribute).copied()
    }
}
