//! Numeric capability declarations.
//!
//! A numeric capability binds a published field name to its wire
//! cluster/attribute location and declares how it is reported and written.
//! The host builds read/write commands and reporting configuration from
//! these declarations; this crate supplies no command encoding of its own.

use super::EndpointRole;
use crate::error::{ConverterError, Result};
use crate::report::Cluster;
use serde::Serialize;
use strum::{Display, EnumString};

/// Whether the host may write the capability back to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
pub enum AccessMode {
    /// Published only; writes must be rejected.
    #[strum(serialize = "STATE")]
    #[serde(rename = "STATE")]
    ReadOnly,
    /// Published and settable by the host.
    #[strum(serialize = "STATE_SET")]
    #[serde(rename = "STATE_SET")]
    Settable,
}

/// A reporting interval bound.
///
/// The wire protocol reserves sentinel values meaning "use the protocol
/// default"; they are kept as explicit variants so the host maps them to its
/// own defaults instead of guessing from magic numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportingInterval {
    /// Protocol-default minimum interval.
    ProtocolMin,
    /// Protocol-default maximum interval.
    ProtocolMax,
    Seconds(u32),
}

/// When the device should push a new report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportingConfig {
    pub min: ReportingInterval,
    pub max: ReportingInterval,
    /// Minimum change, in the capability's unit, below which no report is sent.
    pub change: f64,
}

/// Inclusive numeric bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One declared numeric capability.
#[derive(Debug, Clone)]
pub struct NumericCapability {
    /// Published field name, e.g. `sleep_duration`.
    pub name: &'static str,
    pub cluster: Cluster,
    /// Wire attribute the value lives in.
    pub attribute: &'static str,
    pub endpoint: EndpointRole,
    pub unit: &'static str,
    pub description: &'static str,
    pub access: AccessMode,
    pub reporting: ReportingConfig,
    /// Valid range for outbound writes. Inbound reports are never range
    /// checked; an out-of-range device value stays visible.
    pub range: Option<ValueRange>,
}

impl NumericCapability {
    /// Check an outbound value against the declared access mode and range.
    pub fn validate_write(&self, value: f64) -> Result<()> {
        if self.access != AccessMode::Settable {
            return Err(ConverterError::ReadOnlyCapability(self.name.to_string()));
        }

        if let Some(range) = self.range
            && !range.contains(value)
        {
            return Err(ConverterError::ValueOutOfRange {
                name: self.name.to_string(),
                value,
                min: range.min,
                max: range.max,
            });
        }

        Ok(())
    }
}
