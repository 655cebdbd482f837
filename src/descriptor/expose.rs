//! Exposure schema records for custom-decoded fields.
//!
//! The host auto-generates exposure listings for standard capabilities, but
//! values produced by a custom decoder have no automatic schema. These
//! records fill that gap; they serialize to the flat shape the host's
//! capability listing expects.

use super::numeric::{AccessMode, ValueRange};
use serde::Serialize;

/// Display type of an exposed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExposeType {
    Numeric,
}

/// One exposure record: the external contract for a published field.
#[derive(Debug, Clone, Serialize)]
pub struct Expose {
    #[serde(rename = "type")]
    pub expose_type: ExposeType,
    /// External property name the decoded field is published under.
    pub property: &'static str,
    pub description: &'static str,
    pub unit: &'static str,
    pub access: AccessMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_max: Option<f64>,
}

impl Expose {
    /// A read-only numeric exposure without bounds.
    pub const fn numeric(
        property: &'static str,
        description: &'static str,
        unit: &'static str,
    ) -> Self {
        Self {
            expose_type: ExposeType::Numeric,
            property,
            description,
            unit,
            access: AccessMode::ReadOnly,
            value_min: None,
            value_max: None,
        }
    }

    /// Declare inclusive value bounds.
    pub const fn with_range(mut self, range: ValueRange) -> Self {
        self.value_min = Some(range.min);
        self.value_max = Some(range.max);
        self
    }
}
