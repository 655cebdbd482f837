//! Decoded readings: semantic field name to normalized numeric value.

use serde::Serialize;
use std::collections::BTreeMap;

/// Cumulative rainfall in millimeters.
pub const FIELD_RAINFALL: &str = "rainfall";

/// Remaining battery level in percent (0-100).
pub const FIELD_BATTERY: &str = "battery";

/// Battery voltage in millivolts.
pub const FIELD_VOLTAGE: &str = "voltage";

/// The output of one decode: zero or more named values in application units.
///
/// Only fields actually derived from the report are present; nothing is
/// synthesized for attributes the report did not carry. Serializes to a flat
/// JSON object for the host's publish path.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Reading {
    #[serde(flatten)]
    fields: BTreeMap<String, f64>,
}

impl Reading {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, value: f64) {
        self.fields.insert(field.to_string(), value);
    }

    pub fn get(&self, field: &str) -> Option<f64> {
        self.fields.get(field).copied()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
