//! Power-configuration decoder for second-generation firmware.
//!
//! The newer firmware reports battery state on the power configuration
//! cluster with a nonstandard percentage scale, so the host's standard
//! battery converter cannot be used. This decoder owns the whole cluster:
//! it always claims power-configuration reports, even when no recognized
//! field is present, so the standard path never runs for them.

use super::ReportDecoder;
use crate::reading::{FIELD_BATTERY, FIELD_VOLTAGE, Reading};
use crate::report::{ATTR_BATTERY_PERCENTAGE, ATTR_BATTERY_VOLTAGE, AttributeReport, Cluster};

/// Deci-volts on the wire, millivolts in the reading.
const DECIVOLTS_TO_MILLIVOLTS: f64 = 100.0;

/// The wire percentage runs 0-200, one unit per half percent.
const HALF_PERCENT_UNITS: f64 = 2.0;

/// Decodes battery voltage and percentage from power-configuration reports.
pub struct PowerConfigDecoder;

impl ReportDecoder for PowerConfigDecoder {
    fn name(&self) -> &'static str {
        "power-config"
    }

    /// Each field is converted independently and only emitted when its raw
    /// attribute was present; a voltage-only report never synthesizes a
    /// percentage. Raw values are not range-checked.
    fn decode(&self, report: &AttributeReport) -> Option<Reading> {
        if report.cluster != Cluster::PowerConfiguration {
            return None;
        }

        let mut reading = Reading::new();

        if let Some(raw) = report.value(ATTR_BATTERY_VOLTAGE) {
            reading.insert(FIELD_VOLTAGE, raw * DECIVOLTS_TO_MILLIVOLTS);
        }

        if let Some(raw) = report.value(ATTR_BATTERY_PERCENTAGE) {
            // Round half away from zero so 99.5% reads as 100, not 99.
            reading.insert(FIELD_BATTERY, (raw / HALF_PERCENT_UNITS).round());
        }

        Some(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportType;
    use std::collections::BTreeMap;

    fn power_report(data: &[(&str, f64)]) -> AttributeReport {
        AttributeReport::new(
            Cluster::PowerConfiguration,
            1,
            ReportType::AttributeReport,
            data.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        )
    }

    #[test]
    fn test_voltage_decivolts_to_millivolts() {
        for (raw, expected) in [(41.0, 4100.0), (0.0, 0.0), (-1.0, -100.0)] {
            let report = power_report(&[(ATTR_BATTERY_VOLTAGE, raw)]);
            let reading = PowerConfigDecoder.decode(&report).unwrap();
            assert_eq!(reading.get(FIELD_VOLTAGE), Some(expected), "raw {raw}");
        }
    }

    #[test]
    fn test_percentage_half_percent_scale() {
        for (raw, expected) in [(200.0, 100.0), (199.0, 100.0), (150.0, 75.0), (0.0, 0.0)] {
            let report = power_report(&[(ATTR_BATTERY_PERCENTAGE, raw)]);
            let reading = PowerConfigDecoder.decode(&report).unwrap();
            assert_eq!(reading.get(FIELD_BATTERY), Some(expected), "raw {raw}");
        }
    }

    #[test]
    fn test_fields_are_independent() {
        let report = power_report(&[(ATTR_BATTERY_VOLTAGE, 30.0)]);
        let reading = PowerConfigDecoder.decode(&report).unwrap();
        assert!(reading.contains(FIELD_VOLTAGE));
        assert!(!reading.contains(FIELD_BATTERY));

        let report = power_report(&[(ATTR_BATTERY_PERCENTAGE, 150.0)]);
        let reading = PowerConfigDecoder.decode(&report).unwrap();
        assert!(reading.contains(FIELD_BATTERY));
        assert!(!reading.contains(FIELD_VOLTAGE));
    }

    #[test]
    fn test_both_fields_together() {
        let report = power_report(&[
            (ATTR_BATTERY_VOLTAGE, 30.0),
            (ATTR_BATTERY_PERCENTAGE, 150.0),
        ]);
        let reading = PowerConfigDecoder.decode(&report).unwrap();
        assert_eq!(reading.get(FIELD_VOLTAGE), Some(3000.0));
        assert_eq!(reading.get(FIELD_BATTERY), Some(75.0));
    }

    #[test]
    fn test_owns_cluster_even_without_known_fields() {
        let report = power_report(&[("mainsVoltage", 230.0)]);
        let reading = PowerConfigDecoder.decode(&report).unwrap();
        assert!(reading.is_empty());
    }

    #[test]
    fn test_other_clusters_not_handled() {
        let report = AttributeReport::new(
            Cluster::AnalogInput,
            1,
            ReportType::AttributeReport,
            BTreeMap::new(),
        );
        assert!(PowerConfigDecoder.decode(&report).is_none());
    }
}
