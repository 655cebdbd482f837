//! Rain gauge decoder.
//!
//! The rain gauge reports its cumulative total through the generic
//! analog-input cluster on its own endpoint, so the reading has to be told
//! apart from the sleep-duration channel by endpoint id. The raw scale
//! changed between firmware generations; both scales are supported as
//! distinct resolutions.

use super::ReportDecoder;
use crate::descriptor::EndpointRole;
use crate::reading::{FIELD_RAINFALL, Reading};
use crate::report::{ATTR_PRESENT_VALUE, AttributeReport, Cluster};

/// Raw scale of the rain gauge's present-value attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainfallResolution {
    /// First-generation firmware: raw value is whole millimeters. Readings
    /// are rounded to the nearest integer to absorb float noise in transit.
    Millimeters,
    /// Second-generation firmware: the counter ticks in centi-millimeters.
    /// Readings keep two decimal places of millimeters.
    CentiMillimeters,
}

/// Decodes rainfall reports from the rain gauge endpoint.
pub struct RainfallDecoder {
    resolution: RainfallResolution,
}

impl RainfallDecoder {
    pub fn new(resolution: RainfallResolution) -> Self {
        Self { resolution }
    }

    fn convert(&self, raw: f64) -> f64 {
        match self.resolution {
            RainfallResolution::Millimeters => raw.round(),
            RainfallResolution::CentiMillimeters => (raw * 100.0).round() / 100.0,
        }
    }
}

impl ReportDecoder for RainfallDecoder {
    fn name(&self) -> &'static str {
        "rainfall"
    }

    /// Claims analog-input reports from the rain gauge endpoint that carry a
    /// present-value attribute. A matching cluster/endpoint without the
    /// attribute is declined, not an error: a partial match must not emit a
    /// reading. No range check happens here; an out-of-range total is still
    /// reported.
    fn decode(&self, report: &AttributeReport) -> Option<Reading> {
        if report.cluster != Cluster::AnalogInput
            || report.endpoint != EndpointRole::RainGauge.id()
        {
            return None;
        }

        let raw = report.value(ATTR_PRESENT_VALUE)?;

        let mut reading = Reading::new();
        reading.insert(FIELD_RAINFALL, self.convert(raw));
        Some(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportType;

    fn report(cluster: Cluster, endpoint: u8, data: &[(&str, f64)]) -> AttributeReport {
        AttributeReport::new(
            cluster,
            endpoint,
            ReportType::AttributeReport,
            data.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        )
    }

    #[test]
    fn test_millimeter_resolution_rounds_to_integer() {
        let decoder = RainfallDecoder::new(RainfallResolution::Millimeters);

        for (raw, expected) in [(0.0, 0.0), (12.4, 12.0), (12.5, 13.0), (130.0, 130.0)] {
            let report = report(Cluster::AnalogInput, 2, &[(ATTR_PRESENT_VALUE, raw)]);
            let reading = decoder.decode(&report).unwrap();
            assert_eq!(reading.get(FIELD_RAINFALL), Some(expected), "raw {raw}");
        }
    }

    #[test]
    fn test_centimillimeter_resolution_keeps_two_decimals() {
        let decoder = RainfallDecoder::new(RainfallResolution::CentiMillimeters);

        for (raw, expected) in [(12.344, 12.34), (12.346, 12.35), (0.005, 0.01), (7.0, 7.0)] {
            let report = report(Cluster::AnalogInput, 2, &[(ATTR_PRESENT_VALUE, raw)]);
            let reading = decoder.decode(&report).unwrap();
            assert_eq!(reading.get(FIELD_RAINFALL), Some(expected), "raw {raw}");
        }
    }

    #[test]
    fn test_other_endpoints_not_handled() {
        let decoder = RainfallDecoder::new(RainfallResolution::Millimeters);

        for endpoint in [1, 3, 4] {
            let report = report(Cluster::AnalogInput, endpoint, &[(ATTR_PRESENT_VALUE, 5.0)]);
            assert!(decoder.decode(&report).is_none(), "endpoint {endpoint}");
        }
    }

    #[test]
    fn test_other_clusters_not_handled() {
        let decoder = RainfallDecoder::new(RainfallResolution::Millimeters);
        let report = report(Cluster::PowerConfiguration, 2, &[(ATTR_PRESENT_VALUE, 5.0)]);
        assert!(decoder.decode(&report).is_none());
    }

    #[test]
    fn test_missing_present_value_not_handled() {
        let decoder = RainfallDecoder::new(RainfallResolution::Millimeters);
        let report = report(Cluster::AnalogInput, 2, &[("somethingElse", 5.0)]);
        assert!(decoder.decode(&report).is_none());
    }
}
