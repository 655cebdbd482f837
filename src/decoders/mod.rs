//! Custom attribute decoders and the chain that dispatches to them.
//!
//! Each decoder inspects an inbound report and either claims it (returning a
//! [`Reading`], possibly empty) or declines so the next decoder, and finally
//! the host's standard converters, can try. First match wins; registration
//! order is the dispatch order.

pub mod battery;
pub mod rainfall;

pub use battery::PowerConfigDecoder;
pub use rainfall::{RainfallDecoder, RainfallResolution};

use crate::reading::Reading;
use crate::report::AttributeReport;
use log::debug;

/// A single custom decoder.
///
/// `decode` is a pure function of the report: no shared state, no side
/// effects, safe to call concurrently. `None` means "not handled" and must
/// never be treated as an error.
pub trait ReportDecoder: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    fn decode(&self, report: &AttributeReport) -> Option<Reading>;
}

/// Ordered chain of custom decoders.
#[derive(Default)]
pub struct DecoderChain {
    decoders: Vec<Box<dyn ReportDecoder>>,
}

impl DecoderChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decoder. Earlier registrations take precedence.
    pub fn register(mut self, decoder: impl ReportDecoder + 'static) -> Self {
        self.decoders.push(Box::new(decoder));
        self
    }

    /// Offer the report to each decoder in registration order.
    ///
    /// Returns the first decoder's reading, or `None` when no decoder claims
    /// the report and the host's standard decoding should run instead.
    pub fn decode(&self, report: &AttributeReport) -> Option<Reading> {
        for decoder in &self.decoders {
            if let Some(reading) = decoder.decode(report) {
                debug!(
                    "Decoder '{}' handled {} report on endpoint {}",
                    decoder.name(),
                    report.cluster,
                    report.endpoint
                );
                return Some(reading);
            }
        }

        debug!(
            "No custom decoder for {} report on endpoint {}, deferring to standard decoding",
            report.cluster, report.endpoint
        );
        None
    }
}
