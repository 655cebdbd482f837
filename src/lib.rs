//! Caelum weather station converters.
//!
//! This library translates raw Zigbee attribute reports from the Caelum
//! battery-powered weather station into semantic readings (rainfall, battery
//! percentage and voltage), and declares the descriptor metadata the host
//! framework uses for outbound configuration writes and exposure listings.
//!
//! Two firmware generations are supported as distinct
//! [`FirmwareRevision`]s with incompatible unit encodings. Transport, the
//! message bus and the standard cluster converters are external collaborators.

pub mod decoders;
pub mod definition;
pub mod descriptor;
pub mod error;
pub mod reading;
pub mod report;

pub use definition::{DeviceDefinition, FirmwareRevision};
pub use error::{ConverterError, Result};
pub use reading::Reading;
pub use report::{AttributeReport, Cluster, ReportType};
