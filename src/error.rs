use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConverterError {
    #[error("Value {value} for '{name}' is outside the valid range {min}..={max}")]
    ValueOutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Capability '{0}' is read-only and cannot be written")]
    ReadOnlyCapability(String),

    #[error("No numeric capability named '{0}'")]
    UnknownCapability(String),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConverterError>;
