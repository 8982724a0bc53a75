use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("Unknown data type: {0}")]
    UnknownDataType(String),

    #[error("Unknown dimension id: {0}")]
    UnknownDimensionId(String),

    #[error("Invalid dimension name '{name}': {reason}")]
    InvalidDimensionName { name: String, reason: String },

    #[error("Invalid numeric scale {0}: must be finite and non-zero")]
    InvalidScale(f64),

    #[error("Invalid bounds: minimum {minimum} exceeds maximum {maximum}")]
    InvalidBounds { minimum: f64, maximum: f64 },

    #[error("Binding returned a null handle: {0}")]
    NullHandle(String),

    #[error("Binding returned invalid UTF-8: {0}")]
    InvalidUtf8(String),

    #[error("Smoke test already registered: {0}")]
    DuplicateTest(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
