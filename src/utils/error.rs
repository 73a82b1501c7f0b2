use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("Entry index {index} is out of range for a journal of {len} entries")]
    EntryOutOfRange { index: usize, len: usize },

    #[error("{order} does not support {operation}")]
    UnsupportedOperation {
        order: &'static str,
        operation: &'static str,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SolidError>;
