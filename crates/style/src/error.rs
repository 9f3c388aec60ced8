use thiserror::Error;

/// Errors raised while parsing style values or resolving named styles.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },

    #[error("Style '{0}' not found in stylesheet")]
    UnknownStyle(String),

    #[error("Style name or alias '{0}' is already defined")]
    DuplicateStyle(String),
}
