use thiserror::Error;

/// Why an hourly record could not be constructed from a row of raw fields.
///
/// The two variants separate the "key absent" and "value unusable" causes so
/// that load-time logging can say which field of which row was at fault.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing required field '{0}'")]
    MissingField(String),

    #[error("invalid value '{value}' for field '{field}'")]
    InvalidValue { field: String, value: String },
}

impl RecordError {
    pub(crate) fn invalid(field: &str, value: &str) -> Self {
        RecordError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}
