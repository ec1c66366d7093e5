use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("field must not be empty: {0}")]
    EmptyField(String),

    #[error("field is not valid UTF-8: {0}")]
    InvalidEncoding(String),
}

impl CoreError {
    /// Name of the field the error is about.
    pub fn field(&self) -> &str {
        match self {
            CoreError::MissingField(field)
            | CoreError::EmptyField(field)
            | CoreError::InvalidEncoding(field) => field,
        }
    }
}
