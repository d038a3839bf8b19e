use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumerologyError {
    #[error("Invalid date '{input}': {reason}")]
    InvalidDateFormat { input: String, reason: String },

    #[error("Name must contain at least one non-whitespace character")]
    EmptyName,
}

impl NumerologyError {
    pub(crate) fn invalid_date(input: &str, reason: impl Into<String>) -> Self {
        NumerologyError::InvalidDateFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
