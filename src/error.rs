use cosmic_numerology::NumerologyError;
use cosmic_pdf_composer::ComposerError;
use cosmic_traits::RetrievalError;
use thiserror::Error;

/// Why a branded document could not be composed.
///
/// Page synthesis never fails, so only the body document can go wrong:
/// either it could not be fetched or it could not be merged.
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Body document retrieval failed: {0}")]
    BodyRetrieval(#[from] RetrievalError),

    #[error("Body document could not be merged: {0}")]
    Merge(String),
}

impl From<ComposerError> for ComposeError {
    fn from(e: ComposerError) -> Self {
        ComposeError::Merge(e.to_string())
    }
}

impl From<lopdf::Error> for ComposeError {
    fn from(e: lopdf::Error) -> Self {
        ComposeError::Merge(e.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider credentials are not configured")]
    MissingCredentials,

    #[error("Provider plan does not include the numerology report")]
    PlanLimitation,

    #[error("Provider returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Provider response did not name a document: {0}")]
    MissingUrl(String),

    #[error("Provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Errors surfaced by the report service and the command line.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Numerology failed: {0}")]
    Numerology(#[from] NumerologyError),

    #[error("Provider failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("Composition failed: {0}")]
    Compose(#[from] ComposeError),

    #[error("Configuration is invalid: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
