use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    #[error("Font resource unavailable: {0}")]
    Unavailable(#[from] cosmic_traits::ResourceError),

    #[error("Font '{name}' could not be parsed: {message}")]
    Parse { name: String, message: String },

    #[error("Font '{0}' has no glyph for the required script")]
    MissingCoverage(String),
}
