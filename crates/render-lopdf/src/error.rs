use cosmic_typeset::FontError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Image could not be decoded: {0}")]
    Image(String),
    #[error("Font error: {0}")]
    Font(#[from] FontError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Other rendering error: {0}")]
    Other(String),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::Image(err.to_string())
    }
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_convert() {
        let err = RenderError::from(std::io::Error::other("disk full"));
        assert!(matches!(err, RenderError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: disk full");
    }
}
