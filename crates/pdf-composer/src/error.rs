use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposerError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Page range {start}..{end} is outside a document of {available} pages")]
    InvalidRange {
        start: usize,
        end: usize,
        available: usize,
    },

    #[error("Malformed page tree: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_convert() {
        let err = ComposerError::from(std::io::Error::other("broken pipe"));
        assert!(matches!(err, ComposerError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: broken pipe");
    }
}
