use thiserror::Error;

/// Errors that reject a whole export request.
///
/// Per-block failures are never surfaced here; they degrade to inert
/// placeholder fragments at the render boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("project contains no pages")]
    NoPages,
    #[error("duplicate page slug: {0}")]
    DuplicateSlug(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_error_display() {
        assert_eq!(ExportError::NoPages.to_string(), "project contains no pages");
        assert_eq!(
            ExportError::DuplicateSlug("/".to_string()).to_string(),
            "duplicate page slug: /"
        );
    }
}
