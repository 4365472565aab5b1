use serde::{Deserialize, Serialize};

/// The atomic output unit of one block render.
///
/// Per-block results are merged, in block order, into a page-level
/// result; page-level results are merged into a site-level export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderResult {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl RenderResult {
    /// Creates a result carrying only HTML.
    pub fn html_only(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            ..Self::default()
        }
    }

    /// Returns true if all three fields are empty.
    pub fn is_empty(&self) -> bool {
        self.html.is_empty() && self.css.is_empty() && self.js.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let result = RenderResult::default();
        assert!(result.is_empty());
        assert_eq!(result.html, "");
        assert_eq!(result.css, "");
        assert_eq!(result.js, "");
    }

    #[test]
    fn test_html_only() {
        let result = RenderResult::html_only("<p>hi</p>");
        assert!(!result.is_empty());
        assert!(result.css.is_empty());
    }
}
