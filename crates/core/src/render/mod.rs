//! Block rendering: registry, prop sanitization and the error-boundary
//! invoker.

mod blocks;
mod invoke;
mod registry;
mod result;
mod sanitize;

pub use invoke::invoke;
pub use registry::{RenderContext, RenderError, RenderFn, RendererRegistry};
pub use result::RenderResult;
pub use sanitize::sanitize_props;

/// Escape HTML special characters to prevent markup injection from
/// client-supplied prop values.
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("Plomberie Express"), "Plomberie Express");
    }
}
