use std::collections::HashMap;

use thiserror::Error;

use super::blocks;
use super::result::RenderResult;
use crate::site::{Props, Theme};

/// Errors a renderer may report through the invoker boundary.
///
/// A renderer error never aborts a page; the invoker degrades the block
/// to an inert placeholder and logs the failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("missing required prop: {0}")]
    MissingProp(&'static str),
    #[error("invalid prop {key}: {reason}")]
    InvalidProp { key: &'static str, reason: String },
    #[error("{0}")]
    Other(String),
}

/// Read-only data shared by every render call of one export.
///
/// The context is threaded explicitly through every call; there is no
/// export-scoped global state.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
}

/// A pure render function: sanitized props and child fragments in, one
/// fragment out.
pub type RenderFn =
    fn(&RenderContext, &Props, &[RenderResult]) -> Result<RenderResult, RenderError>;

/// Lookup table from block-type tag to render function.
///
/// Built once from the static catalogue of supported block types and
/// immutable afterwards. Unknown tags return `None`, never an error, so
/// block types can be added without touching the composer.
#[derive(Debug, Clone)]
pub struct RendererRegistry {
    renderers: HashMap<&'static str, RenderFn>,
}

impl RendererRegistry {
    /// Creates an empty registry.
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Builds the registry of built-in block renderers.
    pub fn builtin() -> Self {
        Self::empty()
            .register("header", blocks::layout::render_header)
            .register("footer", blocks::layout::render_footer)
            .register("hero", blocks::hero::render)
            .register("cta", blocks::cta::render)
            .register("services", blocks::services::render)
            .register("features", blocks::features::render)
            .register("content", blocks::content::render)
            .register("gallery", blocks::gallery::render)
            .register("testimonials", blocks::testimonials::render)
            .register("pricing", blocks::pricing::render)
            .register("faq", blocks::faq::render)
            .register("contact", blocks::contact::render)
    }

    /// Registers a renderer under the given tag, replacing any previous
    /// entry. Consumes and returns the registry so construction stays a
    /// single expression; once the registry is shared it can no longer
    /// change.
    pub fn register(mut self, tag: &'static str, renderer: RenderFn) -> Self {
        self.renderers.insert(tag, renderer);
        self
    }

    /// Looks up the renderer for a block-type tag.
    pub fn lookup(&self, tag: &str) -> Option<RenderFn> {
        self.renderers.get(tag).copied()
    }

    /// Iterates over all registered tags.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.renderers.keys().copied()
    }

    /// Number of registered renderers.
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    /// Returns true if no renderer is registered.
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogue() {
        let registry = RendererRegistry::builtin();

        for tag in [
            "header",
            "footer",
            "hero",
            "cta",
            "services",
            "features",
            "content",
            "gallery",
            "testimonials",
            "pricing",
            "faq",
            "contact",
        ] {
            assert!(registry.lookup(tag).is_some(), "missing renderer for {tag}");
        }
        assert_eq!(registry.len(), 12);
    }

    #[test]
    fn test_unknown_tag_is_absent_not_error() {
        let registry = RendererRegistry::builtin();
        assert!(registry.lookup("carousel-3000").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn test_register_replaces_entry() {
        fn stub(
            _ctx: &RenderContext,
            _props: &Props,
            _children: &[RenderResult],
        ) -> Result<RenderResult, RenderError> {
            Ok(RenderResult::html_only("<p>stub</p>"))
        }

        let registry = RendererRegistry::builtin().register("hero", stub);
        let theme = Theme::default();
        let ctx = RenderContext { theme: &theme };

        let result = registry.lookup("hero").unwrap()(&ctx, &Props::new(), &[]).unwrap();
        assert_eq!(result.html, "<p>stub</p>");
    }
}
