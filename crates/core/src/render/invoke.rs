use super::registry::{RenderContext, RendererRegistry};
use super::result::RenderResult;
use super::sanitize::sanitize_props;
use crate::site::Block;

/// Renders one block through the error boundary.
///
/// Sanitizes the block's props, looks up its renderer and calls it. An
/// unknown block type or a failing renderer degrades to a
/// visible-but-inert placeholder comment naming the type; the failure is
/// logged with the block's type and id. `invoke` itself never fails, so
/// the page composer can treat every block uniformly.
pub fn invoke(registry: &RendererRegistry, ctx: &RenderContext, block: &Block) -> RenderResult {
    let props = sanitize_props(&block.block_type, &block.props);

    let Some(render) = registry.lookup(&block.block_type) else {
        tracing::warn!(
            block_type = %block.block_type,
            block_id = %block.id,
            "no renderer registered for block type"
        );
        return placeholder(&block.block_type);
    };

    match render(ctx, &props, &[]) {
        Ok(result) => result,
        Err(error) => {
            tracing::warn!(
                block_type = %block.block_type,
                block_id = %block.id,
                %error,
                "block renderer failed"
            );
            placeholder(&block.block_type)
        }
    }
}

fn placeholder(block_type: &str) -> RenderResult {
    RenderResult::html_only(format!("<!-- block '{block_type}' could not be rendered -->"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::registry::RenderError;
    use crate::site::{Props, Theme};
    use serde_json::json;

    fn failing(
        _ctx: &RenderContext,
        _props: &Props,
        _children: &[RenderResult],
    ) -> Result<RenderResult, RenderError> {
        Err(RenderError::Other("boom".to_string()))
    }

    #[test]
    fn test_unknown_type_returns_placeholder() {
        let registry = RendererRegistry::builtin();
        let theme = Theme::default();
        let ctx = RenderContext { theme: &theme };

        let result = invoke(&registry, &ctx, &Block::new("hologram"));

        assert_eq!(result.html, "<!-- block 'hologram' could not be rendered -->");
        assert_eq!(result.css, "");
        assert_eq!(result.js, "");
    }

    #[test]
    fn test_failing_renderer_returns_placeholder() {
        let registry = RendererRegistry::builtin().register("content", failing);
        let theme = Theme::default();
        let ctx = RenderContext { theme: &theme };

        let result = invoke(&registry, &ctx, &Block::new("content"));

        assert!(result.html.contains("<!-- block 'content'"));
        assert!(result.css.is_empty());
        assert!(result.js.is_empty());
    }

    #[test]
    fn test_invoke_never_fails_for_any_registered_type() {
        let registry = RendererRegistry::builtin();
        let theme = Theme::default();
        let ctx = RenderContext { theme: &theme };

        let hostile_props = [
            json!({}),
            json!({"title": null, "items": null}),
            json!({"title": 42, "items": "not-a-list", "variant": 3.5}),
            json!({"items": [null, 7, {"title": "<script>alert(1)</script>"}]}),
            json!({"variant": "timeline", "content": null}),
        ];

        let tags: Vec<&str> = registry.tags().collect();
        for tag in tags {
            for fixture in &hostile_props {
                let props = fixture.as_object().cloned().unwrap();
                let block = Block::new(tag).with_props(props);
                let result = invoke(&registry, &ctx, &block);
                assert!(!result.html.is_empty(), "empty html for {tag}");
            }
        }
    }

    #[test]
    fn test_props_are_sanitized_before_rendering() {
        let registry = RendererRegistry::builtin();
        let theme = Theme::default();
        let ctx = RenderContext { theme: &theme };

        // A null title must not panic the hero renderer; it is defaulted
        // to an empty string upstream of the render call.
        let block = Block::new("hero").with_prop("title", serde_json::Value::Null);
        let result = invoke(&registry, &ctx, &block);

        assert!(result.html.contains("<section"));
    }
}
