//! Page composition: assembling header, page blocks and footer into one
//! ordered document fragment.
//!
//! Rendering a block and merging the results are separate steps. Block
//! renders have no inter-block data dependency, so invocation could run
//! in any order (or in parallel); the merge is the only place where
//! block order matters, and [`compose_fragments`] guarantees it.

use crate::render::{invoke, RenderContext, RenderResult, RendererRegistry};
use crate::site::{Block, Page};

/// One rendered block, tagged with its type for CSS namespacing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockFragment {
    pub block_type: String,
    pub result: RenderResult,
}

/// Renders the blocks of one page, in document order: global header
/// first (if present), then the page's visible blocks in array order,
/// then the global footer (if present).
pub fn render_page_fragments(
    registry: &RendererRegistry,
    ctx: &RenderContext,
    page: &Page,
    header: Option<&Block>,
    footer: Option<&Block>,
) -> Vec<BlockFragment> {
    let visible = page.blocks.iter().filter(|block| block.is_visible);

    header
        .into_iter()
        .chain(visible)
        .chain(footer)
        .map(|block| BlockFragment {
            block_type: block.block_type.clone(),
            result: invoke(registry, ctx, block),
        })
        .collect()
}

/// Merges fragments in the given order into one page-level result.
///
/// HTML and JS concatenate in order; each non-empty CSS fragment is
/// prefixed with a `/* block: <type> */` comment to aid dedup and
/// debugging. Zero fragments yield an empty, well-formed result.
pub fn compose_fragments(fragments: &[BlockFragment]) -> RenderResult {
    let mut merged = RenderResult::default();

    for fragment in fragments {
        merged.html.push_str(&fragment.result.html);

        if !fragment.result.css.is_empty() {
            merged
                .css
                .push_str(&format!("/* block: {} */\n", fragment.block_type));
            merged.css.push_str(&fragment.result.css);
            if !fragment.result.css.ends_with('\n') {
                merged.css.push('\n');
            }
        }

        if !fragment.result.js.is_empty() {
            merged.js.push_str(&fragment.result.js);
            if !fragment.result.js.ends_with('\n') {
                merged.js.push('\n');
            }
        }
    }

    merged
}

/// Composes one page into a single merged fragment.
pub fn compose(
    registry: &RendererRegistry,
    ctx: &RenderContext,
    page: &Page,
    header: Option<&Block>,
    footer: Option<&Block>,
) -> RenderResult {
    compose_fragments(&render_page_fragments(registry, ctx, page, header, footer))
}
