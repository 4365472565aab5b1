use super::{item_text, items, text_or, variant};
use crate::render::registry::{RenderContext, RenderError};
use crate::render::result::RenderResult;
use crate::site::Props;

/// Renders the portfolio gallery.
///
/// `items` entries are `{src, title}` objects (or plain URL strings).
/// The `masonry` variant staggers tile heights; `before-after` pairs
/// consecutive images side by side.
pub fn render(
    ctx: &RenderContext,
    props: &Props,
    _children: &[RenderResult],
) -> Result<RenderResult, RenderError> {
    let variant = variant(props);
    let title = text_or(props, "title", "Nos Réalisations");

    let mut tiles = String::new();
    let mut count = 0usize;
    for item in items(props, "items") {
        let src = match item {
            serde_json::Value::String(_) => item_text(item, "src"),
            _ => {
                let src = item_text(item, "src");
                if src.is_empty() {
                    item_text(item, "url")
                } else {
                    src
                }
            }
        };
        if src.is_empty() {
            continue;
        }
        count += 1;
        let caption = item_text(item, "title");
        let caption_html = if caption.is_empty() {
            String::new()
        } else {
            format!(r#"<figcaption>{caption}</figcaption>"#)
        };
        tiles.push_str(&format!(
            r#"<figure class="gallery__item">
      <img src="{src}" alt="{caption}" loading="lazy">
      {caption_html}
    </figure>
"#
        ));
    }

    let counter_html = if count == 0 {
        r#"<p class="gallery__empty">Nos premières réalisations arrivent bientôt.</p>"#.to_string()
    } else {
        String::new()
    };

    let html = format!(
        r#"<section class="gallery gallery--{variant}" id="gallery">
  <div class="container">
    <h2 class="gallery__title">{title}</h2>
    <div class="gallery__grid">
    {tiles}
    </div>
    {counter_html}
  </div>
</section>
"#
    );

    let colors = &ctx.theme.colors;
    let css = format!(
        r#".gallery__title {{ text-align: center; margin-bottom: 2.5rem; }}
.gallery__grid {{ display: grid; gap: 1rem; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); }}
.gallery__item {{ margin: 0; border-radius: 0.5rem; overflow: hidden; background: {surface}; }}
.gallery__item img {{ width: 100%; height: 100%; object-fit: cover; }}
.gallery__item figcaption {{ padding: 0.5rem 0.75rem; font-size: 0.875rem; color: {muted}; }}
.gallery--masonry .gallery__grid {{ grid-auto-rows: 10px; }}
.gallery--masonry .gallery__item:nth-child(3n + 1) {{ grid-row: span 24; }}
.gallery--masonry .gallery__item:nth-child(3n + 2) {{ grid-row: span 18; }}
.gallery--masonry .gallery__item:nth-child(3n) {{ grid-row: span 21; }}
.gallery--before-after .gallery__grid {{ grid-template-columns: repeat(2, 1fr); }}
"#,
        surface = colors.surface,
        muted = colors.text_muted,
    );

    Ok(RenderResult {
        html,
        css,
        js: String::new(),
    })
}
