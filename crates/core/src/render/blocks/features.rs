use super::{item_text, items, text_or, variant};
use crate::render::registry::{RenderContext, RenderError};
use crate::render::result::RenderResult;
use crate::site::Props;

/// Renders the "why choose us" feature list.
///
/// The `24-7` variant leads with an availability strip; `eco-benefits`
/// is the tinted variant used by the eco structure.
pub fn render(
    ctx: &RenderContext,
    props: &Props,
    _children: &[RenderResult],
) -> Result<RenderResult, RenderError> {
    let variant = variant(props);
    let title = text_or(props, "title", "Pourquoi nous choisir");

    let mut entries = String::new();
    for item in items(props, "items") {
        let name = item_text(item, "title");
        if name.is_empty() {
            continue;
        }
        let description = item_text(item, "description");
        let icon = item_text(item, "icon");

        entries.push_str(&format!(
            r#"<div class="features__item">
      <span class="features__icon">{icon}</span>
      <div>
        <h3>{name}</h3>
        <p>{description}</p>
      </div>
    </div>
"#
        ));
    }

    let strip_html = if variant == "24-7" {
        r#"<p class="features__strip">Disponibles 24h/24 et 7j/7, toute l'année.</p>"#
    } else {
        ""
    };

    let html = format!(
        r#"<section class="features features--{variant}" id="features">
  <div class="container">
    <h2 class="features__title">{title}</h2>
    {strip_html}
    <div class="features__grid">
    {entries}
    </div>
  </div>
</section>
"#
    );

    let colors = &ctx.theme.colors;
    let css = format!(
        r#".features {{ background: {surface}; }}
.features__title {{ text-align: center; margin-bottom: 2.5rem; }}
.features__strip {{
  text-align: center;
  font-weight: 600;
  color: {primary};
  margin-bottom: 2rem;
}}
.features__grid {{ display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }}
.features__item {{ display: flex; gap: 1rem; align-items: flex-start; }}
.features__icon {{ font-size: 1.75rem; }}
.features--eco-benefits .features__icon {{ color: {secondary}; }}
"#,
        surface = colors.surface,
        primary = colors.primary,
        secondary = colors.secondary,
    );

    Ok(RenderResult {
        html,
        css,
        js: String::new(),
    })
}
