use super::{item_text, items, text_or, variant};
use crate::render::registry::{RenderContext, RenderError};
use crate::render::result::RenderResult;
use crate::site::Props;

/// Renders the services section as a card grid.
///
/// `items` entries are `{title, description, icon, price}` objects or
/// plain strings. The `quick` variant compacts the cards for emergency
/// structures; `green` tints them for the eco structure.
pub fn render(
    ctx: &RenderContext,
    props: &Props,
    _children: &[RenderResult],
) -> Result<RenderResult, RenderError> {
    let variant = variant(props);
    let title = text_or(props, "title", "Nos Services");

    let mut cards = String::new();
    for item in items(props, "items") {
        let name = item_text(item, "title");
        if name.is_empty() {
            continue;
        }
        let description = item_text(item, "description");
        let icon = item_text(item, "icon");
        let price = item_text(item, "price");

        let icon_html = if icon.is_empty() {
            String::new()
        } else {
            format!(r#"<div class="services__icon">{icon}</div>"#)
        };
        let price_html = if price.is_empty() {
            String::new()
        } else {
            format!(r#"<p class="services__price">{price}</p>"#)
        };

        cards.push_str(&format!(
            r#"<article class="services__card">
      {icon_html}
      <h3>{name}</h3>
      <p>{description}</p>
      {price_html}
    </article>
"#
        ));
    }

    if cards.is_empty() {
        cards.push_str(r#"<p class="services__empty">Contactez-nous pour découvrir nos prestations.</p>"#);
    }

    let html = format!(
        r#"<section class="services services--{variant}" id="services">
  <div class="container">
    <h2 class="services__title">{title}</h2>
    <div class="services__grid">
    {cards}
    </div>
  </div>
</section>
"#
    );

    let colors = &ctx.theme.colors;
    let css = format!(
        r#".services__title {{ text-align: center; margin-bottom: 2.5rem; }}
.services__grid {{ display: grid; gap: 2rem; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); }}
.services__card {{
  background: {surface};
  border: 1px solid {border};
  border-radius: 0.75rem;
  padding: 1.5rem;
  transition: transform 0.3s ease, box-shadow 0.3s ease;
}}
.services__card:hover {{ transform: translateY(-4px); box-shadow: 0 12px 24px rgba(0, 0, 0, 0.08); }}
.services__icon {{ font-size: 2rem; margin-bottom: 0.75rem; }}
.services__price {{ color: {primary}; font-weight: 700; }}
.services--quick .services__card {{ padding: 1rem; }}
.services--green .services__card {{ border-color: {secondary}; }}
"#,
        surface = colors.surface,
        border = colors.border,
        primary = colors.primary,
        secondary = colors.secondary,
    );

    Ok(RenderResult {
        html,
        css,
        js: String::new(),
    })
}
