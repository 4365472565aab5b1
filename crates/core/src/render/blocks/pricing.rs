use serde_json::Value;

use super::{item_text, items, text_or, variant};
use crate::render::registry::{RenderContext, RenderError};
use crate::render::result::RenderResult;
use crate::site::Props;

/// Renders pricing plans.
///
/// `items` entries are `{title, price, description, features}` objects.
/// With no plans the section degrades to a quote call-out, matching how
/// incomplete client data is handled elsewhere.
pub fn render(
    ctx: &RenderContext,
    props: &Props,
    _children: &[RenderResult],
) -> Result<RenderResult, RenderError> {
    let variant = variant(props);
    let title = text_or(props, "title", "Nos Tarifs");

    let mut cards = String::new();
    for item in items(props, "items") {
        let name = item_text(item, "title");
        if name.is_empty() {
            continue;
        }
        let price = item_text(item, "price");
        let description = item_text(item, "description");

        let mut feature_list = String::new();
        if let Some(features) = item.get("features").and_then(Value::as_array) {
            for feature in features {
                let label = item_text(feature, "title");
                if !label.is_empty() {
                    feature_list.push_str(&format!("<li>{label}</li>"));
                }
            }
        }

        cards.push_str(&format!(
            r##"<article class="pricing__card">
      <h3>{name}</h3>
      <p class="pricing__price">{price}</p>
      <p>{description}</p>
      <ul class="pricing__features">{feature_list}</ul>
      <a class="btn" href="#contact">Choisir</a>
    </article>
"##
        ));
    }

    let body = if cards.is_empty() {
        r#"<p class="pricing__quote">Chaque projet est unique : demandez votre devis sur mesure, gratuit et sans engagement.</p>"#.to_string()
    } else {
        format!(r#"<div class="pricing__grid">{cards}</div>"#)
    };

    let html = format!(
        r#"<section class="pricing pricing--{variant}" id="pricing">
  <div class="container">
    <h2 class="pricing__title">{title}</h2>
    {body}
  </div>
</section>
"#
    );

    let colors = &ctx.theme.colors;
    let css = format!(
        r#".pricing__title {{ text-align: center; margin-bottom: 2.5rem; }}
.pricing__grid {{ display: grid; gap: 2rem; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); }}
.pricing__card {{
  border: 1px solid {border};
  border-radius: 0.75rem;
  padding: 2rem 1.5rem;
  text-align: center;
}}
.pricing__price {{ font-size: 2rem; font-weight: 800; color: {primary}; }}
.pricing__features {{ list-style: none; margin: 1rem 0 1.5rem; color: {muted}; }}
.pricing__quote {{ text-align: center; font-size: 1.125rem; max-width: 36rem; margin: 0 auto; }}
"#,
        border = colors.border,
        primary = colors.primary,
        muted = colors.text_muted,
    );

    Ok(RenderResult {
        html,
        css,
        js: String::new(),
    })
}
