use serde_json::Value;

use super::{item_text, items, text, text_or, variant};
use crate::render::registry::{RenderContext, RenderError};
use crate::render::result::RenderResult;
use crate::site::Props;

/// Renders free-form content sections.
///
/// Variants: `text-image` (body copy beside an image), `about` and its
/// structure-specific cousins (`about-artist`, `eco-mission`), `timeline`
/// (year/title entries, no body copy), `certifications` (badge list).
pub fn render(
    ctx: &RenderContext,
    props: &Props,
    _children: &[RenderResult],
) -> Result<RenderResult, RenderError> {
    let variant = variant(props);
    let title = text_or(props, "title", "À propos");

    let inner = match variant.as_str() {
        "timeline" => render_timeline(props),
        "certifications" => render_certifications(props),
        _ => render_body(props),
    };

    let html = format!(
        r#"<section class="content content--{variant}" id="about">
  <div class="container">
    <h2 class="content__title">{title}</h2>
    {inner}
  </div>
</section>
"#
    );

    let colors = &ctx.theme.colors;
    let css = format!(
        r#".content__title {{ margin-bottom: 1.5rem; }}
.content__body {{ max-width: 46rem; }}
.content__media {{ display: grid; gap: 2rem; grid-template-columns: 1fr; align-items: center; }}
@media (min-width: 768px) {{
  .content--text-image .content__media {{ grid-template-columns: 3fr 2fr; }}
}}
.content__image {{ border-radius: 0.75rem; width: 100%; }}
.content__timeline {{ list-style: none; border-left: 2px solid {primary}; padding-left: 1.5rem; }}
.content__timeline li {{ margin-bottom: 1.25rem; position: relative; }}
.content__timeline li::before {{
  content: "";
  position: absolute;
  left: -1.95rem;
  top: 0.4rem;
  width: 0.75rem;
  height: 0.75rem;
  border-radius: 50%;
  background: {primary};
}}
.content__year {{ font-weight: 700; color: {primary}; margin-right: 0.5rem; }}
.content__badges {{ display: flex; gap: 1rem; flex-wrap: wrap; }}
.content__badge {{
  border: 1px solid {border};
  border-radius: 0.5rem;
  padding: 0.75rem 1.25rem;
  background: {surface};
  font-weight: 600;
}}
"#,
        primary = colors.primary,
        border = colors.border,
        surface = colors.surface,
    );

    Ok(RenderResult {
        html,
        css,
        js: String::new(),
    })
}

fn render_body(props: &Props) -> String {
    let body = text(props, "content");
    let image = text(props, "image");

    let paragraphs: String = body
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .map(|p| format!("<p>{p}</p>"))
        .collect();

    if image.is_empty() {
        format!(r#"<div class="content__body">{paragraphs}</div>"#)
    } else {
        format!(
            r#"<div class="content__media">
      <div class="content__body">{paragraphs}</div>
      <img class="content__image" src="{image}" alt="" loading="lazy">
    </div>"#
        )
    }
}

fn render_timeline(props: &Props) -> String {
    let mut entries = String::new();
    for item in items(props, "items") {
        let label = item_text(item, "title");
        if label.is_empty() {
            continue;
        }
        let year = match item.get("year") {
            Some(Value::String(s)) => crate::render::escape_html(s),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        entries.push_str(&format!(
            r#"<li><span class="content__year">{year}</span>{label}</li>"#
        ));
    }
    format!(r#"<ul class="content__timeline">{entries}</ul>"#)
}

fn render_certifications(props: &Props) -> String {
    let mut badges = String::new();
    for item in items(props, "items") {
        let name = item_text(item, "title");
        if name.is_empty() {
            continue;
        }
        badges.push_str(&format!(r#"<span class="content__badge">{name}</span>"#));
    }
    format!(r#"<div class="content__badges">{badges}</div>"#)
}
