use serde_json::Value;

use super::{item_text, items, text_or, variant};
use crate::render::registry::{RenderContext, RenderError};
use crate::render::result::RenderResult;
use crate::site::Props;

/// Renders client testimonials.
///
/// `items` entries are `{text, author, rating}` objects. The `carousel`
/// variant cycles cards with a small autoplay script; other variants lay
/// the cards out as a static grid.
pub fn render(
    ctx: &RenderContext,
    props: &Props,
    _children: &[RenderResult],
) -> Result<RenderResult, RenderError> {
    let variant = variant(props);
    let title = text_or(props, "title", "Ils nous font confiance");

    let mut cards = String::new();
    for item in items(props, "items") {
        let quote = item_text(item, "text");
        if quote.is_empty() {
            continue;
        }
        let author = item_text(item, "author");
        let stars = match item.get("rating").and_then(Value::as_u64) {
            Some(n @ 1..=5) => "★".repeat(n as usize),
            _ => String::new(),
        };

        let stars_html = if stars.is_empty() {
            String::new()
        } else {
            format!(r#"<span class="testimonials__stars">{stars}</span>"#)
        };

        cards.push_str(&format!(
            r#"<blockquote class="testimonials__card">
      {stars_html}
      <p>« {quote} »</p>
      <footer>{author}</footer>
    </blockquote>
"#
        ));
    }

    let html = format!(
        r#"<section class="testimonials testimonials--{variant}" id="testimonials">
  <div class="container">
    <h2 class="testimonials__title">{title}</h2>
    <div class="testimonials__track">
    {cards}
    </div>
  </div>
</section>
"#
    );

    let colors = &ctx.theme.colors;
    let css = format!(
        r#".testimonials {{ background: {surface}; }}
.testimonials__title {{ text-align: center; margin-bottom: 2.5rem; }}
.testimonials__track {{ display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); }}
.testimonials__card {{
  background: {background};
  border-radius: 0.75rem;
  padding: 1.5rem;
  margin: 0;
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.06);
}}
.testimonials__card footer {{ margin-top: 0.75rem; font-weight: 600; color: {muted}; }}
.testimonials__stars {{ color: {accent}; letter-spacing: 0.125rem; }}
.testimonials--carousel .testimonials__track {{ grid-template-columns: 1fr; max-width: 38rem; margin: 0 auto; }}
.testimonials--carousel .testimonials__card {{ display: none; }}
.testimonials--carousel .testimonials__card.is-active {{ display: block; }}
"#,
        surface = colors.surface,
        background = colors.background,
        muted = colors.text_muted,
        accent = colors.accent,
    );

    let js = if variant == "carousel" {
        r#"document.querySelectorAll('.testimonials--carousel').forEach(function (root) {
  var cards = root.querySelectorAll('.testimonials__card');
  if (!cards.length) return;
  var current = 0;
  cards[0].classList.add('is-active');
  if (cards.length > 1) {
    setInterval(function () {
      cards[current].classList.remove('is-active');
      current = (current + 1) % cards.length;
      cards[current].classList.add('is-active');
    }, 5000);
  }
});
"#
        .to_string()
    } else {
        String::new()
    };

    Ok(RenderResult { html, css, js })
}
