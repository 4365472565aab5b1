use super::{item_text, items, text_or, variant};
use crate::render::registry::{RenderContext, RenderError};
use crate::render::result::RenderResult;
use crate::site::Props;

/// Renders the FAQ accordion.
///
/// `items` entries are `{question, answer}` objects. The toggle script
/// is idempotent: it binds through a delegated listener so a page with
/// several FAQ blocks only ever needs the script evaluated once.
pub fn render(
    ctx: &RenderContext,
    props: &Props,
    _children: &[RenderResult],
) -> Result<RenderResult, RenderError> {
    let variant = variant(props);
    let title = text_or(props, "title", "Questions Fréquentes");

    let mut entries = String::new();
    for item in items(props, "items") {
        let question = item_text(item, "question");
        if question.is_empty() {
            continue;
        }
        let answer = item_text(item, "answer");
        entries.push_str(&format!(
            r#"<details class="faq__entry">
      <summary>{question}</summary>
      <p>{answer}</p>
    </details>
"#
        ));
    }

    let html = format!(
        r#"<section class="faq faq--{variant}" id="faq">
  <div class="container">
    <h2 class="faq__title">{title}</h2>
    <div class="faq__list">
    {entries}
    </div>
  </div>
</section>
"#
    );

    let colors = &ctx.theme.colors;
    let css = format!(
        r#".faq__title {{ text-align: center; margin-bottom: 2.5rem; }}
.faq__list {{ max-width: 44rem; margin: 0 auto; }}
.faq__entry {{ border-bottom: 1px solid {border}; padding: 1rem 0; }}
.faq__entry summary {{ cursor: pointer; font-weight: 600; }}
.faq__entry summary:hover {{ color: {primary}; }}
.faq__entry p {{ margin-top: 0.75rem; color: {muted}; }}
"#,
        border = colors.border,
        primary = colors.primary,
        muted = colors.text_muted,
    );

    // Close the other entries of the same list when one opens.
    let js = r#"document.addEventListener('toggle', function (event) {
  var entry = event.target;
  if (!entry.classList || !entry.classList.contains('faq__entry') || !entry.open) return;
  entry.parentElement.querySelectorAll('.faq__entry[open]').forEach(function (other) {
    if (other !== entry) other.removeAttribute('open');
  });
}, true);
"#
    .to_string();

    Ok(RenderResult { html, css, js })
}
