use super::{text, text_or, variant};
use crate::render::registry::{RenderContext, RenderError};
use crate::render::result::RenderResult;
use crate::site::Props;

/// Renders the call-to-action banner.
///
/// The `urgency-banner` variant carries the emergency phone number and a
/// pulsing accent; other variants are a plain gradient banner.
pub fn render(
    ctx: &RenderContext,
    props: &Props,
    _children: &[RenderResult],
) -> Result<RenderResult, RenderError> {
    let variant = variant(props);
    let title = text_or(props, "title", "Contactez-nous dès maintenant");
    let subtitle = text_or(props, "subtitle", "Devis gratuit et sans engagement");
    let button_text = text_or(props, "buttonText", "Demander un devis");
    let urgency = text(props, "urgencyText");
    let phone = text(props, "phone");

    let urgency_html = if urgency.is_empty() {
        String::new()
    } else {
        format!(r#"<span class="cta__urgency">{urgency}</span>"#)
    };
    let phone_html = if phone.is_empty() {
        String::new()
    } else {
        format!(r#"<a class="btn cta__phone" href="tel:{phone}">{phone}</a>"#)
    };

    let html = format!(
        r##"<section class="cta cta--{variant}">
  <div class="container cta__inner">
    {urgency_html}
    <h2 class="cta__title">{title}</h2>
    <p class="cta__subtitle">{subtitle}</p>
    <div class="cta__buttons">
      <a class="btn cta__button" href="#contact">{button_text}</a>
      {phone_html}
    </div>
  </div>
</section>
"##
    );

    let colors = &ctx.theme.colors;
    let css = format!(
        r#".cta {{
  background: linear-gradient(135deg, {primary}, {secondary});
  color: #ffffff;
  text-align: center;
}}
.cta__subtitle {{ opacity: 0.9; }}
.cta__buttons {{ display: flex; justify-content: center; gap: 1rem; margin-top: 1.5rem; flex-wrap: wrap; }}
.cta__button {{ background: #ffffff; color: {primary}; }}
.cta__urgency {{
  display: inline-block;
  background: {accent};
  border-radius: 9999px;
  padding: 0.25rem 1rem;
  font-weight: 700;
  margin-bottom: 1rem;
}}
.cta--urgency-banner {{ background: linear-gradient(135deg, #b91c1c, {accent}); }}
.cta--urgency-banner .cta__urgency {{ background: #ffffff; color: #b91c1c; animation: cta-pulse 2s infinite; }}
@keyframes cta-pulse {{
  0%, 100% {{ transform: scale(1); }}
  50% {{ transform: scale(1.05); }}
}}
"#,
        primary = colors.primary,
        secondary = colors.secondary,
        accent = colors.accent,
    );

    Ok(RenderResult {
        html,
        css,
        js: String::new(),
    })
}
