use super::{item_text, items, text, text_or, variant};
use crate::render::registry::{RenderContext, RenderError};
use crate::render::result::RenderResult;
use crate::site::Props;

/// Renders the shared site header.
///
/// `menuItems` is a list of `{label, href}` entries; `ctaText` fills the
/// highlighted action button. The `sticky-urgent` variant pins the
/// header and shows the emergency phone number.
pub fn render_header(
    ctx: &RenderContext,
    props: &Props,
    _children: &[RenderResult],
) -> Result<RenderResult, RenderError> {
    let variant = variant(props);
    let business_name = text_or(props, "businessName", "Mon Entreprise");
    let cta_text = text_or(props, "ctaText", "Devis gratuit");
    let phone = text(props, "phone");

    let mut nav = String::new();
    for item in items(props, "menuItems") {
        let label = item_text(item, "label");
        let href = item_text(item, "href");
        if label.is_empty() {
            continue;
        }
        let href = if href.is_empty() { "#".to_string() } else { href };
        nav.push_str(&format!(
            r#"<a class="site-header__link" href="{href}">{label}</a>"#
        ));
    }

    let urgency_html = if variant == "sticky-urgent" && !phone.is_empty() {
        format!(
            r#"<div class="site-header__urgency">Intervention 24h/24 — <a href="tel:{phone}">{phone}</a></div>"#
        )
    } else {
        String::new()
    };

    let html = format!(
        r##"<header class="site-header site-header--{variant}">
  {urgency_html}
  <div class="container site-header__bar">
    <a class="site-header__brand" href="/">{business_name}</a>
    <nav class="site-header__nav">{nav}</nav>
    <a class="btn site-header__cta" href="#contact">{cta_text}</a>
    <button class="site-header__toggle" aria-label="Menu">☰</button>
  </div>
</header>
"##
    );

    let colors = &ctx.theme.colors;
    let css = format!(
        r#".site-header {{ background: {surface}; border-bottom: 1px solid {border}; }}
.site-header__bar {{ display: flex; align-items: center; gap: 2rem; padding: 1rem; }}
.site-header__brand {{ font-weight: 800; font-size: 1.25rem; color: {primary}; text-decoration: none; }}
.site-header__nav {{ display: flex; gap: 1.5rem; margin-left: auto; }}
.site-header__link {{ color: inherit; text-decoration: none; }}
.site-header__link:hover {{ color: {primary}; }}
.site-header__toggle {{ display: none; background: none; border: none; font-size: 1.5rem; }}
.site-header--sticky-urgent {{ position: sticky; top: 0; z-index: 50; }}
.site-header__urgency {{
  background: #b91c1c;
  color: #ffffff;
  text-align: center;
  padding: 0.375rem;
  font-weight: 600;
}}
.site-header__urgency a {{ color: inherit; }}
@media (max-width: 768px) {{
  .site-header__nav {{ display: none; }}
  .site-header__nav.is-open {{
    display: flex;
    flex-direction: column;
    position: absolute;
    inset: 100% 0 auto 0;
    background: {surface};
    padding: 1rem;
  }}
  .site-header__toggle {{ display: block; }}
}}
"#,
        surface = colors.surface,
        border = colors.border,
        primary = colors.primary,
    );

    let js = r#"document.querySelectorAll('.site-header__toggle').forEach(function (toggle) {
  toggle.addEventListener('click', function () {
    var nav = toggle.closest('.site-header').querySelector('.site-header__nav');
    if (nav) nav.classList.toggle('is-open');
  });
});
"#
    .to_string();

    Ok(RenderResult { html, css, js })
}

/// Renders the shared site footer.
pub fn render_footer(
    ctx: &RenderContext,
    props: &Props,
    _children: &[RenderResult],
) -> Result<RenderResult, RenderError> {
    let variant = variant(props);
    let business_name = text_or(props, "businessName", "Mon Entreprise");
    let phone = text(props, "phone");
    let email = text(props, "email");
    let address = text(props, "address");
    let tagline = text(props, "tagline");

    let mut contact = String::new();
    if !phone.is_empty() {
        contact.push_str(&format!(
            r#"<li><a href="tel:{phone}">{phone}</a></li>"#
        ));
    }
    if !email.is_empty() {
        contact.push_str(&format!(
            r#"<li><a href="mailto:{email}">{email}</a></li>"#
        ));
    }
    if !address.is_empty() {
        contact.push_str(&format!("<li>{address}</li>"));
    }

    let tagline_html = if tagline.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="site-footer__tagline">{tagline}</p>"#)
    };

    let html = format!(
        r#"<footer class="site-footer site-footer--{variant}">
  <div class="container site-footer__grid">
    <div>
      <p class="site-footer__brand">{business_name}</p>
      {tagline_html}
    </div>
    <ul class="site-footer__contact">{contact}</ul>
  </div>
  <div class="site-footer__legal container">© {business_name} — Tous droits réservés</div>
</footer>
"#
    );

    let colors = &ctx.theme.colors;
    let css = format!(
        r#".site-footer {{ background: {text}; color: #e5e7eb; padding: 3rem 0 1.5rem; margin-top: 4rem; }}
.site-footer__grid {{ display: flex; justify-content: space-between; gap: 2rem; flex-wrap: wrap; }}
.site-footer__brand {{ font-weight: 700; font-size: 1.125rem; }}
.site-footer__tagline {{ opacity: 0.7; }}
.site-footer__contact {{ list-style: none; }}
.site-footer__contact a {{ color: inherit; }}
.site-footer__legal {{ margin-top: 2rem; font-size: 0.875rem; opacity: 0.6; }}
.site-footer--eco {{ background: #14532d; }}
"#,
        text = colors.text,
    );

    Ok(RenderResult {
        html,
        css,
        js: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::Theme;
    use serde_json::json;

    fn props(value: serde_json::Value) -> Props {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_header_renders_menu_items() {
        let theme = Theme::default();
        let ctx = RenderContext { theme: &theme };
        let result = render_header(
            &ctx,
            &props(json!({
                "businessName": "Plomberie Express",
                "menuItems": [
                    {"label": "Accueil", "href": "/"},
                    {"label": "Services", "href": "#services"},
                    {"label": ""}
                ]
            })),
            &[],
        )
        .unwrap();

        assert!(result.html.contains("Plomberie Express"));
        assert!(result.html.contains(r##"href="#services""##));
        // Empty labels are skipped.
        assert_eq!(result.html.matches("site-header__link").count(), 2);
        assert!(result.js.contains("site-header__toggle"));
    }

    #[test]
    fn test_sticky_urgent_header_shows_phone_strip() {
        let theme = Theme::default();
        let ctx = RenderContext { theme: &theme };
        let result = render_header(
            &ctx,
            &props(json!({"variant": "sticky-urgent", "phone": "01 23 45 67 89"})),
            &[],
        )
        .unwrap();

        assert!(result.html.contains("site-header__urgency"));
        assert!(result.html.contains("tel:01 23 45 67 89"));
    }

    #[test]
    fn test_footer_omits_absent_contact_rows() {
        let theme = Theme::default();
        let ctx = RenderContext { theme: &theme };
        let result = render_footer(&ctx, &props(json!({"phone": "01 02 03 04 05"})), &[]).unwrap();

        assert!(result.html.contains("tel:01 02 03 04 05"));
        assert!(!result.html.contains("mailto:"));
    }
}
