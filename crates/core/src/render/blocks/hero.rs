use super::{text, text_or, variant};
use crate::render::registry::{RenderContext, RenderError};
use crate::render::result::RenderResult;
use crate::site::Props;

/// Renders the hero section.
///
/// Variants: `modern` (default look), `emergency` (urgency badge and
/// phone button), `visual` (full-height image backdrop), `nature`
/// (soft gradient for the eco structure).
pub fn render(
    ctx: &RenderContext,
    props: &Props,
    _children: &[RenderResult],
) -> Result<RenderResult, RenderError> {
    let variant = variant(props);
    let title = text_or(props, "title", "Votre partenaire de confiance");
    let subtitle = text(props, "subtitle");
    let button_text = text_or(props, "buttonText", "Demander un devis");
    let button_href = text_or(props, "buttonHref", "#contact");
    let badge = text(props, "badge");
    let phone = text(props, "phone");

    let badge_html = if badge.is_empty() {
        String::new()
    } else {
        format!(r#"<span class="hero__badge">{badge}</span>"#)
    };
    let subtitle_html = if subtitle.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="hero__subtitle">{subtitle}</p>"#)
    };
    let phone_html = if phone.is_empty() {
        String::new()
    } else {
        format!(r#"<a class="btn hero__phone" href="tel:{phone}">📞 {phone}</a>"#)
    };

    let html = format!(
        r#"<section class="hero hero--{variant}" id="hero">
  <div class="container hero__content">
    {badge_html}
    <h1 class="hero__title">{title}</h1>
    {subtitle_html}
    <div class="hero__buttons">
      <a class="btn hero__cta" href="{button_href}">{button_text}</a>
      {phone_html}
    </div>
  </div>
</section>
"#
    );

    let colors = &ctx.theme.colors;
    let css = format!(
        r#".hero {{
  padding: 6rem 0;
  background: linear-gradient(135deg, {primary} 0%, {secondary} 100%);
  color: #ffffff;
}}
.hero__title {{ font-size: 3rem; margin-bottom: 1rem; }}
.hero__subtitle {{ font-size: 1.25rem; opacity: 0.9; max-width: 40rem; }}
.hero__buttons {{ display: flex; gap: 1rem; margin-top: 2rem; flex-wrap: wrap; }}
.hero__badge {{
  display: inline-block;
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  background: {accent};
  font-weight: 600;
  font-size: 0.875rem;
}}
.hero--emergency {{ background: linear-gradient(135deg, #b91c1c 0%, {primary} 100%); }}
.hero--emergency .hero__badge {{ animation: hero-pulse 2s infinite; }}
.hero--visual {{ min-height: 80vh; display: flex; align-items: center; }}
.hero--nature {{ background: linear-gradient(135deg, #15803d 0%, {secondary} 100%); }}
@keyframes hero-pulse {{
  0%, 100% {{ opacity: 1; }}
  50% {{ opacity: 0.6; }}
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::Theme;
    use serde_json::json;

    fn render_with(props: serde_json::Value) -> RenderResult {
        let theme = Theme::default();
        let ctx = RenderContext { theme: &theme };
        render(&ctx, &props.as_object().cloned().unwrap(), &[]).unwrap()
    }

    #[test]
    fn test_defaults_when_props_missing() {
        let result = render_with(json!({}));

        assert!(result.html.contains("hero--default"));
        assert!(result.html.contains("Votre partenaire de confiance"));
        assert!(result.html.contains("Demander un devis"));
        assert!(!result.html.contains("hero__badge"));
    }

    #[test]
    fn test_emergency_variant_with_badge_and_phone() {
        let result = render_with(json!({
            "variant": "emergency",
            "title": "Dépannage 24/7",
            "badge": "Urgence 24/7",
            "phone": "06 12 34 56 78"
        }));

        assert!(result.html.contains("hero--emergency"));
        assert!(result.html.contains("Urgence 24/7"));
        assert!(result.html.contains("tel:06 12 34 56 78"));
        assert!(result.css.contains(".hero--emergency"));
    }

    #[test]
    fn test_theme_colors_flow_into_css() {
        let result = render_with(json!({}));
        assert!(result.css.contains("#3b82f6"));
        assert!(result.css.contains("#10b981"));
    }

    #[test]
    fn test_user_markup_is_escaped() {
        let result = render_with(json!({"title": "<script>alert(1)</script>"}));
        assert!(!result.html.contains("<script>"));
        assert!(result.html.contains("&lt;script&gt;"));
    }
}
