use super::{item_text, items, text, text_or, variant};
use crate::render::registry::{RenderContext, RenderError};
use crate::render::result::RenderResult;
use crate::site::Props;

/// Default form fields when the content layer supplies none.
const DEFAULT_FIELDS: [(&str, &str); 3] = [
    ("name", "Votre nom"),
    ("email", "Votre email"),
    ("message", "Votre message"),
];

/// Renders the contact section: a form plus the business's coordinates.
///
/// `formFields` entries are `{name, label}` objects. The `form-map`
/// variant reserves a map panel next to the form; `emergency-form`
/// leads with the phone number instead of the form.
pub fn render(
    ctx: &RenderContext,
    props: &Props,
    _children: &[RenderResult],
) -> Result<RenderResult, RenderError> {
    let variant = variant(props);
    let title = text_or(props, "title", "Contactez-nous");
    let phone = text(props, "phone");
    let email = text(props, "email");
    let address = text(props, "address");

    let mut fields = String::new();
    let supplied = items(props, "formFields");
    if supplied.is_empty() {
        for (name, label) in DEFAULT_FIELDS {
            fields.push_str(&field_html(name, label));
        }
    } else {
        for item in supplied {
            let name = item_text(item, "name");
            let label = item_text(item, "label");
            if name.is_empty() {
                continue;
            }
            let label = if label.is_empty() { name.clone() } else { label };
            fields.push_str(&field_html(&name, &label));
        }
    }

    let mut coordinates = String::new();
    if !phone.is_empty() {
        coordinates.push_str(&format!(
            r#"<li><a href="tel:{phone}">📞 {phone}</a></li>"#
        ));
    }
    if !email.is_empty() {
        coordinates.push_str(&format!(
            r#"<li><a href="mailto:{email}">✉ {email}</a></li>"#
        ));
    }
    if !address.is_empty() {
        coordinates.push_str(&format!("<li>📍 {address}</li>"));
    }

    let urgency_html = if variant == "emergency-form" && !phone.is_empty() {
        format!(
            r#"<p class="contact__urgency">Urgence ? Appelez directement le <a href="tel:{phone}">{phone}</a></p>"#
        )
    } else {
        String::new()
    };

    let map_html = if variant == "form-map" {
        r#"<div class="contact__map" aria-hidden="true"></div>"#
    } else {
        ""
    };

    let html = format!(
        r##"<section class="contact contact--{variant}" id="contact">
  <div class="container">
    <h2 class="contact__title">{title}</h2>
    {urgency_html}
    <div class="contact__layout">
      <form class="contact__form" method="post" action="#">
        {fields}
        <button class="btn" type="submit">Envoyer</button>
      </form>
      <div class="contact__aside">
        <ul class="contact__coordinates">{coordinates}</ul>
        {map_html}
      </div>
    </div>
  </div>
</section>
"##
    );

    let colors = &ctx.theme.colors;
    let css = format!(
        r#".contact {{ background: {surface}; }}
.contact__title {{ text-align: center; margin-bottom: 2.5rem; }}
.contact__layout {{ display: grid; gap: 2.5rem; grid-template-columns: 1fr; }}
@media (min-width: 768px) {{
  .contact__layout {{ grid-template-columns: 3fr 2fr; }}
}}
.contact__coordinates {{ list-style: none; display: grid; gap: 0.75rem; }}
.contact__coordinates a {{ color: {primary}; text-decoration: none; }}
.contact__urgency {{ text-align: center; font-weight: 700; color: #b91c1c; margin-bottom: 2rem; }}
.contact__map {{
  margin-top: 1.5rem;
  min-height: 220px;
  border-radius: 0.75rem;
  background: {border};
}}
"#,
        surface = colors.surface,
        primary = colors.primary,
        border = colors.border,
    );

    Ok(RenderResult {
        html,
        css,
        js: String::new(),
    })
}

fn field_html(name: &str, label: &str) -> String {
    let control = if name == "message" {
        format!(r#"<textarea id="{name}" name="{name}" rows="4" required></textarea>"#)
    } else {
        let input_type = if name == "email" { "email" } else { "text" };
        format!(r#"<input id="{name}" name="{name}" type="{input_type}" required>"#)
    };
    format!(
        r#"<div class="form-group">
          <label for="{name}">{label}</label>
          {control}
        </div>
"#
    )
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
    fn test_default_fields_when_none_supplied() {
        let result = render_with(json!({}));

        assert_eq!(result.html.matches("form-group").count(), 3);
        assert!(result.html.contains("textarea"));
    }

    #[test]
    fn test_supplied_fields_override_defaults() {
        let result = render_with(json!({
            "formFields": [
                {"name": "phone", "label": "Votre téléphone"},
                {"label": "unnamed field"}
            ]
        }));

        assert_eq!(result.html.matches("form-group").count(), 1);
        assert!(result.html.contains("Votre téléphone"));
    }

    #[test]
    fn test_form_map_variant_reserves_map_panel() {
        let result = render_with(json!({"variant": "form-map"}));
        assert!(result.html.contains("contact__map"));
    }

    #[test]
    fn test_emergency_variant_leads_with_phone() {
        let result = render_with(json!({
            "variant": "emergency-form",
            "phone": "06 12 34 56 78"
        }));
        assert!(result.html.contains("contact__urgency"));
    }
}
