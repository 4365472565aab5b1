use crate::render::escape_html;

/// Structured HTML5 document builder.
///
/// Head and body content live in explicit slots; `render` serializes
/// them in one deterministic pass. Styles always land inside `<style>`
/// tags before `</head>`, scripts inside `<script>` tags before
/// `</body>`.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    pub lang: String,
    pub title: String,
    pub description: String,
    styles: Vec<String>,
    body: String,
    scripts: Vec<String>,
}

impl HtmlDocument {
    /// Creates an empty document with the given head metadata.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            lang: "fr".to_string(),
            title: title.into(),
            description: description.into(),
            styles: Vec::new(),
            body: String::new(),
            scripts: Vec::new(),
        }
    }

    /// Replaces the body markup.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Appends a stylesheet to the head slot. Empty payloads are ignored.
    pub fn push_style(&mut self, css: impl Into<String>) {
        let css = css.into();
        if !css.trim().is_empty() {
            self.styles.push(css);
        }
    }

    /// Appends a script to the end-of-body slot. Empty payloads are
    /// ignored.
    pub fn push_script(&mut self, js: impl Into<String>) {
        let js = js.into();
        if !js.trim().is_empty() {
            self.scripts.push(js);
        }
    }

    /// Returns true if any pushed style contains the given marker.
    pub fn has_style_containing(&self, marker: &str) -> bool {
        self.styles.iter().any(|css| css.contains(marker))
    }

    /// Returns true if any pushed script contains the given marker.
    pub fn has_script_containing(&self, marker: &str) -> bool {
        self.scripts.iter().any(|js| js.contains(marker))
    }

    /// Serializes the document.
    pub fn render(&self) -> String {
        let mut head_payload = String::new();
        for css in &self.styles {
            head_payload.push_str("    <style>");
            head_payload.push_str(css);
            head_payload.push_str("</style>\n");
        }

        let mut body_payload = String::new();
        for js in &self.scripts {
            body_payload.push_str("    <script>");
            body_payload.push_str(js);
            body_payload.push_str("</script>\n");
        }

        format!(
            r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="description" content="{description}">
{head_payload}</head>
<body>
{body}
{body_payload}</body>
</html>
"#,
            lang = escape_html(&self.lang),
            title = escape_html(&self.title),
            description = escape_html(&self.description),
            body = self.body,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_land_before_head_close() {
        let mut doc = HtmlDocument::new("Accueil", "Site vitrine");
        doc.push_style("body { margin: 0; }");
        doc.set_body("<main>ok</main>");

        let html = doc.render();
        let style_pos = html.find("body { margin: 0; }").unwrap();
        let head_close = html.find("</head>").unwrap();
        assert!(style_pos < head_close);
    }

    #[test]
    fn test_scripts_land_before_body_close() {
        let mut doc = HtmlDocument::new("Accueil", "");
        doc.push_script("console.log('ready');");

        let html = doc.render();
        let script_pos = html.find("console.log('ready');").unwrap();
        let body_close = html.find("</body>").unwrap();
        let body_open = html.find("<body>").unwrap();
        assert!(body_open < script_pos && script_pos < body_close);
    }

    #[test]
    fn test_empty_payloads_are_ignored() {
        let mut doc = HtmlDocument::new("Accueil", "");
        doc.push_style("   ");
        doc.push_script("");

        let html = doc.render();
        assert!(!html.contains("<style>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_head_metadata_is_escaped() {
        let doc = HtmlDocument::new("Plomberie <Express>", r#"Devis "gratuit""#);
        let html = doc.render();

        assert!(html.contains("<title>Plomberie &lt;Express&gt;</title>"));
        assert!(html.contains("content=\"Devis &quot;gratuit&quot;\""));
    }

    #[test]
    fn test_marker_lookups() {
        let mut doc = HtmlDocument::new("", "");
        doc.push_style("/* parallax */ .x {}");
        doc.push_script("// reload client\nconnect();");

        assert!(doc.has_style_containing("parallax"));
        assert!(doc.has_script_containing("reload client"));
        assert!(!doc.has_script_containing("absent"));
    }
}
