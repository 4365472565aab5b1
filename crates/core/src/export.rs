//! Export assembly: wrapping composed pages into a complete, self-
//! contained static artifact.

use crate::compose::{compose_fragments, render_page_fragments};
use crate::enhance::{hot_reload, parallax, HtmlDocument};
use crate::personalize::{personalize_props, personalize_str};
use crate::render::{RenderContext, RenderResult, RendererRegistry};
use crate::site::{Block, ExportError, Page, ProjectData, Theme};

/// Whether the artifact is a production bundle or a development preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportMode {
    #[default]
    Production,
    Preview,
}

/// Tunables for one export invocation.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub mode: ExportMode,
    /// Apply the scroll/parallax enhancement pass.
    pub parallax: bool,
    /// Emit the placeholder admin shell alongside the main document.
    pub include_admin_shell: bool,
    /// SSE endpoint for the preview reload client.
    pub dev_events_path: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            mode: ExportMode::Production,
            parallax: true,
            include_admin_shell: true,
            dev_events_path: hot_reload::DEFAULT_EVENTS_PATH.to_string(),
        }
    }
}

impl ExportOptions {
    /// Options for a development preview export.
    pub fn preview() -> Self {
        Self {
            mode: ExportMode::Preview,
            ..Self::default()
        }
    }
}

/// An ancillary file published alongside the main document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditionalFile {
    pub path: String,
    pub content: String,
}

/// The complete exported artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Full document for the home page.
    pub html: String,
    /// Merged stylesheet of the home page (base + blocks).
    pub css: String,
    /// Merged script of the home page (base + blocks).
    pub js: String,
    pub additional_files: Vec<AdditionalFile>,
}

/// Exports a project with the built-in renderer catalogue.
pub fn export_site(
    project: &ProjectData,
    options: &ExportOptions,
) -> Result<ExportArtifact, ExportError> {
    let registry = RendererRegistry::builtin();
    export_with_registry(&registry, project, options)
}

/// Exports a project through an explicit registry.
///
/// The whole export is rejected only for a malformed top-level shape;
/// per-block failures degrade to inert placeholders. The worst case is a
/// structurally valid but visually empty document, never an error.
pub fn export_with_registry(
    registry: &RendererRegistry,
    project: &ProjectData,
    options: &ExportOptions,
) -> Result<ExportArtifact, ExportError> {
    project.validate()?;

    let ctx = RenderContext {
        theme: &project.theme,
    };

    // validate() guarantees at least one page.
    let home = project
        .home_page()
        .expect("validated project has a home page");

    let (html, merged) = export_page(registry, &ctx, project, home, options);

    let mut additional_files = Vec::new();
    if options.include_admin_shell {
        additional_files.push(admin_shell(project));
    }
    for page in &project.pages {
        if page.slug == home.slug {
            continue;
        }
        let (page_html, _) = export_page(registry, &ctx, project, page, options);
        additional_files.push(AdditionalFile {
            path: page_file_path(&page.slug),
            content: page_html,
        });
    }

    tracing::info!(
        project = %project.project_name,
        pages = project.pages.len(),
        additional_files = additional_files.len(),
        "site exported"
    );

    Ok(ExportArtifact {
        html,
        css: format!("{}\n{}", base_css(&project.theme), merged.css),
        js: format!("{}\n{}", base_js(), merged.js),
        additional_files,
    })
}

/// Renders one page into a full document.
fn export_page(
    registry: &RendererRegistry,
    ctx: &RenderContext,
    project: &ProjectData,
    page: &Page,
    options: &ExportOptions,
) -> (String, RenderResult) {
    let business = &project.business;

    // Personalization happens before sanitization and rendering; every
    // pass produces new props, the snapshot itself is never touched.
    let personalized = personalize_page(page, project);
    let header = project
        .global
        .header
        .as_ref()
        .map(|block| block.replacing_props(personalize_props(&block.props, business)));
    let footer = project
        .global
        .footer
        .as_ref()
        .map(|block| block.replacing_props(personalize_props(&block.props, business)));

    let mut fragments =
        render_page_fragments(registry, ctx, &personalized, header.as_ref(), footer.as_ref());

    if options.parallax {
        for fragment in &mut fragments {
            fragment.result.html = parallax::enhance_fragment(&fragment.block_type, &fragment.result.html);
        }
    }

    let merged = compose_fragments(&fragments);

    let fallback_title = business
        .name
        .clone()
        .unwrap_or_else(|| project.project_name.clone());
    let title = non_empty_or(&personalized.meta.title, &fallback_title);
    let fallback_description = business
        .tagline
        .clone()
        .unwrap_or_else(|| "Site web professionnel".to_string());
    let description = non_empty_or(&personalized.meta.description, &fallback_description);

    let mut doc = HtmlDocument::new(title, description);
    doc.push_style(base_css(&project.theme));
    doc.push_style(merged.css.clone());
    doc.set_body(merged.html.clone());
    doc.push_script(base_js());
    doc.push_script(merged.js.clone());

    if options.parallax {
        parallax::inject_shared(&mut doc);
    }
    if options.mode == ExportMode::Preview {
        hot_reload::inject(&mut doc, &options.dev_events_path);
    }

    (doc.render(), merged)
}

fn personalize_page(page: &Page, project: &ProjectData) -> Page {
    let business = &project.business;
    let mut personalized = page.clone();
    personalized.meta.title = personalize_str(&page.meta.title, business);
    personalized.meta.description = personalize_str(&page.meta.description, business);
    personalized.blocks = page
        .blocks
        .iter()
        .map(|block: &Block| block.replacing_props(personalize_props(&block.props, business)))
        .collect();
    personalized
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn page_file_path(slug: &str) -> String {
    let trimmed = slug.trim_matches('/');
    if trimmed.is_empty() {
        "index.html".to_string()
    } else {
        format!("{trimmed}/index.html")
    }
}

/// Theme-derived base stylesheet: reset, custom properties, typography,
/// buttons, forms and the layout primitives shared by all renderers.
fn base_css(theme: &Theme) -> String {
    let colors = &theme.colors;
    format!(
        r#"/* Reset */
*, *::before, *::after {{ box-sizing: border-box; }}
* {{ margin: 0; padding: 0; }}
html, body {{ height: 100%; }}
img, picture, video, canvas, svg {{ display: block; max-width: 100%; }}
input, button, textarea, select {{ font: inherit; }}
p, h1, h2, h3, h4, h5, h6 {{ overflow-wrap: break-word; }}

/* Theme variables */
:root {{
  --primary: {primary};
  --secondary: {secondary};
  --accent: {accent};
  --background: {background};
  --surface: {surface};
  --text: {text};
  --text-muted: {text_muted};
  --border: {border};
  --font-heading: '{heading}', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --font-body: '{body}', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
}}

/* Base */
body {{
  font-family: var(--font-body);
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
  color: var(--text);
  background: var(--background);
}}

h1, h2, h3, h4 {{ font-family: var(--font-heading); }}
h1 {{ font-size: 2.5rem; font-weight: 800; line-height: 1.2; }}
h2 {{ font-size: 2rem; font-weight: 700; line-height: 1.3; }}
h3 {{ font-size: 1.5rem; font-weight: 600; line-height: 1.4; }}
p {{ margin-bottom: 1rem; }}

.container {{
  width: 100%;
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1rem;
}}

/* Buttons */
.btn {{
  display: inline-block;
  padding: 0.75rem 1.5rem;
  background: var(--primary);
  color: #ffffff;
  text-decoration: none;
  border: none;
  border-radius: 0.5rem;
  font-weight: 500;
  cursor: pointer;
  transition: transform 0.3s ease, box-shadow 0.3s ease;
}}
.btn:hover {{
  transform: translateY(-2px);
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
}}

/* Forms */
.form-group {{ margin-bottom: 1.5rem; }}
.form-group label {{
  display: block;
  margin-bottom: 0.5rem;
  font-weight: 500;
}}
.form-group input,
.form-group select,
.form-group textarea {{
  width: 100%;
  padding: 0.75rem 1rem;
  border: 1px solid var(--border);
  border-radius: 0.375rem;
  background: #ffffff;
  font-size: 1rem;
  transition: border-color 0.2s;
}}
.form-group input:focus,
.form-group select:focus,
.form-group textarea:focus {{
  outline: none;
  border-color: var(--primary);
  box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.1);
}}

/* Sections */
section {{ padding: 4rem 0; }}
"#,
        primary = colors.primary,
        secondary = colors.secondary,
        accent = colors.accent,
        background = colors.background,
        surface = colors.surface,
        text = colors.text,
        text_muted = colors.text_muted,
        border = colors.border,
        heading = theme.typography.heading,
        body = theme.typography.body,
    )
}

/// Document-wide base script: smooth anchor scrolling plus the demo form
/// handler. Safe to evaluate once per document.
fn base_js() -> &'static str {
    r##"document.querySelectorAll('a[href^="#"]').forEach(function (anchor) {
  anchor.addEventListener('click', function (event) {
    var target = document.querySelector(anchor.getAttribute('href'));
    if (target) {
      event.preventDefault();
      target.scrollIntoView({ behavior: 'smooth' });
    }
  });
});

document.querySelectorAll('form').forEach(function (form) {
  form.addEventListener('submit', function (event) {
    event.preventDefault();
    alert('Message envoyé ! (Mode démo)');
    form.reset();
  });
});
"##
}

/// The placeholder admin shell published next to the main document.
fn admin_shell(project: &ProjectData) -> AdditionalFile {
    let name = project
        .business
        .name
        .clone()
        .unwrap_or_else(|| project.project_name.clone());

    let mut doc = HtmlDocument::new(format!("Administration — {name}"), "Espace d'administration");
    doc.push_style(
        r#"body { font-family: sans-serif; padding: 2rem; }
.container { max-width: 1200px; margin: 0 auto; }
"#,
    );
    doc.set_body(
        r#"    <div class="container">
        <h1>Espace d'administration</h1>
        <p>La gestion du contenu sera bientôt disponible.</p>
    </div>"#,
    );

    AdditionalFile {
        path: "admin/index.html".to_string(),
        content: doc.render(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderError;
    use crate::site::{BusinessInfo, GlobalSections, Props};
    use serde_json::json;

    fn project() -> ProjectData {
        let page = Page::new("Accueil", "/")
            .with_block(Block::new("hero").with_prop("title", "Bienvenue chez {{businessName}}"))
            .with_block(Block::new("cta"))
            .with_meta("{{businessName}}", "{{tagline}}");

        ProjectData {
            project_name: "demo".to_string(),
            business: BusinessInfo {
                name: Some("Plomberie Express".to_string()),
                tagline: Some("Votre plombier à Paris".to_string()),
                ..BusinessInfo::default()
            },
            pages: vec![page],
            global: GlobalSections::default(),
            theme: Theme::default(),
            form_data: json!({}),
        }
    }

    fn failing(
        _ctx: &RenderContext,
        _props: &Props,
        _children: &[RenderResult],
    ) -> Result<RenderResult, RenderError> {
        Err(RenderError::Other("boom".to_string()))
    }

    #[test]
    fn test_export_produces_full_document() {
        let artifact = export_site(&project(), &ExportOptions::default()).unwrap();

        assert!(artifact.html.starts_with("<!DOCTYPE html>"));
        assert!(artifact.html.contains("<title>Plomberie Express</title>"));
        assert!(artifact.html.contains("Bienvenue chez Plomberie Express"));
        assert!(artifact.css.contains("--primary: #3b82f6"));
        assert!(artifact.js.contains("scrollIntoView"));
    }

    #[test]
    fn test_failing_block_degrades_to_single_placeholder() {
        let registry = RendererRegistry::builtin().register("content", failing);
        let mut project = project();
        project.pages[0].blocks.insert(1, Block::new("content"));

        let artifact =
            export_with_registry(&registry, &project, &ExportOptions::default()).unwrap();

        assert!(artifact.html.contains("class=\"hero"));
        assert!(artifact.html.contains("class=\"cta"));
        assert_eq!(
            artifact.html.matches("<!-- block 'content'").count(),
            1
        );
    }

    #[test]
    fn test_preview_carries_reload_client_production_does_not() {
        let preview = export_site(&project(), &ExportOptions::preview()).unwrap();
        assert!(preview.html.contains("sitewright dev reload client"));

        let production = export_site(&project(), &ExportOptions::default()).unwrap();
        assert!(!production.html.contains("sitewright dev reload client"));
    }

    #[test]
    fn test_parallax_payload_injected_once() {
        let artifact = export_site(&project(), &ExportOptions::default()).unwrap();
        assert_eq!(
            artifact.html.matches("scroll-effects shared payload").count(),
            2 // one style block, one script block
        );

        let options = ExportOptions {
            parallax: false,
            ..ExportOptions::default()
        };
        let plain = export_site(&project(), &options).unwrap();
        assert!(!plain.html.contains("scroll-effects shared payload"));
    }

    #[test]
    fn test_admin_shell_and_extra_pages_in_additional_files() {
        let mut project = project();
        project.pages.push(
            Page::new("Prestations", "/prestations").with_block(Block::new("services")),
        );

        let artifact = export_site(&project, &ExportOptions::default()).unwrap();

        let paths: Vec<&str> = artifact
            .additional_files
            .iter()
            .map(|f| f.path.as_str())
            .collect();
        assert!(paths.contains(&"admin/index.html"));
        assert!(paths.contains(&"prestations/index.html"));

        let prestations = artifact
            .additional_files
            .iter()
            .find(|f| f.path == "prestations/index.html")
            .unwrap();
        assert!(prestations.content.contains("class=\"services"));
    }

    #[test]
    fn test_rejects_malformed_project() {
        let empty = ProjectData::default();
        assert_eq!(
            export_site(&empty, &ExportOptions::default()),
            Err(ExportError::NoPages)
        );
    }

    #[test]
    fn test_global_sections_wrap_page_blocks() {
        let mut project = project();
        project.global = GlobalSections {
            header: Some(Block::new("header").with_prop("businessName", "{{businessName}}")),
            footer: Some(Block::new("footer").with_prop("businessName", "{{businessName}}")),
        };

        let artifact = export_site(&project, &ExportOptions::default()).unwrap();

        let pos_header = artifact.html.find("<header").unwrap();
        let pos_hero = artifact.html.find("class=\"hero").unwrap();
        let pos_footer = artifact.html.find("<footer").unwrap();
        assert!(pos_header < pos_hero && pos_hero < pos_footer);
        // Personalization reached the global sections too.
        assert!(artifact.html.matches("Plomberie Express").count() >= 2);
    }

    #[test]
    fn test_empty_project_page_exports_to_valid_document() {
        let mut project = project();
        project.pages = vec![Page::new("Vide", "/")];

        let artifact = export_site(&project, &ExportOptions::default()).unwrap();

        assert!(artifact.html.starts_with("<!DOCTYPE html>"));
        assert!(artifact.html.contains("</html>"));
    }
}
