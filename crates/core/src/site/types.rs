use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::error::ExportError;

/// The heterogeneous property bag carried by every block.
///
/// Props are dynamically shaped per block type and may arrive malformed
/// from the content layer; they are normalized by the prop sanitizer
/// before a renderer ever sees them. Passes over props always produce a
/// new map, never mutate one in place.
pub type Props = serde_json::Map<String, Value>;

/// A typed, self-contained unit of page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: Uuid,
    /// Renderer key, looked up in the renderer registry.
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub props: Props,
    #[serde(default = "default_visible", rename = "isVisible")]
    pub is_visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Block {
    /// Creates a new visible block of the given type with empty props.
    pub fn new(block_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            block_type: block_type.into(),
            props: Props::new(),
            is_visible: true,
        }
    }

    /// Sets a single prop on this block.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Replaces the whole prop bag.
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    /// Marks the block as hidden (skipped by the page composer).
    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }

    /// Returns a copy of this block carrying a different prop bag.
    pub fn replacing_props(&self, props: Props) -> Self {
        Self {
            id: self.id,
            block_type: self.block_type.clone(),
            props,
            is_visible: self.is_visible,
        }
    }
}

/// Page-level metadata rendered into the document head.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// An ordered sequence of blocks addressed by a unique slug.
///
/// Block order is render order; slugs are unique per site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub meta: PageMeta,
}

impl Page {
    /// Creates an empty page with the given name and slug.
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            slug: slug.into(),
            blocks: Vec::new(),
            meta: PageMeta::default(),
        }
    }

    /// Appends a block to the page.
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Sets the page metadata.
    pub fn with_meta(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        self.meta = PageMeta {
            title: title.into(),
            description: description.into(),
        };
        self
    }

    /// Returns true if this page is the site's home page.
    pub fn is_home(&self) -> bool {
        self.slug == "/"
    }
}

/// Optional header and footer blocks shared across all pages of a site.
///
/// Either section being absent is a normal condition, not an error; an
/// absent section is simply omitted from composition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSections {
    #[serde(default)]
    pub header: Option<Block>,
    #[serde(default)]
    pub footer: Option<Block>,
}

/// Named color palette referenced by every renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_muted: String,
    pub border: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#3b82f6".to_string(),
            secondary: "#10b981".to_string(),
            accent: "#f59e0b".to_string(),
            background: "#ffffff".to_string(),
            surface: "#f8fafc".to_string(),
            text: "#1f2937".to_string(),
            text_muted: "#6b7280".to_string(),
            border: "#e5e7eb".to_string(),
        }
    }
}

/// Font pairing for headings and body copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub heading: String,
    pub body: String,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            heading: "Poppins".to_string(),
            body: "Open Sans".to_string(),
        }
    }
}

/// The shared color/typography palette for one export.
///
/// Immutable for the duration of an export; referenced, never mutated,
/// by every renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub colors: ThemeColors,
    pub typography: Typography,
}

/// Service availability facts used by the client data analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Availability {
    pub is_24x7: bool,
    pub emergency_response_time: Option<String>,
}

/// Free-form business facts used as personalization source data.
///
/// Every field is optional; an absent field substitutes as an empty
/// string during personalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessInfo {
    pub name: Option<String>,
    pub business_type: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub tagline: Option<String>,
    pub availability: Option<Availability>,
}

impl BusinessInfo {
    /// Returns true if the business advertises round-the-clock service.
    pub fn is_24x7(&self) -> bool {
        self.availability.as_ref().is_some_and(|a| a.is_24x7)
    }
}

/// One project's data snapshot, handed to the engine by the persistence
/// layer as an in-memory value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectData {
    pub project_name: String,
    pub business: BusinessInfo,
    pub pages: Vec<Page>,
    pub global: GlobalSections,
    pub theme: Theme,
    /// Raw client questionnaire payload, consumed by the analyzer.
    pub form_data: Value,
}

impl ProjectData {
    /// Checks the top-level shape of the snapshot.
    ///
    /// A malformed shape rejects the whole export request; this is
    /// distinct from per-block failures, which degrade to placeholders.
    /// Referential integrity beyond slug uniqueness is the persistence
    /// layer's contract and is not re-validated here.
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.pages.is_empty() {
            return Err(ExportError::NoPages);
        }
        let mut seen = std::collections::HashSet::new();
        for page in &self.pages {
            if !seen.insert(page.slug.as_str()) {
                return Err(ExportError::DuplicateSlug(page.slug.clone()));
            }
        }
        Ok(())
    }

    /// The page exported as the main document: slug `/`, else the first.
    pub fn home_page(&self) -> Option<&Page> {
        self.pages.iter().find(|p| p.is_home()).or(self.pages.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_block_builder() {
        let block = Block::new("hero")
            .with_prop("title", "Welcome")
            .with_prop("count", 3);

        assert_eq!(block.block_type, "hero");
        assert!(block.is_visible);
        assert_eq!(block.props["title"], json!("Welcome"));
        assert_eq!(block.props["count"], json!(3));
    }

    #[test]
    fn test_hidden_block() {
        assert!(!Block::new("hero").hidden().is_visible);
    }

    #[test]
    fn test_block_deserializes_with_defaults() {
        let block: Block = serde_json::from_str(
            r#"{"id":"6f9b6e9e-3b8e-4d0a-9f0e-3e1a2b3c4d5e","type":"hero"}"#,
        )
        .unwrap();

        assert!(block.is_visible);
        assert!(block.props.is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_project() {
        let project = ProjectData::default();
        assert_eq!(project.validate(), Err(ExportError::NoPages));
    }

    #[test]
    fn test_validate_rejects_duplicate_slug() {
        let project = ProjectData {
            pages: vec![Page::new("Home", "/"), Page::new("Other", "/")],
            ..ProjectData::default()
        };

        assert_eq!(
            project.validate(),
            Err(ExportError::DuplicateSlug("/".to_string()))
        );
    }

    #[test]
    fn test_home_page_prefers_root_slug() {
        let project = ProjectData {
            pages: vec![Page::new("About", "about"), Page::new("Home", "/")],
            ..ProjectData::default()
        };

        assert_eq!(project.home_page().unwrap().name, "Home");
    }

    #[test]
    fn test_home_page_falls_back_to_first() {
        let project = ProjectData {
            pages: vec![Page::new("About", "about"), Page::new("Team", "team")],
            ..ProjectData::default()
        };

        assert_eq!(project.home_page().unwrap().name, "About");
    }
}
