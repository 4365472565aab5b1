//! Adaptive template selection: mapping a completeness profile to an
//! ordered structural plan, and materializing that plan into a page of
//! seed blocks.
//!
//! The selector is an ordered decision table evaluated top to bottom,
//! first match wins. It is fully deterministic: identical inputs always
//! produce the identical structure.

use serde::Serialize;
use serde_json::{json, Value};

use crate::analyze::ClientDataAnalysis;
use crate::site::{Block, GlobalSections, Page, PageMeta};

/// Portfolio size above which the visual showcase structure wins.
pub const PORTFOLIO_THRESHOLD: usize = 5;

/// One entry of a structural plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateBlock {
    #[serde(rename = "type")]
    pub block_type: &'static str,
    pub variant: &'static str,
}

/// The ordered structural plan chosen for a business profile.
///
/// Entries are `(block type, variant)` pairs only; props are filled
/// downstream by the personalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateStructure {
    pub name: &'static str,
    pub blocks: Vec<TemplateBlock>,
}

const fn entry(block_type: &'static str, variant: &'static str) -> TemplateBlock {
    TemplateBlock {
        block_type,
        variant,
    }
}

/// Selects the structural plan for the given business profile.
///
/// Decision table, first match wins:
/// 1. emergency service → urgency-led structure
/// 2. portfolio larger than [`PORTFOLIO_THRESHOLD`] → visual showcase
/// 3. eco positioning → nature-led structure
/// 4. otherwise → standard professional structure
pub fn select_structure(_business_type: &str, analysis: &ClientDataAnalysis) -> TemplateStructure {
    if analysis.has_emergency {
        return TemplateStructure {
            name: "Structure Urgence",
            blocks: vec![
                entry("header", "sticky-urgent"),
                entry("hero", "emergency"),
                entry("cta", "urgency-banner"),
                entry("services", "quick"),
                entry("features", "24-7"),
                entry("testimonials", "trust"),
                entry("contact", "emergency-form"),
                entry("footer", "contact"),
            ],
        };
    }

    if analysis.portfolio_count > PORTFOLIO_THRESHOLD {
        return TemplateStructure {
            name: "Structure Portfolio",
            blocks: vec![
                entry("header", "creative"),
                entry("hero", "visual"),
                entry("gallery", "masonry"),
                entry("content", "about-artist"),
                entry("services", "creative"),
                entry("gallery", "before-after"),
                entry("testimonials", "creative"),
                entry("contact", "project-inquiry"),
                entry("footer", "portfolio"),
            ],
        };
    }

    if analysis.has_eco {
        return TemplateStructure {
            name: "Structure Écologique",
            blocks: vec![
                entry("header", "eco"),
                entry("hero", "nature"),
                entry("content", "eco-mission"),
                entry("features", "eco-benefits"),
                entry("services", "green"),
                entry("content", "certifications"),
                entry("testimonials", "eco"),
                entry("contact", "nature"),
                entry("footer", "eco"),
            ],
        };
    }

    TemplateStructure {
        name: "Structure Standard",
        blocks: vec![
            entry("header", "professional"),
            entry("hero", "modern"),
            entry("content", "about"),
            entry("services", "grid"),
            entry("features", "benefits"),
            entry("testimonials", "carousel"),
            entry("contact", "form-map"),
            entry("footer", "complete"),
        ],
    }
}

/// Materializes a structural plan into a home page plus global sections.
///
/// The leading header and trailing footer entries become the shared
/// global sections; interior entries become the page's blocks. Every
/// block carries its variant and seed props holding `{{token}}`
/// placeholders for the personalizer to fill.
pub fn instantiate(structure: &TemplateStructure) -> (Page, GlobalSections) {
    let mut page = Page::new("Accueil", "/");
    page.meta = PageMeta {
        title: "{{businessName}}".to_string(),
        description: "{{tagline}}".to_string(),
    };
    let mut global = GlobalSections::default();

    for template_block in &structure.blocks {
        let block = seed_block(template_block);
        match template_block.block_type {
            "header" => global.header = Some(block),
            "footer" => global.footer = Some(block),
            _ => page.blocks.push(block),
        }
    }

    (page, global)
}

/// Builds one seed block for a plan entry.
fn seed_block(template_block: &TemplateBlock) -> Block {
    let mut block = Block::new(template_block.block_type)
        .with_prop("variant", template_block.variant);

    for (key, value) in seed_props(template_block) {
        block.props.insert(key.to_string(), value);
    }
    block
}

fn seed_props(template_block: &TemplateBlock) -> Vec<(&'static str, Value)> {
    match (template_block.block_type, template_block.variant) {
        ("header", _) => vec![
            ("businessName", json!("{{businessName}}")),
            ("phone", json!("{{phone}}")),
            (
                "menuItems",
                json!([
                    {"label": "Accueil", "href": "/"},
                    {"label": "Services", "href": "#services"},
                    {"label": "À propos", "href": "#about"},
                    {"label": "Contact", "href": "#contact"}
                ]),
            ),
        ],
        ("hero", "emergency") => vec![
            ("title", json!("{{businessName}}, dépannage 24h/24")),
            ("subtitle", json!("Intervention rapide à {{city}} et alentours")),
            ("badge", json!("Urgence 24/7")),
            ("phone", json!("{{phone}}")),
            ("buttonText", json!("Appeler maintenant")),
        ],
        ("hero", _) => vec![
            ("title", json!("Votre {{businessType}} de confiance")),
            ("subtitle", json!("{{businessName}} vous accompagne à {{city}}")),
            ("buttonText", json!("Demander un devis")),
        ],
        ("cta", "urgency-banner") => vec![
            ("title", json!("Besoin d'une intervention urgente ?")),
            ("subtitle", json!("Intervention rapide 24h/24, 7j/7")),
            ("urgencyText", json!("Disponible 24/7")),
            ("phone", json!("{{phone}}")),
        ],
        ("cta", _) => vec![
            ("title", json!("Prêt à démarrer votre projet ?")),
            ("subtitle", json!("Devis gratuit et sans engagement")),
        ],
        ("services", _) => vec![("title", json!("Nos Services")), ("items", json!([]))],
        ("features", "24-7") => vec![
            ("title", json!("Pourquoi nous choisir")),
            (
                "items",
                json!([
                    {"title": "Disponibles 24/7", "description": "Une urgence n'attend pas.", "icon": "🕐"},
                    {"title": "Intervention rapide", "description": "Sur place en moins d'une heure.", "icon": "⚡"},
                    {"title": "Devis transparent", "description": "Prix annoncé avant toute intervention.", "icon": "📋"}
                ]),
            ),
        ],
        ("features", _) => vec![
            ("title", json!("Pourquoi nous choisir")),
            (
                "items",
                json!([
                    {"title": "Savoir-faire reconnu", "description": "Des années d'expérience à votre service.", "icon": "🛠"},
                    {"title": "Devis gratuit", "description": "Estimation claire et sans engagement.", "icon": "📋"},
                    {"title": "Travail soigné", "description": "Finitions garanties sur chaque chantier.", "icon": "✅"}
                ]),
            ),
        ],
        ("content", "eco-mission") => vec![
            ("title", json!("Notre engagement écologique")),
            (
                "content",
                json!("{{businessName}} privilégie des matériaux durables et des méthodes respectueuses de l'environnement."),
            ),
        ],
        ("content", "certifications") => vec![
            ("title", json!("Nos Certifications")),
            ("items", json!([])),
        ],
        ("content", _) => vec![
            ("title", json!("À propos de {{businessName}}")),
            (
                "content",
                json!("{{businessName}} est votre {{businessType}} à {{city}}. {{tagline}}"),
            ),
        ],
        ("gallery", _) => vec![("title", json!("Nos Réalisations")), ("items", json!([]))],
        ("testimonials", _) => vec![
            ("title", json!("Ils nous font confiance")),
            ("items", json!([])),
        ],
        ("contact", _) => vec![
            ("title", json!("Contactez-nous")),
            ("phone", json!("{{phone}}")),
            ("email", json!("{{email}}")),
            ("address", json!("{{address}}")),
        ],
        ("footer", _) => vec![
            ("businessName", json!("{{businessName}}")),
            ("tagline", json!("{{tagline}}")),
            ("phone", json!("{{phone}}")),
            ("email", json!("{{email}}")),
            ("address", json!("{{address}}")),
        ],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emergency_outranks_portfolio() {
        let analysis = ClientDataAnalysis {
            has_emergency: true,
            portfolio_count: 10,
            has_portfolio: true,
            ..ClientDataAnalysis::default()
        };

        let structure = select_structure("plombier", &analysis);
        assert_eq!(structure.name, "Structure Urgence");
    }

    #[test]
    fn test_portfolio_above_threshold() {
        let analysis = ClientDataAnalysis {
            portfolio_count: 6,
            has_portfolio: true,
            ..ClientDataAnalysis::default()
        };

        let structure = select_structure("menuisier", &analysis);
        assert_eq!(structure.name, "Structure Portfolio");
    }

    #[test]
    fn test_portfolio_at_threshold_does_not_match() {
        let analysis = ClientDataAnalysis {
            portfolio_count: PORTFOLIO_THRESHOLD,
            has_portfolio: true,
            ..ClientDataAnalysis::default()
        };

        let structure = select_structure("menuisier", &analysis);
        assert_eq!(structure.name, "Structure Standard");
    }

    #[test]
    fn test_eco_structure() {
        let analysis = ClientDataAnalysis {
            has_eco: true,
            ..ClientDataAnalysis::default()
        };

        let structure = select_structure("jardinier", &analysis);
        assert_eq!(structure.name, "Structure Écologique");
    }

    #[test]
    fn test_standard_fallback() {
        let structure = select_structure("electricien", &ClientDataAnalysis::default());
        assert_eq!(structure.name, "Structure Standard");

        let first = structure.blocks.first().unwrap();
        assert_eq!(first.block_type, "header");
        assert_eq!(first.variant, "professional");
    }

    #[test]
    fn test_deterministic() {
        let analysis = ClientDataAnalysis {
            has_emergency: true,
            ..ClientDataAnalysis::default()
        };

        assert_eq!(
            select_structure("serrurier", &analysis),
            select_structure("serrurier", &analysis)
        );
    }

    #[test]
    fn test_instantiate_splits_global_sections() {
        let structure = select_structure("plombier", &ClientDataAnalysis::default());
        let (page, global) = instantiate(&structure);

        assert!(global.header.is_some());
        assert!(global.footer.is_some());
        // Interior plan entries land on the page, in order.
        assert_eq!(page.blocks.len(), structure.blocks.len() - 2);
        assert_eq!(page.blocks.first().unwrap().block_type, "hero");
        assert!(page.is_home());
    }

    #[test]
    fn test_seed_blocks_carry_variant_and_tokens() {
        let analysis = ClientDataAnalysis {
            has_emergency: true,
            ..ClientDataAnalysis::default()
        };
        let (page, global) = instantiate(&select_structure("plombier", &analysis));

        let hero = page.blocks.iter().find(|b| b.block_type == "hero").unwrap();
        assert_eq!(hero.props["variant"], serde_json::json!("emergency"));
        assert!(hero.props["title"]
            .as_str()
            .unwrap()
            .contains("{{businessName}}"));

        let header = global.header.unwrap();
        assert_eq!(header.props["variant"], serde_json::json!("sticky-urgent"));
    }
}
