//! Built-in demo project used when no snapshot path is given.
//!
//! A 24/7 plumbing business with complete questionnaire data, run
//! through the analyzer and template selector so the demo exercises the
//! same pipeline a real project does.

use serde_json::json;

use sitewright_core::template::{instantiate, select_structure};
use sitewright_core::{analyze, Availability, BusinessInfo, ProjectData, Theme};

/// Builds the demo project.
pub fn demo_project() -> ProjectData {
    let form_data = json!({
        "services": [
            {"name": "Dépannage urgent", "priceRange": {"min": 80, "max": 200, "unit": "intervention"}},
            {"name": "Installation sanitaire", "priceRange": {"min": 500, "max": 5000, "unit": "projet"}},
            {"name": "Débouchage", "priceRange": {"min": 100, "max": 300, "unit": "intervention"}},
            {"name": "Réparation fuite", "priceRange": {"min": 150, "max": 400, "unit": "intervention"}}
        ],
        "availability": {"is24x7": true, "emergencyResponseTime": "30 minutes"},
        "portfolioImages": [
            {"url": "img1.jpg", "title": "Salle de bain moderne"},
            {"url": "img2.jpg", "title": "Installation chaudière"},
            {"url": "img3.jpg", "title": "Plomberie cuisine"}
        ],
        "testimonials": [
            {"text": "Intervention rapide et efficace", "author": "M. Dupont", "rating": 5},
            {"text": "Très professionnel", "author": "Mme Martin", "rating": 5}
        ],
        "certifications": [
            {"name": "RGE", "year": 2020},
            {"name": "Qualibat", "year": 2019}
        ],
        "pricing": {"hourlyRate": 65, "freeQuote": true},
        "serviceAreas": ["Paris", "Boulogne", "Neuilly", "Levallois"]
    });

    let business = BusinessInfo {
        name: Some("Plomberie Express".to_string()),
        business_type: Some("plombier".to_string()),
        phone: Some("01 23 45 67 89".to_string()),
        email: Some("contact@plomberie-express.fr".to_string()),
        city: Some("Paris".to_string()),
        address: Some("12 rue des Artisans, 75011 Paris".to_string()),
        tagline: Some("Votre plombier de confiance, 24h/24".to_string()),
        availability: Some(Availability {
            is_24x7: true,
            emergency_response_time: Some("30 minutes".to_string()),
        }),
    };

    let analysis = analyze(&form_data, &business);
    let structure = select_structure(
        business.business_type.as_deref().unwrap_or_default(),
        &analysis,
    );
    let (mut page, global) = instantiate(&structure);

    // Fill the seeded list blocks from the questionnaire data.
    for block in &mut page.blocks {
        match block.block_type.as_str() {
            "services" => {
                block.props.insert(
                    "items".to_string(),
                    json!([
                        {"title": "Dépannage urgent", "description": "Sur place en 30 minutes, 24h/24.", "icon": "🚨", "price": "dès 80 €"},
                        {"title": "Installation sanitaire", "description": "Salles de bain et cuisines clés en main.", "icon": "🛁"},
                        {"title": "Débouchage", "description": "Canalisations et colonnes, sans casse.", "icon": "🔧", "price": "dès 100 €"},
                        {"title": "Réparation fuite", "description": "Recherche de fuite et réparation durable.", "icon": "💧"}
                    ]),
                );
            }
            "testimonials" => {
                block.props.insert(
                    "items".to_string(),
                    form_data["testimonials"].clone(),
                );
            }
            _ => {}
        }
    }

    ProjectData {
        project_name: "Plomberie Express".to_string(),
        business,
        pages: vec![page],
        global,
        theme: Theme::default(),
        form_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitewright_core::{export_site, ExportOptions};

    #[test]
    fn test_demo_selects_emergency_structure() {
        let project = demo_project();
        let analysis = analyze(&project.form_data, &project.business);

        assert!(analysis.has_emergency);
        let structure = select_structure("plombier", &analysis);
        assert_eq!(structure.name, "Structure Urgence");
    }

    #[test]
    fn test_demo_project_exports() {
        let project = demo_project();
        let artifact = export_site(&project, &ExportOptions::default()).unwrap();

        assert!(artifact.html.contains("Plomberie Express"));
        assert!(artifact.html.contains("Dépannage urgent"));
        // No placeholder comments: every demo block has a renderer.
        assert!(!artifact.html.contains("could not be rendered"));
    }
}
