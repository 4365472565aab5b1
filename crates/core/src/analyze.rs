//! Client data analysis: the completeness profile of a client's
//! submitted business data.
//!
//! The profile drives the adaptive template selector. It is a pure
//! function of the raw questionnaire payload plus the business facts:
//! no I/O, no randomness, recomputed per export and never persisted.

use serde::Serialize;
use serde_json::Value;

use crate::site::BusinessInfo;

/// Boolean/count flags derived from the client's submitted data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClientDataAnalysis {
    pub has_services: bool,
    pub services_count: usize,
    pub has_pricing: bool,
    pub has_portfolio: bool,
    pub portfolio_count: usize,
    pub has_testimonials: bool,
    pub has_team: bool,
    pub has_certifications: bool,
    pub has_emergency: bool,
    pub has_eco: bool,
}

/// Derives the completeness profile from raw form data and business
/// facts. Deterministic for identical inputs.
pub fn analyze(form_data: &Value, business: &BusinessInfo) -> ClientDataAnalysis {
    let services_count = array_len(form_data, "services");
    let portfolio_count = array_len(form_data, "portfolioImages");

    let has_pricing = form_data
        .pointer("/pricing/hourlyRate")
        .is_some_and(|v| !v.is_null())
        || form_data
            .get("services")
            .and_then(Value::as_array)
            .is_some_and(|services| services.iter().any(|s| s.get("priceRange").is_some()));

    let has_emergency = business.is_24x7()
        || form_data
            .pointer("/availability/is24x7")
            .and_then(Value::as_bool)
            .unwrap_or(false)
        || form_data
            .get("is24x7Available")
            .and_then(Value::as_bool)
            .unwrap_or(false);

    let has_eco = form_data
        .get("ecoFriendly")
        .and_then(Value::as_bool)
        .unwrap_or(false)
        || form_data
            .get("labels")
            .and_then(Value::as_array)
            .is_some_and(|labels| labels.iter().any(|l| l.as_str() == Some("eco")));

    ClientDataAnalysis {
        has_services: services_count > 0,
        services_count,
        has_pricing,
        has_portfolio: portfolio_count > 0,
        portfolio_count,
        has_testimonials: array_len(form_data, "testimonials") > 0,
        has_team: array_len(form_data, "teamMembers") > 0,
        has_certifications: array_len(form_data, "certifications") > 0,
        has_emergency,
        has_eco,
    }
}

fn array_len(form_data: &Value, key: &str) -> usize {
    form_data
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::len)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::Availability;
    use serde_json::json;

    #[test]
    fn test_empty_data_yields_empty_profile() {
        let analysis = analyze(&json!({}), &BusinessInfo::default());
        assert_eq!(analysis, ClientDataAnalysis::default());
    }

    #[test]
    fn test_full_profile() {
        let form_data = json!({
            "services": [
                {"name": "Dépannage urgent", "priceRange": {"min": 80, "max": 200}},
                {"name": "Installation sanitaire"}
            ],
            "availability": {"is24x7": true, "emergencyResponseTime": "30 minutes"},
            "portfolioImages": [{"url": "img1.jpg"}, {"url": "img2.jpg"}, {"url": "img3.jpg"}],
            "testimonials": [{"clientName": "M. Dupont", "rating": 5}],
            "certifications": [{"name": "RGE", "year": 2020}],
            "teamMembers": [{"name": "Jean Dupuis", "role": "Gérant"}]
        });

        let analysis = analyze(&form_data, &BusinessInfo::default());

        assert!(analysis.has_services);
        assert_eq!(analysis.services_count, 2);
        assert!(analysis.has_pricing);
        assert!(analysis.has_portfolio);
        assert_eq!(analysis.portfolio_count, 3);
        assert!(analysis.has_testimonials);
        assert!(analysis.has_team);
        assert!(analysis.has_certifications);
        assert!(analysis.has_emergency);
        assert!(!analysis.has_eco);
    }

    #[test]
    fn test_pricing_from_hourly_rate() {
        let analysis = analyze(&json!({"pricing": {"hourlyRate": 65}}), &BusinessInfo::default());
        assert!(analysis.has_pricing);
    }

    #[test]
    fn test_emergency_from_business_availability() {
        let business = BusinessInfo {
            availability: Some(Availability {
                is_24x7: true,
                emergency_response_time: None,
            }),
            ..BusinessInfo::default()
        };

        assert!(analyze(&json!({}), &business).has_emergency);
    }

    #[test]
    fn test_emergency_from_flat_flag() {
        let analysis = analyze(&json!({"is24x7Available": true}), &BusinessInfo::default());
        assert!(analysis.has_emergency);
    }

    #[test]
    fn test_eco_from_labels() {
        let analysis = analyze(
            &json!({"labels": ["eco", "Bio", "Permaculture"]}),
            &BusinessInfo::default(),
        );
        assert!(analysis.has_eco);

        let analysis = analyze(&json!({"labels": ["Bio"]}), &BusinessInfo::default());
        assert!(!analysis.has_eco);
    }

    #[test]
    fn test_deterministic() {
        let form_data = json!({"services": ["a", "b"], "ecoFriendly": true});
        let business = BusinessInfo::default();

        assert_eq!(analyze(&form_data, &business), analyze(&form_data, &business));
    }
}
