use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const UNKNOWN_DISEASE: &str = "Unknown Disease";

/// Canonical, UI-ready diagnosis of a leaf image.
///
/// `confidence_score` is always within `[0, 1]`; the two optional
/// percentages are within `[0, 100]` when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalDiagnosis {
    #[schema(example = "Leaf Spot Disease")]
    pub disease_name: String,
    #[schema(example = 0.87)]
    pub confidence_score: f64,
    pub treatment_recommendations: Vec<String>,
    pub preventive_advice: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 65.0)]
    pub severity_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 45.0)]
    pub yield_loss_risk: Option<f64>,
}

impl Default for CanonicalDiagnosis {
    fn default() -> Self {
        Self {
            disease_name: UNKNOWN_DISEASE.to_string(),
            confidence_score: 0.0,
            treatment_recommendations: Vec::new(),
            preventive_advice: Vec::new(),
            severity_percentage: None,
            yield_loss_risk: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_serializes_camel_case_and_omits_absent_percentages() {
        let diagnosis = CanonicalDiagnosis {
            disease_name: "Rust".to_string(),
            confidence_score: 0.5,
            treatment_recommendations: vec!["Remove infected leaves".to_string()],
            preventive_advice: vec![],
            severity_percentage: Some(20.0),
            yield_loss_risk: None,
        };

        let value = serde_json::to_value(&diagnosis).unwrap();
        assert_eq!(
            value,
            json!({
                "diseaseName": "Rust",
                "confidenceScore": 0.5,
                "treatmentRecommendations": ["Remove infected leaves"],
                "preventiveAdvice": [],
                "severityPercentage": 20.0
            })
        );
    }

    #[test]
    fn test_default_is_unknown_disease() {
        let diagnosis = CanonicalDiagnosis::default();
        assert_eq!(diagnosis.disease_name, UNKNOWN_DISEASE);
        assert_eq!(diagnosis.confidence_score, 0.0);
        assert!(diagnosis.treatment_recommendations.is_empty());
        assert!(diagnosis.preventive_advice.is_empty());
    }
}
