use std::fmt;

use serde_json::Value;

/// Fields of [`CanonicalDiagnosis`](super::entities::CanonicalDiagnosis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    DiseaseName,
    ConfidenceScore,
    TreatmentRecommendations,
    PreventiveAdvice,
    SeverityPercentage,
    YieldLossRisk,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 6] = [
        CanonicalField::DiseaseName,
        CanonicalField::ConfidenceScore,
        CanonicalField::TreatmentRecommendations,
        CanonicalField::PreventiveAdvice,
        CanonicalField::SeverityPercentage,
        CanonicalField::YieldLossRisk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::DiseaseName => "diseaseName",
            CanonicalField::ConfidenceScore => "confidenceScore",
            CanonicalField::TreatmentRecommendations => "treatmentRecommendations",
            CanonicalField::PreventiveAdvice => "preventiveAdvice",
            CanonicalField::SeverityPercentage => "severityPercentage",
            CanonicalField::YieldLossRisk => "yieldLossRisk",
        }
    }

    /// Source keys tried for this field, highest precedence first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            CanonicalField::DiseaseName => &["diseaseName", "disease_name", "disease", "name"],
            CanonicalField::ConfidenceScore => {
                &["confidenceScore", "confidence_score", "confidence"]
            }
            CanonicalField::TreatmentRecommendations => &[
                "treatmentRecommendations",
                "treatment_recommendations",
                "treatment",
                "recommendations",
            ],
            CanonicalField::PreventiveAdvice => &[
                "preventiveAdvice",
                "preventive_advice",
                "prevention",
                "advice",
                "description",
            ],
            CanonicalField::SeverityPercentage => {
                &["severityPercentage", "severity_percentage", "severity"]
            }
            CanonicalField::YieldLossRisk => &["yieldLossRisk", "yield_loss_risk", "yield_loss"],
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value found under one of a field's aliases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a> {
    pub alias: &'static str,
    pub value: &'a Value,
}

/// Every present value among the aliases of `field`, highest precedence first.
///
/// `null` and blank strings count as missing so that a lower-precedence alias
/// can still supply the value.
pub fn candidates(payload: &Value, field: CanonicalField) -> impl Iterator<Item = Resolved<'_>> {
    let object = payload.as_object();

    field.aliases().iter().filter_map(move |alias| {
        object?
            .get(*alias)
            .filter(|value| is_present(value))
            .map(|value| Resolved {
                alias: *alias,
                value,
            })
    })
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.trim().is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn first(payload: &Value, field: CanonicalField) -> Option<Resolved<'_>> {
        candidates(payload, field).next()
    }

    #[test]
    fn test_canonical_name_takes_precedence() {
        let payload = json!({
            "name": "Short",
            "disease": "Shorter",
            "disease_name": "Snake",
            "diseaseName": "Camel"
        });

        let resolved = first(&payload, CanonicalField::DiseaseName).unwrap();
        assert_eq!(resolved.alias, "diseaseName");
        assert_eq!(resolved.value, &json!("Camel"));
    }

    #[test]
    fn test_snake_case_before_short_forms() {
        let payload = json!({ "severity": 10, "severity_percentage": 20 });

        let resolved = first(&payload, CanonicalField::SeverityPercentage).unwrap();
        assert_eq!(resolved.alias, "severity_percentage");
        assert_eq!(resolved.value, &json!(20));
    }

    #[test]
    fn test_null_and_blank_values_fall_through() {
        let payload = json!({
            "diseaseName": null,
            "disease_name": "   ",
            "disease": "Powdery Mildew"
        });

        let resolved = first(&payload, CanonicalField::DiseaseName).unwrap();
        assert_eq!(resolved.alias, "disease");
    }

    #[test]
    fn test_description_is_last_resort_for_preventive_advice() {
        let payload = json!({ "description": "Keep leaves dry.", "advice": ["Prune"] });

        let resolved = first(&payload, CanonicalField::PreventiveAdvice).unwrap();
        assert_eq!(resolved.alias, "advice");
    }

    #[test]
    fn test_candidates_keep_alias_order() {
        let payload = json!({
            "severity": 40,
            "severityPercentage": null,
            "severity_percentage": "high"
        });

        let aliases: Vec<&str> = candidates(&payload, CanonicalField::SeverityPercentage)
            .map(|resolved| resolved.alias)
            .collect();
        assert_eq!(aliases, vec!["severity_percentage", "severity"]);
    }

    #[test]
    fn test_missing_field_resolves_nothing() {
        let payload = json!({ "unrelated": true });

        for field in CanonicalField::ALL {
            assert!(first(&payload, field).is_none(), "{field} resolved");
        }
    }

    #[test]
    fn test_non_object_payload_resolves_nothing() {
        assert!(first(&json!("Leaf Spot"), CanonicalField::DiseaseName).is_none());
        assert!(first(&json!([{ "diseaseName": "x" }]), CanonicalField::DiseaseName).is_none());
        assert!(first(&Value::Null, CanonicalField::DiseaseName).is_none());
        assert_eq!(candidates(&json!(7), CanonicalField::ConfidenceScore).count(), 0);
    }

    #[test]
    fn test_canonical_name_is_first_alias() {
        for field in CanonicalField::ALL {
            assert_eq!(field.aliases()[0], field.as_str());
        }
    }
}
