use crate::{domain::diagnosis::entities::AnalysisRecord, entity::analyses};

impl From<&analyses::Model> for AnalysisRecord {
    fn from(model: &analyses::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id.clone(),
            image_url: model.image_url.clone(),
            disease_name: model.disease_name.clone(),
            confidence_score: model.confidence_score,
            treatment_recommendations: serde_json::from_value(
                model.treatment_recommendations.clone(),
            )
            .unwrap_or_default(),
            preventive_advice: serde_json::from_value(model.preventive_advice.clone())
                .unwrap_or_default(),
            severity_percentage: model.severity_percentage,
            yield_loss_risk: model.yield_loss_risk,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<analyses::Model> for AnalysisRecord {
    fn from(model: analyses::Model) -> Self {
        Self::from(&model)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    fn model() -> analyses::Model {
        analyses::Model {
            id: Uuid::new_v4(),
            user_id: "user-1".to_string(),
            image_url: None,
            disease_name: "Rust".to_string(),
            confidence_score: 0.7,
            treatment_recommendations: json!(["Remove infected leaves"]),
            preventive_advice: json!(["Keep foliage dry"]),
            severity_percentage: Some(30.0),
            yield_loss_risk: None,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn test_model_to_record() {
        let model = model();
        let record = AnalysisRecord::from(&model);

        assert_eq!(record.id, model.id);
        assert_eq!(record.treatment_recommendations, vec!["Remove infected leaves"]);
        assert_eq!(record.preventive_advice, vec!["Keep foliage dry"]);
        assert_eq!(record.severity_percentage, Some(30.0));
        assert_eq!(record.created_at, model.created_at.to_utc());
    }

    #[test]
    fn test_malformed_list_column_maps_to_empty() {
        let mut model = model();
        model.treatment_recommendations = json!({ "not": "a list" });

        let record = AnalysisRecord::from(model);

        assert!(record.treatment_recommendations.is_empty());
    }
}
