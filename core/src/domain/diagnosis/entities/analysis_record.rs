use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, diagnosis::entities::CanonicalDiagnosis};

/// A diagnosis saved to a user's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub user_id: String,
    pub image_url: Option<String>,
    pub disease_name: String,
    pub confidence_score: f64,
    pub treatment_recommendations: Vec<String>,
    pub preventive_advice: Vec<String>,
    pub severity_percentage: Option<f64>,
    pub yield_loss_risk: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl AnalysisRecord {
    pub fn new(user_id: String, diagnosis: CanonicalDiagnosis, image_url: Option<String>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            image_url,
            disease_name: diagnosis.disease_name,
            confidence_score: diagnosis.confidence_score,
            treatment_recommendations: diagnosis.treatment_recommendations,
            preventive_advice: diagnosis.preventive_advice,
            severity_percentage: diagnosis.severity_percentage,
            yield_loss_risk: diagnosis.yield_loss_risk,
            created_at: now,
        }
    }

    pub fn diagnosis(&self) -> CanonicalDiagnosis {
        CanonicalDiagnosis {
            disease_name: self.disease_name.clone(),
            confidence_score: self.confidence_score,
            treatment_recommendations: self.treatment_recommendations.clone(),
            preventive_advice: self.preventive_advice.clone(),
            severity_percentage: self.severity_percentage,
            yield_loss_risk: self.yield_loss_risk,
        }
    }
}
