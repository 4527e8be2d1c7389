use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        diagnosis::{
            entities::AnalysisRecord, ports::AnalysisRepository, value_objects::GetAnalysisFilter,
        },
    },
    entity::analyses::{
        ActiveModel as AnalysisActiveModel, Column as AnalysisColumn, Entity as AnalysisEntity,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresAnalysisRepository {
    pub db: DatabaseConnection,
}

impl PostgresAnalysisRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AnalysisRepository for PostgresAnalysisRepository {
    async fn create_analysis(&self, record: AnalysisRecord) -> Result<AnalysisRecord, CoreError> {
        let treatment_json =
            serde_json::to_value(&record.treatment_recommendations).map_err(|e| {
                error!("Failed to serialize treatment recommendations: {}", e);
                CoreError::InternalServerError
            })?;
        let advice_json = serde_json::to_value(&record.preventive_advice).map_err(|e| {
            error!("Failed to serialize preventive advice: {}", e);
            CoreError::InternalServerError
        })?;

        let created = AnalysisEntity::insert(AnalysisActiveModel {
            id: Set(record.id),
            user_id: Set(record.user_id),
            image_url: Set(record.image_url),
            disease_name: Set(record.disease_name),
            confidence_score: Set(record.confidence_score),
            treatment_recommendations: Set(treatment_json),
            preventive_advice: Set(advice_json),
            severity_percentage: Set(record.severity_percentage),
            yield_loss_risk: Set(record.yield_loss_risk),
            created_at: Set(record.created_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(AnalysisRecord::from)
        .map_err(|e| {
            error!("Failed to create analysis: {}", e);
            CoreError::DatabaseError(e.to_string())
        })?;

        Ok(created)
    }

    async fn get_analyses_by_user(
        &self,
        user_id: String,
        filter: GetAnalysisFilter,
    ) -> Result<Vec<AnalysisRecord>, CoreError> {
        let mut query = AnalysisEntity::find()
            .filter(AnalysisColumn::UserId.eq(user_id))
            .order_by_desc(AnalysisColumn::CreatedAt);

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        let analyses = query
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch analyses: {}", e);
                CoreError::DatabaseError(e.to_string())
            })?
            .iter()
            .map(AnalysisRecord::from)
            .collect();

        Ok(analyses)
    }
}
