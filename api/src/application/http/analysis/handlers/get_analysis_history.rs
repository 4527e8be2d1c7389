use axum::extract::{Query, State};
use leafdoc_core::domain::diagnosis::{
    entities::AnalysisRecord,
    ports::DiagnosisService,
    value_objects::{GetAnalysisFilter, GetAnalysisHistoryInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    analysis::validators::GetAnalysisHistoryParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAnalysisHistoryResponse {
    pub data: Vec<AnalysisRecord>,
}

#[utoipa::path(
    get,
    path = "/analyses",
    tag = "analysis",
    summary = "Get a user's analysis history",
    description = "Saved analyses of a user, newest first",
    params(GetAnalysisHistoryParams),
    responses(
        (status = 200, body = GetAnalysisHistoryResponse),
        (status = 400, description = "Invalid query parameters")
    ),
)]
pub async fn get_analysis_history(
    State(state): State<AppState>,
    Query(params): Query<GetAnalysisHistoryParams>,
) -> Result<Response<GetAnalysisHistoryResponse>, ApiError> {
    params
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let analyses = state
        .service
        .get_analysis_history(GetAnalysisHistoryInput {
            user_id: params.user_id.trim().to_string(),
            filter: GetAnalysisFilter {
                offset: params.offset,
                limit: params.limit,
            },
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAnalysisHistoryResponse { data: analyses }))
}
