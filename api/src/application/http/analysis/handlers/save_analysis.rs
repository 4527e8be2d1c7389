use axum::{
    extract::State,
    response::{IntoResponse, Response as AxumResponse},
};
use leafdoc_core::domain::diagnosis::{
    entities::AnalysisRecord, normalizer::normalize, ports::DiagnosisService,
    value_objects::SaveAnalysisInput,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::application::http::{
    analysis::validators::{SaveAnalysisRequest, decode_image},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalysisNotSavedResponse {
    pub saved: bool,
}

#[utoipa::path(
    post,
    path = "/analyses",
    tag = "analysis",
    summary = "Save a diagnosis to the user's history",
    description = "Stores a diagnosis. A storage failure does not fail the request; it answers 202 with `saved: false`.",
    request_body = SaveAnalysisRequest,
    responses(
        (status = 201, body = AnalysisRecord),
        (status = 202, body = AnalysisNotSavedResponse),
        (status = 400, description = "Invalid request")
    ),
)]
pub async fn save_analysis(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SaveAnalysisRequest>,
) -> Result<AxumResponse, ApiError> {
    let image_data = payload
        .image
        .as_deref()
        .map(decode_image)
        .transpose()?;

    let diagnosis = normalize(&payload.analysis).diagnosis;

    let saved = state
        .service
        .save_analysis(SaveAnalysisInput {
            user_id: payload.user_id.trim().to_string(),
            diagnosis,
            image_data,
        })
        .await;

    match saved {
        Some(record) => Ok(Response::Created(record).into_response()),
        None => {
            warn!("Analysis was not saved");
            Ok(Response::Accepted(AnalysisNotSavedResponse { saved: false }).into_response())
        }
    }
}
