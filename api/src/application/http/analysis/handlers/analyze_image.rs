use axum::extract::State;
use leafdoc_core::domain::diagnosis::{
    entities::CanonicalDiagnosis, ports::DiagnosisService, value_objects::DiagnoseInput,
};

use crate::application::http::{
    analysis::{
        handlers::{DiagnosisResponse, diagnosis_response},
        validators::{AnalyzeImageRequest, decode_image},
    },
    server::{
        api_entities::api_error::{ApiError, ValidateJson},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    summary = "Diagnose a leaf image",
    description = "Sends a base64 encoded leaf image to the diagnostic webhook and returns the normalized diagnosis. Falls back to a static diagnosis when the webhook is not configured or fails.",
    request_body = AnalyzeImageRequest,
    responses(
        (status = 200, body = CanonicalDiagnosis, headers(
            ("x-diagnosis-source" = String, description = "`upstream` or `fallback`")
        )),
        (status = 400, description = "Missing or invalid image")
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeImageRequest>,
) -> Result<DiagnosisResponse, ApiError> {
    let image = payload
        .image
        .ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;
    let image_data = decode_image(&image)?;

    let outcome = state.service.diagnose(DiagnoseInput { image_data }).await;

    Ok(diagnosis_response(outcome))
}
