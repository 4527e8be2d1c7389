use axum::extract::{Multipart, State};
use leafdoc_core::domain::diagnosis::{
    entities::CanonicalDiagnosis, ports::DiagnosisService, value_objects::DiagnoseInput,
};

use crate::application::http::{
    analysis::{
        handlers::{DiagnosisResponse, diagnosis_response},
        validators::MAX_IMAGE_SIZE,
    },
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

#[utoipa::path(
    post,
    path = "/analyze/upload",
    tag = "analysis",
    summary = "Diagnose an uploaded leaf image",
    description = "Multipart variant of /analyze. Expects the image in an `image` field.",
    request_body(content_type = "multipart/form-data", description = "Leaf image in field `image`"),
    responses(
        (status = 200, body = CanonicalDiagnosis, headers(
            ("x-diagnosis-source" = String, description = "`upstream` or `fallback`")
        )),
        (status = 400, description = "Missing or oversized image")
    ),
)]
pub async fn analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<DiagnosisResponse, ApiError> {
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        image_data = Some(data.to_vec());
    }

    let image_data = image_data
        .filter(|data| !data.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let outcome = state.service.diagnose(DiagnoseInput { image_data }).await;

    Ok(diagnosis_response(outcome))
}
