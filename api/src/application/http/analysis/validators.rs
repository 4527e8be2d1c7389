use base64::{Engine as _, engine::general_purpose};
use leafdoc_core::domain::diagnosis::entities::CanonicalDiagnosis;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeImageRequest {
    /// Base64 encoded image, optionally as a `data:` URL.
    #[validate(required(message = "image is required"))]
    pub image: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SaveAnalysisRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "user_id must be between 1 and 255 characters"
    ))]
    pub user_id: String,
    /// Diagnosis to store. Normalized again before it is saved.
    #[schema(value_type = CanonicalDiagnosis)]
    pub analysis: serde_json::Value,
    /// Base64 encoded image, optionally as a `data:` URL.
    pub image: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema, Validate)]
#[into_params(parameter_in = Query)]
pub struct GetAnalysisHistoryParams {
    #[validate(length(min = 1, max = 255, message = "user_id is required"))]
    pub user_id: String,
    #[schema(example = 0)]
    pub offset: Option<u32>,
    #[schema(example = 20)]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u32>,
}

/// Decodes a base64 image, accepting an optional `data:<mime>;base64,` prefix
/// and embedded whitespace.
pub fn decode_image(encoded: &str) -> Result<Vec<u8>, ApiError> {
    let payload = match encoded.trim().strip_prefix("data:") {
        Some(data_url) => data_url
            .split_once(',')
            .map(|(_, data)| data)
            .ok_or_else(|| ApiError::BadRequest("Malformed data URL".to_string()))?,
        None => encoded,
    };

    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(ApiError::BadRequest("Image data is empty".to_string()));
    }

    let image = general_purpose::STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| ApiError::BadRequest(format!("Image is not valid base64: {}", e)))?;

    if image.len() > MAX_IMAGE_SIZE {
        return Err(ApiError::BadRequest(format!(
            "Image too large. Max size is {} bytes",
            MAX_IMAGE_SIZE
        )));
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_plain_base64() {
        assert_eq!(decode_image("AQID").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_data_url() {
        assert_eq!(
            decode_image("data:image/jpeg;base64,AQID").unwrap(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_decode_ignores_line_breaks() {
        assert_eq!(decode_image("AQ\nID\n").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_rejects_empty_and_invalid() {
        assert!(matches!(decode_image("  "), Err(ApiError::BadRequest(_))));
        assert!(matches!(
            decode_image("data:image/jpeg;base64,"),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(decode_image("data:image/jpeg"), Err(ApiError::BadRequest(_))));
        assert!(matches!(decode_image("not base64!"), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_history_limit_is_bounded() {
        let params = GetAnalysisHistoryParams {
            user_id: "user-1".to_string(),
            offset: None,
            limit: Some(500),
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_save_request_requires_user() {
        let request: SaveAnalysisRequest = serde_json::from_value(json!({
            "user_id": "",
            "analysis": { "diseaseName": "Rust" }
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }
}
