use axum::http::HeaderName;
use leafdoc_core::domain::diagnosis::entities::{CanonicalDiagnosis, DiagnosisOutcome};

use crate::application::http::server::api_entities::response::Response;

pub mod analyze_image;
pub mod analyze_upload;
pub mod get_analysis_history;
pub mod save_analysis;

/// Tells the client whether the diagnosis came from the upstream service or
/// from the fallback record.
pub const DIAGNOSIS_SOURCE_HEADER: HeaderName = HeaderName::from_static("x-diagnosis-source");

pub type DiagnosisResponse = ([(HeaderName, &'static str); 1], Response<CanonicalDiagnosis>);

pub fn diagnosis_response(outcome: DiagnosisOutcome) -> DiagnosisResponse {
    (
        [(DIAGNOSIS_SOURCE_HEADER, outcome.source.as_str())],
        Response::OK(outcome.diagnosis),
    )
}
