use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diagnosis::{
        entities::{AnalysisRecord, DiagnosisOutcome, UpstreamError},
        value_objects::{
            DiagnoseInput, GetAnalysisFilter, GetAnalysisHistoryInput, SaveAnalysisInput,
        },
    },
};

/// External service that inspects a leaf image and answers with a payload of
/// no fixed shape.
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticUpstream: Send + Sync {
    fn submit_image(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<serde_json::Value, UpstreamError>> + Send;
}

/// Repository trait for saved analyses
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisRepository: Send + Sync {
    fn create_analysis(
        &self,
        record: AnalysisRecord,
    ) -> impl Future<Output = Result<AnalysisRecord, CoreError>> + Send;

    fn get_analyses_by_user(
        &self,
        user_id: String,
        filter: GetAnalysisFilter,
    ) -> impl Future<Output = Result<Vec<AnalysisRecord>, CoreError>> + Send;
}

/// Service trait for diagnosis business logic
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosisService: Send + Sync {
    /// Always yields a diagnosis, falling back to the static record when the
    /// upstream is not configured or fails.
    fn diagnose(&self, input: DiagnoseInput) -> impl Future<Output = DiagnosisOutcome> + Send;

    /// Returns `None` when the record could not be stored.
    fn save_analysis(
        &self,
        input: SaveAnalysisInput,
    ) -> impl Future<Output = Option<AnalysisRecord>> + Send;

    fn get_analysis_history(
        &self,
        input: GetAnalysisHistoryInput,
    ) -> impl Future<Output = Result<Vec<AnalysisRecord>, CoreError>> + Send;
}
