use base64::{Engine as _, engine::general_purpose};
use tracing::{debug, error, info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diagnosis::{
        entities::{
            AnalysisRecord, DiagnosisOutcome, DiagnosisSource, FallbackReason, NormalizationNote,
            UpstreamError,
        },
        fallback::fallback_diagnosis,
        normalizer::normalize,
        ports::{AnalysisRepository, DiagnosisService, DiagnosticUpstream},
        value_objects::{
            DEFAULT_HISTORY_LIMIT, DiagnoseInput, GetAnalysisHistoryInput, SaveAnalysisInput,
        },
    },
};

impl<U, AR> DiagnosisService for Service<U, AR>
where
    U: DiagnosticUpstream,
    AR: AnalysisRepository,
{
    #[instrument(skip_all, fields(image_bytes = input.image_data.len()))]
    async fn diagnose(&self, input: DiagnoseInput) -> DiagnosisOutcome {
        let outcome = match &self.upstream {
            None => {
                info!("No upstream webhook configured");
                DiagnosisOutcome::fallback(
                    fallback_diagnosis(),
                    FallbackReason::ConfigurationAbsent,
                )
            }
            Some(upstream) => match upstream.submit_image(input.image_data).await {
                Ok(payload) => DiagnosisOutcome::upstream(normalize(&payload)),
                Err(UpstreamError::NotFound) => {
                    warn!("Upstream webhook not found or workflow inactive");
                    DiagnosisOutcome::fallback(
                        fallback_diagnosis(),
                        FallbackReason::UpstreamInactive,
                    )
                }
                Err(e) => {
                    error!("Upstream diagnosis failed: {}", e);
                    DiagnosisOutcome::fallback(
                        fallback_diagnosis(),
                        FallbackReason::UpstreamUnreachable,
                    )
                }
            },
        };

        if let DiagnosisSource::Fallback(reason) = outcome.source {
            info!(%reason, "Serving fallback diagnosis");
        }
        log_notes(&outcome.notes);
        debug!(
            source = outcome.source.as_str(),
            disease = %outcome.diagnosis.disease_name,
            "Diagnosis ready"
        );

        outcome
    }

    #[instrument(skip_all, fields(user_id = %input.user_id))]
    async fn save_analysis(&self, input: SaveAnalysisInput) -> Option<AnalysisRecord> {
        let image_url = input.image_data.map(|data| {
            format!(
                "data:image/jpeg;base64,{}",
                general_purpose::STANDARD.encode(data)
            )
        });

        let record = AnalysisRecord::new(input.user_id, input.diagnosis, image_url);

        match self.analysis_repository.create_analysis(record).await {
            Ok(saved) => {
                info!(analysis_id = %saved.id, "Analysis saved to history");
                Some(saved)
            }
            Err(e) => {
                error!("Failed to save analysis: {}", e);
                None
            }
        }
    }

    #[instrument(skip_all, fields(user_id = %input.user_id))]
    async fn get_analysis_history(
        &self,
        input: GetAnalysisHistoryInput,
    ) -> Result<Vec<AnalysisRecord>, CoreError> {
        if input.user_id.trim().is_empty() {
            return Err(CoreError::Invalid);
        }

        let mut filter = input.filter;
        filter.limit = Some(filter.limit.unwrap_or(DEFAULT_HISTORY_LIMIT));

        self.analysis_repository
            .get_analyses_by_user(input.user_id, filter)
            .await
    }
}

fn log_notes(notes: &[NormalizationNote]) {
    for note in notes {
        match note {
            NormalizationNote::Unparseable { .. } | NormalizationNote::Clamped { .. } => {
                warn!(%note, "Upstream payload value corrected")
            }
            _ => debug!(%note, "Upstream payload normalized"),
        }
    }
}
