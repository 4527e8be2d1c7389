use crate::domain::diagnosis::ports::{AnalysisRepository, DiagnosticUpstream};

/// Service container wiring the diagnosis ports together.
///
/// `upstream` is `None` when no webhook endpoint is configured; every
/// diagnosis is then served by the fallback provider.
#[derive(Clone)]
pub struct Service<U, AR>
where
    U: DiagnosticUpstream,
    AR: AnalysisRepository,
{
    pub(crate) upstream: Option<U>,
    pub(crate) analysis_repository: AR,
}

impl<U, AR> Service<U, AR>
where
    U: DiagnosticUpstream,
    AR: AnalysisRepository,
{
    pub fn new(upstream: Option<U>, analysis_repository: AR) -> Self {
        Self {
            upstream,
            analysis_repository,
        }
    }
}
