use thiserror::Error;

/// Failures of the upstream diagnostic call. Every variant is answered with
/// the fallback diagnosis.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("Upstream request failed: {0}")]
    Transport(String),

    #[error("Upstream webhook not found or workflow inactive")]
    NotFound,

    #[error("Upstream returned {status}: {body}")]
    Status { status: u16, body: String },
}
