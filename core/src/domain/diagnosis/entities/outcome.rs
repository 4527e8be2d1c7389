use std::fmt;

use crate::domain::diagnosis::{
    aliases::CanonicalField, entities::CanonicalDiagnosis, segmentation::SegmentationStrategy,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// No upstream webhook is configured.
    ConfigurationAbsent,
    /// Transport failure or non-success status from the upstream.
    UpstreamUnreachable,
    /// The upstream answered 404: webhook missing or workflow inactive.
    UpstreamInactive,
}

impl FallbackReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackReason::ConfigurationAbsent => "configuration_absent",
            FallbackReason::UpstreamUnreachable => "upstream_unreachable",
            FallbackReason::UpstreamInactive => "upstream_inactive",
        }
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosisSource {
    Upstream,
    Fallback(FallbackReason),
}

impl DiagnosisSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosisSource::Upstream => "upstream",
            DiagnosisSource::Fallback(_) => "fallback",
        }
    }
}

/// What the normalizer did to reach the canonical record.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizationNote {
    /// The payload already had the canonical shape.
    FastPath,
    /// No alias resolved to a usable value; the field default was applied.
    Defaulted { field: CanonicalField },
    /// A value was found under `alias` but could not be interpreted.
    Unparseable {
        field: CanonicalField,
        alias: &'static str,
        raw: String,
    },
    Clamped {
        field: CanonicalField,
        from: f64,
        to: f64,
    },
    /// A prose value was split into list items.
    Segmented {
        field: CanonicalField,
        strategy: SegmentationStrategy,
        items: usize,
    },
}

impl fmt::Display for NormalizationNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizationNote::FastPath => write!(f, "payload already canonical"),
            NormalizationNote::Defaulted { field } => write!(f, "{field} defaulted"),
            NormalizationNote::Unparseable { field, alias, raw } => {
                write!(f, "{field} unparseable from '{alias}': {raw}")
            }
            NormalizationNote::Clamped { field, from, to } => {
                write!(f, "{field} clamped from {from} to {to}")
            }
            NormalizationNote::Segmented {
                field,
                strategy,
                items,
            } => write!(f, "{field} segmented into {items} item(s) by {strategy}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Normalization {
    pub diagnosis: CanonicalDiagnosis,
    pub notes: Vec<NormalizationNote>,
}

/// Result of one diagnosis request, handed to the calling boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisOutcome {
    pub diagnosis: CanonicalDiagnosis,
    pub source: DiagnosisSource,
    pub notes: Vec<NormalizationNote>,
}

impl DiagnosisOutcome {
    pub fn fallback(diagnosis: CanonicalDiagnosis, reason: FallbackReason) -> Self {
        Self {
            diagnosis,
            source: DiagnosisSource::Fallback(reason),
            notes: Vec::new(),
        }
    }

    pub fn upstream(normalization: Normalization) -> Self {
        Self {
            diagnosis: normalization.diagnosis,
            source: DiagnosisSource::Upstream,
            notes: normalization.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_source_keeps_reason() {
        let outcome = DiagnosisOutcome::fallback(
            CanonicalDiagnosis::default(),
            FallbackReason::UpstreamInactive,
        );

        assert_eq!(outcome.source.as_str(), "fallback");
        assert_eq!(
            outcome.source,
            DiagnosisSource::Fallback(FallbackReason::UpstreamInactive)
        );
        assert_eq!(FallbackReason::UpstreamInactive.to_string(), "upstream_inactive");
    }
}
