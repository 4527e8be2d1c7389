use serde_json::Value;

use crate::domain::diagnosis::{
    aliases::{CanonicalField, Resolved, candidates},
    coercion::{NumericKind, coerce},
    entities::{CanonicalDiagnosis, Normalization, NormalizationNote, UNKNOWN_DISEASE},
    segmentation::{Segmentation, segment_advice, segment_recommendations},
};

pub const CONFIDENCE_MIN: f64 = 0.0;
pub const CONFIDENCE_MAX: f64 = 1.0;

/// Maps an upstream payload of any shape onto a [`CanonicalDiagnosis`].
///
/// Never fails: anything that cannot be resolved takes the field default, and
/// every such decision is reported in [`Normalization::notes`].
pub fn normalize(payload: &Value) -> Normalization {
    let mut assembly = Assembly::new(payload);

    let (disease_name, treatment_recommendations, preventive_advice) =
        match canonical_shape(payload) {
            Some(shape) => {
                assembly.notes.push(NormalizationNote::FastPath);
                shape
            }
            None => (
                assembly.disease_name(),
                assembly.list(
                    CanonicalField::TreatmentRecommendations,
                    segment_recommendations,
                ),
                assembly.list(CanonicalField::PreventiveAdvice, segment_advice),
            ),
        };

    let diagnosis = CanonicalDiagnosis {
        disease_name,
        confidence_score: assembly.confidence(),
        treatment_recommendations,
        preventive_advice,
        severity_percentage: assembly.percentage(CanonicalField::SeverityPercentage),
        yield_loss_risk: assembly.percentage(CanonicalField::YieldLossRisk),
    };

    Normalization {
        diagnosis,
        notes: assembly.notes,
    }
}

/// Name and lists of a payload that already uses the canonical keys and types.
fn canonical_shape(payload: &Value) -> Option<(String, Vec<String>, Vec<String>)> {
    let object = payload.as_object()?;

    let disease_name = object
        .get(CanonicalField::DiseaseName.as_str())?
        .as_str()
        .filter(|name| !name.trim().is_empty())?;
    let treatment = object
        .get(CanonicalField::TreatmentRecommendations.as_str())?
        .as_array()?;
    let preventive = object
        .get(CanonicalField::PreventiveAdvice.as_str())?
        .as_array()?;

    Some((
        disease_name.to_string(),
        list_items(treatment),
        list_items(preventive),
    ))
}

fn list_items(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .filter_map(Value::as_str)
        .filter(|item| !item.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Usable list input found under one alias.
enum ListSource<'a> {
    Items(&'a [Value]),
    Prose(&'a str),
}

struct Assembly<'a> {
    payload: &'a Value,
    notes: Vec<NormalizationNote>,
}

impl<'a> Assembly<'a> {
    fn new(payload: &'a Value) -> Self {
        Self {
            payload,
            notes: Vec::new(),
        }
    }

    /// Walks the aliases of `field` in precedence order and returns the first
    /// value `accept` can use. Rejected values are reported as unparseable;
    /// the field is reported as defaulted when nothing was usable.
    fn first_usable<T>(
        &mut self,
        field: CanonicalField,
        mut accept: impl FnMut(&'a Value) -> Option<T>,
    ) -> Option<T> {
        for resolved in candidates(self.payload, field) {
            match accept(resolved.value) {
                Some(usable) => return Some(usable),
                None => self.unparseable(field, resolved),
            }
        }

        self.notes.push(NormalizationNote::Defaulted { field });
        None
    }

    fn unparseable(&mut self, field: CanonicalField, resolved: Resolved<'_>) {
        self.notes.push(NormalizationNote::Unparseable {
            field,
            alias: resolved.alias,
            raw: resolved.value.to_string(),
        });
    }

    fn disease_name(&mut self) -> String {
        self.first_usable(CanonicalField::DiseaseName, |value| {
            value.as_str().map(|name| name.trim().to_string())
        })
        .unwrap_or_else(|| UNKNOWN_DISEASE.to_string())
    }

    fn list(&mut self, field: CanonicalField, segment: fn(&str) -> Segmentation) -> Vec<String> {
        let source = self.first_usable(field, |value| match value {
            Value::Array(values) => Some(ListSource::Items(values.as_slice())),
            Value::String(text) => Some(ListSource::Prose(text.as_str())),
            _ => None,
        });

        match source {
            Some(ListSource::Items(values)) => list_items(values),
            Some(ListSource::Prose(text)) => {
                let segmentation = segment(text);
                self.notes.push(NormalizationNote::Segmented {
                    field,
                    strategy: segmentation.strategy,
                    items: segmentation.items.len(),
                });
                segmentation.items
            }
            None => Vec::new(),
        }
    }

    fn confidence(&mut self) -> f64 {
        let field = CanonicalField::ConfidenceScore;

        let Some(coerced) =
            self.first_usable(field, |value| coerce(value, NumericKind::Confidence))
        else {
            return CONFIDENCE_MIN;
        };

        let value = coerced.value.clamp(CONFIDENCE_MIN, CONFIDENCE_MAX);
        if value != coerced.value {
            self.notes.push(NormalizationNote::Clamped {
                field,
                from: coerced.value,
                to: value,
            });
        }
        value
    }

    fn percentage(&mut self, field: CanonicalField) -> Option<f64> {
        let coerced = self.first_usable(field, |value| coerce(value, NumericKind::Percentage))?;

        if let Some(from) = coerced.clamped_from {
            self.notes.push(NormalizationNote::Clamped {
                field,
                from,
                to: coerced.value,
            });
        }
        Some(coerced.value)
    }
}
