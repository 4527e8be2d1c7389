use crate::domain::diagnosis::entities::CanonicalDiagnosis;

/// Static diagnosis served when the upstream cannot be used.
pub fn fallback_diagnosis() -> CanonicalDiagnosis {
    CanonicalDiagnosis {
        disease_name: "Leaf Spot Disease".to_string(),
        confidence_score: 0.87,
        treatment_recommendations: vec![
            "Remove and destroy infected leaves immediately".to_string(),
            "Apply a fungicide containing copper or chlorothalonil".to_string(),
            "Improve air circulation around the plant".to_string(),
            "Water at the base of the plant to keep foliage dry".to_string(),
        ],
        preventive_advice: vec![
            "Leave adequate spacing between plants".to_string(),
            "Water early in the morning so leaves can dry".to_string(),
            "Use disease-resistant plant varieties when possible".to_string(),
            "Keep good garden hygiene by cleaning your tools".to_string(),
        ],
        severity_percentage: Some(65.0),
        yield_loss_risk: Some(45.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_fully_populated() {
        let diagnosis = fallback_diagnosis();

        assert!(!diagnosis.disease_name.is_empty());
        assert!((0.0..=1.0).contains(&diagnosis.confidence_score));
        assert!(!diagnosis.treatment_recommendations.is_empty());
        assert!(!diagnosis.preventive_advice.is_empty());
        assert_eq!(diagnosis.severity_percentage, Some(65.0));
        assert_eq!(diagnosis.yield_loss_risk, Some(45.0));
    }

    #[test]
    fn test_fallback_is_stable() {
        assert_eq!(fallback_diagnosis(), fallback_diagnosis());
    }
}
