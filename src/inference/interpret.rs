//! Result interpretation
//!
//! Turns a score vector into a [`ClassificationResult`]. Interpretation never
//! fails: unknown labels and diseases degrade to a generic entry.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::confidence::ConfidenceTier;
use crate::diagnosis::{DiagnosticEntry, DiagnosticIndex, DiseaseKey};
use crate::labels::{split_label, LabelSet};
use crate::utils::humanize;

/// Plant name used when a label has no plant part
pub const UNKNOWN_PLANT: &str = "Unknown Plant";

/// Disease name used when a label has no disease part
pub const UNKNOWN_CONDITION: &str = "Unknown Condition";

/// Case-insensitive marker of healthy classes
pub const HEALTHY_MARKER: &str = "healthy";

/// Number of alternatives kept by [`interpret`]
pub const DEFAULT_TOP_K: usize = 3;

/// One entry of the ranked alternatives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassPrediction {
    pub class_index: usize,
    pub label: String,
    pub probability: f32,
}

/// Outcome of one classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Index of the winning class
    pub class_index: usize,
    /// Raw label of the winning class
    pub label: String,
    /// Display name of the plant
    pub plant: String,
    /// Display name of the condition as labelled
    pub disease: String,
    /// Highest score of the distribution
    pub confidence: f32,
    /// Text to show the grower
    pub diagnosis: DiagnosticEntry,
    pub is_healthy: bool,
    /// Knowledge base key, when the disease is known
    pub disease_key: Option<DiseaseKey>,
    /// Best classes, highest first
    pub top_k: Vec<ClassPrediction>,
}

impl ClassificationResult {
    pub fn confidence_tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_confidence(self.confidence)
    }
}

/// Index and value of the highest score, first occurrence on ties
///
/// NaN scores are skipped. Returns `None` when nothing comparable is left.
pub fn arg_max(scores: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &p) in scores.iter().enumerate() {
        if p.is_nan() {
            continue;
        }
        match best {
            Some((_, value)) if p <= value => {}
            _ => best = Some((i, p)),
        }
    }
    best
}

/// The `k` best classes, highest score first, lower index first on ties
pub fn top_k(scores: &[f32], labels: &LabelSet, k: usize) -> Vec<ClassPrediction> {
    let mut indexed: Vec<(usize, f32)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, p)| !p.is_nan())
        .collect();
    indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    indexed
        .into_iter()
        .take(k)
        .map(|(class_index, probability)| ClassPrediction {
            class_index,
            label: label_at(labels, class_index),
            probability,
        })
        .collect()
}

/// Interpret scores keeping [`DEFAULT_TOP_K`] alternatives
pub fn interpret(
    probabilities: &[f32],
    labels: &LabelSet,
    index: &DiagnosticIndex,
) -> ClassificationResult {
    interpret_with_top_k(probabilities, labels, index, DEFAULT_TOP_K)
}

/// Interpret scores keeping `k` alternatives
pub fn interpret_with_top_k(
    probabilities: &[f32],
    labels: &LabelSet,
    index: &DiagnosticIndex,
    k: usize,
) -> ClassificationResult {
    let Some((class_index, confidence)) = arg_max(probabilities) else {
        return ClassificationResult {
            class_index: 0,
            label: String::new(),
            plant: UNKNOWN_PLANT.to_string(),
            disease: UNKNOWN_CONDITION.to_string(),
            confidence: 0.0,
            diagnosis: DiagnosticEntry::unknown(UNKNOWN_PLANT, UNKNOWN_CONDITION),
            is_healthy: false,
            disease_key: None,
            top_k: Vec::new(),
        };
    };

    let label = label_at(labels, class_index);
    let mut result = diagnose_label(&label, index);
    result.class_index = class_index;
    result.confidence = confidence;
    result.top_k = top_k(probabilities, labels, k);
    result
}

/// Diagnose a single label with confidence 1.0
///
/// Splits `"Plant___Disease"`, then picks the healthy entry, the knowledge
/// base entry, or the generic entry, in that order.
pub fn diagnose_label(label: &str, index: &DiagnosticIndex) -> ClassificationResult {
    let (plant, disease) = split_label(label).unwrap_or((UNKNOWN_PLANT, UNKNOWN_CONDITION));

    let (diagnosis, is_healthy, disease_key) = if is_healthy_segment(disease) {
        (DiagnosticEntry::healthy(plant), true, None)
    } else {
        match index.resolve(disease) {
            Some((key, entry)) => (entry.for_plant(plant), false, Some(key)),
            None => (DiagnosticEntry::unknown(plant, disease), false, None),
        }
    };

    ClassificationResult {
        class_index: 0,
        label: label.to_string(),
        plant: humanize(plant),
        disease: humanize(disease),
        confidence: 1.0,
        diagnosis,
        is_healthy,
        disease_key,
        top_k: Vec::new(),
    }
}

fn is_healthy_segment(disease: &str) -> bool {
    disease.to_lowercase().contains(HEALTHY_MARKER)
}

fn label_at(labels: &LabelSet, class_index: usize) -> String {
    labels
        .get(class_index)
        .map(String::from)
        .unwrap_or_else(|| format!("Unknown_{}", class_index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::GENERIC_REMEDY;
    use crate::labels::DEFAULT_LABELS;

    fn one_hot(len: usize, index: usize, value: f32) -> Vec<f32> {
        let mut probs = vec![(1.0 - value) / (len - 1) as f32; len];
        probs[index] = value;
        probs
    }

    #[test]
    fn test_arg_max_first_on_ties() {
        assert_eq!(arg_max(&[0.1, 0.4, 0.4, 0.1]), Some((1, 0.4)));
        assert_eq!(arg_max(&[0.7]), Some((0, 0.7)));
        assert_eq!(arg_max(&[]), None);
        assert_eq!(arg_max(&[f32::NAN, 0.2, f32::NAN]), Some((1, 0.2)));
        assert_eq!(arg_max(&[-3.0, -1.0, -2.0]), Some((1, -1.0)));
    }

    #[test]
    fn test_confidence_is_maximum() {
        let labels = LabelSet::parse(&DEFAULT_LABELS[..4].join("\n"));
        let index = DiagnosticIndex::builtin();
        let scores = [0.05, 0.3, 0.2, 0.45];

        let result = interpret(&scores, &labels, &index);
        assert_eq!(result.class_index, 3);
        assert_eq!(result.confidence, 0.45);
        assert_eq!(result.top_k.len(), 3);
        assert_eq!(result.top_k[0].class_index, 3);
        assert_eq!(result.top_k[1].class_index, 1);
    }

    #[test]
    fn test_apple_scab_scenario() {
        let labels = LabelSet::fallback();
        let index = DiagnosticIndex::builtin();
        let probs = one_hot(labels.len(), 0, 0.92);

        let result = interpret(&probs, &labels, &index);
        assert_eq!(result.confidence, 0.92);
        assert!(!result.is_healthy);
        assert_eq!(result.disease_key, Some(DiseaseKey::AppleScab));
        assert!(result.diagnosis.display_name.contains("Apple"));
        assert!(result.diagnosis.display_name.contains("Karaleke"));
        assert_eq!(result.confidence_tier(), ConfidenceTier::VeryHigh);
    }

    #[test]
    fn test_tomato_healthy_scenario() {
        let labels = LabelSet::fallback();
        let index = DiagnosticIndex::builtin();
        let tomato = labels.position("Tomato___healthy").unwrap();
        let probs = one_hot(labels.len(), tomato, 0.77);

        let result = interpret(&probs, &labels, &index);
        assert!(result.is_healthy);
        assert_eq!(result.confidence, 0.77);
        assert!(result.diagnosis.display_name.contains("Tomato"));
        assert!(result.diagnosis.display_name.contains("Sağlıklı"));
        assert_eq!(result.confidence_tier().as_str(), "medium-high");
        assert!(result.disease_key.is_none());
    }

    #[test]
    fn test_every_healthy_label_is_healthy() {
        let index = DiagnosticIndex::builtin();
        for label in LabelSet::fallback().iter() {
            let result = diagnose_label(label, &index);
            assert_eq!(result.is_healthy, label.ends_with("healthy"), "{}", label);
            if result.is_healthy {
                let (plant, _) = split_label(label).unwrap();
                assert!(result.diagnosis.display_name.contains(&humanize(plant)));
            }
        }
    }

    #[test]
    fn test_healthy_marker_is_case_insensitive() {
        let index = DiagnosticIndex::builtin();
        assert!(diagnose_label("Fig___HEALTHY_leaf", &index).is_healthy);
    }

    #[test]
    fn test_unrecognized_disease_scenario() {
        let labels = LabelSet::parse("Fig___Leaf_curl_virus\nFig___healthy");
        let index = DiagnosticIndex::builtin();

        let result = interpret(&[0.8, 0.2], &labels, &index);
        assert!(!result.is_healthy);
        assert!(result.disease_key.is_none());
        assert_eq!(result.plant, "Fig");
        assert_eq!(result.disease, "Leaf curl virus");
        assert!(result.diagnosis.display_name.contains("Fig"));
        assert!(result.diagnosis.display_name.contains("Leaf curl virus"));
        assert_eq!(result.diagnosis.remedy, GENERIC_REMEDY);
    }

    #[test]
    fn test_peach_scab_gets_generic_entry() {
        let result = diagnose_label("Peach___Scab", &DiagnosticIndex::builtin());
        assert!(result.disease_key.is_none());
        assert_eq!(result.diagnosis.display_name, "Peach - Scab");
        assert!(!result.diagnosis.display_name.contains("Elma"));
        assert_eq!(result.diagnosis.remedy, GENERIC_REMEDY);
    }

    #[test]
    fn test_label_without_separator() {
        let index = DiagnosticIndex::builtin();
        let result = diagnose_label("Background_without_leaves", &index);
        assert_eq!(result.plant, UNKNOWN_PLANT);
        assert_eq!(result.disease, UNKNOWN_CONDITION);
        assert!(!result.is_healthy);
        assert_eq!(result.diagnosis.remedy, GENERIC_REMEDY);
    }

    #[test]
    fn test_index_beyond_labels() {
        let labels = LabelSet::parse("Apple___healthy");
        let index = DiagnosticIndex::builtin();

        let result = interpret(&[0.1, 0.9], &labels, &index);
        assert_eq!(result.class_index, 1);
        assert_eq!(result.label, "Unknown_1");
        assert_eq!(result.plant, UNKNOWN_PLANT);
    }

    #[test]
    fn test_empty_distribution() {
        let result = interpret(&[], &LabelSet::fallback(), &DiagnosticIndex::builtin());
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.plant, UNKNOWN_PLANT);
        assert!(result.top_k.is_empty());
    }

    #[test]
    fn test_unnormalized_scores() {
        let labels = LabelSet::fallback();
        let mut scores = vec![-4.0; labels.len()];
        scores[21] = 7.5;

        let result = interpret(&scores, &labels, &DiagnosticIndex::builtin());
        assert_eq!(result.label, "Potato___Late_blight");
        assert_eq!(result.confidence, 7.5);
        assert_eq!(result.disease_key, Some(DiseaseKey::LateBlight));
    }
}
