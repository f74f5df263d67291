//! Confidence advisory tiers

use serde::{Deserialize, Serialize};

/// Coarse reading of a classification confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConfidenceTier {
    Low,
    LowMedium,
    Medium,
    MediumHigh,
    High,
    VeryHigh,
}

impl ConfidenceTier {
    /// Bucket a confidence; lower bounds are inclusive, NaN reads as `Low`
    pub fn from_confidence(confidence: f32) -> Self {
        if confidence >= 0.9 {
            ConfidenceTier::VeryHigh
        } else if confidence >= 0.8 {
            ConfidenceTier::High
        } else if confidence >= 0.7 {
            ConfidenceTier::MediumHigh
        } else if confidence >= 0.6 {
            ConfidenceTier::Medium
        } else if confidence >= 0.5 {
            ConfidenceTier::LowMedium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::VeryHigh => "very high",
            ConfidenceTier::High => "high",
            ConfidenceTier::MediumHigh => "medium-high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::LowMedium => "low-medium",
            ConfidenceTier::Low => "low — expert review recommended",
        }
    }

    /// Turkish wording shown to growers
    pub fn localized(&self) -> &'static str {
        match self {
            ConfidenceTier::VeryHigh => "Çok yüksek güven",
            ConfidenceTier::High => "Yüksek güven",
            ConfidenceTier::MediumHigh => "Orta-yüksek güven",
            ConfidenceTier::Medium => "Orta güven",
            ConfidenceTier::LowMedium => "Düşük-orta güven",
            ConfidenceTier::Low => "Düşük güven — uzman görüşü önerilir",
        }
    }

    /// Whether the result should be double-checked by a person
    pub fn needs_review(&self) -> bool {
        *self == ConfidenceTier::Low
    }
}

impl std::fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Advisory text for a confidence value
pub fn describe_confidence(confidence: f32) -> &'static str {
    ConfidenceTier::from_confidence(confidence).as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_confidence() {
        assert_eq!(describe_confidence(0.95), "very high");
        assert_eq!(describe_confidence(0.85), "high");
        assert_eq!(describe_confidence(0.77), "medium-high");
        assert_eq!(describe_confidence(0.65), "medium");
        assert_eq!(describe_confidence(0.55), "low-medium");
        assert_eq!(describe_confidence(0.3), "low — expert review recommended");
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(ConfidenceTier::from_confidence(0.9), ConfidenceTier::VeryHigh);
        assert_eq!(ConfidenceTier::from_confidence(0.5), ConfidenceTier::LowMedium);
        assert_eq!(ConfidenceTier::from_confidence(0.4999), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_confidence(1.7), ConfidenceTier::VeryHigh);
    }

    #[test]
    fn test_nan_is_low() {
        let tier = ConfidenceTier::from_confidence(f32::NAN);
        assert_eq!(tier, ConfidenceTier::Low);
        assert!(tier.needs_review());
    }

    #[test]
    fn test_tiers_are_ordered() {
        assert!(ConfidenceTier::VeryHigh > ConfidenceTier::High);
        assert!(ConfidenceTier::LowMedium > ConfidenceTier::Low);
    }

    #[test]
    fn test_localized() {
        assert_eq!(ConfidenceTier::Medium.localized(), "Orta güven");
        assert_eq!(ConfidenceTier::High.to_string(), "high");
    }
}
