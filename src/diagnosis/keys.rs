//! Canonical disease keys and label normalization
//!
//! Disease segments of dataset labels come in many spellings
//! (`"Common_rust_"`, `"Esca_(Black_Measles)"`,
//! `"Spider_mites Two-spotted_spider_mite"`). They are reduced with
//! [`normalize_disease`] and matched against a fixed alias table.

use serde::{Deserialize, Serialize};

/// Every disease the knowledge base has text for, in definition order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiseaseKey {
    AppleScab,
    BlackRot,
    CedarAppleRust,
    PowderyMildew,
    CercosporaLeafSpot,
    CommonRust,
    NorthernLeafBlight,
    Esca,
    IsariopsisLeafSpot,
    CitrusGreening,
    BacterialSpot,
    EarlyBlight,
    LateBlight,
    LeafScorch,
    LeafMold,
    SeptoriaLeafSpot,
    SpiderMites,
    TargetSpot,
    YellowLeafCurlVirus,
    MosaicVirus,
}

impl DiseaseKey {
    pub const ALL: [DiseaseKey; 20] = [
        DiseaseKey::AppleScab,
        DiseaseKey::BlackRot,
        DiseaseKey::CedarAppleRust,
        DiseaseKey::PowderyMildew,
        DiseaseKey::CercosporaLeafSpot,
        DiseaseKey::CommonRust,
        DiseaseKey::NorthernLeafBlight,
        DiseaseKey::Esca,
        DiseaseKey::IsariopsisLeafSpot,
        DiseaseKey::CitrusGreening,
        DiseaseKey::BacterialSpot,
        DiseaseKey::EarlyBlight,
        DiseaseKey::LateBlight,
        DiseaseKey::LeafScorch,
        DiseaseKey::LeafMold,
        DiseaseKey::SeptoriaLeafSpot,
        DiseaseKey::SpiderMites,
        DiseaseKey::TargetSpot,
        DiseaseKey::YellowLeafCurlVirus,
        DiseaseKey::MosaicVirus,
    ];

    /// Normalized spellings that identify this disease
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            DiseaseKey::AppleScab => &["apple scab"],
            DiseaseKey::BlackRot => &["black rot"],
            DiseaseKey::CedarAppleRust => &["cedar apple rust"],
            DiseaseKey::PowderyMildew => &["powdery mildew"],
            DiseaseKey::CercosporaLeafSpot => &["cercospora leaf spot", "gray leaf spot"],
            DiseaseKey::CommonRust => &["common rust"],
            DiseaseKey::NorthernLeafBlight => &["northern leaf blight"],
            DiseaseKey::Esca => &["esca", "black measles"],
            DiseaseKey::IsariopsisLeafSpot => &["isariopsis leaf spot", "leaf blight"],
            DiseaseKey::CitrusGreening => &["haunglongbing", "huanglongbing", "citrus greening"],
            DiseaseKey::BacterialSpot => &["bacterial spot"],
            DiseaseKey::EarlyBlight => &["early blight"],
            DiseaseKey::LateBlight => &["late blight"],
            DiseaseKey::LeafScorch => &["leaf scorch"],
            DiseaseKey::LeafMold => &["leaf mold"],
            DiseaseKey::SeptoriaLeafSpot => &["septoria leaf spot"],
            DiseaseKey::SpiderMites => &["spider mites", "two spotted spider mite"],
            DiseaseKey::TargetSpot => &["target spot"],
            DiseaseKey::YellowLeafCurlVirus => &["yellow leaf curl virus"],
            DiseaseKey::MosaicVirus => &["mosaic virus"],
        }
    }

    /// Resolve a disease segment to its key
    ///
    /// The segment is normalized first. An alias equal to the whole text wins
    /// outright; otherwise the longest alias found as a whole-word run inside
    /// the text wins, with ties going to the earlier key. Returns `None` when
    /// nothing matches.
    pub fn resolve(disease: &str) -> Option<DiseaseKey> {
        let normalized = normalize_disease(disease);
        if normalized.is_empty() {
            return None;
        }

        if let Some(key) = Self::ALL
            .iter()
            .find(|key| key.aliases().contains(&normalized.as_str()))
        {
            return Some(*key);
        }

        let padded = format!(" {} ", normalized);
        let mut best: Option<(DiseaseKey, usize)> = None;
        for key in Self::ALL {
            for alias in key.aliases() {
                if padded.contains(&format!(" {} ", alias))
                    && best.map_or(true, |(_, len)| alias.len() > len)
                {
                    best = Some((key, alias.len()));
                }
            }
        }

        best.map(|(key, _)| key)
    }
}

impl std::fmt::Display for DiseaseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.aliases()[0])
    }
}

/// Reduce a disease segment to its canonical comparison form
///
/// Underscores and hyphens become spaces, parentheses are dropped, the text is
/// lowercased and whitespace runs collapse to a single space:
/// `"Esca_(Black_Measles)"` → `"esca black measles"`.
pub fn normalize_disease(disease: &str) -> String {
    disease
        .chars()
        .filter(|c| !matches!(c, '(' | ')'))
        .map(|c| if matches!(c, '_' | '-') { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{split_label, DEFAULT_LABELS};

    #[test]
    fn test_normalize_disease() {
        assert_eq!(normalize_disease("Apple_scab"), "apple scab");
        assert_eq!(normalize_disease("Esca_(Black_Measles)"), "esca black measles");
        assert_eq!(normalize_disease("Common_rust_"), "common rust");
        assert_eq!(
            normalize_disease("Spider_mites Two-spotted_spider_mite"),
            "spider mites two spotted spider mite"
        );
        assert_eq!(normalize_disease("  __ "), "");
    }

    #[test]
    fn test_exact_alias() {
        assert_eq!(DiseaseKey::resolve("Apple_scab"), Some(DiseaseKey::AppleScab));
        assert_eq!(DiseaseKey::resolve("Late_blight"), Some(DiseaseKey::LateBlight));
    }

    #[test]
    fn test_most_specific_alias_wins() {
        // "leaf blight" is also a run inside "northern leaf blight"
        assert_eq!(
            DiseaseKey::resolve("Northern_Leaf_Blight"),
            Some(DiseaseKey::NorthernLeafBlight)
        );
        assert_eq!(
            DiseaseKey::resolve("Leaf_blight_(Isariopsis_Leaf_Spot)"),
            Some(DiseaseKey::IsariopsisLeafSpot)
        );
        assert_eq!(
            DiseaseKey::resolve("Tomato_Yellow_Leaf_Curl_Virus"),
            Some(DiseaseKey::YellowLeafCurlVirus)
        );
    }

    #[test]
    fn test_whole_word_matching() {
        assert_eq!(DiseaseKey::resolve("Frescatura"), None);
        assert_eq!(DiseaseKey::resolve("Leaf_curl_virus"), None);
        assert_eq!(DiseaseKey::resolve("Leaf_blighted"), None);
    }

    #[test]
    fn test_scab_of_other_plants_is_not_apple_scab() {
        assert_eq!(DiseaseKey::resolve("Scab"), None);
        assert_eq!(DiseaseKey::resolve("Peach_scab"), None);
        assert_eq!(DiseaseKey::resolve("Apple_scab"), Some(DiseaseKey::AppleScab));
    }

    #[test]
    fn test_every_default_disease_resolves() {
        for label in DEFAULT_LABELS {
            let (_, disease) = split_label(label).unwrap();
            if disease.eq_ignore_ascii_case("healthy") {
                continue;
            }
            assert!(
                DiseaseKey::resolve(disease).is_some(),
                "no key for {}",
                label
            );
        }
    }

    #[test]
    fn test_display_uses_primary_alias() {
        assert_eq!(DiseaseKey::CitrusGreening.to_string(), "haunglongbing");
        assert_eq!(DiseaseKey::MosaicVirus.to_string(), "mosaic virus");
    }
}
