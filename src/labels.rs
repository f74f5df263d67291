//! Label catalog
//!
//! Class names index-aligned with the classifier outputs. Labels follow the
//! PlantVillage `"Plant___Disease"` convention; healthy classes end in
//! `"___healthy"`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::utils::error::{PlantDoctorError, Result};

/// Separator between the plant and disease parts of a label
pub const LABEL_SEPARATOR: &str = "___";

/// Built-in PlantVillage class names, in model output order.
pub const DEFAULT_LABELS: [&str; 38] = [
    "Apple___Apple_scab",                                 // 0
    "Apple___Black_rot",                                  // 1
    "Apple___Cedar_apple_rust",                           // 2
    "Apple___healthy",                                    // 3
    "Blueberry___healthy",                                // 4
    "Cherry_(including_sour)___Powdery_mildew",           // 5
    "Cherry_(including_sour)___healthy",                  // 6
    "Corn_(maize)___Cercospora_leaf_spot Gray_leaf_spot", // 7
    "Corn_(maize)___Common_rust_",                        // 8
    "Corn_(maize)___Northern_Leaf_Blight",                // 9
    "Corn_(maize)___healthy",                             // 10
    "Grape___Black_rot",                                  // 11
    "Grape___Esca_(Black_Measles)",                       // 12
    "Grape___Leaf_blight_(Isariopsis_Leaf_Spot)",         // 13
    "Grape___healthy",                                    // 14
    "Orange___Haunglongbing_(Citrus_greening)",           // 15
    "Peach___Bacterial_spot",                             // 16
    "Peach___healthy",                                    // 17
    "Pepper,_bell___Bacterial_spot",                      // 18
    "Pepper,_bell___healthy",                             // 19
    "Potato___Early_blight",                              // 20
    "Potato___Late_blight",                               // 21
    "Potato___healthy",                                   // 22
    "Raspberry___healthy",                                // 23
    "Soybean___healthy",                                  // 24
    "Squash___Powdery_mildew",                            // 25
    "Strawberry___Leaf_scorch",                           // 26
    "Strawberry___healthy",                               // 27
    "Tomato___Bacterial_spot",                            // 28
    "Tomato___Early_blight",                              // 29
    "Tomato___Late_blight",                               // 30
    "Tomato___Leaf_Mold",                                 // 31
    "Tomato___Septoria_leaf_spot",                        // 32
    "Tomato___Spider_mites Two-spotted_spider_mite",      // 33
    "Tomato___Target_Spot",                               // 34
    "Tomato___Tomato_Yellow_Leaf_Curl_Virus",             // 35
    "Tomato___Tomato_mosaic_virus",                       // 36
    "Tomato___healthy",                                   // 37
];

/// Where a label set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelSource {
    /// Read from a label file
    File,
    /// Built-in [`DEFAULT_LABELS`]
    Fallback,
}

/// Ordered, immutable list of class names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    labels: Vec<String>,
    source: LabelSource,
}

impl LabelSet {
    /// The built-in 38-class PlantVillage list
    pub fn fallback() -> Self {
        Self {
            labels: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
            source: LabelSource::Fallback,
        }
    }

    /// Parse newline-delimited class names; surrounding whitespace is trimmed
    /// and blank lines are skipped.
    pub fn parse(text: &str) -> Self {
        let labels = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        Self {
            labels,
            source: LabelSource::File,
        }
    }

    /// Read a label file, surfacing any failure
    ///
    /// A file that contains no labels is treated as unreadable.
    pub fn try_load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| PlantDoctorError::LabelLoad(path.to_path_buf(), e.to_string()))?;

        let set = Self::parse(&text);
        if set.is_empty() {
            return Err(PlantDoctorError::LabelLoad(
                path.to_path_buf(),
                "file contains no labels".to_string(),
            ));
        }

        debug!("Parsed {} labels from {:?}", set.len(), path);
        Ok(set)
    }

    /// Read a label file, substituting the built-in list on any failure
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        match Self::try_load(path) {
            Ok(set) => {
                info!("Loaded {} labels from file", set.len());
                set
            }
            Err(e) => {
                warn!("{}; using {} built-in labels", e, DEFAULT_LABELS.len());
                Self::fallback()
            }
        }
    }

    /// Load from an optional path; `None` selects the built-in list
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Self {
        match path {
            Some(path) => Self::load(path),
            None => Self::fallback(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Class name at a model output index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Output index of a class name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.labels.iter().position(|label| label == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn source(&self) -> LabelSource {
        self.source
    }

    pub fn is_fallback(&self) -> bool {
        self.source == LabelSource::Fallback
    }
}

impl Default for LabelSet {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Split a label into `(plant, disease)` on [`LABEL_SEPARATOR`]
///
/// Returns `None` when the separator is absent.
pub fn split_label(label: &str) -> Option<(&str, &str)> {
    label.split_once(LABEL_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_fallback_has_38_labels() {
        let set = LabelSet::fallback();
        assert_eq!(set.len(), 38);
        assert_eq!(set.get(0), Some("Apple___Apple_scab"));
        assert_eq!(set.get(37), Some("Tomato___healthy"));
        assert_eq!(set.get(38), None);
        assert!(set.is_fallback());
    }

    #[test]
    fn test_fallback_is_stable() {
        let first = LabelSet::fallback();
        let second = LabelSet::fallback();
        assert_eq!(first, second);
        assert!(first.iter().eq(second.iter()));
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let set = LabelSet::parse("Apple___healthy\n\n  \nTomato___Late_blight  \r\n");
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1), Some("Tomato___Late_blight"));
        assert_eq!(set.position("Apple___healthy"), Some(0));
        assert_eq!(set.source(), LabelSource::File);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Fig___Leaf_curl_virus").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Fig___healthy").unwrap();

        let set = LabelSet::load(file.path());
        assert_eq!(set.len(), 2);
        assert!(!set.is_fallback());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let set = LabelSet::load("/definitely/not/here/labels.txt");
        assert!(set.is_fallback());
        assert_eq!(set.len(), DEFAULT_LABELS.len());
    }

    #[test]
    fn test_empty_file_falls_back() {
        let file = NamedTempFile::new().unwrap();
        assert!(matches!(
            LabelSet::try_load(file.path()),
            Err(PlantDoctorError::LabelLoad(_, _))
        ));
        assert!(LabelSet::load(file.path()).is_fallback());
    }

    #[test]
    fn test_non_utf8_file_falls_back() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();
        file.flush().unwrap();

        assert!(matches!(
            LabelSet::try_load(file.path()),
            Err(PlantDoctorError::LabelLoad(_, _))
        ));
        let set = LabelSet::load(file.path());
        assert!(set.is_fallback());
        assert_eq!(set.get(0), Some(DEFAULT_LABELS[0]));
    }

    #[test]
    fn test_load_or_default() {
        assert!(LabelSet::load_or_default(None::<&str>).is_fallback());
    }

    #[test]
    fn test_split_label() {
        assert_eq!(split_label("Apple___Apple_scab"), Some(("Apple", "Apple_scab")));
        assert_eq!(
            split_label("Corn_(maize)___Common_rust_"),
            Some(("Corn_(maize)", "Common_rust_"))
        );
        assert_eq!(split_label("Background_without_leaves"), None);
    }
}
