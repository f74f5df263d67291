//! Configuration for the diagnosis pipeline
//!
//! Loaded from TOML. Every field has a default, so an empty file (or no file
//! at all) yields a working configuration that uses the built-in labels.
//!
//! ```toml
//! model_path = "models/plant_classifier.mpk"
//! labels_path = "models/labels.txt"
//! top_k = 3
//!
//! [preprocess]
//! target_size = 224
//! channels = 3
//!
//! [model]
//! num_classes = 38
//! input_size = 224
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::model::PlantClassifierConfig;
use crate::preprocess::PreprocessConfig;
use crate::utils::error::{PlantDoctorError, Result};

/// Architecture parameters of the classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParams {
    pub num_classes: usize,
    pub input_size: usize,
    pub in_channels: usize,
    pub base_filters: usize,
    pub hidden_size: usize,
    pub dropout_rate: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self::from(&PlantClassifierConfig::new())
    }
}

impl From<&PlantClassifierConfig> for ModelParams {
    fn from(config: &PlantClassifierConfig) -> Self {
        Self {
            num_classes: config.num_classes,
            input_size: config.input_size,
            in_channels: config.in_channels,
            base_filters: config.base_filters,
            hidden_size: config.hidden_size,
            dropout_rate: config.dropout_rate,
        }
    }
}

impl ModelParams {
    pub fn to_model_config(&self) -> PlantClassifierConfig {
        PlantClassifierConfig::new()
            .with_num_classes(self.num_classes)
            .with_input_size(self.input_size)
            .with_in_channels(self.in_channels)
            .with_base_filters(self.base_filters)
            .with_hidden_size(self.hidden_size)
            .with_dropout_rate(self.dropout_rate)
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DoctorConfig {
    /// Weights file written by burn's `CompactRecorder`
    pub model_path: Option<PathBuf>,
    /// Label file; the built-in list is used when absent or unreadable
    pub labels_path: Option<PathBuf>,
    pub preprocess: PreprocessConfig,
    /// Used when no architecture JSON sits next to the weights
    pub model: ModelParams,
    /// Run softmax over the logits
    pub apply_softmax: bool,
    /// Number of alternatives kept in each result
    pub top_k: usize,
    pub log_level: String,
}

impl Default for DoctorConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            labels_path: None,
            preprocess: PreprocessConfig::default(),
            model: ModelParams::default(),
            apply_softmax: true,
            top_k: 3,
            log_level: "info".to_string(),
        }
    }
}

impl DoctorConfig {
    /// Read and validate a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let config: Self = load_toml_config(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the preprocessing output fits the model input
    pub fn validate(&self) -> Result<()> {
        if self.preprocess.target_size as usize != self.model.input_size {
            return Err(PlantDoctorError::Config(format!(
                "preprocess.target_size ({}) must equal model.input_size ({})",
                self.preprocess.target_size, self.model.input_size
            )));
        }
        if self.preprocess.channels != self.model.in_channels {
            return Err(PlantDoctorError::Config(format!(
                "preprocess.channels ({}) must equal model.in_channels ({})",
                self.preprocess.channels, self.model.in_channels
            )));
        }
        if self.model.num_classes == 0 {
            return Err(PlantDoctorError::Config(
                "model.num_classes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Read a TOML file into any deserializable type
pub fn load_toml_config<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let content = fs::read_to_string(path).map_err(|e| {
        PlantDoctorError::Config(format!("Failed to read config {}: {e}", path.display()))
    })?;

    toml::from_str(&content).map_err(|e| {
        PlantDoctorError::Config(format!("Failed to parse config {}: {e}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_valid() {
        let config = DoctorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.preprocess.target_size, 224);
        assert_eq!(config.model.num_classes, 38);
        assert!(config.apply_softmax);
    }

    #[test]
    fn test_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "model_path = \"models/plant.mpk\"").unwrap();
        writeln!(file, "top_k = 5").unwrap();
        writeln!(file, "[model]").unwrap();
        writeln!(file, "base_filters = 16").unwrap();

        let config = DoctorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.model_path, Some(PathBuf::from("models/plant.mpk")));
        assert_eq!(config.top_k, 5);
        assert_eq!(config.model.base_filters, 16);
        assert_eq!(config.model.num_classes, 38);
        assert!(config.labels_path.is_none());
    }

    #[test]
    fn test_mismatched_sizes_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[preprocess]").unwrap();
        writeln!(file, "target_size = 128").unwrap();

        let err = DoctorConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, PlantDoctorError::Config(_)));
    }

    #[test]
    fn test_unparseable_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "top_k = = 3").unwrap();
        assert!(matches!(
            DoctorConfig::from_file(file.path()),
            Err(PlantDoctorError::Config(_))
        ));
    }

    #[test]
    fn test_model_params_round_trip() {
        let params = ModelParams {
            num_classes: 10,
            ..Default::default()
        };
        let config = params.to_model_config();
        assert_eq!(config.num_classes, 10);
        assert_eq!(ModelParams::from(&config), params);
    }
}
