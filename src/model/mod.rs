//! Model module for the classifier architecture
//!
//! The pipeline treats the weights as an opaque artifact, but the
//! architecture has to be known to rebuild the module before the record is
//! loaded into it. An architecture config can sit next to the weights as JSON.

pub mod cnn;

use std::path::{Path, PathBuf};

use burn::config::Config;
use tracing::debug;

pub use cnn::{PlantClassifier, PlantClassifierConfig};

use crate::utils::error::{PlantDoctorError, Result};

/// Extension burn's `CompactRecorder` gives weight files
pub const MODEL_EXTENSION: &str = "mpk";

/// Extension of the architecture config stored next to the weights
pub const CONFIG_EXTENSION: &str = "json";

/// Path of the weights file burn will actually read for `path`
pub fn weights_path(path: &Path) -> PathBuf {
    path.with_extension(MODEL_EXTENSION)
}

/// Path of the architecture config that accompanies `path`
pub fn config_path(path: &Path) -> PathBuf {
    path.with_extension(CONFIG_EXTENSION)
}

/// Architecture config stored next to the weights, if there is one
pub fn load_sidecar_config(model_path: &Path) -> Result<Option<PlantClassifierConfig>> {
    let path = config_path(model_path);
    if !path.exists() {
        return Ok(None);
    }

    debug!("Reading model architecture from {:?}", path);
    PlantClassifierConfig::load(&path)
        .map(Some)
        .map_err(|e| PlantDoctorError::ModelLoad(path, format!("invalid model config: {:?}", e)))
}
