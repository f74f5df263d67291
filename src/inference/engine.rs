//! Inference engine
//!
//! Owns one loaded [`PlantClassifier`] and runs single-image forward passes.
//! The model sits behind a mutex so accidental concurrent calls serialize
//! instead of racing; `release` drops it and every later `classify` fails.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

use burn::config::Config;
use burn::module::Module;
use burn::record::CompactRecorder;
use burn::tensor::{backend::Backend, Tensor};
use tracing::{debug, info};

use crate::model::{config_path, weights_path, PlantClassifier, PlantClassifierConfig};
use crate::preprocess::InputTensor;
use crate::utils::error::{PlantDoctorError, Result};

/// A loaded classifier
pub struct InferenceEngine<B: Backend> {
    model: Mutex<Option<PlantClassifier<B>>>,
    config: PlantClassifierConfig,
    device: B::Device,
    apply_softmax: bool,
    source: Option<PathBuf>,
}

impl<B: Backend> InferenceEngine<B> {
    /// Load weights saved with burn's `CompactRecorder`
    ///
    /// `config` must describe the architecture the weights were trained with.
    pub fn load<P: AsRef<Path>>(
        path: P,
        config: PlantClassifierConfig,
        device: &B::Device,
    ) -> Result<Self> {
        let path = path.as_ref();
        let file = weights_path(path);
        if !file.is_file() {
            return Err(PlantDoctorError::ModelLoad(
                file,
                "file not found".to_string(),
            ));
        }

        let start = Instant::now();
        let model = PlantClassifier::<B>::new(&config, device)
            .load_file(&file, &CompactRecorder::new(), device)
            .map_err(|e| PlantDoctorError::ModelLoad(file.clone(), format!("{:?}", e)))?;

        let outputs = model.output_width();
        if outputs != config.num_classes {
            return Err(PlantDoctorError::ModelLoad(
                file,
                format!(
                    "weights produce {} outputs but the config expects {}",
                    outputs, config.num_classes
                ),
            ));
        }

        info!(
            "Loaded model from {:?} ({} classes) in {:.1} ms",
            file,
            config.num_classes,
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(Self {
            model: Mutex::new(Some(model)),
            config,
            device: device.clone(),
            apply_softmax: true,
            source: Some(file),
        })
    }

    /// Wrap an in-memory model
    pub fn from_model(
        model: PlantClassifier<B>,
        config: PlantClassifierConfig,
        device: &B::Device,
    ) -> Self {
        Self {
            model: Mutex::new(Some(model)),
            config,
            device: device.clone(),
            apply_softmax: true,
            source: None,
        }
    }

    /// Engine with freshly initialised (untrained) weights
    pub fn random(config: PlantClassifierConfig, device: &B::Device) -> Self {
        let model = PlantClassifier::new(&config, device);
        Self::from_model(model, config, device)
    }

    /// Whether to run softmax over the logits (on by default)
    pub fn with_softmax(mut self, apply_softmax: bool) -> Self {
        self.apply_softmax = apply_softmax;
        self
    }

    pub fn config(&self) -> &PlantClassifierConfig {
        &self.config
    }

    /// File the weights were loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// `[1, input_size, input_size, in_channels]`
    pub fn expected_shape(&self) -> [usize; 4] {
        [
            1,
            self.config.input_size,
            self.config.input_size,
            self.config.in_channels,
        ]
    }

    pub fn num_classes(&self) -> usize {
        self.config.num_classes
    }

    pub fn is_loaded(&self) -> bool {
        self.lock().map(|guard| guard.is_some()).unwrap_or(false)
    }

    /// Run one forward pass and return the per-class scores
    ///
    /// The result has exactly `num_classes` entries. Scores are softmax
    /// probabilities unless softmax was disabled; callers must not rely on
    /// them summing to one either way.
    pub fn classify(&self, input: &InputTensor) -> Result<Vec<f32>> {
        let guard = self.lock()?;
        let model = guard.as_ref().ok_or_else(|| {
            PlantDoctorError::Inference("model has been released".to_string())
        })?;

        let expected = self.expected_shape();
        if input.shape() != expected {
            return Err(PlantDoctorError::Inference(format!(
                "expected input shape {:?}, got {:?}",
                expected,
                input.shape()
            )));
        }

        let start = Instant::now();

        // NHWC -> NCHW
        let tensor = Tensor::<B, 1>::from_floats(input.data(), &self.device)
            .reshape(expected)
            .permute([0, 3, 1, 2]);

        let output = if self.apply_softmax {
            model.forward_softmax(tensor)
        } else {
            model.forward(tensor)
        };

        let scores: Vec<f32> = output
            .into_data()
            .to_vec()
            .map_err(|e| PlantDoctorError::Inference(format!("failed to read output: {:?}", e)))?;

        if scores.len() != self.config.num_classes {
            return Err(PlantDoctorError::Inference(format!(
                "model produced {} scores, expected {}",
                scores.len(),
                self.config.num_classes
            )));
        }

        debug!(
            "Forward pass took {:.2} ms",
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(scores)
    }

    /// Free the model; later calls to `classify` fail
    pub fn release(&self) {
        let mut guard = self
            .model
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if guard.take().is_some() {
            info!("Model released");
        }
    }

    /// Write the current weights and their architecture config
    ///
    /// The weights go to `path` with the `.mpk` extension, the config next to
    /// them as `.json`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        let path = path.as_ref();
        let model = self
            .lock()?
            .as_ref()
            .cloned()
            .ok_or_else(|| PlantDoctorError::Inference("model has been released".to_string()))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = weights_path(path);
        model
            .save_file(&file, &CompactRecorder::new())
            .map_err(|e| PlantDoctorError::Serialization(format!("failed to save model: {:?}", e)))?;
        self.config.save(config_path(path))?;

        info!("Model saved to {:?}", file);
        Ok(file)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<PlantClassifier<B>>>> {
        self.model
            .lock()
            .map_err(|_| PlantDoctorError::Inference("model lock poisoned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn_ndarray::NdArray;
    use tempfile::TempDir;

    type TestBackend = NdArray;

    fn small_config() -> PlantClassifierConfig {
        PlantClassifierConfig::new()
            .with_num_classes(4)
            .with_input_size(16)
            .with_base_filters(4)
            .with_hidden_size(8)
    }

    fn input(size: usize) -> InputTensor {
        InputTensor::new([1, size, size, 3], vec![0.5; size * size * 3]).unwrap()
    }

    #[test]
    fn test_classify_returns_one_score_per_class() {
        let device = Default::default();
        let engine = InferenceEngine::<TestBackend>::random(small_config(), &device);

        let scores = engine.classify(&input(16)).unwrap();
        assert_eq!(scores.len(), 4);
        assert!(scores.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn test_shape_mismatch() {
        let device = Default::default();
        let engine = InferenceEngine::<TestBackend>::random(small_config(), &device);

        let err = engine.classify(&input(224)).unwrap_err();
        assert!(matches!(err, PlantDoctorError::Inference(_)));
    }

    #[test]
    fn test_classify_after_release_fails() {
        let device = Default::default();
        let engine = InferenceEngine::<TestBackend>::random(small_config(), &device);
        assert!(engine.is_loaded());

        engine.release();
        assert!(!engine.is_loaded());

        let err = engine.classify(&input(16)).unwrap_err();
        assert!(err.to_string().contains("released"));

        // releasing twice is harmless
        engine.release();
    }

    #[test]
    fn test_load_missing_file() {
        let device = Default::default();
        let result = InferenceEngine::<TestBackend>::load("/no/such/model.mpk", small_config(), &device);
        assert!(matches!(result, Err(PlantDoctorError::ModelLoad(_, _))));
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.mpk");
        std::fs::write(&path, b"this is not a burn record").unwrap();

        let device = Default::default();
        let result = InferenceEngine::<TestBackend>::load(&path, small_config(), &device);
        assert!(matches!(result, Err(PlantDoctorError::ModelLoad(_, _))));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plant.mpk");
        let device = Default::default();

        let engine = InferenceEngine::<TestBackend>::random(small_config(), &device);
        let saved = engine.save(&path).unwrap();
        assert!(saved.exists());
        assert!(config_path(&path).exists());

        let reloaded = InferenceEngine::<TestBackend>::load(&path, small_config(), &device).unwrap();
        assert_eq!(reloaded.source(), Some(saved.as_path()));

        let scores = reloaded.classify(&input(16)).unwrap();
        assert_eq!(scores.len(), 4);
    }

    #[test]
    fn test_raw_logits() {
        let device = Default::default();
        let engine =
            InferenceEngine::<TestBackend>::random(small_config(), &device).with_softmax(false);
        assert_eq!(engine.classify(&input(16)).unwrap().len(), 4);
    }
}
