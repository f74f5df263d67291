//! Diagnosis pipeline
//!
//! [`Diagnoser`] ties the stages together: preprocess the image, run the
//! engine, interpret the scores against the labels and the knowledge base.

use std::path::Path;
use std::time::Instant;

use burn::tensor::backend::Backend;
use tracing::{debug, info, warn};

use crate::config::DoctorConfig;
use crate::diagnosis::DiagnosticIndex;
use crate::inference::engine::InferenceEngine;
use crate::inference::interpret::{interpret_with_top_k, ClassificationResult, DEFAULT_TOP_K};
use crate::labels::LabelSet;
use crate::model::load_sidecar_config;
use crate::preprocess::{InputTensor, Preprocessor};
use crate::utils::error::{PlantDoctorError, Result};

/// Owns everything needed to diagnose one image at a time
pub struct Diagnoser<B: Backend> {
    engine: InferenceEngine<B>,
    labels: LabelSet,
    index: DiagnosticIndex,
    preprocessor: Preprocessor,
    top_k: usize,
}

impl<B: Backend> Diagnoser<B> {
    /// Assemble a pipeline from its parts
    ///
    /// Fails when the preprocessor output does not fit the model input. A
    /// label count that differs from the model's class count is only logged;
    /// out-of-range classes are reported as unknown labels.
    pub fn new(
        engine: InferenceEngine<B>,
        labels: LabelSet,
        index: DiagnosticIndex,
        preprocessor: Preprocessor,
    ) -> Result<Self> {
        let pre = preprocessor.config();
        let produced = [1, pre.target_size as usize, pre.target_size as usize, pre.channels];
        if produced != engine.expected_shape() {
            return Err(PlantDoctorError::Config(format!(
                "preprocessor produces {:?} but the model expects {:?}",
                produced,
                engine.expected_shape()
            )));
        }

        if labels.len() != engine.num_classes() {
            warn!(
                "Label set has {} entries but the model has {} classes",
                labels.len(),
                engine.num_classes()
            );
        }

        Ok(Self {
            engine,
            labels,
            index,
            preprocessor,
            top_k: DEFAULT_TOP_K,
        })
    }

    /// Build the pipeline described by a configuration
    ///
    /// An architecture JSON next to the weights takes precedence over the
    /// `[model]` section.
    pub fn from_config(config: &DoctorConfig, device: &B::Device) -> Result<Self> {
        config.validate()?;

        let model_path = config
            .model_path
            .as_deref()
            .ok_or_else(|| PlantDoctorError::Config("model_path is not set".to_string()))?;

        let model_config = match load_sidecar_config(model_path)? {
            Some(sidecar) => {
                debug!("Using architecture stored next to the weights");
                sidecar
            }
            None => config.model.to_model_config(),
        };

        let engine = InferenceEngine::load(model_path, model_config, device)?
            .with_softmax(config.apply_softmax);
        let labels = LabelSet::load_or_default(config.labels_path.as_ref());
        let preprocessor = Preprocessor::new(config.preprocess.clone());

        let diagnoser = Self::new(engine, labels, DiagnosticIndex::builtin(), preprocessor)?
            .with_top_k(config.top_k);
        info!(
            "Diagnoser ready: {} labels, {} knowledge base entries",
            diagnoser.labels.len(),
            diagnoser.index.len()
        );
        Ok(diagnoser)
    }

    /// Number of alternatives kept in each result
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Diagnose encoded image bytes
    pub fn diagnose(&self, image_bytes: &[u8]) -> Result<ClassificationResult> {
        let start = Instant::now();
        let input = self.preprocessor.preprocess(image_bytes)?;
        self.run(&input, start)
    }

    /// Read an image file and diagnose it
    pub fn diagnose_file<P: AsRef<Path>>(&self, path: P) -> Result<ClassificationResult> {
        let start = Instant::now();
        let input = self.preprocessor.preprocess_file(path)?;
        self.run(&input, start)
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn index(&self) -> &DiagnosticIndex {
        &self.index
    }

    pub fn engine(&self) -> &InferenceEngine<B> {
        &self.engine
    }

    /// Free the model; later diagnoses fail
    pub fn release(&self) {
        self.engine.release();
    }

    fn run(&self, input: &InputTensor, start: Instant) -> Result<ClassificationResult> {
        let scores = self.engine.classify(input)?;
        let result = interpret_with_top_k(&scores, &self.labels, &self.index, self.top_k);

        debug!(
            "Diagnosed '{}' ({:.3}) in {:.1} ms",
            result.label,
            result.confidence,
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(result)
    }
}
