//! # Plant Doctor
//!
//! On-device plant disease diagnosis with the Burn framework.
//!
//! A leaf photo is resized and normalized, classified by a CNN into one of
//! the PlantVillage classes, and the winning class is turned into a
//! grower-facing diagnosis (Turkish disease name, description and remedy)
//! together with a confidence advisory.
//!
//! ## Modules
//!
//! - `labels`: class names, one per model output
//! - `diagnosis`: disease keys and the knowledge base
//! - `preprocess`: image decoding, resizing and normalization
//! - `model`: CNN architecture built with Burn
//! - `inference`: engine, result interpretation and confidence tiers
//! - `pipeline`: the [`Diagnoser`] tying the stages together
//! - `config`: TOML configuration
//! - `utils`: errors, logging and formatting helpers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use plant_doctor::backend::{default_device, InferenceBackend};
//! use plant_doctor::{Diagnoser, DoctorConfig};
//!
//! let config = DoctorConfig::from_file("plant_doctor.toml".as_ref())?;
//! let diagnoser = Diagnoser::<InferenceBackend>::from_config(&config, &default_device())?;
//! let result = diagnoser.diagnose_file("leaf.jpg")?;
//! println!("{} ({})", result.diagnosis.display_name, result.confidence_tier());
//! ```

pub mod backend;
pub mod config;
pub mod diagnosis;
pub mod inference;
pub mod labels;
pub mod model;
pub mod pipeline;
pub mod preprocess;
pub mod utils;

// Re-export commonly used items for convenience
pub use config::DoctorConfig;
pub use diagnosis::{normalize_disease, DiagnosticEntry, DiagnosticIndex, DiseaseKey};
pub use inference::{
    describe_confidence, diagnose_label, interpret, ClassificationResult, ConfidenceTier,
    InferenceEngine,
};
pub use labels::{LabelSet, DEFAULT_LABELS};
pub use model::{PlantClassifier, PlantClassifierConfig};
pub use pipeline::Diagnoser;
pub use preprocess::{preprocess, InputTensor, PreprocessConfig, Preprocessor};
pub use utils::error::{PlantDoctorError, Result};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
