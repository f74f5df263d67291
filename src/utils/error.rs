//! Error Handling Module
//!
//! Defines the error taxonomy of the diagnosis pipeline.
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for plant_doctor operations
#[derive(Error, Debug)]
pub enum PlantDoctorError {
    /// The supplied bytes are not a recognizable image
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// The model artifact is missing or corrupt
    #[error("Failed to load model from '{0}': {1}")]
    ModelLoad(PathBuf, String),

    /// Shape mismatch, released handle, or backend failure during a forward pass
    #[error("Inference error: {0}")]
    Inference(String),

    /// The label file could not be read (recovered by the fallback list)
    #[error("Failed to load labels from '{0}': {1}")]
    LabelLoad(PathBuf, String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<image::ImageError> for PlantDoctorError {
    fn from(err: image::ImageError) -> Self {
        PlantDoctorError::Decode(err.to_string())
    }
}

impl From<serde_json::Error> for PlantDoctorError {
    fn from(err: serde_json::Error) -> Self {
        PlantDoctorError::Serialization(err.to_string())
    }
}

/// Convenience Result type for plant_doctor operations
pub type Result<T> = std::result::Result<T, PlantDoctorError>;
