//! Inference module: model execution and result interpretation
//!
//! This module provides:
//! - The inference engine owning a loaded classifier
//! - Arg-max interpretation of the output distribution
//! - Confidence advisory tiers

pub mod confidence;
pub mod engine;
pub mod interpret;

// Re-export main types for convenience
pub use confidence::{describe_confidence, ConfidenceTier};
pub use engine::InferenceEngine;
pub use interpret::{
    arg_max, diagnose_label, interpret, interpret_with_top_k, ClassPrediction,
    ClassificationResult,
};
