//! Plant Doctor CLI
//!
//! Diagnoses plant diseases from leaf photos with a Burn classifier.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use plant_doctor::backend::{backend_name, default_device, InferenceBackend};
use plant_doctor::inference::interpret::diagnose_label;
use plant_doctor::inference::{ClassificationResult, ConfidenceTier, InferenceEngine};
use plant_doctor::utils::format_percent;
use plant_doctor::utils::logging::{init_logging, LogConfig, LogLevel};
use plant_doctor::{DiagnosticIndex, Diagnoser, DoctorConfig, LabelSet, VERSION};

/// Plant disease diagnosis from leaf photos
#[derive(Parser, Debug)]
#[command(name = "plant-doctor")]
#[command(version)]
#[command(about = "Plant disease diagnosis with Burn", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, default_value = "false")]
    verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Diagnose a single leaf image
    Classify {
        /// Path to the image
        #[arg(short, long)]
        image: PathBuf,

        /// Path to the model weights (overrides the config file)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Path to the label file (overrides the config file)
        #[arg(short, long)]
        labels: Option<PathBuf>,

        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Print the active label set
    Labels {
        /// Path to the label file (built-in list when omitted)
        #[arg(short, long)]
        labels: Option<PathBuf>,
    },

    /// Show the diagnosis for a class label without running the model
    Explain {
        /// Class label, e.g. "Apple___Apple_scab"
        #[arg(short, long)]
        label: String,

        /// Confidence to report with it
        #[arg(short, long, default_value = "1.0")]
        confidence: f32,

        /// Print the result as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Write randomly initialised weights and their architecture config
    InitModel {
        /// Output path for the weights
        #[arg(short, long, default_value = "models/plant_classifier.mpk")]
        output: PathBuf,

        /// Number of output classes
        #[arg(long, default_value = "38")]
        num_classes: usize,

        /// Input image size (square)
        #[arg(long, default_value = "224")]
        input_size: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = if cli.verbose {
        LogConfig::verbose()
    } else {
        match configured_log_level(&cli.command) {
            Some(level) => LogConfig::default().with_level(level),
            None => LogConfig::default(),
        }
    };
    let _ = init_logging(&log_config);

    match cli.command {
        Commands::Classify {
            image,
            model,
            labels,
            config,
            json,
        } => cmd_classify(&image, model, labels, config.as_deref(), json),
        Commands::Labels { labels } => cmd_labels(labels.as_deref()),
        Commands::Explain {
            label,
            confidence,
            json,
        } => cmd_explain(&label, confidence, json),
        Commands::InitModel {
            output,
            num_classes,
            input_size,
        } => cmd_init_model(&output, num_classes, input_size),
    }
}

/// Log level from the config file given to `classify`, if any
fn configured_log_level(command: &Commands) -> Option<LogLevel> {
    match command {
        Commands::Classify {
            config: Some(path), ..
        } => DoctorConfig::from_file(path)
            .ok()
            .map(|config| LogLevel::parse(&config.log_level)),
        _ => None,
    }
}

fn cmd_classify(
    image: &Path,
    model: Option<PathBuf>,
    labels: Option<PathBuf>,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => DoctorConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DoctorConfig::default(),
    };
    if model.is_some() {
        config.model_path = model;
    }
    if labels.is_some() {
        config.labels_path = labels;
    }

    info!("Classifying {:?} on {}", image, backend_name());

    let device = default_device();
    let diagnoser = Diagnoser::<InferenceBackend>::from_config(&config, &device)
        .context("Failed to set up the diagnosis pipeline")?;
    let result = diagnoser
        .diagnose_file(image)
        .with_context(|| format!("Failed to diagnose {}", image.display()))?;
    diagnoser.release();

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }

    Ok(())
}

fn cmd_labels(path: Option<&Path>) -> Result<()> {
    let labels = LabelSet::load_or_default(path);

    let origin = if labels.is_fallback() {
        "built-in".to_string()
    } else {
        path.map(|p| p.display().to_string()).unwrap_or_default()
    };
    println!(
        "{} {} ({})",
        "Labels:".cyan().bold(),
        labels.len(),
        origin
    );

    for (idx, label) in labels.iter().enumerate() {
        println!("  {:>3}  {}", idx, label);
    }

    Ok(())
}

fn cmd_explain(label: &str, confidence: f32, json: bool) -> Result<()> {
    let index = DiagnosticIndex::builtin();
    let mut result = diagnose_label(label, &index);
    result.confidence = confidence;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }

    Ok(())
}

fn cmd_init_model(output: &Path, num_classes: usize, input_size: usize) -> Result<()> {
    let config = plant_doctor::PlantClassifierConfig::new()
        .with_num_classes(num_classes)
        .with_input_size(input_size);

    println!("{}", "Initialising model:".cyan().bold());
    println!("  Classes:    {}", num_classes);
    println!("  Input size: {}", input_size);
    println!("  Backend:    {}", backend_name());

    let device = default_device();
    let engine = InferenceEngine::<InferenceBackend>::random(config, &device);
    let saved = engine
        .save(output)
        .with_context(|| format!("Failed to write model to {}", output.display()))?;

    println!();
    println!("{} {}", "Saved:".green().bold(), saved.display());
    println!(
        "{}",
        "Weights are untrained; use this file for smoke tests only.".yellow()
    );

    Ok(())
}

fn print_result(result: &ClassificationResult) {
    let tier = result.confidence_tier();
    let confidence = format!("{} ({})", format_percent(result.confidence), tier.localized());
    let confidence = match tier {
        ConfidenceTier::VeryHigh | ConfidenceTier::High => confidence.green(),
        ConfidenceTier::MediumHigh | ConfidenceTier::Medium => confidence.yellow(),
        ConfidenceTier::LowMedium | ConfidenceTier::Low => confidence.red(),
    };

    println!("{}", format!("Plant Doctor v{}", VERSION).dimmed());
    println!();

    let title = if result.is_healthy {
        result.diagnosis.display_name.green().bold()
    } else {
        result.diagnosis.display_name.red().bold()
    };
    println!("{}", title);
    println!("  Label:      {}", result.label);
    println!("  Confidence: {}", confidence);
    println!();
    println!("{}", "Açıklama:".cyan().bold());
    println!("  {}", result.diagnosis.description);
    println!();
    println!("{}", "Öneri:".cyan().bold());
    println!("  {}", result.diagnosis.remedy);

    if !result.top_k.is_empty() {
        println!();
        println!("{}", "Alternatives:".cyan().bold());
        for prediction in &result.top_k {
            println!(
                "  {:40} {:>8}",
                prediction.label,
                format_percent(prediction.probability)
            );
        }
    }

    if tier.needs_review() {
        println!();
        println!("{}", tier.as_str().yellow());
    }
}
