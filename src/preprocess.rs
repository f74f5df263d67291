//! Image preprocessing
//!
//! Turns encoded image bytes into the `[1, size, size, channels]` float
//! tensor the classifier consumes. Pixels are laid out row-major (NHWC) with
//! every channel scaled into `[0.0, 1.0]`.

use std::path::Path;

use image::{imageops::FilterType, DynamicImage};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::error::{PlantDoctorError, Result};

/// Default square input resolution
pub const DEFAULT_TARGET_SIZE: u32 = 224;

/// Default number of channels (RGB)
pub const DEFAULT_CHANNELS: usize = 3;

/// Channels available from a decoded pixel, in output order
const PIXEL_CHANNELS: usize = 3;

/// A preprocessed model input
#[derive(Debug, Clone, PartialEq)]
pub struct InputTensor {
    shape: [usize; 4],
    data: Vec<f32>,
}

impl InputTensor {
    /// Wrap raw NHWC data; the length must match the shape
    pub fn new(shape: [usize; 4], data: Vec<f32>) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(PlantDoctorError::InvalidInput(format!(
                "tensor data has {} values but shape {:?} needs {}",
                data.len(),
                shape,
                expected
            )));
        }
        Ok(Self { shape, data })
    }

    /// `[batch, height, width, channels]`
    pub fn shape(&self) -> [usize; 4] {
        self.shape
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn into_data(self) -> Vec<f32> {
        self.data
    }
}

/// Preprocessing parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Output width and height in pixels
    pub target_size: u32,
    /// Channels per pixel in the output
    pub channels: usize,
    /// Resampling filter
    #[serde(skip, default = "default_filter")]
    pub filter: FilterType,
}

fn default_filter() -> FilterType {
    FilterType::Triangle
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_TARGET_SIZE,
            channels: DEFAULT_CHANNELS,
            filter: default_filter(),
        }
    }
}

/// Image preprocessor bound to one configuration
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    config: PreprocessConfig,
}

impl Preprocessor {
    pub fn new(config: PreprocessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PreprocessConfig {
        &self.config
    }

    /// Decode and convert encoded image bytes
    pub fn preprocess(&self, image_bytes: &[u8]) -> Result<InputTensor> {
        self.validate()?;
        let image = image::load_from_memory(image_bytes)?;
        Ok(self.preprocess_image(&image))
    }

    /// Read an image file and convert it
    pub fn preprocess_file<P: AsRef<Path>>(&self, path: P) -> Result<InputTensor> {
        let bytes = std::fs::read(path.as_ref())?;
        self.preprocess(&bytes)
    }

    /// Convert an already decoded image
    pub fn preprocess_image(&self, image: &DynamicImage) -> InputTensor {
        let size = self.config.target_size;
        let channels = self.config.channels;

        debug!(
            "Preprocessing {}x{} image to {}x{}x{}",
            image.width(),
            image.height(),
            size,
            size,
            channels
        );

        let resized = image.resize_exact(size, size, self.config.filter).to_rgb8();

        let side = size as usize;
        let mut data = vec![0.0f32; side * side * channels];
        for (i, pixel) in resized.pixels().enumerate() {
            let base = i * channels;
            for c in 0..channels.min(PIXEL_CHANNELS) {
                data[base + c] = pixel[c] as f32 / 255.0;
            }
        }

        InputTensor {
            shape: [1, side, side, channels],
            data,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.config.target_size == 0 || self.config.channels == 0 {
            return Err(PlantDoctorError::InvalidInput(format!(
                "target size ({}) and channels ({}) must be positive",
                self.config.target_size, self.config.channels
            )));
        }
        Ok(())
    }
}

/// Preprocess with explicit size and channel count
pub fn preprocess(image_bytes: &[u8], target_size: u32, channels: usize) -> Result<InputTensor> {
    Preprocessor::new(PreprocessConfig {
        target_size,
        channels,
        ..Default::default()
    })
    .preprocess(image_bytes)
}
