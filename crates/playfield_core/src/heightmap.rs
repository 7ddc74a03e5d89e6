//! Normalized heightmap data for terrain cooking.
//!
//! A [`Heightmap`] is a row-major grid of `[0, 1]` samples, typically
//! decoded from a grayscale image by the caller. The physics side quantizes
//! samples to 16-bit signed integers before building height-sample grids,
//! so the world height of a cell is
//! `min_z + (max_z - min_z) * dequantize(quantize(sample))`, a pure
//! function of the input grid.

use serde::{Deserialize, Serialize};

/// Errors raised while constructing heightmap data.
#[derive(Debug)]
pub enum HeightmapError {
    /// Sample buffer length does not match the grid dimensions.
    SampleCountMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for HeightmapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeightmapError::SampleCountMismatch { expected, actual } => write!(
                f,
                "heightmap sample count mismatch: expected {expected}, got {actual}"
            ),
        }
    }
}

impl std::error::Error for HeightmapError {}

/// Row-major grid of normalized height samples.
///
/// `sample(x, y)` reads `samples[x + y * size_x]`; `x` runs along the
/// world X axis, `y` along the world Z axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heightmap {
    size_x: u32,
    size_y: u32,
    samples: Vec<f32>,
}

impl Heightmap {
    /// Builds a heightmap, validating that `samples.len() == size_x *
    /// size_y`.
    pub fn new(size_x: u32, size_y: u32, samples: Vec<f32>) -> Result<Self, HeightmapError> {
        let expected = size_x as usize * size_y as usize;
        if samples.len() != expected {
            return Err(HeightmapError::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            size_x,
            size_y,
            samples,
        })
    }

    pub fn size_x(&self) -> u32 {
        self.size_x
    }

    pub fn size_y(&self) -> u32 {
        self.size_y
    }

    /// Normalized sample at grid cell `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= size_x` or `y >= size_y`.
    pub fn sample(&self, x: u32, y: u32) -> f32 {
        assert!(x < self.size_x && y < self.size_y, "heightmap cell out of range");
        self.samples[(x + y * self.size_x) as usize]
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}

/// Quantizes a normalized `[0, 1]` sample to a signed 16-bit height unit.
pub fn quantize_height(normalized: f32) -> i16 {
    (normalized.clamp(0.0, 1.0) * f32::from(i16::MAX)).round() as i16
}

/// Maps a quantized height unit back to the normalized `[0, 1]` range.
pub fn dequantize_height(quantized: i16) -> f32 {
    f32::from(quantized.max(0)) / f32::from(i16::MAX)
}
