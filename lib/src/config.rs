use crate::error::{RenderError, Result};
use image::imageops::FilterType;

/// Scale the UI starts at, in percent of the source image
pub const DEFAULT_SCALE_PERCENT: f32 = 100.0;
/// Lower bound offered by the scale slider
pub const MIN_SCALE_PERCENT: f32 = 1.0;
/// Upper bound offered by the scale slider
pub const MAX_SCALE_PERCENT: f32 = 100.0;

/// Width of a glyph relative to its height
pub const DEFAULT_CHAR_ASPECT_RATIO: f32 = 0.55;

/// Kernel used when downscaling the source image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResampleFilter {
    Nearest,
    /// Bilinear
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ResampleFilter {
    pub const ALL: [ResampleFilter; 5] = [
        ResampleFilter::Nearest,
        ResampleFilter::Triangle,
        ResampleFilter::CatmullRom,
        ResampleFilter::Gaussian,
        ResampleFilter::Lanczos3,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ResampleFilter::Nearest => "Nearest",
            ResampleFilter::Triangle => "Bilinear",
            ResampleFilter::CatmullRom => "Catmull-Rom",
            ResampleFilter::Gaussian => "Gaussian",
            ResampleFilter::Lanczos3 => "Lanczos3",
        }
    }
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Configuration for ASCII conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Glyph width / height, compensates for tall monospace cells
    pub char_aspect_ratio: f32, // (0.0, 4.0], default 0.55
    /// Downscale kernel
    pub filter: ResampleFilter, // default bilinear
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            char_aspect_ratio: DEFAULT_CHAR_ASPECT_RATIO,
            filter: ResampleFilter::default(),
        }
    }
}

impl RenderConfig {
    /// Validates the configuration parameters
    ///
    /// The scale factor is not part of the configuration: it is clamped per
    /// render call and never rejected.
    pub fn validate(&self) -> Result<()> {
        let ratio = self.char_aspect_ratio;
        if !ratio.is_finite() || ratio <= 0.0 || ratio > 4.0 {
            return Err(RenderError::InvalidConfig(format!(
                "char_aspect_ratio must be in (0.0, 4.0], got {}",
                ratio
            )));
        }
        Ok(())
    }
}
