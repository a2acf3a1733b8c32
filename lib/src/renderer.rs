use crate::config::RenderConfig;
use crate::dimensions::{TargetSize, target_size};
use crate::error::{RenderError, Result};
use crate::raster::{PixelBuffer, resample_into};
use crate::ramp::CharacterRamp;
use image::RgbaImage;
use log::{debug, warn};
use rayon::prelude::*;

/// Line terminator between grid rows, also appended after the last row
pub const LINE_TERMINATOR: char = '\n';

/// Everything one render needs: the decoded image, a scale and a ramp
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    pub image: &'a RgbaImage,
    /// Percentage of the source size, clamped to a 0.01 ratio
    pub scale_percent: f32,
    /// Ramp text; empty selects the default ramp
    pub ramp: &'a str,
}

impl<'a> RenderRequest<'a> {
    pub fn new(image: &'a RgbaImage, scale_percent: f32, ramp: &'a str) -> Self {
        Self {
            image,
            scale_percent,
            ramp,
        }
    }
}

/// The text grid produced by one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    /// Rows joined by `\n`, with a trailing `\n`
    pub text: String,
    pub size: TargetSize,
    /// Number of characters in the ramp actually used
    pub ramp_len: usize,
}

impl AsciiArt {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// Summary line shown next to the output
    pub fn info(&self) -> String {
        format!(
            "W: {}px  H: {}px  | model len: {}",
            self.size.width, self.size.height, self.ramp_len
        )
    }
}

/// Converts images to ASCII text, owning its sampling buffer
///
/// ```
/// use ascii_ramp::{AsciiRenderer, RenderConfig, RenderRequest};
/// use image::{Rgba, RgbaImage};
///
/// let img = RgbaImage::from_pixel(40, 20, Rgba([255, 255, 255, 255]));
/// let mut renderer = AsciiRenderer::new(RenderConfig::default()).unwrap();
/// let art = renderer.render(&RenderRequest::new(&img, 50.0, "")).unwrap();
/// assert_eq!(art.size.height, 10);
/// assert!(art.lines().all(|line| line.chars().all(|c| c == '@')));
/// ```
#[derive(Debug, Clone)]
pub struct AsciiRenderer {
    config: RenderConfig,
    buffer: PixelBuffer,
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self {
            config: RenderConfig::default(),
            buffer: PixelBuffer::new(),
        }
    }
}

impl AsciiRenderer {
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            buffer: PixelBuffer::new(),
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Replace the configuration, keeping the current one if invalid
    pub fn set_config(&mut self, config: RenderConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Sampled pixels behind the last successful render
    pub fn preview(&self) -> Option<&RgbaImage> {
        self.buffer.image()
    }

    /// Render a request to ASCII text
    ///
    /// Pipeline:
    /// 1. Sanitize the ramp (empty -> default)
    /// 2. Compute the target grid size
    /// 3. Resample the source into the sampling buffer
    /// 4. Map every sampled pixel to a ramp character, row by row
    /// 5. Join rows with a trailing terminator
    ///
    /// A failed resample returns the error and produces no text.
    pub fn render(&mut self, request: &RenderRequest<'_>) -> Result<AsciiArt> {
        let ramp = CharacterRamp::new(request.ramp);
        let (src_w, src_h) = request.image.dimensions();
        let size = target_size(
            src_w,
            src_h,
            request.scale_percent,
            self.config.char_aspect_ratio,
        );

        if let Err(e) = resample_into(request.image, size, self.config.filter, &mut self.buffer) {
            warn!("render aborted for {}x{} source: {}", src_w, src_h, e);
            return Err(e);
        }

        let sampled = self.buffer.image().ok_or_else(|| {
            RenderError::Rasterization("sampling buffer is empty after resample".to_string())
        })?;
        let text = map_pixels(sampled, &ramp);

        debug!(
            "rendered {}x{} source at {}% to {}x{} grid, ramp len {}",
            src_w,
            src_h,
            request.scale_percent,
            size.width,
            size.height,
            ramp.len()
        );

        Ok(AsciiArt {
            text,
            size,
            ramp_len: ramp.len(),
        })
    }
}

/// Render with the default configuration and a call-scoped buffer
pub fn render_ascii(image: &RgbaImage, scale_percent: f32, ramp: &str) -> Result<AsciiArt> {
    let mut renderer = AsciiRenderer::new(RenderConfig::default())?;
    renderer.render(&RenderRequest::new(image, scale_percent, ramp))
}

/// Map an already-sampled image to grid text, one character per pixel
pub fn map_pixels(sampled: &RgbaImage, ramp: &CharacterRamp) -> String {
    let width = sampled.width() as usize;
    if width == 0 {
        return String::new();
    }

    // Parallelize per row; collect keeps row order
    let rows: Vec<String> = sampled
        .as_raw()
        .par_chunks(width * 4)
        .map(|row| {
            let mut line = String::with_capacity(width + 1);
            for px in row.chunks_exact(4) {
                line.push(ramp.char_for_rgb(px[0], px[1], px[2]));
            }
            line.push(LINE_TERMINATOR);
            line
        })
        .collect();

    rows.concat()
}
