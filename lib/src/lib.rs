//! ASCII Ramp - image to ASCII text converter
//!
//! Downscales an image, computes a weighted luminance per pixel and maps it
//! onto a character ramp, producing one character per sampled pixel.
//!
//! # Example
//! ```no_run
//! use ascii_ramp::render_ascii;
//!
//! let input = image::open("photo.jpg").unwrap().to_rgba8();
//! let art = render_ascii(&input, 25.0, " .:-=+*#%@").unwrap();
//! print!("{}", art.text);
//! ```

pub mod config;
pub mod dimensions;
pub mod error;
pub mod luminance;
pub mod ramp;
pub mod raster;
pub mod renderer;

// Re-export main types for convenience
pub use config::{RenderConfig, ResampleFilter};
pub use dimensions::{TargetSize, target_size};
pub use error::{RenderError, Result};
pub use ramp::{CharacterRamp, DEFAULT_RAMP, RampPreset, RampSelection};
pub use renderer::{AsciiArt, AsciiRenderer, RenderRequest, render_ascii};
