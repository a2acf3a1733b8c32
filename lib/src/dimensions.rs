//! Output grid sizing.
//!
//! Monospace glyphs are taller than they are wide, so the column count is
//! squeezed by the character aspect ratio. Without it the ASCII art looks
//! stretched horizontally compared to the source image.

/// Smallest ratio a scale percentage can resolve to
pub const MIN_SCALE_RATIO: f32 = 0.01;

/// Largest on-screen size of the sampled-pixel preview
pub const PREVIEW_MAX: (u32, u32) = (600, 450);

/// Magnification applied to the sampled-pixel preview
pub const PREVIEW_SCALE: u32 = 2;

/// Dimensions of the downscaled pixel grid, one character per pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    /// Number of cells, saturating instead of overflowing
    pub fn pixel_count(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }
}

/// Convert a scale percentage to a ratio, never below [`MIN_SCALE_RATIO`]
///
/// Non-finite input (NaN, infinities) is treated as 0.
pub fn scale_ratio(scale_percent: f32) -> f32 {
    let percent = if scale_percent.is_finite() {
        scale_percent
    } else {
        0.0
    };
    (percent / 100.0).max(MIN_SCALE_RATIO)
}

/// Compute the grid size for a source image
///
/// ```
/// use ascii_ramp::dimensions::target_size;
///
/// let size = target_size(100, 100, 50.0, 0.55);
/// assert_eq!((size.width, size.height), (27, 50));
/// ```
pub fn target_size(
    source_width: u32,
    source_height: u32,
    scale_percent: f32,
    char_aspect_ratio: f32,
) -> TargetSize {
    let ratio = scale_ratio(scale_percent) as f64;
    let aspect = char_aspect_ratio as f64;

    let height = (source_height as f64 * ratio).floor();
    let width = (source_width as f64 * ratio * aspect).floor();

    TargetSize {
        width: clamp_dimension(width),
        height: clamp_dimension(height),
    }
}

// `as u32` saturates and maps NaN to 0; the max keeps the grid non-empty.
fn clamp_dimension(value: f64) -> u32 {
    (value as u32).max(1)
}

/// Coerce user text to a scale percentage
///
/// Anything that does not parse as a number becomes 0, which [`scale_ratio`]
/// then lifts to the minimum ratio.
pub fn parse_scale_percent(input: &str) -> f32 {
    input
        .trim()
        .trim_end_matches('%')
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// On-screen size of the sampled-pixel preview
pub fn preview_size(size: TargetSize) -> (u32, u32) {
    (
        (size.width.saturating_mul(PREVIEW_SCALE)).min(PREVIEW_MAX.0),
        (size.height.saturating_mul(PREVIEW_SCALE)).min(PREVIEW_MAX.1),
    )
}
