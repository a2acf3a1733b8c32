/// Channel weights in hundredths: 0.21 R + 0.72 G + 0.07 B
pub const WEIGHTS_CENTI: [u32; 3] = [21, 72, 7];

/// Luminance of pure white, in hundredths
pub const MAX_LUMINANCE_CENTI: u32 = 255 * 100;

/// Calculate the gray value of one pixel
///
/// Formula: L = 0.21*R + 0.72*G + 0.07*B
///
/// The weights are not the BT.601/709 coefficients. They sum to 1.0, so the
/// result stays in [0, 255].
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    luminance_centi(r, g, b) as f32 / 100.0
}

/// Same weighting as [`luminance`] in exact integer hundredths
///
/// Returns a value in [0, 25500].
pub fn luminance_centi(r: u8, g: u8, b: u8) -> u32 {
    WEIGHTS_CENTI[0] * r as u32 + WEIGHTS_CENTI[1] * g as u32 + WEIGHTS_CENTI[2] * b as u32
}
