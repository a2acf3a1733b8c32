//! Character ramps
//!
//! A ramp is consumed in index order: gray 0 picks the first character and
//! gray 255 the last. Orientation is never normalized, so a ramp written
//! dense-to-light maps dark pixels to dense glyphs and the reverse ordering
//! inverts the picture.

use crate::luminance::{MAX_LUMINANCE_CENTI, luminance};
use std::fmt;

/// Ramp used whenever the requested one is empty
pub const DEFAULT_RAMP: &str = " .:-=+*#%@";

/// An ordered, never-empty set of characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRamp {
    chars: Vec<char>,
}

impl CharacterRamp {
    /// Build a ramp from text, substituting [`DEFAULT_RAMP`] for empty input
    pub fn new(chars: &str) -> Self {
        let source = if chars.is_empty() { DEFAULT_RAMP } else { chars };
        Self {
            chars: source.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false, kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Character for a gray value in [0, 255]
    pub fn char_for(&self, gray: f32) -> char {
        self.get_or_last(ramp_index(gray, self.len()))
    }

    /// Character for an RGB sample, alpha not involved
    pub fn char_for_rgb(&self, r: u8, g: u8, b: u8) -> char {
        self.char_for(luminance(r, g, b))
    }

    fn get_or_last(&self, index: usize) -> char {
        match self.chars.get(index) {
            Some(&ch) => ch,
            None => self.chars[self.chars.len() - 1],
        }
    }
}

impl Default for CharacterRamp {
    fn default() -> Self {
        Self::new(DEFAULT_RAMP)
    }
}

impl fmt::Display for CharacterRamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

/// Map a gray value onto a ramp of `len` characters
///
/// `t = floor(gray / 255 * (len - 1))`, evaluated on gray rounded to
/// hundredths (the precision of the channel weights) so pure white lands on
/// the last entry. Gray outside [0, 255], including NaN, resolves to the last
/// index.
pub fn ramp_index(gray: f32, len: usize) -> usize {
    if !(0.0..=255.0).contains(&gray) {
        return len.saturating_sub(1);
    }
    let centi = (gray as f64 * 100.0).round() as u32;
    index_for_centi(centi, len)
}

/// Integer form of [`ramp_index`] taking luminance in hundredths
pub fn index_for_centi(centi: u32, len: usize) -> usize {
    let last = len.saturating_sub(1) as u64;
    let centi = centi.min(MAX_LUMINANCE_CENTI) as u64;
    (centi * last / MAX_LUMINANCE_CENTI as u64) as usize
}

/// Built-in ramp catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RampPreset {
    Classic,
    HighDetail,
    Blocks,
    Binary,
    #[default]
    LightToDark,
    HalfBlock,
    SymbolMix,
    Emoji,
    /// User-supplied text
    Custom,
}

impl RampPreset {
    pub const ALL: [RampPreset; 9] = [
        RampPreset::Classic,
        RampPreset::HighDetail,
        RampPreset::Blocks,
        RampPreset::Binary,
        RampPreset::LightToDark,
        RampPreset::HalfBlock,
        RampPreset::SymbolMix,
        RampPreset::Emoji,
        RampPreset::Custom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RampPreset::Classic => "Classic",
            RampPreset::HighDetail => "High Detail",
            RampPreset::Blocks => "Block Style",
            RampPreset::Binary => "Binary",
            RampPreset::LightToDark => "Light to Dark",
            RampPreset::HalfBlock => "Half Block",
            RampPreset::SymbolMix => "Symbol Mix",
            RampPreset::Emoji => "Emoji Style",
            RampPreset::Custom => "Custom",
        }
    }

    /// Ramp text; empty for [`RampPreset::Custom`]
    pub fn chars(&self) -> &'static str {
        match self {
            RampPreset::Classic => "@%#*+=-:. ",
            RampPreset::HighDetail => {
                "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,^`'. "
            }
            RampPreset::Blocks => "█▓▒░",
            RampPreset::Binary => "01",
            RampPreset::LightToDark => DEFAULT_RAMP,
            RampPreset::HalfBlock => "█▄▀",
            RampPreset::SymbolMix => "█▓▒░@%#*+=-:. ",
            RampPreset::Emoji => "⬛🟫🟪🟥🟧🟨⬜",
            RampPreset::Custom => "",
        }
    }
}

/// The ramp a user has picked: a preset plus the custom text field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RampSelection {
    pub preset: RampPreset,
    pub custom: String,
}

impl RampSelection {
    pub fn new(preset: RampPreset) -> Self {
        Self {
            preset,
            custom: String::new(),
        }
    }

    /// True when the custom text is the active source
    pub fn uses_custom(&self) -> bool {
        self.preset == RampPreset::Custom || !self.custom.is_empty()
    }

    /// Raw ramp text handed to the renderer (may be empty)
    pub fn active_text(&self) -> &str {
        if self.uses_custom() {
            &self.custom
        } else {
            self.preset.chars()
        }
    }

    /// Resolve to a sanitized ramp
    pub fn resolve(&self) -> CharacterRamp {
        CharacterRamp::new(self.active_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ramp_uses_default() {
        assert_eq!(CharacterRamp::new(""), CharacterRamp::new(DEFAULT_RAMP));
        assert_eq!(CharacterRamp::new("").len(), 10);
        assert!(!CharacterRamp::new("").is_empty());
    }

    #[test]
    fn test_char_for_extremes() {
        let ramp = CharacterRamp::default();
        assert_eq!(ramp.char_for(0.0), ' ');
        assert_eq!(ramp.char_for(255.0), '@');
        assert_eq!(ramp.char_for_rgb(0, 0, 0), ' ');
        assert_eq!(ramp.char_for_rgb(255, 255, 255), '@');
    }

    #[test]
    fn test_two_char_ramp() {
        let ramp = CharacterRamp::new("@ ");
        assert_eq!(ramp.char_for_rgb(0, 0, 0), '@');
        assert_eq!(ramp.char_for_rgb(255, 255, 255), ' ');
        assert_eq!(ramp.char_for_rgb(128, 128, 128), '@');
        assert_eq!(ramp.char_for_rgb(255, 0, 0), '@');
    }

    #[test]
    fn test_single_char_ramp() {
        let ramp = CharacterRamp::new("#");
        assert_eq!(ramp.char_for(0.0), '#');
        assert_eq!(ramp.char_for(255.0), '#');
        assert_eq!(ramp.char_for_rgb(90, 12, 200), '#');
    }

    #[test]
    fn test_index_stays_in_bounds() {
        for len in 1..=70 {
            for gray in 0..=255u32 {
                let t = ramp_index(gray as f32, len);
                assert!(t < len, "len {len} gray {gray} -> {t}");
                let t = index_for_centi(gray * 100, len);
                assert!(t < len, "len {len} centi {} -> {t}", gray * 100);
            }
        }
    }

    #[test]
    fn test_out_of_range_gray_falls_back_to_last() {
        assert_eq!(ramp_index(-1.0, 10), 9);
        assert_eq!(ramp_index(300.0, 10), 9);
        assert_eq!(ramp_index(f32::NAN, 10), 9);
    }

    #[test]
    fn test_integer_and_float_paths_agree() {
        for v in [0u8, 1, 17, 64, 127, 128, 200, 254, 255] {
            let ramp = CharacterRamp::default();
            assert_eq!(ramp.char_for_rgb(v, v, v), ramp.char_for(v as f32));
        }
    }

    #[test]
    fn test_multibyte_ramp() {
        let ramp = CharacterRamp::new(RampPreset::Blocks.chars());
        assert_eq!(ramp.len(), 4);
        assert_eq!(ramp.char_for(0.0), '█');
        assert_eq!(ramp.char_for(255.0), '░');
    }

    #[test]
    fn test_orientation_is_not_normalized() {
        let dense_first = CharacterRamp::new("@ ");
        let light_first = CharacterRamp::new(" @");
        assert_eq!(dense_first.char_for(0.0), '@');
        assert_eq!(light_first.char_for(0.0), ' ');
    }

    #[test]
    fn test_display_round_trips_text() {
        assert_eq!(CharacterRamp::new("01").to_string(), "01");
    }

    #[test]
    fn test_selection_uses_preset() {
        let selection = RampSelection::new(RampPreset::Binary);
        assert_eq!(selection.resolve(), CharacterRamp::new("01"));
    }

    #[test]
    fn test_selection_custom_text_wins() {
        let selection = RampSelection {
            preset: RampPreset::Classic,
            custom: "xo".to_string(),
        };
        assert!(selection.uses_custom());
        assert_eq!(selection.resolve(), CharacterRamp::new("xo"));
    }

    #[test]
    fn test_selection_empty_custom_falls_back_to_default() {
        let selection = RampSelection::new(RampPreset::Custom);
        assert_eq!(selection.active_text(), "");
        assert_eq!(selection.resolve(), CharacterRamp::default());
    }

    #[test]
    fn test_every_builtin_preset_is_non_empty() {
        for preset in RampPreset::ALL {
            if preset != RampPreset::Custom {
                assert!(!preset.chars().is_empty(), "{}", preset.name());
            }
        }
    }
}
