//! WCAG relative luminance and contrast ratio.
//!
//! ```
//! use dynamic_color::{Color, ContrastLevel};
//!
//! assert!((Color::BLACK.contrast_ratio(&Color::WHITE) - 21.0).abs() < 1e-9);
//! assert!(Color::BLACK.is_contrasting(&Color::WHITE, ContrastLevel::Aaa));
//! ```

use crate::color::Color;

/// WCAG 2 conformance thresholds for [`Color::is_contrasting`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContrastLevel {
    /// Large text at level AA (3:1).
    AaLargeText,
    /// Normal text at level AA (4.5:1).
    #[default]
    Aa,
    /// Large text at level AAA (4.5:1).
    AaaLargeText,
    /// Normal text at level AAA (7:1).
    Aaa,
}

impl ContrastLevel {
    /// Minimum contrast ratio required by this level.
    #[must_use]
    pub const fn minimum_ratio(self) -> f64 {
        match self {
            Self::AaLargeText => 3.0,
            Self::Aa | Self::AaaLargeText => 4.5,
            Self::Aaa => 7.0,
        }
    }
}

// sRGB electro-optical transfer (IEC 61966-2-1)
fn decode_srgb(channel: f64) -> f64 {
    if channel <= 0.040_45 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

impl Color {
    /// Relative luminance in `[0, 1]`. Alpha is ignored.
    #[must_use]
    pub fn luminance(&self) -> f64 {
        let rgba = self.to_rgba_components();
        0.2126 * decode_srgb(rgba.r) + 0.7152 * decode_srgb(rgba.g) + 0.0722 * decode_srgb(rgba.b)
    }

    /// Contrast ratio against `other`, in `[1, 21]`. Symmetric.
    #[must_use]
    pub fn contrast_ratio(&self, other: &Color) -> f64 {
        let (a, b) = (self.luminance(), other.luminance());
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// True when the contrast ratio meets `level`.
    #[must_use]
    pub fn is_contrasting(&self, other: &Color, level: ContrastLevel) -> bool {
        self.contrast_ratio(other) >= level.minimum_ratio()
    }
}
