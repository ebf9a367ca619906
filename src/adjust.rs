//! Adjustment operators.
//!
//! Every operator is a pure method on [`Color`] that returns a new color.
//! Amounts are clamped to their domain before use (NaN counts as zero), so
//! out-of-range input saturates instead of wrapping or failing. Operators
//! with a conventional default come in pairs: `lighter()` uses
//! [`DEFAULT_ADJUSTMENT`], `lighter_by(amount)` takes an explicit amount.
//!
//! Lightness and saturation operators work in HSL through
//! [`crate::hsl`]; mixing, tinting, shading and inversion work on the RGBA
//! channels directly.
//!
//! # Examples
//!
//! ```
//! use dynamic_color::Color;
//!
//! let base = Color::from_hex(0xc0392b);
//! assert_eq!(base.tinted().to_hex_string(), "#cc6055");
//! assert_eq!(base.shaded().to_hex_string(), "#992d22");
//! assert_eq!(base.adjusted_hue(90.0 / 360.0).to_hex_string(), "#67c02b");
//! assert_eq!(Color::RED.mixed(&Color::BLUE).to_hex_string(), "#7f007f");
//! ```

use crate::color::{Color, HslaComponents, RgbaComponents};
use crate::hsl::{clamp_unit, wrap_hue};

/// Default amount for lighten, darken, saturate, desaturate, tint and shade.
pub const DEFAULT_ADJUSTMENT: f64 = 0.2;

/// Default weight for [`Color::mixed`].
pub const DEFAULT_MIX_WEIGHT: f64 = 0.5;

/// Color space used to interpolate between two colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MixSpace {
    /// Per-channel linear interpolation of r, g, b and a.
    #[default]
    Rgb,
    /// Hue along the shorter arc, saturation, lightness and alpha linearly.
    Hsl,
}

impl Color {
    /// Add `amount` to alpha, clamping the result to `[0, 1]`.
    #[must_use]
    pub fn adjusted_alpha(&self, amount: f64) -> Color {
        let RgbaComponents { r, g, b, a } = self.rgba;
        Color::from_rgba(r, g, b, a + finite_or_zero(amount))
    }

    /// Rotate the hue by `amount` turns; the result wraps modulo 1.
    #[must_use]
    pub fn adjusted_hue(&self, amount: f64) -> Color {
        let HslaComponents { h, s, l, a } = self.hsla;
        Color::from_hsla(wrap_hue(h + wrap_hue(amount)), s, l, a)
    }

    /// Rotate the hue by half a turn.
    #[must_use]
    pub fn complemented(&self) -> Color {
        self.adjusted_hue(0.5)
    }

    /// Lighten by [`DEFAULT_ADJUSTMENT`].
    #[must_use]
    pub fn lighter(&self) -> Color {
        self.lighter_by(DEFAULT_ADJUSTMENT)
    }

    /// Increase lightness by `amount` (clamped to `[0, 1]`).
    #[must_use]
    pub fn lighter_by(&self, amount: f64) -> Color {
        let HslaComponents { h, s, l, a } = self.hsla;
        Color::from_hsla(h, s, l + clamp_unit(amount), a)
    }

    /// Darken by [`DEFAULT_ADJUSTMENT`].
    #[must_use]
    pub fn darkened(&self) -> Color {
        self.darkened_by(DEFAULT_ADJUSTMENT)
    }

    /// Decrease lightness by `amount` (clamped to `[0, 1]`).
    #[must_use]
    pub fn darkened_by(&self, amount: f64) -> Color {
        let HslaComponents { h, s, l, a } = self.hsla;
        Color::from_hsla(h, s, l - clamp_unit(amount), a)
    }

    /// Saturate by [`DEFAULT_ADJUSTMENT`].
    #[must_use]
    pub fn saturated(&self) -> Color {
        self.saturated_by(DEFAULT_ADJUSTMENT)
    }

    /// Increase saturation by `amount` (clamped to `[0, 1]`).
    #[must_use]
    pub fn saturated_by(&self, amount: f64) -> Color {
        let HslaComponents { h, s, l, a } = self.hsla;
        Color::from_hsla(h, s + clamp_unit(amount), l, a)
    }

    /// Desaturate by [`DEFAULT_ADJUSTMENT`].
    #[must_use]
    pub fn desaturated(&self) -> Color {
        self.desaturated_by(DEFAULT_ADJUSTMENT)
    }

    /// Decrease saturation by `amount` (clamped to `[0, 1]`).
    #[must_use]
    pub fn desaturated_by(&self, amount: f64) -> Color {
        let HslaComponents { h, s, l, a } = self.hsla;
        Color::from_hsla(h, s - clamp_unit(amount), l, a)
    }

    /// Remove all saturation.
    #[must_use]
    pub fn grayscaled(&self) -> Color {
        self.desaturated_by(1.0)
    }

    /// Invert r, g and b; alpha is kept.
    #[must_use]
    pub fn inverted(&self) -> Color {
        let RgbaComponents { r, g, b, a } = self.rgba;
        Color::from_rgba(1.0 - r, 1.0 - g, 1.0 - b, a)
    }

    /// Mix toward white by [`DEFAULT_ADJUSTMENT`].
    #[must_use]
    pub fn tinted(&self) -> Color {
        self.tinted_by(DEFAULT_ADJUSTMENT)
    }

    /// Mix toward white by `amount` (clamped to `[0, 1]`).
    #[must_use]
    pub fn tinted_by(&self, amount: f64) -> Color {
        self.mixed_with(&Color::WHITE, amount)
    }

    /// Mix toward black by [`DEFAULT_ADJUSTMENT`].
    #[must_use]
    pub fn shaded(&self) -> Color {
        self.shaded_by(DEFAULT_ADJUSTMENT)
    }

    /// Mix toward black by `amount` (clamped to `[0, 1]`).
    #[must_use]
    pub fn shaded_by(&self, amount: f64) -> Color {
        self.mixed_with(&Color::BLACK, amount)
    }

    /// Mix evenly with `other`.
    #[must_use]
    pub fn mixed(&self, other: &Color) -> Color {
        self.mixed_with(other, DEFAULT_MIX_WEIGHT)
    }

    /// Linear per-channel mix: weight 0 gives `self`, weight 1 gives `other`.
    ///
    /// The weight is clamped to `[0, 1]`.
    #[must_use]
    pub fn mixed_with(&self, other: &Color, weight: f64) -> Color {
        self.mixed_in(other, weight, MixSpace::Rgb)
    }

    /// Mix with `other` in the given color space.
    #[must_use]
    pub fn mixed_in(&self, other: &Color, weight: f64, space: MixSpace) -> Color {
        let w = clamp_unit(weight);
        match space {
            MixSpace::Rgb => {
                let (from, to) = (self.rgba, other.rgba);
                Color::from_rgba(
                    lerp(from.r, to.r, w),
                    lerp(from.g, to.g, w),
                    lerp(from.b, to.b, w),
                    lerp(from.a, to.a, w),
                )
            }
            MixSpace::Hsl => {
                let (from, to) = (self.hsla, other.hsla);
                Color::from_hsla(
                    mix_hue(from, to, w),
                    lerp(from.s, to.s, w),
                    lerp(from.l, to.l, w),
                    lerp(from.a, to.a, w),
                )
            }
        }
    }

    /// True when the luma `(299r + 587g + 114b) / 1000` is at least 0.5.
    #[must_use]
    pub fn is_light(&self) -> bool {
        let RgbaComponents { r, g, b, .. } = self.rgba;
        (r * 299.0 + g * 587.0 + b * 114.0) / 1000.0 >= 0.5
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        !self.is_light()
    }
}

#[inline]
fn lerp(from: f64, to: f64, weight: f64) -> f64 {
    from * (1.0 - weight) + to * weight
}

#[inline]
fn finite_or_zero(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}

// An achromatic endpoint has no meaningful hue, so it borrows the other one.
fn mix_hue(from: HslaComponents, to: HslaComponents, weight: f64) -> f64 {
    #[expect(clippy::float_cmp, reason = "only exact zero saturation is achromatic")]
    let achromatic = (from.s == 0.0, to.s == 0.0);
    match achromatic {
        (true, true) => 0.0,
        (true, false) => to.h,
        (false, true) => from.h,
        (false, false) => {
            let mut delta = to.h - from.h;
            if delta > 0.5 {
                delta -= 1.0;
            } else if delta < -0.5 {
                delta += 1.0;
            }
            wrap_hue(from.h + delta * weight)
        }
    }
}
