//! RGB ↔ HSL conversion.
//!
//! Every operator that needs the "other" color space goes through the two
//! functions in this module. Both work on normalized channels and clamp
//! their outputs to `[0, 1]`; hue is expressed as a fraction of a full turn
//! and always lands in `[0, 1)`.
//!
//! ```
//! use dynamic_color::hsl::{hsl_to_rgb, rgb_to_hsl};
//!
//! let (h, s, l) = rgb_to_hsl(1.0, 0.0, 0.0);
//! assert_eq!((h, s, l), (0.0, 1.0, 0.5));
//!
//! let (r, g, b) = hsl_to_rgb(120.0 / 360.0, 1.0, 0.5);
//! assert!(r.abs() < 1e-9 && (g - 1.0).abs() < 1e-9 && b.abs() < 1e-9);
//! ```

/// Largest per-component gap at which two HSL triples describe the same color.
pub(crate) const HSL_TOLERANCE: f64 = 1e-3;

/// Clamp a channel into `[0, 1]`, mapping NaN to zero.
#[inline]
#[must_use]
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Wrap a hue into `[0, 1)`. Non-finite hues collapse to zero.
#[inline]
#[must_use]
pub(crate) fn wrap_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = hue.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Convert normalized RGB to `(hue, saturation, lightness)`.
///
/// Achromatic input (`max == min`) yields a hue and saturation of zero.
#[must_use]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (r, g, b) = (clamp_unit(r), clamp_unit(g), clamp_unit(b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = f64::midpoint(max, min);

    #[expect(clippy::float_cmp, reason = "achromatic test is exact by definition")]
    let achromatic = max == min;
    if achromatic {
        return (0.0, 0.0, lightness);
    }

    let delta = max - min;
    let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());

    #[expect(clippy::float_cmp, reason = "max is one of the three channels")]
    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (wrap_hue(sector / 6.0), clamp_unit(saturation), clamp_unit(lightness))
}

/// Convert `(hue, saturation, lightness)` to normalized RGB.
///
/// The hue is wrapped modulo 1 first. Sextants are half-open, so a hue of
/// exactly `k/6` belongs to sextant `k`.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let (s, l) = (clamp_unit(s), clamp_unit(l));
    #[expect(clippy::float_cmp, reason = "only exact zero saturation is gray")]
    let gray = s == 0.0;
    if gray {
        return (l, l, l);
    }

    let sector = wrap_hue(h) * 6.0;
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());
    let m = l - chroma / 2.0;

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "sector is in [0, 6)"
    )]
    let (r, g, b) = match (sector.floor() as u8).min(5) {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    (clamp_unit(r + m), clamp_unit(g + m), clamp_unit(b + m))
}

/// True when two `(h, s, l)` triples agree within [`HSL_TOLERANCE`].
///
/// Hue distance is measured around the circle, so `0.9995` and `0.0` agree.
#[must_use]
pub(crate) fn hsl_agrees(a: (f64, f64, f64), b: (f64, f64, f64)) -> bool {
    let hue_gap = (a.0 - b.0).abs();
    hue_gap.min(1.0 - hue_gap) <= HSL_TOLERANCE
        && (a.1 - b.1).abs() <= HSL_TOLERANCE
        && (a.2 - b.2).abs() <= HSL_TOLERANCE
}
