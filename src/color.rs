//! The immutable [`Color`] value type.
//!
//! A `Color` carries both of its views at once: normalized RGBA channels and
//! the matching HSLA components. RGBA input is stored verbatim (after
//! clamping) and the HSLA view is derived through [`crate::hsl`].
//!
//! HSLA input is kept as given only while it still describes the RGB it
//! produces. At the degenerate points (zero saturation, black, white) the
//! hue and saturation cannot survive the trip through RGB, so the derived
//! view is stored instead and equal colors adjust identically.
//!
//! # Examples
//!
//! ```
//! use dynamic_color::Color;
//!
//! let custom = Color::from_rgba(0.23, 0.46, 0.32, 1.0);
//! assert_eq!(custom.red(), 0.23);
//!
//! let coral = Color::from_hsl(6.0 / 360.0, 0.781, 0.571);
//! assert!(coral.is_equal_to_hex_string("#e74d3c"));
//!
//! let parsed = Color::from_hex_string("#ff0000");
//! assert_eq!(parsed, Color::RED);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::hex::{self, HexParseError};
use crate::hsl::{clamp_unit, hsl_agrees, hsl_to_rgb, rgb_to_hsl, wrap_hue};

/// RGB color triplet with values 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorTriplet {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ColorTriplet {
    /// Create a new color triplet from RGB components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns CSS-style hex format `#rrggbb`.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Returns normalized RGB as floats in range 0.0-1.0.
    #[must_use]
    pub fn normalized(&self) -> (f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
        )
    }
}

impl From<(u8, u8, u8)> for ColorTriplet {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl fmt::Display for ColorTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Named RGBA components, as returned by [`Color::to_rgba_components`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RgbaComponents {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Named HSLA components, as returned by [`Color::to_hsla_components`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HslaComponents {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

/// An immutable color in normalized RGBA space with a derived HSLA view.
///
/// Equality, hashing and hex comparison work on the 8-bit quantized
/// channels (see [`crate::compare`]), so two colors that serialize to the
/// same `#rrggbb` with the same alpha byte compare equal.
#[derive(Debug, Clone, Copy)]
pub struct Color {
    pub(crate) rgba: RgbaComponents,
    pub(crate) hsla: HslaComponents,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Self = Self::constant(0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::constant(1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0);
    pub const RED: Self = Self::constant(1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.5);
    pub const GREEN: Self = Self::constant(0.0, 1.0, 0.0, 1.0, 1.0 / 3.0, 1.0, 0.5);
    pub const BLUE: Self = Self::constant(0.0, 0.0, 1.0, 1.0, 2.0 / 3.0, 1.0, 0.5);
    pub const YELLOW: Self = Self::constant(1.0, 1.0, 0.0, 1.0, 1.0 / 6.0, 1.0, 0.5);
    pub const CYAN: Self = Self::constant(0.0, 1.0, 1.0, 1.0, 0.5, 1.0, 0.5);
    pub const MAGENTA: Self = Self::constant(1.0, 0.0, 1.0, 1.0, 5.0 / 6.0, 1.0, 0.5);
    /// Fully transparent black.
    pub const CLEAR: Self = Self::constant(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    const fn constant(r: f64, g: f64, b: f64, a: f64, h: f64, s: f64, l: f64) -> Self {
        Self {
            rgba: RgbaComponents { r, g, b, a },
            hsla: HslaComponents { h, s, l, a },
        }
    }

    /// Create a color from normalized RGBA channels.
    ///
    /// Each channel is clamped to `[0, 1]`; NaN becomes `0.0`.
    #[must_use]
    pub fn from_rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        let (r, g, b, a) = (
            clamp_unit(red),
            clamp_unit(green),
            clamp_unit(blue),
            clamp_unit(alpha),
        );
        let (h, s, l) = rgb_to_hsl(r, g, b);
        Self {
            rgba: RgbaComponents { r, g, b, a },
            hsla: HslaComponents { h, s, l, a },
        }
    }

    /// Create an opaque color from normalized RGB channels.
    #[must_use]
    pub fn from_rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::from_rgba(red, green, blue, 1.0)
    }

    /// Create a color from hue (fraction of a turn), saturation, lightness and alpha.
    ///
    /// The hue wraps modulo 1; the other components are clamped to `[0, 1]`.
    /// When the components do not survive the round trip through RGB (for
    /// example any hue at lightness 0), the HSLA view is re-derived from the
    /// resulting channels.
    #[must_use]
    pub fn from_hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        let given = (
            wrap_hue(hue),
            clamp_unit(saturation),
            clamp_unit(lightness),
        );
        let a = clamp_unit(alpha);
        let (r, g, b) = hsl_to_rgb(given.0, given.1, given.2);
        let derived = rgb_to_hsl(r, g, b);
        let (h, s, l) = if hsl_agrees(given, derived) {
            given
        } else {
            derived
        };
        Self {
            rgba: RgbaComponents { r, g, b, a },
            hsla: HslaComponents { h, s, l, a },
        }
    }

    /// Create an opaque color from hue, saturation and lightness.
    #[must_use]
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self::from_hsla(hue, saturation, lightness, 1.0)
    }

    /// Create an opaque color from a packed `0xRRGGBB` integer.
    ///
    /// Bits above the low 24 are ignored.
    #[must_use]
    pub fn from_hex(value: u32) -> Self {
        hex::from_hex_int(value, 1.0)
    }

    /// Create a color from a packed `0xRRGGBB` integer and an explicit alpha.
    #[must_use]
    pub fn from_hex_with_alpha(value: u32, alpha: f64) -> Self {
        hex::from_hex_int(value, alpha)
    }

    /// Create a color from a hex string such as `"#ab3f4a"` or `"ab3F4a"`.
    ///
    /// Malformed input yields opaque black; use [`str::parse`] for a
    /// fallible variant.
    #[must_use]
    pub fn from_hex_string(input: &str) -> Self {
        hex::parse_hex(input)
    }

    /// Create a color from an 8-bit triplet.
    #[must_use]
    pub fn from_triplet(triplet: ColorTriplet) -> Self {
        let (r, g, b) = triplet.normalized();
        Self::from_rgb(r, g, b)
    }

    #[must_use]
    pub const fn red(&self) -> f64 {
        self.rgba.r
    }

    #[must_use]
    pub const fn green(&self) -> f64 {
        self.rgba.g
    }

    #[must_use]
    pub const fn blue(&self) -> f64 {
        self.rgba.b
    }

    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.rgba.a
    }

    /// Hue as a fraction of a full turn, in `[0, 1)`.
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hsla.h
    }

    #[must_use]
    pub const fn saturation(&self) -> f64 {
        self.hsla.s
    }

    #[must_use]
    pub const fn lightness(&self) -> f64 {
        self.hsla.l
    }

    #[must_use]
    pub const fn to_rgba_components(&self) -> RgbaComponents {
        self.rgba
    }

    #[must_use]
    pub const fn to_hsla_components(&self) -> HslaComponents {
        self.hsla
    }

    /// Returns the color as `#rrggbb` (alpha excluded).
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        hex::to_hex_string(self)
    }

    /// Returns the color as `#rrggbbaa`.
    #[must_use]
    pub fn to_hex_string_with_alpha(&self) -> String {
        hex::to_hex_string_with_alpha(self)
    }

    /// Returns the color packed as `0xRRGGBB` (alpha excluded).
    #[must_use]
    pub fn to_hex(&self) -> u32 {
        hex::to_hex_int(self)
    }

    /// Returns the quantized RGB channels.
    #[must_use]
    pub fn to_triplet(&self) -> ColorTriplet {
        let [red, green, blue, _] = self.to_rgba8();
        ColorTriplet::new(red, green, blue)
    }

    /// Returns the quantized RGBA channels, for hosts that want bytes.
    #[must_use]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            hex::quantize(self.rgba.r),
            hex::quantize(self.rgba.g),
            hex::quantize(self.rgba.b),
            hex::quantize(self.rgba.a),
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Color {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex::try_parse_hex(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = HexParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        hex::try_parse_hex(value)
    }
}

impl From<ColorTriplet> for Color {
    fn from(triplet: ColorTriplet) -> Self {
        Self::from_triplet(triplet)
    }
}

impl From<(f64, f64, f64, f64)> for Color {
    fn from((r, g, b, a): (f64, f64, f64, f64)) -> Self {
        Self::from_rgba(r, g, b, a)
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::from_rgba(f64::from(r), f64::from(g), f64::from(b), f64::from(a))
    }
}

impl From<Color> for [f32; 4] {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "channels are in [0, 1], f32 precision is what the host asked for"
    )]
    fn from(color: Color) -> Self {
        let RgbaComponents { r, g, b, a } = color.rgba;
        [r as f32, g as f32, b as f32, a as f32]
    }
}

impl From<RgbaComponents> for Color {
    fn from(RgbaComponents { r, g, b, a }: RgbaComponents) -> Self {
        Self::from_rgba(r, g, b, a)
    }
}

impl From<HslaComponents> for Color {
    fn from(HslaComponents { h, s, l, a }: HslaComponents) -> Self {
        Self::from_hsla(h, s, l, a)
    }
}
