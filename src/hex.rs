//! Hex codec: `#rrggbb` strings and packed `0xRRGGBB` integers.
//!
//! Parsing comes in two flavours:
//!
//! - [`parse_hex`] never fails. Anything it cannot read becomes opaque
//!   black, which is the behavior callers building colors from loosely
//!   validated input rely on.
//! - [`try_parse_hex`] reports why the input was rejected.
//!
//! Accepted forms, with or without a leading `#` and in any letter case:
//! `rrggbb` (the primary form), `rgb` (each nibble doubled) and `rrggbbaa`.
//!
//! Serialization quantizes each channel with [`quantize`]; the same bytes
//! back equality in [`crate::compare`].
//!
//! ```
//! use dynamic_color::hex::{parse_hex, to_hex_string};
//!
//! assert_eq!(to_hex_string(&parse_hex("AB3F4A")), "#ab3f4a");
//! assert_eq!(to_hex_string(&parse_hex("#T5RD2Z")), "#000000");
//! ```

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::{LazyLock, Mutex};

use lru::LruCache;

use crate::color::Color;
use crate::sync::lock_recover;

/// Channels within this distance below a byte boundary snap up to it.
///
/// Lets four-decimal literals such as `0.4627` (= 118/255 rounded) land on
/// the byte they were written for while every other value truncates.
pub const QUANTIZE_TOLERANCE: f64 = 1e-4;

const PARSE_CACHE_CAPACITY: usize = 1024;

/// Error type for strict hex parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexParseError {
    /// Nothing left after trimming and removing `#`.
    Empty,
    /// Digit count is not 3, 6 or 8.
    InvalidLength(usize),
    /// A character outside `[0-9a-fA-F]`.
    InvalidDigit(char),
}

impl fmt::Display for HexParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty hex color string"),
            Self::InvalidLength(len) => {
                write!(f, "Invalid hex color length {len} (expected 3, 6 or 8 digits)")
            }
            Self::InvalidDigit(c) => write!(f, "Invalid hex digit: {c:?}"),
        }
    }
}

impl std::error::Error for HexParseError {}

/// Quantize a normalized channel to a byte.
///
/// Truncates `channel * 255` after nudging by [`QUANTIZE_TOLERANCE`], so a
/// 50/50 mix of `0xff` and `0x00` serializes as `0x7f`.
#[must_use]
pub fn quantize(channel: f64) -> u8 {
    let scaled = ((crate::hsl::clamp_unit(channel) + QUANTIZE_TOLERANCE) * 255.0).floor();
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "clamped to 0-255 first"
    )]
    let byte = scaled.clamp(0.0, 255.0) as u8;
    byte
}

/// Parse a hex string, falling back to opaque black on malformed input.
#[must_use]
pub fn parse_hex(input: &str) -> Color {
    match try_parse_hex(input) {
        Ok(color) => color,
        Err(err) => {
            log::debug!("hex color {input:?} rejected ({err}), using black");
            Color::BLACK
        }
    }
}

/// Parse a hex string (cached).
///
/// # Errors
///
/// Returns `HexParseError` if the string is not a 3, 6 or 8 digit hex color:
/// - `Empty` if nothing remains after trimming whitespace and `#`
/// - `InvalidLength` if the digit count is unsupported
/// - `InvalidDigit` if a character is not a hex digit
pub fn try_parse_hex(input: &str) -> Result<Color, HexParseError> {
    static CACHE: LazyLock<Mutex<LruCache<String, Color>>> = LazyLock::new(|| {
        Mutex::new(LruCache::new(
            NonZeroUsize::new(PARSE_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN),
        ))
    });

    let cache: &Mutex<LruCache<String, Color>> = &CACHE;
    let digits = normalize(input);

    if let Some(cached) = lock_recover(cache).get(&digits) {
        log::trace!("hex color cache hit for {digits:?}");
        return Ok(*cached);
    }

    let color = parse_uncached(&digits)?;
    lock_recover(cache).put(digits, color);
    Ok(color)
}

/// Trim, drop one leading `#` and lower-case.
#[must_use]
pub(crate) fn normalize(input: &str) -> String {
    let trimmed = input.trim();
    trimmed
        .strip_prefix('#')
        .unwrap_or(trimmed)
        .to_ascii_lowercase()
}

fn parse_uncached(digits: &str) -> Result<Color, HexParseError> {
    let nibbles = digits
        .chars()
        .map(|c| {
            c.to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(HexParseError::InvalidDigit(c))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let byte = |hi: u8, lo: u8| f64::from((hi << 4) | lo) / 255.0;
    let doubled = |n: u8| f64::from(n * 17) / 255.0;

    match nibbles.as_slice() {
        [] => Err(HexParseError::Empty),
        &[r, g, b] => Ok(Color::from_rgb(doubled(r), doubled(g), doubled(b))),
        &[r1, r0, g1, g0, b1, b0] => Ok(Color::from_rgb(byte(r1, r0), byte(g1, g0), byte(b1, b0))),
        &[r1, r0, g1, g0, b1, b0, a1, a0] => Ok(Color::from_rgba(
            byte(r1, r0),
            byte(g1, g0),
            byte(b1, b0),
            byte(a1, a0),
        )),
        other => Err(HexParseError::InvalidLength(other.len())),
    }
}

/// Build a color from the low 24 bits of `value` (`0xRRGGBB`).
#[must_use]
pub fn from_hex_int(value: u32, alpha: f64) -> Color {
    let [_, red, green, blue] = value.to_be_bytes();
    Color::from_rgba(
        f64::from(red) / 255.0,
        f64::from(green) / 255.0,
        f64::from(blue) / 255.0,
        alpha,
    )
}

/// Serialize as lower-case `#rrggbb`.
#[must_use]
pub fn to_hex_string(color: &Color) -> String {
    color.to_triplet().hex()
}

/// Serialize as lower-case `#rrggbbaa`.
#[must_use]
pub fn to_hex_string_with_alpha(color: &Color) -> String {
    let [r, g, b, a] = color.to_rgba8();
    format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
}

/// Pack as `0xRRGGBB`.
#[must_use]
pub fn to_hex_int(color: &Color) -> u32 {
    let [r, g, b, _] = color.to_rgba8();
    u32::from_be_bytes([0, r, g, b])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digits() {
        let c = parse_hex("#ff0000");
        assert_eq!(c.to_rgba_components().r, 1.0);
        assert_eq!(c.to_rgba_components().g, 0.0);
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn test_parse_without_hash_mixed_case() {
        let c = parse_hex("ab3F4a");
        assert_eq!(c.red(), 171.0 / 255.0);
        assert_eq!(c.green(), 63.0 / 255.0);
        assert_eq!(c.blue(), 74.0 / 255.0);
    }

    #[test]
    fn test_parse_shorthand() {
        assert_eq!(parse_hex("#f80").to_hex(), 0x00ff_8800);
        assert_eq!(parse_hex("FFF").to_hex(), 0x00ff_ffff);
    }

    #[test]
    fn test_parse_with_alpha_byte() {
        let c = parse_hex("#ff000080");
        assert_eq!(c.to_hex(), 0x00ff_0000);
        assert_eq!(c.alpha(), 128.0 / 255.0);
    }

    #[test]
    fn test_malformed_falls_back_to_black() {
        for input in ["#T5RD2Z", "", "#", "12345", "#1234567", "#ff00001", "zz", "#ff 000"] {
            let c = parse_hex(input);
            assert_eq!(c.to_hex_string_with_alpha(), "#000000ff", "input {input:?}");
        }
    }

    #[test]
    fn test_strict_errors() {
        assert_eq!(try_parse_hex(""), Err(HexParseError::Empty));
        assert_eq!(try_parse_hex("  # "), Err(HexParseError::Empty));
        assert_eq!(try_parse_hex("#12345"), Err(HexParseError::InvalidLength(5)));
        assert_eq!(try_parse_hex("#T5RD2Z"), Err(HexParseError::InvalidDigit('t')));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(HexParseError::Empty.to_string(), "Empty hex color string");
        assert_eq!(
            HexParseError::InvalidLength(4).to_string(),
            "Invalid hex color length 4 (expected 3, 6 or 8 digits)"
        );
        assert_eq!(HexParseError::InvalidDigit('z').to_string(), "Invalid hex digit: 'z'");
    }

    #[test]
    fn test_cached_parse_is_stable() {
        let first = try_parse_hex("#C0392B").expect("valid");
        let second = try_parse_hex("c0392b").expect("valid");
        assert_eq!(first.to_hex(), second.to_hex());
        assert_eq!(first.to_hex(), 0x00c0_392b);
    }

    #[test]
    fn test_hex_int_ignores_high_bits() {
        assert_eq!(from_hex_int(0xff76_9a2b, 1.0).to_hex(), 0x0076_9a2b);
        assert_eq!(from_hex_int(0x0076_9a2b, 0.25).alpha(), 0.25);
    }

    #[test]
    fn test_to_hex_string_primaries() {
        assert_eq!(to_hex_string(&Color::RED), "#ff0000");
        assert_eq!(to_hex_string(&Color::BLUE), "#0000ff");
        assert_eq!(to_hex_string(&Color::GREEN), "#00ff00");
        assert_eq!(to_hex_string(&Color::YELLOW), "#ffff00");
        assert_eq!(to_hex_string(&Color::BLACK), "#000000");
        assert_eq!(to_hex_string(&from_hex_int(0x0076_9a2b, 1.0)), "#769a2b");
    }

    #[test]
    fn test_to_hex_int_primaries() {
        assert_eq!(to_hex_int(&Color::RED), 0x00ff_0000);
        assert_eq!(to_hex_int(&Color::BLUE), 0x0000_00ff);
        assert_eq!(to_hex_int(&Color::GREEN), 0x0000_ff00);
        assert_eq!(to_hex_int(&Color::YELLOW), 0x00ff_ff00);
        assert_eq!(to_hex_int(&Color::BLACK), 0);
    }

    #[test]
    fn test_four_decimal_literals_snap_to_intended_byte() {
        let c = Color::from_rgba(0.4627, 0.6039, 0.1686, 1.0);
        assert_eq!(to_hex_string(&c), "#769a2b");
    }

    #[test]
    fn test_quantize_truncates_half_steps() {
        assert_eq!(quantize(0.5), 0x7f);
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(2.0), 255);
        assert_eq!(quantize(-1.0), 0);
        assert_eq!(quantize(f64::NAN), 0);
        for byte in 0..=255u8 {
            assert_eq!(quantize(f64::from(byte) / 255.0), byte);
        }
    }

    #[test]
    fn test_alpha_string() {
        let c = from_hex_int(0x00c0_392b, 0.5);
        assert_eq!(to_hex_string_with_alpha(&c), "#c0392b7f");
        assert_eq!(to_hex_string(&c), "#c0392b");
    }
}
