//! Tolerant equality.
//!
//! Colors are compared on the same 8-bit grid the hex codec writes, never
//! with raw IEEE-754 equality. This is what lets `from_hsl(0.0, 1.0, 0.5)`
//! equal [`Color::RED`] even though the HSL path leaves rounding noise in
//! the channels.

use std::hash::{Hash, Hasher};

use crate::color::Color;
use crate::hex;

impl Color {
    /// True when all four quantized channels match.
    #[must_use]
    pub fn is_equal(&self, other: &Color) -> bool {
        self.to_rgba8() == other.to_rgba8()
    }

    /// True when [`Color::to_hex_string`] matches `expected`.
    ///
    /// The comparison ignores letter case, surrounding whitespace and a
    /// leading `#`. Alpha is not compared.
    #[must_use]
    pub fn is_equal_to_hex_string(&self, expected: &str) -> bool {
        let ours = self.to_hex_string();
        ours.trim_start_matches('#') == hex::normalize(expected)
    }

    /// True when [`Color::to_hex`] equals `expected`.
    #[must_use]
    pub fn is_equal_to_hex(&self, expected: u32) -> bool {
        self.to_hex() == expected
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_rgba8().hash(state);
    }
}
