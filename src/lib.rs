//! # dynamic_color
//!
//! Immutable RGBA/HSLA color values with a hex codec, exact RGB↔HSL
//! conversion and a family of perceptual adjustments.
//!
//! ## Quick Start
//!
//! ```rust
//! use dynamic_color::prelude::*;
//!
//! let base = Color::from_hex_string("#c0392b");
//! let accent = base.lighter().saturated();
//! let hover = base.mixed_with(&Color::WHITE, 0.1);
//!
//! assert!(base.darkened_by(1.0).is_equal_to_hex_string("#000000"));
//! assert_eq!(Color::from_hex_string("#T5RD2Z"), Color::BLACK);
//! # let _ = (accent, hover);
//! ```
//!
//! ## Core Concepts
//!
//! - **Color**: an immutable value holding normalized RGBA channels and the
//!   matching HSLA view
//! - **Hex codec**: `#rrggbb` strings and `0xRRGGBB` integers; malformed
//!   strings fall back to opaque black
//! - **Adjustments**: lighten, darken, saturate, desaturate, rotate hue,
//!   invert, tint, shade and mix, each returning a new color
//! - **Equality**: colors compare on their 8-bit quantized channels
//!
//! Logging goes through the [`log`] facade; the crate never installs a logger.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod adjust;
pub mod color;
pub mod compare;
pub mod contrast;
pub mod gradient;
pub mod hex;
pub mod hsl;
pub mod sync;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::adjust::{DEFAULT_ADJUSTMENT, DEFAULT_MIX_WEIGHT, MixSpace};
    pub use crate::color::{Color, ColorTriplet, HslaComponents, RgbaComponents};
    pub use crate::contrast::ContrastLevel;
    pub use crate::gradient::Gradient;
    pub use crate::hex::HexParseError;
}

// Re-export key types at crate root
pub use adjust::MixSpace;
pub use color::{Color, ColorTriplet, HslaComponents, RgbaComponents};
pub use contrast::ContrastLevel;
pub use gradient::Gradient;
pub use hex::HexParseError;
