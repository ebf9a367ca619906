//! Multi-stop gradients built on [`Color::mixed_in`].
//!
//! Stops are spaced evenly over `[0, 1]`; picking a color between two stops
//! mixes those two.
//!
//! ```
//! use dynamic_color::{Color, Gradient};
//!
//! let gradient = Gradient::new(vec![Color::BLACK, Color::WHITE]);
//! let steps: Vec<String> = gradient.palette(3).iter().map(Color::to_hex_string).collect();
//! assert_eq!(steps, ["#000000", "#7f7f7f", "#ffffff"]);
//! ```

use crate::adjust::MixSpace;
use crate::color::Color;
use crate::hsl::clamp_unit;

/// An ordered list of color stops.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Gradient {
    colors: Vec<Color>,
    space: MixSpace,
}

impl Gradient {
    /// Create a gradient that mixes in RGB.
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            colors,
            space: MixSpace::Rgb,
        }
    }

    /// Set the space used to mix neighbouring stops.
    #[must_use]
    pub fn space(mut self, space: MixSpace) -> Self {
        self.space = space;
        self
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Color at `scale` (clamped to `[0, 1]`).
    ///
    /// An empty gradient is black; a single stop is returned as is.
    #[must_use]
    pub fn pick_color(&self, scale: f64) -> Color {
        match self.colors.as_slice() {
            [] => Color::BLACK,
            [only] => *only,
            colors => {
                #[expect(clippy::cast_precision_loss, reason = "stop counts are small")]
                let segments = (colors.len() - 1) as f64;
                let position = clamp_unit(scale) * segments;
                #[expect(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "position is in [0, segments]"
                )]
                let index = (position.floor() as usize).min(colors.len() - 2);
                #[expect(clippy::cast_precision_loss, reason = "stop counts are small")]
                let weight = position - index as f64;
                colors[index].mixed_in(&colors[index + 1], weight, self.space)
            }
        }
    }

    /// `amount` evenly spaced samples, including both ends.
    #[must_use]
    pub fn palette(&self, amount: usize) -> Vec<Color> {
        match amount {
            0 => Vec::new(),
            1 => vec![self.pick_color(0.0)],
            _ => {
                #[expect(clippy::cast_precision_loss, reason = "sample counts are small")]
                let step = 1.0 / (amount - 1) as f64;
                (0..amount)
                    .map(|i| {
                        #[expect(clippy::cast_precision_loss, reason = "sample counts are small")]
                        let scale = i as f64 * step;
                        self.pick_color(scale)
                    })
                    .collect()
            }
        }
    }
}

impl FromIterator<Color> for Gradient {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
