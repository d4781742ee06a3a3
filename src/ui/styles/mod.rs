// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.
//!
//! Reveal poses feed in as plain alpha factors: a style function that takes
//! an `alpha` renders the same surface at the pose's current opacity, which
//! is how the animation reaches widgets that have no transform of their own.

pub mod button;
pub mod container;

pub use button::{link as button_link, primary as button_primary, tab as button_tab};
pub use container::{badge, card, panel};

use iced::Color;

/// Scales a color's alpha channel, clamping the factor to `[0, 1]`.
#[must_use]
pub fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faded_scales_and_clamps_alpha() {
        let color = Color::from_rgba(0.5, 0.5, 0.5, 0.8);
        assert_eq!(faded(color, 0.5).a, 0.4);
        assert_eq!(faded(color, 2.0).a, 0.8);
        assert_eq!(faded(color, -1.0).a, 0.0);
    }
}
