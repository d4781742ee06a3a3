// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::faded;
use crate::ui::design_tokens::{border, opacity, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the navbar and the blog reader.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Content card surface rendered at a reveal pose's opacity. `alpha` of 1.0
/// is the settled card; lower values are the card mid-reveal.
pub fn card(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let base = palette.background.weak.color;

        container::Style {
            background: Some(Background::Color(faded(base, alpha))),
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            ..Default::default()
        }
    }
}

/// Small pill badge (tab glyphs, post categories, timeline kinds).
pub fn badge(color: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..color
            },
            alpha,
        ))),
        text_color: Some(faded(color, alpha)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Thin separator line above the footer and between reader blocks.
pub fn separator(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette.background.strong.color
        })),
        border: Border {
            width: border::WIDTH_SM,
            ..Default::default()
        },
        ..Default::default()
    }
}
