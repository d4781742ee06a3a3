// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (hero call-to-action, contact).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Tab strip button. The active tab carries the brand gradient color; the
/// rest stay quiet until hovered.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette_ext = theme.extended_palette();
        if active {
            button::Style {
                background: Some(Background::Color(palette::PRIMARY_500)),
                text_color: WHITE,
                border: Border {
                    radius: radius::MD.into(),
                    ..Default::default()
                },
                shadow: shadow::SM,
                snap: true,
            }
        } else {
            let (background, text_color) = match status {
                button::Status::Hovered | button::Status::Pressed => (
                    Some(Background::Color(palette_ext.background.weak.color)),
                    palette_ext.background.base.text,
                ),
                _ => (None, palette_ext.background.weak.text),
            };
            button::Style {
                background,
                text_color,
                border: Border {
                    radius: radius::MD.into(),
                    ..Default::default()
                },
                shadow: shadow::NONE,
                snap: true,
            }
        }
    }
}

/// Borderless text button tinted with `color` (read-more links, social
/// icons, nav entries).
pub fn link(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => palette::ACCENT_400,
            _ => color,
        };
        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
