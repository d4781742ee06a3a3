// SPDX-License-Identifier: MPL-2.0
//! Hero section: name, headline, and the rotating desktop rig.

use crate::content::Profile;
use crate::scene::MeshGeometry;
use crate::motion::timing::Pose;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sections::pose_padding;
use crate::ui::styles::faded;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::DesktopRig;
use iced::{
    alignment::Horizontal,
    widget::{container, text, Column},
    Element, Length,
};

/// Contextual data needed to render the hero.
pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    pub profile: Profile,
    /// Sanitized rig mesh; `None` renders the hero without the canvas.
    pub rig: Option<&'a MeshGeometry>,
    /// Current rig rotation from the app tick.
    pub spin: f32,
    pub pose: Pose,
}

/// Render the hero section.
pub fn view<'a, Message: 'static>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let scheme = ctx.scheme;
    let alpha = ctx.pose.opacity;

    let greeting = text(format!("Hi, I'm {}", ctx.profile.name))
        .size(typography::DISPLAY)
        .color(faded(scheme.brand_primary, alpha));
    let headline = text(ctx.profile.headline)
        .size(typography::TITLE_SM)
        .color(faded(scheme.text_primary, alpha));
    let tagline = text(ctx.profile.tagline)
        .size(typography::BODY_LG)
        .color(faded(scheme.text_secondary, alpha));

    let mut column = Column::new()
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .spacing(spacing::MD)
        .push(greeting)
        .push(headline)
        .push(tagline);

    if let Some(rig) = ctx.rig {
        let canvas = DesktopRig::new(rig, faded(scheme.accent, alpha), ctx.spin).into_element();
        column = column.push(
            container(canvas)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::HERO_CANVAS_HEIGHT)),
        );
    }

    column = column.push(
        text("scroll ↓")
            .size(typography::CAPTION)
            .color(faded(scheme.text_tertiary, alpha)),
    );

    container(column)
        .width(Length::Fill)
        .padding(pose_padding(ctx.pose))
        .into()
}
