// SPDX-License-Identifier: MPL-2.0
//! About section: portrait medallion, bio paragraphs, and the stats row.
//!
//! The portrait slides in from the left while scaling up; the text column
//! follows from the right with a short delay. Both reverse on scroll-out.

use crate::content::Profile;
use crate::motion::timing::Pose;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::sections::{pose_padding, section_header};
use crate::ui::styles::faded;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, text, Column, Row},
    Background, Border, Element, Length,
};

pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    pub profile: Profile,
    pub heading_pose: Pose,
    pub photo_pose: Pose,
    pub text_pose: Pose,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let scheme = ctx.scheme;

    let header = section_header(scheme, "Get to know me", "About Me.", ctx.heading_pose);

    // Portrait medallion: a brand-ringed circle with a glyph stand-in. The
    // pose scale shrinks the medallion while it is off-pose.
    let portrait_size = sizing::PORTRAIT_SIZE * ctx.photo_pose.scale;
    let portrait = container(
        text("👨\u{200d}💻")
            .size(portrait_size * 0.35)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fixed(portrait_size))
    .height(Length::Fixed(portrait_size))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style({
        let ring = faded(scheme.brand_primary, ctx.photo_pose.opacity);
        let fill = faded(scheme.surface_secondary, ctx.photo_pose.opacity);
        move |_theme| container::Style {
            background: Some(Background::Color(fill)),
            border: Border {
                color: ring,
                width: 3.0,
                radius: radius::FULL.into(),
            },
            ..Default::default()
        }
    });

    let mut bio = Column::new().spacing(spacing::MD);
    for paragraph in ctx.profile.bio {
        bio = bio.push(
            text(*paragraph)
                .size(typography::BODY_LG)
                .color(faded(scheme.text_secondary, ctx.text_pose.opacity)),
        );
    }

    let mut stats = Row::new().spacing(spacing::XL);
    for stat in ctx.profile.stats {
        stats = stats.push(
            Column::new()
                .align_x(Horizontal::Center)
                .spacing(spacing::XXS)
                .push(
                    text(stat.value)
                        .size(typography::TITLE_MD)
                        .color(faded(scheme.accent, ctx.text_pose.opacity)),
                )
                .push(
                    text(stat.label)
                        .size(typography::BODY_SM)
                        .color(faded(scheme.text_tertiary, ctx.text_pose.opacity)),
                ),
        );
    }

    let body = Row::new()
        .spacing(spacing::XXL)
        .align_y(Vertical::Center)
        .push(container(portrait).padding(pose_padding(ctx.photo_pose)))
        .push(
            container(bio.push(stats))
                .width(Length::Fill)
                .padding(pose_padding(ctx.text_pose)),
        );

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::XL)
        .push(header)
        .push(body)
        .into()
}
