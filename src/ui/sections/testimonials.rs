// SPDX-License-Identifier: MPL-2.0
//! Testimonials section: a row of quote cards sliding up into place.

use crate::content::Testimonial;
use crate::motion::timing::Pose;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sections::{pose_padding, section_header};
use crate::ui::styles::{self, faded};
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Horizontal,
    widget::{container, text, Column, Row},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    pub testimonials: &'static [Testimonial],
    pub heading_pose: Pose,
    pub card_poses: Vec<Pose>,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let scheme = ctx.scheme;
    let header = section_header(scheme, "What others say", "Testimonials.", ctx.heading_pose);

    let mut row = Row::new().spacing(spacing::LG);
    for (index, testimonial) in ctx.testimonials.iter().enumerate() {
        let pose = ctx
            .card_poses
            .get(index)
            .copied()
            .unwrap_or(Pose::VISIBLE);
        row = row.push(quote_card(scheme, testimonial, pose));
    }

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::XL)
        .push(header)
        .push(container(row).width(Length::Fill).align_x(Horizontal::Center))
        .into()
}

fn quote_card<'a, Message: 'a>(
    scheme: &ColorScheme,
    testimonial: &'static Testimonial,
    pose: Pose,
) -> Element<'a, Message> {
    let alpha = pose.opacity;
    let body = Column::new()
        .spacing(spacing::SM)
        .push(
            text("\u{201c}")
                .size(typography::DISPLAY)
                .color(faded(scheme.brand_primary, alpha)),
        )
        .push(
            text(testimonial.quote)
                .size(typography::BODY_LG)
                .color(faded(scheme.text_primary, alpha)),
        )
        .push(
            text(format!("@ {}", testimonial.name))
                .size(typography::BODY)
                .color(faded(scheme.brand_primary, alpha)),
        )
        .push(
            text(format!(
                "{} of {}",
                testimonial.designation, testimonial.company
            ))
            .size(typography::CAPTION)
            .color(faded(scheme.text_tertiary, alpha)),
        );

    container(
        container(body)
            .padding(spacing::XL)
            .width(Length::Fixed(sizing::CARD_WIDTH * 0.85))
            .style(styles::container::card(alpha)),
    )
    .padding(pose_padding(pose))
    .into()
}
