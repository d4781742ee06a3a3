// SPDX-License-Identifier: MPL-2.0
//! Education & training timeline.
//!
//! One merged, vertically threaded list: education and training entries
//! carry an explicit kind tag and alternate their slide-in side by index
//! parity, each card staggered behind the previous one.

use crate::content::{EntryStatus, TimelineEntry, TimelineKind};
use crate::motion::timing::Pose;
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::sections::{pose_padding, section_header};
use crate::ui::styles::{self, faded};
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, text, Column, Row, Space},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    pub entries: &'static [TimelineEntry],
    pub heading_pose: Pose,
    /// One pose per entry, staggered by the reveal controller.
    pub card_poses: Vec<Pose>,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let scheme = ctx.scheme;
    let header = section_header(
        scheme,
        "Academic & Professional Development",
        "Education & Training.",
        ctx.heading_pose,
    );

    let mut cards = Column::new().width(Length::Fill).spacing(spacing::LG);
    for (index, entry) in ctx.entries.iter().enumerate() {
        let pose = ctx
            .card_poses
            .get(index)
            .copied()
            .unwrap_or(Pose::VISIBLE);
        let card = timeline_card(scheme, entry, pose);

        // Alternate sides around the spine by index parity.
        let row = if index % 2 == 0 {
            Row::new()
                .push(card)
                .push(Space::new().width(Length::FillPortion(1)))
        } else {
            Row::new()
                .push(Space::new().width(Length::FillPortion(1)))
                .push(card)
        };
        cards = cards.push(row.width(Length::Fill));
    }

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::XL)
        .push(header)
        .push(cards)
        .into()
}

fn timeline_card<'a, Message: 'a>(
    scheme: &ColorScheme,
    entry: &'static TimelineEntry,
    pose: Pose,
) -> Element<'a, Message> {
    let alpha = pose.opacity;
    let kind_color = match entry.kind {
        TimelineKind::Education => scheme.info,
        TimelineKind::Training => scheme.success,
    };

    let badge = container(
        text(entry.kind.badge_label())
            .size(typography::CAPTION)
            .color(faded(kind_color, alpha)),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::container::badge(kind_color, alpha));

    let top_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(text(entry.glyph).size(sizing::ICON_MD))
        .push(
            Column::new().spacing(spacing::XXS).push(badge).push(
                text(entry.duration)
                    .size(typography::BODY_SM)
                    .color(faded(scheme.text_tertiary, alpha)),
            ),
        );

    let mut body = Column::new()
        .spacing(spacing::SM)
        .push(top_row)
        .push(
            text(entry.title)
                .size(typography::TITLE_MD)
                .color(faded(scheme.text_primary, alpha)),
        )
        .push(
            text(entry.institution)
                .size(typography::BODY)
                .color(faded(scheme.brand_primary, alpha)),
        )
        .push(
            text(entry.description)
                .size(typography::BODY)
                .color(faded(scheme.text_secondary, alpha)),
        );

    for highlight in entry.highlights {
        body = body.push(
            Row::new()
                .spacing(spacing::XS)
                .push(text("•").color(faded(scheme.accent, alpha)))
                .push(
                    text(*highlight)
                        .size(typography::BODY_SM)
                        .color(faded(scheme.text_secondary, alpha)),
                ),
        );
    }

    let status_color = match entry.status {
        EntryStatus::InProgress => scheme.info,
        EntryStatus::Completed => scheme.success,
    };
    body = body.push(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(
                text("●")
                    .size(typography::CAPTION)
                    .color(faded(status_color, alpha)),
            )
            .push(
                text(entry.status.label())
                    .size(typography::CAPTION)
                    .color(faded(status_color, alpha)),
            ),
    );

    container(
        container(body)
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::CARD_WIDTH + border::WIDTH_MD * 2.0))
            .style(styles::container::card(alpha)),
    )
    .padding(pose_padding(pose))
    .align_x(Horizontal::Center)
    .into()
}
