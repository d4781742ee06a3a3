// SPDX-License-Identifier: MPL-2.0
//! Blog section: post cards plus the full-post reader screen.
//!
//! Selecting a post swaps the whole page for the reader (the app's screen
//! enum); closing it returns to the page. Post bodies are tagged blocks, so
//! the reader renders them with plain text widgets.

use crate::content::{BlogBlock, BlogPost};
use crate::motion::timing::Pose;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sections::{pose_padding, section_header};
use crate::ui::styles::{self, faded};
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Horizontal,
    widget::{button, container, scrollable, text, Column, Row},
    Element, Length,
};

/// Messages emitted by the blog section and the reader.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the post at this index in the reader.
    Open(usize),
    /// Leave the reader, back to the page.
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenReader(usize),
    CloseReader,
}

/// Process a blog message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Open(index) => Event::OpenReader(index),
        Message::Close => Event::CloseReader,
    }
}

pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    pub posts: &'static [BlogPost],
    pub heading_pose: Pose,
    pub card_poses: Vec<Pose>,
}

/// Render the post card list shown on the page.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let scheme = ctx.scheme;
    let header = section_header(scheme, "Thoughts & Insights", "Blog.", ctx.heading_pose);

    let mut row = Row::new().spacing(spacing::LG);
    for (index, post) in ctx.posts.iter().enumerate() {
        let pose = ctx
            .card_poses
            .get(index)
            .copied()
            .unwrap_or(Pose::VISIBLE);
        row = row.push(post_card(scheme, post, index, pose));
    }

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::XL)
        .push(header)
        .push(container(row).width(Length::Fill).align_x(Horizontal::Center))
        .into()
}

fn post_card<'a>(
    scheme: &ColorScheme,
    post: &'static BlogPost,
    index: usize,
    pose: Pose,
) -> Element<'a, Message> {
    let alpha = pose.opacity;

    let category = container(
        text(post.category)
            .size(typography::CAPTION)
            .color(faded(scheme.accent, alpha)),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::container::badge(scheme.accent, alpha));

    let byline = text(format!("{} • {} min read", post.date, post.read_minutes))
        .size(typography::CAPTION)
        .color(faded(scheme.text_tertiary, alpha));

    let body = Column::new()
        .spacing(spacing::SM)
        .push(category)
        .push(byline)
        .push(
            text(post.title)
                .size(typography::TITLE_SM)
                .color(faded(scheme.text_primary, alpha)),
        )
        .push(
            text(post.excerpt)
                .size(typography::BODY)
                .color(faded(scheme.text_secondary, alpha)),
        )
        .push(
            button(text("Read More →").size(typography::BODY))
                .style(styles::button::link(faded(scheme.brand_primary, alpha)))
                .on_press(Message::Open(index))
                .padding(0.0),
        );

    container(
        container(body)
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::CARD_WIDTH * 0.85))
            .style(styles::container::card(alpha)),
    )
    .padding(pose_padding(pose))
    .into()
}

/// Render the full-post reader screen.
pub fn reader<'a>(scheme: &'a ColorScheme, post: &'static BlogPost) -> Element<'a, Message> {
    let close = button(text("✕ Close").size(typography::BODY))
        .style(styles::button::link(scheme.text_secondary))
        .on_press(Message::Close);

    let byline = text(format!("{} • {} min read", post.date, post.read_minutes))
        .size(typography::BODY_SM)
        .color(scheme.text_tertiary);

    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(close)
        .push(
            container(
                text(post.category)
                    .size(typography::CAPTION)
                    .color(scheme.accent),
            )
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::badge(scheme.accent, 1.0)),
        )
        .push(
            text(post.title)
                .size(typography::TITLE_LG)
                .color(scheme.text_primary),
        )
        .push(byline);

    for block in post.body {
        column = column.push(render_block(scheme, block));
    }

    let sheet = container(column)
        .padding(spacing::XXL)
        .width(Length::Fixed(sizing::READER_WIDTH))
        .style(styles::container::panel);

    scrollable(
        container(sheet)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(spacing::XL),
    )
    .into()
}

fn render_block<'a>(scheme: &'a ColorScheme, block: &'static BlogBlock) -> Element<'a, Message> {
    match block {
        BlogBlock::Heading(heading) => text(*heading)
            .size(typography::TITLE_MD)
            .color(scheme.text_primary)
            .into(),
        BlogBlock::Paragraph(paragraph) => text(*paragraph)
            .size(typography::BODY_LG)
            .color(scheme.text_secondary)
            .into(),
        BlogBlock::Bullets(items) => {
            let mut list = Column::new().spacing(spacing::XS);
            for item in *items {
                list = list.push(
                    Row::new()
                        .spacing(spacing::XS)
                        .push(text("•").color(scheme.accent))
                        .push(
                            text(*item)
                                .size(typography::BODY_LG)
                                .color(scheme.text_secondary),
                        ),
                );
            }
            list.into()
        }
    }
}
