// SPDX-License-Identifier: MPL-2.0
//! Footer: a slim social icon row closing the page.

use crate::content::SocialLink;
use crate::ui::design_tokens::{layout, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, text, Row},
    Element, Length,
};

/// Messages emitted by the footer.
#[derive(Debug, Clone)]
pub enum Message {
    OpenLink(&'static str),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenUrl(&'static str),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::OpenLink(url) => Event::OpenUrl(url),
    }
}

pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    pub links: &'static [SocialLink],
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::LG).align_y(Vertical::Center);
    for link in ctx.links {
        row = row.push(
            button(text(link.glyph).size(typography::BODY_LG))
                .style(styles::button::link(ctx.scheme.text_secondary))
                .on_press(Message::OpenLink(link.url)),
        );
    }

    container(row)
        .width(Length::Fill)
        .height(Length::Fixed(layout::FOOTER_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::separator)
        .into()
}
