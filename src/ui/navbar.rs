// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for page-level navigation.
//!
//! A fixed bar above the scrollable page: the site name, one link per
//! section, and the theme toggle. The active section follows the scroll
//! position.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::sections::SectionId;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    widget::{button, container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    pub site_name: &'a str,
    /// Section currently under the viewport top, highlighted in the bar.
    pub active: SectionId,
    pub dark_mode: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    GoTo(SectionId),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ScrollTo(SectionId),
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::GoTo(section) => Event::ScrollTo(section),
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let name = Text::new(ctx.site_name.to_owned())
        .size(typography::TITLE_MD)
        .color(ctx.scheme.brand_primary);

    let mut links = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    for section in SectionId::ALL {
        let color = if section == ctx.active {
            ctx.scheme.brand_primary
        } else {
            ctx.scheme.text_secondary
        };
        links = links.push(
            button(Text::new(section.label()).size(typography::BODY))
                .style(styles::button::link(color))
                .on_press(Message::GoTo(section))
                .padding([spacing::XXS, spacing::XS]),
        );
    }

    let theme_toggle = button(
        Text::new(if ctx.dark_mode { "☀" } else { "☾" }).size(typography::BODY_LG),
    )
    .style(styles::button::link(ctx.scheme.text_secondary))
    .on_press(Message::ToggleTheme)
    .padding([spacing::XXS, spacing::XS]);

    let bar = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(name)
        .push(Space::new().width(Length::Fill))
        .push(links)
        .push(theme_toggle);

    container(bar)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}
