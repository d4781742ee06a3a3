// SPDX-License-Identifier: MPL-2.0
//! Contact section: social links and email over the starfield, with the
//! rotating globe alongside.

use crate::content::SocialLink;
use crate::motion::timing::Pose;
use crate::scene::MeshGeometry;
use crate::ui::design_tokens::{layout, spacing, typography};
use crate::ui::sections::{pose_padding, section_header};
use crate::ui::styles::{self, faded};
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::{Globe, Starfield};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, stack, text, Column, Row},
    Element, Length,
};

/// Messages emitted by the contact section.
#[derive(Debug, Clone)]
pub enum Message {
    OpenLink(&'static str),
    SendEmail,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenUrl(String),
}

/// Process a contact message and return the corresponding event.
pub fn update(message: Message, email: &str) -> Event {
    match message {
        Message::OpenLink(url) => Event::OpenUrl(url.to_owned()),
        Message::SendEmail => Event::OpenUrl(format!("mailto:{email}")),
    }
}

pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    pub links: &'static [SocialLink],
    pub email: &'static str,
    /// Sanitized globe mesh and its longitudes-per-ring count.
    pub globe: Option<(&'a MeshGeometry, usize)>,
    /// Sanitized starfield mesh drawn behind the section.
    pub stars: Option<&'a MeshGeometry>,
    pub spin: f32,
    pub pose: Pose,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let scheme = ctx.scheme;
    let alpha = ctx.pose.opacity;

    let header = section_header(scheme, "Get in touch", "Contact.", ctx.pose);

    let mut links = Row::new().spacing(spacing::LG).align_y(Vertical::Center);
    for link in ctx.links {
        links = links.push(
            button(
                Row::new()
                    .spacing(spacing::XS)
                    .push(text(link.glyph).size(typography::BODY_LG))
                    .push(text(link.label).size(typography::BODY)),
            )
            .style(styles::button::link(faded(scheme.brand_primary, alpha)))
            .on_press(Message::OpenLink(link.url)),
        );
    }

    let email_button = button(text(ctx.email).size(typography::BODY_LG))
        .style(styles::button::primary)
        .on_press(Message::SendEmail)
        .padding([spacing::SM, spacing::XL]);

    let mut info = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(
            text("Have a project in mind, or just want to say hello?")
                .size(typography::BODY_LG)
                .color(faded(scheme.text_secondary, alpha)),
        )
        .push(email_button)
        .push(links);

    let mut body = Row::new()
        .spacing(spacing::XXL)
        .align_y(Vertical::Center)
        .width(Length::Fill);
    if let Some((globe_mesh, lon_steps)) = ctx.globe {
        body = body.push(
            Globe::new(
                globe_mesh,
                lon_steps,
                faded(scheme.brand_primary, alpha),
                ctx.spin,
            )
            .into_element(),
        );
    }
    info = info.width(Length::Fill);
    body = body.push(info);

    let section = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XL)
        .push(header)
        .push(container(body).padding(pose_padding(ctx.pose)));

    // Starfield behind the section content.
    match ctx.stars {
        Some(stars) => {
            let backdrop = Starfield::new(stars, faded(scheme.text_tertiary, alpha), ctx.spin * 0.3)
                .into_element();
            stack([backdrop, section.into()])
                .width(Length::Fill)
                .height(Length::Fixed(
                    layout::SECTION_HEADER_HEIGHT + layout::CONTACT_BODY_HEIGHT,
                ))
                .into()
        }
        None => section.into(),
    }
}
