// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders either the portfolio page (navbar + scrollable section column)
//! or the blog reader, based on the active screen. All poses handed to the
//! sections are read here from the reveal controller and the tab switcher.

use super::{page_scroll_id, App, Message, Screen};
use crate::content::data;
use crate::motion::timing::Pose;
use crate::scene::AssetId;
use crate::scene::models::GLOBE_LON_STEPS;
use crate::ui::design_tokens::layout;
use crate::ui::navbar;
use crate::ui::sections::{
    about, blog, contact, footer, hero, showcase, testimonials, timeline,
};
use iced::{
    alignment::Horizontal,
    widget::{container, scrollable, Column},
    Element, Length,
};

/// Renders the current application view based on the active screen.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    match app.screen {
        Screen::Reader(index) => match data::BLOG_POSTS.get(index) {
            Some(post) => blog::reader(&app.scheme, post).map(Message::Blog),
            // Guarded at update time; fall back to the page.
            None => view_page(app),
        },
        Screen::Page => view_page(app),
    }
}

fn view_page(app: &App) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        scheme: &app.scheme,
        site_name: data::PROFILE.name,
        active: app.page_map.section_at(app.scroll.y()),
        dark_mode: app.theme_mode.is_dark(),
    })
    .map(Message::Navbar);

    let sections = Column::new()
        .width(Length::Fixed(layout::CONTENT_WIDTH))
        .spacing(layout::SECTION_GAP)
        .push(view_hero(app))
        .push(view_about(app))
        .push(view_timeline(app))
        .push(view_showcase(app))
        .push(view_testimonials(app))
        .push(view_blog(app))
        .push(view_contact(app))
        .push(
            footer::view(footer::ViewContext {
                scheme: &app.scheme,
                links: data::SOCIAL_LINKS,
            })
            .map(Message::Footer),
        );

    let page = scrollable(
        container(sections)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .id(page_scroll_id())
    .on_scroll(Message::PageScrolled)
    .width(Length::Fill)
    .height(Length::Fill);

    Column::new()
        .push(navbar_view)
        .push(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_hero(app: &App) -> Element<'_, Message> {
    hero::view(hero::ViewContext {
        scheme: &app.scheme,
        profile: data::PROFILE,
        rig: app
            .assets
            .get(AssetId::DesktopRig)
            .map(|asset| &asset.geometry),
        spin: app.spin,
        pose: app.reveal.pose(app.targets.hero),
    })
}

fn view_about(app: &App) -> Element<'_, Message> {
    about::view(about::ViewContext {
        scheme: &app.scheme,
        profile: data::PROFILE,
        heading_pose: app.reveal.pose(app.targets.about_heading),
        photo_pose: app.reveal.pose(app.targets.about_photo),
        text_pose: app.reveal.pose(app.targets.about_text),
    })
}

fn view_timeline(app: &App) -> Element<'_, Message> {
    // Cards alternate their slide-in side: odd indices mirror the hidden
    // offset so they approach from the right.
    let card_poses: Vec<Pose> = (0..data::TIMELINE.len())
        .map(|index| {
            let mut pose = app.reveal.child_pose(app.targets.timeline_cards, index);
            if index % 2 == 1 {
                pose.offset_x = -pose.offset_x;
            }
            pose
        })
        .collect();

    timeline::view(timeline::ViewContext {
        scheme: &app.scheme,
        entries: data::TIMELINE,
        heading_pose: app.reveal.pose(app.targets.timeline_heading),
        card_poses,
    })
}

fn view_showcase(app: &App) -> Element<'_, Message> {
    showcase::view(showcase::ViewContext {
        scheme: &app.scheme,
        switcher: &app.showcase,
        heading_pose: app.reveal.pose(app.targets.showcase_heading),
        tabs_pose: app.reveal.pose(app.targets.showcase_tabs),
        now: app.now,
    })
    .map(Message::Showcase)
}

fn view_testimonials(app: &App) -> Element<'_, Message> {
    let card_poses: Vec<Pose> = (0..data::TESTIMONIALS.len())
        .map(|index| app.reveal.child_pose(app.targets.testimonial_cards, index))
        .collect();

    testimonials::view(testimonials::ViewContext {
        scheme: &app.scheme,
        testimonials: data::TESTIMONIALS,
        heading_pose: app.reveal.pose(app.targets.testimonials_heading),
        card_poses,
    })
}

fn view_blog(app: &App) -> Element<'_, Message> {
    let card_poses: Vec<Pose> = (0..data::BLOG_POSTS.len())
        .map(|index| app.reveal.child_pose(app.targets.blog_cards, index))
        .collect();

    blog::view(blog::ViewContext {
        scheme: &app.scheme,
        posts: data::BLOG_POSTS,
        heading_pose: app.reveal.pose(app.targets.blog_heading),
        card_poses,
    })
    .map(Message::Blog)
}

fn view_contact(app: &App) -> Element<'_, Message> {
    contact::view(contact::ViewContext {
        scheme: &app.scheme,
        links: data::SOCIAL_LINKS,
        email: data::CONTACT_EMAIL,
        globe: app
            .assets
            .get(AssetId::Globe)
            .map(|asset| (&asset.geometry, GLOBE_LON_STEPS)),
        stars: app
            .assets
            .get(AssetId::Starfield)
            .map(|asset| &asset.geometry),
        spin: app.spin,
        pose: app.reveal.pose(app.targets.contact),
    })
    .map(Message::Contact)
}
