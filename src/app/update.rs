// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function and the specialized
//! handlers for scroll, tick, navigation, and the section components.

use super::{page_scroll_id, scheme_for, App, Message, Screen};
use crate::config;
use crate::content::data;
use crate::ui::navbar;
use crate::ui::sections::{blog, contact, footer, showcase, SectionId};
use iced::widget::operation;
use iced::Task;
use std::time::{Duration, Instant};

/// Canvas spin rate in radians per second.
const SPIN_RATE: f32 = 0.6;

/// Upper bound on a single tick's elapsed time, so a suspended process does
/// not fast-forward the spin on resume.
const MAX_TICK_DELTA: Duration = Duration::from_millis(100);

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => handle_navbar(app, message),
        Message::Showcase(message) => {
            match showcase::update(&mut app.showcase, message, app.now) {
                showcase::Event::None => {}
                showcase::Event::OpenUrl(url) => open_url(url.to_string()),
            }
            Task::none()
        }
        Message::Blog(message) => {
            match blog::update(message) {
                blog::Event::OpenReader(index) => {
                    if index < data::BLOG_POSTS.len() {
                        app.screen = Screen::Reader(index);
                    } else {
                        // Unreachable through the UI; keep the page rather
                        // than show an empty reader.
                        tracing::warn!(index, "ignoring out-of-range blog post");
                    }
                }
                blog::Event::CloseReader => app.screen = Screen::Page,
            }
            Task::none()
        }
        Message::Contact(message) => {
            let contact::Event::OpenUrl(url) = contact::update(message, data::CONTACT_EMAIL);
            open_url(url);
            Task::none()
        }
        Message::Footer(message) => {
            let footer::Event::OpenUrl(url) = footer::update(message);
            open_url(url.to_owned());
            Task::none()
        }
        Message::PageScrolled(viewport) => {
            app.scroll
                .update(viewport.bounds(), viewport.absolute_offset());
            app.reveal
                .set_viewport(app.scroll.y(), viewport.bounds().height, app.now);
            Task::none()
        }
        Message::Tick(now) => {
            handle_tick(app, now);
            Task::none()
        }
        Message::EscapePressed => {
            if matches!(app.screen, Screen::Reader(_)) {
                app.screen = Screen::Page;
            }
            Task::none()
        }
    }
}

fn handle_navbar(app: &mut App, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        navbar::Event::ScrollTo(section) => scroll_to(app, section),
        navbar::Event::ToggleTheme => {
            app.theme_mode = app.theme_mode.toggled();
            app.scheme = scheme_for(app.theme_mode);
            app.config.general.theme_mode = app.theme_mode;
            if let Err(err) = config::save(&app.config) {
                tracing::warn!(%err, "could not persist theme preference");
            }
            Task::none()
        }
    }
}

/// Scrolls the page so `section` starts right under the navbar. The reveal
/// controller picks the motion up through the resulting scroll events.
fn scroll_to(app: &App, section: SectionId) -> Task<Message> {
    let region = app.page_map.region(section);
    let offset = app
        .scroll
        .offset_for(region.top, app.page_map.content_height());
    operation::scroll_to(page_scroll_id(), offset)
}

fn handle_tick(app: &mut App, now: Instant) {
    let delta = now
        .saturating_duration_since(app.last_tick)
        .min(MAX_TICK_DELTA);
    app.last_tick = now;
    app.now = now;

    app.spin += delta.as_secs_f32() * SPIN_RATE;
    app.reveal.tick(now);
}

fn open_url(url: String) {
    if let Err(err) = open::that(&url) {
        tracing::warn!(%err, %url, "could not open link in browser");
    }
}
