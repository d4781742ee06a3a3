// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two subscriptions: the animation tick, active only while something on
//! the page is actually moving (dropping it cancels the timer the moment
//! the last animation settles), and a keyboard listener for closing the
//! blog reader with Escape.

use super::{App, Message};
use iced::keyboard::{self, key};
use iced::{time, Subscription};
use std::time::Duration;

/// Animation frame interval (~60 Hz).
const TICK_INTERVAL: Duration = Duration::from_millis(16);

pub(super) fn subscription(app: &App) -> Subscription<Message> {
    let tick = if app.needs_tick() {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    };

    let keys = keyboard::listen().filter_map(|event| match event {
        keyboard::Event::KeyPressed { key, .. } => match key {
            keyboard::Key::Named(key::Named::Escape) => Some(Message::EscapePressed),
            _ => None,
        },
        _ => None,
    });

    Subscription::batch([tick, keys])
}
