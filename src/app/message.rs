// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::sections::{blog, contact, footer, showcase};
use crate::ui::theming::ThemeMode;
use iced::widget::scrollable;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Showcase(showcase::Message),
    Blog(blog::Message),
    Contact(contact::Message),
    Footer(footer::Message),
    /// The page scrollable moved; drives the reveal controller.
    PageScrolled(scrollable::Viewport),
    /// Periodic animation clock while anything is animating.
    Tick(Instant),
    /// Escape closes the blog reader.
    EscapePressed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional theme override (`light`/`dark`/`system`), taking precedence
    /// over the persisted setting for this run.
    pub theme: Option<ThemeMode>,
    /// Skip animations for this run, regardless of the persisted setting.
    pub reduced_motion: bool,
}
