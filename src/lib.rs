// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal portfolio desktop app built with the Iced GUI
//! framework.
//!
//! The page is a single scrollable column of sections whose entrances are
//! driven by a viewport-gated reveal controller, with a tabbed showcase and
//! decorative canvases rendering procedurally built, sanitized mesh
//! geometry.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.2.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod icon;
pub mod motion;
pub mod scene;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
