// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page
//!
//! - [`sections`] - The page sections (hero through footer) plus the page
//!   geometry map the reveal bands are computed from
//! - [`navbar`] - Fixed navigation bar with section links and theme toggle
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state management (page scroll)
//! - [`widgets`] - Custom Iced canvas widgets (desktop rig, globe, starfield)
//! - [`styles`] - Centralized styling (buttons, containers, pose fading)
//! - [`design_tokens`] - Design system constants (colors, spacing, layout)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod navbar;
pub mod sections;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
