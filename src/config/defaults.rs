// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Motion**: Animation speed bounds and reduced-motion default
//! - **Window**: Default and minimum window geometry

use crate::ui::theming::ThemeMode;

// =============================================================================
// Motion
// =============================================================================

/// Duration multiplier applied to every reveal and entrance run.
pub const DEFAULT_SPEED_FACTOR: f32 = 1.0;
pub const MIN_SPEED_FACTOR: f32 = 0.25;
pub const MAX_SPEED_FACTOR: f32 = 4.0;

/// Reduced motion is opt-in; animations play by default.
pub const DEFAULT_REDUCED_MOTION: bool = false;

pub fn default_speed_factor() -> Option<f32> {
    Some(DEFAULT_SPEED_FACTOR)
}

pub fn default_reduced_motion() -> Option<bool> {
    Some(DEFAULT_REDUCED_MOTION)
}

pub fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

// =============================================================================
// Window
// =============================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 820;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

// Compile-time sanity for the bounds the config clamps against.
const _: () = {
    assert!(MIN_SPEED_FACTOR < DEFAULT_SPEED_FACTOR);
    assert!(DEFAULT_SPEED_FACTOR < MAX_SPEED_FACTOR);
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};
