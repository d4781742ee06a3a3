// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven animation primitives.
//!
//! This module contains the two behaviors every page section is built from:
//!
//! - [`reveal`] - viewport-gated reveal animations with per-target state
//!   machines (hidden, animating in, visible, animating out)
//! - [`tabs`] - single-selection tab sets that replay the entrance animation
//!   of newly mounted content on every switch
//! - [`timing`] - shared easing, progress, and stagger arithmetic used by
//!   both
//!
//! The primitives are pure state: they consume scroll offsets and clock
//! instants and produce [`timing::Pose`] values. Rendering them is the view
//! layer's job, which keeps every transition unit-testable without a window.

pub mod reveal;
pub mod tabs;
pub mod timing;

pub use reveal::{PageRegion, ReplayPolicy, RevealConfig, RevealController, TargetId, TriggerBand};
pub use tabs::{SelectOutcome, TabEntry, TabSet, TabSwitcher};
pub use timing::{AnimationSpec, Easing, Pose, Progress, Stagger};
