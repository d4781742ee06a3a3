// SPDX-License-Identifier: MPL-2.0
//! Page scroll state
//!
//! Tracks the single page scrollable's offset and viewport bounds and hands
//! them to the reveal controller. Also answers navigation queries (where to
//! scroll for a section, how far down the page the reader is).

use iced::widget::scrollable::AbsoluteOffset;
use iced::Rectangle;

/// Manages the page's scroll offset and viewport bounds.
#[derive(Debug, Clone)]
pub struct PageScroll {
    /// Current scroll offset
    pub offset: AbsoluteOffset,

    /// Previous scroll offset (for delta tracking)
    pub previous_offset: AbsoluteOffset,

    /// Current viewport bounds
    pub bounds: Option<Rectangle>,
}

impl Default for PageScroll {
    fn default() -> Self {
        Self {
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            previous_offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            bounds: None,
        }
    }
}

impl PageScroll {
    /// Records a scroll event.
    pub fn update(&mut self, bounds: Rectangle, offset: AbsoluteOffset) {
        self.previous_offset = self.offset;
        self.offset = offset;
        self.bounds = Some(bounds);
    }

    /// Height of the visible viewport, if a scroll event arrived yet.
    #[must_use]
    pub fn viewport_height(&self) -> Option<f32> {
        self.bounds.map(|b| b.height)
    }

    /// Vertical scroll position.
    #[must_use]
    pub fn y(&self) -> f32 {
        self.offset.y
    }

    /// Offset that puts `section_top` at the top of the viewport, clamped so
    /// the page never over-scrolls past `content_height`.
    #[must_use]
    pub fn offset_for(&self, section_top: f32, content_height: f32) -> AbsoluteOffset {
        let max_y = match self.bounds {
            Some(bounds) => (content_height - bounds.height).max(0.0),
            None => content_height.max(0.0),
        };
        AbsoluteOffset {
            x: 0.0,
            y: section_top.clamp(0.0, max_y),
        }
    }

    /// How far through the page the user has scrolled, in `[0, 1]`.
    #[must_use]
    pub fn scrolled_fraction(&self, content_height: f32) -> f32 {
        let Some(bounds) = self.bounds else {
            return 0.0;
        };
        let scrollable_range = content_height - bounds.height;
        if scrollable_range <= 0.0 {
            return 0.0;
        }
        (self.offset.y / scrollable_range).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::{Point, Size};

    fn bounds(width: f32, height: f32) -> Rectangle {
        Rectangle::new(Point::new(0.0, 0.0), Size::new(width, height))
    }

    #[test]
    fn default_scroll_has_zero_offset() {
        let state = PageScroll::default();
        assert_abs_diff_eq!(state.offset.y, 0.0);
        assert!(state.bounds.is_none());
        assert!(state.viewport_height().is_none());
    }

    #[test]
    fn update_tracks_previous_offset() {
        let mut state = PageScroll::default();
        let viewport = bounds(800.0, 600.0);

        state.update(viewport, AbsoluteOffset { x: 0.0, y: 150.0 });
        assert_abs_diff_eq!(state.previous_offset.y, 0.0);
        assert_abs_diff_eq!(state.y(), 150.0);

        state.update(viewport, AbsoluteOffset { x: 0.0, y: 300.0 });
        assert_abs_diff_eq!(state.previous_offset.y, 150.0);
        assert_abs_diff_eq!(state.y(), 300.0);
    }

    #[test]
    fn offset_for_clamps_to_scrollable_range() {
        let mut state = PageScroll::default();
        state.update(bounds(800.0, 600.0), AbsoluteOffset::default());

        // Section near the end of a 2000px page: clamp to 2000 - 600.
        let offset = state.offset_for(1800.0, 2000.0);
        assert_abs_diff_eq!(offset.y, 1400.0);

        let top = state.offset_for(-50.0, 2000.0);
        assert_abs_diff_eq!(top.y, 0.0);
    }

    #[test]
    fn scrolled_fraction_spans_zero_to_one() {
        let mut state = PageScroll::default();
        state.update(bounds(800.0, 600.0), AbsoluteOffset { x: 0.0, y: 700.0 });

        assert_abs_diff_eq!(state.scrolled_fraction(2000.0), 0.5);
        assert_abs_diff_eq!(state.scrolled_fraction(500.0), 0.0); // fits entirely
    }
}
