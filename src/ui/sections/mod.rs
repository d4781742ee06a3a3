// SPDX-License-Identifier: MPL-2.0
//! Page sections.
//!
//! The page is a fixed column: hero, about, timeline, showcase,
//! testimonials, blog, contact, footer. [`PageMap`] computes each section's
//! vertical extent from the layout tokens and the content counts, which is
//! what the reveal controller's trigger bands evaluate against. Section
//! `view` functions are pure renderers over static content plus the poses
//! the controller hands them.

pub mod about;
pub mod blog;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod showcase;
pub mod testimonials;
pub mod timeline;

use crate::content::data;
use crate::motion::timing::Pose;
use crate::motion::PageRegion;
use crate::ui::design_tokens::layout;
use iced::Padding;

/// The page's sections, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    About,
    Timeline,
    Showcase,
    Testimonials,
    Blog,
    Contact,
}

impl SectionId {
    /// All sections in display order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Timeline,
        SectionId::Showcase,
        SectionId::Testimonials,
        SectionId::Blog,
        SectionId::Contact,
    ];

    /// Navbar label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Timeline => "Education",
            SectionId::Showcase => "Portfolio",
            SectionId::Testimonials => "Testimonials",
            SectionId::Blog => "Blog",
            SectionId::Contact => "Contact",
        }
    }
}

/// Vertical extents of every section, computed once at startup.
#[derive(Debug, Clone)]
pub struct PageMap {
    regions: [(SectionId, PageRegion); 7],
    content_height: f32,
}

impl PageMap {
    #[must_use]
    pub fn new() -> Self {
        let mut cursor = 0.0f32;
        let mut place = |height: f32| {
            let region = PageRegion::new(cursor, height);
            cursor += height + layout::SECTION_GAP;
            region
        };

        let header = layout::SECTION_HEADER_HEIGHT;
        let regions = [
            (SectionId::Hero, place(layout::HERO_HEIGHT)),
            (SectionId::About, place(header + layout::ABOUT_BODY_HEIGHT)),
            (
                SectionId::Timeline,
                place(header + data::TIMELINE.len() as f32 * layout::TIMELINE_CARD_HEIGHT),
            ),
            (
                SectionId::Showcase,
                place(header + layout::SHOWCASE_BODY_HEIGHT),
            ),
            (
                SectionId::Testimonials,
                place(header + layout::TESTIMONIAL_CARD_HEIGHT),
            ),
            (SectionId::Blog, place(header + layout::BLOG_CARD_HEIGHT)),
            (
                SectionId::Contact,
                place(header + layout::CONTACT_BODY_HEIGHT),
            ),
        ];
        // The footer closes the page without a reveal target of its own.
        let content_height = cursor + layout::FOOTER_HEIGHT;

        Self {
            regions,
            content_height,
        }
    }

    #[must_use]
    pub fn region(&self, id: SectionId) -> PageRegion {
        self.regions
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, region)| *region)
            .unwrap_or(PageRegion::new(0.0, 0.0))
    }

    /// Total page height, footer included.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// The section whose region contains the given scroll offset, for the
    /// navbar's active highlight.
    #[must_use]
    pub fn section_at(&self, offset: f32) -> SectionId {
        self.regions
            .iter()
            .rev()
            .find(|(_, region)| region.top <= offset + layout::NAVBAR_HEIGHT)
            .map(|(section, _)| *section)
            .unwrap_or(SectionId::Hero)
    }
}

impl Default for PageMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Standard section header: centered sub-text above a large heading, both
/// rendered at the heading target's pose.
pub(crate) fn section_header<'a, Message: 'a>(
    scheme: &crate::ui::theming::ColorScheme,
    sub_text: &'static str,
    heading: &'static str,
    pose: Pose,
) -> iced::Element<'a, Message> {
    use crate::ui::design_tokens::{spacing, typography};
    use crate::ui::styles::faded;
    use iced::alignment::Horizontal;
    use iced::widget::{container, text, Column};
    use iced::Length;

    let column = Column::new()
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .spacing(spacing::XS)
        .push(
            text(sub_text)
                .size(typography::BODY)
                .color(faded(scheme.text_tertiary, pose.opacity)),
        )
        .push(
            text(heading)
                .size(typography::TITLE_LG)
                .color(faded(scheme.text_primary, pose.opacity)),
        );

    container(column)
        .width(Length::Fill)
        .padding(pose_padding(pose))
        .into()
}

/// Translates a reveal pose into padding, the poor renderer's transform:
/// content mid-reveal is nudged off its settled position by the pose
/// offsets.
#[must_use]
pub fn pose_padding(pose: Pose) -> Padding {
    Padding {
        top: pose.offset_y.max(0.0),
        right: (-pose.offset_x).max(0.0),
        bottom: (-pose.offset_y).max(0.0),
        left: pose.offset_x.max(0.0),
    }
}
