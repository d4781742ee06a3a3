// SPDX-License-Identifier: MPL-2.0
//! Static page content.
//!
//! Every section renders plain immutable records defined here and authored
//! in [`data`]. Records are configuration, not state: they are written once
//! and never mutated at runtime. Where a card renders differently per
//! content kind, the kind is an explicit enum tag ([`TimelineKind`],
//! [`BlogBlock`], [`TagTone`]) so the renderer matches on a variant instead
//! of probing for optional fields.

pub mod data;

use chrono::NaiveDate;
use std::fmt;

/// Identity and bio shown in the hero and about sections.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub bio: &'static [&'static str],
    pub stats: &'static [Stat],
}

/// One entry of the about-section stats row.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Which kind of timeline entry a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineKind {
    Education,
    Training,
}

impl TimelineKind {
    #[must_use]
    pub fn badge_label(self) -> &'static str {
        match self {
            TimelineKind::Education => "Education",
            TimelineKind::Training => "Training & Fellowship",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    InProgress,
    Completed,
}

impl EntryStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            EntryStatus::InProgress => "In Progress",
            EntryStatus::Completed => "Completed",
        }
    }
}

/// One card on the education & training timeline.
#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry {
    pub kind: TimelineKind,
    pub title: &'static str,
    pub institution: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    /// Optional bullet points; empty for entries without highlights.
    pub highlights: &'static [&'static str],
    pub glyph: &'static str,
    pub status: EntryStatus,
}

/// Accent tone of a project tag chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagTone {
    Blue,
    Green,
    Pink,
    Orange,
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectTag {
    pub name: &'static str,
    pub tone: TagTone,
}

/// One project card in the showcase.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [ProjectTag],
    pub source_url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Technology {
    pub name: &'static str,
    pub glyph: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub title: &'static str,
    pub organization: &'static str,
    pub year: &'static str,
    pub description: &'static str,
    pub glyph: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub designation: &'static str,
    pub company: &'static str,
}

/// Calendar date of a blog post, stored as plain fields so posts stay
/// `const`-constructible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl PostDate {
    /// Resolves to a chrono date. `None` for out-of-range field values.
    #[must_use]
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_naive() {
            Some(date) => write!(f, "{}", date.format("%B %-d, %Y")),
            None => write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day),
        }
    }
}

/// One block of a blog post body. Bodies are structured data, not markup
/// strings, so the reader renders them with ordinary widgets.
#[derive(Debug, Clone, Copy)]
pub enum BlogBlock {
    Heading(&'static str),
    Paragraph(&'static str),
    Bullets(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: PostDate,
    pub read_minutes: u32,
    pub category: &'static str,
    pub body: &'static [BlogBlock],
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub glyph: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_date_formats_like_a_byline() {
        let date = PostDate {
            year: 2024,
            month: 12,
            day: 15,
        };
        assert_eq!(date.to_string(), "December 15, 2024");
    }

    #[test]
    fn invalid_post_date_falls_back_to_iso_ish_format() {
        let date = PostDate {
            year: 2024,
            month: 13,
            day: 1,
        };
        assert!(date.to_naive().is_none());
        assert_eq!(date.to_string(), "2024-13-01");
    }

    #[test]
    fn timeline_kind_badges_are_distinct() {
        assert_ne!(
            TimelineKind::Education.badge_label(),
            TimelineKind::Training.badge_label()
        );
    }
}
