// SPDX-License-Identifier: MPL-2.0
//! Tabbed portfolio showcase: projects, skills & tools, certifications.
//!
//! The tab strip itself is a reveal target; the content under it is driven
//! by the tab switcher's entrance run, which restarts every time the active
//! tab changes. Only the active tab's content is mounted.

use crate::content::{data, Certification, Project, SkillCategory, TagTone, Technology};
use crate::motion::tabs::{SelectOutcome, TabEntry, TabSet, TabSwitcher};
use crate::motion::timing::Pose;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sections::{pose_padding, section_header};
use crate::ui::styles::{self, faded};
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, text, Column, Row},
    Element, Length,
};
use std::time::Instant;

/// The three content panels of the showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseTab {
    Projects,
    Skills,
    Certifications,
}

/// The fixed tab set, projects first (and therefore initially active).
#[must_use]
pub fn tab_set() -> TabSet<ShowcaseTab> {
    TabSet::new(
        TabEntry {
            key: ShowcaseTab::Projects,
            label: "Projects",
            glyph: "🚀",
        },
        [
            TabEntry {
                key: ShowcaseTab::Skills,
                label: "Skills & Tools",
                glyph: "⚡",
            },
            TabEntry {
                key: ShowcaseTab::Certifications,
                label: "Certificates",
                glyph: "🏆",
            },
        ],
    )
}

/// Messages emitted by the showcase.
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(ShowcaseTab),
    OpenSource(&'static str),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenUrl(&'static str),
}

/// Process a showcase message against the tab switcher.
pub fn update(
    switcher: &mut TabSwitcher<ShowcaseTab>,
    message: Message,
    now: Instant,
) -> Event {
    match message {
        Message::TabSelected(tab) => {
            if switcher.select(tab, now) == SelectOutcome::Switched {
                tracing::debug!(?tab, "showcase tab switched");
            }
            Event::None
        }
        Message::OpenSource(url) => Event::OpenUrl(url),
    }
}

pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    pub switcher: &'a TabSwitcher<ShowcaseTab>,
    pub heading_pose: Pose,
    /// Pose of the tab strip (its own viewport-gated target).
    pub tabs_pose: Pose,
    /// Clock for the entrance poses of the active tab's children.
    pub now: Instant,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let scheme = ctx.scheme;
    let header = section_header(scheme, "My Work & Expertise", "Portfolio.", ctx.heading_pose);

    // Tab strip, generated from the tab set so every button is valid.
    let mut strip = Row::new().spacing(spacing::XS);
    for entry in ctx.switcher.tabs().iter() {
        let active = ctx.switcher.is_active(entry.key);
        strip = strip.push(
            button(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(text(entry.glyph).size(typography::BODY))
                    .push(text(entry.label).size(typography::BODY)),
            )
            .style(styles::button::tab(active))
            .on_press(Message::TabSelected(entry.key))
            .padding([spacing::SM, spacing::LG]),
        );
    }
    let tabs = container(strip)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(pose_padding(ctx.tabs_pose));

    // Only the active tab's content is mounted; switching away drops the
    // previous region entirely.
    let content = match ctx.switcher.active() {
        ShowcaseTab::Projects => projects_grid(&ctx),
        ShowcaseTab::Skills => skills_grid(&ctx),
        ShowcaseTab::Certifications => certifications_grid(&ctx),
    };

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::XL)
        .push(header)
        .push(tabs)
        .push(content)
        .into()
}

fn projects_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::LG);
    let mut row = Row::new().spacing(spacing::LG);
    for (index, project) in data::PROJECTS.iter().enumerate() {
        let pose = ctx.switcher.child_pose(index, ctx.now);
        row = row.push(project_card(ctx.scheme, project, pose));
        if index % 2 == 1 {
            rows = rows.push(row);
            row = Row::new().spacing(spacing::LG);
        }
    }
    rows = rows.push(row);
    container(rows)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn project_card<'a>(
    scheme: &ColorScheme,
    project: &'static Project,
    pose: Pose,
) -> Element<'a, Message> {
    let alpha = pose.opacity;

    let mut tags = Row::new().spacing(spacing::XS);
    for tag in project.tags {
        let tone = tag_color(scheme, tag.tone);
        tags = tags.push(
            container(
                text(format!("#{}", tag.name))
                    .size(typography::BODY_SM)
                    .color(faded(tone, alpha)),
            )
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::badge(tone, alpha)),
        );
    }

    let body = Column::new()
        .spacing(spacing::SM)
        .push(
            text(project.name)
                .size(typography::TITLE_MD)
                .color(faded(scheme.text_primary, alpha)),
        )
        .push(
            text(project.description)
                .size(typography::BODY)
                .color(faded(scheme.text_secondary, alpha)),
        )
        .push(tags)
        .push(
            button(text("View source ↗").size(typography::BODY))
                .style(styles::button::link(faded(scheme.brand_primary, alpha)))
                .on_press(Message::OpenSource(project.source_url))
                .padding(0.0),
        );

    container(
        container(body)
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .style(styles::container::card(alpha)),
    )
    .padding(pose_padding(pose))
    .into()
}

fn skills_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let scheme = ctx.scheme;
    let mut categories = Column::new().spacing(spacing::LG);
    for (index, category) in data::SKILL_CATEGORIES.iter().enumerate() {
        let pose = ctx.switcher.child_pose(index, ctx.now);
        categories = categories.push(skill_category(scheme, category, pose));
    }

    // Technology strip below the categories, staggered after them.
    let tech_pose = ctx
        .switcher
        .child_pose(data::SKILL_CATEGORIES.len(), ctx.now);
    let mut tech_row = Row::new().spacing(spacing::LG);
    for tech in data::TECHNOLOGIES {
        tech_row = tech_row.push(technology_tile(scheme, tech, tech_pose));
    }

    Column::new()
        .spacing(spacing::XL)
        .push(categories)
        .push(
            text("Technologies I Use")
                .size(typography::TITLE_SM)
                .color(faded(scheme.text_primary, tech_pose.opacity)),
        )
        .push(container(tech_row).padding(pose_padding(tech_pose)))
        .into()
}

fn skill_category<'a>(
    scheme: &ColorScheme,
    category: &'static SkillCategory,
    pose: Pose,
) -> Element<'a, Message> {
    let alpha = pose.opacity;
    let mut chips = Row::new().spacing(spacing::XS);
    for skill in category.skills {
        chips = chips.push(
            container(
                text(*skill)
                    .size(typography::BODY_SM)
                    .color(faded(scheme.text_primary, alpha)),
            )
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::badge(scheme.brand_secondary, alpha)),
        );
    }

    container(
        container(
            Column::new()
                .spacing(spacing::SM)
                .push(
                    text(category.title)
                        .size(typography::TITLE_SM)
                        .color(faded(scheme.text_primary, alpha)),
                )
                .push(chips),
        )
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card(alpha)),
    )
    .padding(pose_padding(pose))
    .into()
}

fn technology_tile<'a>(
    scheme: &ColorScheme,
    tech: &'static Technology,
    pose: Pose,
) -> Element<'a, Message> {
    Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XXS)
        .push(text(tech.glyph).size(sizing::ICON_LG))
        .push(
            text(tech.name)
                .size(typography::BODY_SM)
                .color(faded(scheme.text_secondary, pose.opacity)),
        )
        .into()
}

fn certifications_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::LG);
    let mut row = Row::new().spacing(spacing::LG);
    for (index, cert) in data::CERTIFICATIONS.iter().enumerate() {
        let pose = ctx.switcher.child_pose(index, ctx.now);
        row = row.push(certification_card(ctx.scheme, cert, pose));
        if index % 3 == 2 {
            rows = rows.push(row);
            row = Row::new().spacing(spacing::LG);
        }
    }
    rows = rows.push(row);
    container(rows)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn certification_card<'a>(
    scheme: &ColorScheme,
    cert: &'static Certification,
    pose: Pose,
) -> Element<'a, Message> {
    let alpha = pose.opacity;
    let body = Column::new()
        .spacing(spacing::XS)
        .push(text(cert.glyph).size(sizing::ICON_MD))
        .push(
            text(cert.title)
                .size(typography::BODY)
                .color(faded(scheme.text_primary, alpha)),
        )
        .push(
            text(cert.organization)
                .size(typography::BODY_SM)
                .color(faded(scheme.brand_primary, alpha)),
        )
        .push(
            text(cert.year)
                .size(typography::CAPTION)
                .color(faded(scheme.text_tertiary, alpha)),
        )
        .push(
            text(cert.description)
                .size(typography::BODY_SM)
                .color(faded(scheme.text_secondary, alpha)),
        )
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(
                    text("●")
                        .size(typography::CAPTION)
                        .color(faded(scheme.success, alpha)),
                )
                .push(
                    text("Verified")
                        .size(typography::CAPTION)
                        .color(faded(scheme.success, alpha)),
                ),
        );

    container(
        container(body)
            .padding(spacing::MD)
            .width(Length::Fixed(sizing::CARD_WIDTH * 0.8))
            .style(styles::container::card(alpha)),
    )
    .padding(pose_padding(pose))
    .into()
}

fn tag_color(scheme: &ColorScheme, tone: TagTone) -> iced::Color {
    match tone {
        TagTone::Blue => scheme.info,
        TagTone::Green => scheme.success,
        TagTone::Pink => scheme.accent,
        TagTone::Orange => scheme.warning,
    }
}
