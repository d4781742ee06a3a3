// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page and the reader.
//!
//! The `App` struct wires together the domains (motion, scene assets, theme,
//! config) and translates messages into side effects like config persistence
//! or opening links. This file intentionally keeps policy decisions (reveal
//! parameters per section, minimum window size, persistence) close to the
//! main update loop so it is easy to audit user-facing behavior.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::content::data;
use crate::motion::tabs::TabSwitcher;
use crate::motion::timing::{AnimationSpec, Easing, Pose, Stagger};
use crate::motion::{PageRegion, ReplayPolicy, RevealConfig, RevealController, TargetId, TriggerBand};
use crate::scene::{models, AssetId, SceneAssets};
use crate::ui::design_tokens::layout;
use crate::ui::sections::showcase::{self, ShowcaseTab};
use crate::ui::sections::{PageMap, SectionId};
use crate::ui::state::scroll::PageScroll;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_HEIGHT: u32 = config::WINDOW_DEFAULT_HEIGHT;
pub const WINDOW_DEFAULT_WIDTH: u32 = config::WINDOW_DEFAULT_WIDTH;

/// Id of the single page scrollable, shared between the view and the
/// scroll-to tasks.
fn page_scroll_id() -> iced::advanced::widget::Id {
    iced::advanced::widget::Id::new("page")
}

/// Reveal target ids for every animated region of the page.
#[derive(Debug, Clone, Copy)]
struct PageTargets {
    hero: TargetId,
    about_heading: TargetId,
    about_photo: TargetId,
    about_text: TargetId,
    timeline_heading: TargetId,
    timeline_cards: TargetId,
    showcase_heading: TargetId,
    showcase_tabs: TargetId,
    testimonials_heading: TargetId,
    testimonial_cards: TargetId,
    blog_heading: TargetId,
    blog_cards: TargetId,
    contact: TargetId,
}

/// Root Iced application state bridging the page sections, the animation
/// controllers, and persisted preferences.
pub struct App {
    screen: Screen,
    config: Config,
    theme_mode: ThemeMode,
    scheme: ColorScheme,
    page_map: PageMap,
    scroll: PageScroll,
    reveal: RevealController,
    targets: PageTargets,
    showcase: TabSwitcher<ShowcaseTab>,
    assets: SceneAssets,
    /// Shared rotation angle of the decorative canvases, in radians.
    spin: f32,
    /// Last observed clock, fed to pose queries by the view.
    now: Instant,
    last_tick: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("active_tab", &self.showcase.active())
            .field("reveal_targets", &self.reveal.len())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Forward-run spec shared by most targets.
fn run_spec(duration_ms: u64, easing: Easing, delay_ms: u64) -> AnimationSpec {
    AnimationSpec {
        duration: Duration::from_millis(duration_ms),
        easing,
        delay: Duration::from_millis(delay_ms),
    }
}

/// Section heading reveal: slide in from the left.
fn heading_config() -> RevealConfig {
    RevealConfig {
        hidden: Pose::hidden(-50.0, 0.0, 1.0),
        anim: run_spec(1000, Easing::CubicOut, 0),
        band: TriggerBand::new(0.85, 0.0),
        ..RevealConfig::default()
    }
}

/// Staggered card-collection reveal rising from below.
fn cards_config(child_count: usize, stagger_ms: u64, band_start: f32) -> RevealConfig {
    RevealConfig {
        hidden: Pose::hidden(0.0, 80.0, 1.0),
        anim: run_spec(1000, Easing::QuartOut, 0),
        stagger: Some(Stagger::new(Duration::from_millis(stagger_ms))),
        child_count,
        band: TriggerBand::new(band_start, 0.0),
        ..RevealConfig::default()
    }
}

fn header_of(map: &PageMap, id: SectionId) -> PageRegion {
    let region = map.region(id);
    PageRegion::new(region.top, layout::SECTION_HEADER_HEIGHT)
}

fn body_of(map: &PageMap, id: SectionId) -> PageRegion {
    let region = map.region(id);
    PageRegion::new(
        region.top + layout::SECTION_HEADER_HEIGHT,
        (region.height - layout::SECTION_HEADER_HEIGHT).max(0.0),
    )
}

/// Registers every reveal target against the computed page geometry. The
/// parameters mirror the section designs: headings slide in from the left,
/// cards rise with a stagger, the about columns approach from both sides.
fn register_targets(reveal: &mut RevealController, map: &PageMap) -> PageTargets {
    // The hero is on screen at launch and plays exactly once.
    let hero = reveal.attach(
        map.region(SectionId::Hero),
        RevealConfig {
            hidden: Pose::hidden(0.0, 30.0, 1.0),
            anim: run_spec(1000, Easing::CubicOut, 0),
            policy: ReplayPolicy::Once,
            band: TriggerBand::new(1.0, 0.0),
            ..RevealConfig::default()
        },
    );

    let about_photo = reveal.attach(
        body_of(map, SectionId::About),
        RevealConfig {
            hidden: Pose::hidden(-100.0, 0.0, 0.8),
            anim: run_spec(1200, Easing::QuartOut, 0),
            band: TriggerBand::new(0.8, 0.0),
            ..RevealConfig::default()
        },
    );

    let about_text = reveal.attach(
        body_of(map, SectionId::About),
        RevealConfig {
            hidden: Pose::hidden(100.0, 50.0, 1.0),
            anim: run_spec(1200, Easing::QuartOut, 300),
            band: TriggerBand::new(0.8, 0.0),
            ..RevealConfig::default()
        },
    );

    let timeline_cards = reveal.attach(
        body_of(map, SectionId::Timeline),
        RevealConfig {
            hidden: Pose::hidden(-100.0, 0.0, 0.9),
            anim: run_spec(1200, Easing::QuartOut, 0),
            stagger: Some(Stagger::new(Duration::from_millis(200))),
            child_count: data::TIMELINE.len(),
            band: TriggerBand::new(0.85, 0.0),
            ..RevealConfig::default()
        },
    );

    let showcase_tabs = reveal.attach(
        body_of(map, SectionId::Showcase),
        RevealConfig {
            hidden: Pose::hidden(0.0, -30.0, 1.0),
            anim: run_spec(800, Easing::QuadOut, 0),
            stagger: Some(Stagger::new(Duration::from_millis(100))),
            child_count: 3,
            band: TriggerBand::new(0.85, 0.0),
            ..RevealConfig::default()
        },
    );

    // Testimonials arm as soon as any part of the row shows.
    let testimonial_cards = reveal.attach(
        body_of(map, SectionId::Testimonials),
        RevealConfig {
            hidden: Pose::hidden(0.0, 100.0, 1.0),
            anim: run_spec(1000, Easing::CubicOut, 0),
            stagger: Some(Stagger::new(Duration::from_millis(150))),
            child_count: data::TESTIMONIALS.len(),
            band: TriggerBand::new(1.0, 0.0),
            ..RevealConfig::default()
        },
    );

    let blog_cards = reveal.attach(
        body_of(map, SectionId::Blog),
        cards_config(data::BLOG_POSTS.len(), 200, 0.8),
    );

    let contact = reveal.attach(
        map.region(SectionId::Contact),
        RevealConfig {
            hidden: Pose::hidden(0.0, 40.0, 1.0),
            anim: run_spec(1000, Easing::CubicOut, 0),
            band: TriggerBand::new(0.85, 0.0),
            ..RevealConfig::default()
        },
    );

    PageTargets {
        hero,
        about_heading: reveal.attach(header_of(map, SectionId::About), heading_config()),
        about_photo,
        about_text,
        timeline_heading: reveal.attach(header_of(map, SectionId::Timeline), heading_config()),
        timeline_cards,
        showcase_heading: reveal.attach(header_of(map, SectionId::Showcase), heading_config()),
        showcase_tabs,
        testimonials_heading: reveal
            .attach(header_of(map, SectionId::Testimonials), heading_config()),
        testimonial_cards,
        blog_heading: reveal.attach(header_of(map, SectionId::Blog), heading_config()),
        blog_cards,
        contact,
    }
}

impl Default for App {
    fn default() -> Self {
        let now = Instant::now();
        let page_map = PageMap::new();
        let mut reveal = RevealController::new(now);
        let targets = register_targets(&mut reveal, &page_map);
        let mut assets = SceneAssets::new();
        load_scene_assets(&mut assets);

        Self {
            screen: Screen::Page,
            config: Config::default(),
            theme_mode: ThemeMode::System,
            scheme: ColorScheme::from_system(),
            page_map,
            scroll: PageScroll::default(),
            reveal,
            targets,
            showcase: TabSwitcher::new(showcase::tab_set(), now),
            assets,
            spin: 0.0,
            now,
            last_tick: now,
        }
    }
}

fn load_scene_assets(assets: &mut SceneAssets) {
    // Decorative only: on failure the section renders without its canvas.
    if let Err(err) = assets.load_with(AssetId::DesktopRig, models::desktop_rig) {
        tracing::error!(%err, "desktop rig failed to build");
    }
    if let Err(err) = assets.load_with(AssetId::Globe, || {
        models::globe(models::GLOBE_LAT_STEPS, models::GLOBE_LON_STEPS)
    }) {
        tracing::error!(%err, "globe failed to build");
    }
    if let Err(err) = assets.load_with(AssetId::Starfield, || {
        models::starfield(models::STARFIELD_COUNT)
    }) {
        tracing::error!(%err, "starfield failed to build");
    }
}

impl App {
    /// Initializes application state from persisted config and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load();

        let mut app = App {
            config,
            ..Self::default()
        };

        app.theme_mode = flags.theme.unwrap_or(app.config.general.theme_mode);
        app.scheme = scheme_for(app.theme_mode);

        let reduced = flags.reduced_motion || app.config.motion.effective_reduced_motion();
        app.reveal.set_instant_reveal(reduced);
        app.showcase.set_instant_entrance(reduced);
        app.reveal
            .set_speed_factor(app.config.motion.effective_speed_factor());

        // Seed the controller with the launch viewport so the hero reveals
        // before the first scroll event arrives.
        app.reveal.set_viewport(
            0.0,
            WINDOW_DEFAULT_HEIGHT as f32 - layout::NAVBAR_HEIGHT,
            app.now,
        );

        (app, Task::none())
    }

    fn title(&self) -> String {
        let name = data::PROFILE.name;
        match self.screen {
            Screen::Page => format!("{name} - Portfolio"),
            Screen::Reader(index) => match data::BLOG_POSTS.get(index) {
                Some(post) => format!("{} - {name}", post.title),
                None => format!("{name} - Portfolio"),
            },
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    /// Whether the animation tick subscription must run: any reveal or tab
    /// entrance in flight, or a spinning canvas on screen.
    fn needs_tick(&self) -> bool {
        if self.screen != Screen::Page {
            return false;
        }
        self.reveal.has_active_animation()
            || self
                .showcase
                .is_animating(self.active_tab_child_count(), self.now)
            || self.canvas_on_screen()
    }

    fn active_tab_child_count(&self) -> usize {
        match self.showcase.active() {
            ShowcaseTab::Projects => data::PROJECTS.len(),
            // Skill categories plus the trailing technology strip.
            ShowcaseTab::Skills => data::SKILL_CATEGORIES.len() + 1,
            ShowcaseTab::Certifications => data::CERTIFICATIONS.len(),
        }
    }

    /// True while the hero rig or the contact globe/starfield is inside the
    /// viewport and therefore worth spinning.
    fn canvas_on_screen(&self) -> bool {
        let Some(height) = self.scroll.viewport_height() else {
            // Before the first scroll event only the hero can be visible.
            return true;
        };
        let top = self.scroll.y();
        let bottom = top + height;
        [SectionId::Hero, SectionId::Contact].iter().any(|id| {
            let region = self.page_map.region(*id);
            region.top < bottom && region.bottom() > top
        })
    }
}

fn scheme_for(mode: ThemeMode) -> ColorScheme {
    match mode {
        ThemeMode::Light => ColorScheme::light(),
        ThemeMode::Dark => ColorScheme::dark(),
        ThemeMode::System => ColorScheme::from_system(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::sections::blog;

    fn app() -> App {
        App::default()
    }

    #[test]
    fn default_app_starts_on_page_with_projects_active() {
        let app = app();
        assert_eq!(app.screen, Screen::Page);
        assert_eq!(app.showcase.active(), ShowcaseTab::Projects);
    }

    #[test]
    fn scene_assets_are_loaded_and_sanitized_once() {
        let app = app();
        for id in [AssetId::DesktopRig, AssetId::Globe, AssetId::Starfield] {
            let asset = app.assets.get(id).expect("asset loaded at startup");
            assert!(asset.geometry.bounding_sphere().is_some());
        }
    }

    #[test]
    fn opening_a_blog_post_switches_to_reader_and_back() {
        let mut app = app();
        let _ = app.update(Message::Blog(blog::Message::Open(1)));
        assert_eq!(app.screen, Screen::Reader(1));

        let _ = app.update(Message::Blog(blog::Message::Close));
        assert_eq!(app.screen, Screen::Page);
    }

    #[test]
    fn out_of_range_post_index_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::Blog(blog::Message::Open(data::BLOG_POSTS.len())));
        assert_eq!(app.screen, Screen::Page);
    }

    #[test]
    fn escape_closes_the_reader_only() {
        let mut app = app();
        let _ = app.update(Message::EscapePressed);
        assert_eq!(app.screen, Screen::Page);

        let _ = app.update(Message::Blog(blog::Message::Open(0)));
        let _ = app.update(Message::EscapePressed);
        assert_eq!(app.screen, Screen::Page);
    }

    #[test]
    fn tab_selection_flows_through_the_switcher() {
        let mut app = app();
        let _ = app.update(Message::Showcase(showcase::Message::TabSelected(
            ShowcaseTab::Certifications,
        )));
        assert_eq!(app.showcase.active(), ShowcaseTab::Certifications);
    }

    #[test]
    fn ticks_are_needed_while_the_hero_animates() {
        let mut app = app();
        // Hero enters its band at launch via the seeded viewport.
        app.reveal
            .set_viewport(0.0, WINDOW_DEFAULT_HEIGHT as f32, app.now);
        assert!(app.needs_tick());

        // In the reader nothing animates.
        let _ = app.update(Message::Blog(blog::Message::Open(0)));
        assert!(!app.needs_tick());
    }

    #[test]
    fn reader_title_names_the_post() {
        let mut app = app();
        let _ = app.update(Message::Blog(blog::Message::Open(0)));
        assert!(app.title().contains(data::BLOG_POSTS[0].title));
    }
}
