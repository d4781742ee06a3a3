// SPDX-License-Identifier: MPL-2.0
use iced_folio::config::{self, Config, GeneralConfig, MotionConfig};
use iced_folio::motion::timing::{AnimationSpec, Easing, Pose};
use iced_folio::motion::{
    PageRegion, ReplayPolicy, RevealConfig, RevealController, SelectOutcome, TabEntry, TabSet,
    TabSwitcher, TriggerBand,
};
use iced_folio::scene::{models, sanitize, AssetId, MeshGeometry, SceneAssets};
use iced_folio::ui::theming::ThemeMode;
use std::time::{Duration, Instant};
use tempfile::tempdir;

const VIEW_H: f32 = 720.0;

#[test]
fn motion_settings_flow_from_config_into_the_controller() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let saved = Config {
        general: GeneralConfig {
            theme_mode: ThemeMode::Dark,
        },
        motion: MotionConfig {
            reduced_motion: Some(true),
            speed_factor: Some(9.0), // out of range on purpose
        },
    };
    config::save_to_path(&saved, &path).expect("failed to save config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert!(loaded.motion.effective_reduced_motion());
    // The persisted factor is clamped before it reaches the controller.
    let factor = loaded.motion.effective_speed_factor();
    assert!(factor <= iced_folio::config::MAX_SPEED_FACTOR);

    let start = Instant::now();
    let mut controller = RevealController::new(start);
    controller.set_speed_factor(factor);
    controller.set_instant_reveal(loaded.motion.effective_reduced_motion());

    let id = controller.attach(PageRegion::new(2000.0, 300.0), RevealConfig::default());
    controller.set_viewport(2000.0 - VIEW_H * 0.5, VIEW_H, start);
    // Reduced motion: the target is visible without any tick.
    assert_eq!(controller.pose(id), Pose::VISIBLE);
}

#[test]
fn reveal_round_trip_through_the_public_api() {
    let start = Instant::now();
    let mut controller = RevealController::new(start);
    let config = RevealConfig {
        hidden: Pose::hidden(0.0, 80.0, 0.95),
        anim: AnimationSpec {
            duration: Duration::from_millis(500),
            easing: Easing::CubicOut,
            delay: Duration::ZERO,
        },
        policy: ReplayPolicy::Toggle,
        band: TriggerBand::new(0.85, 0.0),
        ..RevealConfig::default()
    };
    let id = controller.attach(PageRegion::new(3000.0, 400.0), config);

    // Scroll the target into its band and let the forward run finish.
    controller.set_viewport(3000.0 - VIEW_H * 0.5, VIEW_H, start);
    let mid = start + Duration::from_millis(250);
    assert!(controller.tick(mid));
    let done = start + Duration::from_millis(600);
    assert!(!controller.tick(done));
    assert_eq!(controller.pose(id), Pose::VISIBLE);

    // Scroll away and let the reverse run finish: exactly the hidden pose.
    controller.set_viewport(0.0, VIEW_H, done);
    controller.tick(done + Duration::from_millis(600));
    assert_eq!(controller.pose(id), config.hidden);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Panel {
    Projects,
    Skills,
    Certifications,
}

fn panel_tabs() -> TabSet<Panel> {
    TabSet::new(
        TabEntry {
            key: Panel::Projects,
            label: "Projects",
            glyph: "🚀",
        },
        [
            TabEntry {
                key: Panel::Skills,
                label: "Skills & Tools",
                glyph: "⚡",
            },
            TabEntry {
                key: Panel::Certifications,
                label: "Certificates",
                glyph: "🏆",
            },
        ],
    )
}

#[test]
fn tab_switching_preserves_the_active_id_invariant() {
    let now = Instant::now();
    let mut switcher = TabSwitcher::new(panel_tabs(), now);
    assert_eq!(switcher.active(), Panel::Projects);

    assert_eq!(
        switcher.select(Panel::Certifications, now),
        SelectOutcome::Switched
    );
    assert_eq!(switcher.active(), Panel::Certifications);
    assert!(!switcher.is_active(Panel::Projects));

    // Whatever happens, the active id stays a member of the set.
    assert!(switcher.tabs().contains(switcher.active()));
}

#[test]
fn tab_entrance_replays_on_every_return() {
    let now = Instant::now();
    let mut switcher = TabSwitcher::new(panel_tabs(), now);

    let t1 = now + Duration::from_secs(3);
    switcher.select(Panel::Skills, t1);
    let t2 = t1 + Duration::from_secs(3);
    switcher.select(Panel::Projects, t2);

    // Freshly re-mounted content starts its entrance from opacity zero.
    assert!(switcher.child_pose(0, t2).opacity < 0.01);
    assert!(switcher.is_animating(4, t2));
    assert!(!switcher.is_animating(4, t2 + Duration::from_secs(3)));
}

#[test]
fn asset_registry_sanitizes_procedural_meshes_once() {
    let mut assets = SceneAssets::new();
    let asset = assets
        .load_with(AssetId::Globe, || {
            models::globe(models::GLOBE_LAT_STEPS, models::GLOBE_LON_STEPS)
        })
        .expect("globe builds");
    // Procedural geometry is clean, but the pass still produces a bounding
    // sphere for the canvas widgets.
    assert!(!asset.report.replaced_any());
    assert!(asset.geometry.bounding_sphere().is_some());
}

#[test]
fn sanitation_fixes_broken_imported_geometry() {
    let mut positions = vec![0.5f32; 12];
    positions[5] = f32::NAN;
    let mut mesh = MeshGeometry::new(positions, vec![]).expect("valid shape");

    let report = sanitize::sanitize(&mut mesh);
    assert_eq!(report.replaced_positions, 1);
    assert_eq!(mesh.points()[1][2], 0.0);

    let sphere = mesh.bounding_sphere().expect("recomputed");
    assert!(sphere.radius.is_finite());
}
