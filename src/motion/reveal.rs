// SPDX-License-Identifier: MPL-2.0
//! Viewport-gated reveal animations.
//!
//! A [`RevealController`] owns a set of targets, each a page region with a
//! hidden pose and a replay policy. Scroll updates flow in through
//! [`RevealController::set_viewport`], the animation clock through
//! [`RevealController::tick`], and the view layer reads the resulting
//! [`Pose`] per target (or per staggered child) when rendering.
//!
//! Per target the controller runs the state machine
//! `Hidden → AnimatingIn → Visible → AnimatingOut → Hidden`, where the
//! reverse leg only exists under [`ReplayPolicy::Toggle`]. Transitions are
//! ordered by the sequence of viewport updates; different targets never
//! affect each other.
//!
//! Failure policy: a decorative animation must never hide content. Queries
//! for ids that were detached (or never attached) return [`Pose::VISIBLE`],
//! and detaching an unknown id is a no-op.

use crate::motion::timing::{AnimationSpec, Pose, Progress, Stagger};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Unique identifier for an attached reveal target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(u64);

impl TargetId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Vertical extent of a target in page coordinates (y grows downward, 0 is
/// the top of the page).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRegion {
    pub top: f32,
    pub height: f32,
}

impl PageRegion {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Viewport-relative band in which a target counts as "in view".
///
/// Both fields are fractions of the viewport height. A target is in the band
/// while its top edge is above the `start` line *and* its bottom edge is
/// below the `end` line. The defaults reproduce the usual pattern: reveal
/// once the top reaches 85% down the viewport, reverse only after scrolling
/// back above that line or fully past the element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerBand {
    start: f32,
    end: f32,
}

pub const DEFAULT_BAND_START: f32 = 0.85;
pub const DEFAULT_BAND_END: f32 = 0.0;

impl TriggerBand {
    /// Creates a band, clamping both fractions to `[0, 1]` and ordering them
    /// so `start >= end`.
    #[must_use]
    pub fn new(start: f32, end: f32) -> Self {
        let start = if start.is_finite() { start.clamp(0.0, 1.0) } else { DEFAULT_BAND_START };
        let end = if end.is_finite() { end.clamp(0.0, 1.0) } else { DEFAULT_BAND_END };
        Self {
            start: start.max(end),
            end,
        }
    }

    /// Whether `region` intersects this band for a viewport scrolled to
    /// `offset` with the given `height`.
    #[must_use]
    pub fn contains(&self, region: PageRegion, offset: f32, height: f32) -> bool {
        let top_in_view = region.top - offset;
        let bottom_in_view = region.bottom() - offset;
        top_in_view < height * self.start && bottom_in_view > height * self.end
    }
}

impl Default for TriggerBand {
    fn default() -> Self {
        Self::new(DEFAULT_BAND_START, DEFAULT_BAND_END)
    }
}

/// Governs whether a reveal re-arms after completing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayPolicy {
    /// Fire the forward run once; leaving the band afterwards is ignored.
    Once,
    /// Reverse back to the hidden pose when the target leaves the band.
    #[default]
    Toggle,
}

/// Full configuration of a reveal target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Pose before the first forward run (and after a completed reverse).
    pub hidden: Pose,
    /// Duration, easing, and start delay of the forward run.
    pub anim: AnimationSpec,
    /// Per-child start offsets when the target is a collection.
    pub stagger: Option<Stagger>,
    /// Number of staggered children. `1` for single-element targets.
    pub child_count: usize,
    pub policy: ReplayPolicy,
    pub band: TriggerBand,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            hidden: Pose::hidden(0.0, 40.0, 1.0),
            anim: AnimationSpec::default(),
            stagger: None,
            child_count: 1,
            policy: ReplayPolicy::default(),
            band: TriggerBand::default(),
        }
    }
}

impl RevealConfig {
    /// Wall time until the last child of the forward run settles.
    fn forward_total(&self) -> Duration {
        let tail = self
            .stagger
            .map(|s| s.tail(self.child_count))
            .unwrap_or(Duration::ZERO);
        self.anim.total() + tail
    }

    /// Reverse runs skip the start delay and collapse the stagger: children
    /// retreat in unison.
    fn reverse_total(&self) -> Duration {
        self.anim.duration
    }
}

/// Per-target animation phase. `from` carries the factor at which a run was
/// entered so mid-flight reversals stay continuous.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Hidden,
    AnimatingIn { started: Instant, from: f32 },
    Visible,
    AnimatingOut { started: Instant, from: f32 },
}

#[derive(Debug)]
struct Target {
    region: PageRegion,
    config: RevealConfig,
    phase: Phase,
    in_band: bool,
}

/// Drives every reveal target on the page from scroll and clock input.
#[derive(Debug)]
pub struct RevealController {
    targets: BTreeMap<TargetId, Target>,
    /// Last observed scroll offset and viewport height.
    viewport: Option<(f32, f32)>,
    /// Last observed clock instant, shared by all pose queries.
    now: Instant,
    /// Duration multiplier from the motion config (1.0 = authored speed).
    speed: f32,
    /// Reduced-motion mode: transitions jump to their end state.
    instant: bool,
}

// Re-export speed bounds from centralized config so the clamp here and the
// one applied to persisted settings can never drift apart.
pub use crate::config::{MAX_SPEED_FACTOR, MIN_SPEED_FACTOR};

impl RevealController {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            targets: BTreeMap::new(),
            viewport: None,
            now,
            speed: 1.0,
            instant: false,
        }
    }

    /// Sets the duration multiplier, clamped to a sane range.
    pub fn set_speed_factor(&mut self, factor: f32) {
        self.speed = if factor.is_finite() {
            factor.clamp(MIN_SPEED_FACTOR, MAX_SPEED_FACTOR)
        } else {
            1.0
        };
    }

    /// Enables or disables reduced motion. While enabled, enter and exit
    /// transitions complete immediately instead of animating.
    pub fn set_instant_reveal(&mut self, instant: bool) {
        self.instant = instant;
    }

    /// Registers a target. The target starts hidden; it enters the band (and
    /// starts animating) on the next viewport update that intersects it.
    pub fn attach(&mut self, region: PageRegion, config: RevealConfig) -> TargetId {
        let id = TargetId::next();
        self.targets.insert(
            id,
            Target {
                region,
                config,
                phase: Phase::Hidden,
                in_band: false,
            },
        );
        // Evaluate immediately so targets attached mid-scroll pick up the
        // current viewport instead of waiting for the next scroll event.
        if let Some((offset, height)) = self.viewport {
            self.evaluate_target(id, offset, height);
        }
        id
    }

    /// Releases a target. Unknown ids are a no-op; after this call the id
    /// produces no further pose changes.
    pub fn detach(&mut self, id: TargetId) {
        self.targets.remove(&id);
    }

    /// Detaches every target. Used on teardown of the whole page.
    pub fn detach_all(&mut self) {
        self.targets.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Feeds a scroll update. Band enter/exit transitions for each target
    /// are decided here, in the order updates arrive.
    pub fn set_viewport(&mut self, offset: f32, height: f32, now: Instant) {
        self.now = now;
        self.viewport = Some((offset, height));
        let ids: Vec<TargetId> = self.targets.keys().copied().collect();
        for id in ids {
            self.evaluate_target(id, offset, height);
        }
    }

    /// Advances the animation clock, completing any runs that have elapsed.
    /// Returns `true` while at least one target is still animating, which
    /// callers use to gate the tick subscription.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.now = now;
        let speed = self.speed;
        let mut active = false;
        for target in self.targets.values_mut() {
            match target.phase {
                Phase::AnimatingIn { started, .. } => {
                    if scaled(now.saturating_duration_since(started), speed)
                        >= target.config.forward_total()
                    {
                        target.phase = Phase::Visible;
                    } else {
                        active = true;
                    }
                }
                Phase::AnimatingOut { started, .. } => {
                    if scaled(now.saturating_duration_since(started), speed)
                        >= target.config.reverse_total()
                    {
                        target.phase = Phase::Hidden;
                    } else {
                        active = true;
                    }
                }
                Phase::Hidden | Phase::Visible => {}
            }
        }
        active
    }

    /// Whether any target is mid-animation at the last observed clock.
    #[must_use]
    pub fn has_active_animation(&self) -> bool {
        self.targets.values().any(|t| {
            matches!(
                t.phase,
                Phase::AnimatingIn { .. } | Phase::AnimatingOut { .. }
            )
        })
    }

    /// Current pose of a target. Collection targets report their first
    /// child; unknown ids report [`Pose::VISIBLE`].
    #[must_use]
    pub fn pose(&self, id: TargetId) -> Pose {
        self.child_pose(id, 0)
    }

    /// Current pose of the staggered child at `index`. During reverse runs
    /// children retreat in unison.
    #[must_use]
    pub fn child_pose(&self, id: TargetId, index: usize) -> Pose {
        let Some(target) = self.targets.get(&id) else {
            return Pose::VISIBLE;
        };
        let factor = match target.phase {
            Phase::Hidden => 0.0,
            Phase::Visible => 1.0,
            Phase::AnimatingIn { started, from } => {
                let elapsed = scaled(self.now.saturating_duration_since(started), self.speed);
                let child_delay = target
                    .config
                    .stagger
                    .map(|s| s.delay_for(index))
                    .unwrap_or(Duration::ZERO);
                let eased = target
                    .config
                    .anim
                    .eased_at(elapsed.saturating_sub(child_delay));
                from + (1.0 - from) * eased
            }
            Phase::AnimatingOut { started, from } => {
                let elapsed = scaled(self.now.saturating_duration_since(started), self.speed);
                let eased = target
                    .config
                    .anim
                    .easing
                    .apply(Progress::of(elapsed, target.config.anim.duration));
                from * (1.0 - eased)
            }
        };
        target.config.hidden.toward_visible(factor)
    }

    fn evaluate_target(&mut self, id: TargetId, offset: f32, height: f32) {
        let now = self.now;
        let instant = self.instant;
        let speed = self.speed;
        let Some(target) = self.targets.get_mut(&id) else {
            return;
        };
        let was_in_band = target.in_band;
        let in_band = target.config.band.contains(target.region, offset, height);
        target.in_band = in_band;

        match (was_in_band, in_band) {
            (false, true) => Self::enter(target, now, instant, speed),
            (true, false) => Self::leave(target, now, instant, speed),
            _ => {}
        }
    }

    fn enter(target: &mut Target, now: Instant, instant: bool, speed: f32) {
        let from = match target.phase {
            Phase::Hidden => 0.0,
            Phase::AnimatingOut { started, from } => {
                let elapsed = scaled(now.saturating_duration_since(started), speed);
                let eased = target
                    .config
                    .anim
                    .easing
                    .apply(Progress::of(elapsed, target.config.anim.duration));
                from * (1.0 - eased)
            }
            // Already visible or already animating in: nothing to restart.
            Phase::Visible | Phase::AnimatingIn { .. } => return,
        };
        tracing::debug!(?target.region, from, "reveal target entered band");
        target.phase = if instant {
            Phase::Visible
        } else {
            Phase::AnimatingIn { started: now, from }
        };
    }

    fn leave(target: &mut Target, now: Instant, instant: bool, speed: f32) {
        if target.config.policy == ReplayPolicy::Once {
            // Once-targets never reverse; a run in flight keeps going.
            return;
        }
        let from = match target.phase {
            Phase::Visible => 1.0,
            Phase::AnimatingIn { started, from } => {
                let elapsed = scaled(now.saturating_duration_since(started), speed);
                from + (1.0 - from) * target.config.anim.eased_at(elapsed)
            }
            Phase::Hidden | Phase::AnimatingOut { .. } => return,
        };
        tracing::debug!(?target.region, from, "reveal target left band");
        target.phase = if instant {
            Phase::Hidden
        } else {
            Phase::AnimatingOut { started: now, from }
        };
    }
}

/// Applies the speed factor to an elapsed wall duration.
fn scaled(elapsed: Duration, speed: f32) -> Duration {
    elapsed.mul_f32(speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::timing::Easing;
    use crate::test_utils::assert_abs_diff_eq;

    const VIEW_H: f32 = 600.0;

    fn controller() -> (RevealController, Instant) {
        let start = Instant::now();
        (RevealController::new(start), start)
    }

    fn toggle_config() -> RevealConfig {
        RevealConfig {
            hidden: Pose::hidden(-100.0, 0.0, 0.9),
            anim: AnimationSpec {
                duration: Duration::from_millis(1200),
                easing: Easing::CubicOut,
                delay: Duration::ZERO,
            },
            policy: ReplayPolicy::Toggle,
            ..RevealConfig::default()
        }
    }

    /// Scrolls so the region top sits at `fraction` of the viewport height.
    fn offset_for(region: PageRegion, fraction: f32) -> f32 {
        region.top - VIEW_H * fraction
    }

    #[test]
    fn target_starts_hidden_until_band_entry() {
        let (mut ctl, start) = controller();
        let region = PageRegion::new(2000.0, 300.0);
        let id = ctl.attach(region, toggle_config());

        // Region far below the viewport: still hidden.
        ctl.set_viewport(0.0, VIEW_H, start);
        assert_eq!(ctl.pose(id), Pose::hidden(-100.0, 0.0, 0.9));

        // Region top at 50% of the viewport: inside the band, animating.
        ctl.set_viewport(offset_for(region, 0.5), VIEW_H, start);
        let mid = ctl.pose(id);
        assert!(mid.opacity < 1.0);
        assert!(ctl.has_active_animation());
    }

    #[test]
    fn forward_run_completes_to_identity() {
        let (mut ctl, start) = controller();
        let region = PageRegion::new(2000.0, 300.0);
        let id = ctl.attach(region, toggle_config());

        ctl.set_viewport(offset_for(region, 0.5), VIEW_H, start);
        let still_active = ctl.tick(start + Duration::from_millis(600));
        assert!(still_active);
        let done = ctl.tick(start + Duration::from_millis(1300));
        assert!(!done);
        assert_eq!(ctl.pose(id), Pose::VISIBLE);
    }

    #[test]
    fn toggle_round_trip_returns_exactly_to_hidden_pose() {
        let (mut ctl, start) = controller();
        let region = PageRegion::new(2000.0, 300.0);
        let config = toggle_config();
        let id = ctl.attach(region, config);

        // Enter, complete the forward run.
        ctl.set_viewport(offset_for(region, 0.5), VIEW_H, start);
        ctl.tick(start + Duration::from_millis(1300));
        assert_eq!(ctl.pose(id), Pose::VISIBLE);

        // Leave, complete the reverse run.
        let leave_at = start + Duration::from_millis(1400);
        ctl.set_viewport(0.0, VIEW_H, leave_at);
        assert!(ctl.has_active_animation());
        ctl.tick(leave_at + Duration::from_millis(1300));
        assert_eq!(ctl.pose(id), config.hidden);
    }

    #[test]
    fn once_policy_is_terminal_after_first_run() {
        let (mut ctl, start) = controller();
        let region = PageRegion::new(2000.0, 300.0);
        let config = RevealConfig {
            policy: ReplayPolicy::Once,
            ..toggle_config()
        };
        let id = ctl.attach(region, config);

        ctl.set_viewport(offset_for(region, 0.5), VIEW_H, start);
        ctl.tick(start + Duration::from_millis(1300));
        assert_eq!(ctl.pose(id), Pose::VISIBLE);

        // Leave and re-enter: no further transform change.
        let later = start + Duration::from_millis(2000);
        ctl.set_viewport(0.0, VIEW_H, later);
        assert_eq!(ctl.pose(id), Pose::VISIBLE);
        assert!(!ctl.has_active_animation());

        ctl.set_viewport(offset_for(region, 0.5), VIEW_H, later);
        assert_eq!(ctl.pose(id), Pose::VISIBLE);
        assert!(!ctl.has_active_animation());
    }

    #[test]
    fn mid_flight_reversal_is_continuous() {
        let (mut ctl, start) = controller();
        let region = PageRegion::new(2000.0, 300.0);
        let id = ctl.attach(region, toggle_config());

        ctl.set_viewport(offset_for(region, 0.5), VIEW_H, start);
        let halfway = start + Duration::from_millis(600);
        ctl.tick(halfway);
        let before = ctl.pose(id);

        // Reverse mid-animation: pose must not jump.
        ctl.set_viewport(0.0, VIEW_H, halfway);
        let after = ctl.pose(id);
        assert_abs_diff_eq!(before.opacity, after.opacity, epsilon = 1e-4);
        assert_abs_diff_eq!(before.offset_x, after.offset_x, epsilon = 1e-2);
    }

    #[test]
    fn detach_mid_animation_stops_all_updates() {
        let (mut ctl, start) = controller();
        let region = PageRegion::new(2000.0, 300.0);
        let id = ctl.attach(region, toggle_config());

        ctl.set_viewport(offset_for(region, 0.5), VIEW_H, start);
        assert!(ctl.has_active_animation());

        ctl.detach(id);
        // No dangling animation: tick reports idle and the id resolves to
        // the safe visible pose.
        assert!(!ctl.tick(start + Duration::from_millis(100)));
        assert!(ctl.is_empty());
        assert_eq!(ctl.pose(id), Pose::VISIBLE);

        // Detaching again is a silent no-op.
        ctl.detach(id);
    }

    #[test]
    fn detach_all_releases_every_target() {
        let (mut ctl, start) = controller();
        for index in 0..4 {
            ctl.attach(
                PageRegion::new(index as f32 * 500.0, 300.0),
                toggle_config(),
            );
        }
        ctl.set_viewport(0.0, VIEW_H, start);
        assert!(ctl.has_active_animation());

        ctl.detach_all();
        assert!(ctl.is_empty());
        assert!(!ctl.tick(start + Duration::from_millis(100)));
    }

    #[test]
    fn stagger_offsets_children_and_holds_run_open() {
        let (mut ctl, start) = controller();
        let region = PageRegion::new(2000.0, 600.0);
        let config = RevealConfig {
            anim: AnimationSpec {
                duration: Duration::from_millis(400),
                easing: Easing::Linear,
                delay: Duration::ZERO,
            },
            stagger: Some(Stagger::new(Duration::from_millis(200))),
            child_count: 3,
            ..toggle_config()
        };
        let id = ctl.attach(region, config);
        ctl.set_viewport(offset_for(region, 0.5), VIEW_H, start);

        // At t=200ms: child 0 halfway, child 1 starting, child 2 untouched.
        ctl.tick(start + Duration::from_millis(200));
        assert_abs_diff_eq!(ctl.child_pose(id, 0).opacity, 0.5, epsilon = 1e-3);
        assert_abs_diff_eq!(ctl.child_pose(id, 1).opacity, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(ctl.child_pose(id, 2).opacity, 0.0, epsilon = 1e-3);

        // Run stays active until the last child finishes (400 + 2*200).
        assert!(ctl.tick(start + Duration::from_millis(700)));
        assert!(!ctl.tick(start + Duration::from_millis(850)));
        assert_eq!(ctl.child_pose(id, 2), Pose::VISIBLE);
    }

    #[test]
    fn instant_reveal_skips_animation_phases() {
        let (mut ctl, start) = controller();
        ctl.set_instant_reveal(true);
        let region = PageRegion::new(2000.0, 300.0);
        let id = ctl.attach(region, toggle_config());

        ctl.set_viewport(offset_for(region, 0.5), VIEW_H, start);
        assert_eq!(ctl.pose(id), Pose::VISIBLE);
        assert!(!ctl.has_active_animation());

        ctl.set_viewport(0.0, VIEW_H, start + Duration::from_millis(50));
        assert_eq!(ctl.pose(id), toggle_config().hidden);
        assert!(!ctl.has_active_animation());
    }

    #[test]
    fn attach_mid_scroll_sees_current_viewport() {
        let (mut ctl, start) = controller();
        let region = PageRegion::new(200.0, 300.0);
        ctl.set_viewport(0.0, VIEW_H, start);

        // Region is already inside the band when attached.
        let id = ctl.attach(region, toggle_config());
        assert!(ctl.has_active_animation());
        assert!(ctl.pose(id).opacity < 1.0);
    }

    #[test]
    fn band_contains_uses_both_edges() {
        let band = TriggerBand::new(0.85, 0.0);
        let region = PageRegion::new(1000.0, 200.0);

        // Top below the start line: out.
        assert!(!band.contains(region, 0.0, VIEW_H));
        // Top above the start line: in.
        assert!(band.contains(region, 1000.0 - VIEW_H * 0.5, VIEW_H));
        // Scrolled fully past (bottom above viewport top): out.
        assert!(!band.contains(region, 1300.0, VIEW_H));
    }

    #[test]
    fn band_constructor_sanitizes_input() {
        let band = TriggerBand::new(f32::NAN, 2.0);
        // NaN start falls back to the default, end clamps to 1.0, and the
        // pair is reordered so start >= end.
        assert!(band.start >= band.end);
        assert!((0.0..=1.0).contains(&band.start));
        assert!((0.0..=1.0).contains(&band.end));
    }

    #[test]
    fn speed_factor_scales_animation_time() {
        let (mut ctl, start) = controller();
        ctl.set_speed_factor(2.0);
        let region = PageRegion::new(2000.0, 300.0);
        let id = ctl.attach(region, toggle_config());

        ctl.set_viewport(offset_for(region, 0.5), VIEW_H, start);
        // At double speed the 1200ms run finishes in 600ms of wall time.
        assert!(!ctl.tick(start + Duration::from_millis(650)));
        assert_eq!(ctl.pose(id), Pose::VISIBLE);
    }
}
