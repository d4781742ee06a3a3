// SPDX-License-Identifier: MPL-2.0
//! Single-selection tab sets with entrance replay.
//!
//! A [`TabSet`] is a fixed, ordered collection of keyed tabs; a
//! [`TabSwitcher`] holds exactly one active key and restarts a one-shot
//! staggered entrance run for the newly mounted content on every switch.
//! The entrance is the reveal controller's forward run without viewport
//! gating: by the time a tab is clicked its content region is already on
//! screen.
//!
//! Selecting a key that is not a member of the set is guarded: the active
//! key is left unchanged and no entrance restarts. In practice tab buttons
//! are generated from the set itself, so the guard is unreachable through
//! the UI, but it keeps the active-key invariant unconditionally true.

use crate::motion::timing::{AnimationSpec, Easing, Pose, Stagger};
use std::time::{Duration, Instant};

/// One tab: a key, a button label, and a small glyph shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabEntry<K> {
    pub key: K,
    pub label: &'static str,
    pub glyph: &'static str,
}

/// Fixed, ordered, non-empty collection of tabs.
///
/// Non-emptiness is enforced by construction: the first entry is a separate
/// parameter, so "a tab set with no active tab" is unrepresentable.
#[derive(Debug, Clone)]
pub struct TabSet<K> {
    entries: Vec<TabEntry<K>>,
}

impl<K: Copy + PartialEq> TabSet<K> {
    #[must_use]
    pub fn new(first: TabEntry<K>, rest: impl IntoIterator<Item = TabEntry<K>>) -> Self {
        let mut entries = vec![first];
        entries.extend(rest);
        Self { entries }
    }

    /// Key of the first tab, the initial selection.
    #[must_use]
    pub fn first_key(&self) -> K {
        self.entries[0].key
    }

    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabEntry<K>> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Result of a [`TabSwitcher::select`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The active key changed; the entrance run restarted.
    Switched,
    /// The key was already active; nothing changed.
    AlreadyActive,
    /// The key is not a member of the set; the active key is unchanged.
    InvalidTab,
}

/// Timing of the content entrance run after a switch.
#[derive(Debug, Clone, Copy)]
struct EntranceTiming {
    anim: AnimationSpec,
    stagger: Stagger,
    hidden: Pose,
}

impl Default for EntranceTiming {
    fn default() -> Self {
        Self {
            anim: AnimationSpec {
                duration: Duration::from_millis(600),
                easing: Easing::QuadOut,
                delay: Duration::ZERO,
            },
            stagger: Stagger::new(Duration::from_millis(100)),
            hidden: Pose::hidden(0.0, 30.0, 1.0),
        }
    }
}

/// Holds the active tab key and the entrance clock of its content.
#[derive(Debug, Clone)]
pub struct TabSwitcher<K> {
    tabs: TabSet<K>,
    active: K,
    timing: EntranceTiming,
    /// When the current content's entrance run started. `None` in
    /// reduced-motion mode, where content mounts fully visible.
    entrance_started: Option<Instant>,
    instant: bool,
}

impl<K: Copy + PartialEq> TabSwitcher<K> {
    /// Creates a switcher with the set's first key active and its entrance
    /// run started at `now` (the initial mount also animates).
    #[must_use]
    pub fn new(tabs: TabSet<K>, now: Instant) -> Self {
        let active = tabs.first_key();
        Self {
            tabs,
            active,
            timing: EntranceTiming::default(),
            entrance_started: Some(now),
            instant: false,
        }
    }

    /// Reduced-motion mode: content mounts fully visible, no entrance run.
    pub fn set_instant_entrance(&mut self, instant: bool) {
        self.instant = instant;
        if instant {
            self.entrance_started = None;
        }
    }

    #[must_use]
    pub fn active(&self) -> K {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, key: K) -> bool {
        self.active == key
    }

    #[must_use]
    pub fn tabs(&self) -> &TabSet<K> {
        &self.tabs
    }

    /// Switches the active tab. Selecting the active key again or a key
    /// outside the set leaves all state untouched.
    pub fn select(&mut self, key: K, now: Instant) -> SelectOutcome {
        if !self.tabs.contains(key) {
            tracing::debug!("ignoring selection of key outside the tab set");
            return SelectOutcome::InvalidTab;
        }
        if key == self.active {
            return SelectOutcome::AlreadyActive;
        }
        self.active = key;
        // The previous tab's content is unmounted by the view (only the
        // active tab renders), so restarting the clock here is all that
        // "re-run the entrance" requires.
        self.entrance_started = (!self.instant).then_some(now);
        SelectOutcome::Switched
    }

    /// Pose of the content child at `index`, staggered by mount order.
    #[must_use]
    pub fn child_pose(&self, index: usize, now: Instant) -> Pose {
        let Some(started) = self.entrance_started else {
            return Pose::VISIBLE;
        };
        let elapsed = now.saturating_duration_since(started);
        let child_delay = self.timing.stagger.delay_for(index);
        let eased = self.timing.anim.eased_at(elapsed.saturating_sub(child_delay));
        self.timing.hidden.toward_visible(eased)
    }

    /// Whether the entrance run of `child_count` children is still playing.
    #[must_use]
    pub fn is_animating(&self, child_count: usize, now: Instant) -> bool {
        let Some(started) = self.entrance_started else {
            return false;
        };
        let total = self.timing.anim.total() + self.timing.stagger.tail(child_count);
        now.saturating_duration_since(started) < total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tab {
        Projects,
        Skills,
        Certifications,
    }

    fn three_tabs() -> TabSet<Tab> {
        TabSet::new(
            TabEntry {
                key: Tab::Projects,
                label: "Projects",
                glyph: "🚀",
            },
            [
                TabEntry {
                    key: Tab::Skills,
                    label: "Skills & Tools",
                    glyph: "⚡",
                },
                TabEntry {
                    key: Tab::Certifications,
                    label: "Certificates",
                    glyph: "🏆",
                },
            ],
        )
    }

    #[test]
    fn first_tab_is_active_on_mount() {
        let switcher = TabSwitcher::new(three_tabs(), Instant::now());
        assert_eq!(switcher.active(), Tab::Projects);
        assert!(switcher.is_active(Tab::Projects));
    }

    #[test]
    fn select_switches_active_key() {
        let now = Instant::now();
        let mut switcher = TabSwitcher::new(three_tabs(), now);
        let outcome = switcher.select(Tab::Certifications, now);
        assert_eq!(outcome, SelectOutcome::Switched);
        assert_eq!(switcher.active(), Tab::Certifications);
        // Only the active tab renders, so the projects region is unmounted.
        assert!(!switcher.is_active(Tab::Projects));
    }

    #[test]
    fn select_outside_set_preserves_active_key() {
        let two_tabs = TabSet::new(
            TabEntry {
                key: Tab::Projects,
                label: "Projects",
                glyph: "🚀",
            },
            [TabEntry {
                key: Tab::Skills,
                label: "Skills & Tools",
                glyph: "⚡",
            }],
        );
        let now = Instant::now();
        let mut switcher = TabSwitcher::new(two_tabs, now);

        let outcome = switcher.select(Tab::Certifications, now);
        assert_eq!(outcome, SelectOutcome::InvalidTab);
        assert_eq!(switcher.active(), Tab::Projects);
        assert!(switcher.tabs().contains(Tab::Skills));
        assert!(!switcher.tabs().contains(Tab::Certifications));
    }

    #[test]
    fn reselecting_active_key_does_not_restart_entrance() {
        let now = Instant::now();
        let mut switcher = TabSwitcher::new(three_tabs(), now);
        let later = now + Duration::from_secs(5);
        // Initial entrance long finished.
        assert!(!switcher.is_animating(3, later));

        assert_eq!(
            switcher.select(Tab::Projects, later),
            SelectOutcome::AlreadyActive
        );
        assert!(!switcher.is_animating(3, later));
    }

    #[test]
    fn switching_back_replays_entrance_each_time() {
        let now = Instant::now();
        let mut switcher = TabSwitcher::new(three_tabs(), now);
        let t1 = now + Duration::from_secs(5);
        switcher.select(Tab::Skills, t1);
        assert!(switcher.is_animating(3, t1));

        // Back to the first tab: its entrance runs again from zero, no
        // cached "already shown" state.
        let t2 = t1 + Duration::from_secs(5);
        switcher.select(Tab::Projects, t2);
        assert!(switcher.is_animating(3, t2));
        assert_abs_diff_eq!(switcher.child_pose(0, t2).opacity, 0.0);
    }

    #[test]
    fn entrance_staggers_children() {
        let now = Instant::now();
        let switcher = TabSwitcher::new(three_tabs(), now);

        let mid = now + Duration::from_millis(150);
        let first = switcher.child_pose(0, mid);
        let second = switcher.child_pose(1, mid);
        let third = switcher.child_pose(2, mid);
        assert!(first.opacity > second.opacity);
        assert!(second.opacity > third.opacity);
    }

    #[test]
    fn entrance_completes_to_identity() {
        let now = Instant::now();
        let switcher = TabSwitcher::new(three_tabs(), now);
        let done = now + Duration::from_secs(2);
        assert!(!switcher.is_animating(3, done));
        assert_eq!(switcher.child_pose(0, done), Pose::VISIBLE);
        assert_eq!(switcher.child_pose(2, done), Pose::VISIBLE);
    }

    #[test]
    fn instant_entrance_mounts_content_visible() {
        let now = Instant::now();
        let mut switcher = TabSwitcher::new(three_tabs(), now);
        switcher.set_instant_entrance(true);
        assert_eq!(switcher.child_pose(0, now), Pose::VISIBLE);

        switcher.select(Tab::Skills, now);
        assert_eq!(switcher.child_pose(0, now), Pose::VISIBLE);
        assert!(!switcher.is_animating(3, now));
    }
}
