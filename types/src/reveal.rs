//! One-shot visibility latches.
//!
//! A latch starts [`RevealState::Hidden`] and moves to
//! [`RevealState::Visible`] the first time a reported intersection ratio
//! meets its [`Threshold`]. There is no way back. The set variant,
//! [`VisibleIndexSet`], does the same for each child of a composite element.
//!
//! Latches are driven by injected ratios; nothing here measures a viewport.
//! [`RevealObserver`] keys latches by element identity and hands out an
//! [`Observation`] guard per mount. Dropping the guard unregisters the
//! element, after which reports for it are ignored.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::rc::{Rc, Weak};

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[error("reveal threshold must be within 0.0..=1.0, got {0}")]
pub struct ThresholdError(f32);

/// Minimum visible fraction of an element that reveals it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f32);

impl Threshold {
    /// Used by the contact section.
    pub const DEFAULT: Self = Self(0.1);
    /// Used by content-heavy sections and project cards.
    pub const SECTION: Self = Self(0.2);

    pub fn new(value: f32) -> Result<Self, ThresholdError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ThresholdError(value))
        }
    }

    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// A zero threshold still needs some part of the element on screen.
    #[must_use]
    pub fn is_met_by(self, ratio: f32) -> bool {
        ratio > 0.0 && ratio >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: Threshold,
    state: RevealState,
}

impl RevealLatch {
    #[must_use]
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            state: RevealState::Hidden,
        }
    }

    /// A latch that starts visible, for content shown on mount.
    #[must_use]
    pub fn revealed() -> Self {
        Self {
            threshold: Threshold::default(),
            state: RevealState::Visible,
        }
    }

    /// Feed one intersection report. Returns `true` only on the transition.
    pub fn observe(&mut self, ratio: f32) -> bool {
        if self.state == RevealState::Hidden && self.threshold.is_met_by(ratio) {
            self.state = RevealState::Visible;
            return true;
        }
        false
    }

    #[must_use]
    pub fn state(&self) -> RevealState {
        self.state
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Visible
    }

    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }
}

/// Append-only set of child indices that have crossed the threshold.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisibleIndexSet {
    threshold: Threshold,
    indices: BTreeSet<usize>,
}

impl VisibleIndexSet {
    #[must_use]
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            indices: BTreeSet::new(),
        }
    }

    /// Feed one child's report. Returns `true` if `index` was newly added.
    pub fn observe(&mut self, index: usize, ratio: f32) -> bool {
        self.threshold.is_met_by(ratio) && self.insert(index)
    }

    /// Mark a child visible. Returns `false` if it already was.
    pub fn insert(&mut self, index: usize) -> bool {
        self.indices.insert(index)
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

/// What a report did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reported {
    /// Nothing is observing that key (never mounted, or already released).
    Ignored,
    Unchanged,
    Revealed,
}

#[derive(Debug)]
enum Target {
    Root(RevealLatch),
    Children(VisibleIndexSet),
}

#[derive(Debug)]
struct Slot {
    mount: u64,
    target: Target,
}

#[derive(Debug)]
struct Registry<K> {
    next_mount: u64,
    slots: BTreeMap<K, Slot>,
}

type SharedRegistry<K> = Rc<RefCell<Registry<K>>>;

/// Registry of observed elements, keyed by element identity.
///
/// Single-threaded by construction (`Rc`); reports are handled in arrival
/// order on the UI thread.
#[derive(Debug)]
pub struct RevealObserver<K: Ord> {
    registry: SharedRegistry<K>,
}

impl<K: Ord> Default for RevealObserver<K> {
    fn default() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_mount: 0,
                slots: BTreeMap::new(),
            })),
        }
    }
}

impl<K: Ord + Clone + fmt::Debug> RevealObserver<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing a single element with a hidden latch.
    ///
    /// Re-observing a key replaces the previous mount; the old guard no
    /// longer controls it.
    pub fn observe(&self, key: K, threshold: Threshold) -> Observation<K> {
        self.mount(key, Target::Root(RevealLatch::new(threshold)))
    }

    /// Start observing an element whose latch is already open.
    pub fn observe_revealed(&self, key: K) -> Observation<K> {
        self.mount(key, Target::Root(RevealLatch::revealed()))
    }

    /// Start observing a composite element whose children reveal on their own.
    pub fn observe_children(&self, key: K, threshold: Threshold) -> Observation<K> {
        self.mount(key, Target::Children(VisibleIndexSet::new(threshold)))
    }

    fn mount(&self, key: K, target: Target) -> Observation<K> {
        let mut registry = self.registry.borrow_mut();
        let mount = registry.next_mount;
        registry.next_mount += 1;
        registry.slots.insert(key.clone(), Slot { mount, target });
        Observation {
            key,
            mount,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Report the visible fraction of a single-element target.
    pub fn report(&self, key: &K, ratio: f32) -> Reported {
        let mut registry = self.registry.borrow_mut();
        match registry.slots.get_mut(key).map(|slot| &mut slot.target) {
            Some(Target::Root(latch)) => {
                if latch.observe(ratio) {
                    Reported::Revealed
                } else {
                    Reported::Unchanged
                }
            }
            Some(Target::Children(_)) | None => Reported::Ignored,
        }
    }

    /// Report the visible fraction of one child of a composite target.
    pub fn report_child(&self, key: &K, index: usize, ratio: f32) -> Reported {
        let mut registry = self.registry.borrow_mut();
        match registry.slots.get_mut(key).map(|slot| &mut slot.target) {
            Some(Target::Children(set)) => {
                if set.observe(index, ratio) {
                    Reported::Revealed
                } else {
                    Reported::Unchanged
                }
            }
            Some(Target::Root(_)) | None => Reported::Ignored,
        }
    }

    #[must_use]
    pub fn is_observing(&self, key: &K) -> bool {
        self.registry.borrow().slots.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.borrow().slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scoped observation of one element. Dropping it stops observation.
#[derive(Debug)]
pub struct Observation<K: Ord> {
    key: K,
    mount: u64,
    registry: Weak<RefCell<Registry<K>>>,
}

impl<K: Ord> Observation<K> {
    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }

    fn with_target<R>(&self, read: impl FnOnce(&Target) -> R) -> Option<R> {
        let registry = self.registry.upgrade()?;
        let registry = registry.borrow();
        registry
            .slots
            .get(&self.key)
            .filter(|slot| slot.mount == self.mount)
            .map(|slot| read(&slot.target))
    }

    /// For a composite target, whether any child has been revealed.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.with_target(|target| match target {
            Target::Root(latch) => latch.is_visible(),
            Target::Children(set) => !set.is_empty(),
        })
        .unwrap_or(false)
    }

    #[must_use]
    pub fn is_child_visible(&self, index: usize) -> bool {
        self.with_target(|target| match target {
            Target::Root(latch) => latch.is_visible(),
            Target::Children(set) => set.contains(index),
        })
        .unwrap_or(false)
    }

    /// Snapshot of the revealed children, empty for single-element targets.
    #[must_use]
    pub fn visible_children(&self) -> VisibleIndexSet {
        self.with_target(|target| match target {
            Target::Root(_) => VisibleIndexSet::default(),
            Target::Children(set) => set.clone(),
        })
        .unwrap_or_default()
    }
}

impl<K: Ord> Drop for Observation<K> {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut registry = registry.borrow_mut();
        if registry
            .slots
            .get(&self.key)
            .is_some_and(|slot| slot.mount == self.mount)
        {
            registry.slots.remove(&self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Reported, RevealLatch, RevealObserver, RevealState, Threshold, VisibleIndexSet,
    };

    #[test]
    fn threshold_rejects_out_of_range() {
        assert!(Threshold::new(-0.1).is_err());
        assert!(Threshold::new(1.5).is_err());
        assert!(Threshold::new(f32::NAN).is_err());
        assert_eq!(Threshold::new(0.5).map(Threshold::value), Ok(0.5));
    }

    #[test]
    fn latch_fires_at_threshold_inclusive() {
        let mut latch = RevealLatch::new(Threshold::SECTION);
        assert!(!latch.observe(0.19));
        assert_eq!(latch.state(), RevealState::Hidden);
        assert!(latch.observe(0.2));
        assert!(latch.is_visible());
    }

    #[test]
    fn latch_never_reverts() {
        let mut latch = RevealLatch::new(Threshold::DEFAULT);
        assert!(latch.observe(0.5));
        assert!(!latch.observe(0.0));
        assert!(!latch.observe(1.0), "transition fires once");
        assert_eq!(latch.state(), RevealState::Visible);
    }

    #[test]
    fn zero_threshold_needs_some_intersection() {
        let mut latch = RevealLatch::new(Threshold::new(0.0).unwrap());
        assert!(!latch.observe(0.0));
        assert!(latch.observe(0.01));
    }

    #[test]
    fn index_set_insert_is_idempotent() {
        let mut set = VisibleIndexSet::new(Threshold::SECTION);
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn index_set_children_reveal_independently() {
        let mut set = VisibleIndexSet::new(Threshold::SECTION);
        assert!(set.observe(1, 0.9));
        assert!(!set.observe(0, 0.1));
        assert!(!set.observe(1, 0.0));
        assert!(set.contains(1));
        assert!(!set.contains(0));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn observer_routes_reports_by_key() {
        let observer = RevealObserver::new();
        let skills = observer.observe("skills", Threshold::SECTION);
        let contact = observer.observe("contact", Threshold::DEFAULT);

        assert_eq!(observer.report(&"contact", 0.15), Reported::Revealed);
        assert_eq!(observer.report(&"skills", 0.15), Reported::Unchanged);

        assert!(contact.is_visible());
        assert!(!skills.is_visible());
    }

    #[test]
    fn dropping_the_observation_stops_delivery() {
        let observer = RevealObserver::new();
        let section = observer.observe("services", Threshold::SECTION);
        assert!(observer.is_observing(&"services"));

        drop(section);

        assert!(!observer.is_observing(&"services"));
        assert_eq!(observer.report(&"services", 1.0), Reported::Ignored);
        assert!(observer.is_empty());
    }

    #[test]
    fn remount_starts_hidden_and_old_guard_is_inert() {
        let observer = RevealObserver::new();
        let first = observer.observe("hero", Threshold::DEFAULT);
        observer.report(&"hero", 1.0);
        assert!(first.is_visible());

        let second = observer.observe("hero", Threshold::DEFAULT);
        assert!(!second.is_visible());
        assert!(!first.is_visible(), "stale guard no longer sees the slot");

        drop(first);
        assert!(observer.is_observing(&"hero"));
        assert_eq!(observer.report(&"hero", 0.5), Reported::Revealed);
        assert!(second.is_visible());
    }

    #[test]
    fn child_reports_feed_the_index_set() {
        let observer = RevealObserver::new();
        let cards = observer.observe_children("projects", Threshold::SECTION);

        assert_eq!(observer.report_child(&"projects", 2, 0.4), Reported::Revealed);
        assert_eq!(observer.report_child(&"projects", 2, 0.9), Reported::Unchanged);
        assert_eq!(observer.report(&"projects", 1.0), Reported::Ignored);

        assert!(cards.is_child_visible(2));
        assert!(!cards.is_child_visible(0));
        assert_eq!(cards.visible_children().len(), 1);
    }

    #[test]
    fn guard_outliving_observer_is_harmless() {
        let observer = RevealObserver::new();
        let guard = observer.observe_revealed("hero");
        assert!(guard.is_visible());
        drop(observer);
        assert!(!guard.is_visible());
    }
}
