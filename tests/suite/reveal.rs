//! Reveal latches and the scoped observer registry.

use folio_types::{
    Reported, RevealLatch, RevealObserver, RevealState, Threshold, VisibleIndexSet,
};

#[test]
fn latch_never_reverts_once_visible() {
    let mut latch = RevealLatch::new(Threshold::DEFAULT);
    assert_eq!(latch.state(), RevealState::Hidden);

    assert!(!latch.observe(0.05));
    assert!(latch.observe(0.1));
    for ratio in [0.0, 0.0, 1.0, 0.0] {
        assert!(!latch.observe(ratio));
        assert!(latch.is_visible());
    }
}

#[test]
fn section_threshold_is_stricter() {
    let mut latch = RevealLatch::new(Threshold::SECTION);
    assert!(!latch.observe(0.15));
    assert!(latch.observe(0.2));
}

#[test]
fn zero_threshold_still_needs_an_intersection() {
    let mut latch = RevealLatch::new(Threshold::new(0.0).unwrap());
    assert!(!latch.observe(0.0));
    assert!(latch.observe(0.01));
}

#[test]
fn out_of_range_threshold_is_rejected() {
    assert!(Threshold::new(1.5).is_err());
    assert!(Threshold::new(-0.1).is_err());
    assert!(Threshold::new(f32::NAN).is_err());
}

#[test]
fn index_set_membership_is_idempotent() {
    let mut set = VisibleIndexSet::new(Threshold::DEFAULT);
    assert!(set.insert(2));
    assert!(!set.insert(2));
    assert_eq!(set.len(), 1);

    assert!(!set.observe(0, 0.05));
    assert!(set.observe(0, 0.5));
    assert!(!set.observe(0, 0.0));
    assert!(set.contains(0));
    assert!(!set.contains(1));
    assert_eq!(set.len(), 2);
}

#[test]
fn dropping_the_observation_stops_reports() {
    let observer = RevealObserver::new();
    let projects = observer.observe_children("projects", Threshold::DEFAULT);
    assert_eq!(observer.report_child(&"projects", 1, 0.4), Reported::Revealed);
    assert!(projects.is_child_visible(1));
    assert!(!projects.is_child_visible(0));

    drop(projects);

    assert!(!observer.is_observing(&"projects"));
    assert_eq!(observer.report_child(&"projects", 0, 1.0), Reported::Ignored);
}

#[test]
fn remount_starts_hidden_and_old_guard_is_inert() {
    let observer = RevealObserver::new();
    let first = observer.observe("skills", Threshold::SECTION);
    assert_eq!(observer.report(&"skills", 0.9), Reported::Revealed);

    let second = observer.observe("skills", Threshold::SECTION);
    assert!(!second.is_visible());
    assert!(!first.is_visible());

    // The stale guard must not unregister the live mount.
    drop(first);
    assert!(observer.is_observing(&"skills"));
    assert_eq!(observer.report(&"skills", 0.5), Reported::Revealed);
    assert!(second.is_visible());
}
