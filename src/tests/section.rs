use super::{SectionGroup, SectionTracker};

#[test]
fn test_tracker_starts_before_any_section() {
    let tracker = SectionTracker::new();
    assert_eq!(tracker.current(), None);
    assert_eq!(tracker.group(), SectionGroup(0));
}

#[test]
fn test_advance_counts_from_zero() {
    let mut tracker = SectionTracker::new();

    assert_eq!(tracker.advance(), 0);
    assert_eq!(tracker.group().to_string(), "sage-section-0");

    assert_eq!(tracker.advance(), 1);
    assert_eq!(tracker.current(), Some(1));
    assert_eq!(tracker.group().to_string(), "sage-section-1");
}

#[test]
fn test_group_class_name() {
    assert_eq!(SectionGroup(7).to_string(), "sage-section-7");
}
