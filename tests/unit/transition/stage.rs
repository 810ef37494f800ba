use super::*;

#[test]
fn container_starts_mounted_without_transform() {
    let c = ContentContainer::new(ContentUnit::new("index"));
    assert_eq!(c.mounted().as_str(), "index");
    assert_eq!(c.mount_count(), 1);
    assert_eq!(c.transform(), None);
    assert!(c.pose().is_resting());
}

#[test]
fn mount_replaces_and_counts() {
    let mut c = ContentContainer::new(ContentUnit::new("index"));
    c.mount(ContentUnit::new("projects"));
    assert_eq!(c.mounted().as_str(), "projects");
    assert_eq!(c.mount_count(), 2);
}

#[test]
fn clear_transform_returns_to_layout_flow() {
    let mut c = ContentContainer::new(ContentUnit::new("index"));
    let p = ContentPose {
        scale: 0.5,
        ..ContentPose::RESTING
    };
    c.set_pose(p);
    assert_eq!(c.pose(), p);
    c.clear_transform();
    assert_eq!(c.transform(), None);
}

#[test]
fn scroll_to_top_counts_resets() {
    let mut v = Viewport::default();
    v.scroll_to(10.0, 900.0);
    assert_eq!(v.reset_count(), 0);
    v.scroll_to_top();
    assert_eq!((v.scroll_x, v.scroll_y), (0.0, 0.0));
    assert_eq!(v.reset_count(), 1);
}
