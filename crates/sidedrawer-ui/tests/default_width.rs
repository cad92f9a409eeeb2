//! The process-wide default drawer width.
//!
//! Kept in its own test binary: changing the default is visible to every
//! controller created afterwards in the same process.

use sidedrawer_ui::{
    DEFAULT_DRAWER_WIDTH, DrawerConfig, DrawerController, DrawerError, Frame, ViewStack,
    default_drawer_width, set_default_drawer_width,
};

#[test]
fn test_default_width_applies_to_new_controllers_only() {
    let bounds = Frame::new(0.0, 0.0, 375.0, 667.0);
    assert_eq!(default_drawer_width(), DEFAULT_DRAWER_WIDTH);

    let before = DrawerController::new(ViewStack::new(bounds));
    assert_eq!(before.drawer_width(), 300.0);

    set_default_drawer_width(260.0).expect("valid width");
    assert_eq!(default_drawer_width(), 260.0);
    assert_eq!(DrawerConfig::new().drawer_width, 260.0);

    let after = DrawerController::new(ViewStack::new(bounds));
    assert_eq!(after.drawer_width(), 260.0);
    assert_eq!(after.open_frame(), Frame::new(260.0, 0.0, 375.0, 667.0));
    assert_eq!(before.drawer_width(), 300.0);

    let err = set_default_drawer_width(f32::NAN);
    assert!(matches!(err, Err(DrawerError::InvalidDrawerWidth(_))));
    assert_eq!(default_drawer_width(), 260.0);
}
