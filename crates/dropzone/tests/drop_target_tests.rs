//! Gesture-level tests for the drop target controller.
//!
//! These drive a `DropTarget` through full drag gestures against the
//! recording mock host, without any real element tree.

use std::cell::RefCell;
use std::rc::Rc;

use dropzone::{
    AcceptedZones, DragAndDropHandler, DragNotification, DropEvent, DropTarget, DropTargetOptions,
    DropZone, OverlayGeometry, OverlayTransform, Quadrant, Sizing, SmallEdges,
};
use dropzone_core::geometry::Rect;
use dropzone_test_utils::{MockDragEvent, MockOverlayHost, OverlayCall};

type Drops = Rc<RefCell<Vec<DropEvent<MockDragEvent>>>>;

fn target_with(
    host: MockOverlayHost,
    options: DropTargetOptions<MockDragEvent>,
) -> (DropTarget<MockOverlayHost, MockDragEvent>, Drops) {
    let mut target = DropTarget::new(host, options);
    let drops: Drops = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&drops);
    target.subscribe_drop(move |drop| sink.borrow_mut().push(drop.clone()));
    (target, drops)
}

fn default_target() -> (DropTarget<MockOverlayHost, MockDragEvent>, Drops) {
    target_with(MockOverlayHost::new(200.0, 100.0), DropTargetOptions::new())
}

#[test]
fn test_full_gesture_drops_on_left() {
    let (mut target, drops) = default_target();

    target.on_drag_enter();
    target.on_drag_over(&mut MockDragEvent::at(5.0, 50.0));

    assert_eq!(target.state(), Some(DropZone::Left));
    assert_eq!(target.host().count_overlay_creates(), 1);
    assert!(target.host().is_drop_target_active());
    assert_eq!(
        target.host().last_geometry(),
        Some(OverlayGeometry {
            transform: OverlayTransform::for_edge(Quadrant::Left, 0.5),
            markers: SmallEdges::empty(),
        })
    );

    target.on_drop(MockDragEvent::at(5.0, 50.0));

    let drops = drops.borrow();
    assert_eq!(drops.len(), 1);
    assert_eq!(drops[0].zone, DropZone::Left);
    assert!(drops[0].native_event.default_prevented);
    assert!(drops[0].native_event.propagation_stopped);

    assert_eq!(target.state(), None);
    assert!(target.host().live_overlays().is_empty());
    assert!(!target.host().is_drop_target_active());
}

#[test]
fn test_drop_without_hover_emits_nothing() {
    let (mut target, drops) = default_target();

    target.on_drag_enter();
    target.on_drop(MockDragEvent::at(5.0, 50.0));

    assert!(drops.borrow().is_empty());
    assert_eq!(target.host().call_count(), 0);
}

#[test]
fn test_repeated_drag_over_keeps_overlay() {
    let (mut target, _drops) = default_target();

    for _ in 0..5 {
        target.on_drag_over(&mut MockDragEvent::at(100.0, 50.0));
    }

    assert_eq!(target.state(), Some(DropZone::Center));
    assert_eq!(target.host().count_overlay_creates(), 1);
    assert_eq!(target.host().count_overlay_removes(), 0);
    assert_eq!(target.host().live_overlays().len(), 1);
}

#[test]
fn test_zone_changes_reuse_overlay() {
    let (mut target, drops) = default_target();

    target.on_drag_over(&mut MockDragEvent::at(5.0, 50.0));
    target.on_drag_over(&mut MockDragEvent::at(195.0, 50.0));
    assert_eq!(target.state(), Some(DropZone::Right));

    target.on_drag_over(&mut MockDragEvent::at(100.0, 95.0));
    assert_eq!(target.state(), Some(DropZone::Bottom));
    assert_eq!(
        target.host().last_geometry().map(|g| g.transform.to_string()),
        Some("translateY(25%) scaleY(0.5)".to_string())
    );

    target.on_drag_over(&mut MockDragEvent::at(100.0, 50.0));
    assert_eq!(target.state(), Some(DropZone::Center));
    assert_eq!(target.host().last_geometry(), Some(OverlayGeometry::FULL));

    assert_eq!(target.host().count_overlay_creates(), 1);

    target.on_drop(MockDragEvent::at(100.0, 50.0));
    assert_eq!(drops.borrow()[0].zone, DropZone::Center);
}

#[test]
fn test_zero_size_target_is_ignored() {
    let (mut target, drops) = target_with(MockOverlayHost::new(0.0, 100.0), DropTargetOptions::new());

    target.on_drag_over(&mut MockDragEvent::at(5.0, 50.0));
    assert_eq!(target.state(), None);
    assert_eq!(target.host().call_count(), 0);

    target.on_drop(MockDragEvent::at(5.0, 50.0));
    assert!(drops.borrow().is_empty());
}

#[test]
fn test_zero_size_mid_hover_keeps_state() {
    let (mut target, _drops) = default_target();

    target.on_drag_over(&mut MockDragEvent::at(5.0, 50.0));
    target.host().set_client_size(200.0, 0.0);
    target.on_drag_over(&mut MockDragEvent::at(195.0, 50.0));

    assert_eq!(target.state(), Some(DropZone::Left));
    assert_eq!(target.host().live_overlays().len(), 1);
}

#[test]
fn test_not_applicable_removes_overlay() {
    let (mut target, drops) = target_with(
        MockOverlayHost::new(200.0, 100.0),
        DropTargetOptions::new().accepted_zones(AcceptedZones::EDGES),
    );

    target.on_drag_over(&mut MockDragEvent::at(5.0, 50.0));
    assert_eq!(target.state(), Some(DropZone::Left));

    target.on_drag_over(&mut MockDragEvent::at(100.0, 50.0));
    assert_eq!(target.state(), None);
    assert!(target.host().live_overlays().is_empty());
    assert!(!target.host().is_drop_target_active());

    target.on_drop(MockDragEvent::at(100.0, 50.0));
    assert!(drops.borrow().is_empty());
}

#[test]
fn test_empty_accepted_zones_never_show_overlay() {
    let (mut target, _drops) = target_with(
        MockOverlayHost::new(200.0, 100.0),
        DropTargetOptions::new().accepted_zones(AcceptedZones::empty()),
    );

    target.on_drag_over(&mut MockDragEvent::at(5.0, 50.0));
    target.on_drag_over(&mut MockDragEvent::at(100.0, 50.0));

    assert_eq!(target.state(), None);
    assert_eq!(target.host().count_overlay_creates(), 0);
}

#[test]
fn test_constant_false_predicate_suppresses_overlay() {
    let (mut target, drops) = target_with(
        MockOverlayHost::new(200.0, 100.0),
        DropTargetOptions::new().can_display_overlay(false),
    );

    target.on_drag_over(&mut MockDragEvent::at(5.0, 50.0));
    assert_eq!(target.state(), None);
    assert_eq!(target.host().call_count(), 0);

    target.on_drop(MockDragEvent::at(5.0, 50.0));
    assert!(drops.borrow().is_empty());
}

#[test]
fn test_computed_predicate_uses_payload() {
    let (mut target, _drops) = target_with(
        MockOverlayHost::new(200.0, 100.0),
        DropTargetOptions::new().can_display_overlay_with(|event: &MockDragEvent, _| {
            event.payload.as_deref() == Some("application/x-panel")
        }),
    );

    target.on_drag_over(&mut MockDragEvent::at(5.0, 50.0).with_payload("text/plain"));
    assert_eq!(target.state(), None);

    target.on_drag_over(&mut MockDragEvent::at(5.0, 50.0).with_payload("application/x-panel"));
    assert_eq!(target.state(), Some(DropZone::Left));
}

#[test]
fn test_rejected_hover_leaves_state_unchanged() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let record = Rc::clone(&seen);
    let (mut target, _drops) = target_with(
        MockOverlayHost::new(200.0, 100.0),
        DropTargetOptions::new().can_display_overlay_with(move |_: &MockDragEvent, quadrant| {
            record.borrow_mut().push(quadrant);
            quadrant != Some(Quadrant::Top)
        }),
    );

    target.on_drag_over(&mut MockDragEvent::at(5.0, 50.0));
    let updates = target.host().count_geometry_updates();

    target.on_drag_over(&mut MockDragEvent::at(100.0, 5.0));
    assert_eq!(target.state(), Some(DropZone::Left));
    assert_eq!(target.host().count_geometry_updates(), updates);

    target.on_drag_over(&mut MockDragEvent::at(100.0, 50.0));
    assert_eq!(target.state(), Some(DropZone::Center));

    assert_eq!(
        *seen.borrow(),
        vec![Some(Quadrant::Left), Some(Quadrant::Top), None]
    );
}

#[test]
fn test_leave_and_end_reset_to_idle() {
    let (mut target, _drops) = default_target();

    target.on_drag_over(&mut MockDragEvent::at(5.0, 50.0));
    target.on_drag_leave();
    assert_eq!(target.state(), None);
    assert!(target.host().live_overlays().is_empty());

    target.on_drag_over(&mut MockDragEvent::at(195.0, 50.0));
    assert_eq!(target.state(), Some(DropZone::Right));
    target.on_drag_end();
    assert_eq!(target.state(), None);
    assert!(target.host().live_overlays().is_empty());

    // a fresh gesture allocates a fresh overlay
    assert_eq!(target.host().count_overlay_creates(), 2);
    assert_eq!(target.host().count_overlay_removes(), 2);

    target.on_drag_leave();
    assert_eq!(target.host().count_overlay_removes(), 2);
}

#[test]
fn test_dispose_mid_hover() {
    let (mut target, drops) = default_target();

    target.on_drag_over(&mut MockDragEvent::at(5.0, 50.0));
    target.dispose();

    assert_eq!(target.state(), None);
    assert!(target.host().live_overlays().is_empty());
    assert!(!target.host().is_drop_target_active());

    target.dispose();
    assert_eq!(target.host().count_overlay_removes(), 1);

    target.on_drag_over(&mut MockDragEvent::at(5.0, 50.0));
    target.on_drop(MockDragEvent::at(5.0, 50.0));
    assert!(drops.borrow().is_empty());
}

#[test]
fn test_pointer_is_relative_to_target_bounds() {
    let (mut target, _drops) = default_target();
    let bounds = Rect::new(300.0, 400.0, 200.0, 100.0);

    target.on_drag_over(&mut MockDragEvent::at(305.0, 450.0).with_target_bounds(bounds));
    assert_eq!(target.state(), Some(DropZone::Left));

    target.on_drag_over(&mut MockDragEvent::at(400.0, 405.0).with_target_bounds(bounds));
    assert_eq!(target.state(), Some(DropZone::Top));
}

#[test]
fn test_pixel_activation_bands() {
    let (mut target, _drops) = target_with(
        MockOverlayHost::new(200.0, 100.0),
        DropTargetOptions::new().activation_size(Sizing::pixels(10.0)),
    );

    target.on_drag_over(&mut MockDragEvent::at(15.0, 50.0));
    assert_eq!(target.state(), Some(DropZone::Center));

    target.on_drag_over(&mut MockDragEvent::at(5.0, 50.0));
    assert_eq!(target.state(), Some(DropZone::Left));

    target.on_drag_over(&mut MockDragEvent::at(100.0, 95.0));
    assert_eq!(target.state(), Some(DropZone::Bottom));
}

#[test]
fn test_overlay_size_option() {
    let (mut target, _drops) = target_with(
        MockOverlayHost::new(400.0, 300.0),
        DropTargetOptions::new().overlay_size(Sizing::pixels(100.0)),
    );
    let bounds = Rect::new(0.0, 0.0, 400.0, 300.0);

    target.on_drag_over(&mut MockDragEvent::at(395.0, 150.0).with_target_bounds(bounds));
    assert_eq!(
        target.host().last_geometry().map(|g| g.transform),
        Some(OverlayTransform::for_edge(Quadrant::Right, 0.25))
    );
}

#[test]
fn test_small_target_sets_marker() {
    let (mut target, _drops) = target_with(MockOverlayHost::new(80.0, 300.0), DropTargetOptions::new());
    let bounds = Rect::new(0.0, 0.0, 80.0, 300.0);

    target.on_drag_over(&mut MockDragEvent::at(2.0, 150.0).with_target_bounds(bounds));
    assert_eq!(target.state(), Some(DropZone::Left));
    assert_eq!(
        target.host().last_geometry(),
        Some(OverlayGeometry {
            transform: OverlayTransform::Identity,
            markers: SmallEdges::SMALL_LEFT,
        })
    );

    target.on_drag_over(&mut MockDragEvent::at(40.0, 10.0).with_target_bounds(bounds));
    assert_eq!(target.state(), Some(DropZone::Top));
    let geometry = target.host().last_geometry().unwrap();
    assert!(geometry.markers.is_empty());
    assert!(!geometry.transform.is_identity());
}

#[test]
fn test_unsubscribed_listener_is_not_called() {
    let mut target = DropTarget::new(
        MockOverlayHost::new(200.0, 100.0),
        DropTargetOptions::<MockDragEvent>::new(),
    );
    let count = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&count);
    let id = target.subscribe_drop(move |_| *counter.borrow_mut() += 1);

    assert!(target.unsubscribe_drop(id));
    target.on_drag_over(&mut MockDragEvent::at(5.0, 50.0));
    target.on_drop(MockDragEvent::at(5.0, 50.0));

    assert_eq!(*count.borrow(), 0);
}

#[test]
fn test_dispatch_queued_notifications() {
    let (mut target, drops) = default_target();

    let gesture = vec![
        DragNotification::Enter,
        DragNotification::Over(MockDragEvent::at(100.0, 5.0)),
        DragNotification::Over(MockDragEvent::at(100.0, 4.0)),
        DragNotification::Drop(MockDragEvent::at(100.0, 4.0)),
    ];
    for notification in gesture {
        notification.dispatch(&mut target);
    }

    assert_eq!(drops.borrow().len(), 1);
    assert_eq!(drops.borrow()[0].zone, DropZone::Top);
    assert_eq!(target.state(), None);
}

#[test]
fn test_host_call_sequence() {
    let (mut target, _drops) = default_target();

    target.on_drag_over(&mut MockDragEvent::at(5.0, 50.0));
    target.on_drag_end();

    let calls = target.host().calls();
    assert!(matches!(calls[0], OverlayCall::CreateOverlay { id: 0 }));
    assert_eq!(calls[1], OverlayCall::SetDropTargetActive { active: true });
    assert!(matches!(calls[2], OverlayCall::ApplyGeometry { id: 0, .. }));
    assert_eq!(calls[3], OverlayCall::RemoveOverlay { id: 0 });
    assert_eq!(calls[4], OverlayCall::SetDropTargetActive { active: false });
}
