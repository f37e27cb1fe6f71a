//! Replays a drag gesture against a host that prints every overlay operation.
//!
//! Run with `RUST_LOG=dropzone=trace` to see zone classification as well.

use std::cell::Cell;

use dropzone::{
    AcceptedZones, DragEvent, DragNotification, DropTarget, DropTargetOptions, OverlayGeometry,
    OverlayHost, SELECTION_CLASS, Sizing,
};
use dropzone_core::config::Config;
use dropzone_core::geometry::{Rect, Size};
use dropzone_core::math::Vec2;

struct PrintHost {
    size: Size<f32>,
    next_id: Cell<u32>,
}

impl OverlayHost for PrintHost {
    type Overlay = u32;

    fn client_size(&self) -> Size<f32> {
        self.size
    }

    fn create_overlay(&self) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        println!("create .{} #{}", SELECTION_CLASS, id);
        id
    }

    fn remove_overlay(&self, overlay: u32) {
        println!("remove #{}", overlay);
    }

    fn set_drop_target_active(&self, active: bool) {
        println!("drop-target active: {}", active);
    }

    fn apply_geometry(&self, overlay: &u32, geometry: &OverlayGeometry) {
        let classes: Vec<_> = geometry.markers.class_names().collect();
        println!(
            "#{} transform: '{}' markers: {:?}",
            overlay, geometry.transform, classes
        );
    }
}

#[derive(Debug)]
struct PointerEvent {
    client: Vec2,
    bounds: Rect<f32>,
}

impl DragEvent for PointerEvent {
    fn client_position(&self) -> Vec2 {
        self.client
    }

    fn current_target_bounds(&self) -> Rect<f32> {
        self.bounds
    }

    fn prevent_default(&mut self) {}

    fn stop_propagation(&mut self) {}
}

fn main() {
    dropzone_core::logging::init_with(&Config::default().with_log_filter("dropzone=debug"));

    let bounds = Rect::new(40.0, 40.0, 640.0, 360.0);
    let host = PrintHost {
        size: bounds.size(),
        next_id: Cell::new(0),
    };

    let mut target = DropTarget::new(
        host,
        DropTargetOptions::<PointerEvent>::new()
            .accepted_zones(AcceptedZones::all())
            .activation_size(Sizing::percentage(25.0))
            .overlay_size(Sizing::percentage(40.0)),
    );
    target.subscribe_drop(|drop| {
        println!(
            "dropped on {} at {:?}",
            drop.zone, drop.native_event.client
        );
    });

    let at = |x: f32, y: f32| PointerEvent {
        client: Vec2::new(x, y),
        bounds,
    };

    let gesture = [
        DragNotification::Enter,
        DragNotification::Over(at(60.0, 200.0)),
        DragNotification::Over(at(360.0, 60.0)),
        DragNotification::Over(at(360.0, 220.0)),
        DragNotification::Over(at(660.0, 380.0)),
        DragNotification::Drop(at(660.0, 380.0)),
    ];

    for notification in gesture {
        notification.dispatch(&mut target);
    }

    target.dispose();
}
