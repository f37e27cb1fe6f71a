//! Drop target controller.
//!
//! Ties zone detection, the overlay node and drop notification together:
//!
//! ```text
//!            drag over (zone resolved, overlay allowed)
//!   Idle  ------------------------------------------->  Hovering(zone)
//!    ^                                                    |    ^
//!    |   leave / end / drop / dispose / not applicable    |    | drag over
//!    +----------------------------------------------------+----+
//! ```
//!
//! The overlay node exists exactly while the target is hovering. It is
//! released explicitly on every exit transition.

use std::fmt;

use dropzone_core::profiling::profile_function;

use crate::classifier::DropZoneDetector;
use crate::emitter::{Emitter, SubscriptionId};
use crate::event::{DragAndDropHandler, DragEvent, DropEvent};
use crate::host::OverlayHost;
use crate::options::DropTargetOptions;
use crate::overlay::OverlayGeometry;
use crate::zone::DropZone;

/// Overlay node together with the zone it currently shows.
struct ActiveOverlay<O> {
    node: O,
    zone: DropZone,
}

/// A rectangular drop zone attached to a host element.
pub struct DropTarget<H: OverlayHost, E> {
    host: H,
    options: DropTargetOptions<E>,
    detector: DropZoneDetector,
    active: Option<ActiveOverlay<H::Overlay>>,
    drop_emitter: Emitter<DropEvent<E>>,
}

impl<H: OverlayHost, E: DragEvent> DropTarget<H, E> {
    /// Create a drop target for `host`. No overlay is created until the
    /// first qualifying drag over.
    pub fn new(host: H, options: DropTargetOptions<E>) -> Self {
        let detector = DropZoneDetector::from_model(options.accepted_zones, &options.overlay_model);
        Self {
            host,
            options,
            detector,
            active: None,
            drop_emitter: Emitter::new(),
        }
    }

    /// Zone currently highlighted, `None` while idle.
    pub fn state(&self) -> Option<DropZone> {
        self.active.as_ref().map(|active| active.zone)
    }

    pub fn is_hovering(&self) -> bool {
        self.active.is_some()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn options(&self) -> &DropTargetOptions<E> {
        &self.options
    }

    /// Listen for drops on a resolved zone.
    pub fn subscribe_drop<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&DropEvent<E>) + 'static,
    {
        self.drop_emitter.subscribe(listener)
    }

    pub fn unsubscribe_drop(&mut self, id: SubscriptionId) -> bool {
        self.drop_emitter.unsubscribe(id)
    }

    /// Tear down the overlay (if any) and stop emitting drop events.
    ///
    /// Safe to call in any state and more than once.
    pub fn dispose(&mut self) {
        self.remove_overlay();
        self.drop_emitter.dispose();
    }

    fn remove_overlay(&mut self) {
        if let Some(active) = self.active.take() {
            self.host.remove_overlay(active.node);
            self.host.set_drop_target_active(false);
            tracing::debug!(zone = %active.zone, "drop overlay removed");
        }
    }
}

impl<H: OverlayHost, E: DragEvent> DragAndDropHandler<E> for DropTarget<H, E> {
    fn on_drag_enter(&mut self) {}

    fn on_drag_over(&mut self, event: &mut E) {
        profile_function!();

        let size = self.host.client_size();
        if size.is_degenerate() {
            tracing::trace!(?size, "skipping drag over on zero-sized target");
            return;
        }

        let point = event
            .current_target_bounds()
            .to_local(event.client_position());
        let classification = self.detector.detect(point, size);

        let Some(zone) = classification.zone() else {
            self.remove_overlay();
            return;
        };

        if !self
            .options
            .can_display_overlay
            .allows(event, classification.quadrant())
        {
            return;
        }

        if self.active.is_none() {
            let node = self.host.create_overlay();
            self.host.set_drop_target_active(true);
            tracing::debug!("drop overlay created");
            self.active = Some(ActiveOverlay {
                node,
                zone: DropZone::Center,
            });
        }

        if self.options.accepted_zones.is_empty() {
            return;
        }

        let Some(active) = self.active.as_mut() else {
            return;
        };

        let geometry = OverlayGeometry::compute(
            classification.quadrant(),
            size,
            self.options.overlay_model.size,
        );
        self.host.apply_geometry(&active.node, &geometry);

        if active.zone != zone {
            tracing::debug!(from = %active.zone, to = %zone, "drop zone changed");
            active.zone = zone;
        }
    }

    fn on_drag_leave(&mut self) {
        self.remove_overlay();
    }

    fn on_drag_end(&mut self) {
        self.remove_overlay();
    }

    fn on_drop(&mut self, mut event: E) {
        event.prevent_default();
        event.stop_propagation();

        let state = self.state();
        self.remove_overlay();

        match state {
            Some(zone) => {
                tracing::debug!(%zone, "item dropped");
                self.drop_emitter.fire(&DropEvent {
                    zone,
                    native_event: event,
                });
            }
            None => tracing::trace!("drop without a resolved zone ignored"),
        }
    }
}

impl<H: OverlayHost, E> fmt::Debug for DropTarget<H, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropTarget")
            .field("state", &self.active.as_ref().map(|active| active.zone))
            .field("detector", &self.detector)
            .field("drop_emitter", &self.drop_emitter)
            .finish_non_exhaustive()
    }
}
