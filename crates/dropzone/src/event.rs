//! Drag notifications consumed by drop targets.

use dropzone_core::geometry::Rect;
use dropzone_core::math::Vec2;

use crate::zone::DropZone;

/// Native drag event payload delivered by the host's drag observer.
pub trait DragEvent {
    /// Pointer position in client (viewport) coordinates.
    fn client_position(&self) -> Vec2;

    /// Bounding box of the element the listener is bound to, in client coordinates.
    fn current_target_bounds(&self) -> Rect<f32>;

    /// Suppress the platform's default handling of the event.
    fn prevent_default(&mut self);

    /// Stop the event from reaching ancestor listeners.
    fn stop_propagation(&mut self);
}

/// Receiver of the five drag lifecycle callbacks.
///
/// Hosts call these in gesture order: enter, any number of overs, then
/// exactly one of leave, end or drop.
pub trait DragAndDropHandler<E> {
    fn on_drag_enter(&mut self);
    fn on_drag_over(&mut self, event: &mut E);
    fn on_drag_leave(&mut self);
    fn on_drag_end(&mut self);
    fn on_drop(&mut self, event: E);
}

/// A single queued drag notification.
#[derive(Debug, Clone, PartialEq)]
pub enum DragNotification<E> {
    Enter,
    Over(E),
    Leave,
    End,
    Drop(E),
}

impl<E> DragNotification<E> {
    /// Route this notification to the matching handler callback.
    ///
    /// `Over` events are handed back so the caller can inspect what the
    /// handler did to them (e.g. whether the default was prevented).
    pub fn dispatch<H: DragAndDropHandler<E>>(self, handler: &mut H) -> Option<E> {
        match self {
            DragNotification::Enter => {
                handler.on_drag_enter();
                None
            }
            DragNotification::Over(mut event) => {
                handler.on_drag_over(&mut event);
                Some(event)
            }
            DragNotification::Leave => {
                handler.on_drag_leave();
                None
            }
            DragNotification::End => {
                handler.on_drag_end();
                None
            }
            DragNotification::Drop(event) => {
                handler.on_drop(event);
                None
            }
        }
    }
}

/// Emitted when an item is dropped on a resolved zone.
#[derive(Debug, Clone, PartialEq)]
pub struct DropEvent<E> {
    pub zone: DropZone,
    pub native_event: E,
}
