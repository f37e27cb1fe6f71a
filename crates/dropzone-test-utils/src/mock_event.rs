//! Mock drag event.

use dropzone::DragEvent;
use dropzone_core::geometry::Rect;
use dropzone_core::math::Vec2;

/// Drag event with a fixed pointer position and target bounds.
///
/// Tracks whether the controller suppressed default handling and
/// propagation, and carries an optional payload type for display
/// predicates.
#[derive(Debug, Clone, PartialEq)]
pub struct MockDragEvent {
    pub client_position: Vec2,
    pub target_bounds: Rect<f32>,
    pub payload: Option<String>,
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl MockDragEvent {
    /// Event at `(x, y)` relative to a target whose bounds start at the origin.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            client_position: Vec2::new(x, y),
            target_bounds: Rect::new(0.0, 0.0, 200.0, 100.0),
            payload: None,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Place the target element at `bounds` in client coordinates.
    pub fn with_target_bounds(mut self, bounds: Rect<f32>) -> Self {
        self.target_bounds = bounds;
        self
    }

    /// Attach a payload type (e.g. a MIME type).
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }
}

impl DragEvent for MockDragEvent {
    fn client_position(&self) -> Vec2 {
        self.client_position
    }

    fn current_target_bounds(&self) -> Rect<f32> {
        self.target_bounds
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}
