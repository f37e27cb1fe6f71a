//! Mock implementation of OverlayHost for testing.
//!
//! This module provides a host that records overlay operations instead of
//! touching a real element tree.

use dropzone::{OverlayGeometry, OverlayHost};
use dropzone_core::geometry::Size;
use parking_lot::Mutex;

/// Records an overlay operation for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayCall {
    CreateOverlay { id: usize },
    RemoveOverlay { id: usize },
    SetDropTargetActive { active: bool },
    ApplyGeometry { id: usize, geometry: OverlayGeometry },
}

/// Overlay node handed out by [`MockOverlayHost`].
#[derive(Debug, PartialEq, Eq)]
pub struct MockOverlay {
    pub id: usize,
}

/// Mock implementation of OverlayHost for testing.
///
/// Methods take `&self` but need to record calls, so state lives behind
/// `Mutex`es.
///
/// # Example
///
/// ```rust
/// use dropzone::OverlayHost;
/// use dropzone_test_utils::MockOverlayHost;
///
/// let host = MockOverlayHost::new(200.0, 100.0);
/// let overlay = host.create_overlay();
/// assert_eq!(host.live_overlays(), vec![overlay.id]);
///
/// host.remove_overlay(overlay);
/// assert!(host.live_overlays().is_empty());
/// assert_eq!(host.call_count(), 2);
/// ```
pub struct MockOverlayHost {
    /// Recorded calls for verification
    calls: Mutex<Vec<OverlayCall>>,

    /// Size reported by `client_size`
    client_size: Mutex<Size<f32>>,

    /// Overlays created and not yet removed
    live: Mutex<Vec<usize>>,

    /// Whether the target element currently carries the drop-target marker
    active: Mutex<bool>,

    next_overlay_id: Mutex<usize>,
}

impl MockOverlayHost {
    /// Create a mock host for a target of the given client size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            client_size: Mutex::new(Size::new(width, height)),
            live: Mutex::new(Vec::new()),
            active: Mutex::new(false),
            next_overlay_id: Mutex::new(0),
        }
    }

    /// Change the reported client size, e.g. to simulate a layout transition.
    pub fn set_client_size(&self, width: f32, height: f32) {
        *self.client_size.lock() = Size::new(width, height);
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<OverlayCall> {
        self.calls.lock().clone()
    }

    /// Count overlay creations.
    pub fn count_overlay_creates(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, OverlayCall::CreateOverlay { .. }))
            .count()
    }

    /// Count overlay removals.
    pub fn count_overlay_removes(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, OverlayCall::RemoveOverlay { .. }))
            .count()
    }

    /// Count geometry updates.
    pub fn count_geometry_updates(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, OverlayCall::ApplyGeometry { .. }))
            .count()
    }

    /// Geometry most recently applied to any overlay.
    pub fn last_geometry(&self) -> Option<OverlayGeometry> {
        self.calls.lock().iter().rev().find_map(|call| match call {
            OverlayCall::ApplyGeometry { geometry, .. } => Some(*geometry),
            _ => None,
        })
    }

    /// Ids of overlays that are currently attached.
    pub fn live_overlays(&self) -> Vec<usize> {
        self.live.lock().clone()
    }

    /// Whether the target element is marked as an active drop target.
    pub fn is_drop_target_active(&self) -> bool {
        *self.active.lock()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Get total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl Default for MockOverlayHost {
    fn default() -> Self {
        Self::new(200.0, 100.0)
    }
}

impl OverlayHost for MockOverlayHost {
    type Overlay = MockOverlay;

    fn client_size(&self) -> Size<f32> {
        *self.client_size.lock()
    }

    fn create_overlay(&self) -> MockOverlay {
        let mut next = self.next_overlay_id.lock();
        let id = *next;
        *next += 1;

        self.live.lock().push(id);
        self.calls.lock().push(OverlayCall::CreateOverlay { id });

        MockOverlay { id }
    }

    fn remove_overlay(&self, overlay: MockOverlay) {
        self.live.lock().retain(|live| *live != overlay.id);
        self.calls
            .lock()
            .push(OverlayCall::RemoveOverlay { id: overlay.id });
    }

    fn set_drop_target_active(&self, active: bool) {
        *self.active.lock() = active;
        self.calls
            .lock()
            .push(OverlayCall::SetDropTargetActive { active });
    }

    fn apply_geometry(&self, overlay: &MockOverlay, geometry: &OverlayGeometry) {
        self.calls.lock().push(OverlayCall::ApplyGeometry {
            id: overlay.id,
            geometry: *geometry,
        });
    }
}
