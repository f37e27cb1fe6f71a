//! Abstraction over the element a drop target is attached to.
//!
//! The controller never touches a rendering API directly. Hosts wrap the
//! real element (a DOM node, a retained-mode widget, ...) and translate
//! these calls into element creation, class toggling and transforms.

use dropzone_core::geometry::Size;

use crate::overlay::OverlayGeometry;

/// Class set on the target element while an overlay is shown.
pub const DROP_TARGET_CLASS: &str = "drop-target";
/// Class of the container appended to the target for the overlay.
pub const DROPZONE_CLASS: &str = "drop-target-dropzone";
/// Class of the overlay element drawn inside the container.
pub const SELECTION_CLASS: &str = "drop-target-selection";

/// Element operations needed by [`DropTarget`](crate::DropTarget).
///
/// Methods take `&self` so hosts wrapping reference-counted handles (and
/// recording mocks) can use interior mutability.
pub trait OverlayHost {
    /// Handle to an attached overlay node.
    type Overlay;

    /// Inner size of the target element, excluding borders and scrollbars.
    fn client_size(&self) -> Size<f32>;

    /// Create the overlay node and attach it to the target element.
    fn create_overlay(&self) -> Self::Overlay;

    /// Detach and release an overlay node created by [`create_overlay`](Self::create_overlay).
    fn remove_overlay(&self, overlay: Self::Overlay);

    /// Mark or unmark the target element as an active drop target.
    fn set_drop_target_active(&self, active: bool);

    /// Position and mark the overlay for the current zone.
    fn apply_geometry(&self, overlay: &Self::Overlay, geometry: &OverlayGeometry);
}
