//! Drop target configuration.

use std::fmt;

use crate::sizing::{OverlayModel, Sizing};
use crate::zone::{AcceptedZones, Quadrant};

/// Predicate gating whether the overlay may be shown for a hover.
///
/// The computed variant sees the native event and the hovered quadrant
/// (`None` for the center), so hosts can e.g. hide the overlay for
/// payload types they do not accept.
pub enum CanDisplayOverlay<E> {
    Constant(bool),
    Computed(Box<dyn Fn(&E, Option<Quadrant>) -> bool>),
}

impl<E> CanDisplayOverlay<E> {
    /// Wrap a closure as a computed predicate.
    pub fn computed<F>(predicate: F) -> Self
    where
        F: Fn(&E, Option<Quadrant>) -> bool + 'static,
    {
        CanDisplayOverlay::Computed(Box::new(predicate))
    }

    pub fn allows(&self, event: &E, quadrant: Option<Quadrant>) -> bool {
        match self {
            CanDisplayOverlay::Constant(value) => *value,
            CanDisplayOverlay::Computed(predicate) => predicate(event, quadrant),
        }
    }
}

impl<E> Default for CanDisplayOverlay<E> {
    fn default() -> Self {
        CanDisplayOverlay::Constant(true)
    }
}

impl<E> From<bool> for CanDisplayOverlay<E> {
    fn from(value: bool) -> Self {
        CanDisplayOverlay::Constant(value)
    }
}

impl<E> fmt::Debug for CanDisplayOverlay<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanDisplayOverlay::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            CanDisplayOverlay::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Options for a [`DropTarget`](crate::DropTarget).
#[derive(Debug)]
pub struct DropTargetOptions<E> {
    pub can_display_overlay: CanDisplayOverlay<E>,
    /// Zones the target highlights. Empty means no zone ever resolves.
    pub accepted_zones: AcceptedZones,
    pub overlay_model: OverlayModel,
}

impl<E> Default for DropTargetOptions<E> {
    fn default() -> Self {
        Self {
            can_display_overlay: CanDisplayOverlay::default(),
            accepted_zones: AcceptedZones::all(),
            overlay_model: OverlayModel::default(),
        }
    }
}

impl<E> DropTargetOptions<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display predicate (a `bool` or a [`CanDisplayOverlay`]).
    pub fn can_display_overlay(mut self, predicate: impl Into<CanDisplayOverlay<E>>) -> Self {
        self.can_display_overlay = predicate.into();
        self
    }

    /// Set the display predicate from a closure.
    pub fn can_display_overlay_with<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&E, Option<Quadrant>) -> bool + 'static,
    {
        self.can_display_overlay = CanDisplayOverlay::computed(predicate);
        self
    }

    pub fn accepted_zones(mut self, zones: AcceptedZones) -> Self {
        self.accepted_zones = zones;
        self
    }

    pub fn overlay_model(mut self, model: OverlayModel) -> Self {
        self.overlay_model = model;
        self
    }

    /// Set the drawn overlay extent.
    pub fn overlay_size(mut self, size: Sizing) -> Self {
        self.overlay_model.size = Some(size);
        self
    }

    /// Set the edge band width used for zone detection.
    pub fn activation_size(mut self, size: Sizing) -> Self {
        self.overlay_model.activation_size = Some(size);
        self
    }
}
