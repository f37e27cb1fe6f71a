//! Dropzone - drop target detection for drag-and-drop docking
//!
//! This crate decides which part of a rectangular drop target the pointer
//! is over during a drag, and drives the preview overlay for it:
//! - **Zone detection**: edge bands sized in percent or pixels, with a
//!   fixed left, right, top, bottom priority
//! - **Overlay geometry**: shrink-and-shift transforms plus small-target markers
//! - **Drop target controller**: overlay lifecycle and drop notification
//!
//! Rendering and event delivery stay with the host, behind the
//! [`OverlayHost`] and [`DragEvent`] traits.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # use dropzone::{AcceptedZones, DragAndDropHandler, DragEvent, DropTarget, DropTargetOptions, OverlayHost, Sizing};
//! # fn run<H: OverlayHost, E: DragEvent + 'static>(host: H, mut event: E) {
//! let mut target = DropTarget::new(
//!     host,
//!     DropTargetOptions::<E>::new()
//!         .accepted_zones(AcceptedZones::all())
//!         .activation_size(Sizing::percentage(20.0)),
//! );
//!
//! target.subscribe_drop(|drop| println!("dropped on {}", drop.zone));
//!
//! // Forwarded from the host's drag observer:
//! target.on_drag_over(&mut event);
//! target.on_drop(event);
//! # }
//! ```

pub mod classifier;
pub mod controller;
pub mod emitter;
pub mod error;
pub mod event;
pub mod host;
pub mod options;
pub mod overlay;
pub mod sizing;
pub mod zone;

pub use classifier::{
    BandMetric, Classification, DropZoneDetector, PercentageBand, PixelBand, classify,
    classify_with,
};
pub use controller::DropTarget;
pub use emitter::{Emitter, SubscriptionId};
pub use error::{DropTargetError, DropTargetResult};
pub use event::{DragAndDropHandler, DragEvent, DragNotification, DropEvent};
pub use host::{DROP_TARGET_CLASS, DROPZONE_CLASS, OverlayHost, SELECTION_CLASS};
pub use options::{CanDisplayOverlay, DropTargetOptions};
pub use overlay::{OverlayGeometry, OverlayTransform, SMALL_DIMENSION, SmallEdges, overlay_fraction};
pub use sizing::{
    DEFAULT_ACTIVATION_PERCENT, DEFAULT_OVERLAY_FRACTION, OverlayModel, SizeUnit, Sizing,
};
pub use zone::{AcceptedZones, Direction, DropZone, Quadrant, direction_to_zone};
