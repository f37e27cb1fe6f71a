//! Test utilities for dropzone.
//!
//! This crate provides stand-ins for the pieces a real host supplies, so
//! drop targets can be driven through whole gestures in plain unit tests.
//!
//! # Overview
//!
//! - `MockOverlayHost` - records every overlay operation (requires `mock` feature)
//! - `MockDragEvent` - drag event with fixed coordinates and bounds (requires `mock` feature)
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use dropzone::{DragAndDropHandler, DropTarget, DropTargetOptions, DropZone};
//! use dropzone_test_utils::{MockDragEvent, MockOverlayHost};
//!
//! let mut target = DropTarget::new(
//!     MockOverlayHost::new(200.0, 100.0),
//!     DropTargetOptions::<MockDragEvent>::new(),
//! );
//!
//! target.on_drag_over(&mut MockDragEvent::at(5.0, 50.0));
//! assert_eq!(target.state(), Some(DropZone::Left));
//! assert_eq!(target.host().count_overlay_creates(), 1);
//! # }
//! ```

#[cfg(feature = "mock")]
pub mod mock_event;
#[cfg(feature = "mock")]
pub mod mock_host;

#[cfg(feature = "mock")]
pub use mock_event::*;
#[cfg(feature = "mock")]
pub use mock_host::*;
