//! Math types used across the dropzone crates.
//!
//! Pointer positions and offsets use [`glam`]'s SIMD-friendly vectors.
//!
//! ```
//! use dropzone_core::math::Vec2;
//!
//! let client = Vec2::new(105.0, 60.0);
//! let origin = Vec2::new(100.0, 10.0);
//! assert_eq!(client - origin, Vec2::new(5.0, 50.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Vec2, vec2};
