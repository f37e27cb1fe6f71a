//! Dropzone Core
//!
//! Shared building blocks for the dropzone crates: logging setup, process
//! configuration, profiling hooks, math re-exports and small geometry types.

pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
