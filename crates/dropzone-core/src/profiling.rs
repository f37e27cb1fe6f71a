//! Profiling utilities based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the macros expand to nothing, so
//! call sites never need their own `cfg` attributes.

use crate::config::ProfilingMode;

#[cfg(feature = "profiling")]
pub use puffin::{GlobalProfiler, profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __noop_profile {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
pub use crate::__noop_profile as profile_function;
#[cfg(not(feature = "profiling"))]
pub use crate::__noop_profile as profile_scope;

/// Turn scope recording on or off.
pub fn init_profiling(mode: ProfilingMode) {
    let enabled = mode == ProfilingMode::On;

    #[cfg(feature = "profiling")]
    puffin::set_scopes_on(enabled);

    if enabled {
        tracing::info!("puffin scope recording enabled");
    }
}

/// Mark the start of a new profiling frame.
///
/// Hosts typically call this once per dispatched batch of drag events.
#[inline]
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}
