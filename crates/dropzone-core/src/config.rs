/// Process-level configuration for applications embedding dropzone.
#[derive(Debug, Clone)]
pub struct Config {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub log_filter: String,
    pub profiling: ProfilingMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: crate::logging::DEFAULT_FILTER.to_string(),
            profiling: ProfilingMode::Off,
        }
    }
}

impl Config {
    /// Override the log filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Override the profiling mode.
    pub fn with_profiling(mut self, profiling: ProfilingMode) -> Self {
        self.profiling = profiling;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfilingMode {
    /// Profiling scopes are compiled in but not recorded
    #[default]
    Off,
    /// Profiling scopes are recorded and can be read from the global puffin profiler
    On,
}
