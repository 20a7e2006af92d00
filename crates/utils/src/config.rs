//! Configuration structs for the host runtime and logging.

use std::time::Duration;

/// Default number of scheduler ticks between polls of external events
const DEFAULT_EVENT_INTERVAL: u32 = 61;

/// Default keep-alive for idle blocking-pool threads (10s)
const DEFAULT_THREAD_KEEP_ALIVE: Duration = Duration::from_secs(10);

/// Default filter directive when `RUST_LOG` is unset
const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// Configuration for the current-thread runtime built by
/// [`AsyncRuntime`](crate::AsyncRuntime)
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Enable the tokio timer driver (needed by `sleep`, `timeout` and
    /// [`cancel_after`](crate::cancel_after))
    pub enable_time: bool,
    /// Scheduler ticks between polls of external events
    pub event_interval: u32,
    /// How long idle blocking-pool threads stay alive
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            enable_time: true,
            event_interval: DEFAULT_EVENT_INTERVAL,
            thread_keep_alive: DEFAULT_THREAD_KEEP_ALIVE,
        }
    }
}

impl RuntimeConfig {
    /// A runtime without a timer driver, for futures that never sleep
    pub fn without_time() -> Self {
        Self {
            enable_time: false,
            ..Self::default()
        }
    }
}

/// Configuration for [`logging::init_with`](crate::logging::init_with)
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset or invalid
    pub default_directive: String,
    /// Emit ANSI colour codes
    pub ansi: bool,
    /// Include the event target in each line
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
            ansi: false,
            with_target: false,
        }
    }
}

impl LogConfig {
    /// Verbose configuration for debugging combinator behavior
    pub fn verbose() -> Self {
        Self {
            default_directive: "tapline_core=trace,tapline_utils=debug".to_string(),
            with_target: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_defaults() {
        let config = RuntimeConfig::default();
        assert!(config.enable_time);
        assert_eq!(config.event_interval, 61);
        assert!(!RuntimeConfig::without_time().enable_time);
    }

    #[test]
    fn test_log_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.default_directive, "info");
        assert!(!config.ansi);
        assert!(LogConfig::verbose().with_target);
    }
}
