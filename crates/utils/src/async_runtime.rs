use crate::config::RuntimeConfig;
use std::future::Future;
use tapline_core::{Error, Result};
use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;

/// Async runtime manager that avoids creating runtime in async contexts
pub struct AsyncRuntime {
    config: RuntimeConfig,
    runtime: Option<Runtime>,
}

impl AsyncRuntime {
    /// Create a new async runtime manager
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RuntimeConfig::default())
    }

    /// Create a runtime manager that builds its runtime from `config`
    #[must_use]
    pub fn with_config(config: RuntimeConfig) -> Self {
        Self {
            config,
            runtime: None,
        }
    }

    /// Get or create a runtime
    fn get_or_create_runtime(&mut self) -> Result<&Runtime> {
        if self.runtime.is_none() {
            let mut builder = Builder::new_current_thread();
            builder
                .event_interval(self.config.event_interval)
                .thread_keep_alive(self.config.thread_keep_alive);
            if self.config.enable_time {
                builder.enable_time();
            }

            let runtime = match builder.build() {
                Ok(rt) => rt,
                Err(e) => {
                    return Err(Error::configuration(format!(
                        "failed to create tokio runtime: {e}"
                    )));
                }
            };
            self.runtime = Some(runtime);
        }

        self.runtime.as_ref().ok_or_else(|| {
            Error::configuration("runtime unexpectedly missing after initialization")
        })
    }

    /// Drive a future that needs tokio's timer or task system to completion
    /// on the calling thread, creating the runtime on first use
    pub fn block_on<F, T>(&mut self, future: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if Self::is_in_async_context() {
            return Err(Error::configuration(
                "cannot use block_on from within an async runtime",
            ));
        }

        let runtime = self.get_or_create_runtime()?;

        runtime.block_on(future)
    }

    /// Check if we're already in an async context
    #[must_use]
    pub fn is_in_async_context() -> bool {
        tokio::runtime::Handle::try_current().is_ok()
    }
}

impl Default for AsyncRuntime {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper function to run async code from sync context safely
pub fn run_async<F, T>(future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    if AsyncRuntime::is_in_async_context() {
        // We're already in async context, can't block_on
        return Err(Error::configuration(
            "cannot use block_on from within an async runtime",
        ));
    }

    let mut runtime = AsyncRuntime::new();
    runtime.block_on(future)
}

/// Block the calling thread until `future` completes and return its output.
///
/// No thread is spawned: the future is polled on the caller's thread, so a
/// failing `Result` comes back exactly as the future produced it. The future
/// must not depend on a tokio driver that only the blocked thread could run
/// (for example a timer on a current-thread runtime owned by this thread).
pub fn wait<F>(future: F) -> F::Output
where
    F: Future,
{
    if AsyncRuntime::is_in_async_context() {
        tracing::warn!("blocking wait inside an async runtime stalls the worker thread");
    }

    futures::executor::block_on(future)
}

/// Blocking wait on a spawned tokio task.
///
/// A task that panicked re-raises its panic on the calling thread; an
/// aborted task becomes [`Error::Cancelled`].
pub fn wait_task<T>(handle: JoinHandle<T>) -> Result<T> {
    match wait(handle) {
        Ok(value) => Ok(value),
        Err(join_error) if join_error.is_panic() => {
            std::panic::resume_unwind(join_error.into_panic())
        }
        Err(join_error) => Err(join_error.into()),
    }
}

/// Extension trait for waiting on any future synchronously
pub trait WaitExt: Future + Sized {
    /// Block until the future completes; see [`wait`]
    fn wait(self) -> Self::Output {
        wait(self)
    }
}

impl<F> WaitExt for F where F: Future {}
