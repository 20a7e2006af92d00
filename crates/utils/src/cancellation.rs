//! Cancellation-signal adapters.
//!
//! The library never cancels anything on its own. These helpers only turn an
//! externally owned [`CancellationToken`] into something awaitable, or build
//! a token that a timer will cancel later. Acting on the signal stays the
//! caller's job.

use std::future::Future;
use std::time::Duration;
use tapline_core::{Error, Result};
use tokio::runtime::Handle;
use tokio_util::sync::{CancellationToken, WaitForCancellationFutureOwned};

/// A future that completes once `token` is cancelled.
///
/// Completes immediately if the token is already cancelled and never
/// completes if nobody cancels it. The future owns a clone of the token, so
/// it can be moved into spawned tasks.
pub fn cancelled(token: &CancellationToken) -> WaitForCancellationFutureOwned {
    token.clone().cancelled_owned()
}

/// Awaitable view of a cancellation token
pub trait CancellationExt {
    /// See [`cancelled`]
    fn as_future(&self) -> WaitForCancellationFutureOwned;
}

impl CancellationExt for CancellationToken {
    fn as_future(&self) -> WaitForCancellationFutureOwned {
        cancelled(self)
    }
}

/// Build a token that cancels itself once `duration` has elapsed.
///
/// The timer runs on the current tokio runtime, which must have its time
/// driver enabled. Outside a runtime this returns
/// [`Error::Configuration`].
pub fn cancel_after(duration: Duration) -> Result<CancellationToken> {
    let handle = Handle::try_current().map_err(|e| {
        Error::configuration(format!(
            "cannot schedule a cancellation deadline outside a tokio runtime: {e}"
        ))
    })?;

    Ok(cancel_after_on(&handle, duration))
}

/// Like [`cancel_after`], scheduling the timer on an explicit runtime.
pub fn cancel_after_on(handle: &Handle, duration: Duration) -> CancellationToken {
    let token = CancellationToken::new();
    let timer_token = token.clone();
    // Measured from construction on the target runtime's clock, not from
    // when the timer task first runs.
    let deadline = {
        let _context = handle.enter();
        tokio::time::Instant::now() + duration
    };

    handle.spawn(async move {
        tokio::select! {
            () = tokio::time::sleep_until(deadline) => {
                tracing::debug!(?duration, "cancellation deadline elapsed");
                timer_token.cancel();
            }
            // Cancelled early by its owner; nothing left to do.
            () = timer_token.cancelled() => {}
        }
    });

    token
}

/// Await `future` unless `token` is cancelled first.
///
/// Returns [`Error::Cancelled`] when the token wins. The future is dropped at
/// that point; it is not cancelled in any other way.
pub async fn with_cancellation<F>(future: F, token: &CancellationToken) -> Result<F::Output>
where
    F: Future,
{
    tokio::select! {
        biased;
        () = token.cancelled() => Err(Error::cancelled("awaited operation")),
        output = future => Ok(output),
    }
}
