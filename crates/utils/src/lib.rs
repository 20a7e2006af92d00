//! Async completion helpers and shared utilities for tapline
//!
//! - **`async_runtime`**: blocking waits on futures and spawned tasks, plus a
//!   lazily built current-thread runtime for code that needs tokio drivers.
//! - **`cancellation`**: turns a `CancellationToken` into an awaitable, and
//!   builds tokens that cancel themselves after a delay.
//! - **`text`**, **`random`**, **`time_window`**: thin delegations to the
//!   standard library, `rand` and `chrono`.
//! - **`logging`**: `tracing-subscriber` setup for host applications.

pub mod async_runtime;
pub mod cancellation;
pub mod config;
pub mod logging;
pub mod random;
pub mod text;
pub mod time_window;

pub use async_runtime::*;
pub use cancellation::*;
pub use config::*;
pub use text::JoinExt;
pub use time_window::WindowExt;
