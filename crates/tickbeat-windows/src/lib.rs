//! Win32 platform implementation for tickbeat.
//!
//! Provides the [`Win32Host`] seam backed by `SetTimer`/`KillTimer`
//! and `PostMessageW`, plus the per-thread service entry points the
//! host application calls. The crate compiles to nothing on other
//! targets so the workspace builds and tests everywhere.

#[cfg(windows)]
mod host;

#[cfg(windows)]
mod messages;

#[cfg(windows)]
mod service;

#[cfg(windows)]
pub use host::Win32Host;

#[cfg(windows)]
pub use messages::{CMD_REFRESH, CMD_STEP_FORWARD, TICK_SYNTHETIC, WM_SYNTHETIC_TICK};

#[cfg(windows)]
pub use service::{create_tick_timer, remove_all_tick_timers, remove_tick_timer};
