use thiserror::Error;

use crate::handle::{ThreadId, WindowHandle};
use crate::message::TickMessage;
use crate::registry::TimerId;

/// A failed call into the OS timer/message facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{call} failed (os error {code})")]
pub struct HostError {
    /// Name of the OS call that failed, e.g. `"SetTimer"`.
    pub call: &'static str,
    /// The OS error code.
    pub code: u32,
}

/// Result of the visibility query for a target window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// The window's client area has a visible region.
    Visible,
    /// The client area is fully clipped or hidden. A normal, frequent
    /// condition while a window is covered; not an error.
    Hidden,
}

/// The seam between the timer subsystem and the OS.
///
/// Each platform crate (e.g. `tickbeat-windows`) provides its own
/// implementation; tests use an in-memory double. All calls are fast,
/// bounded OS operations; none of them block.
pub trait TimerHost {
    /// Returns the id of the calling thread.
    fn current_thread(&self) -> ThreadId;

    /// Returns the thread owning `window`, or `None` if the handle
    /// does not name a live window.
    fn window_thread(&self, window: WindowHandle) -> Option<ThreadId>;

    /// Starts a periodic callback for `window` under the given id.
    ///
    /// Returns the id the OS actually assigned. The caller treats any
    /// id other than the one requested as an OS-level failure.
    fn start_timer(
        &mut self,
        window: WindowHandle,
        id: TimerId,
        period_ms: u32,
    ) -> Result<TimerId, HostError>;

    /// Stops the periodic callback for the `(window, id)` pair.
    fn stop_timer(&mut self, window: WindowHandle, id: TimerId) -> Result<(), HostError>;

    /// Queries whether `window` currently has a visible region.
    fn visible_region(&self, window: WindowHandle) -> Result<Visibility, HostError>;

    /// Posts `message` to `window`'s message queue and returns without
    /// waiting for the receiver to process it.
    fn post(&mut self, window: WindowHandle, message: TickMessage) -> Result<(), HostError>;
}
