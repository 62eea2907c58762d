use thiserror::Error;

use crate::handle::{ThreadId, WindowHandle};
use crate::host::HostError;
use crate::registry::TimerId;

/// Failure of a timer lifecycle operation.
///
/// Every failure is terminal for that single operation; there are no
/// retries in this subsystem. All variants are also reported through
/// the shared log facility at the point of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimerError {
    /// The handle does not name a live window.
    #[error("invalid parameter window: {0} (not a window)")]
    InvalidWindow(WindowHandle),

    /// The window exists but belongs to another thread. Timers must be
    /// created on the thread that owns the target window, because
    /// delivery and cancellation happen on that thread's message loop.
    #[error("invalid parameter window: {window} (owned by thread {owner}, not caller thread {caller})")]
    ForeignThread {
        window: WindowHandle,
        owner: ThreadId,
        caller: ThreadId,
    },

    /// The timer period was not a positive number of milliseconds.
    #[error("invalid parameter period_ms: {0} (not positive)")]
    InvalidPeriod(u32),

    /// Both delivery-mode flags were set.
    #[error("invalid flags: REFRESH and STEP_FORWARD are mutually exclusive")]
    FlagConflict,

    /// The timer id was not a positive integer.
    #[error("invalid parameter id: {0} (not positive)")]
    InvalidId(TimerId),

    /// No registered timer carries this id.
    #[error("timer {0} not found")]
    NotFound(TimerId),

    /// The OS echoed back a different timer id than it was asked to
    /// use. Surfaced as an OS-level failure, not a logic error.
    #[error("timer id mismatch: requested {requested}, OS assigned {returned}")]
    IdMismatch {
        requested: TimerId,
        returned: TimerId,
    },

    /// An underlying OS call failed.
    #[error(transparent)]
    Os(#[from] HostError),
}
