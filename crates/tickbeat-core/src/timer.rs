//! Timer lifecycle and dispatch.
//!
//! [`TickTimers`] owns the registry and the OS seam. The host's
//! message loop calls [`TickTimers::on_timer`] for each periodic
//! firing; everything else is explicit creation and removal. All
//! operations for a given window run on the thread that owns it, so
//! no locking is needed here.

use crate::error::TimerError;
use crate::flags::TickFlags;
use crate::handle::WindowHandle;
use crate::host::{TimerHost, Visibility};
use crate::message::TickMessage;
use crate::registry::{TimerEntry, TimerId, TimerRegistry};

/// The tick-timer subsystem: registration, dispatch, and teardown of
/// periodic timers that post synthetic events to a window's queue.
pub struct TickTimers<H: TimerHost> {
    host: H,
    registry: TimerRegistry,
}

impl<H: TimerHost> TickTimers<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            registry: TimerRegistry::new(),
        }
    }

    /// Returns the underlying OS seam.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Number of currently registered timers.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Creates a periodic timer for `window`.
    ///
    /// The window must be live and owned by the calling thread, the
    /// period must be positive, and `flags` must not combine the two
    /// delivery modes. On success the OS callback is started and the
    /// newly assigned id is returned.
    pub fn create(
        &mut self,
        window: WindowHandle,
        period_ms: u32,
        flags: TickFlags,
    ) -> Result<TimerId, TimerError> {
        let Some(owner) = self.host.window_thread(window) else {
            return Err(reject(TimerError::InvalidWindow(window)));
        };
        let caller = self.host.current_thread();
        if owner != caller {
            return Err(reject(TimerError::ForeignThread {
                window,
                owner,
                caller,
            }));
        }
        if period_ms == 0 {
            return Err(reject(TimerError::InvalidPeriod(period_ms)));
        }
        if flags.has_conflicting_delivery() {
            return Err(reject(TimerError::FlagConflict));
        }
        if flags.contains(TickFlags::WEEKEND_PAUSE) {
            crate::log_warn!(
                "weekend-pause gating is not implemented; timer for window {window} will tick through weekends"
            );
        }

        let id = self.registry.allocate_id();
        let returned = self
            .host
            .start_timer(window, id, period_ms)
            .map_err(|e| reject(TimerError::Os(e)))?;
        // The OS must echo back the id it was asked to use.
        if returned != id {
            return Err(reject(TimerError::IdMismatch {
                requested: id,
                returned,
            }));
        }

        self.registry.insert(TimerEntry { id, window, flags });
        crate::log_debug!("created tick timer {id} for window {window} ({period_ms} ms)");
        Ok(id)
    }

    /// Stops and forgets the timer registered under `id`.
    ///
    /// If the OS stop call fails the entry stays registered: removing
    /// the record while its timer might still fire would leave a stray
    /// dispatch with nothing to look up.
    pub fn remove(&mut self, id: TimerId) -> Result<(), TimerError> {
        if id == 0 {
            return Err(reject(TimerError::InvalidId(id)));
        }
        let Some(entry) = self.registry.find(id) else {
            return Err(reject(TimerError::NotFound(id)));
        };
        let window = entry.window;

        self.host
            .stop_timer(window, id)
            .map_err(|e| reject(TimerError::Os(e)))?;

        self.registry.remove(id);
        crate::log_debug!("removed tick timer {id}");
        Ok(())
    }

    /// Force-removes every registered timer, newest first.
    ///
    /// Runs once at module detach so no OS timer leaks even when
    /// callers forgot to remove theirs. Also invoked from `Drop`.
    pub fn remove_all(&mut self) {
        for id in self.registry.ids_newest_first() {
            crate::log_warn!("removing orphaned timer with id {id}");
            let _ = self.remove(id);
        }
    }

    /// Handles one periodic firing for `id`.
    ///
    /// Called from the host's message loop. A firing for an unknown id
    /// is logged and dropped; the underlying OS timer is left alone.
    pub fn on_timer(&mut self, id: TimerId) {
        let Some(&TimerEntry { window, flags, .. }) = self.registry.find(id) else {
            crate::log_warn!("tick timer {id} not found, ignoring firing");
            return;
        };

        if flags.contains(TickFlags::VISIBLE_ONLY) {
            match self.host.visible_region(window) {
                // Covered windows skip their tick silently; this is the
                // normal state while the window is hidden.
                Ok(Visibility::Hidden) => return,
                Ok(Visibility::Visible) => {}
                Err(e) => {
                    crate::log_warn!("visibility query for window {window} failed: {e}");
                    return;
                }
            }
        }

        let message = if flags.contains(TickFlags::REFRESH) {
            TickMessage::Refresh
        } else if flags.contains(TickFlags::STEP_FORWARD) {
            TickMessage::StepForward
        } else {
            TickMessage::OfflineTick
        };

        if let Err(e) = self.host.post(window, message) {
            crate::log_warn!("posting {message:?} to window {window} failed: {e}");
        }
    }
}

impl<H: TimerHost> Drop for TickTimers<H> {
    fn drop(&mut self) {
        self.remove_all();
    }
}

/// Reports a failure through the shared log facility and hands it back
/// to the caller.
fn reject(err: TimerError) -> TimerError {
    crate::log_error!("{err}");
    err
}
