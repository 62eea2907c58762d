//! Per-thread tick timer service.
//!
//! A `TIMERPROC` carries no context pointer, only the timer id, so the
//! firing thread needs somewhere to look the id up. Timers have thread
//! affinity anyway (creation, firing, and removal all happen on the
//! window's owning thread), which makes a thread-local instance the
//! natural home for the registry.

use std::cell::RefCell;

use tickbeat_core::{TickFlags, TickTimers, TimerError, TimerId, WindowHandle};
use windows::Win32::Foundation::HWND;

use crate::host::Win32Host;

thread_local! {
    static TIMERS: RefCell<Option<TickTimers<Win32Host>>> = const { RefCell::new(None) };
}

/// `TIMERPROC` shared by every tick timer on this thread.
///
/// Thin OS callback, fat lookup: the id is the only context, and the
/// dispatcher resolves it against the thread's registry.
pub(crate) unsafe extern "system" fn tick_timer_proc(
    _hwnd: HWND,
    _msg: u32,
    id: usize,
    _time: u32,
) {
    TIMERS.with(|cell| {
        if let Some(timers) = cell.borrow_mut().as_mut() {
            timers.on_timer(id as TimerId);
        }
    });
}

/// Creates a periodic tick timer for `window` on the calling thread.
pub fn create_tick_timer(
    window: WindowHandle,
    period_ms: u32,
    flags: TickFlags,
) -> Result<TimerId, TimerError> {
    with_service(|timers| timers.create(window, period_ms, flags))
}

/// Stops and forgets the timer registered under `id`.
pub fn remove_tick_timer(id: TimerId) -> Result<(), TimerError> {
    with_service(|timers| timers.remove(id))
}

/// Force-removes all timers still registered on this thread.
///
/// Called once from the host's module-detach hook; best-effort, no
/// return value. Timers left behind by forgetful callers are stopped
/// here so no OS timer resource leaks past unload.
pub fn remove_all_tick_timers() {
    TIMERS.with(|cell| {
        // Dropping the service runs its teardown; the instance is
        // taken out first so the borrow ends before the drop.
        let service = cell.borrow_mut().take();
        drop(service);
    });
}

fn with_service<T>(f: impl FnOnce(&mut TickTimers<Win32Host>) -> T) -> T {
    TIMERS.with(|cell| {
        let mut slot = cell.borrow_mut();
        let timers = slot.get_or_insert_with(|| TickTimers::new(Win32Host::new()));
        f(timers)
    })
}
