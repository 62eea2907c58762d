use tickbeat_core::{
    HostError, ThreadId, TickMessage, TimerHost, TimerId, Visibility, WindowHandle,
};

use windows::Win32::Foundation::{GetLastError, HWND, RECT};
use windows::Win32::Graphics::Gdi::{GetClipBox, GetDC, NULLREGION, RGN_ERROR, ReleaseDC};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{
    GetWindowThreadProcessId, IsWindow, KillTimer, PostMessageW, SetTimer,
};

use crate::messages;
use crate::service;

/// [`TimerHost`] backed by the Win32 timer and message APIs.
///
/// All timers started through this host share one `TIMERPROC`; the OS
/// hands the callback nothing but the timer id, and the registry
/// lookup on the owning thread supplies the rest.
#[derive(Debug, Default)]
pub struct Win32Host;

impl Win32Host {
    pub fn new() -> Self {
        Self
    }
}

fn hwnd(window: WindowHandle) -> HWND {
    HWND(window.raw() as *mut _)
}

fn last_error() -> u32 {
    // SAFETY: GetLastError reads a thread-local value.
    unsafe { GetLastError().0 }
}

impl TimerHost for Win32Host {
    fn current_thread(&self) -> ThreadId {
        // SAFETY: GetCurrentThreadId has no failure mode.
        ThreadId::new(unsafe { GetCurrentThreadId() })
    }

    fn window_thread(&self, window: WindowHandle) -> Option<ThreadId> {
        if window.is_null() {
            return None;
        }
        // SAFETY: both calls only query the handle; a stale handle
        // makes IsWindow return false.
        unsafe {
            if !IsWindow(Some(hwnd(window))).as_bool() {
                return None;
            }
            let tid = GetWindowThreadProcessId(hwnd(window), None);
            (tid != 0).then(|| ThreadId::new(tid))
        }
    }

    fn start_timer(
        &mut self,
        window: WindowHandle,
        id: TimerId,
        period_ms: u32,
    ) -> Result<TimerId, HostError> {
        // SAFETY: SetTimer with a valid HWND registers a periodic
        // callback on the window's owning thread. For window timers it
        // returns the id it was given, or 0 on failure.
        let assigned = unsafe {
            SetTimer(
                Some(hwnd(window)),
                id as usize,
                period_ms,
                Some(service::tick_timer_proc),
            )
        };
        if assigned == 0 {
            return Err(HostError {
                call: "SetTimer",
                code: last_error(),
            });
        }
        Ok(assigned as TimerId)
    }

    fn stop_timer(&mut self, window: WindowHandle, id: TimerId) -> Result<(), HostError> {
        // SAFETY: KillTimer removes the timer registration.
        if unsafe { KillTimer(Some(hwnd(window)), id as usize) }.is_err() {
            return Err(HostError {
                call: "KillTimer",
                code: last_error(),
            });
        }
        Ok(())
    }

    fn visible_region(&self, window: WindowHandle) -> Result<Visibility, HostError> {
        // SAFETY: GetDC/GetClipBox/ReleaseDC query the window's device
        // context; the DC is released before returning on every path.
        unsafe {
            let hdc = GetDC(Some(hwnd(window)));
            if hdc.is_invalid() {
                return Err(HostError {
                    call: "GetDC",
                    code: last_error(),
                });
            }
            let mut rect = RECT::default();
            let region = GetClipBox(hdc, &mut rect);
            ReleaseDC(Some(hwnd(window)), hdc);

            if region == RGN_ERROR {
                Err(HostError {
                    call: "GetClipBox",
                    code: last_error(),
                })
            } else if region == NULLREGION {
                Ok(Visibility::Hidden)
            } else {
                Ok(Visibility::Visible)
            }
        }
    }

    fn post(&mut self, window: WindowHandle, message: TickMessage) -> Result<(), HostError> {
        let (msg, wparam, lparam) = messages::encode(message);
        // SAFETY: PostMessageW queues the message and returns without
        // waiting for the receiver.
        if unsafe { PostMessageW(Some(hwnd(window)), msg, wparam, lparam) }.is_err() {
            return Err(HostError {
                call: "PostMessageW",
                code: last_error(),
            });
        }
        Ok(())
    }
}
