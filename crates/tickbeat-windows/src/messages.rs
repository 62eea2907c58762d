//! Win32 message identities for tick delivery.
//!
//! The recipient distinguishes deliveries by these identifiers alone;
//! no payload beyond the synthetic-source marker is defined here.

use tickbeat_core::TickMessage;
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{WM_APP, WM_COMMAND};

/// `WM_COMMAND` id of the host's chart-refresh command.
pub const CMD_REFRESH: usize = 33324;

/// `WM_COMMAND` id of the host's step-forward command.
pub const CMD_STEP_FORWARD: usize = 33197;

/// Message posted for the default synthetic tick.
pub const WM_SYNTHETIC_TICK: u32 = WM_APP + 1;

/// `wparam` marker on [`WM_SYNTHETIC_TICK`]: the tick was generated
/// by a timer, not received from a live feed.
pub const TICK_SYNTHETIC: usize = 1;

/// Maps a delivery to the `(message, wparam, lparam)` triple posted to
/// the target window.
pub(crate) fn encode(message: TickMessage) -> (u32, WPARAM, LPARAM) {
    match message {
        TickMessage::Refresh => (WM_COMMAND, WPARAM(CMD_REFRESH), LPARAM(0)),
        TickMessage::StepForward => (WM_COMMAND, WPARAM(CMD_STEP_FORWARD), LPARAM(0)),
        TickMessage::OfflineTick => (WM_SYNTHETIC_TICK, WPARAM(TICK_SYNTHETIC), LPARAM(0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_travel_as_wm_command() {
        let (msg, wparam, _) = encode(TickMessage::Refresh);
        assert_eq!(msg, WM_COMMAND);
        assert_eq!(wparam.0, CMD_REFRESH);

        let (msg, wparam, _) = encode(TickMessage::StepForward);
        assert_eq!(msg, WM_COMMAND);
        assert_eq!(wparam.0, CMD_STEP_FORWARD);
    }

    #[test]
    fn default_tick_carries_the_synthetic_marker() {
        let (msg, wparam, _) = encode(TickMessage::OfflineTick);
        assert_eq!(msg, WM_SYNTHETIC_TICK);
        assert_eq!(wparam.0, TICK_SYNTHETIC);
    }
}
