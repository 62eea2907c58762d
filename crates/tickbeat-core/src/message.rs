/// A message posted to a target window when its timer fires.
///
/// Platform crates translate these variants into the host's native
/// message identifiers. This crate only defines which message is due;
/// delivery is always an asynchronous post, never a blocking send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickMessage {
    /// The host's refresh command.
    Refresh,

    /// The host's step-forward command.
    StepForward,

    /// The default synthetic tick, carrying a marker that identifies
    /// it as timer-generated rather than a live feed event.
    OfflineTick,
}
