pub mod config;
pub mod error;
pub mod flags;
pub mod handle;
pub mod host;
pub mod log;
pub mod message;
pub mod registry;
pub mod timer;

pub use error::TimerError;
pub use flags::TickFlags;
pub use handle::{ThreadId, WindowHandle};
pub use host::{HostError, TimerHost, Visibility};
pub use message::TickMessage;
pub use registry::{FIRST_TIMER_ID, TimerEntry, TimerId, TimerRegistry};
pub use timer::TickTimers;
