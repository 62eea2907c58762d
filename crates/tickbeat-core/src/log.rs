//! File-based logger with size-based rotation.
//!
//! The shared reporting facility for the timer subsystem. Logs are
//! written to `~/.config/tickbeat/logs/tickbeat.log`. When the file
//! exceeds the configured max size, it is rotated to `tickbeat.log.1`
//! (one backup kept). Tests swap the file for an in-memory sink so
//! emitted warnings can be asserted on.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "tickbeat.log";
const BACKUP_SUFFIX: &str = ".1";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

enum Sink {
    File {
        file: File,
        path: PathBuf,
        max_bytes: u64,
        written: u64,
    },
    /// Lines go to a thread-local buffer, used by the test capture.
    /// Thread-local so parallel tests never see each other's lines.
    #[cfg(test)]
    Memory,
}

struct Logger {
    min_level: Level,
    sink: Sink,
}

/// Initialises the global logger. Call once when the host loads the
/// extension.
///
/// Does nothing if `config.enabled` is `false`.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    let Some(dir) = crate::config::config_dir() else {
        return;
    };
    let log_dir = dir.join("logs");
    let _ = fs::create_dir_all(&log_dir);
    let path = log_dir.join(LOG_FILE_NAME);

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(_) => return,
    };
    let written = file.metadata().map(|m| m.len()).unwrap_or(0);

    let logger = Logger {
        min_level: Level::parse(&config.level),
        sink: Sink::File {
            file,
            path,
            max_bytes: config.max_file_mb * 1024 * 1024,
            written,
        },
    };

    let _ = LOGGER.set(Mutex::new(logger));
}

/// Writes a log line if the level is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = LOGGER.get() else {
        return;
    };
    let Ok(mut logger) = mutex.lock() else {
        return;
    };
    if level < logger.min_level {
        return;
    }
    let body = format!("[{lvl}] {args}", lvl = level.as_str());

    let needs_rotate = match &mut logger.sink {
        Sink::File {
            file,
            max_bytes,
            written,
            ..
        } => {
            let line = format!("{now} {body}\n", now = timestamp());
            let _ = file.write_all(line.as_bytes());
            *written += line.len() as u64;
            *max_bytes > 0 && *written >= *max_bytes
        }
        #[cfg(test)]
        Sink::Memory => {
            capture::push(body);
            false
        }
    };
    if needs_rotate {
        logger.rotate();
    }
}

impl Logger {
    fn rotate(&mut self) {
        match &mut self.sink {
            Sink::File {
                file,
                path,
                written,
                ..
            } => {
                let backup = path.with_extension(format!(
                    "{}{}",
                    LOG_FILE_NAME.rsplit('.').next().unwrap_or("log"),
                    BACKUP_SUFFIX
                ));
                let _ = fs::rename(&*path, &backup);
                if let Ok(f) = OpenOptions::new().create(true).append(true).open(&*path) {
                    *file = f;
                }
                *written = 0;
            }
            #[cfg(test)]
            Sink::Memory => {}
        }
    }
}

fn timestamp() -> String {
    // Use std::time for a simple UTC timestamp. No chrono dependency.
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = dur.as_secs();
    let (h, m, s) = (secs / 3600 % 24, secs / 60 % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}

/// Test-only capture of emitted log lines.
///
/// The first [`begin`] installs an in-memory sink in the global
/// logger; captured lines land in a thread-local buffer, so parallel
/// tests each see only their own output.
#[cfg(test)]
pub(crate) mod capture {
    use std::cell::RefCell;
    use std::sync::Mutex;

    use super::{LOGGER, Level, Logger, Sink};

    thread_local! {
        static CAPTURED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    pub struct Capture;

    /// Installs the in-memory sink (first call) and clears lines
    /// previously captured on this thread.
    pub fn begin() -> Capture {
        LOGGER.get_or_init(|| {
            Mutex::new(Logger {
                min_level: Level::Debug,
                sink: Sink::Memory,
            })
        });
        CAPTURED.with(|cell| cell.borrow_mut().clear());
        Capture
    }

    pub(super) fn push(line: String) {
        CAPTURED.with(|cell| cell.borrow_mut().push(line));
    }

    impl Capture {
        /// All lines captured on this thread since [`begin`].
        pub fn lines(&self) -> Vec<String> {
            CAPTURED.with(|cell| cell.borrow().clone())
        }

        /// Captured lines at WARN level.
        pub fn warnings(&self) -> Vec<String> {
            self.lines()
                .into_iter()
                .filter(|l| l.starts_with("[WARN]"))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_records_warn_and_error_lines() {
        let cap = capture::begin();

        crate::log_warn!("something looks off: {}", 42);
        crate::log_error!("something broke");

        let lines = cap.lines();
        assert!(lines.contains(&"[WARN] something looks off: 42".to_string()));
        assert!(lines.contains(&"[ERROR] something broke".to_string()));
        assert_eq!(cap.warnings().len(), 1);
    }
}
