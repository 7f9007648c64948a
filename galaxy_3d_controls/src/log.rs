//! Internal logging system for Galaxy3D Controls
//!
//! This module provides a flexible logging system with:
//! - Customizable logger via Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - A minimum severity filter, so per-event input traces stay silent by default
//! - Thread-safe logging with RwLock
//! - File and line information for detailed ERROR logs

use colored::*;
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to create custom loggers (file logging, network logging, etc.)
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_controls::galaxy3d::log::{Logger, LogEntry};
///
/// struct FileLogger {
///     file: std::fs::File,
/// }
///
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    ///
    /// # Arguments
    ///
    /// * `entry` - The log entry to process
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source component (e.g., "galaxy3d::NodeDragControl", "galaxy3d::FrameUpdater")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-event input traces (dropped drags, busy locks)
    Trace,

    /// Gesture and frame lifecycle information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (critical issues with file:line details)
    Error,
}

/// Default logger implementation using colored console output
///
/// Colors:
/// - Trace: bright black
/// - Debug: cyan
/// - Info: green
/// - Warn: yellow
/// - Error: red + bold
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        // Format timestamp as YYYY-MM-DD HH:MM:SS.mmm
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

// ===== GLOBAL LOGGER =====

/// Active logger plus its severity threshold
struct LoggerState {
    logger: Box<dyn Logger>,
    min_severity: LogSeverity,
}

/// Global logger (initialized with DefaultLogger, Info threshold)
static LOGGER: OnceLock<RwLock<LoggerState>> = OnceLock::new();

fn logger_state() -> &'static RwLock<LoggerState> {
    LOGGER.get_or_init(|| RwLock::new(LoggerState {
        logger: Box::new(DefaultLogger),
        min_severity: LogSeverity::Info,
    }))
}

/// Set a custom logger
///
/// Replace the default logger with a custom implementation. The current
/// severity threshold is kept.
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_controls::galaxy3d::log::{self, Logger, LogEntry};
///
/// struct FileLogger;
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
///
/// log::set_logger(FileLogger);
/// ```
pub fn set_logger<L: Logger + 'static>(logger: L) {
    if let Ok(mut state) = logger_state().write() {
        state.logger = Box::new(logger);
    }
}

/// Reset logger to default (DefaultLogger)
pub fn reset_logger() {
    if let Ok(mut state) = logger_state().write() {
        state.logger = Box::new(DefaultLogger);
    }
}

/// Set the minimum severity forwarded to the logger
///
/// Entries below the threshold are discarded. The `controls_*` macros check
/// it before formatting, so filtered messages cost no allocation.
/// Defaults to `LogSeverity::Info`.
pub fn set_min_severity(severity: LogSeverity) {
    if let Ok(mut state) = logger_state().write() {
        state.min_severity = severity;
    }
}

/// Current minimum severity
pub fn min_severity() -> LogSeverity {
    logger_state()
        .read()
        .map(|state| state.min_severity)
        .unwrap_or(LogSeverity::Info)
}

/// Whether entries of this severity currently reach the logger
pub fn enabled(severity: LogSeverity) -> bool {
    severity >= min_severity()
}

/// Internal logging method (for simple logs without file:line)
///
/// Used by macros like controls_debug!, controls_warn!, etc.
///
/// # Arguments
///
/// * `severity` - Log severity level
/// * `source` - Source component (e.g., "galaxy3d::NodeDragControl")
/// * `message` - Log message
pub fn log(severity: LogSeverity, source: &str, message: String) {
    if let Ok(state) = logger_state().read() {
        if severity < state.min_severity {
            return;
        }
        state.logger.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }
}

/// Internal logging method with file:line information (for ERROR logs)
///
/// Used by controls_error! and controls_err! to include source location.
pub fn log_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    if let Ok(state) = logger_state().read() {
        if severity < state.min_severity {
            return;
        }
        state.logger.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (per-event detail, filtered out by default)
///
/// # Example
///
/// ```no_run
/// # use galaxy_3d_controls::controls_trace;
/// controls_trace!("galaxy3d::NodeDragControl", "Drag dropped: node lock busy");
/// ```
#[macro_export]
macro_rules! controls_trace {
    ($source:expr, $($arg:tt)*) => {
        {
            let severity = $crate::galaxy3d::log::LogSeverity::Trace;
            if $crate::log::enabled(severity) {
                $crate::log::log(severity, $source, format!($($arg)*));
            }
        }
    };
}

/// Log a DEBUG message (development information)
///
/// # Example
///
/// ```no_run
/// # use galaxy_3d_controls::controls_debug;
/// controls_debug!("galaxy3d::NodeDragControl", "Gesture baseline at ({}, {})", 10, 20);
/// ```
#[macro_export]
macro_rules! controls_debug {
    ($source:expr, $($arg:tt)*) => {
        {
            let severity = $crate::galaxy3d::log::LogSeverity::Debug;
            if $crate::log::enabled(severity) {
                $crate::log::log(severity, $source, format!($($arg)*));
            }
        }
    };
}

/// Log an INFO message (important events)
#[macro_export]
macro_rules! controls_info {
    ($source:expr, $($arg:tt)*) => {
        {
            let severity = $crate::galaxy3d::log::LogSeverity::Info;
            if $crate::log::enabled(severity) {
                $crate::log::log(severity, $source, format!($($arg)*));
            }
        }
    };
}

/// Log a WARN message (potential issues)
#[macro_export]
macro_rules! controls_warn {
    ($source:expr, $($arg:tt)*) => {
        {
            let severity = $crate::galaxy3d::log::LogSeverity::Warn;
            if $crate::log::enabled(severity) {
                $crate::log::log(severity, $source, format!($($arg)*));
            }
        }
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! controls_error {
    ($source:expr, $($arg:tt)*) => {
        {
            let severity = $crate::galaxy3d::log::LogSeverity::Error;
            if $crate::log::enabled(severity) {
                $crate::log::log_detailed(severity, $source, format!($($arg)*), file!(), line!());
            }
        }
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
