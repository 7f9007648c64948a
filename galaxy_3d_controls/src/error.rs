//! Error types for the Galaxy3D controls
//!
//! The manipulation paths (drag, scroll, frame callbacks) never fail: they
//! absorb missing targets and lock contention locally. Errors only come from
//! setup-time operations such as configuration, selection and camera swaps.

use std::fmt;

/// Result type for Galaxy3D controls operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D controls errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Rejected configuration value (speed, anchor, etc.)
    InvalidConfig(String),

    /// Unknown or detached scene node
    InvalidNode(String),

    /// A shared state lock was poisoned by a panicking holder
    LockPoisoned(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InvalidNode(msg) => write!(f, "Invalid node: {}", msg),
            Error::LockPoisoned(msg) => write!(f, "Lock poisoned: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an `Error` variant and log it at ERROR severity with file:line
///
/// # Example
///
/// ```no_run
/// # use galaxy_3d_controls::controls_err;
/// let err = controls_err!(InvalidConfig, "galaxy3d::ControlConfig", "drag speed {} is negative", -1.0);
/// ```
#[macro_export]
macro_rules! controls_err {
    ($kind:ident, $source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::log::log_detailed(
            $crate::galaxy3d::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::galaxy3d::Error::$kind(message)
    }};
}

/// Log and return early with an `Error` variant
#[macro_export]
macro_rules! controls_bail {
    ($kind:ident, $source:expr, $($arg:tt)*) => {
        return Err($crate::controls_err!($kind, $source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
