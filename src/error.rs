//! Error types
//!
//! Only argument validation and configuration loading can fail. Degenerate
//! vectors (aiming at yourself, an enemy sitting on the player) are not errors:
//! the simulation keeps the previous direction or skips the effect.

use std::fmt;

/// Errors raised by coordinate mapping and configuration
#[derive(Debug)]
pub enum ArenaError {
    /// Malformed argument (wrong dimensionality, non-positive viewport extent)
    InvalidArgument {
        what: &'static str,
        expected: String,
        found: String,
    },
    /// Configuration value that would break a simulation invariant
    InvalidConfig(String),
    /// Configuration could not be parsed
    Config(serde_json::Error),
    /// Configuration file could not be read
    Io(std::io::Error),
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                what,
                expected,
                found,
            } => write!(f, "invalid argument `{what}`: expected {expected}, found {found}"),
            Self::InvalidConfig(reason) => write!(f, "invalid config: {reason}"),
            Self::Config(err) => write!(f, "config parse error: {err}"),
            Self::Io(err) => write!(f, "config read error: {err}"),
        }
    }
}

impl std::error::Error for ArenaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ArenaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err)
    }
}

impl From<std::io::Error> for ArenaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, ArenaError>;
