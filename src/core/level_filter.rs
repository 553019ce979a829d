//! Severity gating
//!
//! A message passes when the configured minimum is at least as verbose as the
//! message's level, i.e. `priority(configured) >= priority(message)`.

use super::error::Result;
use super::log_level::LogLevel;

/// Decide whether a message at `message` level passes a writer configured at `configured`.
#[inline]
pub fn should_log(configured: LogLevel, message: LogLevel) -> bool {
    configured.priority() >= message.priority()
}

/// Same as [`should_log`] but takes level names.
///
/// Unknown names are rejected with [`LoggerError::InvalidArgument`](super::LoggerError::InvalidArgument).
pub fn should_log_named(configured: &str, message: &str) -> Result<bool> {
    Ok(should_log(configured.parse()?, message.parse()?))
}

/// Configured minimum level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelFilter {
    level: LogLevel,
}

impl LevelFilter {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    #[inline]
    pub fn admits(&self, level: LogLevel) -> bool {
        should_log(self.level, level)
    }
}
