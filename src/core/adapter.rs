//! Leveled logging interface
//!
//! Implementors provide the single `log` primitive; the per-severity methods
//! are default methods delegating to it.

use super::{error::Result, log_context::LogContext, log_level::LogLevel};

macro_rules! leveled_methods {
    ($($name:ident, $with_context:ident => $level:ident;)+) => {
        $(
            #[doc = concat!("Log a message at `", stringify!($name), "` level")]
            fn $name(&mut self, message: &str) -> Result<()> {
                self.log(LogLevel::$level, message, &LogContext::new())
            }

            #[doc = concat!("Log a message with context at `", stringify!($name), "` level")]
            fn $with_context(&mut self, message: &str, context: &LogContext) -> Result<()> {
                self.log(LogLevel::$level, message, context)
            }
        )+
    };
}

pub trait LogAdapter: Send {
    /// Log `message` at `level`; adapters decide whether the level passes
    fn log(&mut self, level: LogLevel, message: &str, context: &LogContext) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;

    leveled_methods! {
        emergency, emergency_with_context => Emergency;
        alert, alert_with_context => Alert;
        critical, critical_with_context => Critical;
        error, error_with_context => Error;
        warning, warning_with_context => Warning;
        notice, notice_with_context => Notice;
        info, info_with_context => Info;
        debug, debug_with_context => Debug;
    }
}
