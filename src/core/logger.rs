//! Logger facade
//!
//! Holds at most one adapter behind a mutex so a single writer can be shared
//! across threads. Without an adapter, messages are discarded.

use super::{
    adapter::LogAdapter, error::Result, log_context::LogContext, log_level::LogLevel,
};
use parking_lot::Mutex;

#[derive(Default)]
pub struct Logger {
    adapter: Mutex<Option<Box<dyn LogAdapter>>>,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            adapter: Mutex::new(None),
        }
    }

    /// Create a logger that forwards to `adapter`
    #[must_use]
    pub fn with_adapter<A: LogAdapter + 'static>(adapter: A) -> Self {
        Self {
            adapter: Mutex::new(Some(Box::new(adapter))),
        }
    }

    /// Install an adapter, returning the previous one
    pub fn set_adapter(&self, adapter: Box<dyn LogAdapter>) -> Option<Box<dyn LogAdapter>> {
        self.adapter.lock().replace(adapter)
    }

    /// Remove the adapter; later messages are discarded
    pub fn take_adapter(&self) -> Option<Box<dyn LogAdapter>> {
        self.adapter.lock().take()
    }

    pub fn has_adapter(&self) -> bool {
        self.adapter.lock().is_some()
    }

    /// Name of the installed adapter, if any
    pub fn adapter_name(&self) -> Option<String> {
        self.adapter.lock().as_ref().map(|a| a.name().to_string())
    }

    pub fn log(&self, level: LogLevel, message: &str, context: &LogContext) -> Result<()> {
        match self.adapter.lock().as_mut() {
            Some(adapter) => adapter.log(level, message, context),
            None => Ok(()),
        }
    }

    pub fn flush(&self) -> Result<()> {
        match self.adapter.lock().as_mut() {
            Some(adapter) => adapter.flush(),
            None => Ok(()),
        }
    }

    #[inline]
    pub fn emergency(&self, message: &str) -> Result<()> {
        self.log(LogLevel::Emergency, message, &LogContext::new())
    }

    #[inline]
    pub fn alert(&self, message: &str) -> Result<()> {
        self.log(LogLevel::Alert, message, &LogContext::new())
    }

    #[inline]
    pub fn critical(&self, message: &str) -> Result<()> {
        self.log(LogLevel::Critical, message, &LogContext::new())
    }

    #[inline]
    pub fn error(&self, message: &str) -> Result<()> {
        self.log(LogLevel::Error, message, &LogContext::new())
    }

    #[inline]
    pub fn warning(&self, message: &str) -> Result<()> {
        self.log(LogLevel::Warning, message, &LogContext::new())
    }

    #[inline]
    pub fn notice(&self, message: &str) -> Result<()> {
        self.log(LogLevel::Notice, message, &LogContext::new())
    }

    #[inline]
    pub fn info(&self, message: &str) -> Result<()> {
        self.log(LogLevel::Info, message, &LogContext::new())
    }

    #[inline]
    pub fn debug(&self, message: &str) -> Result<()> {
        self.log(LogLevel::Debug, message, &LogContext::new())
    }

    pub fn emergency_with_context(&self, message: &str, context: &LogContext) -> Result<()> {
        self.log(LogLevel::Emergency, message, context)
    }

    pub fn alert_with_context(&self, message: &str, context: &LogContext) -> Result<()> {
        self.log(LogLevel::Alert, message, context)
    }

    pub fn critical_with_context(&self, message: &str, context: &LogContext) -> Result<()> {
        self.log(LogLevel::Critical, message, context)
    }

    /// Helper for structured error logging
    pub fn error_with_context(&self, message: &str, context: &LogContext) -> Result<()> {
        self.log(LogLevel::Error, message, context)
    }

    pub fn warning_with_context(&self, message: &str, context: &LogContext) -> Result<()> {
        self.log(LogLevel::Warning, message, context)
    }

    pub fn notice_with_context(&self, message: &str, context: &LogContext) -> Result<()> {
        self.log(LogLevel::Notice, message, context)
    }

    /// Helper for structured info logging
    pub fn info_with_context(&self, message: &str, context: &LogContext) -> Result<()> {
        self.log(LogLevel::Info, message, context)
    }

    pub fn debug_with_context(&self, message: &str, context: &LogContext) -> Result<()> {
        self.log(LogLevel::Debug, message, context)
    }
}
