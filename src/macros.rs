//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. They expand to a
//! `log(level, message, context)` call, so they work with a [`Logger`](crate::Logger)
//! and with any [`LogAdapter`](crate::LogAdapter) whose trait is in scope.
//! Each returns the `Result` of that call.
//!
//! # Examples
//!
//! ```
//! use rust_file_logger::prelude::*;
//! use rust_file_logger::info;
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "Server started").unwrap();
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//!
//! // With structured context
//! let ctx = LogContext::new().with_field("port", port);
//! info!(logger, context: &ctx, "Server listening").unwrap();
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_file_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_file_logger::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, context: $context:expr, $($arg:tt)+) => {
        $logger.log($level, &format!($($arg)+), $context)
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, &format!($($arg)+), &$crate::LogContext::new())
    };
}

/// Log an emergency-level message.
///
/// # Examples
///
/// ```
/// # use rust_file_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_file_logger::emergency;
/// emergency!(logger, "Disk array offline").unwrap();
/// emergency!(logger, "Lost {} of {} replicas", 3, 3).unwrap();
/// ```
#[macro_export]
macro_rules! emergency {
    ($logger:expr, context: $context:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Emergency, context: $context, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Emergency, $($arg)+)
    };
}

/// Log an alert-level message.
///
/// # Examples
///
/// ```
/// # use rust_file_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_file_logger::alert;
/// alert!(logger, "Primary database unreachable").unwrap();
/// alert!(logger, "Failover to {}", "replica-2").unwrap();
/// ```
#[macro_export]
macro_rules! alert {
    ($logger:expr, context: $context:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Alert, context: $context, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Alert, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// # Examples
///
/// ```
/// # use rust_file_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_file_logger::critical;
/// critical!(logger, "Payment component unavailable").unwrap();
/// critical!(logger, "Queue depth {}", 10_000).unwrap();
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, context: $context:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, context: $context, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_file_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_file_logger::error;
/// error!(logger, "Failed to connect to database").unwrap();
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, context: $context:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, context: $context, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_file_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_file_logger::warning;
/// warning!(logger, "Low disk space").unwrap();
/// warning!(logger, "Retry attempt {} of {}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, context: $context:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, context: $context, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log a notice-level message.
///
/// # Examples
///
/// ```
/// # use rust_file_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_file_logger::notice;
/// notice!(logger, "Configuration reloaded").unwrap();
/// notice!(logger, "{} users online", 42).unwrap();
/// ```
#[macro_export]
macro_rules! notice {
    ($logger:expr, context: $context:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Notice, context: $context, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Notice, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_file_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_file_logger::info;
/// info!(logger, "Application started").unwrap();
/// info!(logger, "Processing {} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, context: $context:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, context: $context, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_file_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_file_logger::debug;
/// debug!(logger, "Debug information").unwrap();
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, context: $context:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, context: $context, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogAdapter, LogContext, LogLevel, Logger, WriterConfig};
    use crate::FileWriter;
    use tempfile::tempdir;

    #[test]
    fn test_log_macro() {
        let logger = Logger::new();
        log!(logger, LogLevel::Info, "Test message").unwrap();
        log!(logger, LogLevel::Info, "Formatted: {}", 42).unwrap();
    }

    #[test]
    fn test_level_macros_on_logger() {
        let logger = Logger::new();
        emergency!(logger, "Emergency {}", 0).unwrap();
        alert!(logger, "Alert").unwrap();
        critical!(logger, "Critical").unwrap();
        error!(logger, "Code: {}", 500).unwrap();
        warning!(logger, "Retry {} of {}", 1, 3).unwrap();
        notice!(logger, "Notice").unwrap();
        info!(logger, "Items: {}", 100).unwrap();
        debug!(logger, "Count: {}", 5).unwrap();
    }

    #[test]
    fn test_macros_on_writer() {
        let dir = tempdir().unwrap();
        let mut writer =
            FileWriter::open(dir.path(), WriterConfig::new().with_filename("m.log")).unwrap();

        warning!(writer, "disk at {}%", 91).unwrap();
        assert!(writer.last_log_line().ends_with("[warning] disk at 91%"));

        let ctx = LogContext::new().with_field("mount", "/var");
        error!(writer, context: &ctx, "disk {}", "full").unwrap();
        assert_eq!(writer.line_count(), 2);
        assert!(writer.last_log_line().ends_with("mount: \"/var\""));
    }
}
