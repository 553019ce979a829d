//! # Rust File Logger
//!
//! A small file-based logger behind a severity-leveled interface.
//!
//! ## Features
//!
//! - **Severity gating**: eight fixed levels, emergency through debug
//! - **Line templates**: bracketed default or `{placeholder}` templates
//! - **Structured context**: nested JSON values, dumped under the line
//! - **Periodic flush**: flush every write or every N writes
//!
//! ```no_run
//! use rust_file_logger::prelude::*;
//!
//! let writer = FileWriter::open("logs", WriterConfig::new().with_filename("app.log"))?;
//! let logger = Logger::with_adapter(writer);
//! logger.info("service started")?;
//! # Ok::<(), LoggerError>(())
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{FileWriter, WriterState};
    pub use crate::core::{
        LevelFilter, LineFormat, LogAdapter, LogContext, LogEntry, LogLevel, Logger, LoggerError,
        Result, TimestampFormat, WriterConfig, WriterOptions,
    };
}

pub use self::appenders::{FileWriter, WriterState, STREAM_SCHEME};
pub use self::core::{
    format_line, should_log, should_log_named, LevelFilter, LineFormat, LogAdapter, LogContext,
    LogEntry, LogLevel, Logger, LoggerError, Result, TimestampFormat, WriterConfig, WriterOptions,
    LINE_ENDING,
};
