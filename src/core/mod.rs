//! Core logger types and traits

pub mod adapter;
pub mod config;
pub mod error;
pub mod level_filter;
pub mod line_format;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod timestamp;

pub use adapter::LogAdapter;
pub use config::{WriterConfig, WriterOptions};
pub use error::{LoggerError, Result};
pub use level_filter::{should_log, should_log_named, LevelFilter};
pub use line_format::{format_line, LineFormat, LINE_ENDING};
pub use log_context::LogContext;
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use timestamp::TimestampFormat;
