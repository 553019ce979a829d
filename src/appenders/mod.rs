//! Appender implementations: where formatted lines end up

pub mod file;

pub use file::{FileWriter, WriterState, STREAM_SCHEME};

pub use crate::core::LogAdapter;
