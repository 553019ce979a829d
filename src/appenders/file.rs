//! File writer
//!
//! Owns one log file handle for its whole life. The target is chosen once with
//! [`FileWriter::set_directory`]; a writer never retargets, build a new one
//! instead.

use crate::core::config::RECOGNIZED_EXTENSIONS;
use crate::core::line_format::format_line;
use crate::core::{
    LevelFilter, LogAdapter, LogContext, LogEntry, LogLevel, LoggerError, Result,
    TimestampFormat, WriterConfig, WriterOptions,
};
use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Directory prefix that sends output to a process stream (`stdio://stdout`, `stdio://stderr`)
pub const STREAM_SCHEME: &str = "stdio://";

/// Mode for created log directories, before umask
#[cfg(unix)]
const DEFAULT_DIR_MODE: u32 = 0o777;

const WRITE_FAILED: &str =
    "The file could not be written to. Check that appropriate permissions have been set.";

/// Lifecycle of a [`FileWriter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterState {
    /// No target chosen yet
    Unopened,
    /// Handle open and writable
    Open,
    /// Opening or writing failed; the handle is gone
    Failed,
    /// Closed by [`FileWriter::close`]
    Closed,
}

enum LogSink {
    File(BufWriter<File>),
    Stdout(io::Stdout),
    Stderr(io::Stderr),
    #[cfg(test)]
    Memory(Box<dyn Write + Send>),
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(w) => w.write(buf),
            LogSink::Stdout(s) => s.write(buf),
            LogSink::Stderr(s) => s.write(buf),
            #[cfg(test)]
            LogSink::Memory(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(w) => w.flush(),
            LogSink::Stdout(s) => s.flush(),
            LogSink::Stderr(s) => s.flush(),
            #[cfg(test)]
            LogSink::Memory(w) => w.flush(),
        }
    }
}

/// Writes formatted log lines to a single file or process stream
///
/// Not internally synchronized; wrap it in a [`Logger`](crate::Logger) to
/// share it between threads.
///
/// # Examples
///
/// ```no_run
/// use rust_file_logger::{FileWriter, LogAdapter, LogLevel, WriterConfig};
///
/// let mut writer = FileWriter::open("/var/log/myapp", WriterConfig::new().with_filename("app.log"))
///     .unwrap()
///     .with_level(LogLevel::Debug);
/// writer.info("service started").unwrap();
/// ```
pub struct FileWriter {
    config: WriterConfig,
    filter: LevelFilter,
    directory: PathBuf,
    log_file_path: Option<PathBuf>,
    sink: Option<LogSink>,
    state: WriterState,
    line_count: u64,
    forced_flushes: u64,
    last_line: String,
}

impl FileWriter {
    pub fn new(config: WriterConfig) -> Self {
        Self {
            config,
            filter: LevelFilter::default(),
            directory: PathBuf::new(),
            log_file_path: None,
            sink: None,
            state: WriterState::Unopened,
            line_count: 0,
            forced_flushes: 0,
            last_line: String::new(),
        }
    }

    /// Create a writer and open its target in one step
    pub fn open(directory: impl AsRef<Path>, config: WriterConfig) -> Result<Self> {
        let mut writer = Self::new(config);
        writer.set_directory(directory)?;
        Ok(writer)
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.filter.set_level(level);
        self
    }

    /// Choose the target and open it
    ///
    /// # Errors
    ///
    /// - [`LoggerError::InvalidConfiguration`] if a target was already chosen or
    ///   the date format is not a valid strftime pattern
    /// - [`LoggerError::DirectoryCreation`] if the directory cannot be created
    /// - [`LoggerError::PermissionDenied`] if the file exists read-only or cannot be opened
    pub fn set_directory(&mut self, directory: impl AsRef<Path>) -> Result<()> {
        if self.state != WriterState::Unopened {
            return Err(LoggerError::config(
                "FileWriter",
                "log target already chosen; construct a new writer to retarget",
            ));
        }

        self.config.date_format.validate()?;

        let directory = directory.as_ref();
        if let Some(stream) = directory.to_str().and_then(|s| s.strip_prefix(STREAM_SCHEME)) {
            let sink = match stream {
                "stdout" => LogSink::Stdout(io::stdout()),
                "stderr" => LogSink::Stderr(io::stderr()),
                other => {
                    self.state = WriterState::Failed;
                    return Err(LoggerError::invalid_argument(format!(
                        "unknown stream '{}'",
                        other
                    )));
                }
            };
            self.directory = directory.to_path_buf();
            self.log_file_path = Some(directory.to_path_buf());
            self.sink = Some(sink);
            self.state = WriterState::Open;
            return Ok(());
        }

        self.directory = without_trailing_separators(directory);

        if !self.directory.exists() {
            if let Err(e) = create_log_dir(&self.directory) {
                self.state = WriterState::Failed;
                return Err(LoggerError::directory(self.directory.display().to_string(), e));
            }
        }

        let path = self.directory.join(self.resolve_file_name());
        self.log_file_path = Some(path.clone());

        if let Ok(metadata) = fs::metadata(&path) {
            if metadata.permissions().readonly() {
                self.state = WriterState::Failed;
                return Err(LoggerError::permission(path.display().to_string(), WRITE_FAILED));
            }
        }

        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                self.sink = Some(LogSink::File(BufWriter::new(file)));
                self.state = WriterState::Open;
                Ok(())
            }
            Err(e) => {
                self.state = WriterState::Failed;
                Err(LoggerError::permission_io(
                    path.display().to_string(),
                    "The file could not be opened. Check permissions.",
                    e,
                ))
            }
        }
    }

    /// File name inside the target directory, per the naming rule
    fn resolve_file_name(&self) -> String {
        match &self.config.filename {
            Some(name) if has_recognized_extension(name) => name.clone(),
            Some(name) => format!("{}.{}", name, self.config.extension),
            None => format!(
                "{}{}.{}",
                self.config.prefix,
                Local::now().format("%Y-%m-%d"),
                self.config.extension
            ),
        }
    }

    /// Merge options into the configuration
    ///
    /// Fails once the first line has been written.
    pub fn set_options(&mut self, options: WriterOptions) -> Result<()> {
        self.ensure_configurable()?;
        if let Some(ref date_format) = options.date_format {
            date_format.validate()?;
        }
        self.config.merge(options);
        Ok(())
    }

    pub fn set_date_format(&mut self, format: impl Into<TimestampFormat>) -> Result<()> {
        self.ensure_configurable()?;
        let format = format.into();
        format.validate()?;
        self.config.date_format = format;
        Ok(())
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.filter.set_level(level);
    }

    fn ensure_configurable(&self) -> Result<()> {
        if self.line_count > 0 {
            return Err(LoggerError::config(
                "FileWriter",
                "options cannot change after the first write",
            ));
        }
        Ok(())
    }

    /// Append an already formatted line exactly as given
    ///
    /// Flushes every write, or every `flush_frequency` writes when set.
    ///
    /// # Errors
    ///
    /// [`LoggerError::NotOpened`] without an open handle;
    /// [`LoggerError::PermissionDenied`] if writing fails, after which the
    /// writer is in the failed state.
    pub fn write(&mut self, line: &str) -> Result<()> {
        if self.state != WriterState::Open {
            return Err(LoggerError::NotOpened);
        }

        let count = self.line_count + 1;
        let periodic = self.config.effective_flush_frequency();
        let flush_now = match periodic {
            Some(every) => count % every as u64 == 0,
            None => true,
        };

        let result = match self.sink.as_mut() {
            Some(sink) => sink.write_all(line.as_bytes()).and_then(|()| {
                if flush_now {
                    sink.flush()
                } else {
                    Ok(())
                }
            }),
            None => return Err(LoggerError::NotOpened),
        };

        if let Err(e) = result {
            self.sink = None;
            self.state = WriterState::Failed;
            return Err(LoggerError::permission_io(self.path_display(), WRITE_FAILED, e));
        }

        self.line_count = count;
        if flush_now && periodic.is_some() {
            self.forced_flushes += 1;
        }
        self.last_line = line.trim().to_string();
        Ok(())
    }

    /// Flush and release the handle. Safe to call more than once.
    pub fn close(&mut self) -> Result<()> {
        let Some(mut sink) = self.sink.take() else {
            return Ok(());
        };
        if self.state == WriterState::Open {
            self.state = WriterState::Closed;
        }
        sink.flush()?;
        Ok(())
    }

    pub fn log_file_path(&self) -> Option<&Path> {
        self.log_file_path.as_deref()
    }

    /// Trimmed content of the most recent successful write
    pub fn last_log_line(&self) -> &str {
        &self.last_line
    }

    pub fn options(&self) -> &WriterConfig {
        &self.config
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn level(&self) -> LogLevel {
        self.filter.level()
    }

    pub fn state(&self) -> WriterState {
        self.state
    }

    /// Successful writes so far
    pub fn line_count(&self) -> u64 {
        self.line_count
    }

    /// Flushes triggered by the flush frequency
    pub fn forced_flushes(&self) -> u64 {
        self.forced_flushes
    }

    fn path_display(&self) -> String {
        self.log_file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }

    #[cfg(test)]
    fn with_sink(config: WriterConfig, sink: Box<dyn Write + Send>) -> Self {
        let mut writer = Self::new(config);
        writer.log_file_path = Some(PathBuf::from("memory"));
        writer.sink = Some(LogSink::Memory(sink));
        writer.state = WriterState::Open;
        writer
    }
}

impl Default for FileWriter {
    fn default() -> Self {
        Self::new(WriterConfig::default())
    }
}

impl LogAdapter for FileWriter {
    fn log(&mut self, level: LogLevel, message: &str, context: &LogContext) -> Result<()> {
        if !self.filter.admits(level) {
            return Ok(());
        }

        let entry = LogEntry::new(level, message).with_context(context.clone());
        let line = format_line(&entry, &self.config)?;
        self.write(&line)
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut sink) = self.sink {
            sink.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            eprintln!("[LOGGER ERROR] Failed to close log file: {}", e);
        }
    }
}

/// Drop trailing separators without touching the rest of the path
fn without_trailing_separators(path: &Path) -> PathBuf {
    let trimmed: PathBuf = path.components().collect();
    if trimmed.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        trimmed
    }
}

fn has_recognized_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            RECOGNIZED_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

fn create_log_dir(path: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DEFAULT_DIR_MODE);
    }
    builder.create(path)
}
