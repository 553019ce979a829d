//! File writer configuration
//!
//! [`WriterConfig`] is the full option set a writer runs with. [`WriterOptions`]
//! is a partial overlay: every key is optional and merging it replaces only
//! the keys it carries.

use super::error::Result;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Deserializer, Serialize};

/// Extensions that are kept verbatim when they end an explicit filename
pub const RECOGNIZED_EXTENSIONS: [&str; 2] = ["log", "txt"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Extension appended to generated or bare filenames
    pub extension: String,
    /// Timestamp rendering for `[<timestamp>]` and `{date}`
    #[serde(alias = "dateFormat")]
    pub date_format: TimestampFormat,
    /// Explicit filename; when unset the name is `<prefix><date>.<extension>`
    pub filename: Option<String>,
    /// Force a flush every N writes; unset flushes every write
    #[serde(alias = "flushFrequency")]
    pub flush_frequency: Option<usize>,
    pub prefix: String,
    /// Line template with `{date}`, `{level}`, `{level-padding}`, `{priority}`,
    /// `{message}` and `{context}` placeholders
    #[serde(alias = "logFormat")]
    pub log_format: Option<String>,
    #[serde(alias = "appendContext")]
    pub append_context: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            extension: "log".to_string(),
            date_format: TimestampFormat::default(),
            filename: None,
            flush_frequency: None,
            prefix: "log_".to_string(),
            log_format: None,
            append_context: true,
        }
    }
}

impl WriterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a complete configuration; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.date_format.validate()?;
        Ok(config)
    }

    /// Overlay `options` onto this configuration, last write wins per key
    pub fn merge(&mut self, options: WriterOptions) {
        if let Some(extension) = options.extension {
            self.extension = extension;
        }
        if let Some(date_format) = options.date_format {
            self.date_format = date_format;
        }
        if let Some(filename) = options.filename {
            self.filename = filename;
        }
        if let Some(flush_frequency) = options.flush_frequency {
            self.flush_frequency = flush_frequency;
        }
        if let Some(prefix) = options.prefix {
            self.prefix = prefix;
        }
        if let Some(log_format) = options.log_format {
            self.log_format = log_format;
        }
        if let Some(append_context) = options.append_context {
            self.append_context = append_context;
        }
    }

    /// Flush frequency with 0 treated as unset
    pub fn effective_flush_frequency(&self) -> Option<usize> {
        self.flush_frequency.filter(|&n| n > 0)
    }

    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<TimestampFormat>) -> Self {
        self.date_format = format.into();
        self
    }

    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    #[must_use]
    pub fn with_flush_frequency(mut self, every: usize) -> Self {
        self.flush_frequency = Some(every);
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_log_format(mut self, template: impl Into<String>) -> Self {
        self.log_format = Some(template.into());
        self
    }

    #[must_use]
    pub fn with_append_context(mut self, append: bool) -> Self {
        self.append_context = append;
        self
    }
}

/// Partial configuration for [`WriterConfig::merge`]
///
/// Nullable keys use a nested `Option`: `None` leaves the key alone,
/// `Some(None)` clears it. In JSON, an absent key is `None` and `null` is
/// `Some(None)`.
///
/// # Examples
///
/// ```
/// use rust_file_logger::WriterOptions;
///
/// let options = WriterOptions::from_json(r#"{"filename": "app.log", "logFormat": null}"#).unwrap();
/// assert_eq!(options.filename, Some(Some("app.log".to_string())));
/// assert_eq!(options.log_format, Some(None));
/// assert_eq!(options.prefix, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    pub extension: Option<String>,
    #[serde(alias = "dateFormat")]
    pub date_format: Option<TimestampFormat>,
    #[serde(deserialize_with = "nullable")]
    pub filename: Option<Option<String>>,
    #[serde(alias = "flushFrequency", deserialize_with = "nullable")]
    pub flush_frequency: Option<Option<usize>>,
    pub prefix: Option<String>,
    #[serde(alias = "logFormat", deserialize_with = "nullable")]
    pub log_format: Option<Option<String>>,
    #[serde(alias = "appendContext")]
    pub append_context: Option<bool>,
}

fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl WriterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        if let Some(ref date_format) = options.date_format {
            date_format.validate()?;
        }
        Ok(options)
    }

    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    #[must_use]
    pub fn date_format(mut self, format: impl Into<TimestampFormat>) -> Self {
        self.date_format = Some(format.into());
        self
    }

    #[must_use]
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(Some(filename.into()));
        self
    }

    #[must_use]
    pub fn no_filename(mut self) -> Self {
        self.filename = Some(None);
        self
    }

    #[must_use]
    pub fn flush_frequency(mut self, every: usize) -> Self {
        self.flush_frequency = Some(Some(every));
        self
    }

    #[must_use]
    pub fn no_flush_frequency(mut self) -> Self {
        self.flush_frequency = Some(None);
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn log_format(mut self, template: impl Into<String>) -> Self {
        self.log_format = Some(Some(template.into()));
        self
    }

    #[must_use]
    pub fn no_log_format(mut self) -> Self {
        self.log_format = Some(None);
        self
    }

    #[must_use]
    pub fn append_context(mut self, append: bool) -> Self {
        self.append_context = Some(append);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WriterConfig::default();
        assert_eq!(config.extension, "log");
        assert_eq!(config.date_format, TimestampFormat::Standard);
        assert_eq!(config.filename, None);
        assert_eq!(config.flush_frequency, None);
        assert_eq!(config.prefix, "log_");
        assert_eq!(config.log_format, None);
        assert!(config.append_context);
    }

    #[test]
    fn test_merge_replaces_only_given_keys() {
        let mut config = WriterConfig::new().with_prefix("app_");
        config.merge(WriterOptions::new().extension("txt").flush_frequency(5));

        assert_eq!(config.extension, "txt");
        assert_eq!(config.flush_frequency, Some(5));
        assert_eq!(config.prefix, "app_");
        assert!(config.append_context);
    }

    #[test]
    fn test_merge_last_write_wins() {
        let mut config = WriterConfig::new();
        config.merge(WriterOptions::new().filename("first.log"));
        config.merge(WriterOptions::new().filename("second.log"));
        assert_eq!(config.filename.as_deref(), Some("second.log"));

        config.merge(WriterOptions::new().no_filename());
        assert_eq!(config.filename, None);
    }

    #[test]
    fn test_zero_flush_frequency_is_unset() {
        let config = WriterConfig::new().with_flush_frequency(0);
        assert_eq!(config.effective_flush_frequency(), None);

        let config = WriterConfig::new().with_flush_frequency(3);
        assert_eq!(config.effective_flush_frequency(), Some(3));
    }

    #[test]
    fn test_options_accept_camel_case_keys() {
        let options = WriterOptions::from_json(
            r#"{"dateFormat": "%H:%M", "flushFrequency": 10, "appendContext": false}"#,
        )
        .unwrap();

        assert_eq!(
            options.date_format,
            Some(TimestampFormat::Custom("%H:%M".to_string()))
        );
        assert_eq!(options.flush_frequency, Some(Some(10)));
        assert_eq!(options.append_context, Some(false));
        assert_eq!(options.filename, None);
    }

    #[test]
    fn test_config_from_json_fills_defaults() {
        let config = WriterConfig::from_json(r#"{"prefix": "svc_", "log_format": "{message}"}"#)
            .unwrap();
        assert_eq!(config.prefix, "svc_");
        assert_eq!(config.log_format.as_deref(), Some("{message}"));
        assert_eq!(config.extension, "log");
    }

    #[test]
    fn test_bad_date_format_in_json_is_rejected() {
        use crate::core::LoggerError;

        let err = WriterOptions::from_json(r#"{"dateFormat": "%Q bad"}"#).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = WriterConfig::from_json(r#"{"date_format": "%Y-%Q"}"#).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_bad_json_is_reported() {
        assert!(WriterOptions::from_json("{not json").is_err());
    }
}
