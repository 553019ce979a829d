//! Line formatting for log entries
//!
//! A line is either the bracketed default `[<timestamp>] [<level>] <message>`
//! or a user template with `{name}` placeholders. When enabled, a non-empty
//! context is dumped underneath, one indented `key: value` per line.

use super::config::WriterConfig;
use super::error::Result;
use super::log_context::LogContext;
use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;
use serde::Serialize;
use serde_json::Value;

/// Terminator written after every record
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Width of the column `{level}{level-padding}` fills
pub const LEVEL_COLUMN_WIDTH: usize = 9;

const CONTEXT_INDENT: &str = "    ";

/// Output layout for the message line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LineFormat {
    /// `[<timestamp>] [<level>] <message>`
    #[default]
    Bracketed,

    /// User template, e.g. `{date} {level}{level-padding}{message}`
    Template(String),
}

impl LineFormat {
    pub fn from_template(template: Option<&str>) -> Self {
        match template {
            Some(t) => LineFormat::Template(t.to_string()),
            None => LineFormat::Bracketed,
        }
    }

    /// Format the message line, without context dump or terminator
    pub fn format(&self, entry: &LogEntry, timestamp_format: &TimestampFormat) -> Result<String> {
        let timestamp = timestamp_format.format(&entry.timestamp)?;
        let line = match self {
            LineFormat::Bracketed => {
                format!("[{}] [{}] {}", timestamp, entry.level, entry.message)
            }
            LineFormat::Template(template) => {
                let level = entry.level.to_str();
                let padding = " ".repeat(LEVEL_COLUMN_WIDTH.saturating_sub(level.len()));
                let priority = entry.level.priority().to_string();
                let context = entry.context.to_json();

                substitute(template, |name| match name {
                    "date" => Some(timestamp.as_str()),
                    "level" => Some(entry.level.to_uppercase_str()),
                    "level-padding" => Some(padding.as_str()),
                    "priority" => Some(priority.as_str()),
                    "message" => Some(entry.message.as_str()),
                    "context" => Some(context.as_str()),
                    _ => None,
                })
            }
        };
        Ok(line)
    }
}

/// Format a complete record as it is written to the log
pub fn format_line(entry: &LogEntry, config: &WriterConfig) -> Result<String> {
    let mut line =
        LineFormat::from_template(config.log_format.as_deref()).format(entry, &config.date_format)?;

    if config.append_context && !entry.context.is_empty() {
        line.push_str(LINE_ENDING);
        line.push_str(&indent(&context_to_string(&entry.context), CONTEXT_INDENT));
    }

    line.push_str(LINE_ENDING);
    Ok(line)
}

/// Replace `{name}` tokens in one left-to-right pass.
///
/// Substituted text is never rescanned, and unknown tokens stay verbatim.
fn substitute<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };

        match lookup(&after[..end]) {
            Some(value) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// `key: <pretty value>` per context field, joined by line terminators
pub fn context_to_string(context: &LogContext) -> String {
    let export = context
        .fields()
        .iter()
        .map(|(key, value)| format!("{}: {}", key, pretty_value(value)))
        .collect::<Vec<_>>()
        .join(LINE_ENDING);

    export.trim_end().to_string()
}

fn pretty_value(value: &Value) -> String {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(CONTEXT_INDENT.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);

    match value.serialize(&mut ser) {
        Ok(()) => String::from_utf8(buf).unwrap_or_else(|_| value.to_string()),
        Err(_) => value.to_string(),
    }
}

fn indent(text: &str, indent: &str) -> String {
    format!("{}{}", indent, text.replace('\n', &format!("\n{}", indent)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use chrono::{DateTime, Local, TimeZone};
    use serde_json::json;

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 9, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(42)
    }

    fn entry(level: LogLevel, message: &str) -> LogEntry {
        LogEntry::new(level, message).with_timestamp(fixed_datetime())
    }

    #[test]
    fn test_bracketed_format() {
        let line = format_line(&entry(LogLevel::Info, "hello"), &WriterConfig::default()).unwrap();
        assert_eq!(line, format!("[2025-01-08 9:30:45.000042] [info] hello{}", LINE_ENDING));
    }

    #[test]
    fn test_bracketed_uses_date_format() {
        let config = WriterConfig::new().with_date_format("%H:%M:%S");
        let line = format_line(&entry(LogLevel::Warning, "disk"), &config).unwrap();
        assert_eq!(line, format!("[09:30:45] [warning] disk{}", LINE_ENDING));
    }

    #[test]
    fn test_template_placeholders() {
        let config = WriterConfig::new()
            .with_date_format("%Y")
            .with_log_format("{date} {level}{level-padding}|{priority}| {message} {context}");
        let e = entry(LogLevel::Error, "boom").with_context(LogContext::new().with_field("code", 7));

        let line = format_line(&e, &config.with_append_context(false)).unwrap();
        assert_eq!(
            line,
            format!("2025 ERROR    |3| boom {{\"code\":7}}{}", LINE_ENDING)
        );
    }

    #[test]
    fn test_level_padding_aligns_column() {
        let format = LineFormat::Template("{level}{level-padding}|".to_string());
        for level in LogLevel::ALL {
            let line = format.format(&entry(level, "x"), &TimestampFormat::Standard).unwrap();
            assert_eq!(line.len(), LEVEL_COLUMN_WIDTH + 1, "{}", level);
        }
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        let format = LineFormat::Template("{message} / {context}".to_string());
        let e = entry(LogLevel::Info, "literal {context} and {date}");
        let line = format.format(&e, &TimestampFormat::Standard).unwrap();
        assert_eq!(line, "literal {context} and {date} / {}");
    }

    #[test]
    fn test_unknown_and_unclosed_tokens_stay_verbatim() {
        let format = LineFormat::Template("{{message}} {nope} {message".to_string());
        let line = format.format(&entry(LogLevel::Info, "hi"), &TimestampFormat::Standard).unwrap();
        assert_eq!(line, "{hi} {nope} {message");
    }

    #[test]
    fn test_context_dump_is_indented() {
        let ctx = LogContext::new()
            .with_field("user", "ann")
            .with_field("tags", json!(["a", "b"]));
        let line = format_line(
            &entry(LogLevel::Notice, "saved").with_context(ctx),
            &WriterConfig::new().with_date_format("%H"),
        )
        .unwrap();

        let expected = [
            "[09] [notice] saved",
            "    user: \"ann\"",
            "    tags: [",
            "        \"a\",",
            "        \"b\"",
            "    ]",
        ]
        .join(LINE_ENDING);
        // pretty JSON breaks lines with '\n' on every platform
        assert_eq!(line.replace("\r\n", "\n"), format!("{}\n", expected.replace("\r\n", "\n")));
    }

    #[test]
    fn test_empty_context_is_not_dumped() {
        let line = format_line(&entry(LogLevel::Info, "quiet"), &WriterConfig::default()).unwrap();
        assert_eq!(line.matches(LINE_ENDING).count(), 1);
    }

    #[test]
    fn test_context_dump_disabled() {
        let config = WriterConfig::new().with_append_context(false);
        let e = entry(LogLevel::Info, "m").with_context(LogContext::new().with_field("k", 1));
        assert!(!format_line(&e, &config).unwrap().contains("k: 1"));
    }

    #[test]
    fn test_bad_date_format_fails_instead_of_panicking() {
        let config = WriterConfig::new().with_date_format("%Q bad");
        let result = format_line(&entry(LogLevel::Info, "hello"), &config);
        assert!(matches!(
            result,
            Err(crate::core::LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_line_format_default() {
        assert_eq!(LineFormat::default(), LineFormat::Bracketed);
        assert_eq!(LineFormat::from_template(None), LineFormat::Bracketed);
    }
}
