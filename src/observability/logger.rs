//! Structured JSON logger
//!
//! - One log line = one event
//! - Deterministic key ordering (ts, event, severity, then sorted fields)
//! - Synchronous, no buffering

use std::fmt;
use std::io::{self, Write};

use chrono::{SecondsFormat, Utc};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info = 0,
    /// Recoverable issues
    Warn = 1,
    /// Operation failures
    Error = 2,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured logger that outputs one JSON line per event
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        Self::log_to_writer(&ts, severity, event, fields, &mut io::stdout());
    }

    /// Log to stderr (for error events)
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        Self::log_to_writer(&ts, severity, event, fields, &mut io::stderr());
    }

    /// Internal log implementation that writes to a given writer
    fn log_to_writer<W: Write>(
        ts: &str,
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let mut output = String::with_capacity(256);

        output.push_str("{\"ts\":\"");
        output.push_str(ts);
        output.push('"');

        output.push_str(",\"event\":\"");
        Self::escape_json_string(&mut output, event);
        output.push('"');

        output.push_str(",\"severity\":\"");
        output.push_str(severity.as_str());
        output.push('"');

        // Sort fields alphabetically for deterministic output
        let mut sorted_fields: Vec<_> = fields.iter().collect();
        sorted_fields.sort_by_key(|(k, _)| *k);

        for (key, value) in sorted_fields {
            output.push_str(",\"");
            Self::escape_json_string(&mut output, key);
            output.push_str("\":\"");
            Self::escape_json_string(&mut output, value);
            output.push('"');
        }

        output.push('}');
        output.push('\n');

        // Write atomically (one syscall)
        let _ = writer.write_all(output.as_bytes());
        let _ = writer.flush();
    }

    /// Escape special characters for JSON strings
    fn escape_json_string(output: &mut String, s: &str) {
        for c in s.chars() {
            match c {
                '"' => output.push_str("\\\""),
                '\\' => output.push_str("\\\\"),
                '\n' => output.push_str("\\n"),
                '\r' => output.push_str("\\r"),
                '\t' => output.push_str("\\t"),
                c if c.is_control() => {
                    output.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => output.push(c),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut buf = Vec::new();
        Logger::log_to_writer("2026-01-01T00:00:00.000Z", severity, event, fields, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_log_line_is_valid_json() {
        let line = capture(
            Severity::Info,
            "http_server_started",
            &[("addr", "0.0.0.0:8080")],
        );
        let parsed: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(parsed["event"], "http_server_started");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["addr"], "0.0.0.0:8080");
    }

    #[test]
    fn test_fields_are_sorted_deterministically() {
        let line = capture(Severity::Info, "e", &[("zebra", "1"), ("alpha", "2")]);
        let alpha_pos = line.find("alpha").unwrap();
        let zebra_pos = line.find("zebra").unwrap();
        assert!(alpha_pos < zebra_pos);
    }

    #[test]
    fn test_error_severity_renders() {
        let line = capture(
            Severity::Error,
            "store_open_failed",
            &[("error", "journal corruption at offset 0: checksum mismatch")],
        );
        let parsed: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(parsed["severity"], "ERROR");
        assert_eq!(parsed["event"], "store_open_failed");
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let line = capture(Severity::Warn, "e", &[("msg", "a \"quoted\"\nline")]);
        let parsed: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(parsed["msg"], "a \"quoted\"\nline");
    }
}
