use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Severity level of a log record. The set is closed: anything outside
/// INFO/WARN/ERROR fails validation and the line is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    /// Parse a level field case-insensitively. Returns None for anything
    /// outside the allowed set.
    pub fn parse(s: &str) -> Option<Level> {
        match s.to_uppercase().as_str() {
            "INFO" => Some(Level::Info),
            "WARN" => Some(Level::Warn),
            "ERROR" => Some(Level::Error),
            _ => None,
        }
    }

    /// Canonical upper-case token used in output lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structurally valid log record with a validated level.
///
/// Only the level carries semantics; timestamp, service and message are
/// opaque strings. Service comparisons elsewhere are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: String,
    pub level: Level,
    pub service: String,
    pub message: String,
}

impl LogRecord {
    /// Render the record as one output line, level upper-cased.
    pub fn format_line(&self) -> String {
        format!(
            "{} | {} | {} | {}",
            self.timestamp, self.level, self.service, self.message
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to write output to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
