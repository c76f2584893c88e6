use crate::filter::Filters;
use crate::line::parse_line;
use crate::types::PipelineError;
use std::fs;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info};

/// Result of one pass over the input.
///
/// `valid_scanned` counts every record that passed level validation,
/// whether or not it matched the filters; `lines` holds the formatted
/// output for the records that did match, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub valid_scanned: usize,
    pub lines: Vec<String>,
}

impl Report {
    pub fn lines_written(&self) -> usize {
        self.lines.len()
    }
}

/// Scan the input line by line, dropping malformed lines and unknown
/// levels silently, and buffer the formatted lines that match `filters`.
///
/// The whole matching set is buffered in memory; nothing is flushed
/// incrementally. Only a read failure aborts the pass.
pub fn process<R: BufRead>(reader: R, filters: &Filters) -> Result<Report, PipelineError> {
    let mut valid_scanned = 0;
    let mut lines = Vec::new();

    for line in reader.lines() {
        let raw = line.map_err(PipelineError::Read)?;

        let Some(record) = parse_line(&raw).validate() else {
            debug!(line = %raw, "dropping malformed or invalid-level line");
            continue;
        };

        valid_scanned += 1;

        if filters.matches(&record) {
            lines.push(record.format_line());
        }
    }

    info!(
        valid_scanned,
        matched = lines.len(),
        "finished scanning input"
    );

    Ok(Report {
        valid_scanned,
        lines,
    })
}

/// Write the buffered lines to `path` in one pass, newline-terminated,
/// overwriting any existing content.
pub fn write_output(path: &Path, lines: &[String]) -> Result<(), PipelineError> {
    let mut buf = String::new();
    for line in lines {
        buf.push_str(line);
        buf.push('\n');
    }

    fs::write(path, buf).map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })
}
