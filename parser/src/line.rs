use crate::types::{Level, LogRecord};

/// Structural outcome of splitting one raw input line.
///
/// A tagged result instead of an Option so callers cannot mistake a set of
/// empty fields for a successfully parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Line was empty after trimming, or did not split into exactly four
    /// pipe-delimited parts.
    Malformed,
    /// Four trimmed fields. The level has not yet been checked against the
    /// allowed set.
    Fields {
        timestamp: String,
        level: String,
        service: String,
        message: String,
    },
}

impl ParsedLine {
    /// Promote structurally valid fields to a record by validating the
    /// level. Malformed lines and unknown levels both yield None.
    pub fn validate(self) -> Option<LogRecord> {
        match self {
            ParsedLine::Malformed => None,
            ParsedLine::Fields {
                timestamp,
                level,
                service,
                message,
            } => {
                let level = Level::parse(&level)?;
                Some(LogRecord {
                    timestamp,
                    level,
                    service,
                    message,
                })
            }
        }
    }
}

/// Split a raw line into its four fields.
///
/// The whole line is trimmed first, then split on `|`, then each part is
/// trimmed individually, so whitespace around delimiters is ignored while
/// spaces inside a field survive. Exactly four parts are required; a
/// trailing delimiter produces a fifth (empty) part and is malformed, not
/// truncated. Individual fields may be empty at this stage.
pub fn parse_line(raw: &str) -> ParsedLine {
    let line = raw.trim();
    if line.is_empty() {
        return ParsedLine::Malformed;
    }

    let parts: Vec<&str> = line.split('|').map(str::trim).collect();
    if parts.len() != 4 {
        return ParsedLine::Malformed;
    }

    ParsedLine::Fields {
        timestamp: parts[0].to_string(),
        level: parts[1].to_string(),
        service: parts[2].to_string(),
        message: parts[3].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(line: &str) -> (String, String, String, String) {
        match parse_line(line) {
            ParsedLine::Fields {
                timestamp,
                level,
                service,
                message,
            } => (timestamp, level, service, message),
            ParsedLine::Malformed => panic!("expected fields for {line:?}"),
        }
    }

    #[test]
    fn test_parse_basic_line() {
        let (ts, level, service, message) =
            fields("2024-01-01T00:00:00 | info | auth | login ok");
        assert_eq!(ts, "2024-01-01T00:00:00");
        assert_eq!(level, "info");
        assert_eq!(service, "auth");
        assert_eq!(message, "login ok");
    }

    #[test]
    fn test_whitespace_around_delimiters_ignored() {
        let (ts, level, service, message) =
            fields("  2024-01-01T00:00:00|ERROR  |  billing|  charge failed  \n");
        assert_eq!(ts, "2024-01-01T00:00:00");
        assert_eq!(level, "ERROR");
        assert_eq!(service, "billing");
        assert_eq!(message, "charge failed");
    }

    #[test]
    fn test_spaces_inside_fields_preserved() {
        let (_, _, _, message) = fields("t | INFO | auth | user  logged   in");
        assert_eq!(message, "user  logged   in");
    }

    #[test]
    fn test_empty_and_blank_lines_malformed() {
        assert_eq!(parse_line(""), ParsedLine::Malformed);
        assert_eq!(parse_line("   \t  \n"), ParsedLine::Malformed);
    }

    #[test]
    fn test_wrong_field_count_malformed() {
        assert_eq!(parse_line("bad line no pipes"), ParsedLine::Malformed);
        assert_eq!(parse_line("a | b | c"), ParsedLine::Malformed);
        assert_eq!(parse_line("a | b | c | d | e"), ParsedLine::Malformed);
    }

    #[test]
    fn test_trailing_delimiter_malformed() {
        // The empty fifth part counts; this is not a 4-field line.
        assert_eq!(parse_line("a | INFO | svc | msg |"), ParsedLine::Malformed);
    }

    #[test]
    fn test_empty_field_is_structurally_valid() {
        let (_, level, service, _) = fields("t | INFO |  | msg");
        assert_eq!(level, "INFO");
        assert_eq!(service, "");
    }

    #[test]
    fn test_validate_promotes_known_level() {
        let record = parse_line("t | warn | billing | retrying")
            .validate()
            .unwrap();
        assert_eq!(record.level, crate::Level::Warn);
        assert_eq!(record.service, "billing");
    }

    #[test]
    fn test_validate_drops_unknown_level() {
        assert!(parse_line("t | DEBUG | svc | msg").validate().is_none());
        assert!(parse_line("no pipes here").validate().is_none());
    }
}
