use crate::types::LogRecord;

/// Optional exact-match criteria narrowing which valid records are written.
///
/// An unset criterion matches anything on that dimension. The level filter
/// is upper-cased once at construction and compared against the record's
/// canonical level token; a value outside the allowed set simply matches
/// nothing. The service filter is case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    level: Option<String>,
    service: Option<String>,
}

impl Filters {
    pub fn new(level: Option<&str>, service: Option<&str>) -> Self {
        Self {
            level: level.map(str::to_uppercase),
            service: service.map(str::to_string),
        }
    }

    /// Both criteria must hold for a record to be written.
    pub fn matches(&self, record: &LogRecord) -> bool {
        if let Some(level) = &self.level {
            if record.level.as_str() != level {
                return false;
            }
        }
        if let Some(service) = &self.service {
            if record.service != *service {
                return false;
            }
        }
        true
    }
}
