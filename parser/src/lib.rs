// Parser crate for pipe-delimited service log files
// Fixed 4-field format: timestamp | LEVEL | service | message

pub mod types;
pub mod line;
pub mod filter;
pub mod pipeline;

// Re-export main types
pub use types::*;
pub use line::{parse_line, ParsedLine};
pub use filter::Filters;
pub use pipeline::{process, write_output, Report};
