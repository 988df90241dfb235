//! Content sanitizer
//!
//! Some third-party lists carry entries that must not ship. Matching lines
//! are replaced by a marker comment; every other line is trimmed.

use regex::{Regex, RegexBuilder};

use crate::error::Error;

/// Default pattern for entries removed from third-party lists.
pub const DEFAULT_PATTERN: &str = r"\blatam\b";

/// Line written in place of a removed entry.
pub const REMOVED_MARKER: &str = "# Line Removed by Content Sanitizer";

/// Output of a sanitizer pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    pub text: String,
    /// Original lines that were replaced, in order.
    pub removed: Vec<String>,
}

pub struct Sanitizer {
    pattern: Regex,
}

impl Sanitizer {
    /// Compile a case-insensitive sanitizer pattern.
    pub fn new(pattern: &str) -> Result<Self, Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { pattern })
    }

    /// Lines are split on LF only; a stray CR is removed by trimming.
    pub fn sanitize(&self, text: &str) -> Sanitized {
        let mut removed = Vec::new();
        let lines: Vec<&str> = text
            .split('\n')
            .map(|line| {
                if self.pattern.is_match(line) {
                    log::info!("Content Sanitizer: Removed Line '{}'", line);
                    removed.push(line.to_string());
                    REMOVED_MARKER
                } else {
                    line.trim()
                }
            })
            .collect();

        Sanitized {
            text: lines.join("\n"),
            removed,
        }
    }
}
