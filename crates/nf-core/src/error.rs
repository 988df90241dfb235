/// Error type for minimization and validation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} seems to be corrupted")]
    Corrupted(String),
    #[error("Bad include '{target}' on line {line}: {reason}")]
    Include {
        target: String,
        line: usize,
        reason: &'static str,
    },
    #[error("Invalid sanitizer pattern: {0}")]
    Pattern(#[from] regex::Error),
}
