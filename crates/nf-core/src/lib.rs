//! Nano Filters Core Library
//!
//! This crate turns hand-maintained filter sources and third-party lists into
//! the minimized files shipped to users.
//!
//! # Modules
//!
//! - `types`: File kinds and header metadata
//! - `header`: Provenance header rendering and parsing
//! - `rules`: Per-kind line rule tables
//! - `minify`: The line filter transform and the JSON pass-through
//! - `validate`: Download sanity checks and `!#include` checks
//! - `sanitize`: Pattern-based line removal for third-party lists

pub mod error;
pub mod header;
pub mod minify;
pub mod rules;
pub mod sanitize;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use error::Error;
pub use header::{parse_header, render_header, ParsedHeader};
pub use minify::{minimize, minimize_body, minimize_meta, split_lines};
pub use sanitize::{Sanitized, Sanitizer};
pub use types::{FileKind, HeaderMetadata};
pub use validate::{check_includes, looks_like_html, validate_download};
