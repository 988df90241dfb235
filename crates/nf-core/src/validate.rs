//! Sanity checks for downloaded lists and filter sources

use std::path::{Component, Path};

use crate::error::Error;
use crate::minify::split_lines;

const INCLUDE_DIRECTIVE: &str = "!#include";

/// Heuristic for an HTML error page served in place of a plain-text list.
pub fn looks_like_html(text: &str) -> bool {
    let text = text.trim();
    text.starts_with('<') && text.ends_with('>')
}

/// Reject downloaded content that looks like an HTML error page.
pub fn validate_download(name: &str, bytes: &[u8]) -> Result<(), Error> {
    let text = String::from_utf8_lossy(bytes);
    if looks_like_html(&text) {
        log::error!("{} seems to be corrupted!", name);
        return Err(Error::Corrupted(name.to_string()));
    }
    Ok(())
}

/// Check every `!#include` directive in a filter source.
///
/// Targets must be relative paths that stay inside `base_dir` and name an
/// existing file.
pub fn check_includes(text: &str, base_dir: &Path) -> Result<(), Error> {
    for (idx, line) in split_lines(text).enumerate() {
        let Some(target) = include_target(line) else {
            continue;
        };

        let bad = |reason| Error::Include {
            target: target.to_string(),
            line: idx + 1,
            reason,
        };

        if target.is_empty() {
            return Err(bad("missing file name"));
        }

        let path = Path::new(target);
        let escapes = path
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(bad("path leaves the source directory"));
        }

        if !base_dir.join(path).is_file() {
            return Err(bad("file does not exist"));
        }
    }

    Ok(())
}

fn include_target(line: &str) -> Option<&str> {
    let rest = line.trim().strip_prefix(INCLUDE_DIRECTIVE)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}
