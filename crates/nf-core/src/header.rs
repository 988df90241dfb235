//! Provenance header rendering and parsing
//!
//! Field order is part of the output contract: downstream tools read these
//! headers back, so `render_header` and `parse_header` must stay in step.

use chrono::{DateTime, Utc};

use crate::minify::split_lines;
use crate::types::{FileKind, HeaderMetadata};

/// First line of every filter and hosts output.
pub const LIST_MARKER: &str = "[Nano Adblocker]";

const WARNING_COMPILED: &str = "This file is a compiled binary, do not modify";
const WARNING_OVERWRITE: &str = "All modifications will be overwritten on the next build";

/// Render the header block for `kind`, one entry per line.
pub fn render_header(kind: FileKind, meta: &HeaderMetadata) -> Vec<String> {
    let p = kind.comment_prefix();
    let mut out = Vec::with_capacity(8);

    if kind.has_title() {
        out.push(LIST_MARKER.to_string());
        if let Some(title) = &meta.title {
            out.push(format!("{p} Title: {title}"));
        }
    }

    out.push(format!("{p} Expires: {} days", meta.expires_days));
    if let Some(at) = meta.generated_at {
        out.push(format!("{p} Cached: {}", format_timestamp(at)));
    }
    out.push(format!("{p} License: {}", meta.license));
    out.push(format!("{p} Source: {}", meta.source_url));

    if kind.has_warning() {
        out.push(format!("{p} {WARNING_COMPILED}"));
        out.push(format!("{p} {WARNING_OVERWRITE}"));
    }

    out
}

/// Format a build timestamp the way the `Cached` field carries it.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
}

/// Header fields recovered from a built document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedHeader {
    pub title: Option<String>,
    pub expires_days: Option<u32>,
    pub cached: Option<String>,
    pub license: Option<String>,
    pub source: Option<String>,
}

/// Read the leading header block of `text`.
///
/// Parsing stops at the first line that is not a `<prefix> ` comment, so body
/// lines such as `!#include` are never mistaken for header fields.
pub fn parse_header(text: &str, kind: FileKind) -> ParsedHeader {
    let prefix = kind.comment_prefix();
    let mut header = ParsedHeader::default();

    for (i, line) in split_lines(text).enumerate() {
        if i == 0 && kind.has_title() && line == LIST_MARKER {
            continue;
        }

        let Some(field) = line.strip_prefix(prefix).and_then(|rest| rest.strip_prefix(' ')) else {
            break;
        };

        if let Some(v) = field.strip_prefix("Title: ") {
            header.title = Some(v.to_string());
        } else if let Some(v) = field.strip_prefix("Expires: ") {
            header.expires_days = v.split_whitespace().next().and_then(|n| n.parse().ok());
        } else if let Some(v) = field.strip_prefix("Cached: ") {
            header.cached = Some(v.to_string());
        } else if let Some(v) = field.strip_prefix("License: ") {
            header.license = Some(v.to_string());
        } else if let Some(v) = field.strip_prefix("Source: ") {
            header.source = Some(v.to_string());
        }
    }

    header
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn meta(kind: FileKind) -> HeaderMetadata {
        HeaderMetadata::new(kind, "GPL-3.0", "https://example.com/src.txt")
    }

    #[test]
    fn renders_filter_header_in_order() {
        let at = Utc.with_ymd_and_hms(2019, 3, 4, 5, 6, 7).unwrap();
        let lines = render_header(
            FileKind::Filter,
            &meta(FileKind::Filter).with_title("Nano filters").generated_at(Some(at)),
        );
        assert_eq!(
            lines,
            vec![
                "[Nano Adblocker]",
                "! Title: Nano filters",
                "! Expires: 1 days",
                "! Cached: Mon Mar 04 2019 05:06:07 GMT+0000",
                "! License: GPL-3.0",
                "! Source: https://example.com/src.txt",
                "! This file is a compiled binary, do not modify",
                "! All modifications will be overwritten on the next build",
            ]
        );
    }

    #[test]
    fn stable_header_has_no_cached_line() {
        let lines = render_header(FileKind::Resource, &meta(FileKind::Resource));
        assert_eq!(
            lines,
            vec![
                "# Expires: 3 days",
                "# License: GPL-3.0",
                "# Source: https://example.com/src.txt",
                "# This file is a compiled binary, do not modify",
                "# All modifications will be overwritten on the next build",
            ]
        );
    }

    #[test]
    fn psl_header_has_no_warning() {
        let lines = render_header(FileKind::PublicSuffix, &meta(FileKind::PublicSuffix));
        assert_eq!(
            lines,
            vec![
                "// Expires: 7 days",
                "// License: GPL-3.0",
                "// Source: https://example.com/src.txt",
            ]
        );
    }

    #[test]
    fn parse_recovers_rendered_fields() {
        let kinds = [
            FileKind::Filter,
            FileKind::Hosts { block_syntax: true },
            FileKind::Resource,
            FileKind::PublicSuffix,
        ];
        for kind in kinds {
            let m = meta(kind).with_title("Some list").with_expires_days(4);
            let text = render_header(kind, &m).join("\n") + "\nbody\n";
            let parsed = parse_header(&text, kind);
            assert_eq!(parsed.license.as_deref(), Some("GPL-3.0"), "{kind:?}");
            assert_eq!(parsed.source.as_deref(), Some("https://example.com/src.txt"), "{kind:?}");
            assert_eq!(parsed.expires_days, Some(4), "{kind:?}");
            assert_eq!(parsed.cached, None, "{kind:?}");
        }
    }

    #[test]
    fn parse_stops_at_body() {
        let text = "[Nano Adblocker]\n! Expires: 1 days\n!#include other.txt\n! License: fake\n";
        let parsed = parse_header(text, FileKind::Filter);
        assert_eq!(parsed.expires_days, Some(1));
        assert_eq!(parsed.license, None);
    }
}
