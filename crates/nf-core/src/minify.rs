//! Line filter transform
//!
//! Splits a document into lines, applies the kind's rule table, and prepends
//! the provenance header. The transform is pure; callers do the I/O.

use crate::error::Error;
use crate::header::render_header;
use crate::rules::{self, BlankPolicy, LineOutcome};
use crate::types::{FileKind, HeaderMetadata};

/// Split on CRLF, LF, or CR. A leading byte order mark is dropped.
pub fn split_lines(raw: &str) -> impl Iterator<Item = &str> + '_ {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    raw.split("\r\n")
        .flat_map(|chunk| chunk.split(&['\n', '\r'][..]))
}

/// Minimize `raw` and prepend the header for `kind`.
///
/// The output always ends with exactly one newline.
pub fn minimize(raw: &str, kind: FileKind, meta: &HeaderMetadata) -> String {
    let mut out = render_header(kind, meta);
    out.extend(minimize_body(raw, kind));
    out.push(String::new());
    out.join("\n")
}

/// Apply the kind's rules without rendering a header.
pub fn minimize_body(raw: &str, kind: FileKind) -> Vec<String> {
    let mut body: Vec<String> = Vec::new();

    for line in split_lines(raw) {
        let outcome = match kind {
            FileKind::Filter => rules::filter_line(line),
            FileKind::Resource => rules::resource_line(line),
            FileKind::PublicSuffix => rules::psl_line(line),
            FileKind::Hosts { block_syntax } => {
                for token in rules::hosts_tokens(line) {
                    if block_syntax {
                        body.push(format!("||{token}^"));
                    } else {
                        body.push(token.to_string());
                    }
                }
                continue;
            }
        };

        match outcome {
            LineOutcome::Drop => {}
            LineOutcome::Keep(kept) => body.push(kept.to_string()),
            LineOutcome::Blank => match rules::blank_policy(kind) {
                BlankPolicy::Drop => {}
                BlankPolicy::Collapse => {
                    if body.last().map_or(true, |last| !last.is_empty()) {
                        body.push(String::new());
                    }
                }
            },
        }
    }

    // The final newline stands in for a trailing blank line.
    if rules::blank_policy(kind) == BlankPolicy::Collapse && body.last().is_some_and(|l| l.is_empty()) {
        body.pop();
    }

    body
}

/// Re-serialize a JSON asset manifest compactly, keeping key order.
pub fn minimize_meta(raw: &str) -> Result<String, Error> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let value: serde_json::Value = serde_json::from_str(raw)?;
    Ok(serde_json::to_string(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::parse_header;

    fn stable(kind: FileKind) -> HeaderMetadata {
        HeaderMetadata::new(kind, "GPL-3.0", "https://example.com/list.txt")
    }

    fn body_of(raw: &str, kind: FileKind) -> Vec<String> {
        minimize_body(raw, kind)
    }

    #[test]
    fn test_split_lines_mixed_endings() {
        let lines: Vec<_> = split_lines("a\r\nb\nc\rd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);

        let lines: Vec<_> = split_lines("a\n\rb\r\r\nc\n").collect();
        assert_eq!(lines, vec!["a", "", "b", "", "c", ""]);
    }

    #[test]
    fn leading_bom_is_not_part_of_first_line() {
        let raw = "\u{feff}! Title: upstream\r\n||ads.example.com^\r\n";
        assert_eq!(body_of(raw, FileKind::Filter), vec!["||ads.example.com^"]);

        let raw = "\u{feff}0.0.0.0 example.com\n";
        assert_eq!(body_of(raw, FileKind::Hosts { block_syntax: true }), vec!["||example.com^"]);

        assert_eq!(minimize_meta("\u{feff}{\"a\": 1}").unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn filter_minimization() {
        let raw = "[Adblock Plus 2.0]\r\n! Title: upstream\r\n\r\n  ||ads.example.com^  \r\n# comment\r\n!#include foo.txt\r\nexample.com##.ad\r\n";
        assert_eq!(
            body_of(raw, FileKind::Filter),
            vec!["||ads.example.com^", "!#include foo.txt", "example.com##.ad"]
        );
    }

    #[test]
    fn filter_output_has_no_comments_or_blanks() {
        let raw = "!a\n\n!#if env_chromium\n!   \n[x]\nrule\n   \n#\n!#endif\n";
        for line in body_of(raw, FileKind::Filter) {
            assert!(!line.is_empty());
            assert!(!line.starts_with('!') || line.starts_with("!#"), "{line}");
        }
    }

    #[test]
    fn hosts_block_syntax() {
        let raw = "# Hosts\n127.0.0.1 localhost\n::1 localhost ip6-localhost ip6-loopback\n0.0.0.0 example.com\n0.0.0.0 a.example.com b.example.com # trailing\n";
        assert_eq!(
            body_of(raw, FileKind::Hosts { block_syntax: true }),
            vec!["||example.com^", "||a.example.com^", "||b.example.com^"]
        );
    }

    #[test]
    fn hosts_plain_tokens() {
        let raw = "ads.example.com\n\n  tracker.example.com  \n255.255.255.255 broadcasthost\n";
        let body = body_of(raw, FileKind::Hosts { block_syntax: false });
        assert_eq!(body, vec!["ads.example.com", "tracker.example.com", "255.255.255.255"]);
        assert!(body.iter().all(|t| !rules::is_local_alias(t)));
    }

    #[test]
    fn resource_collapses_blank_runs() {
        let raw = "# header comment\n\n\nnoopjs application/javascript\n(function() {\n    'use strict';   \n})();\n\n#comment between blanks\n\n\nnoop.txt text/plain\n\n\n";
        assert_eq!(
            body_of(raw, FileKind::Resource),
            vec![
                "",
                "noopjs application/javascript",
                "(function() {",
                "    'use strict';",
                "})();",
                "",
                "noop.txt text/plain",
            ]
        );
    }

    #[test]
    fn resource_output_ends_with_single_newline() {
        let out = minimize("a\n\n\n", FileKind::Resource, &stable(FileKind::Resource));
        assert!(out.ends_with("\na\n"));
        assert!(!out.contains("\n\n\n"));
    }

    #[test]
    fn psl_strips_comments() {
        let raw = "// This Source Code Form is subject to the terms\n\n// ac : https://en.wikipedia.org/wiki/.ac\nac\ncom.ac\nexample.com // comment\n";
        assert_eq!(body_of(raw, FileKind::PublicSuffix), vec!["ac", "com.ac", "example.com"]);
    }

    #[test]
    fn full_output_layout() {
        let meta = stable(FileKind::Filter).with_title("Nano filters");
        let out = minimize("! c\n||a.com^\n", FileKind::Filter, &meta);
        assert_eq!(
            out,
            "[Nano Adblocker]\n\
             ! Title: Nano filters\n\
             ! Expires: 1 days\n\
             ! License: GPL-3.0\n\
             ! Source: https://example.com/list.txt\n\
             ! This file is a compiled binary, do not modify\n\
             ! All modifications will be overwritten on the next build\n\
             ||a.com^\n"
        );
    }

    #[test]
    fn empty_input_yields_header_and_newline() {
        let out = minimize("", FileKind::PublicSuffix, &stable(FileKind::PublicSuffix));
        assert!(out.ends_with("https://example.com/list.txt\n"));
    }

    #[test]
    fn minimization_is_idempotent() {
        let cases = [
            (FileKind::Filter, "! c\n[h]\n  ||a.com^\n\n!#include x.txt\n"),
            (FileKind::Hosts { block_syntax: false }, "0.0.0.0 a.com b.com\n# c\n"),
            (FileKind::Resource, "# c\n\n\nname text/plain\n  body  \n\n\nother\n\n"),
            (FileKind::PublicSuffix, "// c\ncom\n\nco.uk // x\n"),
        ];
        for (kind, raw) in cases {
            let once = minimize(raw, kind, &stable(kind));
            let twice = minimize(&body_of(raw, kind).join("\n"), kind, &stable(kind));
            assert_eq!(once, twice, "{kind:?}");
        }
    }

    #[test]
    fn output_header_round_trips() {
        let meta = stable(FileKind::Hosts { block_syntax: true }).with_expires_days(2);
        let out = minimize("0.0.0.0 a.com\n", FileKind::Hosts { block_syntax: true }, &meta);
        let parsed = parse_header(&out, FileKind::Hosts { block_syntax: true });
        assert_eq!(parsed.license.as_deref(), Some("GPL-3.0"));
        assert_eq!(parsed.source.as_deref(), Some("https://example.com/list.txt"));
        assert_eq!(parsed.expires_days, Some(2));
    }

    #[test]
    fn meta_is_compacted_in_order() {
        let raw = "{\n  \"zeta\": 1,\n  \"alpha\": { \"b\": [1, 2], \"a\": \"x\" }\n}\n";
        assert_eq!(minimize_meta(raw).unwrap(), r#"{"zeta":1,"alpha":{"b":[1,2],"a":"x"}}"#);
    }

    #[test]
    fn meta_rejects_malformed_json() {
        assert!(matches!(minimize_meta("{ \"a\": "), Err(Error::Parse(_))));
    }
}
