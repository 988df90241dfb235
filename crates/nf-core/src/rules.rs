//! Per-kind line rules
//!
//! Each file kind is described by a small table: which lines are dropped,
//! how kept lines are rewritten, and what happens to blank lines.

use crate::types::FileKind;

// =============================================================================
// Drop Rules
// =============================================================================

/// A condition under which a line is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropRule {
    /// Line is empty
    Empty,
    /// Line starts with `prefix` but not with `unless`
    PrefixUnless {
        prefix: &'static str,
        unless: &'static str,
    },
    /// Line starts with `prefix`
    Prefix(&'static str),
    /// Line is exactly `word`, or `word` followed by a space
    Word(&'static str),
}

impl DropRule {
    #[inline]
    pub fn matches(self, line: &str) -> bool {
        match self {
            Self::Empty => line.is_empty(),
            Self::PrefixUnless { prefix, unless } => {
                line.starts_with(prefix) && !line.starts_with(unless)
            }
            Self::Prefix(prefix) => line.starts_with(prefix),
            Self::Word(word) => match line.strip_prefix(word) {
                Some(rest) => rest.is_empty() || rest.starts_with(' '),
                None => false,
            },
        }
    }
}

/// Filter lists: `!#` is the preprocessor syntax and survives, every other
/// `!` line is a comment.
pub const FILTER_DROP_RULES: &[DropRule] = &[
    DropRule::Empty,
    DropRule::PrefixUnless { prefix: "!", unless: "!#" },
    DropRule::Prefix("["),
    DropRule::Word("#"),
];

/// Resource files: applied to the raw line, before any trimming.
pub const RESOURCE_DROP_RULES: &[DropRule] = &[DropRule::Prefix("#")];

fn any_matches(rules: &[DropRule], line: &str) -> bool {
    rules.iter().any(|rule| rule.matches(line))
}

// =============================================================================
// Blank Lines
// =============================================================================

/// What happens to blank lines in the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankPolicy {
    Drop,
    /// Runs collapse to one blank line; trailing blanks are removed.
    Collapse,
}

pub fn blank_policy(kind: FileKind) -> BlankPolicy {
    match kind {
        FileKind::Resource => BlankPolicy::Collapse,
        FileKind::Filter | FileKind::Hosts { .. } | FileKind::PublicSuffix => BlankPolicy::Drop,
    }
}

// =============================================================================
// Line Rules
// =============================================================================

/// Result of applying a kind's rule to one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome<'a> {
    Drop,
    Blank,
    Keep(&'a str),
}

pub fn filter_line(line: &str) -> LineOutcome<'_> {
    let line = line.trim();
    if any_matches(FILTER_DROP_RULES, line) {
        LineOutcome::Drop
    } else {
        LineOutcome::Keep(line)
    }
}

/// Resource blocks are multi-line, so leading whitespace is kept.
pub fn resource_line(line: &str) -> LineOutcome<'_> {
    if any_matches(RESOURCE_DROP_RULES, line) {
        LineOutcome::Drop
    } else if line.trim().is_empty() {
        LineOutcome::Blank
    } else {
        LineOutcome::Keep(line.trim_end())
    }
}

pub fn psl_line(line: &str) -> LineOutcome<'_> {
    let line = strip_comment(line, "//").trim();
    if line.is_empty() {
        LineOutcome::Drop
    } else {
        LineOutcome::Keep(line)
    }
}

/// Host tokens that survive comment stripping and the local alias filter.
pub fn hosts_tokens(line: &str) -> impl Iterator<Item = &str> {
    strip_comment(line, "#")
        .split_whitespace()
        .filter(|token| !is_local_alias(token))
}

/// Everything from the first `marker` onward is a comment.
pub fn strip_comment<'a>(line: &'a str, marker: &str) -> &'a str {
    match line.find(marker) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

// =============================================================================
// Local Aliases
// =============================================================================

/// Loopback and broadcast names that hosts files map other hosts onto.
const LOCAL_ALIASES: &[&str] = &[
    "0.0.0.0",
    "127.0.0.1",
    "broadcasthost",
    "localhost",
    "local",
    "0",
    "::",
    "::1",
    "fe80::1%lo0",
];

/// Check whether a hosts token is a local alias rather than a host to block.
pub fn is_local_alias(token: &str) -> bool {
    if LOCAL_ALIASES.contains(&token) {
        return true;
    }

    // ip6-localhost, ip6-allnodes, ...
    match token.strip_prefix("ip6-") {
        Some(rest) => !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_drop_rules() {
        assert_eq!(filter_line("! Bad line"), LineOutcome::Drop);
        assert_eq!(filter_line("!"), LineOutcome::Drop);
        assert_eq!(filter_line("[Adblock Plus 2.0]"), LineOutcome::Drop);
        assert_eq!(filter_line("#"), LineOutcome::Drop);
        assert_eq!(filter_line("# comment"), LineOutcome::Drop);
        assert_eq!(filter_line("   "), LineOutcome::Drop);
    }

    #[test]
    fn test_filter_keeps_rules() {
        assert_eq!(filter_line("!#include foo.txt"), LineOutcome::Keep("!#include foo.txt"));
        assert_eq!(filter_line("  ||ads.example.com^  "), LineOutcome::Keep("||ads.example.com^"));
        assert_eq!(filter_line("##.banner"), LineOutcome::Keep("##.banner"));
        assert_eq!(filter_line("#@#.ad"), LineOutcome::Keep("#@#.ad"));
    }

    #[test]
    fn test_resource_line() {
        assert_eq!(resource_line("# comment"), LineOutcome::Drop);
        assert_eq!(resource_line("#in-block"), LineOutcome::Drop);
        assert_eq!(resource_line("  # indented"), LineOutcome::Keep("  # indented"));
        assert_eq!(resource_line(" \t "), LineOutcome::Blank);
        assert_eq!(resource_line("    var x = 1;   "), LineOutcome::Keep("    var x = 1;"));
    }

    #[test]
    fn test_psl_line() {
        assert_eq!(psl_line("example.com // comment"), LineOutcome::Keep("example.com"));
        assert_eq!(psl_line("// ===BEGIN ICANN DOMAINS==="), LineOutcome::Drop);
        assert_eq!(psl_line("*.ck"), LineOutcome::Keep("*.ck"));
        assert_eq!(psl_line("!www.ck"), LineOutcome::Keep("!www.ck"));
    }

    #[test]
    fn test_hosts_tokens() {
        let tokens: Vec<_> = hosts_tokens("0.0.0.0 ads.example.com tracker.example.com # note").collect();
        assert_eq!(tokens, vec!["ads.example.com", "tracker.example.com"]);

        let tokens: Vec<_> = hosts_tokens("# only a comment").collect();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_local_aliases() {
        for alias in ["0.0.0.0", "127.0.0.1", "localhost", "broadcasthost", "local", "0", "::", "::1", "fe80::1%lo0"] {
            assert!(is_local_alias(alias), "{alias}");
        }
        assert!(is_local_alias("ip6-localhost"));
        assert!(is_local_alias("ip6-allnodes"));
        assert!(!is_local_alias("ip6-"));
        assert!(!is_local_alias("ip6-foo.example.com"));
        assert!(!is_local_alias("ip6-café"));
        assert!(!is_local_alias("ip6-١"));
        assert!(!is_local_alias("localhost.example.com"));
    }
}
