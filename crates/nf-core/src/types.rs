//! Shared type definitions
//!
//! File kinds select the rule table and comment syntax used by the
//! minimizer; header metadata is rendered once at the top of every output.

use chrono::{DateTime, Utc};

// =============================================================================
// File Kinds
// =============================================================================

/// The format of a document being minimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Adblock Plus compatible filter list
    Filter,
    /// Hosts file; `block_syntax` wraps each host as `||host^`
    Hosts { block_syntax: bool },
    /// Resource file (multi-line scriptlet/redirect blocks)
    Resource,
    /// Public Suffix List
    PublicSuffix,
}

impl FileKind {
    /// Comment prefix used for header lines.
    pub fn comment_prefix(self) -> &'static str {
        match self {
            Self::Filter | Self::Hosts { .. } => "!",
            Self::Resource => "#",
            Self::PublicSuffix => "//",
        }
    }

    /// Whether the header carries the list marker and title line.
    pub fn has_title(self) -> bool {
        matches!(self, Self::Filter | Self::Hosts { .. })
    }

    /// Whether the header carries the "do not modify" warning pair.
    pub fn has_warning(self) -> bool {
        !matches!(self, Self::PublicSuffix)
    }

    /// Update interval every caller in the build uses for this kind.
    pub fn default_expires_days(self) -> u32 {
        match self {
            Self::Filter | Self::Hosts { .. } => 1,
            Self::Resource => 3,
            Self::PublicSuffix => 7,
        }
    }

    /// Parse a kind name as used on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "filter" => Some(Self::Filter),
            "hosts" => Some(Self::Hosts { block_syntax: true }),
            "hosts-plain" => Some(Self::Hosts { block_syntax: false }),
            "resource" => Some(Self::Resource),
            "psl" | "public-suffix" => Some(Self::PublicSuffix),
            _ => None,
        }
    }
}

// =============================================================================
// Header Metadata
// =============================================================================

/// Provenance data rendered as the header of an output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMetadata {
    pub title: Option<String>,
    pub license: String,
    pub source_url: String,
    pub expires_days: u32,
    /// Omitted for deterministic builds.
    pub generated_at: Option<DateTime<Utc>>,
}

impl HeaderMetadata {
    /// Metadata with the conventional expiry for `kind` and no timestamp.
    pub fn new(kind: FileKind, license: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            title: None,
            license: license.into(),
            source_url: source_url.into(),
            expires_days: kind.default_expires_days(),
            generated_at: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_expires_days(mut self, days: u32) -> Self {
        self.expires_days = days;
        self
    }

    pub fn generated_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.generated_at = at;
        self
    }
}
