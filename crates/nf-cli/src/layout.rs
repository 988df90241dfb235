//! Repository directory layout
//!
//! Hand-maintained sources and downloads live beside their minimized output.

use std::path::{Path, PathBuf};

/// On-disk layout of the filters repository.
#[derive(Debug, Clone)]
pub struct BuildLayout {
    root: PathBuf,
}

impl BuildLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Hand-maintained Nano lists.
    pub fn nano_source_dir(&self) -> PathBuf {
        self.root.join("NanoFiltersSource")
    }

    /// Built Nano lists.
    pub fn nano_output_dir(&self) -> PathBuf {
        self.root.join("NanoFilters")
    }

    /// Downloaded third-party lists, as fetched.
    pub fn third_party_dir(&self) -> PathBuf {
        self.root.join("ThirdParty")
    }

    pub fn third_party_output_dir(&self) -> PathBuf {
        self.third_party_dir().join("Minimized")
    }
}
