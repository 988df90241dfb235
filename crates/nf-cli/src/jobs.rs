//! Minimize jobs
//!
//! Each job reads one input file and writes one output file. Jobs share
//! nothing, so a run spawns all of them and waits for every one to finish.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use nf_core::{check_includes, minimize, minimize_meta, FileKind, HeaderMetadata};
use tokio::task::JoinSet;

use crate::layout::BuildLayout;
use crate::lists::{ASSETS_MANIFEST, NANO_LICENSE, NANO_LISTS, NANO_SOURCE_PREFIX, THIRD_PARTY_LISTS};

#[derive(Debug, Clone)]
pub enum Transform {
    Minimize {
        kind: FileKind,
        meta: HeaderMetadata,
        /// Resolve `!#include` targets against the input's directory first.
        check_includes: bool,
    },
    /// Compact JSON pass-through.
    Meta,
}

#[derive(Debug, Clone)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    pub transform: Transform,
}

/// Which job sets a run includes.
#[derive(Debug, Clone, Copy, Default)]
pub struct JobSelection {
    /// Skip third-party lists.
    pub nano_only: bool,
    /// Also build the PSL and the asset manifest.
    pub all: bool,
}

/// Build the job table for a run.
pub fn build_jobs(
    layout: &BuildLayout,
    selection: JobSelection,
    generated_at: Option<DateTime<Utc>>,
) -> Vec<Job> {
    let mut jobs = Vec::new();

    let src_dir = layout.nano_source_dir();
    let out_dir = layout.nano_output_dir();
    for list in NANO_LISTS {
        let mut meta = HeaderMetadata::new(
            list.kind,
            NANO_LICENSE,
            format!("{}{}", NANO_SOURCE_PREFIX, list.name),
        )
        .generated_at(generated_at);
        meta.title = list.title.map(str::to_string);

        jobs.push(Job {
            input: src_dir.join(list.name),
            output: out_dir.join(list.name),
            transform: Transform::Minimize {
                kind: list.kind,
                meta,
                check_includes: list.kind == FileKind::Filter,
            },
        });
    }

    if selection.all {
        jobs.push(Job {
            input: src_dir.join(ASSETS_MANIFEST),
            output: out_dir.join(ASSETS_MANIFEST),
            transform: Transform::Meta,
        });
    }

    if selection.nano_only {
        return jobs;
    }

    let src_dir = layout.third_party_dir();
    let out_dir = layout.third_party_output_dir();
    for list in THIRD_PARTY_LISTS {
        if list.extra && !selection.all {
            continue;
        }

        let mut meta = HeaderMetadata::new(list.kind, list.license, list.url).generated_at(generated_at);
        meta.title = list.title.map(str::to_string);

        // Upstream includes point at files the mirror does not fetch.
        jobs.push(Job {
            input: src_dir.join(list.name),
            output: out_dir.join(list.name),
            transform: Transform::Minimize {
                kind: list.kind,
                meta,
                check_includes: false,
            },
        });
    }

    jobs
}

/// Run every job concurrently.
///
/// All jobs run to completion; if any failed, the first failure is returned.
pub async fn run_jobs(jobs: Vec<Job>) -> Result<usize, String> {
    let mut set = JoinSet::new();
    for job in jobs {
        set.spawn(run_job(job));
    }

    let mut done = 0usize;
    let mut first_error = None;
    while let Some(joined) = set.join_next().await {
        let result = joined
            .map_err(|e| format!("Job did not complete: {}", e))
            .and_then(|r| r);
        match result {
            Ok(()) => done += 1,
            Err(e) => {
                log::error!("{}", e);
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(done),
    }
}

async fn run_job(job: Job) -> Result<(), String> {
    let raw = tokio::fs::read_to_string(&job.input)
        .await
        .map_err(|e| format!("Failed to read '{}': {}", job.input.display(), e))?;

    let out = match &job.transform {
        Transform::Minimize {
            kind,
            meta,
            check_includes: checked,
        } => {
            if *checked {
                let base = job.input.parent().unwrap_or_else(|| Path::new("."));
                check_includes(&raw, base)
                    .map_err(|e| format!("'{}': {}", job.input.display(), e))?;
            }
            minimize(&raw, *kind, meta)
        }
        Transform::Meta => minimize_meta(&raw)
            .map_err(|e| format!("'{}': {}", job.input.display(), e))?,
    };

    if let Some(parent) = job.output.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| format!("Failed to create '{}': {}", parent.display(), e))?;
    }
    tokio::fs::write(&job.output, out)
        .await
        .map_err(|e| format!("Failed to write '{}': {}", job.output.display(), e))?;

    log::info!("Built {}", job.output.display());
    Ok(())
}
