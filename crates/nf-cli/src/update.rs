//! Third-party list download
//!
//! Lists are fetched one after another with a pause in between, validated,
//! and only then written to `ThirdParty/`.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use nf_core::validate_download;
use nf_fetch::{build_client, fetch_to, Client};
use serde::{Deserialize, Serialize};

use crate::layout::BuildLayout;
use crate::lists::THIRD_PARTY_LISTS;

const USER_AGENT: &str = concat!("nf-cli/", env!("CARGO_PKG_VERSION"));

/// One entry of the download table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// File name under `ThirdParty/`.
    pub name: String,
    pub url: String,
}

pub struct UpdateOptions {
    pub root: PathBuf,
    pub sources: Option<PathBuf>,
    pub delay: Duration,
}

pub fn default_sources() -> Vec<Source> {
    THIRD_PARTY_LISTS
        .iter()
        .map(|list| Source {
            name: list.name.to_string(),
            url: list.url.to_string(),
        })
        .collect()
}

/// Read a JSON array of `{ "name", "url" }` objects.
pub fn load_sources(path: &Path) -> Result<Vec<Source>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;
    let sources: Vec<Source> = serde_json::from_str(&content)
        .map_err(|e| format!("Invalid sources file '{}': {}", path.display(), e))?;

    for source in &sources {
        if !is_plain_file_name(&source.name) {
            return Err(format!("Invalid source name '{}': must be a plain file name", source.name));
        }
    }

    Ok(sources)
}

fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

pub fn run_update(opts: UpdateOptions) -> Result<(), String> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| format!("Failed to start tokio runtime: {}", e))?;
    runtime.block_on(run_update_async(opts))
}

async fn run_update_async(opts: UpdateOptions) -> Result<(), String> {
    let sources = match &opts.sources {
        Some(path) => load_sources(path)?,
        None => default_sources(),
    };

    let layout = BuildLayout::new(&opts.root);
    let out_dir = layout.third_party_dir();
    tokio::fs::create_dir_all(&out_dir)
        .await
        .map_err(|e| format!("Failed to create '{}': {}", out_dir.display(), e))?;

    let client = build_client(USER_AGENT, None)
        .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

    let done = download_all(&client, &sources, &out_dir, opts.delay).await?;
    log::info!("Downloaded {} list(s)", done);
    Ok(())
}

/// Download every source into `out_dir`, stopping at the first failure.
///
/// A file is only replaced once its new content has passed validation.
async fn download_all(
    client: &Client,
    sources: &[Source],
    out_dir: &Path,
    delay: Duration,
) -> Result<usize, String> {
    for (i, source) in sources.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(delay).await;
        }

        let path = out_dir.join(&source.name);
        log::info!("Downloading {} to {} ...", source.url, path.display());

        let bytes = fetch_to(client, &source.url, Vec::new())
            .await
            .map_err(|e| format!("Failed to download '{}': {}", source.url, e))?;
        validate_download(&source.name, &bytes).map_err(|e| e.to_string())?;

        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| format!("Failed to write '{}': {}", path.display(), e))?;
    }

    Ok(sources.len())
}
