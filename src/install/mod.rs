//! Select the newest matching asset and fetch it.

mod config;

use anyhow::Result;
use log::info;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::{
    catalog::Catalog,
    download::download_file,
    github::GetReleases,
    http::{FetchError, HttpClient},
    platform::{AssetPicker, ExactPlatformPicker, Platform},
    runtime::Runtime,
};

pub use config::{Config, DEFAULT_REPO, USER_AGENT};

/// What an install run did, short of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Installed {
        version: String,
        filename: String,
        path: PathBuf,
        bytes: u64,
    },
    /// The catalog was empty.
    NothingToInstall,
    /// The newest release has no asset for the requested platform.
    NoMatchingAsset { version: String, platform: Platform },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Installed {
                version,
                filename,
                bytes,
                ..
            } => write!(
                f,
                "Download complete: {} (version {}, {} bytes)",
                filename, version, bytes
            ),
            Outcome::NothingToInstall => {
                write!(f, "No releases with downloadable assets found, nothing to install")
            }
            Outcome::NoMatchingAsset { version, platform } => write!(
                f,
                "No asset found for OS: {} and architecture: {} in version {}",
                platform.os, platform.arch, version
            ),
        }
    }
}

/// Picks the asset of the newest release that matches `target` exactly and
/// streams it into `dest_dir`.
///
/// Older releases are never considered.
#[tracing::instrument(skip(runtime, http_client, catalog))]
pub async fn select_and_fetch<R: Runtime + ?Sized>(
    runtime: &R,
    http_client: &HttpClient,
    catalog: &Catalog,
    target: Platform,
    dest_dir: &Path,
) -> Result<Outcome, FetchError> {
    let Some(release) = catalog.latest() else {
        info!("Catalog is empty, nothing to install");
        return Ok(Outcome::NothingToInstall);
    };

    let picker = ExactPlatformPicker::new(target);
    let Some(asset) = picker.pick(&release.downloads) else {
        info!(
            "Release {} has no asset for {}, skipping",
            release.version, target
        );
        return Ok(Outcome::NoMatchingAsset {
            version: release.version.clone(),
            platform: target,
        });
    };

    info!("Downloading: {}", asset.filename);
    let path = dest_dir.join(&asset.filename);
    let bytes = download_file(runtime, &asset.download_url, &path, http_client).await?;

    Ok(Outcome::Installed {
        version: release.version.clone(),
        filename: asset.filename.clone(),
        path,
        bytes,
    })
}

/// Lists the configured repository's releases and installs the newest asset
/// for `target` into `dest_dir` (the working directory when `None`).
#[tracing::instrument(skip(config))]
pub async fn install<R: Runtime, G: GetReleases>(
    config: &Config<R, G>,
    target: Platform,
    dest_dir: Option<PathBuf>,
) -> Result<Outcome> {
    let dest_dir = match dest_dir {
        Some(dir) => dir,
        None => config.runtime.current_dir()?,
    };

    let catalog = Catalog::load(&config.github, &config.repo).await;
    let outcome = select_and_fetch(
        &config.runtime,
        &config.http_client,
        &catalog,
        target,
        &dest_dir,
    )
    .await?;

    Ok(outcome)
}

/// Builds the catalog of the configured repository.
pub async fn list<R: Runtime, G: GetReleases>(config: &Config<R, G>) -> Catalog {
    Catalog::load(&config.github, &config.repo).await
}
