//! Release catalog: the normalized view of a project's releases.
//!
//! Upstream releases are reduced to their version and the assets that carry
//! a recognizable OS token. Releases left without any such asset are dropped,
//! and the upstream order (newest first) is preserved.

use log::{debug, warn};
use std::ffi::OsStr;
use std::path::Path;

use crate::github::{GetReleases, GitHubRepo, Release, ReleaseAsset};
use crate::platform::{Arch, Os};

/// A downloadable asset tagged with the platform its file name targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDescriptor {
    /// Always `Windows` or `Linux` for assets in a [`Catalog`].
    pub os: Os,
    pub arch: Arch,
    pub download_url: String,
    pub filename: String,
}

impl AssetDescriptor {
    /// Tags an upstream asset by its name. Returns `None` when the name
    /// names no known OS, or is not a plain file name (separators, `..`,
    /// absolute paths) and so could not be saved inside the destination.
    pub fn from_asset(asset: &ReleaseAsset) -> Option<Self> {
        if Path::new(&asset.name).file_name() != Some(OsStr::new(&asset.name)) {
            warn!("Ignoring asset with unsafe file name {:?}", asset.name);
            return None;
        }

        let os = Os::from_filename(&asset.name);
        if os == Os::Unknown {
            return None;
        }

        Some(Self {
            os,
            arch: Arch::from_filename(&asset.name),
            download_url: asset.browser_download_url.clone(),
            filename: asset.name.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseEntry {
    /// Tag name without its leading `v`.
    pub version: String,
    pub downloads: Vec<AssetDescriptor>,
}

impl ReleaseEntry {
    pub fn from_release(release: &Release) -> Option<Self> {
        let downloads: Vec<_> = release
            .assets
            .iter()
            .filter_map(AssetDescriptor::from_asset)
            .collect();

        if downloads.is_empty() {
            debug!("Skipping release {}: no OS-tagged assets", release.tag_name);
            return None;
        }

        let version = release
            .tag_name
            .strip_prefix('v')
            .unwrap_or(&release.tag_name)
            .to_string();

        Some(Self { version, downloads })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    releases: Vec<ReleaseEntry>,
}

impl Catalog {
    pub fn build(releases: &[Release]) -> Self {
        Self {
            releases: releases
                .iter()
                .filter_map(ReleaseEntry::from_release)
                .collect(),
        }
    }

    /// Lists the releases of `repo` and builds a catalog from them.
    ///
    /// An unreachable or unparsable listing yields an empty catalog; the
    /// failure is only logged.
    #[tracing::instrument(skip(github))]
    pub async fn load<G: GetReleases + ?Sized>(github: &G, repo: &GitHubRepo) -> Self {
        match github.get_releases(repo).await {
            Ok(releases) => {
                let catalog = Self::build(&releases);
                debug!(
                    "Catalog for {}: {} of {} releases usable",
                    repo,
                    catalog.len(),
                    releases.len()
                );
                catalog
            }
            Err(e) => {
                warn!("Release listing for {} unavailable: {:#}", repo, e);
                Self::default()
            }
        }
    }

    /// The newest release.
    pub fn latest(&self) -> Option<&ReleaseEntry> {
        self.releases.first()
    }

    pub fn releases(&self) -> &[ReleaseEntry] {
        &self.releases
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}
