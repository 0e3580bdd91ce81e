use crate::catalog::AssetDescriptor;

use super::{Arch, Platform};

/// Trait for selecting an asset from a release's downloads
pub trait AssetPicker: Send + Sync {
    /// Pick the most appropriate asset from the given list
    ///
    /// Returns `None` if no suitable asset is found
    fn pick<'a>(&self, downloads: &'a [AssetDescriptor]) -> Option<&'a AssetDescriptor>;
}

/// Picks the first asset whose OS and architecture both equal the target's.
///
/// There is no fallback. Assets tagged `Arch::Unknown` are skipped even when
/// the target architecture is itself unknown, since their name only tells us
/// no recognized architecture was found, not that it is the target's.
pub struct ExactPlatformPicker {
    platform: Platform,
}

impl ExactPlatformPicker {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl AssetPicker for ExactPlatformPicker {
    fn pick<'a>(&self, downloads: &'a [AssetDescriptor]) -> Option<&'a AssetDescriptor> {
        downloads
            .iter()
            .filter(|d| d.arch != Arch::Unknown)
            .find(|d| d.os == self.platform.os && d.arch == self.platform.arch)
    }
}
