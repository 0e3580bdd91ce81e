//! Platform detection and asset selection module
//!
//! This module describes the (OS, architecture) pair a machine or a release
//! asset targets, and selects which asset of a release to download for a
//! given target.

mod detection;
mod picker;

pub use detection::{Arch, Os, Platform};
pub use picker::{AssetPicker, ExactPlatformPicker};
