//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over the file system the
//! downloader writes into, enabling dependency injection and testability.

mod fs;

use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    fn current_dir(&self) -> Result<PathBuf>;

    /// Create (or truncate) a file for streamed writing.
    fn create_file(&self, path: &Path) -> Result<Box<dyn Write + Send>>;
    fn remove_file(&self, path: &Path) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn current_dir(&self) -> Result<PathBuf> {
        self.current_dir_impl()
    }

    fn create_file(&self, path: &Path) -> Result<Box<dyn Write + Send>> {
        self.create_file_impl(path)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        self.remove_file_impl(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }
}
