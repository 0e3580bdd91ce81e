//! Failure kinds of a single asset fetch.

use std::fmt;

/// Errors that end a fetch attempt. None of them are retried.
#[derive(Debug)]
pub enum FetchError {
    /// The request could not be sent or returned a non-success status.
    /// Nothing has been written locally.
    Transport { url: String, source: reqwest::Error },
    /// The destination file could not be created.
    Create { source: anyhow::Error },
    /// The response body broke off while streaming.
    Stream { url: String, source: reqwest::Error },
    /// A chunk could not be written or flushed to the destination file.
    Write { source: std::io::Error },
}

impl FetchError {
    /// Whether the destination file may hold a partial download.
    pub fn leaves_partial_file(&self) -> bool {
        matches!(self, FetchError::Stream { .. } | FetchError::Write { .. })
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport { url, source } => match source.status() {
                Some(status) => write!(f, "Download request for {} failed: HTTP {}", url, status),
                None => write!(f, "Download request for {} failed: {}", url, source),
            },
            FetchError::Create { source } => {
                write!(f, "Failed to create destination file: {:#}", source)
            }
            FetchError::Stream { url, source } => {
                write!(f, "Download stream from {} was interrupted: {}", url, source)
            }
            FetchError::Write { source } => {
                write!(f, "Failed to write downloaded data: {}", source)
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport { source, .. } | FetchError::Stream { source, .. } => {
                Some(source)
            }
            FetchError::Create { source } => Some(&**source),
            FetchError::Write { source } => Some(source),
        }
    }
}
