use crate::http::{FetchError, HttpClient};
use crate::runtime::Runtime;
use anyhow::Context;
use log::{info, warn};
use std::path::Path;

/// Streams `url` into `dest`, truncating any existing file.
///
/// If the transfer fails after `dest` was created, the partial file is
/// removed before the error is returned.
#[tracing::instrument(skip(runtime, http_client))]
pub async fn download_file<R: Runtime + ?Sized>(
    runtime: &R,
    url: &str,
    dest: &Path,
    http_client: &HttpClient,
) -> Result<u64, FetchError> {
    info!("Downloading file from {}...", url);

    let result = http_client
        .download_file(url, || {
            runtime
                .create_file(dest)
                .with_context(|| format!("Failed to create file at {:?}", dest))
        })
        .await;

    match result {
        Ok(bytes) => {
            info!("Download complete.");
            Ok(bytes)
        }
        Err(e) => {
            if e.leaves_partial_file() {
                remove_partial_file(runtime, dest);
            }
            Err(e)
        }
    }
}

fn remove_partial_file<R: Runtime + ?Sized>(runtime: &R, dest: &Path) {
    if !runtime.exists(dest) {
        return;
    }
    match runtime.remove_file(dest) {
        Ok(()) => info!("Removed partial download {:?}", dest),
        Err(e) => warn!("Failed to remove partial download {:?}: {:#}", dest, e),
    }
}
