//! Thin HTTP client for JSON listings and streamed downloads.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::io::Write;

use super::error::FetchError;

/// HTTP client shared by the release listing and the asset download.
///
/// Requests are made exactly once; any timeout policy belongs to the wrapped
/// reqwest `Client`.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Performs a GET request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET JSON from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        let response = response
            .error_for_status()
            .context("Request returned an error status")?;

        response
            .json::<T>()
            .await
            .context("Failed to parse JSON response")
    }

    /// Streams the body at `url` into the writer returned by `create_writer`.
    ///
    /// The writer is only created once the response status has been
    /// accepted, so a failed request never touches the destination. Chunks
    /// are written in arrival order; the writer is flushed and dropped before
    /// the byte count is returned.
    #[tracing::instrument(skip(self, create_writer))]
    pub async fn download_file<W, F>(&self, url: &str, create_writer: F) -> Result<u64, FetchError>
    where
        W: Write,
        F: FnOnce() -> Result<W>,
    {
        debug!("Downloading file from {}...", url);

        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let mut writer = create_writer().map_err(|source| FetchError::Create { source })?;
        let mut downloaded_bytes: u64 = 0;

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|source| FetchError::Stream {
                url: url.to_string(),
                source,
            })?
        {
            writer
                .write_all(&chunk)
                .map_err(|source| FetchError::Write { source })?;
            downloaded_bytes += chunk.len() as u64;
        }

        writer
            .flush()
            .map_err(|source| FetchError::Write { source })?;
        drop(writer);

        debug!(
            "Downloaded {:.2} MB",
            downloaded_bytes as f64 / (1024.0 * 1024.0)
        );

        Ok(downloaded_bytes)
    }
}
