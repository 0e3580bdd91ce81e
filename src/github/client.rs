use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use crate::http::HttpClient;

use super::repo::GitHubRepo;
use super::types::Release;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetReleases: Send + Sync {
    /// Fetch the first page of releases, newest first.
    async fn get_releases(&self, repo: &GitHubRepo) -> Result<Vec<Release>>;
    fn api_url(&self) -> &str;
}

pub struct GitHub {
    pub http_client: HttpClient,
    pub api_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(http_client, api_url))]
    pub fn new(http_client: HttpClient, api_url: Option<String>) -> Self {
        let api_url = api_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            http_client,
            api_url,
        }
    }

    pub fn releases_url(&self, repo: &GitHubRepo) -> String {
        format!("{}/repos/{}/{}/releases", self.api_url, repo.owner, repo.repo)
    }
}

#[async_trait]
impl GetReleases for GitHub {
    #[tracing::instrument(skip(self, repo))]
    async fn get_releases(&self, repo: &GitHubRepo) -> Result<Vec<Release>> {
        let url = self.releases_url(repo);
        debug!("Fetching releases of {} from {}...", repo, url);
        self.http_client.get_json(&url).await
    }

    fn api_url(&self) -> &str {
        &self.api_url
    }
}
