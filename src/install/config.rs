use anyhow::Result;
use reqwest::Client;

use crate::{
    github::{GetReleases, GitHub, GitHubRepo},
    http::HttpClient,
    runtime::Runtime,
};

pub const DEFAULT_REPO: &str = "minekube/gate";
pub const USER_AGENT: &str = "gatefetch-cli";

pub struct Config<R: Runtime, G: GetReleases> {
    pub runtime: R,
    pub github: G,
    pub http_client: HttpClient,
    pub repo: GitHubRepo,
}

impl<R: Runtime> Config<R, GitHub> {
    pub fn new(runtime: R, repo: GitHubRepo, api_url: Option<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        let http_client = HttpClient::new(client);
        let github = GitHub::new(http_client.clone(), api_url);

        Ok(Self {
            runtime,
            github,
            http_client,
            repo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_config_sends_user_agent() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .match_header("user-agent", Matcher::Exact(USER_AGENT.to_string()))
            .match_header("authorization", Matcher::Missing)
            .create_async()
            .await;

        let config = Config::new(MockRuntime::new(), DEFAULT_REPO.parse().unwrap(), None).unwrap();
        let _ = config.http_client.inner().get(server.url()).send().await;

        mock.assert_async().await;
    }

    #[test]
    fn test_config_api_url() {
        let config = Config::new(
            MockRuntime::new(),
            DEFAULT_REPO.parse().unwrap(),
            Some("http://localhost:8080".to_string()),
        )
        .unwrap();

        assert_eq!(config.github.api_url(), "http://localhost:8080");
        assert_eq!(config.repo.to_string(), "minekube/gate");
    }
}
