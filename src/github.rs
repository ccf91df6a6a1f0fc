//! GitHub collaborator: repository listing and README retrieval.
//!
//! The loader talks to the forge through the [`Forge`] trait so the
//! sequencing and failure-isolation logic can be tested without a network.

use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;

use crate::config::GithubConfig;
use crate::error::LoadError;
use crate::models::RepoSummary;

/// GitHub rejects requests without a User-Agent header.
const USER_AGENT: &str = concat!("repo-assistant/", env!("CARGO_PKG_VERSION"));

#[async_trait]
pub trait Forge: Send + Sync {
    /// List a user's public repositories.
    async fn list_repos(&self, username: &str) -> Result<Vec<RepoSummary>, LoadError>;

    /// Fetch a repository's decoded README text. `Ok(None)` means the
    /// repository has no readable README; that is not an error.
    async fn fetch_readme(&self, username: &str, repo: &str)
        -> Result<Option<String>, LoadError>;
}

/// `GET /repos/{user}/{repo}/contents/README.md` payload. The `content`
/// key is absent for directories and missing files.
#[derive(Debug, Deserialize)]
struct ContentsResponse {
    content: Option<String>,
}

pub struct GithubClient {
    client: reqwest::Client,
    config: GithubConfig,
}

impl GithubClient {
    pub fn new(client: reqwest::Client, config: GithubConfig) -> Self {
        Self { client, config }
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .timeout(std::time::Duration::from_secs(self.config.timeout_secs));
        if let Some(token) = &self.config.token {
            req = req.bearer_auth(token);
        }
        req
    }
}

#[async_trait]
impl Forge for GithubClient {
    async fn list_repos(&self, username: &str) -> Result<Vec<RepoSummary>, LoadError> {
        let url = format!("{}/users/{}/repos", self.config.base_url, username);

        let resp = self
            .get(&url)
            .send()
            .await
            .map_err(|e| LoadError::upstream(None, format!("repo list request failed: {e}")))?;

        match resp.status().as_u16() {
            200..=299 => {}
            404 => return Err(LoadError::UserNotFound(username.to_string())),
            403 | 429 => return Err(LoadError::RateLimited),
            status => {
                let body = resp.text().await.unwrap_or_default();
                return Err(LoadError::upstream(
                    Some(status),
                    format!("repo list returned {status}: {body}"),
                ));
            }
        }

        resp.json::<Vec<RepoSummary>>()
            .await
            .map_err(|e| LoadError::upstream(None, format!("malformed repo list: {e}")))
    }

    async fn fetch_readme(
        &self,
        username: &str,
        repo: &str,
    ) -> Result<Option<String>, LoadError> {
        let url = format!(
            "{}/repos/{}/{}/contents/README.md",
            self.config.base_url, username, repo
        );

        let resp = self
            .get(&url)
            .send()
            .await
            .map_err(|e| LoadError::upstream(None, format!("README request failed: {e}")))?;

        match resp.status().as_u16() {
            200..=299 => {}
            404 => return Ok(None),
            403 | 429 => return Err(LoadError::RateLimited),
            status => {
                return Err(LoadError::upstream(
                    Some(status),
                    format!("README fetch for {repo} returned {status}"),
                ));
            }
        }

        let body: ContentsResponse = resp
            .json()
            .await
            .map_err(|e| LoadError::upstream(None, format!("malformed contents payload: {e}")))?;

        match body.content {
            Some(encoded) => decode_readme(&encoded).map(Some),
            None => Ok(None),
        }
    }
}

/// Decode the base64 content field into UTF-8 text. GitHub wraps the
/// encoding with newlines every 60 characters, so whitespace is stripped
/// before decoding.
fn decode_readme(encoded: &str) -> Result<String, LoadError> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(compact)
        .map_err(|e| LoadError::upstream(None, format!("invalid base64 README content: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| LoadError::upstream(None, format!("README is not valid UTF-8: {e}")))
}
