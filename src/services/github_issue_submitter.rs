use std::env;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use crate::config::constants::GITHUB_API_VERSION;
use crate::enums::issue_submitter_error::IssueSubmitterError;
use crate::helpers::retry_helper::RetryHelper;
use crate::logger::issue_preview_logger::IssuePreviewLogger;
use crate::structs::config::github_config::GithubConfig;
use crate::traits::issue_submitter::IssueSubmitter;

pub const RETRY_ATTEMPT_HEADER: &str = "x-retry-attempt";

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    pub number: u64,
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedComment {
    pub id: u64,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Clone)]
pub struct GithubIssueSubmitter {
    config: GithubConfig,
    token: Option<String>,
}

impl GithubIssueSubmitter {
    pub fn new(config: GithubConfig, token: Option<String>) -> Self {
        Self { config, token }
    }

    /// Reads the token from the configured environment variable; it is only required when posting.
    pub fn from_env(config: GithubConfig) -> Self {
        let token = env::var(&config.token_env).ok().filter(|t| !t.trim().is_empty());
        Self::new(config, token)
    }

    fn api_base(&self) -> &str {
        self.config.api_base.trim_end_matches('/')
    }

    fn build_client(&self) -> Result<Client, IssueSubmitterError> {
        let token = self.token.as_deref().ok_or_else(|| {
            IssueSubmitterError::AuthenticationError(format!(
                "environment variable {} is not set",
                self.config.token_env
            ))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(GITHUB_API_VERSION));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.config.user_agent)
                .map_err(|e| IssueSubmitterError::AuthenticationError(format!("invalid user agent: {}", e)))?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token.trim()))
                .map_err(|e| IssueSubmitterError::AuthenticationError(format!("invalid authorization header: {}", e)))?,
        );

        Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(self.config.request_timeout_ms.max(1)))
            .build()
            .map_err(|e| IssueSubmitterError::NetworkError {
                operation: "client setup".to_string(),
                url: self.api_base().to_string(),
                reason: e.to_string(),
            })
    }

    async fn open_issue(&self, client: &Client, title: &str, body: &str) -> Result<CreatedIssue, IssueSubmitterError> {
        let url = format!("{}/repos/{}/{}/issues", self.api_base(), self.config.owner, self.config.repo);
        let payload = json!({ "title": title, "body": body });
        self.request_json("create issue", &url, || client.post(&url).json(&payload)).await
    }

    async fn add_comment(&self, client: &Client, issue_number: u64, body: &str) -> Result<CreatedComment, IssueSubmitterError> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_base(), self.config.owner, self.config.repo, issue_number
        );
        let payload = json!({ "body": body });
        self.request_json("create issue comment", &url, || client.post(&url).json(&payload)).await
    }

    async fn close_issue(&self, client: &Client, issue_number: u64) -> Result<serde_json::Value, IssueSubmitterError> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}",
            self.api_base(), self.config.owner, self.config.repo, issue_number
        );
        let payload = json!({ "state": "closed" });
        self.request_json("close issue", &url, || client.patch(&url).json(&payload)).await
    }

    async fn request_json<T, F>(&self, operation: &str, url: &str, mut request_builder: F) -> Result<T, IssueSubmitterError>
    where
        T: DeserializeOwned,
        F: FnMut() -> reqwest::RequestBuilder,
    {
        let max_attempts = self.config.retry_max_attempts.max(1);
        let mut attempt = 0_usize;
        loop {
            attempt = attempt.saturating_add(1);
            let response = request_builder()
                .header(RETRY_ATTEMPT_HEADER, attempt.saturating_sub(1).to_string())
                .send()
                .await;

            match response {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response.json::<T>().await.map_err(|e| IssueSubmitterError::SerializationError {
                            operation: operation.to_string(),
                            reason: e.to_string(),
                        });
                    }

                    let retry_after = RetryHelper::parse_retry_after(response.headers());
                    let body = response.text().await.unwrap_or_default();
                    if attempt < max_attempts && RetryHelper::is_retryable_status(status.as_u16()) {
                        log::warn!("⚠️ GitHub {} returned {}, retrying (attempt {} of {})", operation, status.as_u16(), attempt + 1, max_attempts);
                        tokio::time::sleep(RetryHelper::retry_delay(self.config.retry_base_delay_ms, attempt, retry_after)).await;
                        continue;
                    }

                    return Err(IssueSubmitterError::ApiError {
                        operation: operation.to_string(),
                        url: url.to_string(),
                        status: status.as_u16(),
                        body: RetryHelper::truncate_for_error(&body, 800),
                    });
                }
                Err(error) => {
                    if attempt < max_attempts && RetryHelper::is_retryable_transport_error(&error) {
                        log::warn!("⚠️ GitHub {} request failed ({}), retrying", operation, error);
                        tokio::time::sleep(RetryHelper::retry_delay(self.config.retry_base_delay_ms, attempt, None)).await;
                        continue;
                    }
                    return Err(IssueSubmitterError::NetworkError {
                        operation: operation.to_string(),
                        url: url.to_string(),
                        reason: error.to_string(),
                    });
                }
            }
        }
    }
}

#[async_trait]
impl IssueSubmitter for GithubIssueSubmitter {
    async fn create_issue(
        &self,
        post_result: bool,
        title: &str,
        body_chunks: &[String],
        saw_new_errors: bool,
    ) -> Result<Option<String>, IssueSubmitterError> {
        let (body, comments) = body_chunks.split_first().ok_or(IssueSubmitterError::EmptyBody)?;

        if !post_result {
            IssuePreviewLogger::print_issue_preview(&self.config.owner, &self.config.repo, title, body_chunks);
            return Ok(None);
        }

        let client = self.build_client()?;

        log::info!("📝 Creating a summary issue in {}/{}", self.config.owner, self.config.repo);
        let created = self.open_issue(&client, title, body).await?;
        log::info!("✅ Created issue #{}: {}", created.number, created.html_url);

        for (index, comment) in comments.iter().enumerate() {
            let posted = self.add_comment(&client, created.number, comment).await?;
            log::info!(
                "💬 Posted comment {} of {} (id {}){}",
                index + 1,
                comments.len(),
                posted.id,
                posted.html_url.map(|url| format!(": {}", url)).unwrap_or_default()
            );
        }

        if !saw_new_errors {
            self.close_issue(&client, created.number).await?;
            log::info!("🔒 Closed issue #{}: no new errors were reported", created.number);
        }

        Ok(Some(created.html_url))
    }
}
