use super::PageFetcher;
use crate::core::config::ItConfig;
use crate::core::error::VerifyError;
use crate::types::{PageRequest, PageResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Longest response excerpt carried by an `UnexpectedStatus` error.
const BODY_EXCERPT_CHARS: usize = 2000;

/// Authenticated client for an AEM author instance.
#[derive(Clone)]
pub struct SlingClient {
    client: Client,
    base: Url,
    username: String,
    password: String,
}

impl std::fmt::Debug for SlingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlingClient")
            .field("base", &self.base.as_str())
            .field("username", &self.username)
            .finish()
    }
}

impl SlingClient {
    pub fn new(
        base_url: &str,
        username: impl Into<String>,
        password: impl Into<String>,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, VerifyError> {
        let mut base = Url::parse(base_url).map_err(|e| VerifyError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(VerifyError::InvalidUrl {
                url: base_url.to_string(),
                reason: "scheme must be http or https".to_string(),
            });
        }
        // Request paths are joined relative to the base, so it must end in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| VerifyError::Transport {
                url: base_url.to_string(),
                source: e,
            })?;

        Ok(Self {
            client,
            base,
            username: username.into(),
            password: password.into(),
        })
    }

    pub fn from_config(config: &ItConfig) -> Result<Self, VerifyError> {
        Self::new(
            &config.resolve_base_url(),
            config.resolve_username(),
            config.resolve_password(),
            config.resolve_timeout(),
            config.resolve_connect_timeout(),
        )
    }

    /// Absolute URL for a request: path appended under the base path, params in order.
    pub fn url_for(&self, request: &PageRequest) -> Result<Url, VerifyError> {
        let mut url = self
            .base
            .join(request.path.trim_start_matches('/'))
            .map_err(|e| VerifyError::InvalidUrl {
                url: format!("{}{}", self.base, request.path),
                reason: e.to_string(),
            })?;
        if !request.params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &request.params {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }
}

fn excerpt(body: &str) -> String {
    if body.chars().count() <= BODY_EXCERPT_CHARS {
        return body.to_string();
    }
    let mut out: String = body.chars().take(BODY_EXCERPT_CHARS).collect();
    out.push_str("\n[... truncated]");
    out
}

#[async_trait]
impl PageFetcher for SlingClient {
    async fn get(&self, request: &PageRequest) -> Result<PageResponse, VerifyError> {
        let url = self.url_for(request)?;
        let url_str = url.to_string();
        info!("GET {} (expecting {})", url_str, request.expected_status);

        let response = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| VerifyError::Transport {
                url: url_str.clone(),
                source: e,
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| VerifyError::Transport {
            url: url_str.clone(),
            source: e,
        })?;
        debug!("{} answered {} with {} bytes", url_str, status, body.len());

        if status != request.expected_status {
            return Err(VerifyError::UnexpectedStatus {
                url: url_str,
                expected: request.expected_status,
                actual: status,
                body: excerpt(&body),
            });
        }

        Ok(PageResponse {
            url: url_str,
            status,
            body,
        })
    }

    fn base_url(&self) -> String {
        self.base.as_str().trim_end_matches('/').to_string()
    }
}
