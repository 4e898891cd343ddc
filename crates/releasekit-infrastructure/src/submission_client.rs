// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use async_trait::async_trait;
use releasekit_application::{ServiceError, SubmissionService};
use releasekit_config::SubmissionConfig;
use releasekit_domain::{Release, SubmissionId};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

const USER_AGENT: &str = concat!("releasekit/", env!("CARGO_PKG_VERSION"));

/// Distributors name the id differently; any one of these keys is accepted.
#[derive(Debug, Deserialize)]
struct SubmissionResponse {
    id: Option<String>,
    #[serde(rename = "submissionId")]
    submission_id_camel: Option<String>,
    submission_id: Option<String>,
}

impl SubmissionResponse {
    fn into_id(self) -> Option<String> {
        self.id
            .or(self.submission_id_camel)
            .or(self.submission_id)
            .filter(|id| !id.trim().is_empty())
    }
}

/// Posts the release as JSON to the distributor's submission endpoint.
#[derive(Debug, Clone)]
pub struct HttpSubmissionService {
    client: Client,
    endpoint: String,
    api_token: Option<String>,
}

impl HttpSubmissionService {
    pub fn new(endpoint: impl Into<String>, api_token: Option<String>, timeout: Duration) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Request(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_token,
        })
    }

    pub fn from_config(config: &SubmissionConfig) -> Result<Self, ServiceError> {
        let endpoint = config
            .endpoint
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .ok_or(ServiceError::NotConfigured)?;
        Self::new(
            endpoint,
            config.api_token.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }
}

#[async_trait]
impl SubmissionService for HttpSubmissionService {
    async fn submit(&self, release: &Release) -> Result<SubmissionId, ServiceError> {
        debug!(target: "submission", endpoint = %self.endpoint, release_id = %release.id, "posting release");

        let mut request = self.client.post(&self.endpoint).json(release);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(ServiceError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SubmissionResponse = serde_json::from_str(&body)
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))?;
        parsed
            .into_id()
            .map(SubmissionId)
            .ok_or_else(|| ServiceError::InvalidResponse("missing submission id".into()))
    }
}
