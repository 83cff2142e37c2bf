use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::{debug, error};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::app_config::SubmissionConfig;
use crate::errors::SubmissionError;

use super::{SubmissionReceipt, SubmissionRequest, Submitter};

/// Multipart HTTP client for the orchestration upload endpoint
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    /// Upload endpoint
    endpoint: Url,
    /// HTTP method used for the upload
    method: Method,
    /// HTTP client for making requests
    client: Client,
}

impl HttpSubmitter {
    /// Create a client for `endpoint`
    ///
    /// # Arguments
    /// * `endpoint` - Absolute URL of the upload endpoint
    /// * `method` - HTTP method, usually `POST`
    /// * `timeout_secs` - Request timeout in seconds
    pub fn new(endpoint: &str, method: &str, timeout_secs: u64) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("Invalid submission URL: {}", endpoint))?;

        let method = Method::from_bytes(method.to_uppercase().as_bytes())
            .map_err(|_| anyhow!("Invalid HTTP method: {}", method))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            endpoint,
            method,
            client,
        })
    }

    /// Create a client from the submission section of the configuration
    pub fn from_config(config: &SubmissionConfig) -> Result<Self> {
        Self::new(&config.url, &config.method, config.timeout_secs)
    }

    /// Upload endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn build_form(request: SubmissionRequest) -> Form {
        let file_part = Part::bytes(request.file.bytes).file_name(request.file.name);

        Form::new()
            .text("username", request.username)
            .text("project_id", request.project_id)
            .text("project_name", request.project_name)
            .part("file", file_part)
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, request: SubmissionRequest) -> Result<SubmissionReceipt, SubmissionError> {
        debug!(
            "Submitting {} ({} bytes) to {} {}",
            request.file.name,
            request.file.size(),
            self.method,
            self.endpoint
        );

        let response = self
            .client
            .request(self.method.clone(), self.endpoint.clone())
            .multipart(Self::build_form(request))
            .send()
            .await
            .map_err(|e| SubmissionError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Orchestrator rejected submission: {} - {}", status, message);
            return Err(SubmissionError::ServerError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SubmissionError::InvalidResponse(e.to_string()))?;

        SubmissionReceipt::from_json(&body)
    }
}
