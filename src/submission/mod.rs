/*!
 * Submission of validated configurations to the training orchestrator.
 *
 * This module defines the port used by the launch form to hand a validated
 * configuration to the external orchestration endpoint:
 * - `Submitter`: the async interface the form depends on
 * - `http`: multipart HTTP implementation
 */

use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

use crate::errors::SubmissionError;
use crate::upload::UploadedFile;

pub mod http;

pub use http::HttpSubmitter;

/// Everything sent to the orchestrator for one training job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    /// Name of the initiating user
    pub username: String,
    /// Target project identifier
    pub project_id: String,
    /// Target project display name
    pub project_name: String,
    /// The validated configuration file
    pub file: UploadedFile,
}

/// Acknowledgement returned by the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Job identifier assigned by the orchestrator
    pub id: String,
    /// Optional human-readable message from the server
    pub message: Option<String>,
}

impl SubmissionReceipt {
    /// Read a receipt from a JSON response body.
    ///
    /// The body must be an object with an `id` field holding a string or a
    /// number.
    pub fn from_json(body: &Value) -> Result<Self, SubmissionError> {
        let id = match body.get("id") {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            Some(other) => {
                return Err(SubmissionError::InvalidResponse(format!(
                    "unexpected id value: {}",
                    other
                )));
            }
            None => {
                return Err(SubmissionError::InvalidResponse(
                    "response has no id field".to_string(),
                ));
            }
        };

        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self { id, message })
    }
}

/// Common trait for job submission backends
///
/// The launch form depends only on this trait, so the HTTP client can be
/// replaced by a mock in tests.
#[async_trait]
pub trait Submitter: Send + Sync + Debug {
    /// Submit a training job
    ///
    /// # Arguments
    /// * `request` - The job to submit
    ///
    /// # Returns
    /// * `Result<SubmissionReceipt, SubmissionError>` - The orchestrator's acknowledgement or an error
    async fn submit(&self, request: SubmissionRequest) -> Result<SubmissionReceipt, SubmissionError>;
}
