/*!
 * Error types for the launchgate application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Reasons an uploaded configuration file is rejected.
///
/// The `Display` output of each variant is the exact message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Zero-byte upload
    #[error("The uploaded file is empty.")]
    EmptyFile,

    /// Upload larger than the size limit
    #[error("File exceeds the maximum size limit of 5MB.")]
    OversizedFile,

    /// Non-empty upload whose text is whitespace only
    #[error("The file content is empty.")]
    EmptyContent,

    /// A required section is absent from the document
    #[error("Missing top-level key: '{0}'")]
    MissingTopLevelKey(String),

    /// A required field is absent from the block of a present section
    #[error("Missing required key in '{parent}': '{child}'")]
    MissingNestedKey {
        /// Section key
        parent: String,
        /// Field expected inside the section
        child: String,
    },

    /// The file stream could not be read
    #[error("Error reading file content.")]
    ReadFailure {
        /// Underlying I/O error description, kept for logs
        reason: String,
    },
}

/// Errors that can occur when submitting a training job
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// Submission attempted before the form is complete
    #[error("Submission is not ready: {0}")]
    NotReady(String),

    /// User is not registered in the team access list
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    /// Project is not registered
    #[error("Unknown project: {0}")]
    UnknownProject(String),

    /// The request could not be sent or the connection failed
    #[error("Submission request failed: {0}")]
    RequestFailed(String),

    /// The orchestration server answered with a non-success status
    #[error("Orchestration server responded with error: {status_code} - {message}")]
    ServerError {
        /// HTTP status code
        status_code: u16,
        /// Response body
        message: String,
    },

    /// The response body could not be interpreted
    #[error("Invalid submission response: {0}")]
    InvalidResponse(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Error from validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Error from submission
    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
