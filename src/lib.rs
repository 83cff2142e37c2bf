/*!
 * # launchgate - Training configuration gate
 *
 * A Rust library for checking training job configurations before they are
 * submitted to a training orchestration server.
 *
 * ## Features
 *
 * - Validate uploaded YAML or pretty-printed JSON configurations without a full parser:
 *   - Size limits (empty and larger than 5MB)
 *   - Required sections (`model`, `train`, `sweeper`)
 *   - Required fields inside sections (`train.data`, `sweeper.study_name`)
 * - Validate single files or whole directories
 * - Submit validated configurations as multipart uploads
 * - Discard stale results when file selections overlap
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `validation`: The configuration validator:
 *   - `validation::lines`: Line scanning and key matching
 *   - `validation::rules`: Required-key rules
 *   - `validation::service`: Validator entry points
 * - `launch_form`: Launch form state and submission gating
 * - `submission`: Submission port and HTTP client
 * - `sequencer`: Ordering guard for asynchronous reads
 * - `upload`: Uploaded file handling
 * - `registry`: Registered users and projects
 * - `template`: Reference training configuration
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod launch_form;
pub mod registry;
pub mod sequencer;
pub mod submission;
pub mod template;
pub mod upload;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, SubmissionError, ValidationError};
pub use launch_form::{FileStatus, LaunchForm, SubmissionStatus};
pub use upload::UploadedFile;
pub use validation::{ConfigValidator, ValidationReport};
