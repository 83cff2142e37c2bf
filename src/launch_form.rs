/*!
 * Training launch form.
 *
 * The form collects an initiating user, a target project and a
 * configuration file. The file is validated as soon as it is selected, and
 * submission is only possible once the file is accepted and both
 * selections are made.
 *
 * File status: `Idle -> Validating -> {Accepted, Rejected}`.
 * Submission status: `Idle -> Uploading -> {Success, Error}`.
 *
 * Reads are guarded by a `ReadSequencer`: when selections overlap, only
 * the most recent one may update the form.
 */

use log::{debug, info, warn};
use parking_lot::Mutex;
use std::path::Path;

use crate::errors::SubmissionError;
use crate::registry::Registry;
use crate::sequencer::{ReadSequencer, ReadToken};
use crate::submission::{SubmissionReceipt, SubmissionRequest, Submitter};
use crate::upload::UploadedFile;
use crate::validation::{ConfigValidator, ValidationReport};

/// Message shown when the orchestrator cannot be reached
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "Failed to connect to orchestration server. Please check your network.";

/// Validation state of the selected file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FileStatus {
    /// No file selected
    #[default]
    Idle,
    /// A read is in flight
    Validating,
    /// The file passed validation
    Accepted,
    /// The file failed validation with these messages
    Rejected(Vec<String>),
}

/// State of the network submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Uploading,
    Success {
        /// Identifier assigned by the orchestrator
        job_id: String,
        /// Confirmation shown to the user
        message: String,
    },
    Error(String),
}

#[derive(Debug, Default)]
struct FormState {
    user_id: Option<String>,
    project_id: Option<String>,
    file: Option<UploadedFile>,
    file_status: FileStatus,
    submission: SubmissionStatus,
}

/// Launch form shared between the UI and asynchronous file reads
#[derive(Debug)]
pub struct LaunchForm {
    registry: Registry,
    validator: ConfigValidator,
    sequencer: ReadSequencer,
    state: Mutex<FormState>,
}

impl LaunchForm {
    /// Create an empty form over the given registries
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            validator: ConfigValidator::new(),
            sequencer: ReadSequencer::new(),
            state: Mutex::new(FormState::default()),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Select the initiating user; the user must be registered
    pub fn select_user(&self, user_id: &str) -> Result<(), SubmissionError> {
        if self.registry.find_user(user_id).is_none() {
            return Err(SubmissionError::UnknownUser(user_id.to_string()));
        }
        self.state.lock().user_id = Some(user_id.to_string());
        Ok(())
    }

    /// Select the target project; the project must be registered
    pub fn select_project(&self, project_id: &str) -> Result<(), SubmissionError> {
        if self.registry.find_project(project_id).is_none() {
            return Err(SubmissionError::UnknownProject(project_id.to_string()));
        }
        self.state.lock().project_id = Some(project_id.to_string());
        Ok(())
    }

    /// Start a file selection and return the token its read must present
    pub fn begin_file_selection(&self) -> ReadToken {
        // Issued under the lock so token order matches state-write order
        let mut state = self.state.lock();
        let token = self.sequencer.issue();
        state.file = None;
        state.file_status = FileStatus::Validating;
        state.submission = SubmissionStatus::Idle;
        token
    }

    /// Apply the outcome of a read started with `token`.
    ///
    /// Returns `false` and leaves the form untouched when a newer selection
    /// has started since.
    pub fn finish_file_selection(
        &self,
        token: ReadToken,
        outcome: Result<UploadedFile, ValidationReport>,
    ) -> bool {
        let (file, report) = match outcome {
            Ok(upload) => {
                let report = self.validator.validate_upload(&upload);
                (Some(upload), report)
            }
            Err(report) => (None, report),
        };

        let mut state = self.state.lock();
        if !self.sequencer.is_current(token) {
            debug!("Discarding stale read result #{}", token.value());
            return false;
        }

        state.file_status = if report.is_accepted() {
            if let Some(file) = &file {
                info!("Validated {} ({:.2} KB)", file.name, file.size_kb());
            }
            FileStatus::Accepted
        } else {
            warn!("Configuration rejected with {} error(s)", report.errors().len());
            FileStatus::Rejected(report.messages())
        };
        state.file = file;
        true
    }

    /// Select a file from disk and validate it
    pub async fn select_file<P: AsRef<Path>>(&self, path: P) -> FileStatus {
        let token = self.begin_file_selection();
        let outcome = self.validator.load_checked(path.as_ref()).await;
        self.finish_file_selection(token, outcome);
        self.file_status()
    }

    /// Select an upload already held in memory and validate it
    pub fn select_upload(&self, upload: UploadedFile) -> FileStatus {
        let token = self.begin_file_selection();
        self.finish_file_selection(token, Ok(upload));
        self.file_status()
    }

    /// Remove the selected file; pending reads are discarded
    pub fn clear_file(&self) {
        let mut state = self.state.lock();
        self.sequencer.invalidate();
        state.file = None;
        state.file_status = FileStatus::Idle;
    }

    pub fn file_status(&self) -> FileStatus {
        self.state.lock().file_status.clone()
    }

    pub fn submission_status(&self) -> SubmissionStatus {
        self.state.lock().submission.clone()
    }

    /// Name of the selected file, if any
    pub fn selected_file_name(&self) -> Option<String> {
        self.state.lock().file.as_ref().map(|f| f.name.clone())
    }

    /// Whether the submit action is enabled
    pub fn can_submit(&self) -> bool {
        Self::readiness(&self.state.lock()).is_ok()
    }

    fn readiness(state: &FormState) -> Result<(), SubmissionError> {
        if state.file_status != FileStatus::Accepted || state.file.is_none() {
            return Err(SubmissionError::NotReady("no validated configuration file".to_string()));
        }
        if state.user_id.is_none() {
            return Err(SubmissionError::NotReady("no user selected".to_string()));
        }
        if state.project_id.is_none() {
            return Err(SubmissionError::NotReady("no project selected".to_string()));
        }
        if state.submission == SubmissionStatus::Uploading {
            return Err(SubmissionError::NotReady("a submission is already in progress".to_string()));
        }
        Ok(())
    }

    /// Submit the validated configuration
    pub async fn submit(&self, submitter: &dyn Submitter) -> Result<SubmissionReceipt, SubmissionError> {
        let (request, project_name) = {
            let mut state = self.state.lock();
            Self::readiness(&state)?;

            let user = state.user_id.as_deref().and_then(|id| self.registry.find_user(id));
            let project = state.project_id.as_deref().and_then(|id| self.registry.find_project(id));
            let (Some(user), Some(project), Some(file)) = (user, project, state.file.clone()) else {
                return Err(SubmissionError::NotReady("form is incomplete".to_string()));
            };

            let request = SubmissionRequest {
                username: user.name.clone(),
                project_id: project.id.clone(),
                project_name: project.name.clone(),
                file,
            };
            let project_name = project.name.clone();

            state.submission = SubmissionStatus::Uploading;
            (request, project_name)
        };

        info!("Submitting training job for '{}'", project_name);
        let result = submitter.submit(request).await;

        let mut state = self.state.lock();
        match &result {
            Ok(receipt) => {
                let message = format!(
                    "Training job for '{}' submitted successfully. Job ID: {}",
                    project_name, receipt.id
                );
                info!("{}", message);
                state.submission = SubmissionStatus::Success {
                    job_id: receipt.id.clone(),
                    message,
                };
            }
            Err(e) => {
                warn!("Submission failed: {}", e);
                state.submission = SubmissionStatus::Error(SUBMISSION_FAILED_MESSAGE.to_string());
            }
        }

        result
    }

    /// Return the form to its initial state, keeping the registries
    pub fn reset(&self) {
        let mut state = self.state.lock();
        self.sequencer.invalidate();
        *state = FormState::default();
    }
}
