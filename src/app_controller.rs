use anyhow::{anyhow, Result};
use log::{error, info, warn};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app_config::Config;
use crate::file_utils::{ConfigFormat, FileManager};
use crate::launch_form::{FileStatus, LaunchForm};
use crate::submission::{SubmissionReceipt, Submitter};
use crate::template;
use crate::upload::display_name;
use crate::validation::{ConfigValidator, ValidationReport};

// @module: Application controller for configuration validation and submission

/// Validation outcome for one file
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub report: ValidationReport,
}

impl FileOutcome {
    // @returns: User-facing summary, one bulleted line per error
    pub fn render(&self) -> String {
        let name = display_name(&self.path);
        if self.report.is_accepted() {
            return format!("✓ {} validated", name);
        }

        let mut rendered = format!("✗ {} rejected", name);
        for message in self.report.messages() {
            rendered.push_str("\n  • ");
            rendered.push_str(&message);
        }
        rendered
    }
}

/// Aggregate result of a validation run
#[derive(Debug, Clone, Default)]
pub struct ValidationSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl ValidationSummary {
    pub fn accepted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.report.is_accepted()).count()
    }

    pub fn rejected_count(&self) -> usize {
        self.outcomes.len() - self.accepted_count()
    }

    pub fn all_accepted(&self) -> bool {
        self.rejected_count() == 0
    }
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
    validator: ConfigValidator,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            validator: ConfigValidator::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate a single file or every configuration file under a directory
    pub async fn validate_path<P: AsRef<Path>>(&self, input: P) -> Result<ValidationSummary> {
        let input = input.as_ref();

        if FileManager::file_exists(input) {
            let outcome = self.validate_file(input).await;
            return Ok(ValidationSummary { outcomes: vec![outcome] });
        }

        if FileManager::dir_exists(input) {
            return self.validate_folder(input).await;
        }

        Err(anyhow!("Input path does not exist: {:?}", input))
    }

    /// Validate one file
    pub async fn validate_file(&self, path: &Path) -> FileOutcome {
        if ConfigFormat::from_path(path) == ConfigFormat::Unknown {
            warn!("{:?} does not have a .yaml, .yml or .json extension", path);
        }

        let report = self.validator.validate_file(path).await;
        FileOutcome {
            path: path.to_path_buf(),
            report,
        }
    }

    /// Validate every configuration file found under `input_dir`
    pub async fn validate_folder(&self, input_dir: &Path) -> Result<ValidationSummary> {
        let start_time = std::time::Instant::now();

        let files = FileManager::find_config_files(input_dir)?;
        if files.is_empty() {
            return Err(anyhow!("No configuration files found in directory: {:?}", input_dir));
        }

        let folder_pb = ProgressBar::new(files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));

        let mut summary = ValidationSummary::default();
        for file in &files {
            folder_pb.set_message(format!("Validating: {}", display_name(file)));
            summary.outcomes.push(self.validate_file(file).await);
            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder validation complete");

        info!(
            "Folder validation completed in {}: {} accepted, {} rejected",
            Self::format_duration(start_time.elapsed()),
            summary.accepted_count(),
            summary.rejected_count()
        );

        Ok(summary)
    }

    /// Validate and submit a configuration for the given user and project
    pub async fn submit(
        &self,
        input_file: &Path,
        user_id: &str,
        project_id: &str,
        submitter: &dyn Submitter,
    ) -> Result<SubmissionReceipt> {
        let form = LaunchForm::new(self.config.registry());
        form.select_user(user_id)?;
        form.select_project(project_id)?;

        match form.select_file(input_file).await {
            FileStatus::Accepted => {}
            FileStatus::Rejected(messages) => {
                for message in &messages {
                    error!("{}", message);
                }
                return Err(anyhow!(
                    "Configuration {:?} rejected with {} error(s)",
                    input_file,
                    messages.len()
                ));
            }
            status => return Err(anyhow!("Unexpected file status: {:?}", status)),
        }

        let receipt = form.submit(submitter).await?;
        Ok(receipt)
    }

    /// Write the reference template to `output`
    pub fn write_template(&self, output: &Path, force_overwrite: bool) -> Result<()> {
        template::write_template(output, force_overwrite)
    }

    // @returns: Human-readable duration
    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
