/*!
 * Configuration validator.
 *
 * This module decides whether an uploaded training configuration plausibly
 * contains the required sections before it may be submitted. Size checks
 * run first and are terminal, then an empty-content check, then every
 * structural rule is evaluated and all failures are reported together.
 */

use log::{debug, warn};
use std::path::Path;

use crate::errors::ValidationError;
use crate::upload::UploadedFile;

use super::lines::trim_scan;
use super::rules::{ConfigDocument, RuleSet};

/// Largest accepted upload, in bytes
pub const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Ordered validation outcome; empty means the file is accepted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// An accepting report
    pub fn accepted() -> Self {
        Self::default()
    }

    /// A report holding the given errors in order
    pub fn rejected(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Whether the file passed every check
    pub fn is_accepted(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in evaluation order
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// User-facing messages in evaluation order
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl From<ValidationError> for ValidationReport {
    fn from(error: ValidationError) -> Self {
        Self::rejected(vec![error])
    }
}

/// Validates training configuration uploads
#[derive(Debug, Clone, Default)]
pub struct ConfigValidator {
    rules: RuleSet,
}

impl ConfigValidator {
    /// Validator enforcing the required rule set
    pub fn new() -> Self {
        Self {
            rules: RuleSet::required(),
        }
    }

    /// Validate decoded content whose blob is `size_bytes` long
    pub fn validate(&self, content: &str, size_bytes: u64) -> ValidationReport {
        if let Some(error) = Self::check_size(size_bytes) {
            return error.into();
        }

        if trim_scan(content).is_empty() {
            return ValidationError::EmptyContent.into();
        }

        let document = ConfigDocument::parse(content);
        let errors = self.rules.evaluate(&document);

        debug!(
            "Scanned {} lines, {} rule(s) failed",
            document.lines().len(),
            errors.len()
        );

        ValidationReport::rejected(errors)
    }

    /// Validate an in-memory upload
    pub fn validate_upload(&self, upload: &UploadedFile) -> ValidationReport {
        if let Some(error) = Self::check_size(upload.size()) {
            return error.into();
        }
        self.validate(&upload.text(), upload.size())
    }

    /// Validate a file on disk.
    ///
    /// The size limits are checked from metadata before any content is read.
    /// Read errors are reported as `ReadFailure`.
    pub async fn validate_file<P: AsRef<Path>>(&self, path: P) -> ValidationReport {
        match self.load_checked(path.as_ref()).await {
            Ok(upload) => self.validate_upload(&upload),
            Err(report) => report,
        }
    }

    /// Read a file for upload, stopping early on size violations or read errors.
    ///
    /// On success the returned upload has not been validated beyond its size.
    pub async fn load_checked(&self, path: &Path) -> Result<UploadedFile, ValidationReport> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| read_failure(path, e))?;

        if let Some(error) = Self::check_size(metadata.len()) {
            return Err(error.into());
        }

        UploadedFile::load(path)
            .await
            .map_err(|e| read_failure(path, e))
    }

    fn check_size(size_bytes: u64) -> Option<ValidationError> {
        if size_bytes == 0 {
            Some(ValidationError::EmptyFile)
        } else if size_bytes > MAX_FILE_SIZE_BYTES {
            Some(ValidationError::OversizedFile)
        } else {
            None
        }
    }
}

fn read_failure(path: &Path, error: impl std::fmt::Display) -> ValidationReport {
    warn!("Failed to read {:?}: {}", path, error);
    ValidationError::ReadFailure {
        reason: error.to_string(),
    }
    .into()
}
