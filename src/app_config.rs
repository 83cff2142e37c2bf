/*!
 * Application configuration.
 *
 * Handles loading, validating and saving the JSON configuration file that
 * holds the orchestration endpoint and the user and project registries.
 */

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::default::Default;
use std::path::Path;
use url::Url;

use crate::errors::AppError;
use crate::registry::{ProjectDefinition, Registry, UserProfile};

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Orchestration endpoint settings
    #[serde(default)]
    pub submission: SubmissionConfig,

    /// Team access list
    #[serde(default)]
    pub users: Vec<UserProfile>,

    /// Projects jobs can be launched into
    #[serde(default)]
    pub projects: Vec<ProjectDefinition>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Orchestration upload endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SubmissionConfig {
    // @field: Upload endpoint URL
    #[serde(default = "default_submission_url")]
    pub url: String,

    // @field: HTTP method
    #[serde(default = "default_submission_method")]
    pub method: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            url: default_submission_url(),
            method: default_submission_method(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_submission_url() -> String {
    // Orchestration backend upload route
    "http://localhost:8000/upload".to_string()
}

fn default_submission_method() -> String {
    "POST".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load the configuration file, creating it with defaults if missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to open config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            return Ok(config);
        }

        warn!("Config file not found at {:?}, creating default config.", path);

        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {:?}", path))?;

        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), AppError> {
        let url = Url::parse(&self.submission.url)
            .map_err(|e| AppError::Config(format!("Invalid submission URL '{}': {}", self.submission.url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "Submission URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        let method = self.submission.method.to_uppercase();
        if method != "POST" && method != "PUT" {
            return Err(AppError::Config(format!(
                "Submission method must be POST or PUT, got '{}'",
                self.submission.method
            )));
        }

        if self.submission.timeout_secs == 0 {
            return Err(AppError::Config("Submission timeout must be greater than zero".to_string()));
        }

        let mut user_ids = HashSet::new();
        if let Some(user) = self.users.iter().find(|u| !user_ids.insert(u.id.as_str())) {
            return Err(AppError::Config(format!("Duplicate user id: {}", user.id)));
        }

        let mut project_ids = HashSet::new();
        if let Some(project) = self.projects.iter().find(|p| !project_ids.insert(p.id.as_str())) {
            return Err(AppError::Config(format!("Duplicate project id: {}", project.id)));
        }

        Ok(())
    }

    /// Registered users and projects
    pub fn registry(&self) -> Registry {
        Registry::new(self.users.clone(), self.projects.clone())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            submission: SubmissionConfig::default(),
            users: Vec::new(),
            projects: Vec::new(),
            log_level: LogLevel::default(),
        }
    }
}
