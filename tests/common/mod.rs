/*!
 * Common test utilities for the launchgate test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use tempfile::TempDir;

use launchgate::app_config::Config;
use launchgate::registry::{ProjectDefinition, UserProfile, UserRole};

pub mod mock_orchestrator;

/// Configuration that passes every rule
pub const VALID_CONFIG: &str = r#"model: "yolov8n-cls.pt"
train:
  data: /datasets/x/
sweeper:
  study_name: "demo"
"#;

/// Route test logs through env_logger; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Configuration with one registered user and one project, pointed at `url`
pub fn config_with_registry(url: &str) -> Config {
    let mut config = Config::default();
    config.submission.url = url.to_string();
    config.users = vec![UserProfile {
        id: "u1".to_string(),
        name: "wisrovi".to_string(),
        email: "wisrovi@example.com".to_string(),
        role: UserRole::Admin,
    }];
    config.projects = vec![ProjectDefinition {
        id: "p1".to_string(),
        name: "colorball".to_string(),
        description: "Color ball classification".to_string(),
        created_at: "2024-01-01".to_string(),
    }];
    config
}
