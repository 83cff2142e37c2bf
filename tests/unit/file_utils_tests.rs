/*!
 * Tests for file utility functions
 */

use std::path::Path;
use anyhow::Result;
use launchgate::file_utils::{ConfigFormat, FileManager};
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "train.yaml", "model: x")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::dir_exists(&test_file));
    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.yaml"));
}

/// Test format detection from extensions
#[test]
fn test_configFormat_fromPath_shouldClassifyByExtension() {
    assert_eq!(ConfigFormat::from_path("train.yaml"), ConfigFormat::Yaml);
    assert_eq!(ConfigFormat::from_path("train.YML"), ConfigFormat::Yaml);
    assert_eq!(ConfigFormat::from_path("dir/train.Json"), ConfigFormat::Json);
    assert_eq!(ConfigFormat::from_path("train.txt"), ConfigFormat::Unknown);
    assert_eq!(ConfigFormat::from_path(Path::new("Makefile")), ConfigFormat::Unknown);
}

/// Test that config discovery recurses, filters and sorts
#[test]
fn test_findConfigFiles_withMixedTree_shouldReturnSortedConfigsOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "b.yaml", "model: x")?;
    common::create_test_file(root, "a.json", "{}")?;
    common::create_test_file(root, "notes.txt", "model: x")?;
    common::create_test_file(root, "nested/c.yml", "model: x")?;

    let files = FileManager::find_config_files(root)?;
    let names: Vec<String> = files
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();

    assert_eq!(names, vec!["a.json", "b.yaml", "nested/c.yml"]);
    Ok(())
}

/// Test that write_to_file creates parent directories
#[test]
fn test_writeToFile_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("out/templates/train.yaml");

    FileManager::write_to_file(&target, "model: x\n")?;

    assert_eq!(std::fs::read_to_string(&target)?, "model: x\n");
    Ok(())
}
