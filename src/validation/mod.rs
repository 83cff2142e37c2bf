/*!
 * Validation module for training configuration uploads.
 *
 * Uploaded YAML or pretty-printed JSON files are checked with lightweight
 * text heuristics instead of a full parser:
 * - Size limits (empty and oversized uploads)
 * - Empty content
 * - Required top-level sections
 * - Required fields nested inside a section, scoped by indentation
 *
 * # Architecture
 *
 * - `lines`: Line scanning, indentation and key matching
 * - `rules`: Required-key rules and their evaluation
 * - `service`: The validator entry points and report type
 */

pub mod lines;
pub mod rules;
pub mod service;

// Re-export main types
pub use rules::{ConfigDocument, Rule, RuleSet, REQUIRED_RULES};
pub use service::{ConfigValidator, ValidationReport, MAX_FILE_SIZE_BYTES};
