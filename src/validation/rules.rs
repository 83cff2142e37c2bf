/*!
 * Required-key rules for training configurations.
 *
 * Rules are evaluated against a `ConfigDocument`, a line-indexed view of the
 * uploaded text. Top-level rules look for a key line anywhere in the
 * document. Nested rules look for the child key inside the indentation block
 * that follows the first line declaring the parent.
 */

use log::trace;

use crate::errors::ValidationError;
use super::lines::{split_lines, Line};

/// A structural requirement on a configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The key must be declared somewhere in the document
    TopLevel(&'static str),
    /// The child key must be declared inside the parent's block
    Nested {
        /// Section key
        parent: &'static str,
        /// Field required inside the section
        child: &'static str,
    },
}

impl Rule {
    /// Evaluate the rule, returning the error it raises if any.
    ///
    /// A nested rule whose parent is absent raises nothing; the missing
    /// parent is reported by its own top-level rule.
    pub fn check(&self, document: &ConfigDocument<'_>) -> Option<ValidationError> {
        match *self {
            Rule::TopLevel(key) => match document.find_key(key) {
                Some(_) => None,
                None => Some(ValidationError::MissingTopLevelKey(key.to_string())),
            },
            Rule::Nested { parent, child } => {
                let parent_line = document.find_key(parent)?;
                if document.block_declares(parent_line, child) {
                    None
                } else {
                    Some(ValidationError::MissingNestedKey {
                        parent: parent.to_string(),
                        child: child.to_string(),
                    })
                }
            }
        }
    }
}

/// The fixed rules every training configuration must satisfy, in evaluation order
pub const REQUIRED_RULES: [Rule; 5] = [
    Rule::TopLevel("model"),
    Rule::TopLevel("train"),
    Rule::Nested { parent: "train", child: "data" },
    Rule::TopLevel("sweeper"),
    Rule::Nested { parent: "sweeper", child: "study_name" },
];

/// An ordered set of rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create a rule set evaluated in the given order
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The rules required before a training job can be launched
    pub fn required() -> Self {
        Self::new(REQUIRED_RULES.to_vec())
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluate every rule and collect all failures in rule order
    pub fn evaluate(&self, document: &ConfigDocument<'_>) -> Vec<ValidationError> {
        self.rules
            .iter()
            .filter_map(|rule| rule.check(document))
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::required()
    }
}

/// Line-indexed view of a configuration document
#[derive(Debug, Clone)]
pub struct ConfigDocument<'a> {
    lines: Vec<Line<'a>>,
}

impl<'a> ConfigDocument<'a> {
    /// Split content into a document
    pub fn parse(content: &'a str) -> Self {
        Self {
            lines: split_lines(content),
        }
    }

    /// All lines of the document
    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    /// First line declaring `key`, at any indentation
    pub fn find_key(&self, key: &str) -> Option<&Line<'a>> {
        self.lines.iter().find(|line| line.declares_key(key))
    }

    /// Whether the block following `parent` declares `child`.
    ///
    /// Blank and comment lines never end the block. The first other line
    /// indented no deeper than the parent ends it.
    pub fn block_declares(&self, parent: &Line<'a>, child: &str) -> bool {
        let parent_indent = parent.indentation();

        for line in &self.lines[parent.index + 1..] {
            if line.is_blank() || line.is_comment() {
                continue;
            }

            if line.indentation() <= parent_indent {
                trace!(
                    "Block of line {} ends at line {} before '{}'",
                    parent.index + 1,
                    line.index + 1,
                    child
                );
                return false;
            }

            if line.declares_key(child) {
                return true;
            }
        }

        false
    }
}
