//! Validate command.
//!
//! Reads a JSON array of learner records, runs the standard rule set and
//! reports the collected violations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::Validator;
use crate::error::Result;
use crate::model::Learner;
use crate::rules::{CollectingSink, Violation};
use crate::util::read_to_string_limited;

/// Options for the validate command.
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    /// Path to the JSON learner file.
    pub input: PathBuf,
    /// Output as JSON.
    pub json: bool,
    /// Suppress per-violation output.
    pub quiet: bool,
}

/// Output of the validate command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether the run itself succeeded (not whether the file was clean).
    pub success: bool,
    /// Number of learners validated.
    pub learners: usize,
    /// Collected violations, in report order.
    pub violations: Vec<Violation>,
    /// Error message if the run failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidateOutput {
    /// Create a successful output.
    pub fn success(learners: usize, violations: Vec<Violation>) -> Self {
        Self {
            success: true,
            learners,
            violations,
            error: None,
        }
    }

    /// Create a failed output.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            learners: 0,
            violations: Vec::new(),
            error: Some(error.into()),
        }
    }

    /// Whether the validated file was free of violations.
    pub fn is_clean(&self) -> bool {
        self.success && self.violations.is_empty()
    }
}

/// The validate command implementation.
pub struct ValidateCommand {
    validator: Validator,
}

impl ValidateCommand {
    /// Create a validate command over a configured validator.
    pub fn new(validator: Validator) -> Self {
        Self { validator }
    }

    /// Run the validate command.
    pub fn run(&self, options: &ValidateOptions) -> ValidateOutput {
        let learners = match load_learners(&options.input) {
            Ok(learners) => learners,
            Err(err) => return ValidateOutput::failure(err.to_string()),
        };

        let mut sink = CollectingSink::new();
        if let Err(err) = self.validator.validate_batch(&learners, &mut sink) {
            return ValidateOutput::failure(err.to_string());
        }

        tracing::debug!(
            learners = learners.len(),
            violations = sink.len(),
            "validation pass complete"
        );
        ValidateOutput::success(learners.len(), sink.into_violations())
    }
}

/// Load a JSON array of learners from disk.
fn load_learners(path: &Path) -> Result<Vec<Learner>> {
    let text = read_to_string_limited(path)?;
    let learners: Vec<Learner> = serde_json::from_str(&text)?;
    Ok(learners)
}
