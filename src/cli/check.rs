//! Check-ULN command.
//!
//! Computes the check digit verdict for a single learner number, for
//! spot-checking identifiers outside a full validation run.

use serde::{Deserialize, Serialize};

use crate::derived::checksum::{learner_check_digit, validates_learner_number, CheckVerdict};

/// Output of the check-uln command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckUlnOutput {
    /// The learner number checked.
    pub uln: u64,
    /// Verdict: `valid`, `invalid`, `temporary` or `invalid-length`.
    pub verdict: String,
    /// The computed check character, when one was computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_character: Option<char>,
}

/// The check-uln command implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckUlnCommand;

impl CheckUlnCommand {
    /// Run the check for one learner number.
    pub fn run(&self, uln: u64) -> CheckUlnOutput {
        match learner_check_digit(uln) {
            CheckVerdict::Temporary => CheckUlnOutput {
                uln,
                verdict: "temporary".to_string(),
                check_character: None,
            },
            CheckVerdict::InvalidLength => CheckUlnOutput {
                uln,
                verdict: "invalid-length".to_string(),
                check_character: None,
            },
            CheckVerdict::Digit(c) => CheckUlnOutput {
                uln,
                verdict: if validates_learner_number(uln) {
                    "valid".to_string()
                } else {
                    "invalid".to_string()
                },
                check_character: Some(c),
            },
        }
    }
}
