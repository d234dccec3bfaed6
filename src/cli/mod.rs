//! CLI commands for ilrcheck.
//!
//! Commands return structured `Output` values; rendering and exit codes
//! belong to `main`.

pub mod check;
pub mod rules_cmd;
pub mod validate;

pub use check::{CheckUlnCommand, CheckUlnOutput};
pub use rules_cmd::{RuleInfo, RulesCommand, RulesOutput, BUILT_IN_RULES};
pub use validate::{ValidateCommand, ValidateOptions, ValidateOutput};
