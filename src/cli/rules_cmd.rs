//! Rules command.
//!
//! Lists the built-in rule set and whether each rule is enabled under the
//! loaded configuration.

use serde::{Deserialize, Serialize};

use crate::config::RulesConfig;

/// Names of every built-in rule, in registration order.
pub const BUILT_IN_RULES: &[&str] = &[
    "ULN_CHECKSUM",
    "EMPID_CHECKSUM",
    "APPR_COMPONENT_START",
    "BENEFITS_LDM",
    "STD_FUNDING_CAP",
    "PRIOR_ATTAIN_ORG",
];

/// One rule's listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleInfo {
    /// Stable rule identifier.
    pub name: String,
    /// Whether the rule is enabled under the loaded config.
    pub enabled: bool,
}

/// Output of the rules command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesOutput {
    /// All built-in rules.
    pub rules: Vec<RuleInfo>,
}

/// The rules command implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RulesCommand;

impl RulesCommand {
    /// Run the rules listing against the loaded rule config.
    pub fn run(&self, config: &RulesConfig) -> RulesOutput {
        RulesOutput {
            rules: BUILT_IN_RULES
                .iter()
                .map(|&name| RuleInfo {
                    name: name.to_string(),
                    enabled: config.is_enabled(name),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rules_enabled_by_default() {
        let out = RulesCommand.run(&RulesConfig::default());
        assert_eq!(out.rules.len(), BUILT_IN_RULES.len());
        assert!(out.rules.iter().all(|r| r.enabled));
    }

    #[test]
    fn test_override_reflected_in_listing() {
        let mut config = RulesConfig::default();
        config.overrides.insert("BENEFITS_LDM".to_string(), false);
        let out = RulesCommand.run(&config);
        let benefits = out.rules.iter().find(|r| r.name == "BENEFITS_LDM").unwrap();
        assert!(!benefits.enabled);
    }
}
