//! Learner number checksum rule.

use crate::derived::checksum::validates_learner_number;
use crate::error::Result;
use crate::model::Learner;
use crate::rules::sink::{build_parameter, ErrorSink};
use crate::rules::Rule;

/// The learner number, when reported, must carry a valid check digit.
///
/// Learner-level: one violation at most, attributed without an aim
/// sequence number. The temporary-ULN sentinel always passes; an absent
/// ULN is not a violation of this rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct UlnChecksumRule;

impl UlnChecksumRule {
    /// Whether a reported learner number fails its checksum.
    pub fn condition_met(&self, uln: Option<u64>) -> bool {
        match uln {
            Some(uln) => !validates_learner_number(uln),
            None => false,
        }
    }
}

impl Rule for UlnChecksumRule {
    fn name(&self) -> &'static str {
        "ULN_CHECKSUM"
    }

    fn validate(&self, learner: &Learner, sink: &mut dyn ErrorSink) -> Result<()> {
        if self.condition_met(learner.uln) {
            let uln = learner.uln.unwrap_or_default();
            sink.handle(
                self.name(),
                &learner.learn_ref_number,
                None,
                vec![build_parameter("ULN", uln)],
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derived::checksum::TEMPORARY_ULN;
    use crate::rules::CollectingSink;

    #[test]
    fn test_condition_not_met_for_absent_uln() {
        assert!(!UlnChecksumRule.condition_met(None));
    }

    #[test]
    fn test_condition_not_met_for_valid_uln() {
        assert!(!UlnChecksumRule.condition_met(Some(1234567891)));
    }

    #[test]
    fn test_condition_not_met_for_temporary_uln() {
        assert!(!UlnChecksumRule.condition_met(Some(TEMPORARY_ULN)));
    }

    #[test]
    fn test_condition_met_for_bad_check_digit() {
        assert!(UlnChecksumRule.condition_met(Some(1234567881)));
    }

    #[test]
    fn test_condition_met_for_wrong_length() {
        assert!(UlnChecksumRule.condition_met(Some(12345)));
    }

    #[test]
    fn test_validate_emits_learner_level_error() {
        let mut learner = Learner::new("L001");
        learner.uln = Some(1234567881);
        let mut sink = CollectingSink::new();

        UlnChecksumRule.validate(&learner, &mut sink).unwrap();

        assert_eq!(sink.len(), 1);
        let v = &sink.violations()[0];
        assert_eq!(v.rule_name, "ULN_CHECKSUM");
        assert_eq!(v.learn_ref_number, "L001");
        assert_eq!(v.aim_seq_number, None);
        assert_eq!(v.parameters[0].name, "ULN");
        assert_eq!(v.parameters[0].value, "1234567881");
    }

    #[test]
    fn test_validate_clean_learner_emits_nothing() {
        let mut learner = Learner::new("L001");
        learner.uln = Some(1234567891);
        let mut sink = CollectingSink::new();

        UlnChecksumRule.validate(&learner, &mut sink).unwrap();

        assert!(sink.is_empty());
    }
}
