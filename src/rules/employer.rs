//! Employer identifier checksum rule.

use crate::derived::checksum::validates_employer_number;
use crate::error::Result;
use crate::model::Learner;
use crate::rules::sink::{build_parameter, ErrorSink};
use crate::rules::Rule;

/// Every reported employer identifier must be nine digits with a valid
/// check digit.
///
/// Iterates the employment status history; one violation per offending
/// status. Employment statuses have no aim sequence number, so violations
/// are attributed at learner level with the status's effective date as a
/// message parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmployerIdChecksumRule;

impl EmployerIdChecksumRule {
    /// Whether a reported employer identifier fails validation.
    pub fn condition_met(&self, emp_id: Option<u64>) -> bool {
        match emp_id {
            Some(id) => !validates_employer_number(id),
            None => false,
        }
    }
}

impl Rule for EmployerIdChecksumRule {
    fn name(&self) -> &'static str {
        "EMPID_CHECKSUM"
    }

    fn validate(&self, learner: &Learner, sink: &mut dyn ErrorSink) -> Result<()> {
        for status in &learner.employment_statuses {
            if self.condition_met(status.emp_id) {
                let id = status.emp_id.unwrap_or_default();
                sink.handle(
                    self.name(),
                    &learner.learn_ref_number,
                    None,
                    vec![
                        build_parameter("EmpId", id),
                        build_parameter("DateEmpStatApp", status.date_emp_stat_app),
                    ],
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LearnerEmploymentStatus;
    use crate::rules::CollectingSink;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_condition_not_met_for_absent_id() {
        assert!(!EmployerIdChecksumRule.condition_met(None));
    }

    #[test]
    fn test_condition_not_met_for_valid_id() {
        // 12345678 -> check digit 9.
        assert!(!EmployerIdChecksumRule.condition_met(Some(123456789)));
    }

    #[test]
    fn test_condition_met_for_bad_check_digit() {
        assert!(EmployerIdChecksumRule.condition_met(Some(123456781)));
    }

    #[test]
    fn test_condition_met_for_wrong_length() {
        assert!(EmployerIdChecksumRule.condition_met(Some(12345678)));
    }

    #[test]
    fn test_validate_emits_one_error_per_offending_status() {
        let mut learner = Learner::new("L001");
        let mut good = LearnerEmploymentStatus::new(date(2024, 1, 1), 10);
        good.emp_id = Some(123456789);
        let mut bad_one = LearnerEmploymentStatus::new(date(2024, 3, 1), 10);
        bad_one.emp_id = Some(123456781);
        let mut bad_two = LearnerEmploymentStatus::new(date(2024, 6, 1), 10);
        bad_two.emp_id = Some(11111);
        learner.employment_statuses = vec![good, bad_one, bad_two];

        let mut sink = CollectingSink::new();
        EmployerIdChecksumRule.validate(&learner, &mut sink).unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.violations()[0].parameters[0].value, "123456781");
        assert_eq!(sink.violations()[1].parameters[0].value, "11111");
        assert!(sink.violations().iter().all(|v| v.aim_seq_number.is_none()));
    }
}
