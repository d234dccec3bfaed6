//! Standard funding-cap rule.

use std::sync::Arc;

use crate::derived::funding_cap::{exceeds_cap, standard_groups, StandardGroup};
use crate::error::Result;
use crate::lookups::CapQuery;
use crate::model::Learner;
use crate::rules::sink::{build_parameter, ErrorSink};
use crate::rules::Rule;

/// Two-thirds of a standard's total negotiated price must not exceed the
/// published funding cap effective at the group's applicable date.
///
/// Aggregation is per standard code; a violating group produces one error
/// per delivery in the group, each keyed to that delivery's aim sequence
/// number.
pub struct StandardFundingCapRule {
    caps: Arc<dyn CapQuery>,
}

impl StandardFundingCapRule {
    /// Create the rule over the given cap lookup.
    pub fn new(caps: Arc<dyn CapQuery>) -> Self {
        Self { caps }
    }

    /// Whether an aggregated group breaches its cap.
    pub fn condition_met(&self, group: &StandardGroup) -> bool {
        exceeds_cap(group, self.caps.as_ref())
    }
}

impl Rule for StandardFundingCapRule {
    fn name(&self) -> &'static str {
        "STD_FUNDING_CAP"
    }

    fn validate(&self, learner: &Learner, sink: &mut dyn ErrorSink) -> Result<()> {
        for group in standard_groups(&learner.learning_deliveries) {
            if !self.condition_met(&group) {
                continue;
            }
            for &aim_seq in &group.aim_seq_numbers {
                sink.handle(
                    self.name(),
                    &learner.learn_ref_number,
                    Some(aim_seq),
                    vec![
                        build_parameter("StdCode", group.std_code),
                        build_parameter("TotalNegotiatedPrice", group.total),
                        build_parameter("ApplicableDate", group.applicable_date),
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
    use crate::lookups::{CapEntry, InMemoryCapTable};
    use crate::model::codes::{aim_type, app_fin, fund_model, prog_type};
    use crate::model::{AppFinRecord, LearningDelivery};
    use crate::rules::CollectingSink;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_standard_delivery(seq: i32, std_code: i32, total_training: i64) -> LearningDelivery {
        let mut d = LearningDelivery::new(
            "ZPROG001",
            aim_type::PROGRAMME,
            seq,
            fund_model::OTHER_ADULT,
            date(2024, 8, 1),
        );
        d.prog_type = Some(prog_type::APPRENTICESHIP_STANDARD);
        d.std_code = Some(std_code);
        d.app_fin_records = vec![AppFinRecord::new(
            app_fin::TNP,
            app_fin::TRAINING_PRICE,
            total_training,
            date(2024, 8, 1),
        )];
        d
    }

    fn make_rule(std_code: i32, cap: i64) -> StandardFundingCapRule {
        StandardFundingCapRule::new(Arc::new(InMemoryCapTable::from_entries(vec![CapEntry {
            std_code,
            cap,
            effective_from: date(2000, 1, 1),
            effective_to: None,
        }])))
    }

    #[test]
    fn test_breaching_group_flags_every_delivery_in_it() {
        let mut learner = Learner::new("L001");
        let mut first = make_standard_delivery(1, 7, 300);
        let mut second = make_standard_delivery(2, 7, 0);
        second.app_fin_records.clear();
        first.app_fin_records[0].a_fin_date = date(2024, 9, 1);
        learner.learning_deliveries = vec![first, second];

        let mut sink = CollectingSink::new();
        make_rule(7, 150).validate(&learner, &mut sink).unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.violations()[0].aim_seq_number, Some(1));
        assert_eq!(sink.violations()[1].aim_seq_number, Some(2));
        assert_eq!(sink.violations()[0].parameters[0].value, "7");
    }

    #[test]
    fn test_cap_not_breached_emits_nothing() {
        let mut learner = Learner::new("L001");
        learner.learning_deliveries = vec![make_standard_delivery(1, 7, 300)];
        let mut sink = CollectingSink::new();
        make_rule(7, 400).validate(&learner, &mut sink).unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_no_published_cap_emits_nothing() {
        let mut learner = Learner::new("L001");
        learner.learning_deliveries = vec![make_standard_delivery(1, 7, 300)];
        let rule = StandardFundingCapRule::new(Arc::new(InMemoryCapTable::empty()));
        let mut sink = CollectingSink::new();
        rule.validate(&learner, &mut sink).unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_groups_evaluated_independently() {
        let mut learner = Learner::new("L001");
        learner.learning_deliveries = vec![
            make_standard_delivery(1, 7, 300),
            make_standard_delivery(2, 8, 300),
        ];
        // Only standard 7 has a (breached) cap.
        let mut sink = CollectingSink::new();
        make_rule(7, 150).validate(&learner, &mut sink).unwrap();
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.violations()[0].aim_seq_number, Some(1));
    }
}
