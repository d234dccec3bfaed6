//! Employment-status snapshot selection and categorical classification.
//!
//! Two layers live here. The snapshot selector picks the employment status
//! that applies on a reference date. The composite predicates combine a
//! fund-model gate, an employment-status-code gate and monitoring-category
//! gates into the named derivations that dozens of rules share.
//!
//! Gate ordering inside each composite is part of the contract: the cheap
//! scalar gates run first and short-circuit, so a stubbed collaborator in a
//! rule test only sees the lookup calls the derivation actually needed.

use chrono::NaiveDate;

use crate::lookups::{FamQuery, MonitoringQuery};
use crate::model::codes::{emp_stat, fam_type, fund_model, ldm};
use crate::model::{Fam, LearnerEmploymentStatus, LearningDelivery};

/// Named monitoring categories as concatenated `TYPE` + code key sets.
pub mod categories {
    /// In receipt of jobseeker's allowance or employment and support
    /// allowance.
    pub const JSA_OR_ESA: &[&str] = &["BSI1", "BSI2"];
    /// In receipt of other state benefits.
    pub const OTHER_STATE_BENEFITS: &[&str] = &["BSI3"];
    /// In receipt of universal credit.
    pub const UNIVERSAL_CREDIT: &[&str] = &["BSI4"];
    /// Any benefit status indicator.
    pub const ANY_BENEFIT: &[&str] = &["BSI1", "BSI2", "BSI3", "BSI4"];
    /// Self-employed.
    pub const SELF_EMPLOYED: &[&str] = &["SEI1"];
    /// Working fewer than sixteen hours a week.
    pub const UNDER_16_HOURS_A_WEEK: &[&str] = &["EII2", "EII6"];
    /// Unemployed for twelve months or more.
    pub const UNEMPLOYED_12_MONTHS_OR_MORE: &[&str] = &["LOU3", "LOU4", "LOU5"];
}

/// Select the employment status applicable on a reference date.
///
/// Candidates are the statuses whose effective-from date is on or before
/// `on_date`; the latest effective-from date wins. When two candidates
/// share that date, the one **later in input order** wins; the scan below
/// replaces the current best on ties, deliberately and testably.
pub fn applicable_status_on(
    statuses: &[LearnerEmploymentStatus],
    on_date: NaiveDate,
) -> Option<&LearnerEmploymentStatus> {
    let mut best: Option<&LearnerEmploymentStatus> = None;
    for status in statuses {
        if status.date_emp_stat_app > on_date {
            continue;
        }
        match best {
            Some(b) if status.date_emp_stat_app < b.date_emp_stat_app => {}
            _ => best = Some(status),
        }
    }
    best
}

/// Whether the delivery is funded under the adult skills fund model.
fn adult_skills_funded(delivery: &LearningDelivery) -> bool {
    delivery.fund_model == fund_model::ADULT_SKILLS
}

/// Adult-skills funded and, on the day the delivery starts, the learner was
/// in receipt of any benefit.
///
/// Gates, in order: fund model 35; an applicable status exists at the start
/// date; that status carries any `BSI` monitoring.
pub fn is_adult_funded_on_benefits_at_start(
    delivery: &LearningDelivery,
    statuses: &[LearnerEmploymentStatus],
    monitoring: &dyn MonitoringQuery,
) -> bool {
    if !adult_skills_funded(delivery) {
        return false;
    }
    match applicable_status_on(statuses, delivery.learn_start_date) {
        Some(status) => monitoring.has_category_for_status(status, categories::ANY_BENEFIT),
        None => false,
    }
}

/// Adult-skills funded, not employed (or status not known) at the start,
/// and in receipt of other state benefits.
///
/// Gates, in order: fund model 35; applicable status exists with code 11,
/// 12 or 98; that status carries `BSI3`.
pub fn is_adult_funded_unemployed_with_other_state_benefits(
    delivery: &LearningDelivery,
    statuses: &[LearnerEmploymentStatus],
    monitoring: &dyn MonitoringQuery,
) -> bool {
    if !adult_skills_funded(delivery) {
        return false;
    }
    let Some(status) = applicable_status_on(statuses, delivery.learn_start_date) else {
        return false;
    };
    let not_employed = matches!(
        status.emp_stat,
        emp_stat::UNEMPLOYED_SEEKING | emp_stat::UNEMPLOYED_NOT_SEEKING | emp_stat::NOT_KNOWN
    );
    not_employed && monitoring.has_category_for_status(status, categories::OTHER_STATE_BENEFITS)
}

/// Adult-skills funded and unemployed with qualifying benefits at the
/// start.
///
/// Gates, in order: fund model 35; applicable status exists; then either
/// arm of the OR:
/// - status code 11 or 12 AND `BSI1`/`BSI2` (JSA or ESA), or
/// - status code 12 AND `BSI4` (universal credit) AND the delivery carries
///   FAM `LDM` 318 (mandated to skills training).
///
/// The JSA/ESA arm is evaluated first; the FAM lookup only happens when it
/// fails.
pub fn is_adult_funded_unemployed_with_benefits(
    delivery: &LearningDelivery,
    statuses: &[LearnerEmploymentStatus],
    monitoring: &dyn MonitoringQuery,
    fams: &dyn FamQuery,
) -> bool {
    if !adult_skills_funded(delivery) {
        return false;
    }
    let Some(status) = applicable_status_on(statuses, delivery.learn_start_date) else {
        return false;
    };

    let unemployed = matches!(
        status.emp_stat,
        emp_stat::UNEMPLOYED_SEEKING | emp_stat::UNEMPLOYED_NOT_SEEKING
    );
    if unemployed && monitoring.has_category_for_status(status, categories::JSA_OR_ESA) {
        return true;
    }

    status.emp_stat == emp_stat::UNEMPLOYED_NOT_SEEKING
        && monitoring.has_category_for_status(status, categories::UNIVERSAL_CREDIT)
        && mandated_to_skills_training(&delivery.fams, fams)
}

/// Whether a delivery is flagged as mandated to skills training.
fn mandated_to_skills_training(delivery_fams: &[Fam], fams: &dyn FamQuery) -> bool {
    fams.has_code(delivery_fams, fam_type::LDM, ldm::MANDATED_TO_SKILLS_TRAINING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookups::{CodeFamQuery, KeyMonitoringQuery};
    use crate::model::codes::aim_type;

    use std::sync::atomic::{AtomicUsize, Ordering};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_status(d: NaiveDate, code: i32) -> LearnerEmploymentStatus {
        LearnerEmploymentStatus::new(d, code)
    }

    fn make_adult_delivery(start: NaiveDate) -> LearningDelivery {
        LearningDelivery::new(
            "50098765",
            aim_type::COMPONENT,
            1,
            fund_model::ADULT_SKILLS,
            start,
        )
    }

    /// MonitoringQuery stub that counts calls, for asserting gate ordering.
    #[derive(Default)]
    struct CountingMonitoring {
        calls: AtomicUsize,
        inner: KeyMonitoringQuery,
    }

    impl CountingMonitoring {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl MonitoringQuery for CountingMonitoring {
        fn has_category_for_status(
            &self,
            status: &LearnerEmploymentStatus,
            keys: &[&str],
        ) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.has_category_for_status(status, keys)
        }
    }

    // Snapshot selection

    #[test]
    fn test_applicable_status_none_when_all_later() {
        let statuses = vec![make_status(date(2024, 9, 1), 10)];
        assert!(applicable_status_on(&statuses, date(2024, 8, 1)).is_none());
    }

    #[test]
    fn test_applicable_status_empty_collection() {
        assert!(applicable_status_on(&[], date(2024, 8, 1)).is_none());
    }

    #[test]
    fn test_applicable_status_latest_on_or_before_wins() {
        let statuses = vec![
            make_status(date(2024, 1, 1), 10),
            make_status(date(2024, 6, 1), 11),
            make_status(date(2024, 9, 1), 12),
        ];
        let chosen = applicable_status_on(&statuses, date(2024, 8, 1)).unwrap();
        assert_eq!(chosen.emp_stat, 11);
    }

    #[test]
    fn test_applicable_status_boundary_date_counts() {
        let statuses = vec![make_status(date(2024, 8, 1), 11)];
        let chosen = applicable_status_on(&statuses, date(2024, 8, 1)).unwrap();
        assert_eq!(chosen.emp_stat, 11);
    }

    #[test]
    fn test_applicable_status_tie_later_input_entry_wins() {
        // Two statuses effective the same day as the reference date: the
        // declared tie-break is last-by-input-order.
        let statuses = vec![
            make_status(date(2024, 8, 1), 10),
            make_status(date(2024, 8, 1), 11),
        ];
        let chosen = applicable_status_on(&statuses, date(2024, 8, 1)).unwrap();
        assert_eq!(chosen.emp_stat, 11);
    }

    // Composite: on benefits at start

    #[test]
    fn test_on_benefits_at_start_true_with_bsi1() {
        let delivery = make_adult_delivery(date(2024, 8, 1));
        let statuses =
            vec![make_status(date(2024, 8, 1), emp_stat::UNEMPLOYED_SEEKING)
                .with_monitoring("BSI", 1)];
        assert!(is_adult_funded_on_benefits_at_start(
            &delivery,
            &statuses,
            &KeyMonitoringQuery
        ));
    }

    #[test]
    fn test_on_benefits_at_start_false_without_benefit_monitoring() {
        let delivery = make_adult_delivery(date(2024, 8, 1));
        let statuses = vec![
            make_status(date(2024, 8, 1), emp_stat::UNEMPLOYED_SEEKING).with_monitoring("SEI", 1),
        ];
        assert!(!is_adult_funded_on_benefits_at_start(
            &delivery,
            &statuses,
            &KeyMonitoringQuery
        ));
    }

    #[test]
    fn test_on_benefits_at_start_fund_model_gate_short_circuits() {
        let mut delivery = make_adult_delivery(date(2024, 8, 1));
        delivery.fund_model = fund_model::APPRENTICESHIPS;
        let statuses =
            vec![make_status(date(2024, 8, 1), emp_stat::UNEMPLOYED_SEEKING)
                .with_monitoring("BSI", 1)];
        let monitoring = CountingMonitoring::default();
        assert!(!is_adult_funded_on_benefits_at_start(
            &delivery, &statuses, &monitoring
        ));
        // Fund model gate failed first; the lookup service was never asked.
        assert_eq!(monitoring.calls(), 0);
    }

    #[test]
    fn test_on_benefits_at_start_no_applicable_status_short_circuits() {
        let delivery = make_adult_delivery(date(2024, 8, 1));
        let statuses = vec![
            make_status(date(2024, 9, 1), emp_stat::UNEMPLOYED_SEEKING).with_monitoring("BSI", 1),
        ];
        let monitoring = CountingMonitoring::default();
        assert!(!is_adult_funded_on_benefits_at_start(
            &delivery, &statuses, &monitoring
        ));
        assert_eq!(monitoring.calls(), 0);
    }

    // Composite: unemployed with other state benefits

    #[test]
    fn test_other_state_benefits_true_for_bsi3_unemployed() {
        let delivery = make_adult_delivery(date(2024, 8, 1));
        for code in [
            emp_stat::UNEMPLOYED_SEEKING,
            emp_stat::UNEMPLOYED_NOT_SEEKING,
            emp_stat::NOT_KNOWN,
        ] {
            let statuses = vec![make_status(date(2024, 8, 1), code).with_monitoring("BSI", 3)];
            assert!(
                is_adult_funded_unemployed_with_other_state_benefits(
                    &delivery,
                    &statuses,
                    &KeyMonitoringQuery
                ),
                "emp_stat {code} should qualify"
            );
        }
    }

    #[test]
    fn test_other_state_benefits_false_when_employed() {
        let delivery = make_adult_delivery(date(2024, 8, 1));
        let statuses = vec![
            make_status(date(2024, 8, 1), emp_stat::IN_PAID_EMPLOYMENT).with_monitoring("BSI", 3),
        ];
        assert!(!is_adult_funded_unemployed_with_other_state_benefits(
            &delivery,
            &statuses,
            &KeyMonitoringQuery
        ));
    }

    #[test]
    fn test_other_state_benefits_false_for_jsa() {
        let delivery = make_adult_delivery(date(2024, 8, 1));
        let statuses =
            vec![make_status(date(2024, 8, 1), emp_stat::UNEMPLOYED_SEEKING)
                .with_monitoring("BSI", 1)];
        assert!(!is_adult_funded_unemployed_with_other_state_benefits(
            &delivery,
            &statuses,
            &KeyMonitoringQuery
        ));
    }

    // Composite: unemployed with benefits

    #[test]
    fn test_unemployed_with_benefits_jsa_arm() {
        let delivery = make_adult_delivery(date(2024, 8, 1));
        let statuses =
            vec![make_status(date(2024, 8, 1), emp_stat::UNEMPLOYED_SEEKING)
                .with_monitoring("BSI", 2)];
        assert!(is_adult_funded_unemployed_with_benefits(
            &delivery,
            &statuses,
            &KeyMonitoringQuery,
            &CodeFamQuery
        ));
    }

    #[test]
    fn test_unemployed_with_benefits_uc_arm_requires_mandation_fam() {
        let mut delivery = make_adult_delivery(date(2024, 8, 1));
        let statuses = vec![
            make_status(date(2024, 8, 1), emp_stat::UNEMPLOYED_NOT_SEEKING)
                .with_monitoring("BSI", 4),
        ];

        // Without the LDM 318 FAM the universal-credit arm does not fire.
        assert!(!is_adult_funded_unemployed_with_benefits(
            &delivery,
            &statuses,
            &KeyMonitoringQuery,
            &CodeFamQuery
        ));

        delivery.fams.push(Fam::new("LDM", "318"));
        assert!(is_adult_funded_unemployed_with_benefits(
            &delivery,
            &statuses,
            &KeyMonitoringQuery,
            &CodeFamQuery
        ));
    }

    #[test]
    fn test_unemployed_with_benefits_uc_arm_requires_not_seeking() {
        // Universal credit on a code-11 status does not qualify through the
        // UC arm.
        let mut delivery = make_adult_delivery(date(2024, 8, 1));
        delivery.fams.push(Fam::new("LDM", "318"));
        let statuses =
            vec![make_status(date(2024, 8, 1), emp_stat::UNEMPLOYED_SEEKING)
                .with_monitoring("BSI", 4)];
        assert!(!is_adult_funded_unemployed_with_benefits(
            &delivery,
            &statuses,
            &KeyMonitoringQuery,
            &CodeFamQuery
        ));
    }

    #[test]
    fn test_unemployed_with_benefits_jsa_arm_checked_first() {
        // When JSA matches, the UC lookup (and thus the FAM lookup) never
        // happens: exactly one monitoring call.
        let delivery = make_adult_delivery(date(2024, 8, 1));
        let statuses =
            vec![make_status(date(2024, 8, 1), emp_stat::UNEMPLOYED_SEEKING)
                .with_monitoring("BSI", 1)];
        let monitoring = CountingMonitoring::default();
        assert!(is_adult_funded_unemployed_with_benefits(
            &delivery,
            &statuses,
            &monitoring,
            &CodeFamQuery
        ));
        assert_eq!(monitoring.calls(), 1);
    }

    #[test]
    fn test_composites_are_idempotent() {
        let delivery = make_adult_delivery(date(2024, 8, 1));
        let statuses =
            vec![make_status(date(2024, 8, 1), emp_stat::UNEMPLOYED_SEEKING)
                .with_monitoring("BSI", 1)];
        let first = is_adult_funded_on_benefits_at_start(&delivery, &statuses, &KeyMonitoringQuery);
        let second =
            is_adult_funded_on_benefits_at_start(&delivery, &statuses, &KeyMonitoringQuery);
        assert_eq!(first, second);
    }
}
