//! Negotiated-price aggregation and funding-cap comparison for
//! apprenticeship standards.
//!
//! Standard-funded deliveries are grouped by standard code; each group's
//! total is the sum of the latest-dated training-price and assessment-price
//! records, "latest" by the financial record's own effective date rather
//! than by delivery start date. The cap comparison asks the external cap
//! lookup for the value effective at the group's applicable date and fires
//! when two-thirds of the total exceeds it.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::lookups::CapQuery;
use crate::model::codes::{aim_type, app_fin, fund_model, prog_type};
use crate::model::{AppFinRecord, LearningDelivery};

/// One standard's aggregated negotiated price and cap-lookup date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardGroup {
    /// The apprenticeship standard code.
    pub std_code: i32,
    /// Latest training price plus latest assessment price, in whole pounds.
    pub total: i64,
    /// The date the cap lookup is made against.
    pub applicable_date: NaiveDate,
    /// Aim sequence numbers of the group's deliveries, in input order.
    pub aim_seq_numbers: Vec<i32>,
}

/// Whether a delivery participates in standard funding-cap aggregation:
/// a programme aim, apprenticeship-standard programme type, other-adult
/// fund model and a present standard code.
fn in_cap_scope(delivery: &LearningDelivery) -> bool {
    delivery.aim_type == aim_type::PROGRAMME
        && delivery.prog_type == Some(prog_type::APPRENTICESHIP_STANDARD)
        && delivery.fund_model == fund_model::OTHER_ADULT
        && delivery.std_code.is_some()
}

/// Group in-scope deliveries by standard code and aggregate each group.
///
/// Groups come back in ascending standard-code order, which keeps report
/// output deterministic.
pub fn standard_groups(deliveries: &[LearningDelivery]) -> Vec<StandardGroup> {
    let mut by_standard: BTreeMap<i32, Vec<&LearningDelivery>> = BTreeMap::new();
    for delivery in deliveries.iter().filter(|d| in_cap_scope(d)) {
        // in_cap_scope guarantees std_code is present.
        if let Some(code) = delivery.std_code {
            by_standard.entry(code).or_default().push(delivery);
        }
    }

    by_standard
        .into_iter()
        .map(|(std_code, group)| StandardGroup {
            std_code,
            total: total_negotiated_price(&group),
            applicable_date: applicable_date(&group),
            aim_seq_numbers: group.iter().map(|d| d.aim_seq_number).collect(),
        })
        .collect()
}

/// Sum of the latest training-price and latest assessment-price records
/// across the group. A missing component contributes nothing.
fn total_negotiated_price(group: &[&LearningDelivery]) -> i64 {
    let training = latest_price(group, app_fin::TRAINING_PRICE);
    let assessment = latest_price(group, app_fin::ASSESSMENT_PRICE);
    training.map_or(0, |r| r.a_fin_amount) + assessment.map_or(0, |r| r.a_fin_amount)
}

/// The latest-dated `TNP` record with the given code across the group.
///
/// Ties on the effective date resolve to the record encountered later in
/// input order (deliveries in input order, records in input order within
/// each delivery).
fn latest_price<'a>(group: &[&'a LearningDelivery], code: i32) -> Option<&'a AppFinRecord> {
    let mut latest: Option<&AppFinRecord> = None;
    for delivery in group {
        for record in &delivery.app_fin_records {
            if record.a_fin_type != app_fin::TNP || record.a_fin_code != code {
                continue;
            }
            match latest {
                Some(l) if record.a_fin_date < l.a_fin_date => {}
                _ => latest = Some(record),
            }
        }
    }
    latest
}

/// The date the cap lookup is made against: the group's earliest start
/// date, unless an earlier original start date exists.
fn applicable_date(group: &[&LearningDelivery]) -> NaiveDate {
    // standard_groups never builds an empty group, so min() is always Some.
    let earliest_start = group
        .iter()
        .map(|d| d.learn_start_date)
        .min()
        .unwrap_or_default();
    let earliest_orig = group.iter().filter_map(|d| d.orig_learn_start_date).min();
    match earliest_orig {
        Some(orig) if orig < earliest_start => orig,
        _ => earliest_start,
    }
}

/// Whether two-thirds of the group's total exceeds the published cap.
///
/// No published cap means no violation. The comparison is integer-exact:
/// `total * 2/3 > cap` is evaluated as `2 * total > 3 * cap`.
pub fn exceeds_cap(group: &StandardGroup, caps: &dyn CapQuery) -> bool {
    match caps.cap_for(group.std_code, group.applicable_date) {
        Some(cap) => 2 * group.total > 3 * cap,
        None => false,
    }
}
