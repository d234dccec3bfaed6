//! Earliest/latest date lookups over filtered delivery subsets.
//!
//! Many rules need "the programme start date for this framework" or "the
//! latest planned end date for this standard". They all go through the same
//! filter-then-reduce here so that the matching semantics cannot drift
//! between rules.
//!
//! The subtle part is optional key fields: a filter that pins
//! `fwork_code` to `None` matches exactly the deliveries whose framework
//! code is absent. Absent equals absent, by explicit comparison, not by
//! whatever the default equality of the host type happens to do.

use chrono::NaiveDate;

use crate::model::LearningDelivery;

/// A single-field match criterion.
///
/// `Eq(None)` is a real constraint: it matches only deliveries where the
/// field is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMatch<T> {
    /// Field is not part of the key.
    #[default]
    Any,
    /// Field must equal the given value, where `None` means "must be absent".
    Eq(Option<T>),
}

impl<T: PartialEq + Copy> FieldMatch<T> {
    /// Whether a delivery's field value satisfies this criterion.
    pub fn matches(&self, actual: Option<T>) -> bool {
        match self {
            Self::Any => true,
            Self::Eq(expected) => *expected == actual,
        }
    }
}

/// An exact-match key over any subset of a delivery's classification fields.
///
/// Built with the `with_*` methods; unset fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryFilter {
    aim_type: FieldMatch<i32>,
    prog_type: FieldMatch<i32>,
    fwork_code: FieldMatch<i32>,
    pway_code: FieldMatch<i32>,
    std_code: FieldMatch<i32>,
}

impl DeliveryFilter {
    /// A filter that matches every delivery.
    pub fn any() -> Self {
        Self::default()
    }

    /// Pin the aim type. Aim type is never absent, so this takes a plain
    /// value.
    pub fn with_aim_type(mut self, aim_type: i32) -> Self {
        self.aim_type = FieldMatch::Eq(Some(aim_type));
        self
    }

    /// Pin the programme type, including "must be absent" via `None`.
    pub fn with_prog_type(mut self, prog_type: Option<i32>) -> Self {
        self.prog_type = FieldMatch::Eq(prog_type);
        self
    }

    /// Pin the framework code, including "must be absent" via `None`.
    pub fn with_fwork_code(mut self, fwork_code: Option<i32>) -> Self {
        self.fwork_code = FieldMatch::Eq(fwork_code);
        self
    }

    /// Pin the pathway code, including "must be absent" via `None`.
    pub fn with_pway_code(mut self, pway_code: Option<i32>) -> Self {
        self.pway_code = FieldMatch::Eq(pway_code);
        self
    }

    /// Pin the standard code, including "must be absent" via `None`.
    pub fn with_std_code(mut self, std_code: Option<i32>) -> Self {
        self.std_code = FieldMatch::Eq(std_code);
        self
    }

    /// The full programme key of an existing delivery (programme type,
    /// framework, pathway, standard), as used to find sibling aims of the
    /// same programme.
    pub fn programme_key_of(delivery: &LearningDelivery) -> Self {
        Self::any()
            .with_prog_type(delivery.prog_type)
            .with_fwork_code(delivery.fwork_code)
            .with_pway_code(delivery.pway_code)
            .with_std_code(delivery.std_code)
    }

    /// Whether a delivery satisfies every pinned field.
    pub fn matches(&self, delivery: &LearningDelivery) -> bool {
        self.aim_type.matches(Some(delivery.aim_type))
            && self.prog_type.matches(delivery.prog_type)
            && self.fwork_code.matches(delivery.fwork_code)
            && self.pway_code.matches(delivery.pway_code)
            && self.std_code.matches(delivery.std_code)
    }
}

/// Earliest start date among deliveries matching the filter.
///
/// Returns `None` when nothing matches; an empty collection is not an
/// error.
pub fn earliest_start(
    deliveries: &[LearningDelivery],
    filter: &DeliveryFilter,
) -> Option<NaiveDate> {
    deliveries
        .iter()
        .filter(|d| filter.matches(d))
        .map(|d| d.learn_start_date)
        .min()
}

/// Latest planned end date among deliveries matching the filter.
///
/// Deliveries without a planned end date are skipped; returns `None` when
/// no matching delivery has one.
pub fn latest_planned_end(
    deliveries: &[LearningDelivery],
    filter: &DeliveryFilter,
) -> Option<NaiveDate> {
    deliveries
        .iter()
        .filter(|d| filter.matches(d))
        .filter_map(|d| d.learn_plan_end_date)
        .max()
}
