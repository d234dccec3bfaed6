//! The derived-fact computation layer.
//!
//! Everything here is a pure function over its arguments (plus opaque
//! synchronous calls into the query collaborators). Dozens of rules consume
//! the same derived facts; centralizing them is what keeps compliance
//! decisions consistent: two rules asking "is this learner on benefits at
//! the start of this delivery" must always get the same answer.
//!
//! No function in this module reports a business-rule violation. They
//! return computed values (`Option`, `bool`, aggregates) and leave the
//! firing decision to the calling rule.

pub mod apprenticeship;
pub mod checksum;
pub mod employment_status;
pub mod funding_cap;
pub mod organisation;
pub mod temporal;

pub use apprenticeship::{is_apprenticeship, APPRENTICESHIP_PROG_TYPES};
pub use checksum::{
    employer_check_digit, learner_check_digit, validates_employer_number,
    validates_learner_number, CheckVerdict, TEMPORARY_ULN,
};
pub use employment_status::{
    applicable_status_on, categories, is_adult_funded_on_benefits_at_start,
    is_adult_funded_unemployed_with_benefits,
    is_adult_funded_unemployed_with_other_state_benefits,
};
pub use funding_cap::{exceeds_cap, standard_groups, StandardGroup};
pub use organisation::{is_college_or_grant_funded, COLLEGE_OR_GRANT_FUNDED_TYPES};
pub use temporal::{earliest_start, latest_planned_end, DeliveryFilter, FieldMatch};
