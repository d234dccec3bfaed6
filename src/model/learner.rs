//! The learner record graph.
//!
//! One [`Learner`] is the root of the record graph handed to every rule's
//! `validate`. The graph is built by an external parser, is never mutated
//! during a validation pass, and is dropped when the pass completes.
//!
//! Absent collections and empty collections are the same thing everywhere in
//! the core. Serde defaults enforce that at the boundary: a missing array in
//! the input deserializes to an empty `Vec`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::delivery::LearningDelivery;
use super::employment::LearnerEmploymentStatus;

/// A funding or monitoring attribute attached to a learner or a delivery.
///
/// The `(fam_type, code)` pair is the whole payload; the type draws from a
/// short fixed vocabulary (see [`codes::fam_type`]) and the code's meaning
/// depends on the type.
///
/// [`codes::fam_type`]: crate::model::codes::fam_type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fam {
    /// Attribute type, e.g. `LDM`.
    pub fam_type: String,
    /// Attribute code; numeric or string depending on the type, carried
    /// verbatim as a string.
    pub code: String,
}

impl Fam {
    /// Create a FAM from a type and code.
    pub fn new(fam_type: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            fam_type: fam_type.into(),
            code: code.into(),
        }
    }
}

/// The root record for one learner's funded-learning history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Learner {
    /// Provider-scoped learner reference; the attribution key for every
    /// reported violation.
    pub learn_ref_number: String,

    /// Unique learner number, when known. Ten digits; validated by the
    /// checksum engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uln: Option<u64>,

    /// Date of birth, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,

    /// Prior attainment level code, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prior_attain: Option<i32>,

    /// Learning deliveries, in input order.
    #[serde(default)]
    pub learning_deliveries: Vec<LearningDelivery>,

    /// Employment status history, in input order.
    #[serde(default)]
    pub employment_statuses: Vec<LearnerEmploymentStatus>,

    /// Learner-level funding and monitoring attributes.
    #[serde(default)]
    pub learner_fams: Vec<Fam>,
}

impl Learner {
    /// Create a learner with the given reference and no nested records.
    pub fn new(learn_ref_number: impl Into<String>) -> Self {
        Self {
            learn_ref_number: learn_ref_number.into(),
            uln: None,
            date_of_birth: None,
            prior_attain: None,
            learning_deliveries: Vec::new(),
            employment_statuses: Vec::new(),
            learner_fams: Vec::new(),
        }
    }
}
