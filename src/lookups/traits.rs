//! Collaborator interfaces consumed by the derived-fact layer.
//!
//! These are the query services the core depends on but does not own:
//! FAM lookups, employment-status-monitoring lookups, funding-cap lookups
//! and organisation data. The shared contract across all of them is that
//! **absent means "no data", never "error"**: a missing cap or an unknown
//! provider returns `None`/`false` and the calling rule decides what that
//! means.
//!
//! If an implementation memoizes an expensive backing call, the cache is
//! its own concern; the core treats every call as a pure synchronous query.

use chrono::NaiveDate;

use crate::model::{Fam, LearnerEmploymentStatus};

/// Lookup over a collection of funding/monitoring attributes.
pub trait FamQuery: Send + Sync {
    /// Whether any FAM has the given type and code.
    fn has_code(&self, fams: &[Fam], fam_type: &str, code: &str) -> bool;

    /// Whether any FAM has the given type, regardless of code.
    fn has_type(&self, fams: &[Fam], fam_type: &str) -> bool;
}

/// Lookup over an employment status's monitoring records.
pub trait MonitoringQuery: Send + Sync {
    /// Whether the status carries any monitoring record whose concatenated
    /// `TYPE` + code key is in `keys`.
    fn has_category_for_status(&self, status: &LearnerEmploymentStatus, keys: &[&str]) -> bool;
}

/// Funding-cap reference data for apprenticeship standards.
pub trait CapQuery: Send + Sync {
    /// The cap in whole pounds for a standard, effective on the given date.
    ///
    /// `None` means no cap is published for that standard and date.
    fn cap_for(&self, std_code: i32, on: NaiveDate) -> Option<i64>;
}

/// Organisation reference data.
pub trait OrgQuery: Send + Sync {
    /// The legal organisation type for a provider, when the provider is
    /// known.
    fn legal_org_type_for(&self, ukprn: u64) -> Option<String>;
}
