//! Employment status history records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One snapshot of a learner's employment status, effective from a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerEmploymentStatus {
    /// Date this status applies from.
    pub date_emp_stat_app: NaiveDate,

    /// Employment status code (see [`codes::emp_stat`]).
    ///
    /// [`codes::emp_stat`]: crate::model::codes::emp_stat
    pub emp_stat: i32,

    /// Employer identifier, where employed. Nine digits: eight data digits
    /// followed by a check digit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emp_id: Option<u64>,

    /// Monitoring attributes attached to this status, in input order.
    #[serde(default)]
    pub monitorings: Vec<EmploymentStatusMonitoring>,
}

impl LearnerEmploymentStatus {
    /// Create a status snapshot with no monitorings.
    pub fn new(date_emp_stat_app: NaiveDate, emp_stat: i32) -> Self {
        Self {
            date_emp_stat_app,
            emp_stat,
            emp_id: None,
            monitorings: Vec::new(),
        }
    }

    /// Add a monitoring record, builder-style.
    pub fn with_monitoring(mut self, esm_type: impl Into<String>, esm_code: i32) -> Self {
        self.monitorings
            .push(EmploymentStatusMonitoring::new(esm_type, esm_code));
        self
    }
}

/// A monitoring attribute on an employment status.
///
/// The concatenation of type and code (e.g. `BSI1`) is the lookup key into
/// the fixed categorical sets used by the employment-status classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentStatusMonitoring {
    /// Monitoring type, e.g. `BSI`.
    pub esm_type: String,
    /// Monitoring code within the type.
    pub esm_code: i32,
}

impl EmploymentStatusMonitoring {
    /// Create a monitoring record.
    pub fn new(esm_type: impl Into<String>, esm_code: i32) -> Self {
        Self {
            esm_type: esm_type.into(),
            esm_code,
        }
    }

    /// The concatenated `TYPE` + code lookup key, e.g. `BSI1`.
    pub fn key(&self) -> String {
        format!("{}{}", self.esm_type, self.esm_code)
    }
}
