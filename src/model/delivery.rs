//! Learning delivery records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::learner::Fam;

/// One funded learning aim undertaken by a learner.
///
/// The `aim_seq_number` is unique within a learner and is the attribution
/// key for delivery-level violations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningDelivery {
    /// Learning aim reference code.
    pub learn_aim_ref: String,

    /// Aim type (programme aim, component aim, ...).
    pub aim_type: i32,

    /// Sequence number, unique within the learner.
    pub aim_seq_number: i32,

    /// Fund model under which this aim is funded.
    pub fund_model: i32,

    /// Programme type, for aims within a programme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prog_type: Option<i32>,

    /// Apprenticeship framework code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fwork_code: Option<i32>,

    /// Apprenticeship pathway code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pway_code: Option<i32>,

    /// Apprenticeship standard code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std_code: Option<i32>,

    /// Start date of the aim.
    pub learn_start_date: NaiveDate,

    /// Original start date, where the aim is a restart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orig_learn_start_date: Option<NaiveDate>,

    /// Planned end date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learn_plan_end_date: Option<NaiveDate>,

    /// Actual end date, once the aim has ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learn_actual_end_date: Option<NaiveDate>,

    /// Completion status code.
    pub comp_status: i32,

    /// Contract reference, where contract-funded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub con_ref_number: Option<String>,

    /// Delivery-level funding and monitoring attributes.
    #[serde(default)]
    pub fams: Vec<Fam>,

    /// Apprenticeship financial records.
    #[serde(default)]
    pub app_fin_records: Vec<AppFinRecord>,
}

impl LearningDelivery {
    /// Create a minimal delivery for the given aim, sequence number, fund
    /// model and start date. Optional fields start absent.
    pub fn new(
        learn_aim_ref: impl Into<String>,
        aim_type: i32,
        aim_seq_number: i32,
        fund_model: i32,
        learn_start_date: NaiveDate,
    ) -> Self {
        Self {
            learn_aim_ref: learn_aim_ref.into(),
            aim_type,
            aim_seq_number,
            fund_model,
            prog_type: None,
            fwork_code: None,
            pway_code: None,
            std_code: None,
            learn_start_date,
            orig_learn_start_date: None,
            learn_plan_end_date: None,
            learn_actual_end_date: None,
            comp_status: 1,
            con_ref_number: None,
            fams: Vec::new(),
            app_fin_records: Vec::new(),
        }
    }
}

/// An apprenticeship financial record attached to a delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppFinRecord {
    /// Financial record type, e.g. `TNP`.
    pub a_fin_type: String,
    /// Financial record code within the type.
    pub a_fin_code: i32,
    /// Amount in whole pounds.
    pub a_fin_amount: i64,
    /// Date the record took effect.
    pub a_fin_date: NaiveDate,
}

impl AppFinRecord {
    /// Create a financial record.
    pub fn new(
        a_fin_type: impl Into<String>,
        a_fin_code: i32,
        a_fin_amount: i64,
        a_fin_date: NaiveDate,
    ) -> Self {
        Self {
            a_fin_type: a_fin_type.into(),
            a_fin_code,
            a_fin_amount,
            a_fin_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_missing_collections_deserialize_empty() {
        let json = r#"{
            "learn_aim_ref": "50098765",
            "aim_type": 1,
            "aim_seq_number": 1,
            "fund_model": 35,
            "learn_start_date": "2024-08-01",
            "comp_status": 1
        }"#;
        let delivery: LearningDelivery = serde_json::from_str(json).unwrap();
        assert!(delivery.fams.is_empty());
        assert!(delivery.app_fin_records.is_empty());
        assert!(delivery.prog_type.is_none());
        assert_eq!(delivery.learn_start_date, date(2024, 8, 1));
    }

    #[test]
    fn test_app_fin_record_round_trip() {
        let rec = AppFinRecord::new("TNP", 1, 12000, date(2024, 9, 1));
        let json = serde_json::to_string(&rec).unwrap();
        let back: AppFinRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, back);
    }
}
