//! In-memory collaborator implementations.
//!
//! The pure lookups ([`CodeFamQuery`], [`KeyMonitoringQuery`]) are the real
//! production implementations: they only ever read the records passed to
//! them. The table-backed lookups ([`InMemoryCapTable`],
//! [`InMemoryOrgDirectory`]) load reference data from TOML files and stand
//! in for the external catalog services; the CLI and tests use them.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{IlrError, Result};
use crate::lookups::traits::{CapQuery, FamQuery, MonitoringQuery, OrgQuery};
use crate::model::{Fam, LearnerEmploymentStatus};

/// Exact string matching over FAM collections.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeFamQuery;

impl FamQuery for CodeFamQuery {
    fn has_code(&self, fams: &[Fam], fam_type: &str, code: &str) -> bool {
        fams.iter()
            .any(|f| f.fam_type == fam_type && f.code == code)
    }

    fn has_type(&self, fams: &[Fam], fam_type: &str) -> bool {
        fams.iter().any(|f| f.fam_type == fam_type)
    }
}

/// Concatenated-key matching over employment status monitorings.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMonitoringQuery;

impl MonitoringQuery for KeyMonitoringQuery {
    fn has_category_for_status(&self, status: &LearnerEmploymentStatus, keys: &[&str]) -> bool {
        status
            .monitorings
            .iter()
            .any(|m| keys.contains(&m.key().as_str()))
    }
}

/// One published cap for an apprenticeship standard over an effective range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapEntry {
    /// The standard code the cap applies to.
    pub std_code: i32,
    /// The cap in whole pounds.
    pub cap: i64,
    /// First date the cap is effective.
    pub effective_from: NaiveDate,
    /// Last date the cap is effective; open-ended when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_to: Option<NaiveDate>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CapFile {
    #[serde(default, rename = "cap")]
    caps: Vec<CapEntry>,
}

/// A funding-cap table loaded from a TOML file of `[[cap]]` entries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCapTable {
    entries: Vec<CapEntry>,
}

impl InMemoryCapTable {
    /// An empty table: every lookup returns `None`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from explicit entries.
    pub fn from_entries(entries: Vec<CapEntry>) -> Self {
        Self { entries }
    }

    /// Parse a table from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: CapFile =
            toml::from_str(text).map_err(|e| IlrError::serde(e.to_string()))?;
        Ok(Self { entries: file.caps })
    }

    /// Load a table from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| IlrError::storage(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Number of cap entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CapQuery for InMemoryCapTable {
    fn cap_for(&self, std_code: i32, on: NaiveDate) -> Option<i64> {
        // Where ranges overlap, the most recently effective entry wins.
        self.entries
            .iter()
            .filter(|e| {
                e.std_code == std_code
                    && e.effective_from <= on
                    && e.effective_to.is_none_or(|to| on <= to)
            })
            .max_by_key(|e| e.effective_from)
            .map(|e| e.cap)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct OrgFile {
    #[serde(default, rename = "provider")]
    providers: Vec<OrgEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OrgEntry {
    ukprn: u64,
    legal_org_type: String,
}

/// An organisation directory loaded from a TOML file of `[[provider]]`
/// entries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrgDirectory {
    by_ukprn: HashMap<u64, String>,
}

impl InMemoryOrgDirectory {
    /// Build a directory from explicit (ukprn, legal org type) pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u64, String)>) -> Self {
        Self {
            by_ukprn: pairs.into_iter().collect(),
        }
    }

    /// Parse a directory from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: OrgFile =
            toml::from_str(text).map_err(|e| IlrError::serde(e.to_string()))?;
        Ok(Self::from_pairs(
            file.providers
                .into_iter()
                .map(|p| (p.ukprn, p.legal_org_type)),
        ))
    }

    /// Load a directory from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| IlrError::storage(path, e))?;
        Self::from_toml_str(&text)
    }
}

impl OrgQuery for InMemoryOrgDirectory {
    fn legal_org_type_for(&self, ukprn: u64) -> Option<String> {
        self.by_ukprn.get(&ukprn).cloned()
    }
}

/// An organisation lookup with no data; every provider is unknown.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOrgData;

impl OrgQuery for NoOrgData {
    fn legal_org_type_for(&self, _ukprn: u64) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fam_query_matches_type_and_code() {
        let fams = vec![Fam::new("LDM", "318"), Fam::new("SOF", "105")];
        let q = CodeFamQuery;
        assert!(q.has_code(&fams, "LDM", "318"));
        assert!(!q.has_code(&fams, "LDM", "319"));
        assert!(q.has_type(&fams, "SOF"));
        assert!(!q.has_type(&fams, "RES"));
    }

    #[test]
    fn test_fam_query_empty_collection() {
        let q = CodeFamQuery;
        assert!(!q.has_code(&[], "LDM", "318"));
        assert!(!q.has_type(&[], "LDM"));
    }

    #[test]
    fn test_monitoring_query_matches_concatenated_key() {
        let status = LearnerEmploymentStatus::new(date(2024, 8, 1), 11)
            .with_monitoring("BSI", 1)
            .with_monitoring("LOU", 3);
        let q = KeyMonitoringQuery;
        assert!(q.has_category_for_status(&status, &["BSI1", "BSI2"]));
        assert!(q.has_category_for_status(&status, &["LOU3"]));
        assert!(!q.has_category_for_status(&status, &["BSI2", "SEI1"]));
        assert!(!q.has_category_for_status(&status, &[]));
    }

    #[test]
    fn test_cap_table_from_toml() {
        let table = InMemoryCapTable::from_toml_str(
            r#"
            [[cap]]
            std_code = 7
            cap = 150
            effective_from = "2024-05-01"
            effective_to = "2025-04-30"

            [[cap]]
            std_code = 7
            cap = 180
            effective_from = "2025-05-01"
            "#,
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.cap_for(7, date(2024, 6, 1)), Some(150));
        assert_eq!(table.cap_for(7, date(2025, 6, 1)), Some(180));
        // Before any effective range.
        assert_eq!(table.cap_for(7, date(2024, 4, 30)), None);
        // Unknown standard.
        assert_eq!(table.cap_for(99, date(2024, 6, 1)), None);
    }

    #[test]
    fn test_cap_table_overlapping_ranges_latest_wins() {
        let table = InMemoryCapTable::from_entries(vec![
            CapEntry {
                std_code: 7,
                cap: 100,
                effective_from: date(2024, 1, 1),
                effective_to: None,
            },
            CapEntry {
                std_code: 7,
                cap: 120,
                effective_from: date(2024, 6, 1),
                effective_to: None,
            },
        ]);
        assert_eq!(table.cap_for(7, date(2024, 3, 1)), Some(100));
        assert_eq!(table.cap_for(7, date(2024, 7, 1)), Some(120));
    }

    #[test]
    fn test_cap_table_boundary_dates_inclusive() {
        let table = InMemoryCapTable::from_entries(vec![CapEntry {
            std_code: 3,
            cap: 200,
            effective_from: date(2024, 5, 1),
            effective_to: Some(date(2025, 4, 30)),
        }]);
        assert_eq!(table.cap_for(3, date(2024, 5, 1)), Some(200));
        assert_eq!(table.cap_for(3, date(2025, 4, 30)), Some(200));
        assert_eq!(table.cap_for(3, date(2025, 5, 1)), None);
    }

    #[test]
    fn test_empty_cap_table() {
        assert_eq!(InMemoryCapTable::empty().cap_for(1, date(2024, 1, 1)), None);
        assert!(InMemoryCapTable::empty().is_empty());
    }

    #[test]
    fn test_org_directory_from_toml() {
        let dir = InMemoryOrgDirectory::from_toml_str(
            r#"
            [[provider]]
            ukprn = 10001234
            legal_org_type = "UGFE"
            "#,
        )
        .unwrap();
        assert_eq!(dir.legal_org_type_for(10001234), Some("UGFE".to_string()));
        assert_eq!(dir.legal_org_type_for(10009999), None);
    }

    #[test]
    fn test_no_org_data_always_none() {
        assert_eq!(NoOrgData.legal_org_type_for(10001234), None);
    }

    #[test]
    fn test_cap_table_rejects_bad_toml() {
        assert!(InMemoryCapTable::from_toml_str("[[cap]]\nstd_code = \"x\"").is_err());
    }
}
