//! Query collaborators consumed by the derived-fact layer.
//!
//! Traits in [`traits`], in-memory implementations in [`memory`]. The
//! reference-data services behind [`CapQuery`] and [`OrgQuery`] are external
//! systems in production; the in-memory tables here back the CLI and tests.

pub mod memory;
pub mod traits;

pub use memory::{
    CapEntry, CodeFamQuery, InMemoryCapTable, InMemoryOrgDirectory, KeyMonitoringQuery, NoOrgData,
};
pub use traits::{CapQuery, FamQuery, MonitoringQuery, OrgQuery};
