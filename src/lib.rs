//! ilrcheck - Derived-fact validation engine for learner funding records
//!
//! ilrcheck validates learner records against regulatory funding rules. The
//! heart of the crate is the derived-fact layer in [`derived`]: checksums,
//! temporal aggregates, employment-status classification and funding-cap
//! comparison are computed in exactly one place so that every rule that
//! consumes them reaches the same compliance decision. Rules implement the
//! small [`rules::Rule`] contract and report violations through
//! [`rules::ErrorSink`]; the [`engine::Validator`] applies a rule set to a
//! batch of learners.

pub mod cli;
pub mod config;
pub mod derived;
pub mod engine;
pub mod error;
pub mod lookups;
pub mod model;
pub mod rules;
pub mod util;

pub use config::Config;
pub use derived::{
    applicable_status_on, earliest_start, employer_check_digit, exceeds_cap, is_apprenticeship,
    is_college_or_grant_funded, latest_planned_end, learner_check_digit, standard_groups,
    validates_employer_number, validates_learner_number, CheckVerdict, DeliveryFilter, FieldMatch,
    StandardGroup, TEMPORARY_ULN,
};
pub use engine::{Services, Validator};
pub use error::{IlrError, Result};
pub use lookups::{
    CapQuery, CodeFamQuery, FamQuery, InMemoryCapTable, InMemoryOrgDirectory, KeyMonitoringQuery,
    MonitoringQuery, NoOrgData, OrgQuery,
};
pub use model::{
    AppFinRecord, EmploymentStatusMonitoring, Fam, Learner, LearnerEmploymentStatus,
    LearningDelivery,
};
pub use rules::{
    build_optional_parameter, build_parameter, CollectingSink, ErrorSink, Parameter, Rule,
    Violation,
};

// CLI commands
pub use cli::{
    CheckUlnCommand, RulesCommand, ValidateCommand, ValidateOptions, ValidateOutput,
};
