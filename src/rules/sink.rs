//! Violation reporting.
//!
//! Rules report through [`ErrorSink`], one call per violating item. The
//! sink contract is deliberately narrow: no return value, must not fail for
//! well-formed input, and the call order is the report order. Everything
//! downstream (message catalogs, localization, persistence) belongs to
//! the consumer of the sink.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A named message parameter built from a violating item's field values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Field name, e.g. `ULN`.
    pub name: String,
    /// Field value, rendered to a string.
    pub value: String,
}

/// Build a message parameter from a field name and value.
pub fn build_parameter(name: impl Into<String>, value: impl Display) -> Parameter {
    Parameter {
        name: name.into(),
        value: value.to_string(),
    }
}

/// Build a message parameter from an optional value, rendering absence as
/// an empty string.
pub fn build_optional_parameter<T: Display>(name: impl Into<String>, value: Option<T>) -> Parameter {
    Parameter {
        name: name.into(),
        value: value.map(|v| v.to_string()).unwrap_or_default(),
    }
}

/// Receives one call per rule violation.
pub trait ErrorSink {
    /// Report a violation.
    ///
    /// `aim_seq_number` is the attribution key for delivery-level rules and
    /// `None` for learner-level rules.
    fn handle(
        &mut self,
        rule_name: &str,
        learn_ref_number: &str,
        aim_seq_number: Option<i32>,
        parameters: Vec<Parameter>,
    );
}

/// One reported violation, as collected by [`CollectingSink`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Stable rule identifier.
    pub rule_name: String,
    /// Learner the violation is attributed to.
    pub learn_ref_number: String,
    /// Delivery attribution key, absent for learner-level rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aim_seq_number: Option<i32>,
    /// Named message parameters.
    pub parameters: Vec<Parameter>,
}

/// An [`ErrorSink`] that accumulates violations in call order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectingSink {
    violations: Vec<Violation>,
}

impl CollectingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The collected violations, in report order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Number of collected violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Whether nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Consume the sink, yielding the collected violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl ErrorSink for CollectingSink {
    fn handle(
        &mut self,
        rule_name: &str,
        learn_ref_number: &str,
        aim_seq_number: Option<i32>,
        parameters: Vec<Parameter>,
    ) {
        self.violations.push(Violation {
            rule_name: rule_name.to_string(),
            learn_ref_number: learn_ref_number.to_string(),
            aim_seq_number,
            parameters,
        });
    }
}
