//! The rule contract and the built-in rule set.
//!
//! Every validation rule is a stateless unit implementing [`Rule`]: a
//! stable name, a pure `condition_met` predicate over extracted arguments
//! (an inherent method on each rule, kept off the trait so signatures can
//! differ), and `validate`, which walks the relevant record collection and
//! makes one [`ErrorSink`] call per violating item.
//!
//! Rules never mutate the record graph and never observe each other's
//! output, so they are independent and order-insensitive; the engine runs
//! them in registration order purely to keep reports deterministic.

pub mod apprenticeship_dates;
pub mod benefits;
pub mod employer;
pub mod provider;
pub mod sink;
pub mod standard_cap;
pub mod uln;

pub use apprenticeship_dates::ApprComponentStartRule;
pub use benefits::BenefitsLdmRule;
pub use employer::EmployerIdChecksumRule;
pub use provider::PriorAttainOrgRule;
pub use sink::{
    build_optional_parameter, build_parameter, CollectingSink, ErrorSink, Parameter, Violation,
};
pub use standard_cap::StandardFundingCapRule;
pub use uln::UlnChecksumRule;

use crate::error::Result;
use crate::model::Learner;

/// A validation rule.
///
/// Implementations must be `Send + Sync`: rules hold no mutable state and
/// may be applied to different learners concurrently.
pub trait Rule: Send + Sync {
    /// Stable rule identifier, used in reports and config overrides.
    fn name(&self) -> &'static str;

    /// Validate one learner, reporting each violation through the sink.
    ///
    /// Returns a contract error only for malformed input; business-rule
    /// violations go through the sink and iteration continues for all
    /// remaining items.
    fn validate(&self, learner: &Learner, sink: &mut dyn ErrorSink) -> Result<()>;
}
