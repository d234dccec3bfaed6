//! Prior-attainment reporting rule for college providers.

use std::sync::Arc;

use crate::derived::organisation::is_college_or_grant_funded;
use crate::error::Result;
use crate::lookups::OrgQuery;
use crate::model::Learner;
use crate::rules::sink::{build_parameter, ErrorSink};
use crate::rules::Rule;

/// A college or grant-funded provider must report each learner's prior
/// attainment level.
///
/// Learner-level. The prior-attainment gate runs first; the organisation
/// lookup only happens for learners that would otherwise violate. An
/// unknown provider (no legal org type on record) is out of scope, not a
/// violation.
pub struct PriorAttainOrgRule {
    orgs: Arc<dyn OrgQuery>,
    ukprn: u64,
}

impl PriorAttainOrgRule {
    /// Create the rule for the given provider over the organisation lookup.
    pub fn new(orgs: Arc<dyn OrgQuery>, ukprn: u64) -> Self {
        Self { orgs, ukprn }
    }

    /// Whether a missing prior attainment violates for this provider.
    pub fn condition_met(&self, prior_attain: Option<i32>) -> bool {
        if prior_attain.is_some() {
            return false;
        }
        match self.orgs.legal_org_type_for(self.ukprn) {
            Some(org_type) => is_college_or_grant_funded(&org_type),
            None => false,
        }
    }
}

impl Rule for PriorAttainOrgRule {
    fn name(&self) -> &'static str {
        "PRIOR_ATTAIN_ORG"
    }

    fn validate(&self, learner: &Learner, sink: &mut dyn ErrorSink) -> Result<()> {
        if self.condition_met(learner.prior_attain) {
            sink.handle(
                self.name(),
                &learner.learn_ref_number,
                None,
                vec![build_parameter("UKPRN", self.ukprn)],
            );
        }
        Ok(())
    }
}
