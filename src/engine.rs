//! Rule registration and batch execution plumbing.
//!
//! The orchestration here stays thin: hand each learner to every
//! registered rule, in registration order, collecting violations through
//! one sink. There is no cross-rule state and no suspension point, so a
//! caller that wants parallelism can split a batch at learner granularity
//! (preserving per-learner error ordering) without any locking.

use std::sync::Arc;

use crate::config::RulesConfig;
use crate::error::Result;
use crate::lookups::{CapQuery, FamQuery, MonitoringQuery, OrgQuery};
use crate::model::Learner;
use crate::rules::{
    ApprComponentStartRule, BenefitsLdmRule, EmployerIdChecksumRule, ErrorSink, PriorAttainOrgRule,
    Rule, StandardFundingCapRule, UlnChecksumRule,
};

/// The query collaborators the built-in rule set depends on.
#[derive(Clone)]
pub struct Services {
    /// FAM lookups (pure, over passed collections).
    pub fams: Arc<dyn FamQuery>,
    /// Employment-status-monitoring lookups (pure).
    pub monitoring: Arc<dyn MonitoringQuery>,
    /// Funding-cap reference data.
    pub caps: Arc<dyn CapQuery>,
    /// Organisation reference data.
    pub orgs: Arc<dyn OrgQuery>,
    /// The validating provider's UKPRN, for provider-scoped rules.
    pub ukprn: Option<u64>,
}

/// Applies a set of rules to learners.
pub struct Validator {
    rules: Vec<Box<dyn Rule>>,
}

impl Validator {
    /// Create a validator over an explicit rule set.
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Create a validator with the built-in rule set, honouring per-rule
    /// config overrides.
    ///
    /// Provider-scoped rules are only registered when a UKPRN is known.
    pub fn standard(services: Services, config: &RulesConfig) -> Self {
        let mut rules: Vec<Box<dyn Rule>> = vec![
            Box::new(UlnChecksumRule),
            Box::new(EmployerIdChecksumRule),
            Box::new(ApprComponentStartRule),
            Box::new(BenefitsLdmRule::new(
                Arc::clone(&services.monitoring),
                Arc::clone(&services.fams),
            )),
            Box::new(StandardFundingCapRule::new(Arc::clone(&services.caps))),
        ];
        if let Some(ukprn) = services.ukprn {
            rules.push(Box::new(PriorAttainOrgRule::new(
                Arc::clone(&services.orgs),
                ukprn,
            )));
        }
        rules.retain(|r| config.is_enabled(r.name()));
        Self::new(rules)
    }

    /// Names of the registered rules, in execution order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Validate one learner against every registered rule.
    pub fn validate(&self, learner: &Learner, sink: &mut dyn ErrorSink) -> Result<()> {
        for rule in &self.rules {
            rule.validate(learner, sink)?;
        }
        Ok(())
    }

    /// Validate a batch of learners, in order.
    pub fn validate_batch(&self, learners: &[Learner], sink: &mut dyn ErrorSink) -> Result<()> {
        for learner in learners {
            self.validate(learner, sink)?;
        }
        Ok(())
    }
}
