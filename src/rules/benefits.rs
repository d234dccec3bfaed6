//! Benefits mandation monitoring rule.

use std::sync::Arc;

use crate::derived::employment_status::is_adult_funded_on_benefits_at_start;
use crate::error::Result;
use crate::lookups::{FamQuery, MonitoringQuery};
use crate::model::codes::{fam_type, ldm};
use crate::model::{Fam, Learner, LearnerEmploymentStatus, LearningDelivery};
use crate::rules::sink::{build_parameter, ErrorSink};
use crate::rules::Rule;

/// An adult-skills delivery for a learner on benefits at the start must
/// carry the mandated-to-skills-training monitoring attribute (`LDM` 318).
///
/// Delivery-level: one violation per offending delivery, keyed to its aim
/// sequence number.
pub struct BenefitsLdmRule {
    monitoring: Arc<dyn MonitoringQuery>,
    fams: Arc<dyn FamQuery>,
}

impl BenefitsLdmRule {
    /// Create the rule over the given lookup services.
    pub fn new(monitoring: Arc<dyn MonitoringQuery>, fams: Arc<dyn FamQuery>) -> Self {
        Self { monitoring, fams }
    }

    /// Whether a delivery for a learner on benefits lacks the mandation
    /// attribute.
    pub fn condition_met(
        &self,
        delivery: &LearningDelivery,
        statuses: &[LearnerEmploymentStatus],
        delivery_fams: &[Fam],
    ) -> bool {
        is_adult_funded_on_benefits_at_start(delivery, statuses, self.monitoring.as_ref())
            && !self.fams.has_code(
                delivery_fams,
                fam_type::LDM,
                ldm::MANDATED_TO_SKILLS_TRAINING,
            )
    }
}

impl Rule for BenefitsLdmRule {
    fn name(&self) -> &'static str {
        "BENEFITS_LDM"
    }

    fn validate(&self, learner: &Learner, sink: &mut dyn ErrorSink) -> Result<()> {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(delivery, &learner.employment_statuses, &delivery.fams) {
                sink.handle(
                    self.name(),
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    vec![
                        build_parameter("FundModel", delivery.fund_model),
                        build_parameter("LearnStartDate", delivery.learn_start_date),
                    ],
                );
            }
        }
        Ok(())
    }
}
