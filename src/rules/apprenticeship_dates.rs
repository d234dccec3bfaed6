//! Apprenticeship component start-date rule.

use chrono::NaiveDate;

use crate::derived::apprenticeship::is_apprenticeship;
use crate::derived::temporal::{earliest_start, DeliveryFilter};
use crate::error::Result;
use crate::model::codes::aim_type;
use crate::model::Learner;
use crate::rules::sink::{build_parameter, ErrorSink};
use crate::rules::Rule;

/// An apprenticeship component aim must not start before the earliest
/// programme aim with the same programme key.
///
/// The programme key is the full (programme type, framework, pathway,
/// standard) tuple of the component, with absent fields matching absent
/// fields: a component with no framework code belongs to the programme aim
/// with no framework code.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApprComponentStartRule;

impl ApprComponentStartRule {
    /// Whether a component start date falls before its programme's start.
    ///
    /// No matching programme aim means no violation; a different rule owns
    /// orphaned components.
    pub fn condition_met(
        &self,
        component_start: NaiveDate,
        programme_start: Option<NaiveDate>,
    ) -> bool {
        match programme_start {
            Some(start) => component_start < start,
            None => false,
        }
    }
}

impl Rule for ApprComponentStartRule {
    fn name(&self) -> &'static str {
        "APPR_COMPONENT_START"
    }

    fn validate(&self, learner: &Learner, sink: &mut dyn ErrorSink) -> Result<()> {
        for delivery in &learner.learning_deliveries {
            if delivery.aim_type != aim_type::COMPONENT || !is_apprenticeship(delivery.prog_type) {
                continue;
            }
            let filter =
                DeliveryFilter::programme_key_of(delivery).with_aim_type(aim_type::PROGRAMME);
            let programme_start = earliest_start(&learner.learning_deliveries, &filter);

            if self.condition_met(delivery.learn_start_date, programme_start) {
                // condition_met is only true when a programme start exists.
                let start = programme_start.unwrap_or(delivery.learn_start_date);
                sink.handle(
                    self.name(),
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    vec![
                        build_parameter("LearnStartDate", delivery.learn_start_date),
                        build_parameter("ProgrammeStartDate", start),
                    ],
                );
            }
        }
        Ok(())
    }
}
