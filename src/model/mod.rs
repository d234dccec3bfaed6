//! The record graph: one learner and its nested collections.
//!
//! These types are leaf data. Everything with behaviour lives in
//! [`crate::derived`] and [`crate::rules`]; the model only carries fields,
//! serde derives and small constructors used by tests and the CLI loader.

pub mod codes;
pub mod delivery;
pub mod employment;
pub mod learner;

pub use delivery::{AppFinRecord, LearningDelivery};
pub use employment::{EmploymentStatusMonitoring, LearnerEmploymentStatus};
pub use learner::{Fam, Learner};
