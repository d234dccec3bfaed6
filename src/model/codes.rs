//! Closed code vocabulary for learner funding records.
//!
//! These are the fixed regulatory code values the derived-fact layer matches
//! against. They are constants rather than configuration: a change to any of
//! them is a change to the funding rules themselves, not to a deployment.

/// Fund model codes.
pub mod fund_model {
    /// Community learning.
    pub const COMMUNITY_LEARNING: i32 = 10;
    /// Adult skills.
    pub const ADULT_SKILLS: i32 = 35;
    /// Apprenticeships (from May 2017).
    pub const APPRENTICESHIPS: i32 = 36;
    /// European Social Fund.
    pub const ESF: i32 = 70;
    /// Other adult.
    pub const OTHER_ADULT: i32 = 81;
}

/// Aim type codes.
pub mod aim_type {
    /// Programme aim.
    pub const PROGRAMME: i32 = 1;
    /// Component aim of a programme.
    pub const COMPONENT: i32 = 3;
}

/// Employment status codes.
pub mod emp_stat {
    /// In paid employment.
    pub const IN_PAID_EMPLOYMENT: i32 = 10;
    /// Not in paid employment, looking for work and available to start.
    pub const UNEMPLOYED_SEEKING: i32 = 11;
    /// Not in paid employment, not looking for work.
    pub const UNEMPLOYED_NOT_SEEKING: i32 = 12;
    /// Status not known.
    pub const NOT_KNOWN: i32 = 98;
}

/// Funding and monitoring attribute types.
pub mod fam_type {
    /// Learning delivery monitoring.
    pub const LDM: &str = "LDM";
    /// Source of funding.
    pub const SOF: &str = "SOF";
    /// Restart indicator.
    pub const RES: &str = "RES";
}

/// Learning delivery monitoring codes.
pub mod ldm {
    /// Mandated to skills training.
    pub const MANDATED_TO_SKILLS_TRAINING: &str = "318";
}

/// Employment status monitoring types.
pub mod esm_type {
    /// Benefit status indicator.
    pub const BSI: &str = "BSI";
    /// Self-employment indicator.
    pub const SEI: &str = "SEI";
    /// Employment intensity indicator.
    pub const EII: &str = "EII";
    /// Length of unemployment.
    pub const LOU: &str = "LOU";
    /// Length of employment.
    pub const LOE: &str = "LOE";
}

/// Apprenticeship financial record types and codes.
pub mod app_fin {
    /// Total negotiated price record type.
    pub const TNP: &str = "TNP";
    /// Total negotiated training price.
    pub const TRAINING_PRICE: i32 = 1;
    /// Total negotiated assessment price.
    pub const ASSESSMENT_PRICE: i32 = 2;
}

/// Programme type codes with special handling.
pub mod prog_type {
    /// Apprenticeship standard.
    pub const APPRENTICESHIP_STANDARD: i32 = 25;
}
