//! Legal-organisation-type classification.
//!
//! The legal org type string itself comes from the external organisation
//! lookup ([`OrgQuery`]); this module only owns the membership test.
//!
//! [`OrgQuery`]: crate::lookups::OrgQuery

/// Legal organisation types that are colleges or grant-funded providers.
pub const COLLEGE_OR_GRANT_FUNDED_TYPES: &[&str] = &["USDC", "UGFE", "UHEO", "ULEA", "USFC"];

/// Whether a legal organisation type is a college or grant-funded provider.
pub fn is_college_or_grant_funded(legal_org_type: &str) -> bool {
    COLLEGE_OR_GRANT_FUNDED_TYPES.contains(&legal_org_type)
}
