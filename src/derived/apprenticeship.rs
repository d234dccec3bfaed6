//! Apprenticeship programme-type classification.

/// The closed set of programme types that count as an apprenticeship.
pub const APPRENTICESHIP_PROG_TYPES: &[i32] = &[2, 3, 20, 21, 22, 23, 25];

/// Whether a programme type marks the delivery as part of an apprenticeship.
///
/// An absent programme type is never an apprenticeship.
pub fn is_apprenticeship(prog_type: Option<i32>) -> bool {
    match prog_type {
        Some(pt) => APPRENTICESHIP_PROG_TYPES.contains(&pt),
        None => false,
    }
}
