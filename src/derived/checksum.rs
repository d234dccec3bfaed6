//! Weighted-digit checksum algorithms for identifier validation.
//!
//! Two identifier families carry a check digit: the ten-digit unique learner
//! number (weights 10..2 over the first nine digits, `sum mod 11`) and the
//! nine-digit employer/workplace identifier (ascending weights 2..9 over the
//! eight data digits, right to left, `11 - (sum mod 11)`). Both map the
//! result through the same fixed table:
//!
//! | result | character |
//! |--------|-----------|
//! | 0      | `'0'`     |
//! | 1..9   | the digit |
//! | 10     | `'X'`     |
//! | 11     | `'0'`     |
//!
//! Everything here is a pure function over its arguments.

/// The sentinel "temporary" learner number assigned before a real ULN is
/// known. It short-circuits validation to a pass.
pub const TEMPORARY_ULN: u64 = 9_999_999_999;

/// Expected digit count of a unique learner number.
pub const ULN_DIGITS: u32 = 10;

/// Expected digit count of an employer identifier's data portion.
pub const EMPLOYER_DATA_DIGITS: u32 = 8;

/// Outcome of a check-digit computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckVerdict {
    /// The computed check character.
    Digit(char),
    /// The identifier is the temporary-ULN sentinel; always accepted.
    Temporary,
    /// The identifier has the wrong number of digits; always rejected.
    InvalidLength,
}

/// Compute the check character for a ten-digit learner number.
///
/// The first nine digits (most significant first) are multiplied by the
/// descending weights 10..2; the check character is `sum mod 11` mapped
/// through the fixed table. The tenth digit of the input is the claimed
/// check digit and does not participate in the computation.
pub fn learner_check_digit(uln: u64) -> CheckVerdict {
    if uln == TEMPORARY_ULN {
        return CheckVerdict::Temporary;
    }
    let digits = match digits_of(uln, ULN_DIGITS) {
        Some(d) => d,
        None => return CheckVerdict::InvalidLength,
    };

    let sum: u64 = digits[..9]
        .iter()
        .zip((2..=10).rev())
        .map(|(&d, w)| d as u64 * w)
        .sum();

    CheckVerdict::Digit(check_char((sum % 11) as u32))
}

/// Compute the check character for an eight-digit employer identifier.
///
/// Weights ascend 2..9 from right to left across the eight data digits
/// (weight 1 would belong to the check digit, which is not part of the
/// input); the check character is `11 - (sum mod 11)` mapped through the
/// fixed table.
pub fn employer_check_digit(id: u64) -> CheckVerdict {
    let digits = match digits_of(id, EMPLOYER_DATA_DIGITS) {
        Some(d) => d,
        None => return CheckVerdict::InvalidLength,
    };

    let sum: u64 = digits
        .iter()
        .rev()
        .zip(2..=9)
        .map(|(&d, w)| d as u64 * w)
        .sum();

    CheckVerdict::Digit(check_char(11 - (sum % 11) as u32))
}

/// Whether a learner number carries a valid check digit.
///
/// The temporary sentinel always passes; a wrong-length number always
/// fails; otherwise the trailing digit must equal the computed check
/// character.
pub fn validates_learner_number(uln: u64) -> bool {
    match learner_check_digit(uln) {
        CheckVerdict::Temporary => true,
        CheckVerdict::InvalidLength => false,
        CheckVerdict::Digit(c) => digit_char(uln % 10) == c,
    }
}

/// Whether a nine-digit employer identifier (eight data digits plus a
/// trailing check digit) carries a valid check digit.
pub fn validates_employer_number(id: u64) -> bool {
    // Nine digits total; the trailing one is the claimed check digit.
    if !(100_000_000..=999_999_999).contains(&id) {
        return false;
    }
    match employer_check_digit(id / 10) {
        CheckVerdict::Digit(c) => digit_char(id % 10) == c,
        _ => false,
    }
}

/// Map a checksum result through the fixed character table.
fn check_char(value: u32) -> char {
    match value {
        10 => 'X',
        11 => '0',
        d => digit_char(d as u64),
    }
}

fn digit_char(d: u64) -> char {
    char::from_digit(d as u32, 10).unwrap_or('0')
}

/// Decompose an identifier into exactly `count` base-10 digits, most
/// significant first. Returns `None` when the identifier has a different
/// digit count (leading zeros are not valid in either identifier family).
fn digits_of(value: u64, count: u32) -> Option<Vec<u8>> {
    let lower = 10u64.pow(count - 1);
    let upper = 10u64.pow(count);
    if value < lower || value >= upper {
        return None;
    }
    let mut digits = Vec::with_capacity(count as usize);
    let mut divisor = lower;
    while divisor > 0 {
        digits.push(((value / divisor) % 10) as u8);
        divisor /= 10;
    }
    Some(digits)
}
