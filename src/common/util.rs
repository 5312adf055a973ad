//! Auxiliary functions.

use crate::defs::Exponent;

/// Digits of `s` in the range [from, to), clamped to the length of `s`.
pub(crate) fn slice_digits(s: &str, from: Exponent, to: Exponent) -> &str {
    let len = s.len() as Exponent;
    let from = from.clamp(0, len) as usize;
    let to = to.clamp(0, len) as usize;
    if from >= to {
        ""
    } else {
        &s[from..to]
    }
}

/// First `n` digits of `s`.
#[inline]
pub(crate) fn prefix(s: &str, n: Exponent) -> &str {
    slice_digits(s, 0, n)
}

/// True if `s` is empty or has only zeros.
pub(crate) fn is_zeros(s: &str) -> bool {
    s.bytes().all(|c| c == b'0')
}

/// True if `s` has exactly `n` digits, all of which are nines.
pub(crate) fn is_nines(s: &str, n: usize) -> bool {
    s.len() == n && s.bytes().all(|c| c == b'9')
}

/// True if the digits after a possible exact square or cube root are empty, zeros, or a 5 followed by zeros.
pub(crate) fn is_exact_candidate(s: &str) -> bool {
    is_zeros(s) || s.starts_with('5') && is_zeros(&s[1..])
}
