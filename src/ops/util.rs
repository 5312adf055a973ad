//! Utility functions.

use crate::ctx::InternalGuard;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::defs::LOG_BASE;
use crate::ext::Decimal;
use crate::num::Num;

/// Computes `x^n` by squaring.
/// Intermediate words beyond `ceil(pr/7) + 4` are dropped; if the last kept word of a truncated
/// result is zero, it is set to 1 so that the result still rounds as inexact.
pub(crate) fn int_pow(x: &Num, mut n: u64, pr: Exponent) -> Decimal {
    let _guard = InternalGuard::new();

    let k = ((pr + LOG_BASE - 1).div_euclid(LOG_BASE) + 4).max(1) as usize;
    let mut x = x.clone();
    let mut r = Num::from_word(Sign::Pos, 1);
    let mut truncated = false;

    if x.is_zero() {
        return Decimal::from_num(if n == 0 { r } else { Num::zero(x.s) });
    }

    loop {
        if n % 2 == 1 {
            r = r.mul_abs(&x);
            if r.d.trunc_to(k) {
                truncated = true;
            }
        }

        n /= 2;
        if n == 0 {
            let last = r.d.len() - 1;
            if truncated && r.d[last] == 0 {
                r.d[last] += 1;
            }
            break;
        }

        x = x.mul_abs(&x);
        x.d.trunc_to(k);
    }

    Decimal::from_num(r)
}
