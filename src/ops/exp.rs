//! Exponent.

use crate::common::consts::ONE;
use crate::common::consts::ONE_32ND;
use crate::common::util::prefix;
use crate::ctx::Context;
use crate::ctx::InternalGuard;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::ext::INF_POS;
use crate::ext::NAN;
use crate::ext::ZERO;
use crate::num::check_rounding_digits;
use crate::ops::div::divide;

impl Decimal {
    /// Computes `e` to the power of `self`. The result is rounded to the precision of `ctx`.
    pub fn exp(&self, ctx: &Context) -> Self {
        natural_exponential(self, None, ctx)
    }
}

/// Computes `e^x` by reducing the argument below 0.1 in magnitude with repeated division by 32,
/// summing the Taylor series and squaring the sum back.
///
/// If `sd` is None, the result is rounded to the precision of `ctx`, and the computation is
/// repeated with more digits if the result is close to a rounding boundary.
/// Otherwise the sum is returned unrounded with about `sd` correct digits.
pub(crate) fn natural_exponential(x: &Decimal, sd: Option<Exponent>, ctx: &Context) -> Decimal {
    let n = match &x.inner {
        Flavor::NaN => return NAN,
        Flavor::Zero(_) => return ONE.clone(),
        Flavor::Inf(s) => return if s.is_negative() { ZERO } else { INF_POS },
        Flavor::Finite(n) => n,
    };

    if n.e > 17 {
        return if n.s.is_negative() { ZERO } else { INF_POS };
    }

    let pr = ctx.get_precision();
    let rm = ctx.get_rounding_mode();

    let guard_ext = if sd.is_none() {
        Some(InternalGuard::new())
    } else {
        None
    };

    let mut wpr = sd.unwrap_or(pr);

    // while |x| >= 0.1
    let mut x = x.clone();
    let mut k = 0;
    while x.e() > -2 {
        x = x.mul(&ONE_32ND, ctx);
        k += 5;
    }

    // the increase of precision needed for the first 4 rounding digits to be correct
    let guard = (k as f64 * core::f64::consts::LOG10_2 * 2.0 + 5.0) as Exponent;
    wpr += guard;

    let mut rep = 0;
    let mut i = 0u64;
    let mut pow = ONE.clone();
    let mut denominator = ONE.clone();
    let mut sum = ONE.clone();

    loop {
        let wctx = ctx.with(wpr, rm);

        pow = pow.mul(&x, &wctx).finalize(wpr, RoundingMode::Down, false, &wctx);
        i += 1;
        denominator = denominator.mul(&Decimal::from_u64(i), &wctx);
        let t = sum.add(
            &divide(&pow, &denominator, wpr, RoundingMode::Down, false, &wctx),
            &wctx,
        );

        if prefix(&t.digits(), wpr) == prefix(&sum.digits(), wpr) {
            for _ in 0..k {
                sum = sum.mul(&sum, &wctx).finalize(wpr, RoundingMode::Down, false, &wctx);
            }

            if sd.is_none() {
                if rep < 3 && check_rounding_digits(sum.words(), wpr - guard, rm, Some(rep != 0)) {
                    wpr += 10;
                    tracing::trace!(wpr, rep, "exp: rounding boundary, widening precision");
                    pow = ONE.clone();
                    denominator = ONE.clone();
                    sum = ONE.clone();
                    i = 0;
                    rep += 1;
                    continue;
                } else {
                    drop(guard_ext);
                    return sum.finalize(pr, rm, true, ctx);
                }
            } else {
                return sum;
            }
        }

        sum = t;
    }
}
