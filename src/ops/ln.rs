//! Natural logarithm.

use crate::common::consts::ONE;
use crate::common::consts::TWO;
use crate::common::util::prefix;
use crate::ctx::Context;
use crate::ctx::InternalGuard;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::ext::INF_NEG;
use crate::ext::NAN;
use crate::ext::ZERO;
use crate::num::check_rounding_digits;
use crate::num::Num;
use crate::ops::consts::ln10;
use crate::ops::div::divide;

impl Decimal {
    /// Computes the natural logarithm of a number. The result is rounded to the precision of `ctx`.
    ///
    /// The logarithm of zero is negative infinity, of a negative number NaN.
    ///
    /// ## Errors
    ///
    ///  - PrecisionLimitExceeded: the computation needs more digits of ln(10) than known.
    pub fn ln(&self, ctx: &Context) -> Result<Self, Error> {
        natural_logarithm(self, None, ctx)
    }
}

/// Computes `ln(y)` by raising `y` to a small power `n` until its leading digits are near 1,
/// summing the series `2(x + x^3/3 + x^5/5 + ...)` with `x = (y^n - 1)/(y^n + 1)`,
/// dividing the sum by `n`, and adding the decimal exponent times ln(10).
///
/// If `sd` is None, the result is rounded to the precision of `ctx`, and the computation is
/// repeated with more digits if the result is close to a rounding boundary.
/// Otherwise the sum is returned unrounded with about `sd` correct digits.
pub(crate) fn natural_logarithm(
    y: &Decimal,
    sd: Option<Exponent>,
    ctx: &Context,
) -> Result<Decimal, Error> {
    let yn = match &y.inner {
        Flavor::Zero(_) => return Ok(INF_NEG),
        Flavor::NaN | Flavor::Inf(Sign::Neg) => return Ok(NAN),
        Flavor::Inf(_) => return Ok(y.clone()),
        Flavor::Finite(n) if n.s.is_negative() => return Ok(NAN),
        Flavor::Finite(n) => n,
    };

    if yn.e == 0 && yn.d.len() == 1 && yn.d[0] == 1 {
        return Ok(ZERO);
    }

    let pr = ctx.get_precision();
    let rm = ctx.get_rounding_mode();
    let guard = 10;

    let guard_ext = if sd.is_none() {
        Some(InternalGuard::new())
    } else {
        None
    };

    let mut wpr = sd.unwrap_or(pr) + guard;
    let mut wctx = ctx.with(wpr, rm);

    let mut c = yn.digits();
    let mut c0 = c.as_bytes()[0];
    let mut e = yn.e;
    let mut n: u64 = 1;
    let x1;

    if e.abs() < 1_500_000_000_000_000 {
        // the leading digits of y^n become 7, 8, 9, 10, 11, 12 or 13
        let mut x = y.clone();
        while c0 < b'7' && c0 != b'1' || c0 == b'1' && c.as_bytes().get(1).map_or(false, |c1| *c1 > b'3') {
            x = x.mul(y, &wctx);
            c = x.digits();
            c0 = c.as_bytes()[0];
            n += 1;
        }

        e = x.e();

        x1 = if c0 > b'1' {
            e += 1;
            Decimal::from_num(Num::from_digits(Sign::Pos, c.as_bytes(), -1))
        } else {
            Decimal::from_num(Num::from_digits(Sign::Pos, c.as_bytes(), 0))
        };
    } else {
        // y^n may overflow, so ln(y) = ln(y * 10^-e) + e * ln(10)
        let t = ln10(wpr + 2, ctx)?.mul(&Decimal::from_i64(e), &wctx);
        let m = Decimal::from_num(Num::from_digits(Sign::Pos, c.as_bytes(), 0));
        let x = natural_logarithm(&m, Some(wpr - guard), &wctx)?.add(&t, &wctx);

        return Ok(match guard_ext {
            Some(g) => {
                drop(g);
                x.finalize(pr, rm, true, ctx)
            }
            None => x,
        });
    }

    let series_start = |wctx: &Context| {
        let wpr = wctx.get_precision();
        let x = divide(
            &x1.sub(&ONE, wctx),
            &x1.add(&ONE, wctx),
            wpr,
            RoundingMode::Down,
            false,
            wctx,
        );
        let x2 = x.mul(&x, wctx).finalize(wpr, RoundingMode::Down, false, wctx);
        (x, x2)
    };

    let (x, mut x2) = series_start(&wctx);
    let mut sum = x.clone();
    let mut numerator = x;
    let mut denominator: u64 = 3;
    let mut rep = None;

    loop {
        numerator = numerator
            .mul(&x2, &wctx)
            .finalize(wpr, RoundingMode::Down, false, &wctx);
        let t = sum.add(
            &divide(
                &numerator,
                &Decimal::from_u64(denominator),
                wpr,
                RoundingMode::Down,
                false,
                &wctx,
            ),
            &wctx,
        );

        if prefix(&t.digits(), wpr) == prefix(&sum.digits(), wpr) {
            sum = sum.mul(&TWO, &wctx);

            // -0 stays -0 if e is 0
            if e != 0 {
                sum = sum.add(
                    &ln10(wpr + 2, ctx)?.mul(&Decimal::from_i64(e), &wctx),
                    &wctx,
                );
            }
            sum = divide(&sum, &Decimal::from_u64(n), wpr, RoundingMode::Down, false, &wctx);

            if sd.is_none() {
                if check_rounding_digits(sum.words(), wpr - guard, rm, rep) {
                    wpr += guard;
                    wctx = ctx.with(wpr, rm);
                    tracing::trace!(wpr, "ln: rounding boundary, widening precision");

                    let (x, x2_new) = series_start(&wctx);
                    x2 = x2_new;
                    numerator = x.clone();
                    // the next pass starts with the first term only
                    sum = x;
                    denominator = 3;
                    rep = Some(true);
                    continue;
                } else {
                    drop(guard_ext);
                    return Ok(sum.finalize(pr, rm, true, ctx));
                }
            } else {
                return Ok(sum);
            }
        }

        sum = t;
        denominator += 2;
    }
}
