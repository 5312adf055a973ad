//! Cosine.

use crate::common::consts::EIGHT;
use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::LOG_BASE;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::ext::NAN;
use crate::ops::series::taylor_series;
use crate::ops::trig::to_less_than_half_pi;

impl Decimal {
    /// Computes the cosine of a number. The argument is an angle in radians.
    /// The result is rounded to the precision of `ctx`.
    ///
    /// ## Errors
    ///
    ///  - PrecisionLimitExceeded: the reduction of the argument needs more digits of pi than known.
    pub fn cos(&self, ctx: &Context) -> Result<Self, Error> {
        let n = match &self.inner {
            Flavor::NaN | Flavor::Inf(_) => return Ok(NAN),
            Flavor::Zero(_) => return Ok(ONE.clone()),
            Flavor::Finite(n) => n,
        };

        let pr = ctx.get_precision();
        let rm = ctx.get_rounding_mode();
        let wctx = ctx.with(pr + n.e.max(n.sd()) + LOG_BASE, RoundingMode::Down);

        let (x, quadrant) = to_less_than_half_pi(self, &wctx)?;
        let r = cosine(&x, &wctx);
        let r = if quadrant == 2 || quadrant == 3 { r.neg() } else { r };

        Ok(r.finalize(pr, rm, true, ctx))
    }
}

/// Returns `(k, 1/4^k)`: the number of argument reductions for a value of `len` words and the scale factor.
pub(crate) fn quarter_reduction(len: usize) -> (usize, Decimal) {
    let k = if len < 32 { (len + 2) / 3 } else { 16 };
    (k, Decimal::from_scaled(25u128.pow(k as u32), -2 * k as Exponent))
}

// cos(x) for 0 <= x <= pi/2 using cos(4x) = 8(cos^4(x) - cos^2(x)) + 1.
fn cosine(x: &Decimal, ctx: &Context) -> Decimal {
    if x.is_zero() {
        return x.clone();
    }

    let (k, y) = quarter_reduction(x.words().len());
    let wctx = ctx.with(ctx.get_precision() + k as Exponent, ctx.get_rounding_mode());

    let mut x = taylor_series(1, &x.mul(&y, &wctx), &ONE, false, &wctx);

    for _ in 0..k {
        let cos2x = x.mul(&x, &wctx);
        x = cos2x
            .mul(&cos2x, &wctx)
            .sub(&cos2x, &wctx)
            .mul(&EIGHT, &wctx)
            .add(&ONE, &wctx);
    }

    x
}
