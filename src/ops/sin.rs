//! Sine.

use crate::common::consts::FIVE;
use crate::common::consts::SIXTEEN;
use crate::common::consts::TWENTY;
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
use crate::ops::trig::Quadrant;

impl Decimal {
    /// Computes the sine of a number. The argument is an angle in radians.
    /// The result is rounded to the precision of `ctx`.
    ///
    /// ## Errors
    ///
    ///  - PrecisionLimitExceeded: the reduction of the argument needs more digits of pi than known.
    pub fn sin(&self, ctx: &Context) -> Result<Self, Error> {
        sin_quadrant(self, ctx).map(|(r, _)| r)
    }
}

/// Computes the sine of `x` and returns it with the quadrant of `x`.
pub(crate) fn sin_quadrant(x: &Decimal, ctx: &Context) -> Result<(Decimal, Quadrant), Error> {
    let n = match &x.inner {
        Flavor::NaN | Flavor::Inf(_) => return Ok((NAN, 1)),
        Flavor::Zero(_) => return Ok((x.clone(), 1)),
        Flavor::Finite(n) => n,
    };

    let pr = ctx.get_precision();
    let rm = ctx.get_rounding_mode();
    let wctx = ctx.with(pr + n.e.max(n.sd()) + LOG_BASE, RoundingMode::Down);

    let (x, quadrant) = to_less_than_half_pi(x, &wctx)?;
    let r = sine(&x, &wctx);
    let r = if quadrant > 2 { r.neg() } else { r };

    Ok((r.finalize(pr, rm, true, ctx), quadrant))
}

// sin(x) for 0 <= x <= pi/2 using sin(5x) = sin(x)(5 + sin^2(x)(16sin^2(x) - 20)).
fn sine(x: &Decimal, ctx: &Context) -> Decimal {
    let len = x.words().len();

    if len < 3 {
        return if x.is_zero() {
            x.clone()
        } else {
            taylor_series(2, x, x, false, ctx)
        };
    }

    // the number of reductions grows with the number of words
    let k = ((1.4 * (len as f64).sqrt()) as u32).min(16);
    let x = x.mul(&Decimal::from_scaled(1 << k, -(k as Exponent)), ctx);

    let mut x = taylor_series(2, &x, &x, false, ctx);

    for _ in 0..k {
        let sin2 = x.mul(&x, ctx);
        let t = SIXTEEN.mul(&sin2, ctx).sub(&TWENTY, ctx);
        x = x.mul(&FIVE.add(&sin2.mul(&t, ctx), ctx), ctx);
    }

    x
}
