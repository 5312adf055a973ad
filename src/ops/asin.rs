//! Arcsine.

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::common::consts::TWO;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::ext::Decimal;
use crate::ext::NAN;
use crate::ops::consts::pi;
use core::cmp::Ordering;

impl Decimal {
    /// Computes the arcsine of a number. The result is an angle in radians in the range [-pi/2, pi/2]
    /// rounded to the precision of `ctx`. The arcsine of a number outside of [-1, 1] is NaN.
    ///
    /// ## Errors
    ///
    ///  - PrecisionLimitExceeded: the computation needs more digits of pi than known.
    pub fn asin(&self, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(self.clone());
        }

        let pr = ctx.get_precision();
        let rm = ctx.get_rounding_mode();

        match self.abs().cmp(&ONE) {
            Some(Ordering::Less) => {}
            Some(Ordering::Equal) => {
                let half_pi = pi(pr + 4, rm, ctx)?.mul(&HALF, ctx);
                return Ok(if self.is_neg() { half_pi.neg() } else { half_pi });
            }
            _ => return Ok(NAN),
        }

        // asin(x) = 2 * atan(x / (1 + sqrt(1 - x^2)))
        let wctx = ctx.with(pr + 6, RoundingMode::Down);
        let t = ONE.sub(&self.mul(self, &wctx), &wctx).sqrt(&wctx).add(&ONE, &wctx);
        let x = self.div(&t, &wctx).atan(&wctx)?;

        Ok(x.mul(&TWO, ctx))
    }
}
