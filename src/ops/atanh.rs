//! Hyperbolic arctangent.

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::ext::NAN;
use crate::ops::div::divide;

impl Decimal {
    /// Computes the hyperbolic arctangent of a number. The result is rounded to the precision of `ctx`.
    /// The hyperbolic arctangent of 1 and -1 is the infinity of the same sign;
    /// of a number outside of [-1, 1] it is NaN.
    ///
    /// ## Errors
    ///
    ///  - PrecisionLimitExceeded: the computation needs more digits of ln(10) than known.
    pub fn atanh(&self, ctx: &Context) -> Result<Self, Error> {
        let n = match &self.inner {
            Flavor::Zero(_) => return Ok(self.clone()),
            Flavor::Finite(n) => n,
            _ => return Ok(NAN),
        };

        if n.e >= 0 {
            return Ok(if self.abs().eq(&ONE) {
                Decimal { inner: Flavor::Inf(n.s) }
            } else {
                NAN
            });
        }

        let pr = ctx.get_precision();
        let rm = ctx.get_rounding_mode();
        let xsd = n.sd();

        // atanh(x) = x - x^3/3 + ... is x at this precision
        if xsd.max(pr) < -2 * n.e - 1 {
            return Ok(self.clone().finalize(pr, rm, true, ctx));
        }

        // atanh(x) = ln((1 + x) / (1 - x)) / 2
        let wpr = xsd - n.e;
        let wctx = ctx.with(wpr, rm);
        let x = divide(
            &self.add(&ONE, &wctx),
            &ONE.sub(self, &wctx),
            wpr + pr,
            RoundingMode::Down,
            false,
            &wctx,
        );

        let x = x.ln(&ctx.with(pr + 4, RoundingMode::Down))?;

        Ok(x.mul(&HALF, ctx))
    }
}
