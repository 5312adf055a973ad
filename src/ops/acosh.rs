//! Hyperbolic arccosine.

use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::ctx::InternalGuard;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::ext::NAN;
use crate::ext::ZERO;

impl Decimal {
    /// Computes the hyperbolic arccosine of a number. The result is rounded to the precision of `ctx`.
    /// The hyperbolic arccosine of a number less than 1 is NaN.
    ///
    /// ## Errors
    ///
    ///  - PrecisionLimitExceeded: the computation needs more digits of ln(10) than known.
    pub fn acosh(&self, ctx: &Context) -> Result<Self, Error> {
        if self.lte(&ONE) {
            return Ok(if self.eq(&ONE) { ZERO } else { NAN });
        }

        let n = match &self.inner {
            Flavor::Finite(n) => n,
            _ => return Ok(self.clone()),
        };

        let wpr = ctx.get_precision() + n.e.abs().max(n.sd()) + 4;
        let wctx = ctx.with(wpr, RoundingMode::Down);

        // acosh(x) = ln(x + sqrt(x^2 - 1))
        let x = {
            let _guard = InternalGuard::new();
            self.mul(self, &wctx).sub(&ONE, &wctx).sqrt(&wctx).add(self, &wctx)
        };

        x.ln(ctx)
    }
}
