//! Hyperbolic sine.

use crate::common::consts::FIVE;
use crate::common::consts::SIXTEEN;
use crate::common::consts::TWENTY;
use crate::ctx::Context;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::ops::series::taylor_series;

impl Decimal {
    /// Computes the hyperbolic sine of a number. The result is rounded to the precision of `ctx`.
    pub fn sinh(&self, ctx: &Context) -> Self {
        let n = match &self.inner {
            Flavor::Finite(n) => n,
            _ => return self.clone(),
        };

        let pr = ctx.get_precision();
        let rm = ctx.get_rounding_mode();
        let wctx = ctx.with(pr + n.e.max(n.sd()) + 4, RoundingMode::Down);

        let len = n.d.len();
        let x = if len < 3 {
            taylor_series(2, self, self, true, &wctx)
        } else {
            // sinh(5x) = sinh(x)(5 + sinh^2(x)(20 + 16sinh^2(x)))
            let k = ((1.4 * (len as f64).sqrt()) as u32).min(16);
            let x = self.mul(&Decimal::from_scaled(1 << k, -(k as Exponent)), &wctx);
            let mut x = taylor_series(2, &x, &x, true, &wctx);

            for _ in 0..k {
                let sinh2 = x.mul(&x, &wctx);
                let t = SIXTEEN.mul(&sinh2, &wctx).add(&TWENTY, &wctx);
                x = x.mul(&FIVE.add(&sinh2.mul(&t, &wctx), &wctx), &wctx);
            }

            x
        };

        x.finalize(pr, rm, true, ctx)
    }
}
