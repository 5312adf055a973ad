//! Hyperbolic arcsine.

use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::ctx::InternalGuard;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::ext::Decimal;
use crate::ext::Flavor;

impl Decimal {
    /// Computes the hyperbolic arcsine of a number. The result is rounded to the precision of `ctx`.
    ///
    /// ## Errors
    ///
    ///  - PrecisionLimitExceeded: the computation needs more digits of ln(10) than known.
    pub fn asinh(&self, ctx: &Context) -> Result<Self, Error> {
        let n = match &self.inner {
            Flavor::Finite(n) => n,
            _ => return Ok(self.clone()),
        };

        let wpr = ctx.get_precision() + 2 * n.e.abs().max(n.sd()) + 6;
        let wctx = ctx.with(wpr, RoundingMode::Down);

        // asinh(x) = ln(x + sqrt(x^2 + 1))
        let x = {
            let _guard = InternalGuard::new();
            self.mul(self, &wctx).add(&ONE, &wctx).sqrt(&wctx).add(self, &wctx)
        };

        x.ln(ctx)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ext::INF_NEG;
    use crate::ext::INF_POS;
    use crate::ext::NAN;
    use crate::ext::NEG_ZERO;

    fn d(s: &str) -> Decimal {
        Decimal::parse(s, &Context::new()).unwrap()
    }

    #[test]
    fn test_asinh() {
        let ctx = Context::new();

        assert_eq!(d("1").asinh(&ctx).unwrap(), d("0.88137358701954302523"));
        assert_eq!(d("-2").asinh(&ctx).unwrap(), d("-1.4436354751788103425"));
        assert_eq!(d("0.5").asinh(&ctx).unwrap(), d("0.4812118250596034475"));
        assert_eq!(d("1e-10").asinh(&ctx).unwrap(), d("1e-10"));
        assert_eq!(d("1e10").asinh(&ctx).unwrap(), d("23.71899811050040215"));
        assert_eq!(d("-1e10").asinh(&ctx).unwrap(), d("-23.71899811050040215"));

        assert!(NEG_ZERO.asinh(&ctx).unwrap().is_neg());
        assert!(INF_POS.asinh(&ctx).unwrap().is_inf_pos());
        assert!(INF_NEG.asinh(&ctx).unwrap().is_inf_neg());
        assert!(NAN.asinh(&ctx).unwrap().is_nan());
    }
}
