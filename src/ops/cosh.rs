//! Hyperbolic cosine.

use crate::common::consts::EIGHT;
use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::RoundingMode;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::ext::INF_POS;
use crate::ext::NAN;
use crate::ops::cos::quarter_reduction;
use crate::ops::series::taylor_series;

impl Decimal {
    /// Computes the hyperbolic cosine of a number. The result is rounded to the precision of `ctx`.
    pub fn cosh(&self, ctx: &Context) -> Self {
        let n = match &self.inner {
            Flavor::NaN => return NAN,
            Flavor::Inf(_) => return INF_POS,
            Flavor::Zero(_) => return ONE.clone(),
            Flavor::Finite(n) => n,
        };

        let pr = ctx.get_precision();
        let rm = ctx.get_rounding_mode();
        let wctx = ctx.with(pr + n.e.max(n.sd()) + 4, RoundingMode::Down);

        // cosh(4x) = 1 - cosh^2(x)(8 - 8cosh^2(x))
        let (k, y) = quarter_reduction(n.d.len());
        let mut x = taylor_series(1, &self.mul(&y, &wctx), &ONE, true, &wctx);

        for _ in 0..k {
            let cosh2 = x.mul(&x, &wctx);
            let t = EIGHT.sub(&cosh2.mul(&EIGHT, &wctx), &wctx);
            x = ONE.sub(&cosh2.mul(&t, &wctx), &wctx);
        }

        x.finalize(pr, rm, true, ctx)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ext::INF_NEG;
    use crate::ext::NEG_ZERO;

    fn d(s: &str) -> Decimal {
        Decimal::parse(s, &Context::new()).unwrap()
    }

    #[test]
    fn test_cosh() {
        let ctx = Context::new();

        assert_eq!(d("1").cosh(&ctx), d("1.5430806348152437785"));
        assert_eq!(d("-2").cosh(&ctx), d("3.7621956910836314596"));
        assert_eq!(d("0.5").cosh(&ctx), d("1.1276259652063807852"));
        assert_eq!(d("10").cosh(&ctx), d("11013.23292010332314"));
        assert_eq!(d("-0.001").cosh(&ctx), d("1.0000005000000416667"));
        assert_eq!(d("123.456").cosh(&ctx), d("2.0664721763890467248e+53"));

        assert!(NEG_ZERO.cosh(&ctx).eq(&ONE));
        assert!(INF_POS.cosh(&ctx).is_inf_pos());
        assert!(INF_NEG.cosh(&ctx).is_inf_pos());
        assert!(NAN.cosh(&ctx).is_nan());
    }
}
