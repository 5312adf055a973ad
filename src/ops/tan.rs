//! Tangent.

use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::ext::NAN;
use crate::ops::div::divide;
use crate::ops::sin::sin_quadrant;

impl Decimal {
    /// Computes the tangent of a number. The argument is an angle in radians.
    /// The result is rounded to the precision of `ctx`.
    ///
    /// ## Errors
    ///
    ///  - PrecisionLimitExceeded: the reduction of the argument needs more digits of pi than known.
    pub fn tan(&self, ctx: &Context) -> Result<Self, Error> {
        match &self.inner {
            Flavor::NaN | Flavor::Inf(_) => return Ok(NAN),
            Flavor::Zero(_) => return Ok(self.clone()),
            Flavor::Finite(_) => {}
        };

        let pr = ctx.get_precision();
        let rm = ctx.get_rounding_mode();
        let wpr = pr + 10;
        let wctx = ctx.with(wpr, RoundingMode::Down);

        // tan(x) = sin(x) / sqrt(1 - sin^2(x)) with the sign taken from the quadrant
        let (s, quadrant) = sin_quadrant(self, &wctx)?;
        let s = s.abs();
        let c = ONE.sub(&s.mul(&s, &wctx), &wctx).sqrt(&wctx);
        let r = divide(&s, &c, wpr, RoundingMode::Up, false, &wctx);
        let r = if quadrant == 2 || quadrant == 4 { r.neg() } else { r };

        Ok(r.finalize(pr, rm, true, ctx))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ext::INF_NEG;
    use crate::ext::INF_POS;
    use crate::ext::NEG_ZERO;

    fn d(s: &str) -> Decimal {
        Decimal::parse(s, &Context::new()).unwrap()
    }

    #[test]
    fn test_tan() {
        let ctx = Context::new();

        assert_eq!(d("1").tan(&ctx).unwrap(), d("1.5574077246549022305"));
        assert_eq!(d("-2").tan(&ctx).unwrap(), d("2.1850398632615189916"));
        assert_eq!(d("3").tan(&ctx).unwrap(), d("-0.1425465430742778053"));
        assert_eq!(d("0.5").tan(&ctx).unwrap(), d("0.54630248984379051326"));
        assert_eq!(d("100").tan(&ctx).unwrap(), d("-0.58721391515692907668"));
        assert_eq!(d("123456.789").tan(&ctx).unwrap(), d("-19.326787944829067684"));
        assert_eq!(d("1e100").tan(&ctx).unwrap(), d("-0.034458980993744121455"));
        assert_eq!(d("1e-10").tan(&ctx).unwrap(), d("1e-10"));

        assert!(NEG_ZERO.tan(&ctx).unwrap().is_neg());
        assert!(INF_POS.tan(&ctx).unwrap().is_nan());
        assert!(INF_NEG.tan(&ctx).unwrap().is_nan());
        assert!(NAN.tan(&ctx).unwrap().is_nan());
    }
}
