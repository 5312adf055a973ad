//! Arccosine.

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::common::consts::TWO;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::ext::Decimal;
use crate::ext::NAN;
use crate::ext::ZERO;
use crate::ops::consts::pi;
use core::cmp::Ordering;

impl Decimal {
    /// Computes the arccosine of a number. The result is an angle in radians in the range [0, pi]
    /// rounded to the precision of `ctx`. The arccosine of a number outside of [-1, 1] is NaN.
    ///
    /// ## Errors
    ///
    ///  - PrecisionLimitExceeded: the computation needs more digits of pi than known.
    pub fn acos(&self, ctx: &Context) -> Result<Self, Error> {
        let pr = ctx.get_precision();
        let rm = ctx.get_rounding_mode();

        match self.abs().cmp(&ONE) {
            Some(Ordering::Less) => {}
            Some(Ordering::Equal) => {
                return if self.is_neg() { pi(pr, rm, ctx) } else { Ok(ZERO) };
            }
            _ => return Ok(NAN),
        }

        if self.is_zero() {
            return Ok(pi(pr + 4, rm, ctx)?.mul(&HALF, ctx));
        }

        // acos(x) = 2 * atan(sqrt((1 - x) / (1 + x)))
        let wctx = ctx.with(pr + 6, RoundingMode::Down);
        let x = ONE
            .sub(self, &wctx)
            .div(&self.add(&ONE, &wctx), &wctx)
            .sqrt(&wctx)
            .atan(&wctx)?;

        Ok(x.mul(&TWO, ctx))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ext::INF_POS;
    use crate::ext::NEG_ZERO;

    fn d(s: &str) -> Decimal {
        Decimal::parse(s, &Context::new()).unwrap()
    }

    #[test]
    fn test_acos() {
        let ctx = Context::new();

        assert_eq!(d("0.5").acos(&ctx).unwrap(), d("1.0471975511965977462"));
        assert_eq!(d("-0.3").acos(&ctx).unwrap(), d("1.8754889808102941272"));
        assert_eq!(d("0.99").acos(&ctx).unwrap(), d("0.14153947332442721875"));
        assert_eq!(d("1e-10").acos(&ctx).unwrap(), d("1.5707963266948966192"));
        assert_eq!(d("-1").acos(&ctx).unwrap(), d("3.1415926535897932385"));
        assert_eq!(ZERO.acos(&ctx).unwrap(), d("1.5707963267948966192"));
        assert_eq!(NEG_ZERO.acos(&ctx).unwrap(), d("1.5707963267948966192"));

        let r = d("1").acos(&ctx).unwrap();
        assert!(r.is_zero() && r.is_pos());

        assert!(d("1.5").acos(&ctx).unwrap().is_nan());
        assert!(INF_POS.acos(&ctx).unwrap().is_nan());
        assert!(NAN.acos(&ctx).unwrap().is_nan());
    }
}
