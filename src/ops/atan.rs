//! Arctangent.

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::common::consts::QUARTER;
use crate::ctx::Context;
use crate::ctx::InternalGuard;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::LOG_BASE;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::ext::NAN;
use crate::ext::ZERO;
use crate::ops::consts::pi;
use crate::ops::consts::PI_PRECISION;
use crate::ops::div::divide;

impl Decimal {
    /// Computes the arctangent of a number. The result is an angle in radians in the range [-pi/2, pi/2]
    /// rounded to the precision of `ctx`.
    ///
    /// ## Errors
    ///
    ///  - PrecisionLimitExceeded: the computation needs more digits of pi than known.
    pub fn atan(&self, ctx: &Context) -> Result<Self, Error> {
        let pr = ctx.get_precision();
        let rm = ctx.get_rounding_mode();

        match &self.inner {
            Flavor::NaN => return Ok(NAN),
            Flavor::Inf(s) => {
                return Ok(pi(pr + 4, rm, ctx)?.mul(&HALF, ctx).with_sign(*s));
            }
            Flavor::Zero(_) => return Ok(self.clone()),
            Flavor::Finite(n) => {
                if pr + 4 <= PI_PRECISION && self.abs().eq(&ONE) {
                    return Ok(pi(pr + 4, rm, ctx)?.mul(&QUARTER, ctx).with_sign(n.s));
                }
            }
        }

        let wpr = pr + 10;
        let wctx = ctx.with(wpr, RoundingMode::Down);

        // atan(x) = 2 * atan(x / (1 + sqrt(1 + x^2))) until |x| < 0.42
        let k = (wpr / LOG_BASE + 2).min(28) as u32;
        let mut x = self.clone();
        for _ in 0..k {
            let t = x.mul(&x, &wctx).add(&ONE, &wctx).sqrt(&wctx).add(&ONE, &wctx);
            x = x.div(&t, &wctx);
        }

        let r = {
            let _guard = InternalGuard::new();

            let j = ((wpr + LOG_BASE - 1) / LOG_BASE) as usize;
            let x2 = x.mul(&x, &wctx);
            let mut n = 1u64;
            let mut r = x.clone();
            let mut px = x;

            // atan(x) = x - x^3/3 + x^5/5 - x^7/7 + ...
            loop {
                px = px.mul(&x2, &wctx);
                n += 2;
                let t = r.sub(&px.div(&Decimal::from_u64(n), &wctx), &wctx);

                px = px.mul(&x2, &wctx);
                n += 2;
                r = t.add(&px.div(&Decimal::from_u64(n), &wctx), &wctx);

                let (rw, tw) = (r.words(), t.words());
                if rw.len() > j && tw.len() > j && rw[..=j] == tw[..=j] {
                    break;
                }
            }

            if k > 0 {
                r = r.mul(&Decimal::from_u64(1 << k), &wctx);
            }

            r
        };

        Ok(r.finalize(pr, rm, true, ctx))
    }

    /// Computes the arctangent of `self / x` using the signs of both arguments to determine the quadrant.
    /// The result is an angle in radians in the range [-pi, pi] rounded to the precision of `ctx`.
    ///
    /// ## Errors
    ///
    ///  - PrecisionLimitExceeded: the computation needs more digits of pi than known.
    pub fn atan2(&self, x: &Self, ctx: &Context) -> Result<Self, Error> {
        let y = self;
        let pr = ctx.get_precision();
        let rm = ctx.get_rounding_mode();
        let wpr = pr + 4;

        let (ys, xs) = match (y.get_sign(), x.get_sign()) {
            (Some(ys), Some(xs)) => (ys, xs),
            _ => return Ok(NAN),
        };

        if y.is_inf() && x.is_inf() {
            let m = if xs.is_positive() {
                QUARTER.clone()
            } else {
                Decimal::from_scaled(75, -2)
            };
            Ok(pi(wpr, RoundingMode::Down, ctx)?.mul(&m, ctx).with_sign(ys))
        } else if x.is_inf() || y.is_zero() {
            let r = if xs.is_negative() { pi(pr, rm, ctx)? } else { ZERO };
            Ok(r.with_sign(ys))
        } else if y.is_inf() || x.is_zero() {
            Ok(pi(wpr, RoundingMode::Down, ctx)?.mul(&HALF, ctx).with_sign(ys))
        } else if xs.is_negative() {
            let wctx = ctx.with(wpr, RoundingMode::Down);
            let r = divide(y, x, wpr, RoundingMode::Down, false, ctx).atan(&wctx)?;
            let p = pi(wpr, RoundingMode::Down, ctx)?;
            Ok(if ys.is_negative() { r.sub(&p, ctx) } else { r.add(&p, ctx) })
        } else {
            divide(y, x, wpr, RoundingMode::Down, false, ctx).atan(ctx)
        }
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
    fn test_atan() {
        let ctx = Context::new();

        assert_eq!(d("1").atan(&ctx).unwrap(), d("0.78539816339744830962"));
        assert_eq!(d("-1").atan(&ctx).unwrap(), d("-0.78539816339744830962"));
        assert_eq!(d("2").atan(&ctx).unwrap(), d("1.107148717794090503"));
        assert_eq!(d("-0.5").atan(&ctx).unwrap(), d("-0.46364760900080611621"));
        assert_eq!(d("100").atan(&ctx).unwrap(), d("1.560796660108231381"));
        assert_eq!(d("0.4").atan(&ctx).unwrap(), d("0.3805063771123648863"));
        assert_eq!(d("1e-10").atan(&ctx).unwrap(), d("1e-10"));
        assert_eq!(d("1e30").atan(&ctx).unwrap(), d("1.5707963267948966192"));

        assert_eq!(INF_POS.atan(&ctx).unwrap(), d("1.5707963267948966192"));
        assert_eq!(INF_NEG.atan(&ctx).unwrap(), d("-1.5707963267948966192"));
        assert!(NEG_ZERO.atan(&ctx).unwrap().is_neg());
        assert!(NAN.atan(&ctx).unwrap().is_nan());

        let mut ctx2 = Context::new();
        ctx2.precision(1023).unwrap();
        assert_eq!(INF_POS.atan(&ctx2).unwrap_err(), Error::PrecisionLimitExceeded);
    }

    #[test]
    fn test_atan2() {
        let ctx = Context::new();
        let a = |y: &str, x: &str| d(y).atan2(&d(x), &ctx).unwrap();

        assert_eq!(a("1", "2"), d("0.46364760900080611621"));
        assert_eq!(a("-1", "-2"), d("-2.6779450445889871222"));
        assert_eq!(a("3", "-4"), d("2.4980915447965088517"));
        assert_eq!(a("-3", "4"), d("-0.6435011087932843868"));
        assert_eq!(a("1e-30", "-1"), d("3.1415926535897932385"));

        let pi = d("3.1415926535897932385");
        let half_pi = d("1.5707963267948966192");

        // zeros
        let r = ZERO.atan2(&ZERO, &ctx).unwrap();
        assert!(r.is_zero() && r.is_pos());
        let r = NEG_ZERO.atan2(&ZERO, &ctx).unwrap();
        assert!(r.is_zero() && r.is_neg());
        assert_eq!(ZERO.atan2(&NEG_ZERO, &ctx).unwrap(), pi);
        assert_eq!(NEG_ZERO.atan2(&NEG_ZERO, &ctx).unwrap(), pi.neg());
        assert_eq!(ZERO.atan2(&d("-1"), &ctx).unwrap(), pi);
        assert_eq!(d("1").atan2(&ZERO, &ctx).unwrap(), half_pi);
        assert_eq!(d("-1").atan2(&NEG_ZERO, &ctx).unwrap(), half_pi.neg());

        // infinities
        assert_eq!(INF_POS.atan2(&INF_POS, &ctx).unwrap(), d("0.78539816339744830962"));
        assert_eq!(INF_NEG.atan2(&INF_NEG, &ctx).unwrap(), d("-2.3561944901923449288"));
        assert_eq!(INF_POS.atan2(&d("5"), &ctx).unwrap(), half_pi);
        assert_eq!(d("5").atan2(&INF_NEG, &ctx).unwrap(), pi);
        let r = d("-5").atan2(&INF_POS, &ctx).unwrap();
        assert!(r.is_zero() && r.is_neg());

        assert!(NAN.atan2(&d("1"), &ctx).unwrap().is_nan());
        assert!(d("1").atan2(&NAN, &ctx).unwrap().is_nan());
    }
}
