//! Addition and subtraction.

use crate::ctx::is_external;
use crate::ctx::Context;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::ext::NAN;
use crate::num::Num;

impl Decimal {
    /// Add d2 and return result of addition rounded to the precision of `ctx`.
    ///
    /// Infinities of different signs give NaN.
    /// An exact zero difference is negative only with the rounding mode `Floor`.
    pub fn add(&self, d2: &Self, ctx: &Context) -> Self {
        match (&self.inner, &d2.inner) {
            (Flavor::NaN, _) | (_, Flavor::NaN) => NAN,
            (Flavor::Inf(s1), Flavor::Inf(s2)) => {
                if s1 == s2 {
                    self.clone()
                } else {
                    NAN
                }
            }
            (Flavor::Inf(_), _) => self.clone(),
            (_, Flavor::Inf(_)) => d2.clone(),
            _ => match (self.to_num(), d2.to_num()) {
                (Some(x), Some(y)) => add_finite(&x, &y, ctx),
                _ => NAN,
            },
        }
    }

    /// Subtract d2 and return result of subtraction rounded to the precision of `ctx`.
    pub fn sub(&self, d2: &Self, ctx: &Context) -> Self {
        self.add(&d2.neg(), ctx)
    }
}

// x + y for finite values, zeros included.
fn add_finite(x: &Num, y: &Num, ctx: &Context) -> Decimal {
    let pr = ctx.get_precision();
    let rm = ctx.get_rounding_mode();

    if x.s == y.s {
        if y.is_zero() {
            return finish(x.clone(), ctx);
        } else if x.is_zero() {
            return finish(y.clone(), ctx);
        }

        finish(x.add_abs(y, pr), ctx)
    } else {
        if x.is_zero() && y.is_zero() {
            return signed_zero(rm);
        } else if x.is_zero() {
            return finish(y.clone(), ctx);
        } else if y.is_zero() {
            return finish(x.clone(), ctx);
        }

        match x.sub_abs(y, pr) {
            Some(r) => finish(r, ctx),
            None => signed_zero(rm),
        }
    }
}

// Rounds the result only when it is returned to the caller.
fn finish(r: Num, ctx: &Context) -> Decimal {
    let ret = Decimal::from_num(r);
    if is_external() {
        ret.finalize(ctx.get_precision(), ctx.get_rounding_mode(), false, ctx)
    } else {
        ret
    }
}

fn signed_zero(rm: RoundingMode) -> Decimal {
    Decimal {
        inner: Flavor::Zero(if rm == RoundingMode::Floor {
            Sign::Neg
        } else {
            Sign::Pos
        }),
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ctx::InternalGuard;
    use crate::ext::INF_NEG;
    use crate::ext::INF_POS;
    use crate::ext::NEG_ZERO;
    use crate::ext::ZERO;

    fn d(s: &str) -> Decimal {
        Decimal::parse(s, &Context::new()).unwrap()
    }

    #[test]
    fn test_add() {
        let ctx = Context::new();

        assert_eq!(d("0.1").add(&d("0.2"), &ctx), d("0.3"));
        assert_eq!(d("1").sub(&d("0.9"), &ctx), d("0.1"));
        assert_eq!(d("-1.5").add(&d("1"), &ctx), d("-0.5"));
        assert_eq!(d("9999999").add(&d("1"), &ctx), d("10000000"));
        assert_eq!(d("10000000").sub(&d("1"), &ctx), d("9999999"));
        assert_eq!(d("1e-30").add(&d("1e30"), &ctx), d("1e30"));

        // rounded to precision
        assert_eq!(
            d("12345678901234567890").add(&d("0.5"), &ctx),
            d("12345678901234567891")
        );
        assert_eq!(d("1").sub(&d("1e-25"), &ctx), d("1"));

        // not rounded while internal
        {
            let _guard = InternalGuard::new();
            let r = d("12345678901234567890").add(&d("0.5"), &ctx);
            assert_eq!(r.digits().len(), 21);
        }

        // special values
        assert!(INF_POS.add(&INF_NEG, &ctx).is_nan());
        assert!(INF_POS.sub(&INF_POS, &ctx).is_nan());
        assert!(INF_POS.add(&INF_POS, &ctx).is_inf_pos());
        assert!(INF_NEG.add(&d("1e100"), &ctx).is_inf_neg());
        assert!(d("1").sub(&INF_NEG, &ctx).is_inf_pos());
        assert!(NAN.add(&d("1"), &ctx).is_nan());
        assert!(d("1").add(&NAN, &ctx).is_nan());

        // zeros
        assert!(ZERO.add(&NEG_ZERO, &ctx).is_pos());
        assert!(NEG_ZERO.add(&NEG_ZERO, &ctx).is_neg());
        assert!(d("1").sub(&d("1"), &ctx).is_pos());
        let mut floor = Context::new();
        floor.rounding_mode(RoundingMode::Floor);
        assert!(d("1").sub(&d("1"), &floor).is_neg());
        assert!(ZERO.sub(&ZERO, &floor).is_neg());
        assert_eq!(ZERO.sub(&d("3"), &ctx), d("-3"));
        assert_eq!(d("3").add(&NEG_ZERO, &ctx), d("3"));
    }

    #[test]
    fn test_add_clamp() {
        let mut ctx = Context::new();
        ctx.max_e(10).unwrap();
        ctx.min_e(-10).unwrap();

        let x = d("9e10");
        assert!(x.add(&x, &ctx).is_inf_pos());
        let y = d("1e-10");
        assert!(y.sub(&d("9e-11"), &ctx).is_zero());
    }

    #[test]
    fn test_add_random() {
        let ctx = Context::new();
        for _ in 0..1000 {
            let a = rand::random::<i64>() >> 2;
            let b = rand::random::<i64>() >> 2;
            let x = Decimal::from_i64(a);
            let y = Decimal::from_i64(b);
            assert_eq!(x.add(&y, &ctx), Decimal::from_i64(a + b));
            assert_eq!(x.sub(&y, &ctx), Decimal::from_i64(a - b));
        }
    }
}
