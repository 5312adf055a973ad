//! Division, integer division and modulo.

use crate::ctx::Context;
use crate::ctx::InternalGuard;
use crate::defs::Exponent;
use crate::defs::Modulo;
use crate::defs::RoundingMode;
use crate::defs::Word;
use crate::defs::BASE;
use crate::defs::LOG_BASE;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::ext::NAN;
use crate::mantissa::div_words;
use crate::mantissa::word_len;
use crate::mantissa::WordBuf;
use crate::num::Num;

/// Divides `x` by `y` rounding the quotient to `pr` significant digits,
/// or to `pr` decimal places if `dp` is true, with the rounding mode `rm`.
/// Exponent limits of `ctx` apply unless an internal computation is in progress.
pub(crate) fn divide(
    x: &Decimal,
    y: &Decimal,
    pr: Exponent,
    rm: RoundingMode,
    dp: bool,
    ctx: &Context,
) -> Decimal {
    let s = match (x.get_sign(), y.get_sign()) {
        (Some(s1), Some(s2)) => s1.mul(s2),
        _ => return NAN,
    };

    let (xn, yn) = match (&x.inner, &y.inner) {
        (Flavor::Finite(xn), Flavor::Finite(yn)) => (xn, yn),
        (Flavor::Inf(_), Flavor::Inf(_)) | (Flavor::Zero(_), Flavor::Zero(_)) => return NAN,
        (Flavor::Zero(_), _) | (_, Flavor::Inf(_)) => {
            return Decimal {
                inner: Flavor::Zero(s),
            }
        }
        _ => {
            return Decimal {
                inner: Flavor::Inf(s),
            }
        }
    };

    // the quotient exponent may be one less
    let mut e = xn.word_exp() - yn.word_exp();
    let word = |d: &WordBuf, i: usize| d.get(i).copied().unwrap_or(0);
    let mut i = 0;
    while i < yn.d.len() && yn.d[i] == word(&xn.d, i) {
        i += 1;
    }
    if i < yn.d.len() && yn.d[i] > word(&xn.d, i) {
        e -= 1;
    }

    let sd = if dp { pr + xn.e - yn.e + 1 } else { pr };

    let (qd, more) = if sd < 0 {
        (WordBuf::from_word(1), true)
    } else {
        div_words(&xn.d, &yn.d, BASE, sd / LOG_BASE + 2)
    };

    let qe = word_len(qd[0]) + e * LOG_BASE - 1;
    let q = Decimal::from_num(Num { s, e: qe, d: qd });

    q.finalize(if dp { pr + qe + 1 } else { pr }, rm, more, ctx)
}

/// Divides the digits `xd` with exponent `xe` by the digits `yd` with exponent `ye` in base `base`.
/// Returns `sd` quotient digits or more, the exponent of the first digit,
/// and true if a nonzero remainder is left.
pub(crate) fn divide_digits(
    xd: &[Word],
    xe: Exponent,
    yd: &[Word],
    ye: Exponent,
    base: Word,
    sd: Exponent,
) -> (Vec<Word>, Exponent, bool) {
    let mut e = xe - ye;
    let mut i = 0;
    while i < yd.len() && yd[i] == xd.get(i).copied().unwrap_or(0) {
        i += 1;
    }
    if i < yd.len() && yd[i] > xd.get(i).copied().unwrap_or(0) {
        e -= 1;
    }

    let (qd, more) = div_words(xd, yd, base, sd + 2);

    (qd.to_vec(), e, more)
}

impl Decimal {
    /// Divide by d2 and return the quotient rounded to the precision of `ctx`.
    ///
    /// Division of a nonzero value by zero gives a signed infinity;
    /// 0/0 and Inf/Inf give NaN.
    pub fn div(&self, d2: &Self, ctx: &Context) -> Self {
        divide(self, d2, ctx.get_precision(), ctx.get_rounding_mode(), false, ctx)
    }

    /// Returns the integer part of the quotient of `self` and `d2`,
    /// rounded to the precision of `ctx`.
    pub fn div_to_int(&self, d2: &Self, ctx: &Context) -> Self {
        divide(self, d2, 0, RoundingMode::Down, true, ctx).finalize(
            ctx.get_precision(),
            ctx.get_rounding_mode(),
            false,
            ctx,
        )
    }

    /// Returns the remainder of division of `self` by `d2`.
    ///
    /// The sign of the remainder follows the modulo mode of `ctx`:
    /// with a rounding mode `rm` the quotient is rounded to an integer using `rm`,
    /// and with `Euclid` the remainder is always non-negative.
    pub fn modulo(&self, d2: &Self, ctx: &Context) -> Self {
        if !self.is_finite() || d2.is_nan() || d2.is_zero() {
            return NAN;
        }

        if d2.is_inf() || self.is_zero() {
            return self
                .clone()
                .finalize(ctx.get_precision(), ctx.get_rounding_mode(), false, ctx);
        }

        let q = {
            let _guard = InternalGuard::new();

            let q = match ctx.get_modulo() {
                Modulo::Euclid => {
                    let q = divide(self, &d2.abs(), 0, RoundingMode::Floor, true, ctx);
                    match (q.get_sign(), d2.get_sign()) {
                        (Some(s1), Some(s2)) => q.with_sign(s1.mul(s2)),
                        _ => q,
                    }
                }
                Modulo::Rounding(rm) => divide(self, d2, 0, rm, true, ctx),
            };

            q.mul(d2, ctx)
        };

        self.sub(&q, ctx)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ext::INF_NEG;
    use crate::ext::INF_POS;
    use crate::ext::NEG_ZERO;
    use crate::ext::ZERO;

    fn d(s: &str) -> Decimal {
        Decimal::parse(s, &Context::new()).unwrap()
    }

    #[test]
    fn test_div() {
        let ctx = Context::new();

        assert_eq!(d("1").div(&d("3"), &ctx), d("0.33333333333333333333"));
        assert_eq!(d("2").div(&d("3"), &ctx), d("0.66666666666666666667"));
        assert_eq!(d("-6").div(&d("3"), &ctx), d("-2"));
        assert_eq!(d("1").div(&d("8"), &ctx), d("0.125"));
        assert_eq!(d("1e-10").div(&d("1e10"), &ctx), d("1e-20"));
        assert_eq!(d("123456789012345").div(&d("0.0001"), &ctx), d("1234567890123450000"));
        assert_eq!(d("1").div(&d("1.5"), &ctx), d("0.66666666666666666667"));
        assert_eq!(
            d("98765432109876543210").div(&d("1234567.1234567"), &ctx),
            d("80000050409037.597697")
        );

        let mut ctx2 = Context::new();
        ctx2.precision(5).unwrap().rounding_mode(RoundingMode::Up);
        assert_eq!(d("1").div(&d("3"), &ctx2), d("0.33334"));

        // special values
        assert!(ZERO.div(&ZERO, &ctx).is_nan());
        assert!(INF_POS.div(&INF_NEG, &ctx).is_nan());
        assert!(d("1").div(&ZERO, &ctx).is_inf_pos());
        assert!(d("-1").div(&ZERO, &ctx).is_inf_neg());
        assert!(d("1").div(&NEG_ZERO, &ctx).is_inf_neg());
        assert!(ZERO.div(&d("-5"), &ctx).is_neg());
        assert!(d("5").div(&INF_NEG, &ctx).is_zero());
        assert!(d("5").div(&INF_NEG, &ctx).is_neg());
        assert!(INF_NEG.div(&d("2"), &ctx).is_inf_neg());
        assert!(NAN.div(&d("2"), &ctx).is_nan());
    }

    #[test]
    fn test_div_to_int() {
        let ctx = Context::new();

        assert_eq!(d("10").div_to_int(&d("3"), &ctx), d("3"));
        assert_eq!(d("-10").div_to_int(&d("3"), &ctx), d("-3"));
        assert_eq!(d("5.1").div_to_int(&d("0.2"), &ctx), d("25"));
        assert!(d("1").div_to_int(&d("3"), &ctx).is_zero());
        assert!(d("-1").div_to_int(&d("3"), &ctx).is_neg());
        assert!(d("1").div_to_int(&ZERO, &ctx).is_inf_pos());
        assert!(d("1").div_to_int(&INF_POS, &ctx).is_zero());
    }

    #[test]
    fn test_modulo() {
        let mut ctx = Context::new();

        assert_eq!(d("10").modulo(&d("3"), &ctx), d("1"));
        assert_eq!(d("-10").modulo(&d("3"), &ctx), d("-1"));
        assert_eq!(d("10").modulo(&d("-3"), &ctx), d("1"));
        assert_eq!(d("5.5").modulo(&d("2"), &ctx), d("1.5"));
        assert_eq!(d("1").modulo(&d("0.3"), &ctx), d("0.1"));

        ctx.modulo(Modulo::Euclid);
        assert_eq!(d("-10").modulo(&d("3"), &ctx), d("2"));
        assert_eq!(d("-10").modulo(&d("-3"), &ctx), d("2"));
        assert_eq!(d("10").modulo(&d("-3"), &ctx), d("1"));

        ctx.modulo(Modulo::Rounding(RoundingMode::Floor));
        assert_eq!(d("-10").modulo(&d("3"), &ctx), d("2"));
        assert_eq!(d("10").modulo(&d("-3"), &ctx), d("-2"));

        ctx.modulo(Modulo::Rounding(RoundingMode::HalfEven));
        assert_eq!(d("10").modulo(&d("4"), &ctx), d("2"));
        assert_eq!(d("11").modulo(&d("4"), &ctx), d("-1"));

        // special values
        assert!(INF_POS.modulo(&d("1"), &ctx).is_nan());
        assert!(d("1").modulo(&ZERO, &ctx).is_nan());
        assert!(d("1").modulo(&NAN, &ctx).is_nan());
        assert_eq!(d("1.5").modulo(&INF_NEG, &ctx), d("1.5"));
        assert!(NEG_ZERO.modulo(&d("3"), &ctx).is_neg());
    }

    #[test]
    fn test_divide_dp() {
        let ctx = Context::new();

        let q = divide(&d("10"), &d("3"), 2, RoundingMode::HalfUp, true, &ctx);
        assert_eq!(q, d("3.33"));

        // fewer than zero digits requested
        let q = divide(&d("1"), &d("300"), 0, RoundingMode::Down, true, &ctx);
        assert!(q.is_zero());
        let q = divide(&d("1"), &d("300"), 0, RoundingMode::Up, true, &ctx);
        assert_eq!(q, d("1"));
    }

    #[test]
    fn test_div_random() {
        let ctx = Context::new();
        for _ in 0..1000 {
            let a = rand::random::<i32>() as i64;
            let b = (rand::random::<i32>() >> 8) as i64;
            if b == 0 {
                continue;
            }
            let p = Decimal::from_i64(a * b);
            assert_eq!(p.div(&Decimal::from_i64(b), &ctx), Decimal::from_i64(a));
            assert_eq!(p.div_to_int(&Decimal::from_i64(b), &ctx), Decimal::from_i64(a));
            assert!(p.modulo(&Decimal::from_i64(b), &ctx).is_zero());
        }
    }
}
