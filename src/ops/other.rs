//! Auxiliary operations: rounding to a multiple, sums, extremes, random values and fractions.

use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::ctx::InternalGuard;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::LOG_BASE;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::ext::NAN;
use crate::ext::ZERO;
use crate::num::Num;
use crate::ops::div::divide;
use core::cmp::Ordering;

#[cfg(feature = "random")]
use crate::defs::Word;
#[cfg(feature = "random")]
use crate::defs::BASE;
#[cfg(feature = "random")]
use crate::defs::MAX_DIGITS;
#[cfg(feature = "random")]
use crate::ext::check_int;
#[cfg(feature = "random")]
use crate::mantissa::pow10;
#[cfg(feature = "random")]
use crate::mantissa::word_len;
#[cfg(feature = "random")]
use crate::mantissa::WordBuf;

impl Decimal {
    /// Returns the multiple of `y` nearest to `self`, using the rounding mode `rm`,
    /// or the rounding mode of `ctx` if `rm` is None.
    ///
    /// A zero `y` gives zero with the sign of `self`, an infinite `y` gives infinity with the sign of `self`.
    pub fn to_nearest(&self, y: &Self, rm: Option<RoundingMode>, ctx: &Context) -> Self {
        let rm = rm.unwrap_or_else(|| ctx.get_rounding_mode());

        if !self.is_finite() {
            return if y.is_nan() { NAN } else { self.clone() };
        }

        match (&y.inner, self.get_sign()) {
            (Flavor::NaN, _) | (_, None) => NAN,
            (Flavor::Inf(_), Some(s)) => Decimal { inner: Flavor::Inf(s) },
            (Flavor::Zero(_), Some(s)) => Decimal { inner: Flavor::Zero(s) },
            (Flavor::Finite(_), _) => {
                let x = {
                    let _guard = InternalGuard::new();
                    divide(self, y, 0, rm, true, ctx).mul(y, ctx)
                };
                x.clamp_exp(ctx)
            }
        }
    }

    /// Returns the square root of the sum of the squares of `args`, rounded to the precision of `ctx`.
    /// Any infinite argument gives positive infinity, otherwise any NaN gives NaN.
    pub fn hypot(args: &[Decimal], ctx: &Context) -> Self {
        let t = {
            let _guard = InternalGuard::new();
            let mut t = ZERO;

            for n in args {
                match &n.inner {
                    Flavor::Inf(_) => return Decimal { inner: Flavor::Inf(Sign::Pos) },
                    Flavor::NaN => t = NAN,
                    _ if t.is_nan() => {}
                    _ => t = t.add(&n.mul(n, ctx), ctx),
                }
            }

            t
        };

        t.sqrt(ctx)
    }

    /// Returns the sum of `args` rounded to the precision of `ctx`. The sum of no arguments is zero.
    pub fn sum(args: &[Decimal], ctx: &Context) -> Self {
        let x = {
            let _guard = InternalGuard::new();
            let mut iter = args.iter();
            let mut x = match iter.next() {
                Some(v) => v.clone(),
                None => return ZERO,
            };

            for v in iter {
                if x.is_nan() {
                    break;
                }
                x = x.add(v, ctx);
            }

            x
        };

        x.finalize(ctx.get_precision(), ctx.get_rounding_mode(), false, ctx)
    }

    /// Returns the greatest of `args`. Positive zero is greater than negative zero.
    /// NaN among the arguments, or no arguments at all, give NaN.
    pub fn max(args: &[Decimal]) -> Self {
        extreme(args, Ordering::Less)
    }

    /// Returns the smallest of `args`. Negative zero is smaller than positive zero.
    /// NaN among the arguments, or no arguments at all, give NaN.
    pub fn min(args: &[Decimal]) -> Self {
        extreme(args, Ordering::Greater)
    }

    /// Returns `self` limited to the range [min, max].
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `min` is greater than `max`.
    pub fn clamp(&self, min: &Self, max: &Self) -> Result<Self, Error> {
        if min.is_nan() || max.is_nan() {
            return Ok(NAN);
        }

        if min.gt(max) {
            return Err(Error::InvalidArgument(max.to_string()));
        }

        Ok(if self.lt(min) {
            min.clone()
        } else if self.gt(max) {
            max.clone()
        } else {
            self.clone()
        })
    }

    /// Returns a random value in [0, 1) with `sd` significant decimal places,
    /// or the precision of `ctx` if `sd` is None.
    /// The digits come from the operating system if `crypto` is set in `ctx`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `sd` is not in the range [1, 1e9].
    #[cfg(feature = "random")]
    pub fn random(sd: Option<i64>, ctx: &Context) -> Result<Self, Error> {
        use rand::Rng;
        use rand::RngCore;

        let sd = match sd {
            Some(sd) => {
                check_int(sd, 1, MAX_DIGITS)?;
                sd
            }
            None => ctx.get_precision(),
        };

        let k = ((sd + LOG_BASE - 1) / LOG_BASE) as usize;
        let mut rd = WordBuf::new();

        if ctx.get_crypto() {
            let mut rng = rand::rngs::OsRng;
            while rd.len() < k {
                // values above 4.29e9 would make the low words uneven
                let n = rng.next_u32();
                if n < 4_290_000_000 {
                    rd.push(n % BASE);
                }
            }
        } else {
            let mut rng = rand::thread_rng();
            for _ in 0..k {
                rd.push(rng.gen_range(0..BASE) as Word);
            }
        }

        // zero the digits beyond sd
        let rem = sd % LOG_BASE;
        if rem != 0 {
            let n = pow10(LOG_BASE - rem);
            rd[k - 1] = rd[k - 1] / n * n;
        }

        rd.trunc_trailing_zeroes();
        let shift = rd.trunc_leading_zeroes();

        if rd.len() == 0 {
            return Ok(ZERO);
        }

        let e = -1 - shift as Exponent * LOG_BASE - (LOG_BASE - word_len(rd[0]));

        Ok(Decimal::from_num(Num {
            s: Sign::Pos,
            e,
            d: rd,
        }))
    }

    /// Returns `self` as a fraction `(numerator, denominator)` with the denominator
    /// not greater than `max_d`, or with the smallest denominator that represents `self` exactly
    /// if `max_d` is None. The numerator carries the sign.
    ///
    /// Of the two last candidates of the continued fraction expansion, the one closer to `self` is returned.
    /// Non-finite values are returned as `(self, 1)`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `max_d` is not an integer greater than or equal to 1.
    pub fn to_fraction(&self, max_d: Option<&Self>, ctx: &Context) -> Result<(Self, Self), Error> {
        let xn = match &self.inner {
            Flavor::Finite(n) => n,
            _ => return Ok((self.clone(), ONE.clone())),
        };

        // d = 10^e is the denominator of the exact fraction
        let e = xn.sd() - xn.e - 1;
        let mut d = Decimal::from_scaled(1, e);
        let exact_d = if e > 0 { d.clone() } else { ONE.clone() };

        let max_d = match max_d {
            None => exact_d,
            Some(m) => {
                if !m.is_integer() || m.lt(&ONE) {
                    return Err(Error::InvalidArgument(m.to_string()));
                }
                if m.gt(&d) {
                    exact_d
                } else {
                    m.clone()
                }
            }
        };

        let wpr = xn.d.len() as Exponent * LOG_BASE * 2;
        let wctx = ctx.with(wpr, RoundingMode::Down);
        let _guard = InternalGuard::new();

        let digits = xn.digits();
        let mut n = Decimal::from_num(Num::from_digits(Sign::Pos, digits.as_bytes(), digits.len() as Exponent - 1));
        let (mut n0, mut n1) = (ZERO, ONE.clone());
        let (mut d0, mut d1) = (ONE.clone(), ZERO);

        loop {
            let q = divide(&n, &d, 0, RoundingMode::Down, true, &wctx);
            let d2 = d0.add(&q.mul(&d1, &wctx), &wctx);
            if d2.gt(&max_d) {
                break;
            }

            d0 = core::mem::replace(&mut d1, d2);
            let n2 = n0.add(&q.mul(&n1, &wctx), &wctx);
            n0 = core::mem::replace(&mut n1, n2);
            let r = n.sub(&q.mul(&d, &wctx), &wctx);
            n = core::mem::replace(&mut d, r);
        }

        let k = divide(&max_d.sub(&d0, &wctx), &d1, 0, RoundingMode::Down, true, &wctx);
        let n0 = n0.add(&k.mul(&n1, &wctx), &wctx).with_sign(xn.s);
        let d0 = d0.add(&k.mul(&d1, &wctx), &wctx);
        let n1 = n1.with_sign(xn.s);

        let dist = |n: &Decimal, d: &Decimal| {
            divide(n, d, wpr, RoundingMode::Down, false, &wctx)
                .sub(self, &wctx)
                .abs()
        };

        Ok(if dist(&n1, &d1).lte(&dist(&n0, &d0)) {
            (n1, d1)
        } else {
            (n0, d0)
        })
    }
}

// Picks the extreme value: `replace_when` is the ordering of the current candidate to the next argument
// that makes the next argument the new candidate.
fn extreme(args: &[Decimal], replace_when: Ordering) -> Decimal {
    let mut iter = args.iter();
    let mut x = match iter.next() {
        Some(v) => v.clone(),
        None => return NAN,
    };

    let zero_sign = if replace_when == Ordering::Less { Sign::Neg } else { Sign::Pos };

    for y in iter {
        if y.is_nan() {
            return NAN;
        }

        match x.cmp(y) {
            Some(o) if o == replace_when => x = y.clone(),
            Some(Ordering::Equal) if x.is_zero() && x.get_sign() == Some(zero_sign) => x = y.clone(),
            _ => {}
        }
    }

    x
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

    fn v(s: &[&str]) -> Vec<Decimal> {
        s.iter().map(|s| d(s)).collect()
    }

    #[test]
    fn test_to_nearest() {
        let ctx = Context::new();

        assert_eq!(d("1.39").to_nearest(&d("0.25"), None, &ctx), d("1.5"));
        assert_eq!(d("9.499").to_nearest(&d("0.5"), Some(RoundingMode::Down), &ctx), d("9"));
        assert_eq!(d("-8").to_nearest(&d("3"), None, &ctx), d("-9"));
        assert_eq!(d("12.34").to_nearest(&d("0.1"), None, &ctx), d("12.3"));
        assert_eq!(d("12.35").to_nearest(&d("0.1"), Some(RoundingMode::HalfEven), &ctx), d("12.4"));

        let r = d("-5").to_nearest(&ZERO, None, &ctx);
        assert!(r.is_zero() && r.is_neg());
        assert!(d("-5").to_nearest(&INF_POS, None, &ctx).is_inf_neg());
        assert!(d("5").to_nearest(&NAN, None, &ctx).is_nan());
        assert!(INF_POS.to_nearest(&d("2"), None, &ctx).is_inf_pos());
        assert!(INF_POS.to_nearest(&NAN, None, &ctx).is_nan());
        assert!(NAN.to_nearest(&d("2"), None, &ctx).is_nan());
    }

    #[test]
    fn test_hypot_sum() {
        let ctx = Context::new();

        assert_eq!(Decimal::hypot(&v(&["3", "4"]), &ctx), d("5"));
        assert_eq!(Decimal::hypot(&v(&["-3"]), &ctx), d("3"));
        assert_eq!(Decimal::hypot(&v(&["1", "1"]), &ctx), d("1.4142135623730950488"));
        assert!(Decimal::hypot(&[], &ctx).is_zero());
        assert!(Decimal::hypot(&[NAN, INF_NEG], &ctx).is_inf_pos());
        assert!(Decimal::hypot(&[NAN, d("1")], &ctx).is_nan());

        assert_eq!(Decimal::sum(&v(&["0.1", "0.2"]), &ctx), d("0.3"));
        assert_eq!(Decimal::sum(&v(&["1e20", "1", "-1e20"]), &ctx), d("1"));
        assert_eq!(
            Decimal::sum(&v(&["1.23456789012345678901234", "0"]), &ctx),
            d("1.234567890123456789")
        );
        assert!(Decimal::sum(&[], &ctx).is_zero());
        assert!(Decimal::sum(&[d("1"), NAN, d("2")], &ctx).is_nan());
        assert!(Decimal::sum(&[INF_POS, INF_NEG], &ctx).is_nan());
    }

    #[test]
    fn test_max_min_clamp() {
        let ctx = Context::new();

        assert_eq!(Decimal::max(&v(&["1", "3", "2"])), d("3"));
        assert_eq!(Decimal::min(&v(&["1", "3", "-2"])), d("-2"));
        assert!(Decimal::max(&[NEG_ZERO, ZERO]).is_pos());
        assert!(Decimal::min(&[ZERO, NEG_ZERO]).is_neg());
        assert!(Decimal::max(&[d("1"), NAN]).is_nan());
        assert!(Decimal::max(&[]).is_nan());
        assert!(Decimal::min(&[]).is_nan());
        assert!(Decimal::min(&[d("1"), INF_NEG]).is_inf_neg());
        assert!(Decimal::max(&[INF_POS, d("1")]).is_inf_pos());

        assert_eq!(d("5").clamp(&d("1"), &d("3")).unwrap(), d("3"));
        assert_eq!(d("0").clamp(&d("1"), &d("3")).unwrap(), d("1"));
        assert_eq!(d("2").clamp(&d("1"), &d("3")).unwrap(), d("2"));
        assert!(d("2").clamp(&NAN, &d("3")).unwrap().is_nan());
        assert!(NAN.clamp(&d("1"), &d("3")).unwrap().is_nan());
        assert_eq!(
            d("2").clamp(&d("3"), &d("1")).unwrap_err(),
            Error::InvalidArgument("1".into())
        );

        let _ = ctx;
    }

    #[cfg(feature = "random")]
    #[test]
    fn test_random() {
        let mut ctx = Context::new();

        for sd in [1, 5, 7, 10, 20, 50] {
            for _ in 0..100 {
                let r = Decimal::random(Some(sd), &ctx).unwrap();
                assert!(r.gte(&ZERO) && r.lt(&ONE));
                assert!(r.decimal_places().unwrap() <= sd);
            }
        }

        let r = Decimal::random(None, &ctx).unwrap();
        assert!(r.decimal_places().unwrap() <= 20);
        assert!(Decimal::random(Some(0), &ctx).is_err());

        ctx.crypto(true).unwrap();
        let r = Decimal::random(Some(30), &ctx).unwrap();
        assert!(r.gte(&ZERO) && r.lt(&ONE));
        assert!(r.decimal_places().unwrap() <= 30);
    }

    #[test]
    fn test_to_fraction() {
        let ctx = Context::new();
        let frac = |s: &str, m: Option<&str>| {
            let m = m.map(d);
            d(s).to_fraction(m.as_ref(), &ctx).unwrap()
        };

        assert_eq!(frac("0.75", None), (d("3"), d("4")));
        assert_eq!(frac("3.14159", None), (d("314159"), d("100000")));
        assert_eq!(frac("3.14159", Some("100")), (d("311"), d("99")));
        assert_eq!(frac("3.14159", Some("1000")), (d("355"), d("113")));
        assert_eq!(frac("0.1", None), (d("1"), d("10")));
        assert_eq!(frac("1.5", Some("1")), (d("1"), d("1")));
        assert_eq!(frac("-0.333", Some("10")), (d("-1"), d("3")));
        assert_eq!(frac("100", None), (d("100"), d("1")));
        assert_eq!(frac("123.456", None), (d("15432"), d("125")));
        assert_eq!(frac("1e-5", Some("1000")), (d("0"), d("1")));
        assert_eq!(frac("2.718281828459045", Some("1000000")), (d("1084483"), d("398959")));

        let (n, d1) = frac("-0", None);
        assert!(n.is_zero() && n.is_neg());
        assert_eq!(d1, d("1"));
        let (n, _) = frac("-0.5", Some("1"));
        assert!(n.is_zero() && n.is_neg());
        assert!(frac("Infinity", None).0.is_inf_pos());

        assert!(d("0.5").to_fraction(Some(&d("0")), &ctx).is_err());
        assert!(d("0.5").to_fraction(Some(&d("1.5")), &ctx).is_err());
        assert!(d("0.5").to_fraction(Some(&NAN), &ctx).is_err());
    }
}
