//! Exponentiation.

use crate::common::consts::ONE;
use crate::common::util::is_nines;
use crate::common::util::slice_digits;
use crate::ctx::Context;
use crate::ctx::InternalGuard;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::MAX_SAFE_INTEGER;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::ext::INF_POS;
use crate::ext::NAN;
use crate::ext::ZERO;
use crate::num::check_rounding_digits;
use crate::num::Num;
use crate::ops::exp::natural_exponential;
use crate::ops::ln::natural_logarithm;
use crate::ops::util::int_pow;

impl Decimal {
    /// Computes `self` to the power of `y`. The result is rounded to the precision of `ctx`.
    ///
    /// Integer powers up to 2^53 - 1 are computed by repeated squaring, other powers as `exp(y * ln(self))`.
    /// A negative number to a non-integer power is NaN.
    ///
    /// ## Errors
    ///
    ///  - PrecisionLimitExceeded: the computation needs more digits of ln(10) than known.
    pub fn pow(&self, y: &Self, ctx: &Context) -> Result<Self, Error> {
        let (xn, yn) = match (&self.inner, &y.inner) {
            (Flavor::Finite(xn), Flavor::Finite(yn)) => (xn, yn),
            _ => return Ok(pow_special(self, y)),
        };

        if self.eq(&ONE) {
            return Ok(self.clone());
        }

        let pr = ctx.get_precision();
        let rm = ctx.get_rounding_mode();

        if y.eq(&ONE) {
            return Ok(self.clone().finalize(pr, rm, false, ctx));
        }

        if yn.is_int() {
            if let Some(k) = yn.to_u64().filter(|k| *k <= MAX_SAFE_INTEGER) {
                let r = int_pow(xn, k, pr);
                return Ok(if yn.s.is_negative() {
                    ONE.div(&r, ctx)
                } else {
                    r.finalize(pr, rm, false, ctx)
                });
            }
        }

        let mut s = xn.s;
        if s.is_negative() {
            if !yn.is_int() {
                return Ok(NAN);
            }

            if !yn.is_odd() {
                s = Sign::Pos;
            }

            // (-1)^y
            if xn.e == 0 && xn.d.len() == 1 && xn.d[0] == 1 {
                return Ok(self.clone().with_sign(s));
            }
        }

        let e = estimate_exponent(xn, y.to_f64());
        if e > ctx.get_max_e() + 1 || e < ctx.get_min_e() - 1 {
            return Ok(if e > 0 {
                Decimal {
                    inner: Flavor::Inf(s),
                }
            } else {
                ZERO
            });
        }

        let x = self.abs();
        let r = {
            let _guard = InternalGuard::new();
            let wctx = ctx.with(pr, RoundingMode::Down);

            // guard digits for ln(x) grow with the magnitude of the result
            let k = (e.to_string().len() as Exponent).min(12);

            let exp_ln = |sd: Exponent| -> Result<Decimal, Error> {
                let t = y.mul(&natural_logarithm(&x, Some(sd + k), &wctx)?, &wctx);
                Ok(natural_exponential(&t, Some(sd), &wctx))
            };

            let mut r = exp_ln(pr)?;

            // r is infinite if, e.g., 0.9999999999999999^-1e40
            if let Flavor::Finite(_) = r.inner {
                // 5 rounding digits
                r = r.finalize(pr + 5, RoundingMode::Down, false, &wctx);

                if check_rounding_digits(r.words(), pr, rm, None) {
                    let sd = pr + 10;
                    tracing::trace!(sd, "pow: rounding boundary, widening precision");

                    r = exp_ln(sd)?.finalize(sd + 5, RoundingMode::Down, false, &wctx);

                    // 14 nines from the second rounding digit, the first one may be 4 or 9
                    if is_nines(slice_digits(&r.digits(), pr + 1, pr + 15), 14) {
                        r = r.finalize(pr + 1, RoundingMode::Up, false, &wctx);
                    }
                }
            }

            r.with_sign(s)
        };

        Ok(r.finalize(pr, rm, false, ctx))
    }
}

/// Estimates the decimal exponent of `|x|^y`.
fn estimate_exponent(x: &Num, y: f64) -> Exponent {
    let k = x.to_f64().abs().powf(y);
    if k == 0.0 || !k.is_finite() {
        let m = format!("0.{}", x.digits()).parse::<f64>().unwrap_or(0.1);
        (y * (m.ln() / core::f64::consts::LN_10 + x.e as f64 + 1.0)).floor() as Exponent
    } else {
        Decimal::from_f64(k).e()
    }
}

// Powers with a zero, infinite or NaN operand.
fn pow_special(x: &Decimal, y: &Decimal) -> Decimal {
    let inf = |s| Decimal {
        inner: Flavor::Inf(s),
    };
    let zero = |s| Decimal {
        inner: Flavor::Zero(s),
    };
    let odd_int = match &y.inner {
        Flavor::Finite(n) => n.is_int() && n.is_odd(),
        _ => false,
    };

    match (&x.inner, &y.inner) {
        (_, Flavor::Zero(_)) => ONE.clone(),
        (Flavor::NaN, _) | (_, Flavor::NaN) => NAN,
        (_, Flavor::Inf(ys)) => {
            let ord = x.abs().cmp(&ONE);
            match ord {
                Some(core::cmp::Ordering::Greater) => {
                    if ys.is_positive() {
                        INF_POS
                    } else {
                        ZERO
                    }
                }
                Some(core::cmp::Ordering::Less) => {
                    if ys.is_positive() {
                        ZERO
                    } else {
                        INF_POS
                    }
                }
                _ => NAN,
            }
        }
        (Flavor::Inf(xs), Flavor::Finite(yn)) => {
            let s = if xs.is_negative() && odd_int { Sign::Neg } else { Sign::Pos };
            if yn.s.is_positive() {
                inf(s)
            } else {
                zero(s)
            }
        }
        (Flavor::Zero(xs), Flavor::Finite(yn)) => {
            let s = if xs.is_negative() && odd_int { Sign::Neg } else { Sign::Pos };
            if yn.s.is_positive() {
                zero(s)
            } else {
                inf(s)
            }
        }
        _ => NAN,
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
    fn test_pow() {
        let ctx = Context::new();

        assert_eq!(d("2").pow(&d("10"), &ctx).unwrap(), d("1024"));
        assert_eq!(d("2").pow(&d("-2"), &ctx).unwrap(), d("0.25"));
        assert_eq!(d("3").pow(&d("-1"), &ctx).unwrap(), d("0.33333333333333333333"));
        assert_eq!(d("-1.5").pow(&d("-3"), &ctx).unwrap(), d("-0.29629629629629629630"));
        assert_eq!(d("-2").pow(&d("3"), &ctx).unwrap(), d("-8"));
        assert_eq!(d("1.1").pow(&d("100"), &ctx).unwrap(), d("13780.612339822270184"));
        assert_eq!(d("2").pow(&d("0.5"), &ctx).unwrap(), d("1.4142135623730950488"));
        assert_eq!(d("4").pow(&d("0.5"), &ctx).unwrap(), d("2"));
        assert_eq!(d("10").pow(&d("-2.5"), &ctx).unwrap(), d("0.0031622776601683793320"));
        assert_eq!(d("0.3").pow(&d("-7.7"), &ctx).unwrap(), d("10621.022739459669717"));
        assert_eq!(d("1").pow(&d("12345.678"), &ctx).unwrap(), d("1"));
        assert_eq!(d("7").pow(&d("1"), &ctx).unwrap(), d("7"));

        // negative base
        assert!(d("-8").pow(&d("0.5"), &ctx).unwrap().is_nan());
        let third = d("1").div(&d("3"), &ctx);
        assert!(d("-8").pow(&third, &ctx).unwrap().is_nan());
        assert_eq!(d("-1").pow(&d("10000000000000000"), &ctx).unwrap(), d("1"));
        assert_eq!(d("-1").pow(&d("10000000000000001"), &ctx).unwrap(), d("-1"));

        // overflow and underflow by exponent estimate
        assert!(d("10").pow(&d("1e16"), &ctx).unwrap().is_inf_pos());
        assert!(d("-10").pow(&d("10000000000000001"), &ctx).unwrap().is_inf_neg());
        let r = d("10").pow(&d("-1e16"), &ctx).unwrap();
        assert!(r.is_zero() && r.is_pos());
    }

    #[test]
    fn test_pow_special() {
        let ctx = Context::new();
        let p = |x: &Decimal, y: &Decimal| x.pow(y, &ctx).unwrap();

        assert!(p(&ZERO, &ZERO).eq(&ONE));
        assert!(p(&NAN, &ZERO).eq(&ONE));
        assert!(p(&INF_POS, &NEG_ZERO).eq(&ONE));
        assert!(p(&NAN, &d("2")).is_nan());
        assert!(p(&d("2"), &NAN).is_nan());
        assert!(p(&d("1"), &NAN).is_nan());

        assert!(p(&ZERO, &d("-1")).is_inf_pos());
        assert!(p(&NEG_ZERO, &d("-1")).is_inf_neg());
        assert!(p(&NEG_ZERO, &d("-2")).is_inf_pos());
        assert!(p(&NEG_ZERO, &d("3")).is_neg());
        assert!(p(&NEG_ZERO, &d("2.5")).is_pos());
        assert!(p(&ZERO, &d("3")).is_zero());

        assert!(p(&INF_POS, &d("2")).is_inf_pos());
        assert!(p(&INF_POS, &d("-2")).is_zero());
        assert!(p(&INF_NEG, &d("3")).is_inf_neg());
        assert!(p(&INF_NEG, &d("2")).is_inf_pos());
        assert!(p(&INF_NEG, &d("-3")).is_neg());
        assert!(p(&INF_NEG, &d("-3")).is_zero());

        assert!(p(&d("2"), &INF_POS).is_inf_pos());
        assert!(p(&d("2"), &INF_NEG).is_zero());
        assert!(p(&d("0.5"), &INF_POS).is_zero());
        assert!(p(&d("-0.5"), &INF_NEG).is_inf_pos());
        assert!(p(&d("1"), &INF_POS).is_nan());
        assert!(p(&d("-1"), &INF_NEG).is_nan());
        assert!(p(&ZERO, &INF_NEG).is_inf_pos());
    }

    #[test]
    fn test_pow_boundary() {
        // the exponent estimate needs extra guard digits in ln(x)
        let mut ctx = Context::new();
        ctx.precision(10).unwrap();
        assert_eq!(
            d("2.32456").pow(&d("2087987436534566.46411"), &ctx).unwrap(),
            d("1.162377823e+764914905173815")
        );
    }
}
