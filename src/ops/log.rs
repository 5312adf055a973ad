//! Logarithms.

use crate::common::consts::ONE;
use crate::common::consts::TWO;
use crate::common::util::is_nines;
use crate::common::util::slice_digits;
use crate::ctx::Context;
use crate::ctx::InternalGuard;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::ext::INF_NEG;
use crate::ext::NAN;
use crate::ext::ZERO;
use crate::num::check_rounding_digits;
use crate::ops::consts::ln10;
use crate::ops::div::divide;
use crate::ops::ln::natural_logarithm;

impl Decimal {
    /// Computes the logarithm of a number with base `b`. The result is rounded to the precision of `ctx`.
    ///
    /// The result is NaN if `b` is negative, zero, one or not finite.
    ///
    /// ## Errors
    ///
    ///  - PrecisionLimitExceeded: the computation needs more digits of ln(10) than known.
    pub fn log(&self, b: &Self, ctx: &Context) -> Result<Self, Error> {
        logarithm(self, Some(b), ctx)
    }

    /// Computes the logarithm of a number with base 10.
    ///
    /// ## Errors
    ///
    ///  - PrecisionLimitExceeded: the computation needs more digits of ln(10) than known.
    pub fn log10(&self, ctx: &Context) -> Result<Self, Error> {
        logarithm(self, None, ctx)
    }

    /// Computes the logarithm of a number with base 2.
    ///
    /// ## Errors
    ///
    ///  - PrecisionLimitExceeded: the computation needs more digits of ln(10) than known.
    pub fn log2(&self, ctx: &Context) -> Result<Self, Error> {
        logarithm(self, Some(&*TWO), ctx)
    }
}

/// Computes `ln(arg) / ln(base)`; `base` of None stands for 10.
fn logarithm(arg: &Decimal, base: Option<&Decimal>, ctx: &Context) -> Result<Decimal, Error> {
    let ten = Decimal::from_u8(10);

    let is_base10 = match base {
        None => true,
        Some(b) => {
            match &b.inner {
                Flavor::Finite(n) if n.s.is_positive() => {}
                _ => return Ok(NAN),
            }
            if b.eq(&ONE) {
                return Ok(NAN);
            }
            b.eq(&ten)
        }
    };

    let d = match &arg.inner {
        Flavor::Zero(_) => return Ok(INF_NEG),
        Flavor::NaN | Flavor::Inf(crate::defs::Sign::Neg) => return Ok(NAN),
        Flavor::Inf(_) => return Ok(arg.clone()),
        Flavor::Finite(n) if n.s.is_negative() => return Ok(NAN),
        Flavor::Finite(n) => &n.d,
    };

    if arg.eq(&ONE) {
        return Ok(ZERO);
    }

    // with base 10 the result is an integer only for integer powers of 10
    let inf = is_base10 && {
        if d.len() > 1 {
            true
        } else {
            let mut k = d[0];
            while k % 10 == 0 {
                k /= 10;
            }
            k != 1
        }
    };

    let pr = ctx.get_precision();
    let rm = ctx.get_rounding_mode();

    let r = {
        let _guard = InternalGuard::new();

        let mut sd = pr + 5;

        let compute = |sd: Exponent| -> Result<Decimal, Error> {
            let num = natural_logarithm(arg, Some(sd), ctx)?;
            let denominator = match base {
                Some(b) if !is_base10 => natural_logarithm(b, Some(sd), ctx)?,
                _ => ln10(sd + 10, ctx)?,
            };
            Ok(divide(&num, &denominator, sd, RoundingMode::Down, false, ctx))
        };

        // 5 rounding digits
        let mut r = compute(sd)?;

        let mut k = pr;
        if check_rounding_digits(r.words(), k, rm, None) {
            loop {
                sd += 10;
                tracing::trace!(sd, "log: rounding boundary, widening precision");
                r = compute(sd)?;

                if !inf {
                    // 14 nines from the second rounding digit, the first one may be 4
                    if is_nines(slice_digits(&r.digits(), k + 1, k + 15), 14) {
                        r = r.finalize(pr + 1, RoundingMode::Up, false, ctx);
                    }
                    break;
                }

                k += 10;
                if !check_rounding_digits(r.words(), k, rm, None) {
                    break;
                }
            }
        }

        r
    };

    Ok(r.finalize(pr, rm, false, ctx))
}
