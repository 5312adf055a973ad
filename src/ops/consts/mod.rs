//! Constants pi and ln(10) with a fixed number of known digits.

mod ln10;
mod pi;

use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::ext::Decimal;
use crate::num::Num;
use lazy_static::lazy_static;

/// Number of known significant digits of pi.
pub(crate) const PI_PRECISION: Exponent = 1025;

/// Number of known significant digits of ln(10).
pub(crate) const LN10_PRECISION: Exponent = 1025;

lazy_static! {
    static ref PI: Num = Num::from_digits(Sign::Pos, pi::PI_DIGITS.as_bytes(), 0);
    static ref LN10: Num = Num::from_digits(Sign::Pos, ln10::LN10_DIGITS.as_bytes(), 0);
}

/// Returns pi rounded to `sd` significant digits using `rm`.
///
/// ## Errors
///
///  - PrecisionLimitExceeded: `sd` exceeds the number of known digits.
pub(crate) fn pi(sd: Exponent, rm: RoundingMode, ctx: &Context) -> Result<Decimal, Error> {
    if sd > PI_PRECISION {
        tracing::trace!(sd, limit = PI_PRECISION, "pi precision limit exceeded");
        return Err(Error::PrecisionLimitExceeded);
    }

    Ok(Decimal::from_num(PI.clone()).finalize(sd, rm, true, ctx))
}

/// Returns ln(10) truncated to `sd` significant digits.
///
/// ## Errors
///
///  - PrecisionLimitExceeded: `sd` exceeds the number of known digits.
pub(crate) fn ln10(sd: Exponent, ctx: &Context) -> Result<Decimal, Error> {
    if sd > LN10_PRECISION {
        tracing::trace!(sd, limit = LN10_PRECISION, "ln(10) precision limit exceeded");
        return Err(Error::PrecisionLimitExceeded);
    }

    Ok(Decimal::from_num(LN10.clone()).finalize(sd, RoundingMode::Down, true, ctx))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_consts() {
        let ctx = Context::new();

        let p = pi(10, RoundingMode::HalfEven, &ctx).unwrap();
        assert_eq!(p.digits(), "3141592654");
        assert_eq!(p.get_exponent(), Some(0));

        let p = pi(10, RoundingMode::Down, &ctx).unwrap();
        assert_eq!(p.digits(), "3141592653");

        let p = pi(1025, RoundingMode::Down, &ctx).unwrap();
        assert_eq!(p.digits().len(), 1025);
        assert!(p.digits().ends_with("9167058"));

        // truncated digits still round up
        let p = pi(1025, RoundingMode::Up, &ctx).unwrap();
        assert!(p.digits().ends_with("9167059"));

        let l = ln10(20, &ctx).unwrap();
        assert_eq!(l.digits(), "23025850929940456840");

        assert_eq!(pi(1026, RoundingMode::Down, &ctx).unwrap_err(), Error::PrecisionLimitExceeded);
        assert_eq!(ln10(2000, &ctx).unwrap_err(), Error::PrecisionLimitExceeded);
    }
}
