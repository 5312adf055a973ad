//! Reduction of the argument of trigonometric functions.

use crate::common::consts::HALF;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::ext::Decimal;
use crate::ops::consts::pi;

/// Quadrant of an angle: 1 for [0, pi/2], 2 for (pi/2, pi], 3 and 4 for the same ranges of negative angles
/// counted from -pi and 0 respectively.
pub(crate) type Quadrant = u8;

/// Returns `|x|` reduced to [0, pi/2] and the quadrant of `x`.
/// Operations are rounded to the precision of `ctx` towards zero.
///
/// ## Errors
///
///  - PrecisionLimitExceeded: the precision of `ctx` exceeds the number of known digits of pi.
pub(crate) fn to_less_than_half_pi(x: &Decimal, ctx: &Context) -> Result<(Decimal, Quadrant), Error> {
    let is_neg = x.is_neg();
    let pi = pi(ctx.get_precision(), RoundingMode::Down, ctx)?;
    let half_pi = pi.mul(&HALF, ctx);
    let x = x.abs();

    if x.lte(&half_pi) {
        return Ok((x, if is_neg { 4 } else { 1 }));
    }

    let t = x.div_to_int(&pi, ctx);

    let (x, quadrant) = if t.is_zero() {
        (x, if is_neg { 3 } else { 2 })
    } else {
        let x = x.sub(&t.mul(&pi, ctx), ctx);
        let odd = t.num().map_or(false, |n| n.is_odd());

        // 0 <= x < pi
        if x.lte(&half_pi) {
            let quadrant = match (odd, is_neg) {
                (true, true) => 2,
                (true, false) => 3,
                (false, true) => 4,
                (false, false) => 1,
            };
            return Ok((x, quadrant));
        }

        let quadrant = match (odd, is_neg) {
            (true, true) => 1,
            (true, false) => 4,
            (false, true) => 3,
            (false, false) => 2,
        };
        (x, quadrant)
    };

    Ok((x.sub(&pi, ctx).abs(), quadrant))
}

#[cfg(test)]
mod tests {

    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::parse(s, &Context::new()).unwrap()
    }

    #[test]
    fn test_to_less_than_half_pi() {
        let mut ctx = Context::new();
        ctx.precision(30).unwrap().rounding_mode(RoundingMode::Down);

        assert_eq!(to_less_than_half_pi(&d("1"), &ctx).unwrap(), (d("1"), 1));
        assert_eq!(to_less_than_half_pi(&d("-1"), &ctx).unwrap(), (d("1"), 4));

        // pi - 2
        let (x, q) = to_less_than_half_pi(&d("2"), &ctx).unwrap();
        assert_eq!(q, 2);
        assert_eq!(x, d("1.14159265358979323846264338327"));

        let (x, q) = to_less_than_half_pi(&d("-2"), &ctx).unwrap();
        assert_eq!(q, 3);
        assert_eq!(x, d("1.14159265358979323846264338327"));

        // 4 - pi
        let (x, q) = to_less_than_half_pi(&d("4"), &ctx).unwrap();
        assert_eq!(q, 3);
        assert_eq!(x, d("0.85840734641020676153735661673"));

        // 2pi - 6
        let (x, q) = to_less_than_half_pi(&d("6"), &ctx).unwrap();
        assert_eq!(q, 4);
        assert_eq!(x, d("0.28318530717958647692528676654"));

        let mut ctx = Context::new();
        ctx.precision(1030).unwrap();
        assert_eq!(to_less_than_half_pi(&d("1"), &ctx).unwrap_err(), Error::PrecisionLimitExceeded);
    }
}
