//! Taylor series of sine, cosine and their hyperbolic counterparts.

use crate::ctx::Context;
use crate::ctx::InternalGuard;
use crate::defs::RoundingMode;
use crate::defs::LOG_BASE;
use crate::ext::Decimal;
use crate::ops::div::divide;

/// Sums `y ± x^n/n! ∓ x^(n+2)/(n+2)! ± ...` starting with the first term `y`.
/// `n` is 2 for sine and 1 for cosine, with `y` being `x` and 1 respectively.
/// Signs alternate unless `hyperbolic` is true.
///
/// Terms are divided with the precision of `ctx` rounding towards zero.
/// The summation stops when the first `ceil(p/7) + 1` words of two consecutive sums match,
/// and the sum is truncated to that many words.
pub(crate) fn taylor_series(mut n: u64, x: &Decimal, y: &Decimal, hyperbolic: bool, ctx: &Context) -> Decimal {
    let pr = ctx.get_precision();
    let k = ((pr + LOG_BASE - 1) / LOG_BASE) as usize;

    let _guard = InternalGuard::new();

    let x2 = x.mul(x, ctx);
    let mut term = y.clone();
    let mut sum = y.clone();

    let next_term = |t: &Decimal, n: &mut u64| {
        let d = Decimal::from_u64(*n * (*n + 1));
        *n += 2;
        divide(&t.mul(&x2, ctx), &d, pr, RoundingMode::Down, false, ctx)
    };

    loop {
        let t = next_term(&term, &mut n);
        let u = if hyperbolic { sum.add(&t, ctx) } else { sum.sub(&t, ctx) };
        term = next_term(&t, &mut n);
        sum = u.add(&term, ctx);

        let (sw, uw) = (sum.words(), u.words());
        if sw.len() > k && uw.len() > k && sw[..=k] == uw[..=k] {
            break;
        }
    }

    match sum.to_num() {
        Some(mut r) => {
            r.d.trunc_to(k + 1);
            Decimal::from_num(r)
        }
        None => sum,
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::parse(s, &Context::new()).unwrap()
    }

    #[test]
    fn test_taylor_series() {
        let mut ctx = Context::new();
        ctx.precision(30).unwrap();

        // sin(0.5) = 0.479425538604203000273287935215571388...
        let x = d("0.5");
        let s = taylor_series(2, &x, &x, false, &ctx);
        assert_eq!(
            s.to_significant_digits(25, None, &ctx).unwrap(),
            d("0.4794255386042030002732879")
        );

        // cos(0.5) = 0.877582561890372716116281582603829651...
        let c = taylor_series(1, &x, &d("1"), false, &ctx);
        assert_eq!(
            c.to_significant_digits(25, None, &ctx).unwrap(),
            d("0.8775825618903727161162816")
        );

        // sinh(0.5) = 0.521095305493747361622425626411491559...
        let sh = taylor_series(2, &x, &x, true, &ctx);
        assert_eq!(
            sh.to_significant_digits(25, None, &ctx).unwrap(),
            d("0.5210953054937473616224256")
        );

        // cosh(0.5) = 1.127625965206380785226225161402672012...
        let ch = taylor_series(1, &x, &d("1"), true, &ctx);
        assert_eq!(
            ch.to_significant_digits(25, None, &ctx).unwrap(),
            d("1.127625965206380785226225")
        );
    }
}
