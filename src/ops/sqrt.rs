//! Square root.

use crate::common::consts::HALF;
use crate::common::util::is_exact_candidate;
use crate::common::util::prefix;
use crate::common::util::slice_digits;
use crate::ctx::Context;
use crate::ctx::InternalGuard;
use crate::defs::RoundingMode;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::ext::INF_POS;
use crate::ext::NAN;
use crate::ops::div::divide;
use crate::parser::parse_unchecked;

impl Decimal {
    /// Computes the square root of a number. The result is rounded to the precision of `ctx`.
    ///
    /// The square root of a negative number is NaN; the square root of -0 is -0.
    pub fn sqrt(&self, ctx: &Context) -> Self {
        let n = match &self.inner {
            Flavor::NaN | Flavor::Inf(crate::defs::Sign::Neg) => return NAN,
            Flavor::Inf(_) => return INF_POS,
            Flavor::Zero(_) => return self.clone(),
            Flavor::Finite(n) if n.s.is_negative() => return NAN,
            Flavor::Finite(n) => n,
        };

        let pr = ctx.get_precision();

        let (r, inexact) = {
            let _guard = InternalGuard::new();

            let est = self.to_f64().sqrt();
            let mut r = if est == 0.0 || est.is_infinite() {
                // rescale to an integer with an exponent of the same parity
                let mut digits = n.digits();
                if (digits.len() as i64 + n.e) % 2 == 0 {
                    digits.push('0');
                }
                let s = digits.parse::<f64>().unwrap_or(f64::INFINITY).sqrt();
                let e = (n.e + 1).div_euclid(2) - (n.e < 0 || n.e % 2 != 0) as i64;
                let est = if s.is_infinite() {
                    format!("5e{}", e)
                } else {
                    let m = format!("{:e}", s);
                    let mant = m.split('e').next().unwrap_or("1");
                    format!("{}e{}", mant, e)
                };
                parse_unchecked(&est).unwrap_or_else(|_| self.clone())
            } else {
                Decimal::from_f64(est)
            };

            let mut sd = pr + 3;
            let mut rep = false;
            let mut inexact = false;

            // Newton-Raphson iteration
            loop {
                let t = r;
                r = t
                    .add(&divide(self, &t, sd + 2, RoundingMode::Down, false, ctx), ctx)
                    .mul(&HALF, ctx);

                let td = t.digits();
                let rd = r.digits();
                if prefix(&td, sd) != prefix(&rd, sd) {
                    continue;
                }

                let tail = slice_digits(&rd, sd - 3, sd + 1);
                if tail == "9999" || !rep && tail == "4999" {
                    // nines may repeat infinitely
                    if !rep {
                        let t = t.finalize(pr + 1, RoundingMode::Up, false, ctx);
                        if t.mul(&t, ctx).eq(self) {
                            r = t;
                            break;
                        }
                    }
                    sd += 4;
                    rep = true;
                    tracing::trace!(sd, "sqrt: rounding boundary, widening precision");
                } else {
                    if is_exact_candidate(tail) {
                        r = r.finalize(pr + 1, RoundingMode::Down, false, ctx);
                        inexact = !r.mul(&r, ctx).eq(self);
                    }
                    break;
                }
            }

            (r, inexact)
        };

        r.finalize(pr, ctx.get_rounding_mode(), inexact, ctx)
    }
}
