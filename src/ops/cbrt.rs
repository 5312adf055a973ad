//! Cube root computation.

use crate::common::util::is_exact_candidate;
use crate::common::util::prefix;
use crate::common::util::slice_digits;
use crate::ctx::Context;
use crate::ctx::InternalGuard;
use crate::defs::RoundingMode;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::ops::div::divide;
use crate::parser::parse_unchecked;

impl Decimal {
    /// Computes the cube root of a number. The result is rounded to the precision of `ctx`.
    /// Negative numbers have negative cube roots.
    pub fn cbrt(&self, ctx: &Context) -> Self {
        let n = match &self.inner {
            Flavor::Finite(n) => n,
            _ => return self.clone(),
        };

        let pr = ctx.get_precision();

        let (r, inexact) = {
            let _guard = InternalGuard::new();

            let est = self.abs().to_f64().cbrt();
            let mut r = if est == 0.0 || est.is_infinite() {
                // rescale to an integer with an exponent divisible by 3
                let mut digits = n.digits();
                let e = n.e;
                let k = (e - digits.len() as i64 + 1) % 3;
                if k == 1 || k == -2 {
                    digits.push('0');
                } else if k != 0 {
                    digits.push_str("00");
                }
                let s = digits.parse::<f64>().unwrap_or(f64::INFINITY).cbrt();
                let e = (e + 1).div_euclid(3) - (e % 3 == if e < 0 { -1 } else { 2 }) as i64;
                let est = if s.is_infinite() {
                    format!("5e{}", e)
                } else {
                    let m = format!("{:e}", s);
                    let mant = m.split('e').next().unwrap_or("1");
                    format!("{}e{}", mant, e)
                };
                parse_unchecked(&est)
                    .unwrap_or_else(|_| self.abs())
                    .with_sign(n.s)
            } else {
                Decimal::from_f64(est).with_sign(n.s)
            };

            let mut sd = pr + 3;
            let mut rep = false;
            let mut inexact = false;

            // Halley's method
            loop {
                let t = r;
                let t3 = t.mul(&t, ctx).mul(&t, ctx);
                let t3_plus_x = t3.add(self, ctx);
                r = divide(
                    &t3_plus_x.add(self, ctx).mul(&t, ctx),
                    &t3_plus_x.add(&t3, ctx),
                    sd + 2,
                    RoundingMode::Down,
                    false,
                    ctx,
                );

                let td = t.digits();
                let rd = r.digits();
                if prefix(&td, sd) != prefix(&rd, sd) {
                    continue;
                }

                let tail = slice_digits(&rd, sd - 3, sd + 1);
                if tail == "9999" || !rep && tail == "4999" {
                    if !rep {
                        let t = t.finalize(pr + 1, RoundingMode::Up, false, ctx);
                        if t.mul(&t, ctx).mul(&t, ctx).eq(self) {
                            r = t;
                            break;
                        }
                    }
                    sd += 4;
                    rep = true;
                    tracing::trace!(sd, "cbrt: rounding boundary, widening precision");
                } else {
                    if is_exact_candidate(tail) {
                        r = r.finalize(pr + 1, RoundingMode::Down, false, ctx);
                        inexact = !r.mul(&r, ctx).mul(&r, ctx).eq(self);
                    }
                    break;
                }
            }

            (r, inexact)
        };

        r.finalize(pr, ctx.get_rounding_mode(), inexact, ctx)
    }
}
