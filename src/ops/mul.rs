//! Multiplication.

use crate::ctx::is_external;
use crate::ctx::Context;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::ext::NAN;

impl Decimal {
    /// Multiply by d2 and return the product rounded to the precision of `ctx`.
    ///
    /// Zero multiplied by infinity gives NaN.
    pub fn mul(&self, d2: &Self, ctx: &Context) -> Self {
        let s = match (self.get_sign(), d2.get_sign()) {
            (Some(s1), Some(s2)) => s1.mul(s2),
            _ => return NAN,
        };

        match (&self.inner, &d2.inner) {
            (Flavor::Zero(_), Flavor::Inf(_)) | (Flavor::Inf(_), Flavor::Zero(_)) => NAN,
            (Flavor::Inf(_), _) | (_, Flavor::Inf(_)) => Decimal {
                inner: Flavor::Inf(s),
            },
            (Flavor::Zero(_), _) | (_, Flavor::Zero(_)) => Decimal {
                inner: Flavor::Zero(s),
            },
            (Flavor::Finite(x), Flavor::Finite(y)) => {
                let ret = Decimal::from_num(x.mul_abs(y));
                if is_external() {
                    ret.finalize(ctx.get_precision(), ctx.get_rounding_mode(), false, ctx)
                } else {
                    ret
                }
            }
            _ => NAN,
        }
    }
}
