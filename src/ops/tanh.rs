//! Hyperbolic tangent.

use crate::ctx::Context;
use crate::defs::RoundingMode;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::ops::div::divide;

impl Decimal {
    /// Computes the hyperbolic tangent of a number. The result is rounded to the precision of `ctx`.
    /// The hyperbolic tangent of an infinity is 1 with the sign of the infinity.
    pub fn tanh(&self, ctx: &Context) -> Self {
        match &self.inner {
            Flavor::Inf(s) => return Decimal::from_i8(s.to_int()),
            Flavor::Finite(_) => {}
            _ => return self.clone(),
        };

        let pr = ctx.get_precision();
        let rm = ctx.get_rounding_mode();
        let wctx = ctx.with(pr + 7, RoundingMode::Down);

        divide(&self.sinh(&wctx), &self.cosh(&wctx), pr, rm, false, ctx)
    }
}
