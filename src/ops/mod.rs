//! High-level operations on the numbers.

mod acos;
mod acosh;
mod add;
mod asin;
mod asinh;
mod atan;
mod atanh;
mod cbrt;
pub(crate) mod consts;
mod cos;
mod cosh;
pub(crate) mod div;
mod exp;
mod ln;
mod log;
mod mul;
mod other;
mod pow;
mod series;
mod sin;
mod sinh;
mod sqrt;
mod tan;
mod tanh;
mod trig;
pub(crate) mod util;
