//! Astro-decimal is a library that implements arbitrary precision decimal floating point numbers.
//!
//! A [`Decimal`] is either a finite number with up to 1e9 significant decimal digits,
//! a signed zero, a signed infinity, or NaN. Values are immutable: every operation returns a new value.
//!
//! Operations take a [`Context`] that defines the precision of results, the rounding mode,
//! the modulo convention, the choice between decimal and exponential notation, and the exponent limits
//! beyond which values overflow to infinity or underflow to zero.
//! Any number of independently configured contexts can be used at the same time.
//!
//! Elementary functions (roots, `exp`, `ln`, `log`, `pow`, trigonometric and hyperbolic functions
//! and their inverses) are computed with guard digits and recomputed at a higher precision
//! when the result is close to a rounding boundary.
//!
//! ## Examples
//!
//! ```
//! use astro_decimal::Context;
//! use astro_decimal::Decimal;
//! use astro_decimal::RoundingMode;
//!
//! let mut ctx = Context::new();
//! ctx.precision(30).unwrap();
//!
//! let two = Decimal::parse("2", &ctx).unwrap();
//! assert_eq!(two.sqrt(&ctx).to_string(), "1.41421356237309504880168872421");
//!
//! ctx.rounding_mode(RoundingMode::Down);
//! let third = Decimal::from(1).div(&Decimal::from(3), &ctx);
//! assert_eq!(third.to_fixed(Some(5), None, &ctx).unwrap(), "0.33333");
//!
//! // operators use the thread-local default context with precision 20
//! let x: Decimal = "0.1".parse().unwrap();
//! let y: Decimal = "0.2".parse().unwrap();
//! assert_eq!((x + y).to_string(), "0.3");
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::module_inception)]

mod base88;
mod common;
pub mod ctx;
mod defs;
mod ext;
mod mantissa;
mod num;
mod ops;
mod parser;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::ctx::default_context;
pub use crate::ctx::set_default_context;
pub use crate::ctx::Config;
pub use crate::ctx::Context;
pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::Modulo;
pub use crate::defs::Radix;
pub use crate::defs::RoundingMode;
pub use crate::defs::Sign;
pub use crate::defs::Word;
pub use crate::ext::Decimal;
pub use crate::ext::INF_NEG;
pub use crate::ext::INF_POS;
pub use crate::ext::NAN;
pub use crate::ext::NEG_ZERO;
pub use crate::ext::ZERO;

pub use crate::defs::BASE;
pub use crate::defs::EXP_LIMIT;
pub use crate::defs::LOG_BASE;
pub use crate::defs::MAX_DIGITS;
