//! All operations on numbers are performed in some context.
//!
//! A [`Context`] holds one configuration "dialect": precision, rounding, modulo convention,
//! notation thresholds and exponent limits. Contexts are plain values: cloning one produces an
//! independently configurable dialect. A thread-local default context backs the operator traits,
//! `Display` and `FromStr`.

use core::cell::Cell;

use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Modulo;
use crate::defs::RoundingMode;
use crate::defs::DEFAULT_P;
use crate::defs::DEFAULT_RM;
use crate::defs::EXP_LIMIT;
use crate::defs::MAX_DIGITS;

/// Context contains the parameters of all operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Context {
    p: Exponent,
    rm: RoundingMode,
    modulo: Modulo,
    to_exp_neg: Exponent,
    to_exp_pos: Exponent,
    min_e: Exponent,
    max_e: Exponent,
    crypto: bool,
}

/// A set of options applied at once with [`Context::config`].
/// Options left as `None` keep their current values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Reset every option to its default before applying the others.
    pub defaults: bool,

    /// Maximum number of significant digits of results, in the range [1, 1e9].
    pub precision: Option<i64>,

    /// Rounding mode, in the range [0, 8].
    pub rounding: Option<i64>,

    /// The exponent at and below which `to_string` uses exponential notation, in the range [-9e15, 0].
    pub to_exp_neg: Option<i64>,

    /// The exponent at and above which `to_string` uses exponential notation, in the range [0, 9e15].
    pub to_exp_pos: Option<i64>,

    /// Values with a greater exponent overflow to infinity, in the range [1, 9e15].
    pub max_e: Option<i64>,

    /// Values with a smaller exponent underflow to zero, in the range [-9e15, -1].
    pub min_e: Option<i64>,

    /// Modulo convention, in the range [0, 9].
    pub modulo: Option<i64>,

    /// Use a cryptographically secure source of random digits.
    pub crypto: Option<bool>,
}

const DEFAULT_CONTEXT: Context = Context {
    p: DEFAULT_P,
    rm: DEFAULT_RM,
    modulo: Modulo::Rounding(RoundingMode::Down),
    to_exp_neg: -7,
    to_exp_pos: 21,
    min_e: -EXP_LIMIT,
    max_e: EXP_LIMIT,
    crypto: false,
};

fn check_range(name: &str, v: i64, min: i64, max: i64) -> Result<i64, Error> {
    if v < min || v > max {
        Err(Error::InvalidArgument(format!("{}: {}", name, v)))
    } else {
        Ok(v)
    }
}

impl Context {
    /// Create a new context with default parameters:
    /// precision 20, rounding `HalfUp`, modulo `Down`, exponential notation for exponents
    /// not in (-7, 21), and exponent limits of ±9e15.
    pub const fn new() -> Self {
        DEFAULT_CONTEXT
    }

    /// Sets the precision of the context.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `p` is not in the range [1, 1e9].
    pub fn precision(&mut self, p: i64) -> Result<&mut Self, Error> {
        self.p = check_range("precision", p, 1, MAX_DIGITS)?;
        Ok(self)
    }

    /// Sets the rounding mode of the context.
    pub fn rounding_mode(&mut self, rm: RoundingMode) -> &mut Self {
        self.rm = rm;
        self
    }

    /// Sets the modulo convention of the context.
    pub fn modulo(&mut self, modulo: Modulo) -> &mut Self {
        self.modulo = modulo;
        self
    }

    /// Sets the negative exponent threshold for exponential notation.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `e` is not in the range [-9e15, 0].
    pub fn to_exp_neg(&mut self, e: i64) -> Result<&mut Self, Error> {
        self.to_exp_neg = check_range("toExpNeg", e, -EXP_LIMIT, 0)?;
        Ok(self)
    }

    /// Sets the positive exponent threshold for exponential notation.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `e` is not in the range [0, 9e15].
    pub fn to_exp_pos(&mut self, e: i64) -> Result<&mut Self, Error> {
        self.to_exp_pos = check_range("toExpPos", e, 0, EXP_LIMIT)?;
        Ok(self)
    }

    /// Sets the exponent above which values overflow to infinity.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `e` is not in the range [1, 9e15].
    pub fn max_e(&mut self, e: i64) -> Result<&mut Self, Error> {
        self.max_e = check_range("maxE", e, 1, EXP_LIMIT)?;
        Ok(self)
    }

    /// Sets the exponent below which values underflow to zero.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `e` is not in the range [-9e15, -1].
    pub fn min_e(&mut self, e: i64) -> Result<&mut Self, Error> {
        self.min_e = check_range("minE", e, -EXP_LIMIT, -1)?;
        Ok(self)
    }

    /// Enables or disables the cryptographically secure source of random digits.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: a secure source was requested and the crate is built without the `random` feature.
    pub fn crypto(&mut self, crypto: bool) -> Result<&mut Self, Error> {
        if crypto && !cfg!(feature = "random") {
            return Err(Error::InvalidArgument("crypto unavailable".into()));
        }
        self.crypto = crypto;
        Ok(self)
    }

    /// Applies several options at once. Options are validated in the order precision, rounding,
    /// toExpNeg, toExpPos, maxE, minE, modulo, crypto.
    /// The context is left unchanged if any option is invalid.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: an option is out of its range. The error names the option.
    pub fn config(&mut self, cfg: &Config) -> Result<&mut Self, Error> {
        let mut ctx = if cfg.defaults { DEFAULT_CONTEXT } else { *self };

        if let Some(p) = cfg.precision {
            ctx.precision(p)?;
        }
        if let Some(rm) = cfg.rounding {
            ctx.rounding_mode(RoundingMode::try_from(rm)?);
        }
        if let Some(e) = cfg.to_exp_neg {
            ctx.to_exp_neg(e)?;
        }
        if let Some(e) = cfg.to_exp_pos {
            ctx.to_exp_pos(e)?;
        }
        if let Some(e) = cfg.max_e {
            ctx.max_e(e)?;
        }
        if let Some(e) = cfg.min_e {
            ctx.min_e(e)?;
        }
        if let Some(m) = cfg.modulo {
            ctx.modulo(Modulo::try_from(m)?);
        }
        if let Some(c) = cfg.crypto {
            ctx.crypto(c)?;
        }

        tracing::debug!(config = ?cfg, context = ?ctx, "configuration applied");

        *self = ctx;
        Ok(self)
    }

    /// Returns the precision of the context.
    pub fn get_precision(&self) -> i64 {
        self.p
    }

    /// Returns the rounding mode of the context.
    pub fn get_rounding_mode(&self) -> RoundingMode {
        self.rm
    }

    /// Returns the modulo convention of the context.
    pub fn get_modulo(&self) -> Modulo {
        self.modulo
    }

    /// Returns the negative exponent threshold for exponential notation.
    pub fn get_to_exp_neg(&self) -> i64 {
        self.to_exp_neg
    }

    /// Returns the positive exponent threshold for exponential notation.
    pub fn get_to_exp_pos(&self) -> i64 {
        self.to_exp_pos
    }

    /// Returns the exponent above which values overflow to infinity.
    pub fn get_max_e(&self) -> i64 {
        self.max_e
    }

    /// Returns the exponent below which values underflow to zero.
    pub fn get_min_e(&self) -> i64 {
        self.min_e
    }

    /// Returns true if random digits come from a cryptographically secure source.
    pub fn get_crypto(&self) -> bool {
        self.crypto
    }

    /// A working copy with precision `p` and rounding mode `rm`.
    /// The precision is not validated: internal computations may exceed the public limit.
    pub(crate) fn with(&self, p: Exponent, rm: RoundingMode) -> Self {
        let mut ctx = *self;
        ctx.p = p;
        ctx.rm = rm;
        ctx
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}

thread_local! {
    static DEFAULT_CTX: Cell<Context> = const { Cell::new(DEFAULT_CONTEXT) };

    // Overflow and underflow are checked only for results returned to the caller.
    static EXTERNAL: Cell<bool> = const { Cell::new(true) };
}

/// Returns a copy of the thread-local default context.
pub fn default_context() -> Context {
    DEFAULT_CTX.with(|c| c.get())
}

/// Replaces the thread-local default context.
pub fn set_default_context(ctx: Context) {
    tracing::debug!(context = ?ctx, "default context replaced");
    DEFAULT_CTX.with(|c| c.set(ctx));
}

/// Returns true if results are checked against the exponent limits of the context.
pub(crate) fn is_external() -> bool {
    EXTERNAL.with(|f| f.get())
}

/// Suppresses the exponent limit checks while alive, restoring the previous state when dropped.
pub(crate) struct InternalGuard {
    prev: bool,
}

impl InternalGuard {
    pub(crate) fn new() -> Self {
        let prev = EXTERNAL.with(|f| f.replace(false));
        InternalGuard { prev }
    }
}

impl Drop for InternalGuard {
    fn drop(&mut self) {
        EXTERNAL.with(|f| f.set(self.prev));
    }
}
