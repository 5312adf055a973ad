//! Definitions.

use core::fmt::Display;

/// A word holding up to `LOG_BASE` decimal digits.
pub type Word = u32;

/// Doubled word.
pub type DoubleWord = u64;

/// A decimal exponent.
pub type Exponent = i64;

/// Base of words.
pub const BASE: Word = 10_000_000;

/// Number of decimal digits in a word.
pub const LOG_BASE: Exponent = 7;

/// Maximum precision and maximum number of decimal places accepted by any operation.
pub const MAX_DIGITS: Exponent = 1_000_000_000;

/// Upper bound for the magnitude of configurable exponent limits.
pub const EXP_LIMIT: Exponent = 9_000_000_000_000_000;

/// Largest integer exponent handled by the exact integer power path.
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// Default rounding mode.
pub const DEFAULT_RM: RoundingMode = RoundingMode::HalfUp;

/// Default precision.
pub const DEFAULT_P: Exponent = 20;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if `self` is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns 1 for the positive sign and -1 for the negative sign.
    pub fn to_int(&self) -> i8 {
        *self as i8
    }

    /// Returns the sign of the product of two values with signs `self` and `other`.
    pub fn mul(&self, other: Sign) -> Self {
        if *self == other {
            Sign::Pos
        } else {
            Sign::Neg
        }
    }
}

/// Possible errors.
#[derive(Debug, Clone)]
pub enum Error {
    /// Invalid argument. The payload names the offending option or the rejected text.
    InvalidArgument(String),

    /// A computation needs more digits of a stored constant (pi or ln(10)) than are available.
    PrecisionLimitExceeded,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidArgument(arg) => {
                f.write_str("invalid argument: ")?;
                f.write_str(arg)
            }
            Error::PrecisionLimitExceeded => f.write_str("precision limit exceeded"),
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

/// Radix of a non-decimal string representation.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Radix {
    /// Binary.
    Bin = 2,

    /// Octal.
    Oct = 8,

    /// Decimal.
    Dec = 10,

    /// Hexadecimal.
    Hex = 16,
}

impl Radix {
    pub(crate) fn prefix(&self) -> &'static str {
        match self {
            Radix::Bin => "0b",
            Radix::Oct => "0o",
            Radix::Dec => "",
            Radix::Hex => "0x",
        }
    }
}

/// Rounding modes.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum RoundingMode {
    /// Round away from zero.
    Up = 0,

    /// Round towards zero.
    Down = 1,

    /// Round towards positive infinity.
    Ceil = 2,

    /// Round towards negative infinity.
    Floor = 3,

    /// Round half away from zero.
    HalfUp = 4,

    /// Round half towards zero.
    HalfDown = 5,

    /// Round half to even.
    HalfEven = 6,

    /// Round half towards positive infinity.
    HalfCeil = 7,

    /// Round half towards negative infinity.
    HalfFloor = 8,
}

impl RoundingMode {
    /// Returns true for the five "round half" modes.
    pub fn is_half(&self) -> bool {
        (*self as u8) >= 4
    }

    /// Returns the directed mode that rounds away from zero for a value with sign `s`:
    /// `Ceil` for positive and `Floor` for negative values.
    pub(crate) fn away(s: Sign) -> Self {
        if s.is_negative() {
            RoundingMode::Floor
        } else {
            RoundingMode::Ceil
        }
    }

    /// Returns the half mode that rounds ties away from zero for a value with sign `s`.
    pub(crate) fn half_away(s: Sign) -> Self {
        if s.is_negative() {
            RoundingMode::HalfFloor
        } else {
            RoundingMode::HalfCeil
        }
    }
}

impl TryFrom<i64> for RoundingMode {
    type Error = Error;

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        Ok(match v {
            0 => RoundingMode::Up,
            1 => RoundingMode::Down,
            2 => RoundingMode::Ceil,
            3 => RoundingMode::Floor,
            4 => RoundingMode::HalfUp,
            5 => RoundingMode::HalfDown,
            6 => RoundingMode::HalfEven,
            7 => RoundingMode::HalfCeil,
            8 => RoundingMode::HalfFloor,
            _ => return Err(Error::InvalidArgument(format!("rounding: {}", v))),
        })
    }
}

/// Modulo convention: selects the rounding of the quotient in `x mod y`.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum Modulo {
    /// The quotient is rounded with the given mode.
    /// `Down` gives the sign of the dividend, `Floor` the sign of the divisor
    /// and `HalfEven` the IEEE 754 remainder.
    Rounding(RoundingMode),

    /// Euclidean division: the remainder is never negative.
    Euclid,
}

impl TryFrom<i64> for Modulo {
    type Error = Error;

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        match v {
            9 => Ok(Modulo::Euclid),
            0..=8 => RoundingMode::try_from(v).map(Modulo::Rounding),
            _ => Err(Error::InvalidArgument(format!("modulo: {}", v))),
        }
    }
}
