//! Decimal including finite numbers, signed zeros, `NaN`, and `Inf`.

use core::cmp::Ordering;

use crate::ctx::is_external;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::Word;
use crate::defs::MAX_DIGITS;
use crate::num::Num;

/// Not a number.
pub const NAN: Decimal = Decimal { inner: Flavor::NaN };

/// Positive infinity.
pub const INF_POS: Decimal = Decimal {
    inner: Flavor::Inf(Sign::Pos),
};

/// Negative infinity.
pub const INF_NEG: Decimal = Decimal {
    inner: Flavor::Inf(Sign::Neg),
};

/// Positive zero.
pub const ZERO: Decimal = Decimal {
    inner: Flavor::Zero(Sign::Pos),
};

/// Negative zero.
pub const NEG_ZERO: Decimal = Decimal {
    inner: Flavor::Zero(Sign::Neg),
};

static ZERO_WORDS: [Word; 1] = [0];

/// Number representation.
///
/// Values are immutable: every operation returns a new value.
/// Operations that depend on configuration take a [`Context`].
#[derive(Debug, Clone)]
pub struct Decimal {
    pub(crate) inner: Flavor,
}

#[derive(Debug, Clone)]
pub(crate) enum Flavor {
    Finite(Num),
    Zero(Sign),
    Inf(Sign),
    NaN,
}

impl Decimal {
    /// Wraps a raw number: zero becomes `Zero`, trailing zero words are removed.
    pub(crate) fn from_num(mut n: Num) -> Self {
        n.d.trunc_trailing_zeroes();
        if n.d.len() == 0 || n.is_zero() {
            Decimal {
                inner: Flavor::Zero(n.s),
            }
        } else {
            Decimal {
                inner: Flavor::Finite(n),
            }
        }
    }

    /// The raw number of a finite value, including zero.
    pub(crate) fn to_num(&self) -> Option<Num> {
        match &self.inner {
            Flavor::Finite(n) => Some(n.clone()),
            Flavor::Zero(s) => Some(Num::zero(*s)),
            _ => None,
        }
    }

    /// The raw number of a finite nonzero value.
    pub(crate) fn num(&self) -> Option<&Num> {
        match &self.inner {
            Flavor::Finite(n) => Some(n),
            _ => None,
        }
    }

    /// Words of a finite value. Zero has a single zero word, non-finite values have none.
    pub(crate) fn words(&self) -> &[Word] {
        match &self.inner {
            Flavor::Finite(n) => &n.d,
            Flavor::Zero(_) => &ZERO_WORDS,
            _ => &[],
        }
    }

    /// Decimal exponent of a finite value, 0 for zero and non-finite values.
    pub(crate) fn e(&self) -> Exponent {
        match &self.inner {
            Flavor::Finite(n) => n.e,
            _ => 0,
        }
    }

    /// Significant digits of a finite value.
    pub(crate) fn digits(&self) -> String {
        match &self.inner {
            Flavor::Finite(n) => n.digits(),
            _ => "0".into(),
        }
    }

    /// `self` with the sign `s`. NaN is unchanged.
    pub(crate) fn with_sign(self, s: Sign) -> Self {
        let inner = match self.inner {
            Flavor::Finite(mut n) => {
                n.s = s;
                Flavor::Finite(n)
            }
            Flavor::Zero(_) => Flavor::Zero(s),
            Flavor::Inf(_) => Flavor::Inf(s),
            Flavor::NaN => Flavor::NaN,
        };
        Decimal { inner }
    }

    /// The exact value `m * 10^exp`.
    pub(crate) fn from_scaled(m: u128, exp: Exponent) -> Self {
        let mut n = Num::from_u128(Sign::Pos, m);
        if n.is_zero() {
            return ZERO;
        }
        let digits = n.digits();
        n = Num::from_digits(Sign::Pos, digits.as_bytes(), n.e + exp);
        Decimal::from_num(n)
    }

    /// Applies the exponent limits of `ctx` unless an internal computation is in progress.
    /// Overflow gives a signed infinity, underflow a signed zero.
    pub(crate) fn clamp_exp(self, ctx: &Context) -> Self {
        if is_external() {
            if let Flavor::Finite(n) = &self.inner {
                if n.e > ctx.get_max_e() {
                    return Decimal {
                        inner: Flavor::Inf(n.s),
                    };
                } else if n.e < ctx.get_min_e() {
                    return Decimal {
                        inner: Flavor::Zero(n.s),
                    };
                }
            }
        }
        self
    }

    /// Rounds to `sd` significant digits with the rounding mode `rm` and applies the exponent limits.
    /// `truncated` tells that the value is already known to be inexact.
    pub(crate) fn finalize(self, sd: Exponent, rm: RoundingMode, truncated: bool, ctx: &Context) -> Self {
        let mut n = match self.inner {
            Flavor::Finite(n) => n,
            Flavor::Zero(s) => Num::zero(s),
            _ => return self,
        };

        n.round(sd, rm, truncated);

        Decimal::from_num(n).clamp_exp(ctx)
    }

    /// Parses a decimal, binary (`0b`), octal (`0o`) or hexadecimal (`0x`) literal.
    /// Non-decimal literals may have a fractional part and a binary exponent `p[+-]N`.
    /// `Infinity` and `NaN` with an optional sign, and `_` between decimal digits are accepted.
    /// Values outside the exponent limits of `ctx` become infinity or zero.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the text is not a valid literal.
    pub fn parse(s: &str, ctx: &Context) -> Result<Self, Error> {
        crate::parser::parse(s, ctx)
    }

    /// Creates a Decimal from f64 using its shortest round-trip decimal representation.
    pub fn from_f64(f: f64) -> Self {
        if f.is_nan() {
            NAN
        } else if f.is_infinite() {
            if f > 0.0 {
                INF_POS
            } else {
                INF_NEG
            }
        } else if f == 0.0 {
            if f.is_sign_negative() {
                NEG_ZERO
            } else {
                ZERO
            }
        } else {
            let s = format!("{:e}", f);
            crate::parser::parse_unchecked(&s).unwrap_or(NAN)
        }
    }

    /// Creates a Decimal from f32 using its shortest round-trip decimal representation.
    pub fn from_f32(f: f32) -> Self {
        if f.is_finite() && f != 0.0 {
            let s = format!("{:e}", f);
            crate::parser::parse_unchecked(&s).unwrap_or(NAN)
        } else {
            Self::from_f64(f as f64)
        }
    }

    /// Returns the nearest f64.
    pub fn to_f64(&self) -> f64 {
        match &self.inner {
            Flavor::Finite(n) => n.to_f64(),
            Flavor::Zero(s) => {
                if s.is_negative() {
                    -0.0
                } else {
                    0.0
                }
            }
            Flavor::Inf(s) => {
                if s.is_negative() {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            }
            Flavor::NaN => f64::NAN,
        }
    }

    /// Returns true if `self` is positive infinity.
    pub fn is_inf_pos(&self) -> bool {
        matches!(self.inner, Flavor::Inf(Sign::Pos))
    }

    /// Returns true if `self` is negative infinity.
    pub fn is_inf_neg(&self) -> bool {
        matches!(self.inner, Flavor::Inf(Sign::Neg))
    }

    /// Returns true if `self` is infinite.
    pub fn is_inf(&self) -> bool {
        matches!(self.inner, Flavor::Inf(_))
    }

    /// Return true if `self` is not a number.
    pub fn is_nan(&self) -> bool {
        matches!(self.inner, Flavor::NaN)
    }

    /// Returns true if `self` is neither infinite nor NaN.
    pub fn is_finite(&self) -> bool {
        matches!(self.inner, Flavor::Finite(_) | Flavor::Zero(_))
    }

    /// Returns true if `self` is positive or negative zero.
    pub fn is_zero(&self) -> bool {
        matches!(self.inner, Flavor::Zero(_))
    }

    /// Returns true if `self` is a finite integer.
    pub fn is_integer(&self) -> bool {
        match &self.inner {
            Flavor::Finite(n) => n.is_int(),
            Flavor::Zero(_) => true,
            _ => false,
        }
    }

    /// Returns true if `self` has the negative sign, including negative zero and negative infinity.
    pub fn is_neg(&self) -> bool {
        self.get_sign() == Some(Sign::Neg)
    }

    /// Returns true if `self` has the positive sign, including positive zero and positive infinity.
    pub fn is_pos(&self) -> bool {
        self.get_sign() == Some(Sign::Pos)
    }

    /// Returns the sign of `self`, or None for NaN.
    pub fn get_sign(&self) -> Option<Sign> {
        match &self.inner {
            Flavor::Finite(n) => Some(n.s),
            Flavor::Zero(s) | Flavor::Inf(s) => Some(*s),
            Flavor::NaN => None,
        }
    }

    /// Returns the exponent of the most significant digit of a finite value: 0 for zero, None for non-finite values.
    pub fn get_exponent(&self) -> Option<Exponent> {
        match &self.inner {
            Flavor::Finite(n) => Some(n.e),
            Flavor::Zero(_) => Some(0),
            _ => None,
        }
    }

    /// Returns the number of digits after the decimal point, None for non-finite values.
    pub fn decimal_places(&self) -> Option<Exponent> {
        match &self.inner {
            Flavor::Finite(n) => {
                let w = n.d.len() - 1;
                let mut dp = (w as Exponent - n.word_exp()) * crate::defs::LOG_BASE;
                let mut last = n.d[w];
                if last != 0 {
                    while last % 10 == 0 {
                        last /= 10;
                        dp -= 1;
                    }
                }
                Some(dp.max(0))
            }
            Flavor::Zero(_) => Some(0),
            _ => None,
        }
    }

    /// Returns the number of significant digits, None for non-finite values.
    /// If `include_zeros` is true, the zeros of the integer part are counted too.
    pub fn precision(&self, include_zeros: bool) -> Option<Exponent> {
        match &self.inner {
            Flavor::Finite(n) => {
                let k = n.sd();
                if include_zeros && n.e + 1 > k {
                    Some(n.e + 1)
                } else {
                    Some(k)
                }
            }
            Flavor::Zero(_) => Some(1),
            _ => None,
        }
    }

    /// Compares `self` to `d2`.
    /// Returns None if `self` or `d2` is NaN. Zeros of different signs are equal.
    pub fn cmp(&self, d2: &Self) -> Option<Ordering> {
        let rank = |f: &Flavor| match f {
            Flavor::Inf(Sign::Neg) => -2,
            Flavor::Finite(n) if n.s.is_negative() => -1,
            Flavor::Zero(_) => 0,
            Flavor::Finite(_) => 1,
            Flavor::Inf(Sign::Pos) => 2,
            Flavor::NaN => 0,
        };

        match (&self.inner, &d2.inner) {
            (Flavor::NaN, _) | (_, Flavor::NaN) => None,
            (Flavor::Finite(a), Flavor::Finite(b)) if a.s == b.s => {
                let ord = a.cmp_abs(b);
                Some(if a.s.is_negative() { ord.reverse() } else { ord })
            }
            (a, b) => Some(rank(a).cmp(&rank(b))),
        }
    }

    /// Returns true if `self` and `d2` are equal numbers.
    /// NaN is not equal to anything, zeros of different signs are equal.
    pub fn eq(&self, d2: &Self) -> bool {
        self.cmp(d2) == Some(Ordering::Equal)
    }

    /// Returns true if `self` is greater than `d2`.
    pub fn gt(&self, d2: &Self) -> bool {
        self.cmp(d2) == Some(Ordering::Greater)
    }

    /// Returns true if `self` is greater than or equal to `d2`.
    pub fn gte(&self, d2: &Self) -> bool {
        matches!(self.cmp(d2), Some(Ordering::Greater | Ordering::Equal))
    }

    /// Returns true if `self` is less than `d2`.
    pub fn lt(&self, d2: &Self) -> bool {
        self.cmp(d2) == Some(Ordering::Less)
    }

    /// Returns true if `self` is less than or equal to `d2`.
    pub fn lte(&self, d2: &Self) -> bool {
        matches!(self.cmp(d2), Some(Ordering::Less | Ordering::Equal))
    }

    /// Returns the absolute value of `self`.
    pub fn abs(&self) -> Self {
        match &self.inner {
            Flavor::NaN => NAN,
            _ => self.clone().with_sign(Sign::Pos),
        }
    }

    /// Returns `self` with the opposite sign.
    pub fn neg(&self) -> Self {
        match self.get_sign() {
            Some(s) => self.clone().with_sign(s.invert()),
            None => NAN,
        }
    }

    /// Returns 1 for positive values, -1 for negative values, the zero itself for zeros, and NaN for NaN.
    pub fn sign(&self) -> Self {
        match &self.inner {
            Flavor::NaN => NAN,
            Flavor::Zero(_) => self.clone(),
            Flavor::Finite(n) => Decimal::from_num(Num::from_word(n.s, 1)),
            Flavor::Inf(s) => Decimal::from_num(Num::from_word(*s, 1)),
        }
    }

    /// Returns `self` rounded to an integer towards positive infinity.
    pub fn ceil(&self, ctx: &Context) -> Self {
        let e = self.e();
        self.clone().finalize(e + 1, RoundingMode::Ceil, false, ctx)
    }

    /// Returns `self` rounded to an integer towards negative infinity.
    pub fn floor(&self, ctx: &Context) -> Self {
        let e = self.e();
        self.clone().finalize(e + 1, RoundingMode::Floor, false, ctx)
    }

    /// Returns `self` rounded to an integer with the rounding mode of `ctx`.
    pub fn round(&self, ctx: &Context) -> Self {
        let e = self.e();
        self.clone().finalize(e + 1, ctx.get_rounding_mode(), false, ctx)
    }

    /// Returns `self` truncated to an integer.
    pub fn trunc(&self, ctx: &Context) -> Self {
        let e = self.e();
        self.clone().finalize(e + 1, RoundingMode::Down, false, ctx)
    }

    /// Returns `self` rounded to `dp` decimal places using `rm`, or the rounding mode of `ctx` if `rm` is None.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `dp` is not in the range [0, 1e9].
    pub fn to_decimal_places(&self, dp: i64, rm: Option<RoundingMode>, ctx: &Context) -> Result<Self, Error> {
        check_int(dp, 0, MAX_DIGITS)?;
        let rm = rm.unwrap_or_else(|| ctx.get_rounding_mode());
        let e = self.e();
        Ok(self.clone().finalize(dp + e + 1, rm, false, ctx))
    }

    /// Returns `self` rounded to `sd` significant digits using `rm`, or the rounding mode of `ctx` if `rm` is None.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `sd` is not in the range [1, 1e9].
    pub fn to_significant_digits(&self, sd: i64, rm: Option<RoundingMode>, ctx: &Context) -> Result<Self, Error> {
        check_int(sd, 1, MAX_DIGITS)?;
        let rm = rm.unwrap_or_else(|| ctx.get_rounding_mode());
        Ok(self.clone().finalize(sd, rm, false, ctx))
    }
}

/// Checks that an integer argument is in the range [min, max].
pub(crate) fn check_int(v: i64, min: i64, max: i64) -> Result<(), Error> {
    if v < min || v > max {
        Err(Error::InvalidArgument(v.to_string()))
    } else {
        Ok(())
    }
}

macro_rules! impl_int_conv {
    ($s:ty, $from_s:ident) => {
        impl Decimal {
            /// Construct Decimal from integer value.
            pub fn $from_s(i: $s) -> Self {
                #[allow(unused_comparisons)]
                let s = if i < 0 { Sign::Neg } else { Sign::Pos };
                Decimal::from_num(Num::from_u128(s, i.unsigned_abs() as u128))
            }
        }

        impl From<$s> for Decimal {
            fn from(i: $s) -> Self {
                Decimal::$from_s(i)
            }
        }
    };
}

macro_rules! impl_uint_conv {
    ($s:ty, $from_s:ident) => {
        impl Decimal {
            /// Construct Decimal from integer value.
            pub fn $from_s(i: $s) -> Self {
                Decimal::from_num(Num::from_u128(Sign::Pos, i as u128))
            }
        }

        impl From<$s> for Decimal {
            fn from(i: $s) -> Self {
                Decimal::$from_s(i)
            }
        }
    };
}

impl_int_conv!(i8, from_i8);
impl_int_conv!(i16, from_i16);
impl_int_conv!(i32, from_i32);
impl_int_conv!(i64, from_i64);
impl_int_conv!(i128, from_i128);

impl_uint_conv!(u8, from_u8);
impl_uint_conv!(u16, from_u16);
impl_uint_conv!(u32, from_u32);
impl_uint_conv!(u64, from_u64);
impl_uint_conv!(u128, from_u128);

impl From<f64> for Decimal {
    fn from(f: f64) -> Self {
        Decimal::from_f64(f)
    }
}

impl From<f32> for Decimal {
    fn from(f: f32) -> Self {
        Decimal::from_f32(f)
    }
}

/// Standard library features.
/// Operator traits, `Display` and `FromStr` use the thread-local default context.
pub mod ops {

    use crate::common::consts::ONE;
    use crate::ctx::default_context;
    use crate::defs::Error;
    use crate::ext::Decimal;
    use crate::ext::ZERO;

    use core::{
        cmp::Ordering,
        cmp::PartialEq,
        cmp::PartialOrd,
        fmt::Display,
        fmt::Formatter,
        iter::Product,
        iter::Sum,
        ops::Add,
        ops::AddAssign,
        ops::Div,
        ops::DivAssign,
        ops::Mul,
        ops::MulAssign,
        ops::Neg,
        ops::Rem,
        ops::RemAssign,
        ops::Sub,
        ops::SubAssign,
        str::FromStr,
    };

    macro_rules! impl_bin_op {
        ($trait:ident, $fname:ident, $trait_assign:ident, $fname_assign:ident, $method:ident) => {
            impl $trait for Decimal {
                type Output = Self;
                fn $fname(self, rhs: Self) -> Self::Output {
                    Decimal::$method(&self, &rhs, &default_context())
                }
            }

            impl $trait<&Decimal> for Decimal {
                type Output = Self;
                fn $fname(self, rhs: &Decimal) -> Self::Output {
                    Decimal::$method(&self, rhs, &default_context())
                }
            }

            impl $trait<&Decimal> for &Decimal {
                type Output = Decimal;
                fn $fname(self, rhs: &Decimal) -> Self::Output {
                    Decimal::$method(self, rhs, &default_context())
                }
            }

            impl $trait_assign for Decimal {
                fn $fname_assign(&mut self, rhs: Self) {
                    *self = Decimal::$method(self, &rhs, &default_context())
                }
            }

            impl $trait_assign<&Decimal> for Decimal {
                fn $fname_assign(&mut self, rhs: &Decimal) {
                    *self = Decimal::$method(self, rhs, &default_context())
                }
            }
        };
    }

    impl_bin_op!(Add, add, AddAssign, add_assign, add);
    impl_bin_op!(Sub, sub, SubAssign, sub_assign, sub);
    impl_bin_op!(Mul, mul, MulAssign, mul_assign, mul);
    impl_bin_op!(Div, div, DivAssign, div_assign, div);
    impl_bin_op!(Rem, rem, RemAssign, rem_assign, modulo);

    impl Neg for Decimal {
        type Output = Self;
        fn neg(self) -> Self::Output {
            Decimal::neg(&self)
        }
    }

    impl Neg for &Decimal {
        type Output = Decimal;
        fn neg(self) -> Self::Output {
            Decimal::neg(self)
        }
    }

    //
    // ordering traits
    //

    impl PartialEq for Decimal {
        fn eq(&self, other: &Self) -> bool {
            Decimal::eq(self, other)
        }
    }

    impl PartialOrd for Decimal {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Decimal::cmp(self, other)
        }
    }

    impl Display for Decimal {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
            f.write_str(&self.format(&default_context()))
        }
    }

    impl Default for Decimal {
        fn default() -> Decimal {
            ZERO
        }
    }

    impl FromStr for Decimal {
        type Err = Error;

        fn from_str(src: &str) -> Result<Decimal, Self::Err> {
            Decimal::parse(src, &default_context())
        }
    }

    impl Product for Decimal {
        fn product<I: Iterator<Item = Decimal>>(iter: I) -> Self {
            let mut acc = ONE.clone();
            for v in iter {
                acc *= v;
            }
            acc
        }
    }

    impl Sum for Decimal {
        fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Self {
            let mut acc = ZERO;
            for v in iter {
                acc += v;
            }
            acc
        }
    }

    impl<'a> Product<&'a Decimal> for Decimal {
        fn product<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
            let mut acc = ONE.clone();
            for v in iter {
                acc *= v;
            }
            acc
        }
    }

    impl<'a> Sum<&'a Decimal> for Decimal {
        fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
            let mut acc = ZERO;
            for v in iter {
                acc += v;
            }
            acc
        }
    }
}
