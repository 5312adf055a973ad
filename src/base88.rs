//! Compact text encoding in base 88.
//!
//! Special values are a single character: `0` positive zero, `1` negative zero,
//! `2` positive infinity, `3` negative infinity, `4` NaN.
//! A finite value starts with a header character `5 + sign + 2 * (n - 1)`, where `sign` is 1 for negative values
//! and `n` is the number of exponent characters that follow. The exponent is zigzag encoded.
//! The remaining characters are the significant decimal digits read as an integer in base 88.

use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::EXP_LIMIT;
use crate::defs::Sign;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::ext::INF_NEG;
use crate::ext::INF_POS;
use crate::ext::NAN;
use crate::ext::NEG_ZERO;
use crate::ext::ZERO;
use crate::mantissa::convert_base;
use crate::mantissa::numeral_value;
use crate::mantissa::NUMERALS;
use crate::num::Num;

const B88: u32 = 88;

// Header values of the special values and the first header value of finite numbers.
const H_ZERO: u32 = 0;
const H_NEG_ZERO: u32 = 1;
const H_INF: u32 = 2;
const H_NEG_INF: u32 = 3;
const H_NAN: u32 = 4;
const H_FINITE: u32 = 5;

impl Decimal {
    /// Encodes the value as a string of base 88 numerals.
    /// The encoding is exact: [`from_base88`](Self::from_base88) restores the same value,
    /// including signed zeros, infinities and NaN.
    pub fn to_base88(&self) -> String {
        let n = match &self.inner {
            Flavor::Zero(Sign::Pos) => return numeral(H_ZERO).into(),
            Flavor::Zero(Sign::Neg) => return numeral(H_NEG_ZERO).into(),
            Flavor::Inf(Sign::Pos) => return numeral(H_INF).into(),
            Flavor::Inf(Sign::Neg) => return numeral(H_NEG_INF).into(),
            Flavor::NaN => return numeral(H_NAN).into(),
            Flavor::Finite(n) => n,
        };

        let exp = exp_to_numerals(n.e);
        let digits: Vec<u32> = n.digits().bytes().map(|c| (c - b'0') as u32).collect();
        let sig = convert_base(&digits, 10, B88);

        let mut ret = String::with_capacity(1 + exp.len() + sig.len());
        ret.push(numeral(H_FINITE + n.s.is_negative() as u32 + 2 * (exp.len() as u32 - 1)));
        ret.extend(exp.iter().map(|v| numeral(*v)));
        ret.extend(sig.iter().map(|v| numeral(*v)));
        ret
    }

    /// Decodes a value produced by [`to_base88`](Self::to_base88).
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `s` is empty or is not a valid encoding,
    ///    including an exponent outside [-9e15, 9e15].
    pub fn from_base88(s: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidArgument(s.to_owned());

        let vals = s
            .bytes()
            .map(|c| numeral_value(c, B88))
            .collect::<Option<Vec<u32>>>()
            .ok_or_else(invalid)?;

        let (&h, rest) = vals.split_first().ok_or_else(invalid)?;

        if h < H_FINITE {
            if !rest.is_empty() {
                return Err(invalid());
            }
            return Ok(match h {
                H_ZERO => ZERO,
                H_NEG_ZERO => NEG_ZERO,
                H_INF => INF_POS,
                H_NEG_INF => INF_NEG,
                _ => NAN,
            });
        }

        let h = h - H_FINITE;
        let sign = if h % 2 == 1 { Sign::Neg } else { Sign::Pos };
        let exp_len = (h / 2 + 1) as usize;

        if rest.len() <= exp_len {
            return Err(invalid());
        }

        let e = exp_from_numerals(&rest[..exp_len])
            .filter(|e| e.abs() <= EXP_LIMIT)
            .ok_or_else(invalid)?;
        let digits = convert_base(&rest[exp_len..], B88, 10);

        if digits[0] == 0 {
            return Err(invalid());
        }

        let digits: Vec<u8> = digits.iter().map(|d| b'0' + *d as u8).collect();

        Ok(Decimal::from_num(Num::from_digits(sign, &digits, e)))
    }
}

fn numeral(v: u32) -> char {
    NUMERALS[v as usize] as char
}

fn exp_to_numerals(e: Exponent) -> Vec<u32> {
    let mut z = ((e << 1) ^ (e >> 63)) as u64;
    let mut ret = Vec::new();
    loop {
        ret.push((z % B88 as u64) as u32);
        z /= B88 as u64;
        if z == 0 {
            break;
        }
    }
    ret.reverse();
    ret
}

fn exp_from_numerals(d: &[u32]) -> Option<Exponent> {
    let mut z: u64 = 0;
    for v in d {
        z = z.checked_mul(B88 as u64)?.checked_add(*v as u64)?;
    }
    Some((z >> 1) as Exponent ^ -((z & 1) as Exponent))
}
