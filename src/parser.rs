//! Parser parses decimal literals and binary, octal or hexadecimal literals with a binary exponent.

use crate::common::consts::TWO;
use crate::ctx::Context;
use crate::ctx::InternalGuard;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Radix;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::Word;
use crate::defs::BASE;
use crate::defs::EXP_LIMIT;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::ext::NAN;
use crate::mantissa::base10_exponent;
use crate::mantissa::convert_base;
use crate::mantissa::numeral_value;
use crate::mantissa::WordBuf;
use crate::num::Num;
use crate::ops::div::divide;
use crate::ops::util::int_pow;
use std::borrow::Cow;
use std::str::Chars;

// Exponents are saturated at this magnitude; any such value is out of the exponent limits.
const EXP_SATURATION: Exponent = EXP_LIMIT * 10;

struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    digits: Vec<u32>,
    int_len: usize,
    e: Exponent,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        let mut ps = ParserState {
            chars: s.chars(),
            cur_ch: None,
            digits: Vec::new(),
            int_len: 0,
            e: 0,
        };
        ps.next_char();
        ps
    }

    /// Returns next character of a string in lower case,
    /// or None if string end reached.
    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next().map(|c| c.to_ascii_lowercase());
        self.cur_ch
    }

    fn cur_char(&self) -> Option<char> {
        self.cur_ch
    }

    fn is_end(&self) -> bool {
        self.cur_ch.is_none()
    }
}

/// Parses `s` and applies the exponent limits of `ctx`.
pub(crate) fn parse(s: &str, ctx: &Context) -> Result<Decimal, Error> {
    let invalid = || Error::InvalidArgument(s.to_owned());

    let (sign, body) = match s.as_bytes().first() {
        Some(b'-') => (Sign::Neg, &s[1..]),
        Some(b'+') => (Sign::Pos, &s[1..]),
        _ => (Sign::Pos, s),
    };

    match body {
        "Infinity" => return Ok(Decimal { inner: Flavor::Inf(sign) }),
        "NaN" => return Ok(NAN),
        _ => {}
    }

    let body = strip_separators(body);
    let lower = body.get(..2).map(|p| p.to_ascii_lowercase());
    let rdx = match lower.as_deref() {
        Some("0x") => Radix::Hex,
        Some("0o") => Radix::Oct,
        Some("0b") => Radix::Bin,
        _ => Radix::Dec,
    };

    let mut ps = ParserState::new(if rdx == Radix::Dec { &body } else { &body[2..] });

    if !parse_mantissa(&mut ps, rdx) {
        return Err(invalid());
    }

    let marker = if rdx == Radix::Dec { 'e' } else { 'p' };
    if !parse_exp(&mut ps, marker) || !ps.is_end() {
        return Err(invalid());
    }

    let d = if rdx == Radix::Dec {
        from_decimal_digits(&ps, sign)
    } else {
        from_radix_digits(&ps, sign, rdx, ctx)?
    };

    Ok(d.clamp_exp(ctx))
}

/// Parses a decimal literal without applying exponent limits.
pub(crate) fn parse_unchecked(s: &str) -> Result<Decimal, Error> {
    let _guard = InternalGuard::new();
    parse(s, &Context::new())
}

// Removes `_` placed between two decimal digits.
fn strip_separators(s: &str) -> Cow<'_, str> {
    if !s.contains('_') {
        return Cow::Borrowed(s);
    }

    let b = s.as_bytes();
    let mut ret = String::with_capacity(s.len());
    for (i, c) in s.char_indices() {
        let separator = c == '_'
            && i > 0
            && b[i - 1].is_ascii_digit()
            && b.get(i + 1).map_or(false, |n| n.is_ascii_digit());
        if !separator {
            ret.push(c);
        }
    }

    Cow::Owned(ret)
}

// Digits with an optional point. Returns false if there are no digits.
fn parse_mantissa(ps: &mut ParserState, rdx: Radix) -> bool {
    let int_len = parse_digits(ps, rdx);
    let mut frac_len = 0;

    if Some('.') == ps.cur_char() {
        ps.next_char();
        frac_len = parse_digits(ps, rdx);
    }

    ps.int_len = int_len;
    int_len > 0 || frac_len > 0
}

fn parse_digits(ps: &mut ParserState, rdx: Radix) -> usize {
    let mut len = 0;
    while let Some(c) = ps.cur_char() {
        match numeral_value(c as u8, rdx as u32).filter(|_| c.is_ascii()) {
            Some(v) => ps.digits.push(v),
            None => break,
        }
        len += 1;
        ps.next_char();
    }
    len
}

// Optional exponent with decimal digits. Returns false if the marker is not followed by digits.
fn parse_exp(ps: &mut ParserState, marker: char) -> bool {
    if Some(marker) != ps.cur_char() {
        return true;
    }

    let mut neg = false;
    match ps.next_char() {
        Some('+') => {
            ps.next_char();
        }
        Some('-') => {
            neg = true;
            ps.next_char();
        }
        _ => {}
    }

    let mut len = 0;
    while let Some(v) = ps.cur_char().and_then(|c| c.to_digit(10)) {
        ps.e = (ps.e * 10 + v as Exponent).min(EXP_SATURATION);
        len += 1;
        ps.next_char();
    }

    if neg {
        ps.e = -ps.e;
    }

    len > 0
}

fn from_decimal_digits(ps: &ParserState, sign: Sign) -> Decimal {
    let lz = ps.digits.iter().take_while(|d| **d == 0).count();
    let tz = ps.digits.iter().rev().take_while(|d| **d == 0).count();

    if lz == ps.digits.len() {
        return Decimal { inner: Flavor::Zero(sign) };
    }

    let digits: Vec<u8> = ps.digits[lz..ps.digits.len() - tz]
        .iter()
        .map(|d| b'0' + *d as u8)
        .collect();

    let e = (ps.int_len as Exponent - lz as Exponent - 1 + ps.e).clamp(-EXP_SATURATION, EXP_SATURATION);

    Decimal::from_num(Num::from_digits(sign, &digits, e))
}

fn from_radix_digits(ps: &ParserState, sign: Sign, rdx: Radix, ctx: &Context) -> Result<Decimal, Error> {
    let base = rdx as u32;
    let words = convert_base(&ps.digits, base, BASE);

    if words.iter().all(|w| *w == 0) {
        return Ok(Decimal { inner: Flavor::Zero(sign) });
    }

    let d = WordBuf::from_slice(&words);
    let e = base10_exponent(&d, d.len() as Exponent - 1);
    let mut x = Decimal::from_num(Num { s: sign, e, d });

    let _guard = InternalGuard::new();

    let frac_len = ps.digits.len() - ps.int_len;
    if frac_len > 0 {
        let divisor = int_pow(&Num::from_word(Sign::Pos, base as Word), frac_len as u64, frac_len as Exponent * 2);
        x = divide(&x, &divisor, ps.digits.len() as Exponent * 4, RoundingMode::Down, false, ctx);
    }

    let p = ps.e;
    if p != 0 {
        let pow2 = if p.abs() < 54 {
            if p > 0 {
                Decimal::from_u64(1 << p)
            } else {
                // 2^p = 5^-p * 10^p
                Decimal::from_scaled(5u128.pow(-p as u32), p)
            }
        } else {
            TWO.pow(&Decimal::from_i64(p), ctx)?
        };
        x = x.mul(&pow2, ctx);
    }

    Ok(x)
}
