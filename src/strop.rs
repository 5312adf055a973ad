//! Conversion of decimals to strings.

use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Radix;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::Word;
use crate::defs::MAX_DIGITS;
use crate::ext::check_int;
use crate::ext::Decimal;
use crate::ext::Flavor;
use crate::mantissa::convert_base;
use crate::mantissa::NUMERALS;
use crate::ops::div::divide_digits;
use std::fmt::Write;

impl Decimal {
    /// Formats the number in decimal notation, or in exponential notation if the exponent
    /// is at most `to_exp_neg` or at least `to_exp_pos` of `ctx`.
    /// Negative zero is formatted as `0`.
    pub fn format(&self, ctx: &Context) -> String {
        let s = finite_to_string(self, self.is_exp_form(ctx), None);
        with_sign(self, s, true)
    }

    /// Same as [`format`](Self::format), but negative zero keeps its sign.
    pub fn to_json(&self, ctx: &Context) -> String {
        let s = finite_to_string(self, self.is_exp_form(ctx), None);
        with_sign(self, s, false)
    }

    /// Formats the number in exponential notation with `dp` digits after the point.
    /// If `dp` is None, as many digits as needed are used.
    /// `rm` defaults to the rounding mode of `ctx`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `dp` is out of range 0..=1e9.
    pub fn to_exponential(&self, dp: Option<i64>, rm: Option<RoundingMode>, ctx: &Context) -> Result<String, Error> {
        let (x, s) = match dp {
            None => (self.clone(), finite_to_string(self, true, None)),
            Some(dp) => {
                check_int(dp, 0, MAX_DIGITS)?;
                let rm = rm.unwrap_or_else(|| ctx.get_rounding_mode());
                let x = self.clone().finalize(dp + 1, rm, false, ctx);
                let s = finite_to_string(&x, true, Some(dp + 1));
                (x, s)
            }
        };

        Ok(with_sign(&x, s, true))
    }

    /// Formats the number in decimal notation with `dp` digits after the point.
    /// If `dp` is None, the number is not rounded.
    /// The sign of a negative number is kept even if it rounds to zero.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `dp` is out of range 0..=1e9.
    pub fn to_fixed(&self, dp: Option<i64>, rm: Option<RoundingMode>, ctx: &Context) -> Result<String, Error> {
        let s = match dp {
            None => finite_to_string(self, false, None),
            Some(dp) => {
                check_int(dp, 0, MAX_DIGITS)?;
                let rm = rm.unwrap_or_else(|| ctx.get_rounding_mode());
                let y = self.clone().finalize(dp + self.e() + 1, rm, false, ctx);
                let sd = dp + y.e() + 1;
                finite_to_string(&y, false, Some(sd))
            }
        };

        Ok(with_sign(self, s, true))
    }

    /// Formats the number rounded to `sd` significant digits.
    /// Exponential notation is used if `sd` is not more than the exponent,
    /// or if the exponent is at most `to_exp_neg` of `ctx`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `sd` is out of range 1..=1e9.
    pub fn to_precision(&self, sd: Option<i64>, rm: Option<RoundingMode>, ctx: &Context) -> Result<String, Error> {
        let (x, s) = match sd {
            None => (self.clone(), finite_to_string(self, self.is_exp_form(ctx), None)),
            Some(sd) => {
                check_int(sd, 1, MAX_DIGITS)?;
                let rm = rm.unwrap_or_else(|| ctx.get_rounding_mode());
                let x = self.clone().finalize(sd, rm, false, ctx);
                let is_exp = sd <= x.e() || x.e() <= ctx.get_to_exp_neg();
                let s = finite_to_string(&x, is_exp, Some(sd));
                (x, s)
            }
        };

        Ok(with_sign(&x, s, true))
    }

    /// Formats the number in base 2 with the prefix `0b`.
    /// With `sd` given, the result is in binary exponential notation with `sd` significant digits,
    /// otherwise the precision of `ctx` limits the number of digits.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `sd` is out of range 1..=1e9.
    pub fn to_binary(&self, sd: Option<i64>, rm: Option<RoundingMode>, ctx: &Context) -> Result<String, Error> {
        to_string_radix(self, Radix::Bin, sd, rm, ctx)
    }

    /// Formats the number in base 8 with the prefix `0o`. See [`to_binary`](Self::to_binary).
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `sd` is out of range 1..=1e9.
    pub fn to_octal(&self, sd: Option<i64>, rm: Option<RoundingMode>, ctx: &Context) -> Result<String, Error> {
        to_string_radix(self, Radix::Oct, sd, rm, ctx)
    }

    /// Formats the number in base 16 with the prefix `0x`. See [`to_binary`](Self::to_binary).
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `sd` is out of range 1..=1e9.
    pub fn to_hex(&self, sd: Option<i64>, rm: Option<RoundingMode>, ctx: &Context) -> Result<String, Error> {
        to_string_radix(self, Radix::Hex, sd, rm, ctx)
    }

    fn is_exp_form(&self, ctx: &Context) -> bool {
        let e = self.e();
        e <= ctx.get_to_exp_neg() || e >= ctx.get_to_exp_pos()
    }
}

fn with_sign(x: &Decimal, body: String, skip_zero: bool) -> String {
    let neg = match x.inner {
        Flavor::Finite(ref n) => n.s.is_negative(),
        Flavor::Zero(s) => !skip_zero && s.is_negative(),
        Flavor::Inf(s) => s.is_negative(),
        Flavor::NaN => false,
    };

    if neg {
        let mut ret = String::with_capacity(body.len() + 1);
        ret.push('-');
        ret.push_str(&body);
        ret
    } else {
        body
    }
}

fn zeros(k: Exponent) -> String {
    "0".repeat(k.max(0) as usize)
}

// Unsigned digits of `x` in decimal or exponential notation, padded with zeros to `sd` significant digits.
fn finite_to_string(x: &Decimal, is_exp: bool, sd: Option<Exponent>) -> String {
    match x.inner {
        Flavor::NaN => return "NaN".into(),
        Flavor::Inf(_) => return "Infinity".into(),
        _ => {}
    }

    let e = x.e();
    let mut s = x.digits();
    let len = s.len() as Exponent;
    let sd = sd.unwrap_or(0);

    if is_exp {
        if len > 1 || sd > len {
            s.insert(1, '.');
        }
        if sd > len {
            s.push_str(&zeros(sd - len));
        }
        let _ = write!(s, "e{}{}", if e < 0 { "" } else { "+" }, e);
        s
    } else if e < 0 {
        let mut ret = "0.".to_owned();
        ret.push_str(&zeros(-e - 1));
        ret.push_str(&s);
        ret.push_str(&zeros(sd - len));
        ret
    } else if e >= len {
        s.push_str(&zeros(e + 1 - len));
        if sd - e - 1 > 0 {
            s.push('.');
            s.push_str(&zeros(sd - e - 1));
        }
        s
    } else {
        let k = e + 1;
        if k < len {
            s.insert(k as usize, '.');
        }
        if sd > len {
            if k == len {
                s.push('.');
            }
            s.push_str(&zeros(sd - len));
        }
        s
    }
}

// Binary, octal or hexadecimal representation.
// In exponential form the significand is rounded in binary and the exponent is a power of two.
fn to_string_radix(
    x: &Decimal,
    rdx: Radix,
    sd: Option<i64>,
    rm: Option<RoundingMode>,
    ctx: &Context,
) -> Result<String, Error> {
    let is_exp = sd.is_some();
    let (sd, rm) = match sd {
        Some(sd) => {
            check_int(sd, 1, MAX_DIGITS)?;
            (sd, rm.unwrap_or_else(|| ctx.get_rounding_mode()))
        }
        None => (ctx.get_precision(), ctx.get_rounding_mode()),
    };

    let sign = match x.inner {
        Flavor::NaN => return Ok("NaN".into()),
        Flavor::Inf(_) => return Ok(with_sign(x, "Infinity".into(), false)),
        Flavor::Zero(s) => s,
        Flavor::Finite(ref n) => n.s,
    };

    let mut body = if x.is_zero() {
        if is_exp { "0p+0" } else { "0" }.to_owned()
    } else {
        radix_digits(x, rdx, sign, sd, rm, is_exp)
    };

    body.insert_str(0, rdx.prefix());

    Ok(with_sign(x, body, false))
}

fn radix_digits(x: &Decimal, rdx: Radix, sign: Sign, sd: i64, rm: RoundingMode, is_exp: bool) -> String {
    let base_out = rdx as Word;

    // exponential form rounds binary digits: the leading hex or octal digit is a single bit
    let (base, sd) = if is_exp {
        match rdx {
            Radix::Hex => (2, sd * 4 - 3),
            Radix::Oct => (2, sd * 3 - 2),
            _ => (2, sd),
        }
    } else {
        (base_out, sd)
    };

    let s = finite_to_string(x, false, None);
    let point = s.find('.');
    let digits: Vec<Word> = s.bytes().filter(|c| *c != b'.').map(|c| (c - b'0') as Word).collect();

    let mut xd = convert_base(&digits, 10, base);
    let mut e = xd.len() as Exponent;
    while xd.last() == Some(&0) {
        xd.pop();
    }

    let mut more = false;
    match point {
        None => e -= 1,
        Some(i) => {
            let mut ten = vec![0; digits.len() - i + 1];
            ten[0] = 1;
            let yd = convert_base(&ten, 10, base);
            let (qd, qe, inexact) = divide_digits(&xd, e, &yd, yd.len() as Exponent, base, sd);
            xd = qd;
            e = qe;
            more = inexact;
        }
    }

    let sdu = sd as usize;
    let rd = xd.get(sdu).copied();
    more = more || xd.iter().skip(sdu + 1).any(|d| *d != 0);
    let k = base / 2;

    let round_up = if !rm.is_half() {
        (rd.map_or(false, |d| d > 0) || more) && (rm == RoundingMode::Up || rm == RoundingMode::away(sign))
    } else {
        match rd {
            Some(d) => {
                d > k
                    || d == k
                        && (rm == RoundingMode::HalfUp
                            || more
                            || rm == RoundingMode::HalfEven && sdu > 0 && xd[sdu - 1] % 2 == 1
                            || rm == RoundingMode::half_away(sign))
            }
            None => false,
        }
    };

    xd.truncate(sdu);

    if round_up {
        xd.resize(sdu, 0);
        let mut i = sdu;
        while i > 0 {
            i -= 1;
            xd[i] += 1;
            if xd[i] < base {
                break;
            }
            xd[i] = 0;
            if i == 0 {
                e += 1;
                xd.insert(0, 1);
            }
        }
    }

    let len = xd.iter().rposition(|d| *d != 0).map_or(0, |p| p + 1);
    let numerals = |d: &[Word]| d.iter().map(|v| NUMERALS[*v as usize] as char).collect::<String>();
    let mut s = numerals(&xd[..len]);

    if is_exp {
        if len > 1 {
            if base_out == 16 || base_out == 8 {
                // regroup the bits after the leading one into hex or octal digits
                let i = if base_out == 16 { 4 } else { 3 };
                let mut bits = xd[..len].to_vec();
                while (bits.len() - 1) % i != 0 {
                    bits.push(0);
                }
                let od = convert_base(&bits, 2, base_out);
                let olen = od.iter().rposition(|d| *d != 0).map_or(0, |p| p + 1);
                s = "1.".to_owned();
                s.push_str(&numerals(&od[1..olen.max(1)]));
            } else {
                s.insert(1, '.');
            }
        }
        let _ = write!(s, "p{}{}", if e < 0 { "" } else { "+" }, e);
        s
    } else if e < 0 {
        let mut ret = "0.".to_owned();
        ret.push_str(&zeros(-e - 1));
        ret.push_str(&s);
        ret
    } else {
        let e = e + 1;
        let len = len as Exponent;
        if e > len {
            s.push_str(&zeros(e - len));
        } else if e < len {
            s.insert(e as usize, '.');
        }
        s
    }
}
