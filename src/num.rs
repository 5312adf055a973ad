//! Num definition: the sign, decimal exponent and base 1e7 words of a finite value,
//! word-level arithmetic, rounding, and detection of rounding boundaries.

use core::cmp::Ordering;

use crate::defs::DoubleWord;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::Word;
use crate::defs::BASE;
use crate::defs::LOG_BASE;
use crate::mantissa::base10_exponent;
use crate::mantissa::digit_at;
use crate::mantissa::digits_to_string;
use crate::mantissa::low_digits;
use crate::mantissa::pow10;
use crate::mantissa::sig_digits;
use crate::mantissa::word_len;
use crate::mantissa::words_from_digits;
use crate::mantissa::WordBuf;
use itertools::izip;

/// A finite number: `s`, the exponent `e` of the most significant digit, and the words `d`.
/// The first word is never zero unless the value is zero, in which case `d` is `[0]`.
/// Intermediate values may carry trailing zero words.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Num {
    pub s: Sign,
    pub e: Exponent,
    pub d: WordBuf,
}

impl Num {
    /// Zero with sign `s`.
    pub fn zero(s: Sign) -> Self {
        Num {
            s,
            e: 0,
            d: WordBuf::from_word(0),
        }
    }

    /// A value of a single word `w`, which must be less than the base.
    pub fn from_word(s: Sign, w: Word) -> Self {
        debug_assert!(w < BASE);
        Num {
            s,
            e: word_len(w) - 1,
            d: WordBuf::from_word(w),
        }
    }

    /// A value from decimal `digits` without leading zeros, the first of which has exponent `e`.
    pub fn from_digits(s: Sign, digits: &[u8], e: Exponent) -> Self {
        let mut d = words_from_digits(digits, e);
        d.trunc_trailing_zeroes();
        if d.len() == 0 {
            return Num::zero(s);
        }
        Num { s, e, d }
    }

    /// Value of an unsigned integer.
    pub fn from_u128(s: Sign, mut v: u128) -> Self {
        if v == 0 {
            return Num::zero(s);
        }

        let mut d = WordBuf::new();
        while v > 0 {
            d.insert(0, (v % BASE as u128) as Word);
            v /= BASE as u128;
        }
        let e = base10_exponent(&d, d.len() as Exponent - 1);
        d.trunc_trailing_zeroes();

        Num { s, e, d }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.d[0] == 0
    }

    /// Exponent of the first word in base 1e7.
    #[inline]
    pub fn word_exp(&self) -> Exponent {
        self.e.div_euclid(LOG_BASE)
    }

    /// Significant digits as a string.
    pub fn digits(&self) -> String {
        digits_to_string(&self.d)
    }

    /// Number of significant digits.
    pub fn sd(&self) -> Exponent {
        sig_digits(&self.d)
    }

    pub fn is_int(&self) -> bool {
        self.word_exp() > self.d.len() as Exponent - 2
    }

    /// Returns true if the integer part is odd. Fractional values return false.
    pub fn is_odd(&self) -> bool {
        if self.e < 0 || !self.is_int() {
            return false;
        }
        // the units digit sits in the word with index `word_exp`
        match self.d.get(self.word_exp() as usize) {
            Some(w) => w % 2 == 1,
            None => false,
        }
    }

    /// Integer value, if the number is an integer not greater than `u64::MAX` in magnitude.
    pub fn to_u64(&self) -> Option<u64> {
        if self.is_zero() {
            return Some(0);
        }
        if !self.is_int() || self.e > 19 {
            return None;
        }

        let we = self.word_exp() as usize;
        let mut ret: u64 = 0;
        for i in 0..=we {
            let w = self.d.get(i).copied().unwrap_or(0) as u64;
            ret = ret.checked_mul(BASE as u64)?.checked_add(w)?;
        }
        Some(ret)
    }

    /// Nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        let digits = self.digits();
        let s = format!(
            "{}{}.{}e{}",
            if self.s.is_negative() { "-" } else { "" },
            &digits[..1],
            &digits[1..],
            self.e
        );
        s.parse::<f64>().unwrap_or(f64::NAN)
    }

    /// Compares absolute values.
    pub fn cmp_abs(&self, y: &Self) -> Ordering {
        match (self.is_zero(), y.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        if self.e != y.e {
            return self.e.cmp(&y.e);
        }

        let n = self.d.len().max(y.d.len());
        for i in 0..n {
            let a = self.d.get(i).copied().unwrap_or(0);
            let b = y.d.get(i).copied().unwrap_or(0);
            if a != b {
                return a.cmp(&b);
            }
        }

        Ordering::Equal
    }

    /// Adds absolute values of two nonzero numbers with the sign of `self`.
    /// The smaller operand is padded with at most `ceil(pr/7) + 1` words, which keeps the
    /// cost bounded when magnitudes differ widely.
    pub fn add_abs(&self, y: &Self, pr: Exponent) -> Self {
        let mut xd = self.d.clone();
        let mut yd = y.d.clone();
        let xe = self.word_exp();
        let mut e = y.word_exp();
        let mut i = xe - e;

        if i != 0 {
            let (d, len) = if i < 0 {
                i = -i;
                (&mut xd, yd.len() as Exponent)
            } else {
                e = xe;
                (&mut yd, xd.len() as Exponent)
            };

            let k = (pr + LOG_BASE - 1).div_euclid(LOG_BASE);
            let len = if k > len { k + 1 } else { len + 1 };

            if i > len {
                i = len;
                d.trunc_to(1);
            }

            d.shift_right(i as usize);
        }

        // xd is the longer
        if xd.len() < yd.len() {
            core::mem::swap(&mut xd, &mut yd);
        }

        let mut carry = 0;
        let n = yd.len();
        for (a, b) in izip!(xd[..n].iter_mut(), yd.iter()).rev() {
            let t = *a + *b + carry;
            carry = t / BASE;
            *a = t % BASE;
        }

        if carry > 0 {
            xd.insert(0, carry);
            e += 1;
        }

        xd.trunc_trailing_zeroes();

        Num {
            s: self.s,
            e: base10_exponent(&xd, e),
            d: xd,
        }
    }

    /// Subtracts the absolute value of `y` from the absolute value of `self`, both nonzero.
    /// The result carries the sign of `self` if |self| >= |y| and the opposite sign otherwise.
    /// Returns None if the difference is exactly zero.
    pub fn sub_abs(&self, y: &Self, pr: Exponent) -> Option<Self> {
        let mut xd = self.d.clone();
        let mut yd = y.d.clone();
        let xe = self.word_exp();
        let mut e = y.word_exp();
        let mut k = xe - e;
        let x_lt_y;

        if k != 0 {
            x_lt_y = k < 0;

            let (d, len) = if x_lt_y {
                k = -k;
                (&mut xd, yd.len() as Exponent)
            } else {
                e = xe;
                (&mut yd, xd.len() as Exponent)
            };

            // padding is capped at ceil(pr/7) + 2 words
            let i = ((pr + LOG_BASE - 1).div_euclid(LOG_BASE)).max(len) + 2;
            if k > i {
                k = i;
                d.trunc_to(1);
            }

            d.shift_right(k as usize);
            k = 0;
        } else {
            let n = xd.len().min(yd.len());
            let mut lt = xd.len() < yd.len();
            for i in 0..n {
                if xd[i] != yd[i] {
                    lt = xd[i] < yd[i];
                    break;
                }
            }
            x_lt_y = lt;
        }

        let s = if x_lt_y {
            core::mem::swap(&mut xd, &mut yd);
            self.s.invert()
        } else {
            self.s
        };

        xd.extend_to(yd.len());

        for i in (k as usize..yd.len()).rev() {
            if xd[i] < yd[i] {
                let mut j = i;
                while j > 0 {
                    j -= 1;
                    if xd[j] == 0 {
                        xd[j] = BASE - 1;
                    } else {
                        break;
                    }
                }
                xd[j] -= 1;
                xd[i] += BASE;
            }
            xd[i] -= yd[i];
        }

        xd.trunc_trailing_zeroes();
        e -= xd.trunc_leading_zeroes() as Exponent;

        if xd.len() == 0 {
            return None;
        }

        Some(Num {
            s,
            e: base10_exponent(&xd, e),
            d: xd,
        })
    }

    /// Exact product of two nonzero numbers.
    pub fn mul_abs(&self, y: &Self) -> Self {
        let (xd, yd) = if self.d.len() < y.d.len() {
            (&y.d, &self.d)
        } else {
            (&self.d, &y.d)
        };
        let mut e = self.word_exp() + y.word_exp();

        let x_len = xd.len();
        let y_len = yd.len();
        let mut r: Vec<DoubleWord> = vec![0; x_len + y_len];
        let base = BASE as DoubleWord;

        let mut carry = 0;
        for i in (0..y_len).rev() {
            carry = 0;
            let mut k = x_len + i;
            let yi = yd[i] as DoubleWord;
            while k > i {
                let t = r[k] + yi * xd[k - i - 1] as DoubleWord + carry;
                r[k] = t % base;
                carry = t / base;
                k -= 1;
            }
            r[k] = (r[k] + carry) % base;
        }

        while r.last() == Some(&0) {
            r.pop();
        }

        if carry > 0 {
            e += 1;
        } else {
            r.remove(0);
        }

        let mut d = WordBuf::new();
        for w in r {
            d.push(w as Word);
        }

        Num {
            s: self.s.mul(y.s),
            e: base10_exponent(&d, e),
            d,
        }
    }

    /// Rounds to `sd` significant digits using the rounding mode `rm`.
    /// `truncated` tells that nonzero digits were already discarded beyond the current words.
    /// A value rounded to less than one significant digit becomes zero or the smallest
    /// power of ten at the rounding position. Trailing zero words are removed.
    pub fn round(&mut self, sd: Exponent, rm: RoundingMode, mut truncated: bool) {
        let mut digits = word_len(self.d[0]);
        let mut i = sd - digits;
        let mut xdi: usize;
        let j: Exponent;
        let w: Word;
        let rd: Word;

        if i < 0 {
            // the rounding digit is in the first word
            i += LOG_BASE;
            j = sd;
            xdi = 0;
            w = self.d[0];
            rd = if j < 0 { 0 } else { digit_at(w, digits - j - 1) };
        } else {
            xdi = ((i + LOG_BASE) / LOG_BASE) as usize;
            if xdi >= self.d.len() {
                if truncated {
                    self.d.extend_to(xdi + 1);
                    w = 0;
                    rd = 0;
                    digits = 1;
                    i %= LOG_BASE;
                    j = i - LOG_BASE + 1;
                } else {
                    self.d.trunc_trailing_zeroes();
                    if self.d.len() == 0 {
                        *self = Num::zero(self.s);
                    }
                    return;
                }
            } else {
                w = self.d[xdi];
                digits = word_len(w);
                i %= LOG_BASE;
                j = i - LOG_BASE + digits;
                rd = if j < 0 { 0 } else { digit_at(w, digits - j - 1) };
            }
        }

        truncated = truncated
            || sd < 0
            || xdi + 1 < self.d.len()
            || if j < 0 { w != 0 } else { low_digits(w, digits - j - 1) != 0 };

        let round_up = if !rm.is_half() {
            (rd > 0 || truncated) && (rm == RoundingMode::Up || rm == RoundingMode::away(self.s))
        } else {
            rd > 5
                || rd == 5
                    && (rm == RoundingMode::HalfUp
                        || truncated
                        || rm == RoundingMode::HalfEven && self.left_digit_odd(i, j, w, digits, xdi)
                        || rm == RoundingMode::half_away(self.s))
        };

        if sd < 1 || self.d[0] == 0 {
            self.d.clear();
            if round_up {
                // 1, 0.1, 0.01 etc. at the rounding position
                let dp = sd - (self.e + 1);
                self.d.push(pow10((LOG_BASE - dp % LOG_BASE) % LOG_BASE));
                self.e = -dp;
            } else {
                self.d.push(0);
                self.e = 0;
            }
            return;
        }

        // remove excess digits
        let mut k: Word;
        if i == 0 {
            self.d.trunc_to(xdi);
            k = 1;
            xdi -= 1;
        } else {
            self.d.trunc_to(xdi + 1);
            k = pow10(LOG_BASE - i);
            self.d[xdi] = if j > 0 {
                (w / pow10(digits - j) % pow10(j)) * k
            } else {
                0
            };
        }

        if round_up {
            loop {
                if xdi == 0 {
                    let before = word_len(self.d[0]);
                    self.d[0] += k;
                    if word_len(self.d[0]) != before {
                        self.e += 1;
                        if self.d[0] == BASE {
                            self.d[0] = 1;
                        }
                    }
                    break;
                } else {
                    self.d[xdi] += k;
                    if self.d[xdi] != BASE {
                        break;
                    }
                    self.d[xdi] = 0;
                    xdi -= 1;
                    k = 1;
                }
            }
        }

        self.d.trunc_trailing_zeroes();
    }

    // Parity of the digit to the left of the rounding digit.
    fn left_digit_odd(&self, i: Exponent, j: Exponent, w: Word, digits: Exponent, xdi: usize) -> bool {
        let v = if i > 0 {
            if j > 0 {
                w / pow10(digits - j)
            } else {
                0
            }
        } else if xdi > 0 {
            self.d[xdi - 1]
        } else {
            0
        };
        v % 10 % 2 == 1
    }
}

/// Checks whether the digits of `d` after the first `i` significant digits form a pattern that
/// makes the rounding of a value computed with a small error unreliable:
/// runs of 9s and 0s around the rounding position, or a 4999/5000 pattern for the half modes.
/// `repeating` is `None` for the first attempt; `Some(true)` marks a repeated attempt.
pub(crate) fn check_rounding_digits(
    d: &[Word],
    mut i: Exponent,
    rm: RoundingMode,
    repeating: Option<bool>,
) -> bool {
    // the rounding digit index relative to the first word
    let mut k = d[0];
    while k >= 10 {
        i -= 1;
        k /= 10;
    }

    let di: usize;
    i -= 1;
    if i < 0 {
        i += LOG_BASE;
        di = 0;
    } else {
        di = ((i + LOG_BASE) / LOG_BASE) as usize;
        i %= LOG_BASE;
    }

    let k = pow10(LOG_BASE - i) as u64;
    let word = |n: usize| d.get(n).copied().unwrap_or(0) as u64;
    let mut rd = word(di) % k;
    let directed = !rm.is_half();

    match repeating {
        None => {
            if i < 3 {
                if i == 0 {
                    rd /= 100;
                } else if i == 1 {
                    rd /= 10;
                }
                directed && rd == 99999 || !directed && rd == 49999 || rd == 50000 || rd == 0
            } else {
                let next = word(di + 1) / k / 100;
                (directed && rd + 1 == k || !directed && rd + 1 == k / 2)
                    && next == pow10(i - 2) as u64 - 1
                    || (rd == k / 2 || rd == 0) && next == 0
            }
        }
        Some(rep) => {
            if i < 4 {
                if i == 0 {
                    rd /= 1000;
                } else if i == 1 {
                    rd /= 100;
                } else if i == 2 {
                    rd /= 10;
                }
                (rep || directed) && rd == 9999 || !rep && !directed && rd == 4999
            } else {
                ((rep || directed) && rd + 1 == k || !rep && !directed && rd + 1 == k / 2)
                    && word(di + 1) / k / 1000 == pow10(i - 3) as u64 - 1
            }
        }
    }
}
