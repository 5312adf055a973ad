//! Auxiliary functions on word arrays.

use crate::defs::{Exponent, Word, LOG_BASE};

/// Powers of ten that fit into a word.
pub(crate) const POW10: [Word; 10] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// 10^n for n in [0, 9].
#[inline]
pub(crate) fn pow10(n: Exponent) -> Word {
    debug_assert!((0..10).contains(&n));
    POW10[n as usize]
}

/// Number of decimal digits in `w`. Zero has one digit.
#[inline]
pub(crate) fn word_len(mut w: Word) -> Exponent {
    let mut n = 1;
    while w >= 10 {
        w /= 10;
        n += 1;
    }
    n
}

/// The decimal digit at position `p` of `w` counting from the least significant digit.
/// Positions beyond the word yield 0.
#[inline]
pub(crate) fn digit_at(w: Word, p: Exponent) -> Word {
    if p >= 10 {
        0
    } else {
        w / pow10(p) % 10
    }
}

/// `w mod 10^p` where positions beyond the word keep the whole word.
#[inline]
pub(crate) fn low_digits(w: Word, p: Exponent) -> Word {
    if p >= 10 {
        w
    } else {
        w % pow10(p)
    }
}

/// Decimal exponent of the most significant digit of the value with words `d` and word exponent `e`.
#[inline]
pub(crate) fn base10_exponent(d: &[Word], e: Exponent) -> Exponent {
    e * LOG_BASE + word_len(d[0]) - 1
}

/// All digits of `d` as a string, without the trailing zeros of the last word.
pub(crate) fn digits_to_string(d: &[Word]) -> String {
    let mut s = String::with_capacity(d.len() * LOG_BASE as usize);
    let n = d.len();
    if n == 0 {
        return s;
    }

    s.push_str(&d[0].to_string());
    for w in &d[1..] {
        let ws = w.to_string();
        for _ in ws.len()..LOG_BASE as usize {
            s.push('0');
        }
        s.push_str(&ws);
    }

    // trailing zeros of the last word
    while n > 0 && s.len() > 1 && s.ends_with('0') {
        s.pop();
    }

    s
}

/// Number of significant digits of the words `d`, trailing zeros of the last word excluded.
pub(crate) fn sig_digits(d: &[Word]) -> Exponent {
    let w = d.len() - 1;
    let mut n = w as Exponent * LOG_BASE + 1;
    let mut last = d[w];
    if last != 0 {
        while last % 10 == 0 {
            last /= 10;
            n -= 1;
        }
        n += word_len(d[0]) - 1;
    }
    n
}

/// Builds words from a string of decimal digits whose most significant digit has exponent `e`.
/// The words are aligned so that the first word holds `e mod 7 + 1` digits.
pub(crate) fn words_from_digits(digits: &[u8], e: Exponent) -> crate::mantissa::WordBuf {
    let mut d = crate::mantissa::WordBuf::new();
    let len = digits.len();
    if len == 0 {
        return d;
    }

    let mut i = ((e + 1) % LOG_BASE) as i64;
    if e < 0 {
        i += LOG_BASE;
    }
    let i = i as usize;
    let to_word = |s: &[u8]| s.iter().fold(0, |acc: Word, c| acc * 10 + (*c - b'0') as Word);

    if i >= len {
        d.push(to_word(digits) * pow10((i - len) as Exponent));
        return d;
    }

    if i > 0 {
        d.push(to_word(&digits[..i]));
    }
    let mut i = i;

    let step = LOG_BASE as usize;
    while i + step <= len {
        d.push(to_word(&digits[i..i + step]));
        i += step;
    }

    if i < len {
        let rest = &digits[i..];
        let w = to_word(rest) * pow10((step - rest.len()) as Exponent);
        d.push(w);
    }

    d
}
