//! Everything related to word arrays.

mod buf;
mod conv;
mod div;
mod util;

pub(crate) use buf::WordBuf;
pub(crate) use conv::convert_base;
pub(crate) use conv::numeral_value;
pub(crate) use conv::NUMERALS;
pub(crate) use div::div_words;
pub(crate) use util::base10_exponent;
pub(crate) use util::digit_at;
pub(crate) use util::digits_to_string;
pub(crate) use util::low_digits;
pub(crate) use util::pow10;
pub(crate) use util::sig_digits;
pub(crate) use util::word_len;
pub(crate) use util::words_from_digits;
