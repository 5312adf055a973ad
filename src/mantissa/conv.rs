//! Conversion of digit arrays between bases.

/// Converts the digits `src` (most significant first) in base `base_in` to digits in base `base_out`.
/// The value is treated as an integer. The result is most significant first and has no leading zeros,
/// except for the value zero which yields a single zero digit.
pub(crate) fn convert_base(src: &[u32], base_in: u32, base_out: u32) -> Vec<u32> {
    let base_in = base_in as u64;
    let base_out = base_out as u64;

    // little-endian accumulator
    let mut arr: Vec<u64> = vec![0];

    for &digit in src {
        for v in arr.iter_mut() {
            *v *= base_in;
        }
        arr[0] += digit as u64;

        let mut j = 0;
        while j < arr.len() {
            if arr[j] >= base_out {
                if j + 1 == arr.len() {
                    arr.push(0);
                }
                arr[j + 1] += arr[j] / base_out;
                arr[j] %= base_out;
            }
            j += 1;
        }
    }

    arr.iter().rev().map(|v| *v as u32).collect()
}

/// Numerals for bases up to 88.
pub(crate) const NUMERALS: &[u8; 88] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!#$%()*+,-./:;=?@[]^_`{|}~";

/// Value of numeral `c` in the given base, if `c` is a valid digit of the base.
/// Letters are case-insensitive for bases up to 36.
pub(crate) fn numeral_value(c: u8, base: u32) -> Option<u32> {
    let c = if base <= 36 { c.to_ascii_lowercase() } else { c };
    NUMERALS
        .iter()
        .position(|n| *n == c)
        .map(|p| p as u32)
        .filter(|v| *v < base)
}
