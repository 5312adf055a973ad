//! Long division of digit arrays.

use crate::defs::Word;
use crate::mantissa::WordBuf;

// x * k, digits most significant first.
fn mul_small(x: &[i64], k: i64, base: i64) -> Vec<i64> {
    let mut ret = x.to_vec();
    let mut carry = 0;
    for v in ret.iter_mut().rev() {
        let t = *v * k + carry;
        *v = t % base;
        carry = t / base;
    }
    if carry != 0 {
        ret.insert(0, carry);
    }
    ret
}

// Compares numbers with digits a and b. Longer is larger.
fn compare(a: &[i64], b: &[i64]) -> i32 {
    if a.len() != b.len() {
        return if a.len() > b.len() { 1 } else { -1 };
    }
    for (x, y) in a.iter().zip(b.iter()) {
        if x != y {
            return if x > y { 1 } else { -1 };
        }
    }
    0
}

// a -= b where both are aligned at their most significant digit and a >= b.
fn subtract(a: &mut Vec<i64>, b: &[i64], base: i64) {
    let mut borrow = 0;
    for i in (0..a.len()).rev() {
        let bv = b.get(i).copied().unwrap_or(0);
        a[i] -= borrow;
        borrow = if a[i] < bv { 1 } else { 0 };
        a[i] = borrow * base + a[i] - bv;
    }

    while a.len() > 1 && a[0] == 0 {
        a.remove(0);
    }
}

/// Divides digits `xd` by digits `yd` in base `base`, producing `words` quotient digits
/// after the leading position. Both inputs must have a nonzero leading digit.
/// Returns the quotient digits (one leading zero digit is dropped) and true if a nonzero remainder is left.
pub(crate) fn div_words(xd: &[Word], yd: &[Word], base: Word, mut words: i64) -> (WordBuf, bool) {
    let base = base as i64;
    let mut qd = WordBuf::new();
    let more;

    if yd.len() == 1 {
        // short division
        let y0 = yd[0] as i64;
        let mut k = 0i64;
        let mut i = 0;
        words += 1;
        while (i < xd.len() || k != 0) && words > 0 {
            words -= 1;
            let t = k * base + xd.get(i).copied().unwrap_or(0) as i64;
            qd.push((t / y0) as Word);
            k = t % y0;
            i += 1;
        }
        more = k != 0 || i < xd.len();
    } else {
        // normalize so that the leading divisor digit is at least base / 2
        let k = base / (yd[0] as i64 + 1);
        let mut yd: Vec<i64> = yd.iter().map(|w| *w as i64).collect();
        let mut xd: Vec<i64> = xd.iter().map(|w| *w as i64).collect();
        if k > 1 {
            yd = mul_small(&yd, k, base);
            xd = mul_small(&xd, k, base);
        }

        let y_len = yd.len();
        let x_len = xd.len();
        let mut xi = y_len;

        let mut rem: Vec<i64> = xd[..y_len.min(x_len)].to_vec();
        rem.resize(y_len, 0);
        let mut rem_defined = true;

        let mut yz = yd.clone();
        yz.insert(0, 0);

        let mut yd0 = yd[0];
        if yd[1] >= base / 2 {
            yd0 += 1;
        }

        loop {
            let mut k = 0;
            let mut cmp = compare(&yd, &rem);

            if cmp < 0 {
                // trial digit
                let mut rem0 = rem[0];
                if y_len != rem.len() {
                    rem0 = rem0 * base + rem.get(1).copied().unwrap_or(0);
                }
                k = rem0 / yd0;

                let mut prod;
                if k > 1 {
                    if k >= base {
                        k = base - 1;
                    }
                    prod = mul_small(&yd, k, base);
                    cmp = compare(&prod, &rem);
                    if cmp == 1 {
                        k -= 1;
                        let b = if y_len < prod.len() { &yz } else { &yd };
                        subtract(&mut prod, b, base);
                    }
                } else {
                    if k == 0 {
                        cmp = 1;
                        k = 1;
                    }
                    prod = yd.clone();
                }

                if prod.len() < rem.len() {
                    prod.insert(0, 0);
                }
                subtract(&mut rem, &prod, base);

                if cmp == -1 {
                    cmp = compare(&yd, &rem);
                    if cmp < 1 {
                        k += 1;
                        let b = if y_len < rem.len() { &yz } else { &yd };
                        subtract(&mut rem, b, base);
                    }
                }
            } else if cmp == 0 {
                k += 1;
                rem = vec![0];
            }

            qd.push(k as Word);

            if cmp != 0 && rem[0] != 0 {
                rem.push(xd.get(xi).copied().unwrap_or(0));
            } else {
                match xd.get(xi) {
                    Some(w) => {
                        rem = vec![*w];
                        rem_defined = true;
                    }
                    None => {
                        rem = vec![0];
                        rem_defined = false;
                    }
                }
            }

            let cont = xi < x_len || rem_defined;
            xi += 1;
            if !cont {
                break;
            }
            let w = words;
            words -= 1;
            if w == 0 {
                break;
            }
        }

        more = rem_defined;
    }

    if qd.len() > 1 && qd[0] == 0 {
        qd.remove(0);
    }

    (qd, more)
}
