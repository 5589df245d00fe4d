//! Integer exponentiation by repeated squaring.
//!
//! Each loop iteration looks at the low bit of the exponent: when it is set
//! the accumulator takes one factor of the current base, then the base is
//! squared and the exponent halved. The loop runs once per bit of `n`.

/// Returns `x^n`, wrapping on overflow. `power(x, 0)` is 1 for every `x`,
/// including 0.
pub fn power(mut x: i64, mut n: u32) -> i64 {
    let mut sum: i64 = 1;
    while n != 0 {
        if n % 2 == 1 {
            sum = sum.wrapping_mul(x);
        }
        x = x.wrapping_mul(x);
        n /= 2;
    }
    sum
}

/// Returns `x^n`, or `None` if the result does not fit in an `i64`.
pub fn checked_power(mut x: i64, mut n: u32) -> Option<i64> {
    let mut sum: i64 = 1;
    while n != 0 {
        if n % 2 == 1 {
            sum = sum.checked_mul(x)?;
        }
        n /= 2;
        // The last square is never multiplied in.
        if n != 0 {
            x = x.checked_mul(x)?;
        }
    }
    Some(sum)
}

/// Returns `x^n mod m`, with a negative `x` reduced into `0..m` first.
/// `None` when `m` is zero.
pub fn mod_power(x: i64, mut n: u32, m: u64) -> Option<u64> {
    if m == 0 {
        return None;
    }
    let m = u128::from(m);
    let mut base = i128::from(x).rem_euclid(m as i128) as u128;
    let mut sum: u128 = 1 % m;
    while n != 0 {
        if n % 2 == 1 {
            sum = sum * base % m;
        }
        base = base * base % m;
        n /= 2;
    }
    Some(sum as u64)
}
