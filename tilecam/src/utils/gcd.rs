/// Greatest common divisor of two signed integers.
///
/// Euclid with floored remainders, so the result carries the sign of the
/// last non-zero divisor: the sign of `b`, or of `a` when `b == 0`.
/// `gcd(0, k) == k` and `gcd(0, 0) == 0`; callers dividing by the result
/// must handle the zero case themselves.
///
/// # Example
///
/// ```ignore
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(1, -1), -1);
/// assert_eq!(gcd(0, -3), -3);
/// ```
pub fn gcd(a: i32, b: i32) -> i32 {
    // i64 keeps `i32::MIN % -1` from overflowing
    let mut a = i64::from(a);
    let mut b = i64::from(b);
    while b != 0 {
        let r = floored_rem(a, b);
        a = b;
        b = r;
    }
    // |result| divides both inputs, so it fits back in i32
    a as i32
}

/// Remainder with the sign of the divisor.
fn floored_rem(a: i64, b: i64) -> i64 {
    let r = a % b;
    if r != 0 && (r < 0) != (b < 0) {
        r + b
    } else {
        r
    }
}

#[cfg(test)]
#[path = "gcd_tests.rs"]
mod tests;
