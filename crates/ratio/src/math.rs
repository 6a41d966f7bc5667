//! Integer helpers used to keep fractions reduced.

/// Greatest common divisor of two unsigned integers.
///
/// Uses an iterative Euclidean algorithm. `gcd(a, 0)` is `a`, except that
/// `gcd(0, 0)` is `1` so that the result is always safe to divide by.
///
/// # Examples
///
/// ```
/// assert_eq!(ratio::gcd(12, 18), 6);
/// assert_eq!(ratio::gcd(7, 0), 7);
/// assert_eq!(ratio::gcd(0, 0), 1);
/// ```
#[inline]
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    if a == 0 && b == 0 {
        return 1;
    }

    while b != 0 {
        (a, b) = (b, a % b);
    }

    a
}

/// Least common multiple of two unsigned integers, or `None` if it does not
/// fit in a `u64`.
///
/// # Examples
///
/// ```
/// assert_eq!(ratio::lcm(4, 6), Some(12));
/// assert_eq!(ratio::lcm(u64::MAX, 2), None);
/// ```
#[inline]
pub const fn lcm(a: u64, b: u64) -> Option<u64> {
    // Divide before multiplying to keep the intermediate small.
    (a / gcd(a, b)).checked_mul(b)
}

#[cfg(test)]
mod tests {
    use super::{gcd, lcm};

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 0), 1);
        assert_eq!(gcd(35, 33), 1);
        assert_eq!(gcd(1 << 63, 1 << 62), 1 << 62);
        // Consecutive Fibonacci numbers take the longest path through Euclid.
        assert_eq!(gcd(7540113804746346429, 4660046610375530309), 1);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(11, 3), Some(33));
        assert_eq!(lcm(8, 12), Some(24));
        assert_eq!(lcm(0, 12), Some(0));
        assert_eq!(lcm(1 << 32, (1 << 32) + 1), None);
    }
}
