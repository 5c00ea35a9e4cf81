use crate::utils::error::{PrimeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest `r` such that `r * r <= n`, computed without floating point.
///
/// Newton's iteration started from a power of two that is at least
/// `sqrt(n)`, so the sequence decreases monotonically onto the floor root.
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }

    let bits = u64::BITS - n.leading_zeros();
    let mut x = 1u64 << bits.div_ceil(2);
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Trial division by odd divisors up to `isqrt(n)`.
pub fn is_prime_u64(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let limit = isqrt(n);
    (3..=limit).step_by(2).all(|divisor| n % divisor != 0)
}

/// Returns `true` if `n` is prime. Negative numbers, 0 and 1 are not.
///
/// ```
/// use prime_check::is_prime;
///
/// assert!(is_prime(17));
/// assert!(!is_prime(15));
/// assert!(!is_prime(-5));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    is_prime_u64(n as u64)
}

/// Baseline variant: tries every integer divisor while `d * d <= n`.
pub fn is_prime_naive(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    // n < 2^63, so d * d stays below u64::MAX until the loop exits
    let n = n as u64;
    let mut divisor = 2u64;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Truncates `value` toward zero (`7.9 -> 7`, `-2.5 -> -2`) and checks it.
pub fn is_prime_f64(value: f64) -> Result<bool> {
    if !value.is_finite() {
        return Err(PrimeError::NotFinite { value });
    }

    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(PrimeError::OutOfRange { value });
    }

    Ok(is_prime(truncated as i64))
}

/// The two checker variants the benchmark compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Implementation {
    Naive,
    Optimized,
}

impl Implementation {
    pub fn checker(self) -> fn(i64) -> bool {
        match self {
            Implementation::Naive => is_prime_naive,
            Implementation::Optimized => is_prime,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Implementation::Naive => "naive",
            Implementation::Optimized => "optimized",
        }
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isqrt_small_values() {
        let expected = [0, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3];
        for (n, root) in expected.iter().enumerate() {
            assert_eq!(isqrt(n as u64), *root, "isqrt({})", n);
        }
    }

    #[test]
    fn test_isqrt_around_perfect_squares() {
        for r in [3u64, 1_000, 65_535, 3_037_000_499, u32::MAX as u64] {
            let square = r * r;
            assert_eq!(isqrt(square - 1), r - 1);
            assert_eq!(isqrt(square), r);
            assert_eq!(isqrt(square + 1), r);
        }
        assert_eq!(isqrt(u64::MAX), u32::MAX as u64);
    }

    #[test]
    fn test_known_values() {
        assert!(is_prime(17));
        assert!(!is_prime(15));
        assert!(!is_prime(1));
        assert!(is_prime(97));
        assert!(!is_prime(100));
        assert!(is_prime(99991));
        assert!(is_prime(999983));
        assert!(!is_prime(1000000));
    }

    #[test]
    fn test_below_two_is_never_prime() {
        for n in [i64::MIN, -5, -1, 0, 1] {
            assert!(!is_prime(n));
            assert!(!is_prime_naive(n));
        }
    }

    #[test]
    fn test_large_unsigned_values() {
        assert!(is_prime_u64(1_000_000_007));
        assert!(!is_prime_u64(u64::MAX));
        // square of a prime: the only divisor sits exactly on the bound
        assert!(!is_prime_u64(999_983 * 999_983));
        assert!(!is_prime_u64(1_000_000_007 * 3));
    }

    #[test]
    fn test_float_truncation() {
        assert!(is_prime_f64(7.0).unwrap());
        assert!(is_prime_f64(7.9).unwrap());
        assert!(!is_prime_f64(8.5).unwrap());
        assert!(!is_prime_f64(-2.5).unwrap());
        assert!(!is_prime_f64(1.99).unwrap());
    }

    #[test]
    fn test_float_rejects_unrepresentable_values() {
        assert!(matches!(
            is_prime_f64(f64::NAN),
            Err(PrimeError::NotFinite { .. })
        ));
        assert!(matches!(
            is_prime_f64(f64::INFINITY),
            Err(PrimeError::NotFinite { .. })
        ));
        assert!(matches!(
            is_prime_f64(1e19),
            Err(PrimeError::OutOfRange { .. })
        ));
        assert!(matches!(
            is_prime_f64(-1e19),
            Err(PrimeError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_implementation_checkers() {
        assert_eq!(Implementation::Naive.name(), "naive");
        assert_eq!(Implementation::Optimized.to_string(), "optimized");
        assert!((Implementation::Naive.checker())(13));
        assert!(!(Implementation::Optimized.checker())(21));
    }
}
