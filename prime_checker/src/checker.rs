use num_traits::{PrimInt, Zero};
use strum_macros::{Display, EnumIter, EnumString};

/// Which trial-division check to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Method {
    /// Odd divisors up to the square root, see [`is_prime`].
    Optimized,
    /// Every divisor below `n`, see [`is_prime_naive`].
    Naive,
}

impl Method {
    pub fn check<T: PrimInt>(self, n: T) -> bool {
        match self {
            Method::Optimized => is_prime(n),
            Method::Naive => is_prime_naive(n),
        }
    }
}

/// Returns whether `n` is prime.
///
/// Handles 2 directly, rejects the remaining even numbers, then tries odd
/// divisors `3, 5, 7, ...` while `d * d <= n`. Any composite has a factor no
/// larger than its square root, so the search stops there.
///
/// Total over the whole domain of `T`: every `n <= 1` (zero and all negative
/// values included) is not prime.
pub fn is_prime<T: PrimInt>(n: T) -> bool {
    trial_divide_odd(n, &mut || {})
}

/// Returns whether `n` is prime by testing every candidate in `[2, n)`.
///
/// O(n). Agrees with [`is_prime`] on every input and exists to cross-check it.
pub fn is_prime_naive<T: PrimInt>(n: T) -> bool {
    trial_divide_all(n, &mut || {})
}

/// `probe` fires once per `n % d` taken.
pub(crate) fn trial_divide_odd<T: PrimInt>(n: T, probe: &mut impl FnMut()) -> bool {
    let one = T::one();
    let two = one + one;

    if n <= one {
        return false;
    }
    if n == two {
        return true;
    }
    probe();
    if (n % two).is_zero() {
        return false;
    }

    // `d <= n / d` rather than `d * d <= n`: the square overflows near T::max_value().
    let mut d = two + one;
    while d <= n / d {
        probe();
        if (n % d).is_zero() {
            return false;
        }
        d = d + two;
    }
    true
}

pub(crate) fn trial_divide_all<T: PrimInt>(n: T, probe: &mut impl FnMut()) -> bool {
    let one = T::one();

    if n <= one {
        return false;
    }

    let mut d = one + one;
    while d < n {
        probe();
        if (n % d).is_zero() {
            return false;
        }
        d = d + one;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    const SMALL_PRIMES: [i32; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

    #[test]
    fn known_primes() {
        for p in SMALL_PRIMES {
            assert!(is_prime(p), "{p}");
            assert!(is_prime_naive(p), "{p}");
        }
        assert!(is_prime(1_000_003));
        assert!(is_prime_naive(1_000_003));
    }

    #[test]
    fn known_composites() {
        for n in [4, 6, 8, 9, 10, 15, 21, 25, 49, 1_000_002] {
            assert!(!is_prime(n), "{n}");
            assert!(!is_prime_naive(n), "{n}");
        }
    }

    #[test]
    fn two_is_the_only_even_prime() {
        assert!(is_prime(2u8));
        assert!(is_prime_naive(2u8));
        for n in (4..1_000).step_by(2) {
            assert!(!is_prime(n));
            assert!(!is_prime_naive(n));
        }
    }

    #[test]
    fn zero_and_one() {
        for method in Method::iter() {
            assert!(!method.check(0i32));
            assert!(!method.check(1i32));
            assert!(!method.check(0u64));
            assert!(!method.check(1u64));
        }
    }

    #[test]
    fn methods_agree_up_to_ten_thousand() {
        for n in 2..=10_000i32 {
            assert_eq!(is_prime(n), is_prime_naive(n), "disagree on {n}");
        }
    }

    #[test]
    fn methods_agree_on_full_byte_ranges() {
        for n in u8::MIN..=u8::MAX {
            assert_eq!(is_prime(n), is_prime_naive(n), "disagree on {n}u8");
        }
        for n in i8::MIN..=i8::MAX {
            assert_eq!(is_prime(n), is_prime_naive(n), "disagree on {n}i8");
        }
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert!(!is_prime(i32::MIN));
        assert!(!is_prime(i64::MIN));
        // 2^31 - 1 is a Mersenne prime.
        assert!(is_prime(i32::MAX));
        assert!(!is_prime(i64::MAX));
        assert!(!is_prime(u32::MAX));
        assert!(!is_prime(u64::MAX));
        assert!(!is_prime(u128::MAX));
        // largest prime below 2^32
        assert!(is_prime(4_294_967_291u32));
        assert!(is_prime(4_294_967_291u64));
        assert!(!is_prime(4_294_967_293u32));
    }

    #[test]
    fn method_names() {
        assert_eq!(Method::Optimized.to_string(), "optimized");
        assert_eq!("naive".parse::<Method>(), Ok(Method::Naive));
        assert!("fast".parse::<Method>().is_err());
    }

    proptest! {
        #[test]
        fn nothing_below_two_is_prime(n in i64::MIN..=1) {
            prop_assert!(!is_prime(n));
            prop_assert!(!is_prime_naive(n));
        }

        #[test]
        fn even_numbers_above_two_are_not_prime(k in 2i64..1_000_000_000) {
            prop_assert!(!is_prime(2 * k));
            prop_assert!(!is_prime_naive(2 * k));
        }

        #[test]
        fn methods_agree(n in -1_000i32..50_000) {
            prop_assert_eq!(is_prime(n), is_prime_naive(n));
        }

        #[test]
        fn products_are_not_prime(a in 2u64..50_000, b in 2u64..50_000) {
            prop_assert!(!is_prime(a * b));
        }
    }
}
