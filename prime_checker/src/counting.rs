//! Counts the divisibility tests each check performs, so the cost gap between
//! the two methods can be asserted without wall-clock timing.

use num_traits::PrimInt;

use crate::checker::{Method, trial_divide_all, trial_divide_odd};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrialCount {
    pub is_prime: bool,
    /// Number of `n % d` operations taken, the evenness test included.
    pub divisions: u64,
}

pub fn count_trial_divisions<T: PrimInt>(method: Method, n: T) -> TrialCount {
    let mut divisions = 0u64;
    let mut probe = || divisions += 1;
    let is_prime = match method {
        Method::Optimized => trial_divide_odd(n, &mut probe),
        Method::Naive => trial_divide_all(n, &mut probe),
    };
    TrialCount {
        is_prime,
        divisions,
    }
}
