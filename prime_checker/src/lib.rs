//! Trial-division primality checks.
//!
//! [`is_prime`] tries odd divisors up to the square root; [`is_prime_naive`]
//! tries every divisor below `n` and serves as the reference. Both accept any
//! primitive integer and return `false` for everything below 2.

mod checker;
pub mod counting;
pub mod demo;

pub use checker::{Method, is_prime, is_prime_naive};
pub use counting::{TrialCount, count_trial_divisions};
