//! Runs both checks over a fixed set of inputs and times them on a larger one.

use std::{
    hint::black_box,
    time::{Duration, Instant},
};

use tracing::{debug, instrument, warn};

use crate::checker::Method;

pub const DEMO_INPUTS: [i64; 21] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47,
];

/// A prime large enough for the naive check to be visibly slower.
pub const LARGE_INPUT: i64 = 1_000_003;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    pub inputs: Vec<i64>,
    pub large_input: i64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            inputs: DEMO_INPUTS.to_vec(),
            large_input: LARGE_INPUT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub n: i64,
    pub optimized: bool,
    pub naive: bool,
}

impl Classification {
    pub fn agrees(&self) -> bool {
        self.optimized == self.naive
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measurement {
    pub is_prime: bool,
    pub elapsed: Duration,
}

impl Measurement {
    fn take(method: Method, n: i64) -> Self {
        let instant = Instant::now();
        let is_prime = black_box(method.check(black_box(n)));
        let elapsed = instant.elapsed();
        debug!(%method, n, is_prime, ?elapsed, "timed check");
        Self { is_prime, elapsed }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub n: i64,
    pub optimized: Measurement,
    pub naive: Measurement,
}

impl Timing {
    /// How many times slower the naive check ran. `None` when the optimized
    /// check finished below the clock's resolution.
    pub fn speedup(&self) -> Option<f64> {
        if self.optimized.elapsed.is_zero() {
            return None;
        }
        Some(self.naive.elapsed.as_secs_f64() / self.optimized.elapsed.as_secs_f64())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DemoReport {
    pub classifications: Vec<Classification>,
    pub timing: Timing,
}

#[instrument(skip_all, fields(inputs = inputs.len()))]
pub fn classify(inputs: &[i64]) -> Vec<Classification> {
    inputs
        .iter()
        .map(|&n| {
            let row = Classification {
                n,
                optimized: Method::Optimized.check(n),
                naive: Method::Naive.check(n),
            };
            if !row.agrees() {
                warn!(n, optimized = row.optimized, naive = row.naive, "checks disagree");
            }
            row
        })
        .collect()
}

#[instrument]
pub fn time_methods(n: i64) -> Timing {
    let optimized = Measurement::take(Method::Optimized, n);
    let naive = Measurement::take(Method::Naive, n);
    if optimized.is_prime != naive.is_prime {
        warn!(n, "checks disagree");
    }
    Timing {
        n,
        optimized,
        naive,
    }
}

#[instrument(skip_all, fields(large_input = config.large_input))]
pub fn run(config: &DemoConfig) -> DemoReport {
    DemoReport {
        classifications: classify(&config.inputs),
        timing: time_methods(config.large_input),
    }
}
