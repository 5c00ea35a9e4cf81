use crate::core::primality::Implementation;
use crate::domain::model::{Mismatch, Timing};
use crate::utils::error::{PrimeError, Result};
use crate::utils::validation::{validate_non_empty_list, validate_positive_number};
use std::hint::black_box;
use std::time::{Duration, Instant};

pub const DEFAULT_ITERATIONS: usize = 10_000;

/// Primes of increasing size, then composites that should be rejected early.
pub const DEFAULT_TEST_NUMBERS: &[i64] = &[
    2, 3, 5, 7, 11, 13, 17, 19, 23, // small primes
    97, 101, 997, 1009, 9973, // medium primes
    99991, 999983, 9999991, // larger primes
    4, 6, 8, 9, 10, 15, 21, 25, 27, 49, 100, 121, // composites
];

/// Applies `check` to every number, `iterations` times, and returns the elapsed time.
pub fn time_checker<F>(check: F, numbers: &[i64], iterations: usize) -> Duration
where
    F: Fn(i64) -> bool,
{
    let start = Instant::now();
    for _ in 0..iterations {
        for &number in numbers {
            black_box(check(black_box(number)));
        }
    }
    start.elapsed()
}

/// Every input where `baseline` and `candidate` disagree, in input order.
pub fn cross_check<B, C>(baseline: B, candidate: C, numbers: &[i64]) -> Vec<Mismatch>
where
    B: Fn(i64) -> bool,
    C: Fn(i64) -> bool,
{
    numbers
        .iter()
        .filter_map(|&input| {
            let expected = baseline(input);
            let actual = candidate(input);
            (expected != actual).then_some(Mismatch {
                input,
                baseline: expected,
                candidate: actual,
            })
        })
        .collect()
}

/// `baseline / candidate`, guarding against zero-length timings.
pub fn speedup_ratio(baseline_secs: f64, candidate_secs: f64) -> f64 {
    if candidate_secs > 0.0 {
        baseline_secs / candidate_secs
    } else if baseline_secs > 0.0 {
        f64::INFINITY
    } else {
        1.0
    }
}

/// `(baseline - candidate) / baseline * 100`, or 0 when the baseline took no time.
pub fn improvement_percent(baseline_secs: f64, candidate_secs: f64) -> f64 {
    if baseline_secs > 0.0 {
        (baseline_secs - candidate_secs) / baseline_secs * 100.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub baseline: Timing,
    pub candidate: Timing,
    pub iterations: usize,
    pub input_count: usize,
    pub mismatches: Vec<Mismatch>,
}

impl Comparison {
    pub fn speedup(&self) -> f64 {
        speedup_ratio(self.baseline.seconds(), self.candidate.seconds())
    }

    pub fn improvement_percent(&self) -> f64 {
        improvement_percent(self.baseline.seconds(), self.candidate.seconds())
    }

    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Fails with the first disagreement, if there is one.
    pub fn ensure_consistent(&self) -> Result<()> {
        match self.mismatches.first() {
            Some(m) => Err(PrimeError::Mismatch {
                input: m.input,
                baseline: m.baseline,
                candidate: m.candidate,
            }),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BenchmarkHarness {
    numbers: Vec<i64>,
    iterations: usize,
}

impl BenchmarkHarness {
    pub fn new(numbers: Vec<i64>, iterations: usize) -> Result<Self> {
        validate_non_empty_list("numbers", &numbers)?;
        validate_positive_number("iterations", iterations, 1)?;
        Ok(Self {
            numbers,
            iterations,
        })
    }

    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn time(&self, implementation: Implementation) -> Timing {
        tracing::debug!(
            "Timing {} over {} numbers x {} iterations",
            implementation,
            self.numbers.len(),
            self.iterations
        );
        let elapsed = time_checker(implementation.checker(), &self.numbers, self.iterations);
        tracing::debug!("{} finished in {:?}", implementation, elapsed);
        Timing {
            implementation,
            elapsed,
        }
    }

    pub fn compare(&self, baseline: Implementation, candidate: Implementation) -> Comparison {
        let baseline_timing = self.time(baseline);
        let candidate_timing = self.time(candidate);
        let mismatches = cross_check(baseline.checker(), candidate.checker(), &self.numbers);

        for m in &mismatches {
            tracing::warn!(
                "Mismatch for {}: {}={}, {}={}",
                m.input,
                baseline,
                m.baseline,
                candidate,
                m.candidate
            );
        }

        Comparison {
            baseline: baseline_timing,
            candidate: candidate_timing,
            iterations: self.iterations,
            input_count: self.numbers.len(),
            mismatches,
        }
    }
}

impl Default for BenchmarkHarness {
    fn default() -> Self {
        Self {
            numbers: DEFAULT_TEST_NUMBERS.to_vec(),
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_time_checker_calls_every_number_each_iteration() {
        let calls = Cell::new(0usize);
        let counting = |n: i64| {
            calls.set(calls.get() + 1);
            n > 0
        };

        time_checker(counting, &[1, 2, 3], 4);
        assert_eq!(calls.get(), 12);
    }

    #[test]
    fn test_cross_check_reports_disagreements_in_order() {
        let always_true = |_: i64| true;
        let mismatches = cross_check(crate::core::primality::is_prime, always_true, &[2, 4, 5, 9]);

        assert_eq!(
            mismatches,
            vec![
                Mismatch {
                    input: 4,
                    baseline: false,
                    candidate: true
                },
                Mismatch {
                    input: 9,
                    baseline: false,
                    candidate: true
                },
            ]
        );
    }

    #[test]
    fn test_ratio_edge_cases() {
        assert_eq!(speedup_ratio(2.0, 0.5), 4.0);
        assert_eq!(speedup_ratio(1.0, 0.0), f64::INFINITY);
        assert_eq!(speedup_ratio(0.0, 0.0), 1.0);
        assert_eq!(improvement_percent(2.0, 0.5), 75.0);
        assert_eq!(improvement_percent(0.0, 0.5), 0.0);
        assert!(improvement_percent(1.0, 2.0) < 0.0);
    }

    #[test]
    fn test_harness_rejects_invalid_setup() {
        assert!(BenchmarkHarness::new(vec![], 10).is_err());
        assert!(BenchmarkHarness::new(vec![2, 3], 0).is_err());
        assert!(BenchmarkHarness::new(vec![2, 3], 1).is_ok());
    }

    #[test]
    fn test_default_harness() {
        let harness = BenchmarkHarness::default();
        assert_eq!(harness.iterations(), DEFAULT_ITERATIONS);
        assert_eq!(harness.numbers().len(), 29);
        assert_eq!(harness.numbers()[0], 2);
    }

    #[test]
    fn test_ensure_consistent_returns_first_mismatch() {
        let timing = |implementation| Timing {
            implementation,
            elapsed: Duration::from_millis(1),
        };
        let comparison = Comparison {
            baseline: timing(Implementation::Naive),
            candidate: timing(Implementation::Optimized),
            iterations: 1,
            input_count: 2,
            mismatches: vec![Mismatch {
                input: 25,
                baseline: false,
                candidate: true,
            }],
        };

        assert!(!comparison.is_consistent());
        match comparison.ensure_consistent() {
            Err(PrimeError::Mismatch { input, .. }) => assert_eq!(input, 25),
            other => panic!("expected mismatch, got {:?}", other),
        }
    }
}
