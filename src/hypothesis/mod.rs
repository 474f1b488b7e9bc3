//! Divisibility hypotheses about representation degrees.
//!
//! Two experiments, both run over a half-open range of `n`:
//!
//! - **Partition count**: for every prime `p ≤ n`, the number of partitions
//!   of `n` whose degree is not divisible by `p` is itself divisible by `p`.
//! - **Self-conjugate parity**: every self-conjugate partition of `n ≥ 2`
//!   has even degree.
//!
//! A falsified case is data, not an error. Each case is recorded with an
//! [`Outcome`] and the run always covers the whole range. Only a bound
//! above the configured cap fails the run up front.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::bijection::to_self_conjugate;
use crate::config::LabConfig;
use crate::degree::{degree, degree_from_hooks};
use crate::factor::{factorial_valuation, valuation};
use crate::generate::{distinct_odd_partitions, integer_partitions};
use crate::hooks::hook_lengths;
use crate::model::{DistinctOddPartition, Partition};
use crate::primes::{PrimeSource, Sieve};
use crate::{Error, Result};

// ============================================================================
// Outcomes and cases
// ============================================================================

/// Verdict for one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    Fail,
    /// The case could not be evaluated (a computation error).
    Error(String),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    fn from_check(ok: bool) -> Self {
        if ok { Outcome::Pass } else { Outcome::Fail }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pass => write!(f, "pass"),
            Outcome::Fail => write!(f, "FAIL"),
            Outcome::Error(reason) => write!(f, "ERROR ({reason})"),
        }
    }
}

/// Anything a report can hold.
pub trait Case {
    fn outcome(&self) -> &Outcome;
}

/// One `(n, p)` check of the partition-count hypothesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionCase {
    pub n: u32,
    pub p: u64,
    /// Partitions of `n` whose degree is not divisible by `p`.
    pub count: u64,
    pub outcome: Outcome,
}

impl Case for PartitionCase {
    fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

impl fmt::Display for PartitionCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n = {}, p = {}: {} partitions with degree not divisible by p: {}",
            self.n, self.p, self.count, self.outcome
        )
    }
}

/// Degree data for one self-conjugate partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeDetail {
    #[serde(with = "crate::model::decimal")]
    pub degree: BigUint,
    /// Exponent of 2 in `n!`.
    pub factorial_twos: u64,
    /// Exponent of 2 in the hook-length product.
    pub hook_product_twos: u64,
}

/// One self-conjugate partition checked for even degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfConjugateCase {
    pub n: u32,
    /// The distinct-odd partition the self-conjugate partition came from.
    pub odd_parts: DistinctOddPartition,
    pub partition: Option<Partition>,
    pub detail: Option<DegreeDetail>,
    pub outcome: Outcome,
}

impl Case for SelfConjugateCase {
    fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

impl fmt::Display for SelfConjugateCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n = {}, odd parts {}", self.n, self.odd_parts)?;
        if let Some(p) = &self.partition {
            write!(f, ", partition {p}")?;
        }
        if let Some(d) = &self.detail {
            write!(
                f,
                ", degree {} (2^{} in n!, 2^{} in hook product)",
                d.degree, d.factorial_twos, d.hook_product_twos
            )?;
        }
        write!(f, ": {}", self.outcome)
    }
}

// ============================================================================
// Reports
// ============================================================================

/// Which experiment a report belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hypothesis {
    PartitionCount,
    SelfConjugateEven,
}

impl fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hypothesis::PartitionCount => {
                write!(f, "#{{λ ⊢ n : p ∤ dim χ^λ}} ≡ 0 (mod p) for primes p ≤ n")
            }
            Hypothesis::SelfConjugateEven => {
                write!(f, "self-conjugate λ ⊢ n ≥ 2 has even dim χ^λ")
            }
        }
    }
}

/// Aggregate result of one experiment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypothesisReport<C> {
    pub hypothesis: Hypothesis,
    /// Exclusive upper bound on `n`.
    pub max_n: u32,
    /// Cases evaluated, including any not retained in `cases`.
    pub checked: usize,
    /// Cases that did not pass.
    pub failed: usize,
    pub cases: Vec<C>,
}

impl<C: Case> HypothesisReport<C> {
    fn new(hypothesis: Hypothesis, max_n: u32) -> Self {
        Self { hypothesis, max_n, checked: 0, failed: 0, cases: Vec::new() }
    }

    fn record(&mut self, case: C, keep_passing: bool) {
        self.checked += 1;
        let passed = case.outcome().is_pass();
        if !passed {
            self.failed += 1;
        }
        if !passed || keep_passing {
            self.cases.push(case);
        }
    }

    /// Every case that failed or could not be evaluated.
    pub fn failures(&self) -> impl Iterator<Item = &C> {
        self.cases.iter().filter(|c| !c.outcome().is_pass())
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

// ============================================================================
// Tester
// ============================================================================

/// Runs the experiments with a prime source and a configuration.
#[derive(Debug, Clone)]
pub struct HypothesisTester<P = Sieve> {
    primes: P,
    config: LabConfig,
}

impl HypothesisTester<Sieve> {
    pub fn new(config: LabConfig) -> Self {
        Self::with_primes(Sieve, config)
    }
}

impl Default for HypothesisTester<Sieve> {
    fn default() -> Self {
        Self::new(LabConfig::default())
    }
}

impl<P: PrimeSource> HypothesisTester<P> {
    pub fn with_primes(primes: P, config: LabConfig) -> Self {
        Self { primes, config }
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    /// `max_n` is exclusive, so the largest n touched is `max_n - 1`.
    fn check_bound(&self, max_n: u32) -> Result<()> {
        if max_n > self.config.max_n.saturating_add(1) {
            return Err(Error::InvalidArgument(format!(
                "max_n = {max_n} would enumerate partitions of {}, above the configured cap of {}",
                max_n - 1,
                self.config.max_n
            )));
        }
        Ok(())
    }

    /// Check the partition-count hypothesis for every `n` in `1..max_n` and
    /// every prime `p ≤ n`.
    pub fn test_partition_hypothesis(&self, max_n: u32) -> Result<HypothesisReport<PartitionCase>> {
        self.check_bound(max_n)?;
        let mut report = HypothesisReport::new(Hypothesis::PartitionCount, max_n);

        for n in 1..max_n {
            let primes = self.primes.primes_up_to(u64::from(n));
            if primes.is_empty() {
                continue;
            }

            let degrees: Result<Vec<BigUint>> = integer_partitions(n)?.iter().map(degree).collect();
            debug!(n, primes = primes.len(), "checking partition-count hypothesis");

            for p in primes {
                let case = match (&degrees, p) {
                    (_, 0 | 1) => PartitionCase {
                        n,
                        p,
                        count: 0,
                        outcome: Outcome::Error(format!("prime source yielded {p}")),
                    },
                    (Err(e), _) => PartitionCase {
                        n,
                        p,
                        count: 0,
                        outcome: Outcome::Error(e.to_string()),
                    },
                    (Ok(degrees), _) => {
                        let count = degrees.iter().filter(|d| !(*d % p).is_zero()).count() as u64;
                        PartitionCase { n, p, count, outcome: Outcome::from_check(count % p == 0) }
                    }
                };
                if !case.outcome.is_pass() {
                    warn!(%case, "partition-count hypothesis not confirmed");
                }
                report.record(case, self.config.keep_passing_cases);
            }
        }

        info!(max_n, checked = report.checked, failed = report.failed, "partition-count run finished");
        Ok(report)
    }

    /// Check that every self-conjugate partition of `n` in `2..max_n` has
    /// even degree.
    pub fn test_self_conjugate_hypothesis(&self, max_n: u32) -> Result<HypothesisReport<SelfConjugateCase>> {
        self.check_bound(max_n)?;
        let mut report = HypothesisReport::new(Hypothesis::SelfConjugateEven, max_n);

        for n in 2..max_n {
            let odds = distinct_odd_partitions(n)?;
            debug!(n, self_conjugates = odds.len(), "checking self-conjugate parity");

            let factorial_twos = factorial_valuation(n, 2)?;
            for odd_parts in odds {
                let case = self_conjugate_case(n, odd_parts, factorial_twos);
                if !case.outcome.is_pass() {
                    warn!(%case, "self-conjugate parity not confirmed");
                }
                report.record(case, self.config.keep_passing_cases);
            }
        }

        info!(max_n, checked = report.checked, failed = report.failed, "self-conjugate run finished");
        Ok(report)
    }
}

fn self_conjugate_case(n: u32, odd_parts: DistinctOddPartition, factorial_twos: u64) -> SelfConjugateCase {
    let partition = match to_self_conjugate(&odd_parts) {
        Ok(p) => p,
        Err(e) => {
            return SelfConjugateCase {
                n,
                odd_parts,
                partition: None,
                detail: None,
                outcome: Outcome::Error(e.to_string()),
            };
        }
    };

    let detail = degree_detail(n, &partition, factorial_twos);
    let outcome = match &detail {
        Err(e) => Outcome::Error(e.to_string()),
        Ok(d) => {
            let even = (&d.degree % 2u32).is_zero();
            if even != (d.factorial_twos > d.hook_product_twos) {
                Outcome::Error(format!(
                    "degree parity disagrees with 2-adic counts ({} vs {})",
                    d.factorial_twos, d.hook_product_twos
                ))
            } else {
                Outcome::from_check(even)
            }
        }
    };

    SelfConjugateCase {
        n,
        odd_parts,
        partition: Some(partition),
        detail: detail.ok(),
        outcome,
    }
}

fn degree_detail(n: u32, partition: &Partition, factorial_twos: u64) -> Result<DegreeDetail> {
    let hooks = hook_lengths(partition);
    let degree = degree_from_hooks(n, &hooks)?;
    let hook_product_twos = u64::from(valuation(&hooks.product(), 2)?);
    Ok(DegreeDetail { degree, factorial_twos, hook_product_twos })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_hypothesis_small() {
        let report = HypothesisTester::new(LabConfig::default()).test_partition_hypothesis(8).unwrap();
        assert!(report.is_success());
        // n = 2..7 against primes ≤ n: 1 + 2 + 2 + 3 + 3 + 4
        assert_eq!(report.checked, 15);
        let n5_p2 = report.cases.iter().find(|c| c.n == 5 && c.p == 2).unwrap();
        // degrees of 5: 1, 4, 5, 6, 5, 4, 1
        assert_eq!(n5_p2.count, 4);
    }

    #[test]
    fn test_self_conjugate_hypothesis_small() {
        let report = HypothesisTester::new(LabConfig::default()).test_self_conjugate_hypothesis(11).unwrap();
        assert!(report.is_success());
        // self-conjugate counts for n = 2..10: 0, 1, 1, 1, 1, 1, 2, 2, 2
        assert_eq!(report.checked, 11);
        let first = &report.cases[0];
        assert_eq!(first.n, 3);
        assert_eq!(first.partition.as_ref().unwrap().parts(), &[2, 1]);
        let detail = first.detail.as_ref().unwrap();
        assert_eq!(detail.degree, BigUint::from(2u32));
        assert_eq!(detail.factorial_twos, 1);
        assert_eq!(detail.hook_product_twos, 0);
    }

    #[test]
    fn test_bound_above_cap_is_rejected() {
        let tester = HypothesisTester::new(LabConfig::default().with_max_n(10));
        assert!(tester.test_partition_hypothesis(11).is_ok());
        assert!(matches!(tester.test_partition_hypothesis(12), Err(Error::InvalidArgument(_))));
        assert!(matches!(tester.test_self_conjugate_hypothesis(50), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_failures_are_recorded_not_raised() {
        // A source that hands out a non-prime: 4 divides nothing it should.
        let liar = |bound: u64| -> Vec<u64> { if bound >= 4 { vec![4] } else { Vec::new() } };
        let tester = HypothesisTester::with_primes(liar, LabConfig::default());
        let report = tester.test_partition_hypothesis(7).unwrap();
        assert_eq!(report.checked, 3);
        // n = 4, 5, 6 leave 5, 5 and 10 degrees not divisible by 4.
        assert_eq!(report.failed, 3);
        assert_eq!(report.failures().count(), report.failed);
    }

    #[test]
    fn test_bogus_prime_is_case_error() {
        let ones = |_: u64| -> Vec<u64> { vec![1] };
        let report = HypothesisTester::with_primes(ones, LabConfig::default())
            .test_partition_hypothesis(4)
            .unwrap();
        assert_eq!(report.checked, 3);
        assert_eq!(report.failed, 3);
        assert!(report.cases.iter().all(|c| matches!(c.outcome, Outcome::Error(_))));
    }

    #[test]
    fn test_keep_only_failures() {
        let cfg = LabConfig::default().with_keep_passing_cases(false);
        let report = HypothesisTester::new(cfg).test_self_conjugate_hypothesis(12).unwrap();
        assert!(report.checked > 0);
        assert!(report.cases.is_empty());
    }
}
