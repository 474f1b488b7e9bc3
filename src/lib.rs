//! # partition-degrees: Partitions, Hooks and S_n Degrees
//!
//! Enumerates integer partitions and partitions into distinct odd parts,
//! maps the latter onto self-conjugate partitions, computes hook lengths
//! and exact irreducible-representation degrees of the symmetric group,
//! and runs divisibility experiments on those degrees.
//!
//! ## Design Principles
//!
//! 1. **Values in, values out**: every stage takes and returns immutable
//!    model types (`Partition`, `HookLengthTable`, ...)
//! 2. **Exact arithmetic**: factorials, hook products and degrees are `BigUint`
//! 3. **Falsification is data**: experiments record failing cases, they never
//!    abort on one
//! 4. **Collaborators at the seams**: primes come from a `PrimeSource`,
//!    text and JSON come from `report`
//!
//! ## Quick Start
//!
//! ```rust
//! use partition_degrees::{integer_partitions, degree, HypothesisTester, LabConfig};
//!
//! # fn example() -> partition_degrees::Result<()> {
//! let partitions = integer_partitions(4)?;
//! let degrees: Vec<String> = partitions
//!     .iter()
//!     .map(|p| degree(p).map(|d| d.to_string()))
//!     .collect::<partition_degrees::Result<_>>()?;
//! assert_eq!(degrees, ["1", "3", "2", "3", "1"]);
//!
//! let report = HypothesisTester::new(LabConfig::default()).test_partition_hypothesis(10)?;
//! assert!(report.is_success());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Module | Produces |
//! |-------|--------|----------|
//! | Enumerate | `generate` | `Partition`, `DistinctOddPartition` |
//! | Biject | `bijection` | self-conjugate `Partition` |
//! | Hooks | `hooks` | `HookLengthTable` |
//! | Degree | `degree` | `BigUint` |
//! | Factor | `factor` | prime factors, valuations |
//! | Experiment | `hypothesis` | `HypothesisReport` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod generate;
pub mod bijection;
pub mod hooks;
pub mod degree;
pub mod factor;
pub mod primes;
pub mod config;
pub mod hypothesis;
pub mod survey;
pub mod report;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Partition, Part, DistinctOddPartition, HookLengthTable,
    PrimeFactorization, PrimePower,
};

// ============================================================================
// Re-exports: Computation
// ============================================================================

pub use generate::{integer_partitions, distinct_odd_partitions, partition_count};
pub use bijection::{to_self_conjugate, to_distinct_odd, self_conjugates};
pub use hooks::hook_lengths;
pub use degree::{degree, degree_from_hooks, factorial};
pub use factor::{factorize, factorize_big, prime_factorization, valuation, factorial_valuation};

// ============================================================================
// Re-exports: Experiments
// ============================================================================

pub use primes::{PrimeSource, Sieve};
pub use config::LabConfig;
pub use hypothesis::{
    HypothesisTester, HypothesisReport, Hypothesis, Outcome, Case,
    PartitionCase, SelfConjugateCase, DegreeDetail,
};
pub use survey::{survey_self_conjugates, HookProfile};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Out-of-domain input: n = 0, a malformed partition, a bound above the cap.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An internal consistency check failed.
    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
