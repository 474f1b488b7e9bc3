//! # Combinatorial Model
//!
//! Value types that flow between the generators, the bijection, the
//! hook-length calculator and the hypothesis tester.
//!
//! Design rule: every type here is immutable once built and validates its
//! invariants on construction. No enumeration, no arithmetic beyond what
//! the type itself needs.

pub mod partition;
pub mod distinct_odd;
pub mod hook_table;
pub mod factorization;
pub(crate) mod decimal;

pub use partition::{Partition, Part};
pub use distinct_odd::DistinctOddPartition;
pub use hook_table::HookLengthTable;
pub use factorization::{PrimeFactorization, PrimePower};
