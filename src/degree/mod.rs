//! Degrees of irreducible representations of the symmetric group.
//!
//! The hook-length formula gives `dim χ^λ = n! / ∏ h(c)` for a partition
//! `λ` of `n`. Everything is computed on `BigUint`; the division is checked
//! for exactness because a remainder can only mean a wrong hook table.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::hooks::hook_lengths;
use crate::model::{HookLengthTable, Partition};
use crate::{Error, Result};

/// `n!`, exact.
pub fn factorial(n: u32) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, k| acc * k)
}

/// Degree of the irreducible representation of `S_n` indexed by
/// `partition`, where `n` is the partition's size.
pub fn degree(partition: &Partition) -> Result<BigUint> {
    if partition.is_empty() {
        return Err(Error::DomainError(
            "the empty partition does not index a representation of S_n for n > 0".into(),
        ));
    }
    degree_from_hooks(partition.size(), &hook_lengths(partition))
}

/// `n! / ∏ hooks`, failing with a domain error if the division is not exact.
pub fn degree_from_hooks(n: u32, hooks: &HookLengthTable) -> Result<BigUint> {
    let cells = hooks.cells().count();
    if cells != n as usize {
        return Err(Error::DomainError(format!(
            "hook table has {cells} cells but n = {n}"
        )));
    }

    let product = hooks.product();
    if product.is_zero() {
        return Err(Error::DomainError("hook table contains a zero hook length".into()));
    }
    let (quot, rem) = factorial(n).div_rem(&product);
    if !rem.is_zero() {
        return Err(Error::DomainError(format!(
            "hook product {product} does not divide {n}!"
        )));
    }
    Ok(quot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::integer_partitions;
    use num_traits::ToPrimitive;

    fn deg(parts: &[u32]) -> u64 {
        let d = degree(&Partition::new(parts.iter().copied()).unwrap()).unwrap();
        d.to_u64().unwrap()
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), BigUint::one());
        assert_eq!(factorial(1), BigUint::one());
        assert_eq!(factorial(5), BigUint::from(120u32));
        assert_eq!(
            factorial(25).to_string(),
            "15511210043330985984000000"
        );
    }

    #[test]
    fn test_small_degrees() {
        assert_eq!(deg(&[4]), 1);
        assert_eq!(deg(&[3, 1]), 3);
        assert_eq!(deg(&[2, 2]), 2);
        assert_eq!(deg(&[2, 1, 1]), 3);
        assert_eq!(deg(&[1, 1, 1, 1]), 1);
        assert_eq!(deg(&[3, 2, 1]), 16);
        assert_eq!(deg(&[4, 2, 1]), 35);
        assert_eq!(deg(&[3, 3, 3]), 42);
        assert_eq!(deg(&[5, 1, 1, 1, 1]), 70);
        assert_eq!(deg(&[4, 3, 2, 1]), 768);
        assert_eq!(deg(&[5, 4, 3, 2, 1]), 292_864);
    }

    #[test]
    fn test_sum_of_squares_is_factorial() {
        for n in 1..=12 {
            let total = integer_partitions(n)
                .unwrap()
                .iter()
                .map(|p| {
                    let d = degree(p).unwrap();
                    &d * &d
                })
                .fold(BigUint::zero(), |acc, sq| acc + sq);
            assert_eq!(total, factorial(n), "n = {n}");
        }
    }

    #[test]
    fn test_empty_partition_is_domain_error() {
        assert!(matches!(degree(&Partition::empty()), Err(Error::DomainError(_))));
    }

    #[test]
    fn test_inexact_hooks_rejected() {
        let bogus = HookLengthTable::from_rows(vec![vec![4, 1], vec![1]]);
        assert!(matches!(degree_from_hooks(3, &bogus), Err(Error::DomainError(_))));
    }

    #[test]
    fn test_zero_hook_is_domain_error() {
        let zero = HookLengthTable::from_rows(vec![vec![0]]);
        assert!(matches!(degree_from_hooks(1, &zero), Err(Error::DomainError(_))));
    }
}
