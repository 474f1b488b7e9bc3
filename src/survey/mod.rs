//! Hook-length survey of self-conjugate partitions.
//!
//! For each self-conjugate partition of `n`, collect the hook table, the
//! hook product with its prime factorization, and the resulting degree.
//! This is the raw material behind the self-conjugate parity experiment.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::bijection::self_conjugates;
use crate::degree::degree_from_hooks;
use crate::factor::prime_factorization;
use crate::hooks::hook_lengths;
use crate::model::{HookLengthTable, Partition, PrimeFactorization};
use crate::Result;

/// Hook data for one partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookProfile {
    pub partition: Partition,
    pub hooks: HookLengthTable,
    #[serde(with = "crate::model::decimal")]
    pub hook_product: BigUint,
    pub factorization: PrimeFactorization,
    #[serde(with = "crate::model::decimal")]
    pub degree: BigUint,
}

impl HookProfile {
    pub fn of(partition: Partition) -> Result<Self> {
        let hooks = hook_lengths(&partition);
        let hook_product = hooks.product();
        let factorization = prime_factorization(&hook_product)?;
        let degree = degree_from_hooks(partition.size(), &hooks)?;
        Ok(Self { partition, hooks, hook_product, factorization, degree })
    }
}

/// Profiles of every self-conjugate partition of `n`, in generator order.
/// Empty when `n` has none (n = 2).
pub fn survey_self_conjugates(n: u32) -> Result<Vec<HookProfile>> {
    self_conjugates(n)?.into_iter().map(HookProfile::of).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_of_nine() {
        let profiles = survey_self_conjugates(9).unwrap();
        assert_eq!(profiles.len(), 2);

        let square = &profiles[0];
        assert_eq!(square.partition.parts(), &[3, 3, 3]);
        assert_eq!(square.hooks, vec![vec![3, 2, 1], vec![4, 3, 2], vec![5, 4, 3]]);
        assert_eq!(square.hook_product, BigUint::from(8640u32));
        assert_eq!(square.factorization.to_string(), "2^6 · 3^3 · 5");
        assert_eq!(square.degree, BigUint::from(42u32));

        assert_eq!(profiles[1].partition.parts(), &[5, 1, 1, 1, 1]);
        assert_eq!(profiles[1].degree, BigUint::from(70u32));
    }

    #[test]
    fn test_survey_of_two_is_empty() {
        assert!(survey_self_conjugates(2).unwrap().is_empty());
    }
}
