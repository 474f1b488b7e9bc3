//! Prime factorization grouped into prime powers.

use std::collections::BTreeMap;
use std::fmt;

use num_bigint::BigUint;
use num_traits::One;
use serde::{Deserialize, Serialize};

/// One `prime^exponent` term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimePower {
    #[serde(with = "super::decimal")]
    pub prime: BigUint,
    pub exponent: u32,
}

/// Prime → multiplicity map representing `∏ prime^multiplicity`.
///
/// The empty factorization represents 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PrimePower>", into = "Vec<PrimePower>")]
pub struct PrimeFactorization {
    powers: BTreeMap<BigUint, u32>,
}

impl PrimeFactorization {
    /// Group a raw factor list (primes with repetition) into powers.
    pub fn from_factors<I, T>(factors: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BigUint>,
    {
        let mut powers = BTreeMap::new();
        for factor in factors {
            *powers.entry(factor.into()).or_insert(0) += 1;
        }
        Self { powers }
    }

    /// Exponent of `prime`, 0 when it does not divide the value.
    pub fn multiplicity(&self, prime: u64) -> u32 {
        self.powers.get(&BigUint::from(prime)).copied().unwrap_or(0)
    }

    /// Distinct primes in increasing order with their exponents.
    pub fn iter(&self) -> impl Iterator<Item = (&BigUint, u32)> {
        self.powers.iter().map(|(p, &e)| (p, e))
    }

    /// Number of distinct primes.
    pub fn len(&self) -> usize {
        self.powers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.powers.is_empty()
    }

    /// The integer this factorization represents.
    pub fn value(&self) -> BigUint {
        self.powers
            .iter()
            .fold(BigUint::one(), |acc, (p, &e)| acc * p.pow(e))
    }
}

impl From<Vec<PrimePower>> for PrimeFactorization {
    fn from(terms: Vec<PrimePower>) -> Self {
        let mut powers = BTreeMap::new();
        for term in terms.into_iter().filter(|t| t.exponent > 0) {
            *powers.entry(term.prime).or_insert(0) += term.exponent;
        }
        Self { powers }
    }
}

impl From<PrimeFactorization> for Vec<PrimePower> {
    fn from(f: PrimeFactorization) -> Self {
        f.powers
            .into_iter()
            .map(|(prime, exponent)| PrimePower { prime, exponent })
            .collect()
    }
}

impl fmt::Display for PrimeFactorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.powers.is_empty() {
            return write!(f, "1");
        }
        for (i, (p, &e)) in self.powers.iter().enumerate() {
            if i > 0 { write!(f, " · ")?; }
            if e == 1 {
                write!(f, "{p}")?;
            } else {
                write!(f, "{p}^{e}")?;
            }
        }
        Ok(())
    }
}
