//! Partition into distinct odd parts.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::partition::{checked_size, Part, Parts};
use crate::{Error, Result};

/// A partition of `n` into pairwise distinct odd parts, stored in
/// strictly increasing order (the order the generator produces and the
/// self-conjugate bijection consumes).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Part>", into = "Vec<Part>")]
pub struct DistinctOddPartition {
    parts: Parts,
}

impl DistinctOddPartition {
    /// Build from parts in increasing order.
    pub fn new(parts: impl IntoIterator<Item = Part>) -> Result<Self> {
        let parts: Parts = parts.into_iter().collect();
        checked_size(&parts)?;
        if let Some(&even) = parts.iter().find(|&&p| p % 2 == 0) {
            return Err(Error::InvalidArgument(format!(
                "distinct-odd partition contains even part {even}"
            )));
        }
        if let Some(pos) = parts.windows(2).position(|w| w[0] >= w[1]) {
            return Err(Error::InvalidArgument(format!(
                "distinct-odd parts must be strictly increasing, found {} before {} at index {pos}",
                parts[pos],
                parts[pos + 1],
            )));
        }
        Ok(Self { parts })
    }

    pub(crate) fn from_canonical(parts: Parts) -> Self {
        debug_assert!(parts.iter().all(|&p| p % 2 == 1));
        debug_assert!(parts.windows(2).all(|w| w[0] < w[1]));
        Self { parts }
    }

    /// Parts in increasing order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn size(&self) -> u32 {
        self.parts.iter().sum()
    }

    pub fn largest(&self) -> Option<Part> {
        self.parts.last().copied()
    }
}

impl TryFrom<Vec<Part>> for DistinctOddPartition {
    type Error = Error;

    fn try_from(parts: Vec<Part>) -> Result<Self> {
        Self::new(parts)
    }
}

impl From<DistinctOddPartition> for Vec<Part> {
    fn from(p: DistinctOddPartition) -> Self {
        p.parts.into_vec()
    }
}

impl fmt::Display for DistinctOddPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 { write!(f, ", ")?; }
            write!(f, "{part}")?;
        }
        write!(f, "]")
    }
}
