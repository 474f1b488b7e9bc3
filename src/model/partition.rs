//! Integer partition in canonical (non-increasing) form.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{Error, Result};

/// A single part of a partition.
pub type Part = u32;

/// Inline storage for parts. Most partitions the crate enumerates fit.
pub(crate) type Parts = SmallVec<[Part; 16]>;

/// A partition of `n`: positive parts, non-increasing, summing to `n`.
///
/// The empty partition is the unique partition of 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<Part>", into = "Vec<Part>")]
pub struct Partition {
    parts: Parts,
}

impl Partition {
    /// Build a partition, checking that every part is positive, the
    /// sequence is non-increasing and the size fits a `u32`.
    pub fn new(parts: impl IntoIterator<Item = Part>) -> Result<Self> {
        let parts: Parts = parts.into_iter().collect();
        checked_size(&parts)?;
        if let Some(pos) = parts.iter().position(|&p| p == 0) {
            return Err(Error::InvalidArgument(format!(
                "partition part at index {pos} is zero"
            )));
        }
        if let Some(pos) = parts.windows(2).position(|w| w[0] < w[1]) {
            return Err(Error::InvalidArgument(format!(
                "partition parts must be non-increasing, found {} before {} at index {pos}",
                parts[pos],
                parts[pos + 1],
            )));
        }
        Ok(Self { parts })
    }

    /// Generators only ever hand over canonical sequences.
    pub(crate) fn from_canonical(parts: Parts) -> Self {
        debug_assert!(parts.iter().all(|&p| p > 0));
        debug_assert!(parts.windows(2).all(|w| w[0] >= w[1]));
        Self { parts }
    }

    /// The empty partition of 0.
    pub fn empty() -> Self {
        Self { parts: Parts::new() }
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Number of parts (rows of the Young diagram).
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The `n` this is a partition of.
    pub fn size(&self) -> u32 {
        self.parts.iter().sum()
    }

    /// Largest part (length of the first row), 0 for the empty partition.
    pub fn largest(&self) -> Part {
        self.parts.first().copied().unwrap_or(0)
    }

    /// Transpose of the Young diagram: column `j` of `self` becomes row `j`.
    pub fn conjugate(&self) -> Self {
        let parts = (0..self.largest())
            .map(|j| self.parts.iter().take_while(|&&p| p > j).count() as Part)
            .collect();
        Self { parts }
    }

    /// True when the Young diagram equals its own transpose.
    pub fn is_self_conjugate(&self) -> bool {
        self.conjugate() == *self
    }
}

/// Sum of `parts`, or an error when it does not fit a `u32`.
pub(crate) fn checked_size(parts: &[Part]) -> Result<u32> {
    parts
        .iter()
        .try_fold(0u32, |acc, &p| acc.checked_add(p))
        .ok_or_else(|| Error::InvalidArgument(format!(
            "partition with {} parts sums past u32::MAX",
            parts.len()
        )))
}

impl TryFrom<Vec<Part>> for Partition {
    type Error = Error;

    fn try_from(parts: Vec<Part>) -> Result<Self> {
        Self::new(parts)
    }
}

impl From<Partition> for Vec<Part> {
    fn from(p: Partition) -> Self {
        p.parts.into_vec()
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 { write!(f, ", ")?; }
            write!(f, "{part}")?;
        }
        write!(f, "]")
    }
}
