//! Hook-length table of a Young diagram.

use num_bigint::BigUint;
use num_traits::One;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Hook length of every cell of a partition's Young diagram.
///
/// Rows are stored bottom-up: `rows()[0]` belongs to the shortest (last)
/// row of the partition and the final row to the longest (first) one.
/// Within a row, cells run left to right. The empty partition has a
/// single empty row. Every hook length is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct HookLengthTable {
    rows: Vec<Vec<u32>>,
}

impl HookLengthTable {
    pub(crate) fn from_rows(rows: Vec<Vec<u32>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    /// All hook lengths, in row order.
    pub fn cells(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Product of every hook length, exact.
    pub fn product(&self) -> BigUint {
        self.cells().fold(BigUint::one(), |acc, h| acc * h)
    }

    pub fn into_rows(self) -> Vec<Vec<u32>> {
        self.rows
    }
}

impl TryFrom<Vec<Vec<u32>>> for HookLengthTable {
    type Error = Error;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self> {
        for (r, row) in rows.iter().enumerate() {
            if let Some(c) = row.iter().position(|&h| h == 0) {
                return Err(Error::InvalidArgument(format!(
                    "hook length at row {r}, cell {c} is zero"
                )));
            }
        }
        Ok(Self { rows })
    }
}

impl From<HookLengthTable> for Vec<Vec<u32>> {
    fn from(table: HookLengthTable) -> Self {
        table.rows
    }
}

impl PartialEq<Vec<Vec<u32>>> for HookLengthTable {
    fn eq(&self, other: &Vec<Vec<u32>>) -> bool {
        self.rows == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product() {
        let t = HookLengthTable::from_rows(vec![vec![3, 2, 1], vec![5, 2, 1]]);
        assert_eq!(t.product(), BigUint::from(60u32));

        let t = HookLengthTable::from_rows(vec![vec![1, 3, 8, 1], vec![2, 4, 1]]);
        assert_eq!(t.product(), BigUint::from(192u32));
    }

    #[test]
    fn test_empty_product_is_one() {
        let t = HookLengthTable::from_rows(vec![vec![]]);
        assert_eq!(t.product(), BigUint::one());
        assert_eq!(t.cells().count(), 0);
    }

    #[test]
    fn test_deserialize_rejects_zero_hook() {
        assert!(serde_json::from_str::<HookLengthTable>("[[0]]").is_err());
        assert!(serde_json::from_str::<HookLengthTable>("[[1], [3, 0]]").is_err());

        let t: HookLengthTable = serde_json::from_str("[[1], [3, 1]]").unwrap();
        assert_eq!(t, vec![vec![1], vec![3, 1]]);
        assert_eq!(serde_json::to_string(&t).unwrap(), "[[1],[3,1]]");

        let empty: HookLengthTable = serde_json::from_str("[[]]").unwrap();
        assert_eq!(empty.product(), BigUint::one());
    }
}
