//! Distinct-odd ↔ self-conjugate bijection.
//!
//! Each odd part `v` becomes a symmetric L-shaped hook of `v` cells whose
//! corner sits on the diagonal. Nesting the hooks from the largest part
//! outward fills the Young diagram of a self-conjugate partition of the
//! same size; reading the diagonal hooks back recovers the odd parts.
//!
//! ```text
//!   [3, 7]  →  reverse  →  [7, 3]
//!
//!   # # # #        hook 0: v = 7, arm 3
//!   # + + .        hook 1: v = 3, arm 1
//!   # + . .
//!   # . . .   →   rows [4, 3, 2, 1]
//! ```

use tracing::warn;

use crate::generate::distinct_odd_partitions;
use crate::model::partition::{Part, Parts};
use crate::model::{DistinctOddPartition, Partition};
use crate::{Error, Result};

/// Largest scratch grid the bijection will allocate, in cells. A side of
/// 4096 covers every part up to 8191.
const MAX_GRID_CELLS: usize = 1 << 24;

/// Square scratch grid used while nesting hooks. Never leaves this module.
struct YoungDiagram {
    dim: usize,
    cells: Vec<bool>,
}

impl YoungDiagram {
    fn new(dim: usize) -> Result<Self> {
        match dim.checked_mul(dim) {
            Some(area) if area <= MAX_GRID_CELLS => Ok(Self { dim, cells: vec![false; area] }),
            _ => Err(Error::InvalidArgument(format!(
                "a {dim}x{dim} diagram exceeds the {MAX_GRID_CELLS}-cell scratch limit"
            ))),
        }
    }

    fn fill(&mut self, row: usize, col: usize) -> Result<()> {
        if row >= self.dim || col >= self.dim {
            return Err(Error::DomainError(format!(
                "hook cell ({row}, {col}) falls outside a {0}x{0} diagram",
                self.dim
            )));
        }
        self.cells[row * self.dim + col] = true;
        Ok(())
    }

    /// Place the hook for odd part `value` with its corner at `(idx, idx)`.
    fn place_hook(&mut self, idx: usize, value: Part) -> Result<()> {
        self.fill(idx, idx)?;
        let arm = (value / 2) as usize;
        for step in 1..=arm {
            self.fill(idx, idx + step)?;
            self.fill(idx + step, idx)?;
        }
        Ok(())
    }

    fn row_lengths(&self) -> Parts {
        self.cells
            .chunks(self.dim)
            .map(|row| row.iter().filter(|&&c| c).count() as Part)
            .filter(|&len| len > 0)
            .collect()
    }
}

/// Map a distinct-odd partition (parts increasing) to its self-conjugate
/// partition.
pub fn to_self_conjugate(odds: &DistinctOddPartition) -> Result<Partition> {
    let Some(largest) = odds.largest() else {
        return Err(Error::InvalidArgument(
            "cannot build a self-conjugate partition from an empty distinct-odd partition".into(),
        ));
    };

    let dim = (largest / 2 + 1) as usize;
    let mut diagram = YoungDiagram::new(dim)?;
    for (idx, &value) in odds.parts().iter().rev().enumerate() {
        diagram.place_hook(idx, value)?;
    }

    let partition = Partition::new(diagram.row_lengths())?;
    if partition.size() != odds.size() || !partition.is_self_conjugate() {
        warn!(%odds, %partition, "bijection produced an inconsistent partition");
        return Err(Error::DomainError(format!(
            "{odds} mapped to {partition}, which is not a self-conjugate partition of {}",
            odds.size()
        )));
    }
    Ok(partition)
}

/// Inverse of [`to_self_conjugate`]: read the diagonal hook lengths.
///
/// The diagonal cell `(i, i)` of a self-conjugate partition has arm and leg
/// `p[i] - i - 1`, so its hook holds `2 * (p[i] - i - 1) + 1` cells.
pub fn to_distinct_odd(partition: &Partition) -> Result<DistinctOddPartition> {
    if partition.is_empty() {
        return Err(Error::InvalidArgument("the empty partition has no diagonal hooks".into()));
    }
    if !partition.is_self_conjugate() {
        return Err(Error::InvalidArgument(format!(
            "{partition} is not self-conjugate"
        )));
    }

    let mut hooks: Parts = partition
        .parts()
        .iter()
        .enumerate()
        .take_while(|&(i, &p)| p as usize > i)
        .map(|(i, &p)| 2 * (p - i as Part - 1) + 1)
        .collect();
    hooks.reverse();
    DistinctOddPartition::new(hooks)
}

/// All self-conjugate partitions of `n`, one per distinct-odd partition of
/// `n`, in the distinct-odd generator's order.
pub fn self_conjugates(n: u32) -> Result<Vec<Partition>> {
    distinct_odd_partitions(n)?
        .iter()
        .map(to_self_conjugate)
        .collect()
}
