//! Hook lengths of a Young diagram.
//!
//! The hook of cell `(i, j)` is the cell itself, every cell to its right
//! in row `i` and every cell below it in column `j`.

use crate::model::{HookLengthTable, Partition};

/// Hook length of every cell of `partition`.
///
/// Rows are produced bottom-up (shortest row first). A running per-column
/// count of the rows already processed supplies the "cells below" term, so
/// each cell costs O(1).
pub fn hook_lengths(partition: &Partition) -> HookLengthTable {
    if partition.is_empty() {
        return HookLengthTable::from_rows(vec![Vec::new()]);
    }

    let mut below = vec![0u32; partition.largest() as usize];
    let mut rows = Vec::with_capacity(partition.len());

    for &row_len in partition.parts().iter().rev() {
        let row: Vec<u32> = (0..row_len)
            .map(|j| below[j as usize] + row_len - j)
            .collect();
        rows.push(row);

        for count in &mut below[..row_len as usize] {
            *count += 1;
        }
    }

    HookLengthTable::from_rows(rows)
}
