//! Backtracking enumerators.
//!
//! Both generators walk the same depth-first skeleton: a scratch buffer
//! owned by one top-level call holds the parts chosen so far, a
//! `remaining` counter tracks how much of `n` is still unassigned, and a
//! leaf copies the buffer into a fresh value. The buffer is never shared
//! outside the call.
//!
//! | Generator | Candidates at each position | Output order |
//! |-----------|-----------------------------|--------------|
//! | [`integer_partitions`] | `prev ..= 1` (first: `n ..= 1`) | descending first part |
//! | [`distinct_odd_partitions`] | `prev + 2 ..= n` step 2 (first: `1 ..= n`) | ascending parts |

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::trace;

use crate::model::partition::{Part, Parts};
use crate::model::{DistinctOddPartition, Partition};
use crate::{Error, Result};

fn check_n(n: u32, what: &str) -> Result<()> {
    if n == 0 {
        return Err(Error::InvalidArgument(format!(
            "{what} requires a positive n, got 0"
        )));
    }
    Ok(())
}

// ============================================================================
// Integer partitions
// ============================================================================

/// Every partition of `n`, exactly once, largest first part first.
///
/// ```
/// use partition_degrees::generate::integer_partitions;
///
/// let parts: Vec<Vec<u32>> = integer_partitions(4)
///     .unwrap()
///     .into_iter()
///     .map(Into::into)
///     .collect();
/// assert_eq!(parts, vec![vec![4], vec![3, 1], vec![2, 2], vec![2, 1, 1], vec![1, 1, 1, 1]]);
/// ```
pub fn integer_partitions(n: u32) -> Result<Vec<Partition>> {
    check_n(n, "integer partition generation")?;

    let mut out = Vec::new();
    let mut buf = Parts::with_capacity(n as usize);
    descend(&mut buf, n, n, &mut out);

    trace!(n, count = out.len(), "generated integer partitions");
    Ok(out)
}

/// `bound` is the largest part allowed at this position: `n` for the first
/// part, the previous part afterwards.
fn descend(buf: &mut Parts, bound: Part, remaining: u32, out: &mut Vec<Partition>) {
    if remaining == 0 {
        out.push(Partition::from_canonical(buf.clone()));
        return;
    }
    // Parts above `remaining` would overshoot; skip them instead of pruning
    // one recursion level down.
    for k in (1..=bound.min(remaining)).rev() {
        buf.push(k);
        descend(buf, k, remaining - k, out);
        buf.pop();
    }
}

/// Number of partitions of `n` without materializing them.
///
/// Uses the standard part-size recurrence, so it is cheap enough to check
/// a bound before committing to an enumeration. Exact for every `n`: p(n)
/// passes `u128::MAX` a little before n = 1450.
pub fn partition_count(n: u32) -> BigUint {
    let n = n as usize;
    let mut ways = vec![BigUint::zero(); n + 1];
    ways[0] = BigUint::one();
    for part in 1..=n {
        for total in part..=n {
            let (done, todo) = ways.split_at_mut(total);
            todo[0] += &done[total - part];
        }
    }
    ways.swap_remove(n)
}

// ============================================================================
// Distinct odd partitions
// ============================================================================

/// Every partition of `n` into distinct odd parts, exactly once.
///
/// Each result lists its parts in increasing order, which is the order
/// [`crate::bijection::to_self_conjugate`] expects.
pub fn distinct_odd_partitions(n: u32) -> Result<Vec<DistinctOddPartition>> {
    check_n(n, "distinct-odd partition generation")?;

    let mut out = Vec::new();
    let mut buf = Parts::new();
    ascend(&mut buf, 1, n, n, &mut out);

    trace!(n, count = out.len(), "generated distinct-odd partitions");
    Ok(out)
}

/// `start` is the smallest odd part allowed at this position.
fn ascend(
    buf: &mut Parts,
    start: Part,
    n: u32,
    remaining: u32,
    out: &mut Vec<DistinctOddPartition>,
) {
    if remaining == 0 {
        // A complete partition ends this branch; deeper positions could only
        // overshoot.
        out.push(DistinctOddPartition::from_canonical(buf.clone()));
        return;
    }
    let mut k = start;
    while k <= n && k <= remaining {
        buf.push(k);
        ascend(buf, k + 2, n, remaining - k, out);
        buf.pop();
        k += 2;
    }
}
