//! End-to-end tests for the distinct-odd → self-conjugate bijection.
//!
//! Checks the map against brute force: filter every partition of n for
//! self-conjugacy and compare with the image of the distinct-odd partitions.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use partition_degrees::{
    distinct_odd_partitions, integer_partitions, self_conjugates, to_distinct_odd,
    to_self_conjugate, DistinctOddPartition, Partition,
};

// ============================================================================
// 1. Every image is self-conjugate with the same size
// ============================================================================

#[test]
fn test_images_are_self_conjugate() {
    for n in 1..=20 {
        for d in distinct_odd_partitions(n).unwrap() {
            let p = to_self_conjugate(&d).unwrap();
            assert_eq!(p.size(), n, "{d} -> {p}");
            assert_eq!(p.conjugate(), p, "{d} -> {p}");
        }
    }
}

// ============================================================================
// 2. Bijection: no collisions, and the image is all self-conjugates of n
// ============================================================================

#[test]
fn test_bijection_against_brute_force() {
    for n in 1..=20 {
        let images: Vec<Partition> = self_conjugates(n).unwrap();
        let image_set: HashSet<Partition> = images.iter().cloned().collect();
        assert_eq!(image_set.len(), images.len(), "collision at n = {n}");

        let brute: HashSet<Partition> = integer_partitions(n)
            .unwrap()
            .into_iter()
            .filter(Partition::is_self_conjugate)
            .collect();
        assert_eq!(image_set, brute, "n = {n}");
    }
}

// ============================================================================
// 3. Inverse map recovers the distinct-odd partition
// ============================================================================

#[test]
fn test_inverse_roundtrip() {
    for n in 1..=20 {
        for d in distinct_odd_partitions(n).unwrap() {
            let p = to_self_conjugate(&d).unwrap();
            assert_eq!(to_distinct_odd(&p).unwrap(), d);
        }
    }
}

// ============================================================================
// 4. Concrete images
// ============================================================================

#[test]
fn test_known_images() {
    let cases: &[(&[u32], &[u32])] = &[
        (&[1], &[1]),
        (&[3], &[2, 1]),
        (&[1, 3], &[2, 2]),
        (&[1, 3, 5], &[3, 3, 3]),
        (&[1, 9], &[5, 2, 1, 1, 1]),
        (&[3, 7], &[4, 3, 2, 1]),
        (&[1, 3, 5, 7], &[4, 4, 4, 4]),
    ];
    for (odds, expected) in cases {
        let d = DistinctOddPartition::new(odds.iter().copied()).unwrap();
        assert_eq!(to_self_conjugate(&d).unwrap().parts(), *expected);
    }
}

#[test]
fn test_self_conjugates_of_two_is_empty() {
    assert!(self_conjugates(2).unwrap().is_empty());
}
