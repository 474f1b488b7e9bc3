//! End-to-end tests for the hypothesis tester and its reports.

use pretty_assertions::assert_eq;
use partition_degrees::report::{write_failures, write_json, write_text};
use partition_degrees::{
    Error, Hypothesis, HypothesisTester, LabConfig, Outcome, PartitionCase, PrimeSource, Sieve,
};

fn tester() -> HypothesisTester {
    HypothesisTester::new(LabConfig::default())
}

// ============================================================================
// 1. Partition-count hypothesis holds for n < 10 (and a bit beyond)
// ============================================================================

#[test]
fn test_partition_hypothesis_up_to_ten() {
    let report = tester().test_partition_hypothesis(10).unwrap();
    assert_eq!(report.hypothesis, Hypothesis::PartitionCount);
    assert!(report.is_success(), "failures: {:?}", report.failures().collect::<Vec<_>>());
    assert_eq!(report.failures().count(), 0);

    let expected: usize = (0..10u64).map(|n| Sieve.primes_up_to(n).len()).sum();
    assert_eq!(report.checked, expected);
    assert_eq!(report.cases.len(), expected);
}

#[test]
fn test_partition_hypothesis_up_to_twenty() {
    let report = tester().test_partition_hypothesis(20).unwrap();
    assert!(report.is_success());
}

#[test]
fn test_partition_case_counts() {
    let report = tester().test_partition_hypothesis(8).unwrap();
    // Degrees of S_7: 1 6 14 15 14 35 20 21 21 35 15 14 14 6 1; seven are
    // not divisible by 7.
    let case = report.cases.iter().find(|c| c.n == 7 && c.p == 7).unwrap();
    assert_eq!(
        *case,
        PartitionCase { n: 7, p: 7, count: 7, outcome: Outcome::Pass }
    );
}

// ============================================================================
// 2. Self-conjugate parity
// ============================================================================

#[test]
fn test_self_conjugate_hypothesis() {
    let report = tester().test_self_conjugate_hypothesis(30).unwrap();
    assert_eq!(report.hypothesis, Hypothesis::SelfConjugateEven);
    assert!(report.is_success());
    assert!(report.cases.iter().all(|c| c.n >= 2 && c.partition.is_some()));
    for case in &report.cases {
        let detail = case.detail.as_ref().unwrap();
        assert!(detail.factorial_twos > detail.hook_product_twos);
    }
}

// ============================================================================
// 3. Falsified cases are recorded, never raised
// ============================================================================

#[test]
fn test_wrong_prime_stream_yields_failures() {
    // Pretend 4 is prime: S_4 has degrees 1 3 2 3 1, all five not divisible
    // by 4, and 5 mod 4 != 0.
    let fake = |bound: u64| -> Vec<u64> { if bound == 4 { vec![4] } else { Vec::new() } };
    let report = HypothesisTester::with_primes(fake, LabConfig::default())
        .test_partition_hypothesis(10)
        .unwrap();
    assert_eq!(report.checked, 1);
    assert!(!report.is_success());
    let failures: Vec<_> = report.failures().cloned().collect();
    assert_eq!(failures, vec![PartitionCase { n: 4, p: 4, count: 5, outcome: Outcome::Fail }]);

    let mut text = Vec::new();
    write_failures(&report, &mut text).unwrap();
    assert_eq!(
        String::from_utf8(text).unwrap(),
        "n = 4, p = 4: 5 partitions with degree not divisible by p: FAIL\n"
    );
}

// ============================================================================
// 4. Cap enforcement
// ============================================================================

#[test]
fn test_cap() {
    let tester = HypothesisTester::new(LabConfig::default().with_max_n(15));
    assert!(tester.test_self_conjugate_hypothesis(16).is_ok());
    assert!(matches!(tester.test_self_conjugate_hypothesis(17), Err(Error::InvalidArgument(_))));
}

// ============================================================================
// 5. Reports render
// ============================================================================

#[test]
fn test_report_rendering() {
    let report = tester().test_self_conjugate_hypothesis(8).unwrap();

    let mut text = Vec::new();
    write_text(&report, &mut text).unwrap();
    let text = String::from_utf8(text).unwrap();
    assert!(text.contains("n = 5, odd parts [5], partition [3, 1, 1], degree 6"));
    assert!(text.contains("PASS: 5 cases checked, no failures"));

    let mut json = Vec::new();
    write_json(&report, &mut json).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
    assert_eq!(value["checked"], 5);
    assert_eq!(value["cases"][2]["partition"], serde_json::json!([3, 1, 1]));
}
