use std::collections::HashSet;

use num_bigint::BigUint;
use test_log::test;

use rooted_rs::flip::group_into_clusters;
use rooted_rs::generator::Generator;
use rooted_rs::oeis::{count_rooted, count_unrooted, A000055, A000081};

#[test]
fn test_rooted_counts_up_to_11() {
    let generator = Generator::new();
    for n in 1..=11 {
        let trees = generator.generate(n);
        assert_eq!(trees.len() as u64, A000081[n], "A000081({})", n);
        assert!(trees.iter().all(|t| t.node_count() == n));

        let forms: HashSet<String> = trees.iter().map(|t| t.canonical()).collect();
        assert_eq!(forms.len(), trees.len(), "duplicate trees for n = {}", n);
    }
}

#[test]
fn test_cluster_counts_up_to_11() {
    let generator = Generator::new();
    for n in 1..=11 {
        let trees = generator.generate(n);
        let clusters = group_into_clusters(trees.iter());
        assert_eq!(clusters.len() as u64, A000055[n], "A000055({})", n);
        assert_eq!(clusters.iter().map(|c| c.len()).sum::<usize>(), trees.len());
    }
}

#[test]
fn test_generate_zero_is_empty() {
    let generator = Generator::new();
    assert!(generator.generate(0).is_empty());
    assert!(group_into_clusters(generator.generate(0).iter()).is_empty());
}

#[test]
fn test_enumeration_agrees_with_formulas() {
    let generator = Generator::new();
    for n in 1..=9 {
        assert_eq!(count_rooted(n), BigUint::from(generator.generate(n).len()));
        assert_eq!(count_unrooted(n), BigUint::from(generator.cluster_count(n)));
    }
}

#[test]
fn test_verify() {
    let generator = Generator::new();
    assert_eq!(generator.verify(11), Ok(()));
}
