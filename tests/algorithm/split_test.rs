use eligibility_corpus::{Split, TrialSplitPartitioner};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_hundred_trials() {
    let mut rng = StdRng::seed_from_u64(42);
    let assignment = TrialSplitPartitioner::default().partition(100, &mut rng);

    assert_eq!(assignment.count(Split::Train), 80);
    assert_eq!(assignment.count(Split::Val), 10);
    assert_eq!(assignment.count(Split::Test), 10);
}

#[test]
fn test_few_trials_all_train() {
    let mut rng = StdRng::seed_from_u64(42);
    let assignment = TrialSplitPartitioner::default().partition(4, &mut rng);

    assert_eq!(assignment.count(Split::Train), 4);
    assert!(assignment.trial_indices(Split::Val).is_empty());
    assert!(assignment.trial_indices(Split::Test).is_empty());
}

#[test]
fn test_same_seed_same_assignment() {
    let partitioner = TrialSplitPartitioner::default();
    let first = partitioner.partition(57, &mut StdRng::seed_from_u64(3));
    let second = partitioner.partition(57, &mut StdRng::seed_from_u64(3));

    for split in Split::ALL {
        assert_eq!(first.trial_indices(split), second.trial_indices(split));
    }
}

proptest! {
    #[test]
    fn prop_partition_is_total_and_sized(trials in 0usize..500, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let assignment = TrialSplitPartitioner::default().partition(trials, &mut rng);

        prop_assert_eq!(assignment.len(), trials);
        let holdout = trials / 5;
        let test = holdout.div_ceil(2);
        prop_assert_eq!(assignment.count(Split::Train), trials - holdout);
        prop_assert_eq!(assignment.count(Split::Test), test);
        prop_assert_eq!(assignment.count(Split::Val), holdout - test);

        let mut all: Vec<usize> = Split::ALL
            .iter()
            .flat_map(|&split| assignment.trial_indices(split))
            .collect();
        all.sort_unstable();
        prop_assert_eq!(all, (0..trials).collect::<Vec<_>>());
    }
}
