use eligibility_corpus::{BalancedRecordBuilder, CandidateSampler, Patient, Trial};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// `eligible` in-range patients followed by `ineligible` out-of-range ones
fn candidate_pool(eligible: usize, ineligible: usize) -> Vec<Patient> {
    let fits = (0..eligible).map(|i| Patient::new(format!("E{i}")).with_age(30.0).with_bmi(25.0));
    let misses = (0..ineligible).map(|i| Patient::new(format!("N{i}")).with_age(90.0).with_bmi(25.0));
    fits.chain(misses).collect()
}

#[test]
fn test_positives_precede_negatives() {
    let trial = Trial::new("T").with_age_range(18.0, 65.0);
    let pool = candidate_pool(20, 20);
    let candidates: Vec<&Patient> = pool.iter().collect();
    let mut rng = StdRng::seed_from_u64(7);

    let built = BalancedRecordBuilder::default().build(0, &trial, &candidates, &mut rng);

    let labels: Vec<bool> = built.records.iter().map(|r| r.is_eligible()).collect();
    assert_eq!(labels.iter().filter(|&&e| e).count(), built.positives_drawn);
    assert!(labels[..built.positives_drawn].iter().all(|&e| e));
    assert!(labels[built.positives_drawn..].iter().all(|&e| !e));
}

#[test]
fn test_sampler_never_exceeds_pool() {
    let pool = candidate_pool(3, 4);
    let mut rng = StdRng::seed_from_u64(1);

    let sampled = CandidateSampler::new(15, 5).sample(&pool, &mut rng);

    assert_eq!(sampled.len(), pool.len());
}

proptest! {
    #[test]
    fn prop_drawn_counts_respect_quota(
        eligible in 0usize..30,
        ineligible in 0usize..30,
        seed in any::<u64>(),
    ) {
        let trial = Trial::new("T").with_age_range(18.0, 65.0);
        let pool = candidate_pool(eligible, ineligible);
        let candidates: Vec<&Patient> = pool.iter().collect();
        let mut rng = StdRng::seed_from_u64(seed);

        let built = BalancedRecordBuilder::default().build(0, &trial, &candidates, &mut rng);

        prop_assert_eq!(built.positives_available, eligible);
        prop_assert_eq!(built.negatives_available, ineligible);
        for (drawn, available) in [
            (built.positives_drawn, eligible),
            (built.negatives_drawn, ineligible),
        ] {
            prop_assert!(drawn <= available);
            prop_assert!(drawn <= 10);
            if available >= 5 {
                prop_assert!(drawn >= 5);
            } else {
                prop_assert_eq!(drawn, available);
            }
        }
        prop_assert!(built.records.iter().all(|r| r.trial_index == 0));
    }

    #[test]
    fn prop_sample_has_no_duplicates(pool_size in 0usize..200, seed in any::<u64>()) {
        let pool = candidate_pool(pool_size, 0);
        let mut rng = StdRng::seed_from_u64(seed);

        let sampled = CandidateSampler::new(15, 5).sample(&pool, &mut rng);

        prop_assert_eq!(sampled.len(), pool_size.min(75));
        let mut ids: Vec<_> = sampled.iter().map(|p| p.id()).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), sampled.len());
    }
}
