use eligibility_corpus::{Patient, Trial, evaluate};
use proptest::prelude::*;

#[test]
fn test_in_range_patient_is_eligible() {
    let trial = Trial::new("T1")
        .with_age_range(18.0, 65.0)
        .with_bmi_range(18.5, 30.0)
        .with_pregnancy_exclusion(true);
    let patient = Patient::new("P1").with_age(40.0).with_bmi(24.0).with_pregnant(false);

    let decision = evaluate(&patient, &trial);

    assert!(decision.eligible);
    assert_eq!(decision.met_criteria.len(), 3);
    assert!(decision.failed_criteria.is_empty());
    assert!((decision.confidence - 0.8).abs() < f64::EPSILON);
}

#[test]
fn test_pregnant_patient_fails_exclusion() {
    let trial = Trial::new("T1").with_pregnancy_exclusion(true);
    let patient = Patient::new("P1").with_age(30.0).with_bmi(22.0).with_pregnant(true);

    let decision = evaluate(&patient, &trial);

    assert!(!decision.eligible);
    assert_eq!(decision.failed_criteria, vec!["Pregnancy exclusion".to_string()]);
    assert!((decision.confidence - 0.6).abs() < f64::EPSILON);
}

#[test]
fn test_missing_measurements_fail_default_ranges() {
    let trial = Trial::new("T1");
    let patient = Patient::new("P1");

    let decision = evaluate(&patient, &trial);

    assert!(!decision.eligible);
    assert_eq!(
        decision.failed_criteria,
        ["Age not in range 0-120", "BMI not in range 0-100"]
    );
    assert_eq!(
        decision.rationale,
        "Failed criteria: Age not in range 0-120, BMI not in range 0-100"
    );
}

proptest! {
    #[test]
    fn prop_eligible_iff_no_failures(
        age in proptest::option::of(0.0f64..120.0),
        bmi in proptest::option::of(10.0f64..50.0),
        pregnant in proptest::option::of(any::<bool>()),
        age_min in 0.0f64..60.0,
        age_span in 0.0f64..60.0,
        exclude in any::<bool>(),
    ) {
        let trial = Trial::new("T")
            .with_age_range(age_min, age_min + age_span)
            .with_pregnancy_exclusion(exclude);
        let mut patient = Patient::new("P");
        if let Some(age) = age {
            patient = patient.with_age(age);
        }
        if let Some(bmi) = bmi {
            patient = patient.with_bmi(bmi);
        }
        if let Some(pregnant) = pregnant {
            patient = patient.with_pregnant(pregnant);
        }

        let decision = evaluate(&patient, &trial);

        prop_assert_eq!(decision.eligible, decision.failed_criteria.is_empty());
        prop_assert!(decision.evaluated_count() >= 1);
        prop_assert!(decision.evaluated_count() <= 3);
    }

    #[test]
    fn prop_age_bounds_are_inclusive(min in 0.0f64..100.0, span in 0.0f64..20.0) {
        let max = min + span;
        let trial = Trial::new("T").with_age_range(min, max);

        prop_assert!(evaluate(&Patient::new("lo").with_age(min).with_bmi(25.0), &trial).eligible);
        prop_assert!(evaluate(&Patient::new("hi").with_age(max).with_bmi(25.0), &trial).eligible);
    }
}
