use std::collections::HashMap;
use std::path::Path;

use eligibility_corpus::models::INSTRUCTION;
use eligibility_corpus::{
    DatasetConfig, DatasetError, DatasetPipeline, Split, build_dataset, split_output_path,
};
use tempfile::tempdir;

use crate::utils::{read_jsonl, sample_patients, sample_trials, write_json};

fn quiet_config() -> DatasetConfig {
    DatasetConfig::builder().show_progress(false).build()
}

fn trial_id(line: &serde_json::Value) -> String {
    line["input"]["trial"]["trial_id"]
        .as_str()
        .expect("trial id present")
        .to_string()
}

#[test]
fn test_run_writes_three_consistent_splits() {
    let dir = tempdir().unwrap();
    let trials = write_json(dir.path(), "trials.json", &sample_trials(30));
    let patients = write_json(dir.path(), "patients.json", &sample_patients(400));
    let prefix = dir.path().join("dataset");

    let summary = DatasetPipeline::new(quiet_config())
        .unwrap()
        .run(&trials, &patients, &prefix)
        .unwrap();

    assert_eq!(summary.report.trials, 30);
    assert_eq!(summary.statistics.total_records(), summary.report.records);
    assert_eq!(summary.statistics.train.assigned_trials, 24);
    assert_eq!(summary.statistics.val.assigned_trials, 3);
    assert_eq!(summary.statistics.test.assigned_trials, 3);

    let mut seen: HashMap<String, Split> = HashMap::new();
    for split in Split::ALL {
        let lines = read_jsonl(&split_output_path(&prefix, split));
        let stats = summary.statistics.get(split);
        assert_eq!(lines.len(), stats.records);

        for line in &lines {
            assert_eq!(line["instruction"], INSTRUCTION);
            let output = &line["output"];
            let failed = output["failed_criteria"].as_array().unwrap();
            assert_eq!(output["eligible"].as_bool().unwrap(), failed.is_empty());

            // No trial leaks across splits
            let previous = seen.insert(trial_id(line), split);
            assert!(previous.is_none_or(|s| s == split));
        }
    }
}

#[test]
fn test_reruns_are_byte_identical() {
    let dir = tempdir().unwrap();
    let trials = write_json(dir.path(), "trials.json", &sample_trials(25));
    let patients = write_json(dir.path(), "patients.json", &sample_patients(300));
    let first = dir.path().join("first");
    let second = dir.path().join("second");

    let pipeline = DatasetPipeline::new(quiet_config()).unwrap();
    pipeline.run(&trials, &patients, &first).unwrap();
    pipeline.run(&trials, &patients, &second).unwrap();

    for split in Split::ALL {
        let a = std::fs::read(split_output_path(&first, split)).unwrap();
        let b = std::fs::read(split_output_path(&second, split)).unwrap();
        assert_eq!(a, b, "{split} split differs between runs");
    }
}

#[test]
fn test_parallel_runs_are_deterministic() {
    let dir = tempdir().unwrap();
    let trials = write_json(dir.path(), "trials.json", &sample_trials(40));
    let patients = write_json(dir.path(), "patients.json", &sample_patients(300));
    let config = DatasetConfig::builder()
        .use_parallel(true)
        .show_progress(false)
        .build();
    let pipeline = DatasetPipeline::new(config).unwrap();

    let first = dir.path().join("first");
    let second = dir.path().join("second");
    let a = pipeline.run(&trials, &patients, &first).unwrap();
    let b = pipeline.run(&trials, &patients, &second).unwrap();

    assert_eq!(a.statistics, b.statistics);
    for split in Split::ALL {
        assert_eq!(
            std::fs::read(split_output_path(&first, split)).unwrap(),
            std::fs::read(split_output_path(&second, split)).unwrap()
        );
    }
}

#[test]
fn test_records_grouped_by_trial_in_input_order() {
    let dir = tempdir().unwrap();
    let trials = write_json(dir.path(), "trials.json", &sample_trials(12));
    let patients = write_json(dir.path(), "patients.json", &sample_patients(200));
    let prefix = dir.path().join("dataset");

    DatasetPipeline::new(quiet_config())
        .unwrap()
        .run(&trials, &patients, &prefix)
        .unwrap();

    let ids: Vec<String> = read_jsonl(&split_output_path(&prefix, Split::Train))
        .iter()
        .map(trial_id)
        .collect();
    let mut order = ids.clone();
    order.dedup();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);
}

#[test]
fn test_empty_patient_pool_writes_empty_files() {
    let dir = tempdir().unwrap();
    let trials = write_json(dir.path(), "trials.json", &sample_trials(10));
    let patients = write_json::<serde_json::Value>(dir.path(), "patients.json", &[]);
    let prefix = dir.path().join("dataset");

    let summary = build_dataset(&trials, &patients, &prefix, 15).unwrap();

    assert_eq!(summary.statistics.total_records(), 0);
    for split in Split::ALL {
        assert!(split_output_path(&prefix, split).exists());
        assert!(read_jsonl(&split_output_path(&prefix, split)).is_empty());
    }
}

#[test]
fn test_malformed_input_aborts_before_writing() {
    let dir = tempdir().unwrap();
    let trials = dir.path().join("trials.json");
    std::fs::write(&trials, "[{\"trial_id\": \"T1\", \"age_min\": ").unwrap();
    let patients = write_json(dir.path(), "patients.json", &sample_patients(10));
    let prefix = dir.path().join("dataset");

    let err = build_dataset(&trials, &patients, &prefix, 15).unwrap_err();

    assert!(matches!(err, DatasetError::Json { .. }));
    assert_no_outputs(&prefix);
}

#[test]
fn test_missing_input_file_is_io_error() {
    let dir = tempdir().unwrap();
    let patients = write_json(dir.path(), "patients.json", &sample_patients(10));
    let prefix = dir.path().join("dataset");

    let err = build_dataset(&dir.path().join("absent.json"), &patients, &prefix, 15).unwrap_err();

    assert!(matches!(err, DatasetError::Io { .. }));
    assert_no_outputs(&prefix);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = DatasetConfig::builder().quota(10, 5).build();
    assert!(matches!(DatasetPipeline::new(config), Err(DatasetError::Config(_))));
}

#[test]
fn test_records_are_written_exactly_as_loaded() {
    let dir = tempdir().unwrap();
    let trial = r#"{"trial_id":"T1","age_min":18,"age_max":99,"bmi_min":20.0,"bmi_max":null,"title":"Statin study"}"#;
    let eligible = r#"{"id":"P1","sex":"F","age":40,"bmi":25}"#;
    let ineligible = r#"{"id":"P2","age":5,"bmi":25.0,"pregnant":null}"#;
    let trials = dir.path().join("trials.json");
    std::fs::write(&trials, format!("[{trial}]")).unwrap();
    let patients = dir.path().join("patients.json");
    std::fs::write(&patients, format!("[{eligible}, {ineligible}]")).unwrap();
    let prefix = dir.path().join("dataset");

    build_dataset(&trials, &patients, &prefix, 15).unwrap();

    let text = std::fs::read_to_string(split_output_path(&prefix, Split::Train)).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains(&format!(r#""input":{{"patient":{eligible},"trial":{trial}}}"#)));
    assert!(lines[1].contains(&format!(r#""input":{{"patient":{ineligible},"trial":{trial}}}"#)));

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["output"]["eligible"], true);
    assert_eq!(first["output"]["met_criteria"][1], "BMI between 20.0 and 100");
    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["output"]["failed_criteria"][0], "Age not in range 18-99");
}

fn assert_no_outputs(prefix: &Path) {
    for split in Split::ALL {
        assert!(!split_output_path(prefix, split).exists());
    }
}
