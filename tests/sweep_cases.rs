//! Sample counts for a table of increments, checked against every strategy.

use angledrift::lowlevel::sweep_len;
use angledrift::{measure, Collector, DriftError, Measurement, Recovery, Strategy};
use serde::Deserialize;
use std::f64::consts::TAU;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    #[serde(default)]
    increment: Option<f64>,
    #[serde(default)]
    turn_divisor: Option<u32>,
    #[serde(default)]
    samples: Option<usize>,
    #[serde(default)]
    invalid: bool,
    /// Too many samples to run; only `sweep_len` is checked.
    #[serde(default)]
    count_only: bool,
}

impl Case {
    fn increment(&self) -> f64 {
        match (self.increment, self.turn_divisor) {
            (Some(increment), _) => increment,
            (None, Some(divisor)) => TAU / f64::from(divisor),
            (None, None) => panic!("case {} has no increment", self.name),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    cases: Vec<Case>,
}

fn load_cases() -> Vec<Case> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/sweep_cases.json");
    let text = fs::read_to_string(&path).expect("read sweep cases");
    let manifest: Manifest = serde_json::from_str(&text).expect("parse sweep cases");
    manifest.cases
}

#[test]
fn sweep_len_matches_case_table() {
    for case in load_cases() {
        let result = sweep_len(case.increment());
        if case.invalid {
            assert!(
                matches!(result, Err(DriftError::InvalidIncrement { .. })),
                "case {} should be rejected",
                case.name
            );
        } else {
            assert_eq!(result.unwrap(), case.samples.unwrap(), "case {}", case.name);
        }
    }
}

#[test]
fn every_strategy_visits_the_tabulated_count() {
    for case in load_cases().into_iter().filter(|case| !case.count_only) {
        for strategy in Strategy::ALL {
            let m = Measurement::paired(strategy, Recovery::Atan2, case.increment());
            let mut sink = Collector::new();
            let result = measure(&m, &mut sink);
            if case.invalid {
                assert!(result.is_err(), "case {} {:?}", case.name, strategy);
                assert!(sink.records().is_empty());
                continue;
            }
            let expected = case.samples.unwrap();
            assert_eq!(result.unwrap().sample_count, expected, "case {}", case.name);
            assert_eq!(sink.records().len(), expected, "case {}", case.name);
        }
    }
}
