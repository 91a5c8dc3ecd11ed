//! End-to-end smoke runs: session -> read text -> cache -> two counts -> report.

mod common;

use common::{config_for, lines_file, text_file};
use spark_smoke::{EngineError, SmokeConfig, SparkSession, run, run_with_session};

#[test]
fn fruit_lines_report() {
    let f = lines_file(&["banana", "apple", "cherry"]);
    let report = run(&config_for(&f)).unwrap();
    assert_eq!(report.to_string(), "Lines with a: 2, lines with b: 1");
    assert_eq!(report.app_name, "SimpleApp");
}

#[test]
fn empty_source_reports_zero() {
    let f = text_file("");
    let report = run(&config_for(&f)).unwrap();
    assert_eq!(report.to_string(), "Lines with a: 0, lines with b: 0");
}

#[test]
fn line_matching_both_needles_counts_twice() {
    let f = lines_file(&["banana"]);
    let report = run(&config_for(&f)).unwrap();
    assert_eq!(report.to_string(), "Lines with a: 1, lines with b: 1");
}

#[test]
fn matching_is_case_sensitive() {
    let f = lines_file(&["Apple", "BANANA", "cab"]);
    let report = run(&config_for(&f)).unwrap();
    assert_eq!(report.count_for("a"), Some(1));
    assert_eq!(report.count_for("b"), Some(1));
}

#[test]
fn repeated_runs_are_deterministic() {
    let f = lines_file(&["alpha", "beta", "gamma", "bob", ""]);
    let config = config_for(&f);
    let first = run(&config).unwrap();
    let second = run(&config).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), "Lines with a: 3, lines with b: 2");
}

#[test]
fn missing_input_fails_with_not_found() {
    let config = SmokeConfig {
        input_path: "/definitely/not/here/abc".into(),
        ..SmokeConfig::default()
    };
    let err = run(&config).unwrap_err();
    assert!(err.is_not_found(), "expected NotFound, got {err:?}");
    assert!(err.to_string().contains("Path does not exist"));
}

#[test]
fn custom_needles_keep_order() {
    let f = lines_file(&["xyz", "xx", "zz"]);
    let config = SmokeConfig {
        needles: vec!["z".into(), "x".into(), "q".into()],
        ..config_for(&f)
    };
    let report = run(&config).unwrap();
    assert_eq!(
        report.to_string(),
        "Lines with z: 2, lines with x: 2, lines with q: 0"
    );
}

#[test]
fn session_is_stopped_after_success() {
    let f = lines_file(&["a"]);
    let session = SparkSession::builder().app_name("lifecycle_ok").get_or_create();
    run_with_session(session.clone(), &config_for(&f)).unwrap();
    assert!(session.is_stopped());
    assert!(SparkSession::active().is_none());
}

#[test]
fn session_is_stopped_after_failure() {
    let session = SparkSession::builder().app_name("lifecycle_err").get_or_create();
    let config = SmokeConfig {
        input_path: "/definitely/not/here/abc".into(),
        ..SmokeConfig::default()
    };
    assert!(run_with_session(session.clone(), &config).is_err());
    assert!(session.is_stopped());
}

#[test]
fn empty_app_name_is_rejected() {
    let f = lines_file(&["a"]);
    let config = SmokeConfig {
        app_name: String::new(),
        ..config_for(&f)
    };
    assert!(matches!(run(&config), Err(EngineError::User(_))));
}

#[test]
fn json_report_carries_counts() {
    let f = lines_file(&["banana", "apple", "cherry"]);
    let report = run(&config_for(&f)).unwrap();
    let v: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(v["counts"][0]["count"], 2);
    assert_eq!(v["counts"][1]["needle"], "b");
}
