//! Failure taxonomy: one violation type, four kinds.

use std::error::Error;
use std::io;
use std::panic;

use dbc::{
    assert_msg, ensure, invariant_caused, require, ContractKind, ContractViolation,
    ViolationReport,
};

fn first_failure(step: usize) -> Result<(), ContractViolation> {
    require(step != 0)?;
    ensure(step != 1)?;
    invariant_caused(step != 2, "ledger", io::Error::new(io::ErrorKind::Other, "torn write"))?;
    assert_msg(step != 3, "unreachable branch")?;
    Ok(())
}

#[test]
fn test_single_handler_catches_every_kind() {
    let mut seen = Vec::new();
    for step in 0..4 {
        match first_failure(step) {
            Err(v) => seen.push(v.kind()),
            Ok(()) => panic!("step {step} should fail"),
        }
    }
    assert_eq!(seen, ContractKind::ALL.to_vec());
    assert!(first_failure(4).is_ok());
}

#[test]
fn test_narrow_handler_by_kind() {
    let only_preconditions = |step| match first_failure(step) {
        Err(v) if v.is_precondition() => "caller bug",
        Err(_) => "our bug",
        Ok(()) => "fine",
    };
    assert_eq!(only_preconditions(0), "caller bug");
    assert_eq!(only_preconditions(2), "our bug");
    assert_eq!(only_preconditions(9), "fine");
}

#[test]
fn test_default_phrases_per_family() {
    let phrases: Vec<String> = (0..2)
        .map(|step| first_failure(step).unwrap_err().to_string())
        .collect();
    assert_eq!(phrases, ["Precondition failed.", "Postcondition failed."]);
}

#[test]
fn test_violation_is_std_error() {
    let err: Box<dyn Error + Send + Sync> = Box::new(first_failure(2).unwrap_err());
    assert_eq!(err.to_string(), "Invariant failed: ledger");
    assert_eq!(err.source().unwrap().to_string(), "torn write");
}

#[test]
fn test_report_serializes() {
    let report = first_failure(2).unwrap_err().report();
    assert_eq!(report.causes, vec!["torn write".to_string()]);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["kind"], "invariant");
    assert_eq!(json["message"], "ledger");

    let back: ViolationReport = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_raise_unwinds_with_violation_payload() {
    let payload = panic::catch_unwind(|| {
        ContractViolation::with_message(ContractKind::Assertion, "no Result here").raise()
    })
    .unwrap_err();

    let v = payload
        .downcast::<ContractViolation>()
        .expect("payload is a ContractViolation");
    assert!(v.is_assertion());
    assert_eq!(v.message(), "no Result here");
}
