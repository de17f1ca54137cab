//! Fluent parameter validation.

use dbc::{require_param, ArgumentFault, ContractViolation};

fn open(path: Option<&str>, retries: Option<u32>) -> Result<(String, u32), ContractViolation> {
    let path = require_param(path, "path").is_not_null_or_empty()?;
    let retries = require_param(retries, "retries").is_not_null_msg("retry count must be set")?;
    Ok((path.to_string(), retries))
}

#[test]
fn test_valid_arguments_flow_through() {
    assert_eq!(open(Some("/etc/hosts"), Some(3)).unwrap(), ("/etc/hosts".into(), 3));
}

#[test]
fn test_first_bad_argument_wins() {
    let v = open(None, None).unwrap_err();
    let signal = v.null_argument().unwrap();
    assert_eq!(signal.parameter(), "path");
    assert_eq!(signal.fault(), ArgumentFault::Null);
}

#[test]
fn test_empty_string_is_rejected() {
    let v = open(Some(""), Some(1)).unwrap_err();
    assert!(v.is_precondition());
    assert_eq!(v.null_argument().unwrap().fault(), ArgumentFault::Empty);
    assert_eq!(v.message(), "Value cannot be null or empty. (Parameter 'path')");
}

#[test]
fn test_message_is_attached_to_signal() {
    let v = open(Some("x"), None).unwrap_err();
    let signal = v.null_argument().unwrap();
    assert_eq!(signal.parameter(), "retries");
    assert_eq!(signal.message(), Some("retry count must be set"));
    assert_eq!(v.message(), "retry count must be set (Parameter 'retries')");
}

#[test]
fn test_signal_is_the_error_source() {
    use std::error::Error;

    let v = require_param(None::<Vec<u8>>, "payload").is_not_null().unwrap_err();
    assert_eq!(
        v.source().unwrap().to_string(),
        "Value cannot be null. (Parameter 'payload')"
    );
}
