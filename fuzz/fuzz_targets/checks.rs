// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the check engine.
//!
//! Whatever the family, message or template: a true condition yields `Ok`, a
//! false one yields exactly one failure of the right kind.

#![no_main]

use arbitrary::Arbitrary;
use dbc::{fmt_args, CheckError, ContractKind, FormatProvider, ASSERT, ENSURE, INVARIANT, REQUIRE};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct CheckInput {
    family: u8,
    condition: bool,
    message: String,
    value: f64,
}

fuzz_target!(|input: CheckInput| {
    let checker = [REQUIRE, ENSURE, INVARIANT, ASSERT][usize::from(input.family % 4)];
    let provider = FormatProvider::DE_DE;
    let bound = checker.using(&provider);

    let literal = checker.check_msg(input.condition, input.message.as_str());
    let formatted = bound.check_fmt(input.condition, &input.message, &fmt_args![input.value]);

    if input.condition {
        assert!(literal.is_ok());
        assert!(formatted.is_ok());
        return;
    }

    let v = literal.expect_err("false condition must fail");
    assert_eq!(v.kind(), checker.kind());
    assert_eq!(v.message(), input.message);
    assert!(ContractKind::ALL.contains(&v.kind()));

    // A template either renders into a violation or reports a format error.
    match formatted.expect_err("false condition must fail") {
        CheckError::Violation(v) => assert_eq!(v.kind(), checker.kind()),
        CheckError::Format(_) => {}
    }
});
