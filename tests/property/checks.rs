//! Engine properties: passing checks are inert, failing checks raise exactly
//! their family's kind with exactly the supplied message.

use dbc::{fmt_args, CheckError, Checker, ContractKind, FormatProvider, ASSERT, ENSURE, INVARIANT, REQUIRE};
use proptest::prelude::*;

use super::common::{Calls, Overdrawn};

// ============================================================================
// STRATEGIES
// ============================================================================

fn checker_strategy() -> impl Strategy<Value = Checker<'static>> {
    prop::sample::select(vec![REQUIRE, ENSURE, INVARIANT, ASSERT])
}

/// Messages without braces, so they are also valid templates.
fn plain_message() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^{}]{0,40}").unwrap()
}

/// Run every overload once against `condition`, returning the failures.
fn run_all(checker: Checker<'static>, condition: bool, message: &str, calls: &Calls) -> Vec<CheckError> {
    let provider = FormatProvider::INVARIANT;
    let bound = checker.using(&provider);
    let mut failures: Vec<CheckError> = Vec::new();

    failures.extend(checker.check(condition).err().map(CheckError::from));
    failures.extend(checker.check_msg(condition, message).err().map(CheckError::from));
    failures.extend(bound.check_fmt(condition, message, &fmt_args![1]).err());
    failures.extend(
        checker
            .check_lazy(condition, || {
                calls.hit();
                message
            })
            .err()
            .map(CheckError::from),
    );
    failures.extend(
        checker
            .check_caused(condition, message, "cause")
            .err()
            .map(CheckError::from),
    );
    failures.extend(
        bound
            .check_build(condition, |raise| {
                calls.hit();
                raise.message(message)
            })
            .err(),
    );
    failures
}

proptest! {
    #[test]
    fn prop_true_condition_is_inert(checker in checker_strategy(), message in plain_message()) {
        let calls = Calls::default();
        let failures = run_all(checker, true, &message, &calls);
        prop_assert!(failures.is_empty());
        prop_assert!(checker.check_as::<Overdrawn>(true).is_ok());
        let lazy = checker.check_with(true, || {
            calls.hit();
            Overdrawn::default()
        });
        prop_assert!(lazy.is_ok());
        prop_assert_eq!(calls.count(), 0);
    }

    #[test]
    fn prop_false_condition_raises_family_kind(checker in checker_strategy(), message in plain_message()) {
        let calls = Calls::default();
        let failures = run_all(checker, false, &message, &calls);
        prop_assert_eq!(failures.len(), 6);
        prop_assert_eq!(calls.count(), 2);

        for (i, failure) in failures.iter().enumerate() {
            let v = failure.violation().expect("plain messages always format");
            prop_assert_eq!(v.kind(), checker.kind());
            if i == 0 {
                prop_assert_eq!(v.message(), checker.kind().default_message());
            } else {
                prop_assert_eq!(v.message(), message.as_str());
            }
        }
    }

    #[test]
    fn prop_custom_error_is_returned_verbatim(checker in checker_strategy(), shortfall in any::<u64>()) {
        let got = checker.check_with(false, || Overdrawn { shortfall });
        prop_assert_eq!(got, Err(Overdrawn { shortfall }));
    }

    #[test]
    fn prop_kind_serializes_to_display_name(kind in prop::sample::select(ContractKind::ALL.to_vec())) {
        let json = serde_json::to_string(&kind).unwrap();
        prop_assert_eq!(json, format!("\"{}\"", kind));
    }
}
