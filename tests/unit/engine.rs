//! The check engine exercised through a guarded type.

use std::io;

use dbc::{
    ensure_as, fmt_args, invariant_build, require_with, CheckError, ContractKind, Checker,
    FormatProvider, ASSERT, ENSURE, INVARIANT, REQUIRE,
};

use super::common::{Account, Calls, Overdrawn};

#[test]
fn test_guarded_operations_succeed() {
    let mut account = Account::new(100);
    assert_eq!(account.deposit(40).unwrap(), 40);
    assert_eq!(account.withdraw(15).unwrap(), 25);
}

#[test]
fn test_precondition_rejects_bad_argument() {
    let mut account = Account::new(100);
    let v = account.deposit(0).unwrap_err();
    assert!(v.is_precondition());
    assert!(v.is_default_message());
    assert_eq!(account.balance, 0);
}

#[test]
fn test_invariant_detects_corrupt_state() {
    let mut account = Account {
        balance: 500,
        limit: 100,
    };
    let v = account.deposit(1).unwrap_err();
    assert_eq!(v.kind(), ContractKind::Invariant);
    assert_eq!(v.message(), "balance 500 above limit 100");
}

#[test]
fn test_formatted_precondition() {
    let mut account = Account::new(100);
    account.deposit(5).unwrap();
    let err = account.withdraw(9).unwrap_err();
    let v = err.violation().expect("violation, not a format error");
    assert!(v.is_precondition());
    assert_eq!(v.message(), "cannot withdraw 9 from 5");
    assert_eq!(err.to_string(), "Precondition failed: cannot withdraw 9 from 5");
}

#[test]
fn test_callbacks_run_only_on_failure() {
    let calls = Calls::default();
    for condition in [true, true, false] {
        let _ = REQUIRE.check_lazy(condition, || {
            calls.hit();
            "lazy"
        });
        let _ = ENSURE.check_build(condition, |raise| {
            calls.hit();
            raise.default_message()
        });
        let _ = require_with(condition, || {
            calls.hit();
            Overdrawn { shortfall: 1 }
        });
    }
    assert_eq!(calls.count(), 3);
}

#[test]
fn test_custom_error_replaces_violation() {
    fn pay(balance: u64, amount: u64) -> Result<u64, Overdrawn> {
        require_with(amount <= balance, || Overdrawn {
            shortfall: amount - balance,
        })?;
        ensure_as::<Overdrawn>(balance - amount <= balance)?;
        Ok(balance - amount)
    }
    assert_eq!(pay(10, 4), Ok(6));
    assert_eq!(pay(3, 10), Err(Overdrawn { shortfall: 7 }));
    assert_eq!(ASSERT.check_as::<Overdrawn>(false), Err(Overdrawn::default()));
}

#[test]
fn test_build_callback_sees_family_and_provider() {
    let provider = FormatProvider::FR_FR;
    let err = INVARIANT
        .using(&provider)
        .check_build(false, |raise| {
            assert_eq!(raise.kind(), ContractKind::Invariant);
            raise.format("écart {0:N1}", &fmt_args![1234.56])
        })
        .unwrap_err();
    assert_eq!(
        err.violation().unwrap().message(),
        "écart 1\u{202f}234,6"
    );

    let err = invariant_build(false, |raise| {
        raise.caused("flush", io::Error::new(io::ErrorKind::WriteZero, "short write"))
    })
    .unwrap_err();
    let v = err.into_violation().unwrap();
    assert!(v.cause().unwrap().downcast_ref::<io::Error>().is_some());
}

#[test]
fn test_format_error_is_not_a_violation() {
    let err = REQUIRE
        .using(&FormatProvider::INVARIANT)
        .check_fmt(false, "{0:D}", &fmt_args![2.5])
        .unwrap_err();
    assert!(matches!(err, CheckError::Format(_)));
    assert!(err.to_string().starts_with("failed to format contract message"));
}

#[test]
fn test_custom_checker_constant() {
    const AUDIT: Checker<'static> = Checker::new(ContractKind::Assertion);
    let v = AUDIT.check_msg(false, "audit trail gap").unwrap_err();
    assert!(v.is_assertion());
    assert_eq!(v.location().file(), file!());
}
