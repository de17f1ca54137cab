//! Early-return contract macros.
//!
//! Each macro evaluates its condition once and, when it is false, returns
//! `Err(From::from(violation))` from the enclosing function. The message
//! arguments use `format!` syntax and are only evaluated on failure.

#[doc(hidden)]
#[macro_export]
macro_rules! __contract {
    ($kind:ident, $cond:expr) => {
        if !$cond {
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::ContractViolation::new($crate::ContractKind::$kind),
            ));
        }
    };
    ($kind:ident, $cond:expr, $($arg:tt)+) => {
        if !$cond {
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::ContractViolation::with_message(
                    $crate::ContractKind::$kind,
                    ::std::format!($($arg)+),
                ),
            ));
        }
    };
}

/// Return a precondition violation unless `cond` holds.
///
/// ```
/// fn halve(n: u32) -> Result<u32, dbc::ContractViolation> {
///     dbc::require!(n % 2 == 0, "{} is odd", n);
///     Ok(n / 2)
/// }
///
/// assert_eq!(halve(8).unwrap(), 4);
/// assert_eq!(halve(3).unwrap_err().message(), "3 is odd");
/// ```
#[macro_export]
macro_rules! require {
    ($cond:expr $(,)?) => {
        $crate::__contract!(Precondition, $cond)
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::__contract!(Precondition, $cond, $($arg)+)
    };
}

/// Return a postcondition violation unless `cond` holds.
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        $crate::__contract!(Postcondition, $cond)
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::__contract!(Postcondition, $cond, $($arg)+)
    };
}

/// Return an invariant violation unless `cond` holds.
#[macro_export]
macro_rules! invariant {
    ($cond:expr $(,)?) => {
        $crate::__contract!(Invariant, $cond)
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::__contract!(Invariant, $cond, $($arg)+)
    };
}

/// Return an assertion violation unless `cond` holds.
///
/// Named `assertion!` to stay clear of `std::assert!`.
#[macro_export]
macro_rules! assertion {
    ($cond:expr $(,)?) => {
        $crate::__contract!(Assertion, $cond)
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::__contract!(Assertion, $cond, $($arg)+)
    };
}
