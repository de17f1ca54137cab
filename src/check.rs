// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The check engine.
//!
//! Four families share one overload shape and differ only in the
//! [`ContractKind`] they raise:
//!
//! | Family      | Checker     | Free functions | Raises          |
//! |-------------|-------------|----------------|-----------------|
//! | Require     | `REQUIRE`   | `require*`     | `Precondition`  |
//! | Ensure      | `ENSURE`    | `ensure*`      | `Postcondition` |
//! | Invariant   | `INVARIANT` | `invariant*`   | `Invariant`     |
//! | Assert      | `ASSERT`    | `assert*`      | `Assertion`     |
//!
//! # Evaluation order
//!
//! The condition is always evaluated by the caller before the call. When it
//! holds, the check returns `Ok(())` without touching its other arguments:
//! no thunk, factory or callback runs, no template is formatted, nothing is
//! allocated. When it fails, exactly one message path runs.
//!
//! # Usage
//!
//! ```
//! use dbc::{ensure_fmt, fmt_args, require_msg, CheckError};
//!
//! fn sqrt(x: f64) -> Result<f64, CheckError> {
//!     require_msg(x >= 0.0, "x must be non-negative")?;
//!     let root = x.sqrt();
//!     ensure_fmt((root * root - x).abs() < 1e-9, "root {0} drifted", &fmt_args![root])?;
//!     Ok(root)
//! }
//!
//! assert!(sqrt(4.0).is_ok());
//! assert!(sqrt(-1.0).is_err());
//! ```

use std::panic::Location;

use crate::format::{format_provider, format_with, FormatArg, FormatError, FormatProvider};
use crate::violation::{Cause, ContractKind, ContractViolation};

/// Error from checks that may format a message: either the contract failed,
/// or the diagnostic template itself is broken.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Violation(#[from] ContractViolation),

    #[error("failed to format contract message: {0}")]
    Format(#[from] FormatError),
}

impl CheckError {
    pub fn violation(&self) -> Option<&ContractViolation> {
        match self {
            CheckError::Violation(v) => Some(v),
            CheckError::Format(_) => None,
        }
    }

    pub fn into_violation(self) -> Option<ContractViolation> {
        match self {
            CheckError::Violation(v) => Some(v),
            CheckError::Format(_) => None,
        }
    }

    pub fn is_format(&self) -> bool {
        matches!(self, CheckError::Format(_))
    }
}

/// One check family, optionally bound to an explicit format provider.
#[derive(Debug, Clone, Copy)]
pub struct Checker<'p> {
    kind: ContractKind,
    provider: Option<&'p FormatProvider>,
}

/// Precondition family.
pub const REQUIRE: Checker<'static> = Checker::new(ContractKind::Precondition);
/// Postcondition family.
pub const ENSURE: Checker<'static> = Checker::new(ContractKind::Postcondition);
/// Invariant family.
pub const INVARIANT: Checker<'static> = Checker::new(ContractKind::Invariant);
/// Assertion family.
pub const ASSERT: Checker<'static> = Checker::new(ContractKind::Assertion);

impl Checker<'static> {
    /// A family that formats with the process-wide provider.
    pub const fn new(kind: ContractKind) -> Self {
        Checker {
            kind,
            provider: None,
        }
    }
}

impl<'p> Checker<'p> {
    pub const fn kind(&self) -> ContractKind {
        self.kind
    }

    /// Same family, formatting with `provider` instead of the process-wide one.
    pub fn using<'q>(self, provider: &'q FormatProvider) -> Checker<'q> {
        Checker {
            kind: self.kind,
            provider: Some(provider),
        }
    }

    /// Fails with the family's default message.
    #[inline]
    #[track_caller]
    pub fn check(self, condition: bool) -> Result<(), ContractViolation> {
        if condition {
            return Ok(());
        }
        Err(ContractViolation::at(self.kind, None, None, Location::caller()))
    }

    /// Fails with a literal message.
    #[inline]
    #[track_caller]
    pub fn check_msg(
        self,
        condition: bool,
        message: impl Into<String>,
    ) -> Result<(), ContractViolation> {
        if condition {
            return Ok(());
        }
        Err(ContractViolation::at(
            self.kind,
            Some(message.into()),
            None,
            Location::caller(),
        ))
    }

    /// Fails with `format` rendered against `args`.
    ///
    /// A broken template surfaces as [`CheckError::Format`] instead of the
    /// violation, but only on the failure path.
    #[inline]
    #[track_caller]
    pub fn check_fmt(
        self,
        condition: bool,
        format: &str,
        args: &[FormatArg<'_>],
    ) -> Result<(), CheckError> {
        if condition {
            return Ok(());
        }
        Err(self.raise_at(Location::caller()).format(format, args))
    }

    /// Fails with the message produced by `message`, which runs only on failure.
    #[inline]
    #[track_caller]
    pub fn check_lazy<F, M>(self, condition: bool, message: F) -> Result<(), ContractViolation>
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        if condition {
            return Ok(());
        }
        Err(ContractViolation::at(
            self.kind,
            Some(message().into()),
            None,
            Location::caller(),
        ))
    }

    /// Fails with a literal message and a chained cause.
    #[inline]
    #[track_caller]
    pub fn check_caused(
        self,
        condition: bool,
        message: impl Into<String>,
        cause: impl Into<Cause>,
    ) -> Result<(), ContractViolation> {
        if condition {
            return Ok(());
        }
        Err(self.violation(message.into(), Some(cause.into())))
    }

    /// Fails with whatever `build` raises through the family's primitives.
    ///
    /// ```
    /// use dbc::{fmt_args, REQUIRE};
    ///
    /// let limit = 10;
    /// let err = REQUIRE
    ///     .check_build(12 <= limit, |raise| raise.format("{0} exceeds {1}", &fmt_args![12, limit]))
    ///     .unwrap_err();
    /// assert_eq!(err.violation().unwrap().message(), "12 exceeds 10");
    /// ```
    #[inline]
    #[track_caller]
    pub fn check_build<F>(self, condition: bool, build: F) -> Result<(), CheckError>
    where
        F: FnOnce(Raise<'p>) -> CheckError,
    {
        if condition {
            return Ok(());
        }
        Err(build(self.raise_at(Location::caller())))
    }

    /// Fails with `E::default()` instead of a [`ContractViolation`].
    #[inline]
    pub fn check_as<E: Default>(self, condition: bool) -> Result<(), E> {
        if condition {
            return Ok(());
        }
        Err(E::default())
    }

    /// Fails with whatever `factory` returns, which runs only on failure.
    #[inline]
    pub fn check_with<E, F>(self, condition: bool, factory: F) -> Result<(), E>
    where
        F: FnOnce() -> E,
    {
        if condition {
            return Ok(());
        }
        Err(factory())
    }

    /// The family's raise path: a violation of this kind at the caller.
    #[track_caller]
    pub(crate) fn violation(self, message: String, cause: Option<Cause>) -> ContractViolation {
        ContractViolation::at(self.kind, Some(message), cause, Location::caller())
    }

    fn raise_at(self, location: &'static Location<'static>) -> Raise<'p> {
        Raise {
            kind: self.kind,
            provider: self.provider,
            location,
        }
    }
}

/// The raise primitives of one family, handed to
/// [`check_build`](Checker::check_build) callbacks.
#[derive(Debug, Clone, Copy)]
pub struct Raise<'p> {
    kind: ContractKind,
    provider: Option<&'p FormatProvider>,
    location: &'static Location<'static>,
}

impl Raise<'_> {
    pub fn kind(&self) -> ContractKind {
        self.kind
    }

    /// Violation with the family's default message.
    pub fn default_message(self) -> CheckError {
        ContractViolation::at(self.kind, None, None, self.location).into()
    }

    pub fn message(self, message: impl Into<String>) -> CheckError {
        ContractViolation::at(self.kind, Some(message.into()), None, self.location).into()
    }

    /// Violation with a formatted message, or the formatting error.
    pub fn format(self, format: &str, args: &[FormatArg<'_>]) -> CheckError {
        let rendered = match self.provider {
            Some(provider) => format_with(provider, format, args),
            None => format_with(&format_provider(), format, args),
        };
        match rendered {
            Ok(message) => self.message(message),
            Err(err) => CheckError::Format(err),
        }
    }

    pub fn caused(self, message: impl Into<String>, cause: impl Into<Cause>) -> CheckError {
        ContractViolation::at(
            self.kind,
            Some(message.into()),
            Some(cause.into()),
            self.location,
        )
        .into()
    }
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

macro_rules! family_functions {
    (
        $checker:ident,
        $kind:literal,
        $check:ident,
        $msg:ident,
        $fmt:ident,
        $lazy:ident,
        $caused:ident,
        $build:ident,
        $as_:ident,
        $with:ident
    ) => {
        #[doc = concat!("Fails with the default ", $kind, " message.")]
        #[inline]
        #[track_caller]
        pub fn $check(condition: bool) -> Result<(), ContractViolation> {
            $checker.check(condition)
        }

        #[doc = concat!("Fails with a literal ", $kind, " message.")]
        #[inline]
        #[track_caller]
        pub fn $msg(condition: bool, message: impl Into<String>) -> Result<(), ContractViolation> {
            $checker.check_msg(condition, message)
        }

        #[doc = concat!("Fails with a formatted ", $kind, " message.")]
        #[inline]
        #[track_caller]
        pub fn $fmt(condition: bool, format: &str, args: &[FormatArg<'_>]) -> Result<(), CheckError> {
            $checker.check_fmt(condition, format, args)
        }

        #[doc = concat!("Fails with a lazily computed ", $kind, " message.")]
        #[inline]
        #[track_caller]
        pub fn $lazy<F, M>(condition: bool, message: F) -> Result<(), ContractViolation>
        where
            F: FnOnce() -> M,
            M: Into<String>,
        {
            $checker.check_lazy(condition, message)
        }

        #[doc = concat!("Fails with a ", $kind, " message and a chained cause.")]
        #[inline]
        #[track_caller]
        pub fn $caused(
            condition: bool,
            message: impl Into<String>,
            cause: impl Into<Cause>,
        ) -> Result<(), ContractViolation> {
            $checker.check_caused(condition, message, cause)
        }

        #[doc = concat!("Fails with what `build` raises through the ", $kind, " primitives.")]
        #[inline]
        #[track_caller]
        pub fn $build<F>(condition: bool, build: F) -> Result<(), CheckError>
        where
            F: FnOnce(Raise<'static>) -> CheckError,
        {
            $checker.check_build(condition, build)
        }

        #[doc = concat!("Fails with `E::default()` in place of a ", $kind, " violation.")]
        #[inline]
        pub fn $as_<E: Default>(condition: bool) -> Result<(), E> {
            $checker.check_as(condition)
        }

        #[doc = concat!("Fails with `factory()` in place of a ", $kind, " violation.")]
        #[inline]
        pub fn $with<E, F>(condition: bool, factory: F) -> Result<(), E>
        where
            F: FnOnce() -> E,
        {
            $checker.check_with(condition, factory)
        }
    };
}

family_functions!(
    REQUIRE,
    "precondition",
    require,
    require_msg,
    require_fmt,
    require_lazy,
    require_caused,
    require_build,
    require_as,
    require_with
);

family_functions!(
    ENSURE,
    "postcondition",
    ensure,
    ensure_msg,
    ensure_fmt,
    ensure_lazy,
    ensure_caused,
    ensure_build,
    ensure_as,
    ensure_with
);

family_functions!(
    INVARIANT,
    "invariant",
    invariant,
    invariant_msg,
    invariant_fmt,
    invariant_lazy,
    invariant_caused,
    invariant_build,
    invariant_as,
    invariant_with
);

family_functions!(
    ASSERT,
    "assertion",
    assert,
    assert_msg,
    assert_fmt,
    assert_lazy,
    assert_caused,
    assert_build,
    assert_as,
    assert_with
);
