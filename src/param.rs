// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fluent checks for named parameters.
//!
//! ```
//! use dbc::{require_param, ContractViolation};
//!
//! fn greet(name: Option<&str>) -> Result<String, ContractViolation> {
//!     let name = require_param(name, "name").is_not_null_or_empty()?;
//!     Ok(format!("hello {name}"))
//! }
//!
//! assert_eq!(greet(Some("ada")).unwrap(), "hello ada");
//! let err = greet(Some("")).unwrap_err();
//! assert_eq!(err.null_argument().unwrap().parameter(), "name");
//! ```
//!
//! Every validation raises through the precondition family, so a handler for
//! precondition failures catches these too.

use std::fmt;

use crate::check::REQUIRE;
use crate::violation::ContractViolation;

/// Why an argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentFault {
    /// The value was absent.
    Null,
    /// The value was present but empty.
    Empty,
}

/// The null-argument signal attached as the cause of a parameter violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullArgument {
    parameter: String,
    fault: ArgumentFault,
    message: Option<String>,
}

impl NullArgument {
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    pub fn fault(&self) -> ArgumentFault {
        self.fault
    }

    /// The caller-supplied diagnostic, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for NullArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, self.fault) {
            (Some(message), _) => write!(f, "{} (Parameter '{}')", message, self.parameter),
            (None, ArgumentFault::Null) => {
                write!(f, "Value cannot be null. (Parameter '{}')", self.parameter)
            }
            (None, ArgumentFault::Empty) => write!(
                f,
                "Value cannot be null or empty. (Parameter '{}')",
                self.parameter
            ),
        }
    }
}

impl std::error::Error for NullArgument {}

/// A value bound to its parameter name, waiting for one validation.
#[must_use = "a parameter binding does nothing until a validation is applied"]
#[derive(Debug)]
pub struct Parameter<'n, T> {
    value: T,
    name: &'n str,
}

/// Bind `value` to `name` for a fluent precondition check.
pub fn require_param<T>(value: T, name: &str) -> Parameter<'_, T> {
    Parameter { value, name }
}

impl<'n, T> Parameter<'n, T> {
    pub fn name(&self) -> &'n str {
        self.name
    }
}

/// Raise the precondition carrying the null-argument signal for `name`.
#[track_caller]
fn reject(name: &str, fault: ArgumentFault, message: Option<String>) -> ContractViolation {
    let signal = NullArgument {
        parameter: name.to_string(),
        fault,
        message,
    };
    REQUIRE.violation(signal.to_string(), Some(Box::new(signal)))
}

impl<'n, T> Parameter<'n, Option<T>> {
    /// Fails when the value is `None`; yields the unwrapped value otherwise.
    #[track_caller]
    pub fn is_not_null(self) -> Result<T, ContractViolation> {
        self.null_check(None)
    }

    /// As [`is_not_null`](Self::is_not_null), attaching `message` to the signal.
    #[track_caller]
    pub fn is_not_null_msg(self, message: impl Into<String>) -> Result<T, ContractViolation> {
        self.null_check(Some(message.into()))
    }

    #[track_caller]
    fn null_check(self, message: Option<String>) -> Result<T, ContractViolation> {
        match self.value {
            Some(value) => Ok(value),
            None => Err(reject(self.name, ArgumentFault::Null, message)),
        }
    }
}

impl<'n, S: AsRef<str>> Parameter<'n, Option<S>> {
    /// Fails when the value is `None` or the empty string.
    #[track_caller]
    pub fn is_not_null_or_empty(self) -> Result<S, ContractViolation> {
        self.empty_check(None)
    }

    #[track_caller]
    pub fn is_not_null_or_empty_msg(self, message: impl Into<String>) -> Result<S, ContractViolation> {
        self.empty_check(Some(message.into()))
    }

    #[track_caller]
    fn empty_check(self, message: Option<String>) -> Result<S, ContractViolation> {
        match self.value {
            Some(value) if !value.as_ref().is_empty() => Ok(value),
            Some(_) => Err(reject(self.name, ArgumentFault::Empty, message)),
            None => Err(reject(self.name, ArgumentFault::Null, message)),
        }
    }
}

impl<'n, 'a> Parameter<'n, &'a str> {
    /// Fails when the string is empty.
    #[track_caller]
    pub fn is_not_null_or_empty(self) -> Result<&'a str, ContractViolation> {
        require_param(Some(self.value), self.name).is_not_null_or_empty()
    }

    #[track_caller]
    pub fn is_not_null_or_empty_msg(
        self,
        message: impl Into<String>,
    ) -> Result<&'a str, ContractViolation> {
        require_param(Some(self.value), self.name).is_not_null_or_empty_msg(message)
    }
}
