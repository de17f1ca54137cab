// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The failure taxonomy.
//!
//! Every broken contract becomes a [`ContractViolation`]. There is exactly one
//! violation type so a caller can handle "any contract failure" with a single
//! `Err(v)` arm, and narrow to one kind with a `match` on [`ContractKind`]:
//!
//! ```
//! use dbc::{require, ContractKind};
//!
//! match require(1 > 2) {
//!     Err(v) if v.kind() == ContractKind::Precondition => {}
//!     Err(_) => unreachable!("only preconditions come out of require"),
//!     Ok(()) => unreachable!(),
//! }
//! ```
//!
//! A violation owns its optional cause. The cause is moved in at construction
//! and handed back by [`ContractViolation::into_cause`], so its identity
//! survives the round trip.

use std::error::Error;
use std::fmt;
use std::panic::Location;

use serde::{Deserialize, Serialize};

use crate::param::NullArgument;

/// Boxed chained cause carried by a violation.
pub type Cause = Box<dyn Error + Send + Sync + 'static>;

/// Which contract family a violation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractKind {
    /// Caller obligation, checked on entry.
    Precondition,
    /// Implementation obligation, checked on exit.
    Postcondition,
    /// State that must hold before and after every public operation.
    Invariant,
    /// Plain internal assertion.
    Assertion,
}

impl ContractKind {
    /// All four kinds, in family order.
    pub const ALL: [ContractKind; 4] = [
        ContractKind::Precondition,
        ContractKind::Postcondition,
        ContractKind::Invariant,
        ContractKind::Assertion,
    ];

    /// Fixed message used when the caller supplies none.
    pub const fn default_message(self) -> &'static str {
        match self {
            ContractKind::Precondition => "Precondition failed.",
            ContractKind::Postcondition => "Postcondition failed.",
            ContractKind::Invariant => "Invariant failed.",
            ContractKind::Assertion => "Assertion failed.",
        }
    }

    /// Capitalized kind name, used as the prefix of custom messages.
    pub const fn title(self) -> &'static str {
        match self {
            ContractKind::Precondition => "Precondition",
            ContractKind::Postcondition => "Postcondition",
            ContractKind::Invariant => "Invariant",
            ContractKind::Assertion => "Assertion",
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContractKind::Precondition => "precondition",
            ContractKind::Postcondition => "postcondition",
            ContractKind::Invariant => "invariant",
            ContractKind::Assertion => "assertion",
        };
        f.write_str(name)
    }
}

/// A broken contract.
///
/// # Invariants
/// - `kind` is fixed at construction and never changes.
/// - `message` is never empty-by-omission: without a supplied message it is
///   the kind's [`default_message`](ContractKind::default_message).
/// - the cause, when present, is exclusively owned by this value.
#[derive(Debug)]
pub struct ContractViolation {
    kind: ContractKind,
    message: Option<String>,
    cause: Option<Cause>,
    location: &'static Location<'static>,
}

impl ContractViolation {
    /// Violation with the kind's default message.
    #[track_caller]
    pub fn new(kind: ContractKind) -> Self {
        Self::at(kind, None, None, Location::caller())
    }

    /// Violation with a caller-supplied message.
    #[track_caller]
    pub fn with_message(kind: ContractKind, message: impl Into<String>) -> Self {
        Self::at(kind, Some(message.into()), None, Location::caller())
    }

    /// Violation with a message and a chained cause.
    #[track_caller]
    pub fn with_cause(kind: ContractKind, message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self::at(
            kind,
            Some(message.into()),
            Some(cause.into()),
            Location::caller(),
        )
    }

    pub(crate) fn at(
        kind: ContractKind,
        message: Option<String>,
        cause: Option<Cause>,
        location: &'static Location<'static>,
    ) -> Self {
        let violation = Self {
            kind,
            message,
            cause,
            location,
        };
        tracing::trace!(
            kind = %violation.kind,
            detail = violation.message(),
            location = %violation.location,
            "contract violated"
        );
        violation
    }

    pub fn kind(&self) -> ContractKind {
        self.kind
    }

    /// The supplied message, or the kind's default phrase.
    pub fn message(&self) -> &str {
        self.message
            .as_deref()
            .unwrap_or_else(|| self.kind.default_message())
    }

    /// True when no message was supplied at construction.
    pub fn is_default_message(&self) -> bool {
        self.message.is_none()
    }

    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Take the cause back out, dropping the violation.
    pub fn into_cause(self) -> Option<Cause> {
        self.cause
    }

    /// Source location of the check that failed.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    pub fn is_precondition(&self) -> bool {
        self.kind == ContractKind::Precondition
    }

    pub fn is_postcondition(&self) -> bool {
        self.kind == ContractKind::Postcondition
    }

    pub fn is_invariant(&self) -> bool {
        self.kind == ContractKind::Invariant
    }

    pub fn is_assertion(&self) -> bool {
        self.kind == ContractKind::Assertion
    }

    /// The null/empty argument signal, for violations raised by
    /// [`Parameter`](crate::Parameter) validations.
    pub fn null_argument(&self) -> Option<&NullArgument> {
        self.cause()?.downcast_ref::<NullArgument>()
    }

    /// Serializable snapshot including the rendered cause chain.
    pub fn report(&self) -> ViolationReport {
        let mut causes = Vec::new();
        let mut next = self.source();
        while let Some(err) = next {
            causes.push(err.to_string());
            next = err.source();
        }
        ViolationReport {
            kind: self.kind,
            message: self.message().to_string(),
            location: self.location.to_string(),
            causes,
        }
    }

    /// Unwind with this violation as the panic payload.
    ///
    /// For code that cannot return a `Result`. `std::panic::catch_unwind`
    /// recovers the violation with `payload.downcast::<ContractViolation>()`.
    pub fn raise(self) -> ! {
        std::panic::panic_any(self)
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            None => f.write_str(self.kind.default_message()),
            Some(message) => write!(f, "{} failed: {}", self.kind.title(), message),
        }
    }
}

impl Error for ContractViolation {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|c| c as &(dyn Error + 'static))
    }
}

/// Snapshot of a violation, suitable for structured output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationReport {
    pub kind: ContractKind,
    pub message: String,
    /// `file:line:column` of the failed check.
    pub location: String,
    /// Cause chain, outermost first.
    pub causes: Vec<String>,
}
