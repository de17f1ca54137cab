// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Design-by-contract checks that fail with typed values instead of panics.
//!
//! Four check families cover the classic contract vocabulary: preconditions
//! (`require`), postconditions (`ensure`), invariants (`invariant`) and plain
//! assertions (`assert`). Each family offers the same overloads, and every
//! failure is one [`ContractViolation`] tagged with its [`ContractKind`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   check.rs   │────▶│ violation.rs │◀────│   param.rs   │
//! │ (Checker,    │     │ (Contract-   │     │ (Parameter,  │
//! │  families)   │     │  Violation)  │     │  NullArgument│
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │
//!        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      format/                        │
//! │  (composite templates, FormatProvider, global slot) │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use dbc::{ensure_msg, require, require_param, ContractViolation};
//!
//! fn withdraw(balance: u64, amount: Option<u64>) -> Result<u64, ContractViolation> {
//!     let amount = require_param(amount, "amount").is_not_null()?;
//!     require(amount <= balance)?;
//!     let left = balance - amount;
//!     ensure_msg(left <= balance, "balance grew during a withdrawal")?;
//!     Ok(left)
//! }
//!
//! assert_eq!(withdraw(10, Some(3)).unwrap(), 7);
//! let err = withdraw(1, Some(3)).unwrap_err();
//! assert!(err.is_precondition());
//! assert_eq!(err.to_string(), "Precondition failed.");
//! ```
//!
//! The same checks are available as early-return macros ([`require!`],
//! [`ensure!`], [`invariant!`], [`assertion!`]) and, with the `macros`
//! feature, as function attributes (`#[requires]`, `#[ensures]`,
//! `#[maintains]`).
//!
//! # Modules
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | `violation` | `ContractKind`, `ContractViolation`, `ViolationReport`|
//! | `check`     | `Checker`, `Raise`, `CheckError`, free functions      |
//! | `format`    | templates, `FormatProvider`, the process-wide slot    |
//! | `param`     | `require_param`, `Parameter`, `NullArgument`          |

pub mod check;
pub mod format;
mod macros;
pub mod param;
pub mod violation;

pub use check::{
    assert, assert_as, assert_build, assert_caused, assert_fmt, assert_lazy, assert_msg,
    assert_with, ensure, ensure_as, ensure_build, ensure_caused, ensure_fmt, ensure_lazy,
    ensure_msg, ensure_with, invariant, invariant_as, invariant_build, invariant_caused,
    invariant_fmt, invariant_lazy, invariant_msg, invariant_with, require, require_as,
    require_build, require_caused, require_fmt, require_lazy, require_msg, require_with,
    CheckError, Checker, Raise, ASSERT, ENSURE, INVARIANT, REQUIRE,
};
pub use format::{
    format_current, format_provider, format_with, reset_format_provider, set_format_provider,
    FormatArg, FormatError, FormatProvider,
};
pub use param::{require_param, ArgumentFault, NullArgument, Parameter};
pub use violation::{Cause, ContractKind, ContractViolation, ViolationReport};

#[cfg(feature = "macros")]
pub use dbc_macros::{ensures, maintains, requires};
