// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Attribute macros that attach contract checks to a function.
//!
//! Each attribute takes a condition and an optional message. Without a
//! message, the stringified condition is used. The checks go through the
//! `dbc` check families, so the annotated function must return
//! `Result<_, E>` with `E: From<dbc::ContractViolation>`.
//!
//! # Example
//!
//! ```ignore
//! use dbc::{ensures, maintains, requires, ContractViolation};
//!
//! #[requires(divisor != 0, "division by zero")]
//! #[ensures(*ret * divisor <= dividend)]
//! fn div(dividend: u32, divisor: u32) -> Result<u32, ContractViolation> {
//!     Ok(dividend / divisor)
//! }
//!
//! impl Stack {
//!     #[maintains(self.items.len() <= self.capacity)]
//!     fn push(&mut self, item: u32) -> Result<(), ContractViolation> {
//!         self.items.push(item);
//!         Ok(())
//!     }
//! }
//! ```
//!
//! Several attributes stack. They expand outermost first, so the entry
//! checks run in the order they are written.

use proc_macro::TokenStream;

mod contract;

use contract::Clause;

/// Check a precondition on entry.
///
/// A failure returns a `Precondition` violation converted into the
/// function's error type, before the body runs.
#[proc_macro_attribute]
pub fn requires(attr: TokenStream, item: TokenStream) -> TokenStream {
    contract::process(Clause::Requires, attr, item)
}

/// Check a postcondition when the function returns `Ok`.
///
/// Inside the condition, `ret` is a reference to the success value. An `Err`
/// return skips the check and propagates unchanged.
#[proc_macro_attribute]
pub fn ensures(attr: TokenStream, item: TokenStream) -> TokenStream {
    contract::process(Clause::Ensures, attr, item)
}

/// Check an invariant on entry and again when the function returns `Ok`.
#[proc_macro_attribute]
pub fn maintains(attr: TokenStream, item: TokenStream) -> TokenStream {
    contract::process(Clause::Maintains, attr, item)
}
