//! Shared test fixtures.

#![allow(dead_code)]

use std::cell::Cell;

use dbc::{ensure_msg, invariant_lazy, require, require_fmt, CheckError, ContractViolation};

/// Custom error used with the `*_as` / `*_with` overloads.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overdrawn {
    pub shortfall: u64,
}

/// Counts how many times a lazy message path ran.
#[derive(Default)]
pub struct Calls(Cell<usize>);

impl Calls {
    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }
}

/// A small type whose operations are guarded by every family.
#[derive(Debug, Clone)]
pub struct Account {
    pub balance: u64,
    pub limit: u64,
}

impl Account {
    pub fn new(limit: u64) -> Self {
        Account { balance: 0, limit }
    }

    fn check_invariant(&self) -> Result<(), ContractViolation> {
        invariant_lazy(self.balance <= self.limit, || {
            format!("balance {} above limit {}", self.balance, self.limit)
        })
    }

    pub fn deposit(&mut self, amount: u64) -> Result<u64, ContractViolation> {
        require(amount > 0)?;
        self.check_invariant()?;
        let before = self.balance;
        self.balance = self.balance.saturating_add(amount);
        ensure_msg(self.balance > before, "deposit did not increase the balance")?;
        self.check_invariant()?;
        Ok(self.balance)
    }

    pub fn withdraw(&mut self, amount: u64) -> Result<u64, CheckError> {
        require_fmt(
            amount <= self.balance,
            "cannot withdraw {0} from {1}",
            &dbc::fmt_args![amount, self.balance],
        )?;
        self.balance -= amount;
        Ok(self.balance)
    }
}
