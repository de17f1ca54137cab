// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Number formatting rules and the process-wide provider slot.
//!
//! # Consistency
//!
//! The slot is last-write-wins. A reader always sees a complete provider
//! (either the one before or the one after a concurrent write), but there is
//! no ordering guarantee between a write on one thread and formatted checks
//! on other threads unless the caller synchronizes externally. Code that
//! needs deterministic formatting should pass a provider explicitly with
//! [`Checker::using`](crate::Checker::using).

use std::borrow::Cow;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Culture-style rules used when a check message is built from a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatProvider {
    /// Display name, e.g. `"de-DE"`.
    pub name: Cow<'static, str>,
    pub decimal_separator: Cow<'static, str>,
    pub group_separator: Cow<'static, str>,
    /// Digits per group in the integer part. Zero disables grouping.
    pub group_size: usize,
    pub negative_sign: Cow<'static, str>,
    /// Appended after percent-formatted values, including any spacing.
    pub percent_suffix: Cow<'static, str>,
    pub nan_symbol: Cow<'static, str>,
    pub infinity_symbol: Cow<'static, str>,
}

impl FormatProvider {
    /// Culture-independent rules. The process-wide default.
    pub const INVARIANT: FormatProvider = FormatProvider {
        name: Cow::Borrowed("invariant"),
        decimal_separator: Cow::Borrowed("."),
        group_separator: Cow::Borrowed(","),
        group_size: 3,
        negative_sign: Cow::Borrowed("-"),
        percent_suffix: Cow::Borrowed(" %"),
        nan_symbol: Cow::Borrowed("NaN"),
        infinity_symbol: Cow::Borrowed("Infinity"),
    };

    pub const EN_US: FormatProvider = FormatProvider {
        name: Cow::Borrowed("en-US"),
        decimal_separator: Cow::Borrowed("."),
        group_separator: Cow::Borrowed(","),
        group_size: 3,
        negative_sign: Cow::Borrowed("-"),
        percent_suffix: Cow::Borrowed("%"),
        nan_symbol: Cow::Borrowed("NaN"),
        infinity_symbol: Cow::Borrowed("∞"),
    };

    pub const DE_DE: FormatProvider = FormatProvider {
        name: Cow::Borrowed("de-DE"),
        decimal_separator: Cow::Borrowed(","),
        group_separator: Cow::Borrowed("."),
        group_size: 3,
        negative_sign: Cow::Borrowed("-"),
        percent_suffix: Cow::Borrowed("\u{a0}%"),
        nan_symbol: Cow::Borrowed("NaN"),
        infinity_symbol: Cow::Borrowed("∞"),
    };

    pub const FR_FR: FormatProvider = FormatProvider {
        name: Cow::Borrowed("fr-FR"),
        decimal_separator: Cow::Borrowed(","),
        group_separator: Cow::Borrowed("\u{202f}"),
        group_size: 3,
        negative_sign: Cow::Borrowed("-"),
        percent_suffix: Cow::Borrowed("\u{202f}%"),
        nan_symbol: Cow::Borrowed("NaN"),
        infinity_symbol: Cow::Borrowed("∞"),
    };

    /// Start a custom provider from the invariant rules.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::INVARIANT
        }
    }

    pub fn with_decimal_separator(mut self, sep: impl Into<Cow<'static, str>>) -> Self {
        self.decimal_separator = sep.into();
        self
    }

    pub fn with_group_separator(mut self, sep: impl Into<Cow<'static, str>>) -> Self {
        self.group_separator = sep.into();
        self
    }

    pub fn with_group_size(mut self, size: usize) -> Self {
        self.group_size = size;
        self
    }

    pub fn with_negative_sign(mut self, sign: impl Into<Cow<'static, str>>) -> Self {
        self.negative_sign = sign.into();
        self
    }

    pub fn with_percent_suffix(mut self, suffix: impl Into<Cow<'static, str>>) -> Self {
        self.percent_suffix = suffix.into();
        self
    }

    pub fn with_nan_symbol(mut self, symbol: impl Into<Cow<'static, str>>) -> Self {
        self.nan_symbol = symbol.into();
        self
    }

    pub fn with_infinity_symbol(mut self, symbol: impl Into<Cow<'static, str>>) -> Self {
        self.infinity_symbol = symbol.into();
        self
    }
}

impl Default for FormatProvider {
    fn default() -> Self {
        Self::INVARIANT
    }
}

// ============================================================================
// PROCESS-WIDE SLOT
// ============================================================================

/// `None` means "invariant". Holding an `Arc` lets readers format without
/// keeping the lock.
static CURRENT: RwLock<Option<Arc<FormatProvider>>> = parking_lot::const_rwlock(None);

static INVARIANT_SHARED: LazyLock<Arc<FormatProvider>> =
    LazyLock::new(|| Arc::new(FormatProvider::INVARIANT));

/// The provider used by formatted checks that were not given one explicitly.
pub fn format_provider() -> Arc<FormatProvider> {
    CURRENT
        .read()
        .clone()
        .unwrap_or_else(|| Arc::clone(&INVARIANT_SHARED))
}

/// Replace the process-wide provider. Last write wins.
pub fn set_format_provider(provider: impl Into<Arc<FormatProvider>>) {
    let provider = provider.into();
    tracing::debug!(provider = %provider.name, "format provider set");
    *CURRENT.write() = Some(provider);
}

/// Restore the invariant provider.
pub fn reset_format_provider() {
    tracing::debug!("format provider reset to invariant");
    *CURRENT.write() = None;
}
