// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Composite message formatting for checks built from a template.
//!
//! Templates use indexed placeholders with optional alignment and a numeric
//! specifier, formatted under a [`FormatProvider`]:
//!
//! ```
//! use dbc::{fmt_args, format_with, FormatProvider};
//!
//! let args = fmt_args![1234.5, "bytes"];
//! let de = format_with(&FormatProvider::DE_DE, "{0:N1} {1}", &args).unwrap();
//! assert_eq!(de, "1.234,5 bytes");
//! ```
//!
//! # Grammar
//!
//! ```text
//! item      = "{" index [ "," alignment ] [ ":" specifier ] "}"
//! specifier = letter [ precision ]      ; N F D X P E G, case-insensitive
//! escapes   = "{{" | "}}"
//! ```
//!
//! A malformed template or an argument mismatch is a [`FormatError`], never a
//! contract violation.

mod number;
mod provider;
mod template;

use std::fmt;

pub use provider::{format_provider, reset_format_provider, set_format_provider, FormatProvider};
pub use template::format_with;

/// Format `template` with the process-wide provider.
pub fn format_current(template: &str, args: &[FormatArg<'_>]) -> Result<String, FormatError> {
    format_with(&format_provider(), template, args)
}

/// A malformed template or an argument it cannot format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("placeholder opened at byte {position} is never closed")]
    UnclosedPlaceholder { position: usize },

    #[error("unexpected '}}' at byte {position}")]
    UnexpectedClosingBrace { position: usize },

    #[error("malformed placeholder at byte {position}")]
    InvalidPlaceholder { position: usize },

    #[error("placeholder refers to argument {index} but only {count} supplied")]
    MissingArgument { index: usize, count: usize },

    #[error("invalid format specifier '{specifier}'")]
    InvalidSpecifier { specifier: String },

    #[error("format specifier '{specifier}' cannot format {arg} arguments")]
    SpecifierTypeMismatch { specifier: String, arg: &'static str },
}

/// One template argument.
#[derive(Clone, Copy)]
pub enum FormatArg<'a> {
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(&'a str),
    Char(char),
    Bool(bool),
    /// Any other value, rendered with its `Display` impl.
    Display(&'a dyn fmt::Display),
}

impl<'a> FormatArg<'a> {
    pub fn display(value: &'a dyn fmt::Display) -> Self {
        FormatArg::Display(value)
    }
}

impl fmt::Debug for FormatArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatArg::Int(v) => f.debug_tuple("Int").field(v).finish(),
            FormatArg::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
            FormatArg::Float(v) => f.debug_tuple("Float").field(v).finish(),
            FormatArg::Str(v) => f.debug_tuple("Str").field(v).finish(),
            FormatArg::Char(v) => f.debug_tuple("Char").field(v).finish(),
            FormatArg::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            FormatArg::Display(v) => f.debug_tuple("Display").field(&v.to_string()).finish(),
        }
    }
}

macro_rules! impl_from_arg {
    ($variant:ident as $target:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for FormatArg<'_> {
                fn from(value: $ty) -> Self {
                    FormatArg::$variant(value as $target)
                }
            }
        )+
    };
}

impl_from_arg!(Int as i64: i8, i16, i32, i64, isize);
impl_from_arg!(UInt as u64: u8, u16, u32, u64, usize);
impl_from_arg!(Float as f64: f32, f64);

impl From<char> for FormatArg<'_> {
    fn from(value: char) -> Self {
        FormatArg::Char(value)
    }
}

impl From<bool> for FormatArg<'_> {
    fn from(value: bool) -> Self {
        FormatArg::Bool(value)
    }
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(value: &'a str) -> Self {
        FormatArg::Str(value)
    }
}

impl<'a> From<&'a String> for FormatArg<'a> {
    fn from(value: &'a String) -> Self {
        FormatArg::Str(value.as_str())
    }
}

/// Build an array of [`FormatArg`]s from heterogeneous values.
///
/// ```
/// let args = dbc::fmt_args![42, 3.5, "name"];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! fmt_args {
    () => {
        [$crate::FormatArg::Int(0); 0]
    };
    ($($arg:expr),+ $(,)?) => {
        [$($crate::FormatArg::from($arg)),+]
    };
}
