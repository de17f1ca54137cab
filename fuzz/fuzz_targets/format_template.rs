// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the composite template formatter.
//!
//! Templates come from callers and may be garbage. The formatter must return
//! `Ok` or a `FormatError`, never panic, and a template without braces must
//! come back unchanged.

#![no_main]

use arbitrary::Arbitrary;
use dbc::{format_with, FormatArg, FormatProvider};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Value {
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Flag(bool),
}

#[derive(Debug, Arbitrary)]
struct TemplateInput {
    template: String,
    args: Vec<Value>,
    provider: u8,
}

fuzz_target!(|input: TemplateInput| {
    let provider = match input.provider % 4 {
        0 => FormatProvider::INVARIANT,
        1 => FormatProvider::EN_US,
        2 => FormatProvider::DE_DE,
        _ => FormatProvider::FR_FR,
    };

    let args: Vec<FormatArg<'_>> = input
        .args
        .iter()
        .take(8)
        .map(|value| match value {
            Value::Int(v) => FormatArg::Int(*v),
            Value::UInt(v) => FormatArg::UInt(*v),
            Value::Float(v) => FormatArg::Float(*v),
            Value::Text(s) => FormatArg::Str(s),
            Value::Flag(b) => FormatArg::Bool(*b),
        })
        .collect();

    // Property 1: never panics, whatever the template
    let result = format_with(&provider, &input.template, &args);

    // Property 2: brace-free templates are returned verbatim
    if !input.template.contains(['{', '}']) {
        assert_eq!(result.as_deref(), Ok(input.template.as_str()));
    }
});
