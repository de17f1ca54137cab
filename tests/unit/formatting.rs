//! Composite formatting with explicit providers.

use dbc::{fmt_args, format_with, FormatError, FormatProvider};

#[test]
fn test_presets_differ_in_separators() {
    let args = fmt_args![-1234567.891];
    let render = |p: &FormatProvider| format_with(p, "{0:N2}", &args).unwrap();
    assert_eq!(render(&FormatProvider::INVARIANT), "-1,234,567.89");
    assert_eq!(render(&FormatProvider::EN_US), "-1,234,567.89");
    assert_eq!(render(&FormatProvider::DE_DE), "-1.234.567,89");
}

#[test]
fn test_specifiers() {
    let p = FormatProvider::INVARIANT;
    let f = |template: &str| format_with(&p, template, &fmt_args![255, 0.375]).unwrap();
    assert_eq!(f("{0:D5}"), "00255");
    assert_eq!(f("{0:X}"), "FF");
    assert_eq!(f("{0:x4}"), "00ff");
    assert_eq!(f("{1:F2}"), "0.38");
    assert_eq!(f("{1:P1}"), "37.5 %");
    assert_eq!(f("{0:E2}"), "2.55E+002");
}

#[test]
fn test_builder_customizes_preset() {
    let swiss = FormatProvider::named("de-CH")
        .with_group_separator("'")
        .with_decimal_separator(".");
    let out = format_with(&swiss, "{0:N0} CHF", &fmt_args![1500000]).unwrap();
    assert_eq!(out, "1'500'000 CHF");
}

#[test]
fn test_type_mismatch() {
    let err = format_with(&FormatProvider::INVARIANT, "{0:X}", &fmt_args![1.5]).unwrap_err();
    assert_eq!(
        err,
        FormatError::SpecifierTypeMismatch {
            specifier: "X".into(),
            arg: "floating-point"
        }
    );
}
