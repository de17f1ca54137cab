//! Formatter properties.

use dbc::{fmt_args, format_with, FormatProvider};
use proptest::prelude::*;

fn invariant() -> FormatProvider {
    FormatProvider::INVARIANT
}

/// Swap `.` and `,`, mapping invariant number text onto de-DE.
fn swap_separators(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '.' => ',',
            ',' => '.',
            other => other,
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_brace_free_template_is_identity(text in "[^{}]*") {
        let out = format_with(&invariant(), &text, &[]).unwrap();
        prop_assert_eq!(out, text);
    }

    #[test]
    fn prop_escaped_braces_unescape(text in "[^{}]*") {
        let template = format!("{{{{{}}}}}", text);
        let out = format_with(&invariant(), &template, &[]).unwrap();
        prop_assert_eq!(out, format!("{{{}}}", text));
    }

    #[test]
    fn prop_grouping_preserves_digits(n in any::<i64>()) {
        let out = format_with(&invariant(), "{0:N0}", &fmt_args![n]).unwrap();
        let digits: String = out.chars().filter(|c| c.is_ascii_digit()).collect();
        prop_assert_eq!(digits, n.unsigned_abs().to_string());
        prop_assert_eq!(out.starts_with('-'), n < 0);
        // Every group after the first has exactly three digits.
        let body = out.trim_start_matches('-');
        for group in body.split(',').skip(1) {
            prop_assert_eq!(group.len(), 3);
        }
    }

    #[test]
    fn prop_decimal_width_pads(n in 0u32..1_000_000, width in 0usize..12) {
        let template = format!("{{0:D{}}}", width);
        let out = format_with(&invariant(), &template, &fmt_args![n]).unwrap();
        prop_assert_eq!(out.len(), width.max(n.to_string().len()));
        prop_assert_eq!(out.parse::<u32>().unwrap(), n);
    }

    #[test]
    fn prop_de_de_swaps_separators(x in -1.0e12f64..1.0e12) {
        let args = fmt_args![x];
        let inv = format_with(&invariant(), "{0:N2}", &args).unwrap();
        let de = format_with(&FormatProvider::DE_DE, "{0:N2}", &args).unwrap();
        prop_assert_eq!(de, swap_separators(&inv));
    }

    #[test]
    fn prop_alignment_pads_to_width(text in "[a-z]{0,10}", width in 0i64..20) {
        let right = format_with(&invariant(), &format!("{{0,{}}}", width), &fmt_args![text.as_str()]).unwrap();
        let left = format_with(&invariant(), &format!("{{0,-{}}}", width), &fmt_args![text.as_str()]).unwrap();
        let expected = (width as usize).max(text.len());
        prop_assert_eq!(right.len(), expected);
        prop_assert_eq!(left.len(), expected);
        prop_assert!(right.ends_with(&text));
        prop_assert!(left.starts_with(&text));
    }
}
