//! Standard numeric specifiers.
//!
//! | Spec | Meaning                                   | Default precision |
//! |------|-------------------------------------------|-------------------|
//! | `G`  | shortest round-trip text, see below       | unused            |
//! | `N`  | grouped integer part, fixed decimals      | 2                 |
//! | `F`  | fixed decimals, no grouping               | 2                 |
//! | `P`  | value × 100, grouped, percent suffix      | 2                 |
//! | `E`  | scientific, three-digit signed exponent   | 6                 |
//! | `D`  | zero-padded integer (integers only)       | 0                 |
//! | `X`  | hexadecimal, letter case follows spec     | 0                 |
//!
//! `G` switches a float to exponent form (`1E+21`, `1.5e-07`) when its decimal
//! exponent is below -5 or at least 15. Integers never switch.

use super::{FormatError, FormatProvider};

/// Largest precision accepted in a specifier.
const MAX_PRECISION: usize = 99;

/// `G` renders floats outside `1e-5 <= |v| < 1e15` in exponent form.
const GENERAL_MIN_EXPONENT: i32 = -5;
const GENERAL_MAX_EXPONENT: i32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    General { upper: bool },
    Number,
    Fixed,
    Percent,
    Exponential { upper: bool },
    Decimal,
    Hex { upper: bool },
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Numeric {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Numeric {
    fn type_name(self) -> &'static str {
        match self {
            Numeric::Int(_) | Numeric::UInt(_) => "integer",
            Numeric::Float(_) => "floating-point",
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Numeric::Int(v) => v as f64,
            Numeric::UInt(v) => v as f64,
            Numeric::Float(v) => v,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Spec {
    style: Style,
    precision: Option<usize>,
}

impl Spec {
    fn parse(spec: &str) -> Result<Self, FormatError> {
        let invalid = || FormatError::InvalidSpecifier {
            specifier: spec.to_string(),
        };

        let mut chars = spec.chars();
        let Some(letter) = chars.next() else {
            return Ok(Spec {
                style: Style::General { upper: true },
                precision: None,
            });
        };

        let style = match letter {
            'G' => Style::General { upper: true },
            'g' => Style::General { upper: false },
            'N' | 'n' => Style::Number,
            'F' | 'f' => Style::Fixed,
            'P' | 'p' => Style::Percent,
            'E' => Style::Exponential { upper: true },
            'e' => Style::Exponential { upper: false },
            'D' | 'd' => Style::Decimal,
            'X' => Style::Hex { upper: true },
            'x' => Style::Hex { upper: false },
            _ => return Err(invalid()),
        };

        let digits = chars.as_str();
        let precision = if digits.is_empty() {
            None
        } else {
            if !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let p: usize = digits.parse().map_err(|_| invalid())?;
            if p > MAX_PRECISION {
                return Err(invalid());
            }
            Some(p)
        };

        Ok(Spec { style, precision })
    }
}

/// Render a numeric argument under `spec`.
pub(crate) fn render(
    provider: &FormatProvider,
    spec: &str,
    value: Numeric,
) -> Result<String, FormatError> {
    let parsed = Spec::parse(spec)?;
    let mismatch = || FormatError::SpecifierTypeMismatch {
        specifier: spec.to_string(),
        arg: value.type_name(),
    };

    if let Numeric::Float(v) = value {
        if let Some(symbol) = non_finite(provider, v) {
            return Ok(symbol);
        }
    }

    let text = match parsed.style {
        Style::General { upper } => general(provider, value, upper),
        Style::Fixed => decimal_text(provider, value, parsed.precision.unwrap_or(2), false),
        Style::Number => decimal_text(provider, value, parsed.precision.unwrap_or(2), true),
        Style::Percent => {
            let scaled = match value {
                Numeric::Int(v) => Scaled::Exact(i128::from(v) * 100),
                Numeric::UInt(v) => Scaled::Exact(i128::from(v) * 100),
                Numeric::Float(v) => {
                    let v = v * 100.0;
                    // Large finite values can overflow while scaling.
                    if let Some(symbol) = non_finite(provider, v) {
                        return Ok(symbol);
                    }
                    Scaled::Float(v)
                }
            };
            let body = match scaled {
                Scaled::Exact(v) => {
                    let negative = v < 0;
                    let digits = v.unsigned_abs().to_string();
                    signed(
                        provider,
                        negative,
                        join_fraction(provider, &digits, "", parsed.precision.unwrap_or(2), true),
                    )
                }
                Scaled::Float(v) => decimal_text(
                    provider,
                    Numeric::Float(v),
                    parsed.precision.unwrap_or(2),
                    true,
                ),
            };
            format!("{}{}", body, provider.percent_suffix)
        }
        Style::Exponential { upper } => {
            exponential(provider, value.as_f64(), parsed.precision.unwrap_or(6), upper)
        }
        Style::Decimal => {
            let width = parsed.precision.unwrap_or(0);
            let (negative, digits) = match value {
                Numeric::Int(v) => (v < 0, v.unsigned_abs().to_string()),
                Numeric::UInt(v) => (false, v.to_string()),
                Numeric::Float(_) => return Err(mismatch()),
            };
            signed(provider, negative, format!("{:0>width$}", digits, width = width))
        }
        Style::Hex { upper } => {
            let width = parsed.precision.unwrap_or(0);
            // Negative integers render as 64-bit two's complement.
            let bits = match value {
                Numeric::Int(v) => v as u64,
                Numeric::UInt(v) => v,
                Numeric::Float(_) => return Err(mismatch()),
            };
            if upper {
                format!("{:0>width$X}", bits, width = width)
            } else {
                format!("{:0>width$x}", bits, width = width)
            }
        }
    };

    Ok(text)
}

enum Scaled {
    Exact(i128),
    Float(f64),
}

/// NaN and infinity symbols, or `None` for finite values.
fn non_finite(provider: &FormatProvider, v: f64) -> Option<String> {
    if v.is_nan() {
        return Some(provider.nan_symbol.to_string());
    }
    if v.is_infinite() {
        let sign = if v < 0.0 { &*provider.negative_sign } else { "" };
        return Some(format!("{}{}", sign, provider.infinity_symbol));
    }
    None
}

fn general(provider: &FormatProvider, value: Numeric, upper: bool) -> String {
    match value {
        Numeric::Int(v) => signed(provider, v < 0, v.unsigned_abs().to_string()),
        Numeric::UInt(v) => v.to_string(),
        Numeric::Float(v) => {
            // `{:e}` gives the shortest round-trip digits with their exponent.
            let shortest = format!("{:e}", v.abs());
            let (mantissa, exponent) = shortest.split_once('e').unwrap_or((shortest.as_str(), "0"));
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let body = if v != 0.0
                && (exponent < GENERAL_MIN_EXPONENT || exponent >= GENERAL_MAX_EXPONENT)
            {
                format!(
                    "{}{}{}{:02}",
                    mantissa.replace('.', &provider.decimal_separator),
                    if upper { 'E' } else { 'e' },
                    if exponent < 0 { '-' } else { '+' },
                    exponent.unsigned_abs()
                )
            } else {
                v.abs().to_string().replace('.', &provider.decimal_separator)
            };
            signed(provider, v < 0.0, body)
        }
    }
}

/// Fixed-point text with `precision` decimals, optionally grouped.
fn decimal_text(provider: &FormatProvider, value: Numeric, precision: usize, grouped: bool) -> String {
    match value {
        Numeric::Int(v) => signed(
            provider,
            v < 0,
            join_fraction(provider, &v.unsigned_abs().to_string(), "", precision, grouped),
        ),
        Numeric::UInt(v) => join_fraction(provider, &v.to_string(), "", precision, grouped),
        Numeric::Float(v) => {
            let rounded = format!("{:.*}", precision, v.abs());
            let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
            // No sign on values that round to zero.
            let negative = v < 0.0 && rounded.bytes().any(|b| matches!(b, b'1'..=b'9'));
            signed(
                provider,
                negative,
                join_fraction(provider, int_part, frac_part, precision, grouped),
            )
        }
    }
}

/// Join integer digits and fraction digits, padding the fraction to `precision`.
fn join_fraction(
    provider: &FormatProvider,
    int_digits: &str,
    frac_digits: &str,
    precision: usize,
    grouped: bool,
) -> String {
    let mut out = if grouped {
        group(int_digits, &provider.group_separator, provider.group_size)
    } else {
        int_digits.to_string()
    };
    if precision > 0 {
        out.push_str(&provider.decimal_separator);
        out.push_str(frac_digits);
        for _ in frac_digits.len()..precision {
            out.push('0');
        }
    }
    out
}

fn group(digits: &str, separator: &str, size: usize) -> String {
    if size == 0 || digits.len() <= size {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + separator.len() * (digits.len() / size));
    let lead = digits.len() % size;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + size - lead) % size == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

fn exponential(provider: &FormatProvider, value: f64, precision: usize, upper: bool) -> String {
    let raw = format!("{:.*e}", precision, value.abs());
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let mantissa = mantissa.replace('.', &provider.decimal_separator);
    let letter = if upper { 'E' } else { 'e' };
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    let body = format!(
        "{}{}{}{:03}",
        mantissa,
        letter,
        exp_sign,
        exponent.unsigned_abs()
    );
    signed(provider, value < 0.0, body)
}

fn signed(provider: &FormatProvider, negative: bool, body: String) -> String {
    if negative {
        format!("{}{}", provider.negative_sign, body)
    } else {
        body
    }
}
