//! Template scanning and placeholder rendering.

use super::number::{self, Numeric};
use super::{FormatArg, FormatError, FormatProvider};

/// Widest alignment accepted in a placeholder.
const MAX_ALIGNMENT: usize = 1_000_000;

/// A parsed `{index[,alignment][:specifier]}` item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placeholder<'t> {
    index: usize,
    /// Positive right-aligns, negative left-aligns.
    alignment: i64,
    specifier: &'t str,
}

impl<'t> Placeholder<'t> {
    /// Parse the text between the braces. `position` is the byte offset of
    /// the opening brace, for error reporting.
    fn parse(body: &'t str, position: usize) -> Result<Self, FormatError> {
        let invalid = || FormatError::InvalidPlaceholder { position };

        let (head, specifier) = body.split_once(':').unwrap_or((body, ""));
        let (index, alignment) = match head.split_once(',') {
            Some((index, alignment)) => (index, Some(alignment)),
            None => (head, None),
        };

        let index = index.trim();
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let index: usize = index.parse().map_err(|_| invalid())?;

        let alignment = match alignment {
            None => 0,
            Some(text) => {
                let value: i64 = text.trim().parse().map_err(|_| invalid())?;
                if value.unsigned_abs() > MAX_ALIGNMENT as u64 {
                    return Err(invalid());
                }
                value
            }
        };

        Ok(Placeholder {
            index,
            alignment,
            specifier,
        })
    }
}

/// Format `template`, substituting `args` under `provider`'s rules.
pub fn format_with(
    provider: &FormatProvider,
    template: &str,
    args: &[FormatArg<'_>],
) -> Result<String, FormatError> {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len() + 8 * args.len());
    let mut literal_start = 0;
    let mut i = 0;

    // Only ASCII braces are inspected, so every slice boundary is a char boundary.
    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                out.push_str(&template[literal_start..i]);
                if bytes.get(i + 1) == Some(&b'{') {
                    out.push('{');
                    i += 2;
                } else {
                    let close = template[i + 1..]
                        .find('}')
                        .map(|offset| i + 1 + offset)
                        .ok_or(FormatError::UnclosedPlaceholder { position: i })?;
                    let body = &template[i + 1..close];
                    if body.contains('{') {
                        return Err(FormatError::InvalidPlaceholder { position: i });
                    }
                    let item = Placeholder::parse(body, i)?;
                    render_item(&mut out, provider, &item, args)?;
                    i = close + 1;
                }
                literal_start = i;
            }
            b'}' => {
                out.push_str(&template[literal_start..i]);
                if bytes.get(i + 1) == Some(&b'}') {
                    out.push('}');
                    i += 2;
                    literal_start = i;
                } else {
                    return Err(FormatError::UnexpectedClosingBrace { position: i });
                }
            }
            _ => i += 1,
        }
    }
    out.push_str(&template[literal_start..]);

    Ok(out)
}

fn render_item(
    out: &mut String,
    provider: &FormatProvider,
    item: &Placeholder<'_>,
    args: &[FormatArg<'_>],
) -> Result<(), FormatError> {
    let arg = args.get(item.index).ok_or(FormatError::MissingArgument {
        index: item.index,
        count: args.len(),
    })?;

    // Specifiers only apply to numbers; everything else renders as-is.
    let text = match *arg {
        FormatArg::Int(v) => number::render(provider, item.specifier, Numeric::Int(v))?,
        FormatArg::UInt(v) => number::render(provider, item.specifier, Numeric::UInt(v))?,
        FormatArg::Float(v) => number::render(provider, item.specifier, Numeric::Float(v))?,
        FormatArg::Str(s) => s.to_string(),
        FormatArg::Char(c) => c.to_string(),
        FormatArg::Bool(b) => b.to_string(),
        FormatArg::Display(d) => d.to_string(),
    };

    let width = item.alignment.unsigned_abs() as usize;
    let len = text.chars().count();
    if len >= width {
        out.push_str(&text);
    } else if item.alignment > 0 {
        out.extend(std::iter::repeat(' ').take(width - len));
        out.push_str(&text);
    } else {
        out.push_str(&text);
        out.extend(std::iter::repeat(' ').take(width - len));
    }

    Ok(())
}
