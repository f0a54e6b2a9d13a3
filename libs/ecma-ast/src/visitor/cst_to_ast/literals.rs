//! Literal decoding: numeric text, string escapes and regex parts.

use std::char::REPLACEMENT_CHARACTER;
use std::iter::Peekable;
use std::str::Chars;

use crate::nodes::{LiteralValue, Node, NodeKind, TokenKind};

// =============================================================================
// NUMBERS
// =============================================================================

/// Decodes the text of a numeric literal.
///
/// Handles decimal, exponent, hex (`0x`), octal (`0o` and legacy `017`),
/// binary (`0b`), numeric separators and the BigInt `n` suffix. Returns
/// `None` for text that is not a number, and for values that overflow to
/// infinity, which JSON cannot carry.
///
/// # Example
///
/// ```rust
/// use ecma_ast::LiteralValue;
/// use ecma_ast::visitor::cst_to_ast::parse_number;
///
/// assert_eq!(parse_number("1_000"), Some(LiteralValue::Number(1000.0)));
/// assert_eq!(parse_number("0xff"), Some(LiteralValue::Number(255.0)));
/// assert_eq!(parse_number("10n"), Some(LiteralValue::BigInt("10".to_string())));
/// assert_eq!(parse_number("abc"), None);
/// assert_eq!(parse_number("1e999"), None);
/// ```
pub fn parse_number(text: &str) -> Option<LiteralValue> {
    parse_numeric_text(text).filter(|value| match value {
        LiteralValue::Number(number) => number.is_finite(),
        _ => true,
    })
}

fn parse_numeric_text(text: &str) -> Option<LiteralValue> {
    let cleaned: String = text.chars().filter(|c| *c != '_').collect();
    if cleaned.is_empty() {
        return None;
    }

    if let Some(digits) = cleaned.strip_suffix('n') {
        return is_integer_literal(digits).then(|| LiteralValue::BigInt(digits.to_string()));
    }

    let lower = cleaned.to_ascii_lowercase();
    let radix = match lower.get(..2) {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&lower[2..], radix).map(LiteralValue::Number);
    }

    // legacy octal: leading zero followed only by octal digits
    if lower.len() > 1 && lower.starts_with('0') && lower.bytes().all(|b| (b'0'..=b'7').contains(&b))
    {
        return parse_radix(&lower[1..], 8).map(LiteralValue::Number);
    }

    if !lower
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'+' | b'-'))
    {
        return None;
    }
    lower.parse::<f64>().ok().map(LiteralValue::Number)
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}

fn is_integer_literal(digits: &str) -> bool {
    let lower = digits.to_ascii_lowercase();
    match lower.get(..2) {
        Some("0x") => parse_radix(&lower[2..], 16).is_some(),
        Some("0o") => parse_radix(&lower[2..], 8).is_some(),
        Some("0b") => parse_radix(&lower[2..], 2).is_some(),
        _ => !lower.is_empty() && lower.bytes().all(|b| b.is_ascii_digit()),
    }
}

// =============================================================================
// STRINGS
// =============================================================================

/// `string` rule: the fragments between the quotes, escapes resolved.
pub(super) fn string(children: &[Node]) -> NodeKind {
    let raw: String = fragments(children).collect();
    NodeKind::Literal {
        value: LiteralValue::String(unescape_string(&raw)),
    }
}

/// Resolves the escape sequences of a raw string body.
///
/// Surrogate pairs written as two `\u` escapes are joined into one scalar;
/// an unpaired surrogate becomes U+FFFD. Line continuations vanish.
///
/// # Example
///
/// ```rust
/// use ecma_ast::visitor::cst_to_ast::unescape_string;
///
/// assert_eq!(unescape_string(r"a\tb"), "a\tb");
/// assert_eq!(unescape_string(r"\u{1F600}"), "\u{1F600}");
/// assert_eq!(unescape_string(r"\uD83D\uDE00"), "\u{1F600}");
/// ```
pub fn unescape_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_high: Option<u32> = None;
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_surrogate(&mut out, &mut pending_high);
            out.push(c);
            continue;
        }
        let Some(escaped) = chars.next() else {
            break;
        };
        match escaped {
            'n' => push_char(&mut out, &mut pending_high, '\n'),
            't' => push_char(&mut out, &mut pending_high, '\t'),
            'r' => push_char(&mut out, &mut pending_high, '\r'),
            'b' => push_char(&mut out, &mut pending_high, '\u{8}'),
            'f' => push_char(&mut out, &mut pending_high, '\u{c}'),
            'v' => push_char(&mut out, &mut pending_high, '\u{b}'),
            '0'..='7' => {
                let value = legacy_octal(escaped, &mut chars);
                push_unit(&mut out, &mut pending_high, value);
            }
            'x' => {
                let unit = take_hex(&mut chars, 2).unwrap_or(u32::from(REPLACEMENT_CHARACTER));
                push_unit(&mut out, &mut pending_high, unit);
            }
            'u' => {
                let unit = unicode_escape(&mut chars).unwrap_or(u32::from(REPLACEMENT_CHARACTER));
                push_unit(&mut out, &mut pending_high, unit);
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => push_char(&mut out, &mut pending_high, other),
        }
    }

    flush_surrogate(&mut out, &mut pending_high);
    out
}

/// `\0` alone is NUL; `\12`, `\101` and friends are legacy octal bytes.
fn legacy_octal(first: char, chars: &mut Peekable<Chars<'_>>) -> u32 {
    let mut value = first.to_digit(8).unwrap_or(0);
    for _ in 0..2 {
        let next = match chars.peek().and_then(|c| c.to_digit(8)) {
            Some(digit) if value * 8 + digit <= 0xFF => value * 8 + digit,
            _ => break,
        };
        value = next;
        chars.next();
    }
    value
}

fn unicode_escape(chars: &mut Peekable<Chars<'_>>) -> Option<u32> {
    if chars.peek() != Some(&'{') {
        return take_hex(chars, 4);
    }
    chars.next();
    let mut digits = String::new();
    for c in chars.by_ref() {
        if c == '}' {
            return u32::from_str_radix(&digits, 16).ok();
        }
        digits.push(c);
    }
    None
}

fn take_hex(chars: &mut Peekable<Chars<'_>>, count: usize) -> Option<u32> {
    let digits: String = chars.by_ref().take(count).collect();
    if digits.len() != count {
        return None;
    }
    u32::from_str_radix(&digits, 16).ok()
}

fn push_char(out: &mut String, pending_high: &mut Option<u32>, c: char) {
    flush_surrogate(out, pending_high);
    out.push(c);
}

/// Pushes a UTF-16 code unit or a full code point, pairing surrogates.
fn push_unit(out: &mut String, pending_high: &mut Option<u32>, unit: u32) {
    match unit {
        0xD800..=0xDBFF => {
            flush_surrogate(out, pending_high);
            *pending_high = Some(unit);
        }
        0xDC00..=0xDFFF => match pending_high.take() {
            Some(high) => {
                let code = 0x10000 + ((high - 0xD800) << 10) + (unit - 0xDC00);
                out.push(char::from_u32(code).unwrap_or(REPLACEMENT_CHARACTER));
            }
            None => out.push(REPLACEMENT_CHARACTER),
        },
        _ => {
            flush_surrogate(out, pending_high);
            out.push(char::from_u32(unit).unwrap_or(REPLACEMENT_CHARACTER));
        }
    }
}

fn flush_surrogate(out: &mut String, pending_high: &mut Option<u32>) {
    if pending_high.take().is_some() {
        out.push(REPLACEMENT_CHARACTER);
    }
}

// =============================================================================
// REGEX
// =============================================================================

/// `regex` rule: `/pattern/flags`.
pub(super) fn regex(children: &[Node]) -> NodeKind {
    let mut parts = fragments(children);
    let pattern = parts.next().unwrap_or_default().to_string();
    let flags = parts.next().unwrap_or_default().to_string();
    NodeKind::Literal {
        value: LiteralValue::Regex { pattern, flags },
    }
}

fn fragments(children: &[Node]) -> impl Iterator<Item = &str> {
    children.iter().filter_map(|child| {
        let token = child.as_token()?;
        matches!(token.kind(), TokenKind::Fragment).then(|| token.text())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_numbers() {
        assert_eq!(parse_number("42"), Some(LiteralValue::Number(42.0)));
        assert_eq!(parse_number("2.5"), Some(LiteralValue::Number(2.5)));
        assert_eq!(parse_number(".5"), Some(LiteralValue::Number(0.5)));
        assert_eq!(parse_number("1e3"), Some(LiteralValue::Number(1000.0)));
        assert_eq!(parse_number("1_000_000"), Some(LiteralValue::Number(1_000_000.0)));
    }

    #[test]
    fn test_radix_numbers() {
        assert_eq!(parse_number("0xFF"), Some(LiteralValue::Number(255.0)));
        assert_eq!(parse_number("0o17"), Some(LiteralValue::Number(15.0)));
        assert_eq!(parse_number("0b101"), Some(LiteralValue::Number(5.0)));
        assert_eq!(parse_number("017"), Some(LiteralValue::Number(15.0)));
        assert_eq!(parse_number("0"), Some(LiteralValue::Number(0.0)));
        assert_eq!(parse_number("0x"), None);
    }

    #[test]
    fn test_bigint() {
        assert_eq!(
            parse_number("123n"),
            Some(LiteralValue::BigInt("123".to_string()))
        );
        assert_eq!(
            parse_number("0x1_Fn"),
            Some(LiteralValue::BigInt("0x1F".to_string()))
        );
        assert_eq!(parse_number("1.5n"), None);
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_rejects_overflow_to_infinity() {
        assert_eq!(parse_number("1e999"), None);
        assert_eq!(parse_number(&format!("0x{}", "f".repeat(300))), None);
        assert_eq!(parse_number("1e308"), Some(LiteralValue::Number(1e308)));
        // BigInt text is kept verbatim, so size is no concern
        assert!(parse_number(&format!("0x{}n", "f".repeat(300))).is_some());
    }

    #[test]
    fn test_simple_escapes() {
        assert_eq!(unescape_string(r"a\nb"), "a\nb");
        assert_eq!(unescape_string(r#"\"quoted\""#), "\"quoted\"");
        assert_eq!(unescape_string(r"back\\slash"), "back\\slash");
        assert_eq!(unescape_string(r"\0"), "\0");
        assert_eq!(unescape_string(r"\q"), "q");
    }

    #[test]
    fn test_hex_and_unicode_escapes() {
        assert_eq!(unescape_string(r"\x41"), "A");
        assert_eq!(unescape_string(r"\u0041"), "A");
        assert_eq!(unescape_string(r"\u{41}"), "A");
        assert_eq!(unescape_string(r"\uD83D\uDE00"), "\u{1F600}");
        assert_eq!(unescape_string(r"\uD83Dx"), "\u{FFFD}x");
    }

    #[test]
    fn test_legacy_octal_escapes() {
        assert_eq!(unescape_string(r"\101"), "A");
        assert_eq!(unescape_string(r"\08"), "\u{0}8");
    }

    #[test]
    fn test_line_continuation() {
        assert_eq!(unescape_string("one\\\ntwo"), "onetwo");
        assert_eq!(unescape_string("one\\\r\ntwo"), "onetwo");
    }
}
