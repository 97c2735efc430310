//! Scalar coercion of raw token text.
//!
//! Priority for [`coerce`]:
//! 1. empty text => `true` (flag present without a value)
//! 2. numeric text => integer (the fractional part is discarded)
//! 3. `yes`/`no`/`true`/`false` in any case => boolean
//! 4. anything else => the text unchanged

use crate::value::Value;

/// Coerce a raw token into a boolean, integer, or string.
pub fn coerce(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Bool(true);
    }

    if let Some(n) = scan_numeric(raw).and_then(|lit| lit.to_int()) {
        return Value::Int(n);
    }

    if is_bool_word(raw) {
        return Value::Bool(is_true_word(raw));
    }

    Value::Str(raw.to_string())
}

/// Boolean coercion used by `boolean` options.
///
/// Strings are true only for `true`/`yes`; every other value is judged by
/// its truthiness.
pub fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Str(s) => is_true_word(s),
        other => other.is_truthy(),
    }
}

/// Loose numeric test: optional surrounding whitespace, an optional sign,
/// decimal digits with an optional fraction and exponent, or an unsigned
/// `0x`/`0o`/`0b` literal. Only hex literals convert at full value.
pub fn is_numeric(raw: &str) -> bool {
    scan_numeric(raw).is_some()
}

fn is_bool_word(raw: &str) -> bool {
    ["yes", "no", "true", "false"]
        .iter()
        .any(|w| raw.eq_ignore_ascii_case(w))
}

fn is_true_word(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("yes")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumericLiteral<'a> {
    negative: bool,
    radix: u32,
    /// Integer digits only; empty for literals like `.5`.
    digits: &'a str,
}

impl NumericLiteral<'_> {
    /// `None` when the integer part does not fit in an `i64`.
    fn to_int(self) -> Option<i64> {
        if self.digits.is_empty() {
            return Some(0);
        }
        let magnitude = i128::from_str_radix(self.digits, self.radix).ok()?;
        let signed = if self.negative { -magnitude } else { magnitude };
        i64::try_from(signed).ok()
    }
}

fn scan_numeric(raw: &str) -> Option<NumericLiteral<'_>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        let valid = !digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit());
        return valid.then_some(NumericLiteral {
            negative: false,
            radix: 16,
            digits,
        });
    }

    // Octal and binary literals are numeric, but only their leading `0` is
    // read as the integer part.
    for (prefix, radix) in [("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            let valid = !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
            return valid.then_some(NumericLiteral {
                negative: false,
                radix: 10,
                digits: "0",
            });
        }
    }

    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
        Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
        None => (unsigned, None),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    if let Some(exp) = exponent {
        let exp = exp.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(exp);
        if exp.is_empty() || !all_digits(exp) {
            return None;
        }
    }

    Some(NumericLiteral {
        negative,
        radix: 10,
        digits: int_part,
    })
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
