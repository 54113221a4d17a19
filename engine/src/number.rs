//! Numeric coercion and formatting with browser semantics.
//!
//! The generated CSS has to match what a page would print for the same
//! inputs, so rounding and number-to-text follow `Number.prototype.toFixed`
//! and `Number.prototype.toString` rather than Rust's `Display`.

/// Rounds to two decimal places, ties away from zero on the exact binary value.
///
/// Non-finite values and magnitudes of at least `1e21` come back unchanged.
/// A result that rounds to zero is always `+0`.
pub fn round_to_hundredths(x: f64) -> f64 {
    if !x.is_finite() || x.abs() >= 1e21 {
        return x;
    }

    let magnitude = x.abs();
    // Exact ties only exist when the fraction is an odd multiple of 1/8.
    let eighths = magnitude * 8.0;
    let text = if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        // Split off the fraction so the scaling stays exact at any magnitude.
        let whole = magnitude.trunc();
        let hundredths = ((magnitude - whole) * 100.0).floor() + 1.0;
        format!("{:.0}.{:02}", whole, hundredths as u32)
    } else {
        format!("{:.2}", magnitude)
    };
    let rounded = text.parse::<f64>().unwrap_or(magnitude);

    if rounded == 0.0 {
        0.0
    } else if x.is_sign_negative() {
        -rounded
    } else {
        rounded
    }
}

/// Shortest round-trip text for `x`, spelled the way a browser prints numbers.
pub fn format_number(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let magnitude = x.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{:e}", x);
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        };
    }
    x.to_string()
}

/// Converts form input text to a number.
///
/// Blank input is `0`, unparseable input is `NaN`.
pub fn coerce_number(text: &str) -> f64 {
    let text = text.trim_matches(is_js_whitespace);
    if text.is_empty() {
        return 0.0;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match text.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&text[2..], radix);
    }

    if is_decimal_literal(text) {
        text.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

// ECMAScript WhiteSpace and LineTerminator, which differ from Unicode White_Space.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}' | '\u{000A}' | '\u{000B}' | '\u{000C}' | '\u{000D}' | '\u{0020}'
            | '\u{00A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}' | '\u{2028}' | '\u{2029}'
            | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Serde adapter for numbers that may be NaN or infinite.
///
/// Finite values stay JSON numbers; the rest are written as their browser
/// text (`"NaN"`, `"Infinity"`). Reading accepts either form, with strings
/// going through [`coerce_number`].
pub mod js_number {
    use serde::{Deserialize, Deserializer, Serializer};
    use super::{coerce_number, format_number};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&format_number(*value))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Number(n) => n,
            Repr::Text(text) => coerce_number(&text),
        })
    }
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut value = 0.0;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    value
}

// [+-] digits [. digits] [(e|E) [+-] digits], with at least one mantissa digit.
fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let mut mantissa_digits = pos - int_start;

    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        let frac_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        mantissa_digits += pos - frac_start;
    }

    if mantissa_digits == 0 {
        return false;
    }

    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        pos += 1;
        if pos < bytes.len() && (bytes[pos] == b'+' || bytes[pos] == b'-') {
            pos += 1;
        }
        let exp_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == exp_start {
            return false;
        }
    }

    pos == bytes.len()
}
