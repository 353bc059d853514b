//! Cell type inference for preview values
//!
//! Values are tested in a fixed order: number, boolean `true`, boolean
//! `false`, null, string. The first match wins.
//!
//! ## Numeric grammar
//!
//! A trimmed value is numeric when it is one of:
//! - a decimal literal: optional sign, digits with an optional fraction
//!   (`1`, `1.`, `.5`, `1.5`) and an optional exponent (`2e10`, `1E-3`)
//! - `Infinity`, `+Infinity` or `-Infinity`, exactly in that case
//! - an unsigned radix integer: `0x1F`, `0o17`, `0b101` (prefix in either case)
//!
//! `NaN`, `inf`, signed radix literals and digit separators are not numeric.
//! Decimal literals too large for `f64` become infinite.
//!
//! ## Trimming
//!
//! Fields are trimmed with [`trim_field`] before inference. Its whitespace
//! set is the Unicode `White_Space` property without NEL (U+0085) and with
//! the byte-order mark (U+FEFF) added, so `"\u{FEFF}5"` reads as the number 5
//! while a NEL stays part of the value.

use crate::constants::{FALSE_LITERAL, TRUE_LITERAL};
use crate::models::Cell;
use regex::Regex;
use std::sync::LazyLock;

static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$")
        .expect("decimal literal pattern is valid")
});

static INFINITY_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?Infinity$").expect("infinity pattern is valid"));

static RADIX_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0(?:[xX][0-9a-fA-F]+|[oO][0-7]+|[bB][01]+)$").expect("radix pattern is valid")
});

/// Whether a character is stripped when trimming a field
pub fn is_field_whitespace(c: char) -> bool {
    match c {
        '\u{0085}' => false,
        '\u{FEFF}' => true,
        _ => c.is_whitespace(),
    }
}

/// Trim leading and trailing field whitespace
pub fn trim_field(value: &str) -> &str {
    value.trim_matches(is_field_whitespace)
}

/// Infer the typed cell for an already trimmed field value
pub fn infer_cell(value: &str) -> Cell {
    if let Some(number) = parse_numeric(value) {
        return Cell::Number(number);
    }

    let lowered = value.to_lowercase();
    if lowered == TRUE_LITERAL {
        Cell::Boolean(true)
    } else if lowered == FALSE_LITERAL {
        Cell::Boolean(false)
    } else if value.is_empty() {
        Cell::Null
    } else {
        Cell::Text(value.to_string())
    }
}

/// Parse a value under the numeric grammar, `None` if it does not match
pub fn parse_numeric(value: &str) -> Option<f64> {
    if value.is_empty() {
        return None;
    }

    if DECIMAL_LITERAL.is_match(value) {
        return value.parse::<f64>().ok();
    }

    if INFINITY_LITERAL.is_match(value) {
        return Some(if value.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    if RADIX_LITERAL.is_match(value) {
        let radix = match value.as_bytes()[1] {
            b'x' | b'X' => 16,
            b'o' | b'O' => 8,
            _ => 2,
        };
        return parse_radix_digits(&value[2..], radix);
    }

    None
}

/// Accumulate radix digits into an `f64` so long literals lose precision
/// instead of overflowing
fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}
