//! Number formatting and file output.

use std::io::{self, Write};
use std::path::Path;

use caccalc_core::TimeUnit;

/// Shown in place of a value that could not be computed.
pub const PLACEHOLDER: &str = "–";

/// Insert `,` thousands separators into a string of ASCII digits.
fn group_digits(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Round a non-negative value to `decimals` places, ties away from zero.
///
/// Rounds the shortest decimal representation (`1.005` stays a tie and
/// becomes `1.01`), as `en-US` locale formatting does. Returns the integer
/// and fraction digits.
fn round_half_up(value: f64, decimals: usize) -> (String, String) {
    let shortest = value.to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(decimals)
        .is_some_and(|d| *d >= b'5');
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - decimals;
    let to_string = |bytes: &[u8]| bytes.iter().map(|&b| char::from(b)).collect::<String>();
    (to_string(&digits[..split]), to_string(&digits[split..]))
}

/// Format with a fixed number of decimals and grouped integer part.
#[must_use]
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let (int_part, frac_part) = round_half_up(value.abs(), decimals);
    let negative = value < 0.0
        && int_part
            .bytes()
            .chain(frac_part.bytes())
            .any(|b| b != b'0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(&int_part));
    if decimals > 0 {
        out.push('.');
        out.push_str(&frac_part);
    }
    out
}

/// `$12,000.00`, or the placeholder.
#[must_use]
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("${}", format_grouped(v, 2)),
        _ => PLACEHOLDER.to_string(),
    }
}

/// `5.3x`; absent or non-positive ratios are the placeholder.
#[must_use]
pub fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => format!("{}x", format_grouped(v, 1)),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Grouped count with up to three decimals, trailing zeros dropped.
#[must_use]
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let s = format_grouped(value, 3);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Optional count, e.g. orders to break even (two decimals).
#[must_use]
pub fn format_orders(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format_grouped(v, 2),
        _ => PLACEHOLDER.to_string(),
    }
}

/// `Q1 2025 (months)` when labelled, else `this month`.
#[must_use]
pub fn period_text(label: &str, unit: TimeUnit) -> String {
    let label = label.trim();
    if label.is_empty() {
        format!("this {}", unit.label(false))
    } else {
        format!("{label} ({})", unit.label(true))
    }
}

/// Write rendered output to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, rendered: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        writeln!(file)?;
    }
    Ok(())
}
