//! Lenient numeric coercion for table cells.
//!
//! Cells mix figures with annotations ("4(1)", "9.98%", "63000円"), so these
//! helpers only look at the leading numeric text and ignore the rest.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Returns true if the cell starts with a digit 1-9, i.e. holds a positive
/// figure.
pub fn starts_with_nonzero_digit(cell: &str) -> bool {
    matches!(cell.chars().next(), Some('1'..='9'))
}

/// Splits off an optional leading sign.
fn split_sign(cell: &str) -> (bool, &str) {
    match cell.as_bytes().first() {
        Some(b'-') => (true, &cell[1..]),
        Some(b'+') => (false, &cell[1..]),
        _ => (false, cell),
    }
}

fn digit_prefix_len(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Parses the leading integer of a cell; `0` when the cell does not start
/// with one. Saturates instead of overflowing.
pub fn leading_integer(cell: &str) -> i64 {
    let (negative, rest) = split_sign(cell.trim_start());
    let digits = &rest[..digit_prefix_len(rest)];
    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    if negative { -magnitude } else { magnitude }
}

/// Parses the leading decimal number of a cell; zero when there is none.
pub fn leading_decimal(cell: &str) -> Decimal {
    let trimmed = cell.trim_start();
    let (negative, rest) = split_sign(trimmed);
    let int_len = digit_prefix_len(rest);
    if int_len == 0 {
        return Decimal::ZERO;
    }
    let mut end = int_len;
    if rest[end..].starts_with('.') {
        let frac_len = digit_prefix_len(&rest[end + 1..]);
        if frac_len > 0 {
            end += 1 + frac_len;
        }
    }
    let value = Decimal::from_str(&rest[..end]).unwrap_or(Decimal::ZERO);
    if negative { -value } else { value }
}

/// Finds the first run of ASCII digits and, when present, the next run
/// after it.
///
/// `"4(1)"` yields `("4", Some("1"))`, `"12"` yields `("12", None)`.
pub fn integer_runs(cell: &str) -> Option<(&str, Option<&str>)> {
    let start = cell.find(|ch: char| ch.is_ascii_digit())?;
    let first_len = digit_prefix_len(&cell[start..]);
    let first = &cell[start..start + first_len];

    let rest = &cell[start + first_len..];
    let second = rest.find(|ch: char| ch.is_ascii_digit()).map(|offset| {
        let tail = &rest[offset..];
        &tail[..digit_prefix_len(tail)]
    });

    Some((first, second))
}
