//! Effective-date parsing.

use chrono::NaiveDate;

/// Parses a `YYYY<sep>M` or `YYYY<sep>MM` string into the first day of that
/// month, formatted `YYYY-MM-01`.
///
/// The separator is any single non-digit, non-whitespace character, so
/// `"2024.4"`, `"2024/04"` and `"2023年4月"` are all accepted. Trailing text
/// after the month is ignored.
pub fn parse_effective_date(value: &str) -> Option<String> {
    let year = value.get(..4)?;
    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let rest = &value[4..];
    let separator = rest.chars().next()?;
    if separator.is_ascii_digit() || separator.is_whitespace() {
        return None;
    }

    let month_text = &rest[separator.len_utf8()..];
    let month_len = month_text
        .bytes()
        .take(2)
        .take_while(u8::is_ascii_digit)
        .count();
    if month_len == 0 {
        return None;
    }

    let year: i32 = year.parse().ok()?;
    let month: u32 = month_text[..month_len].parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(date.format("%Y-%m-%d").to_string())
}
