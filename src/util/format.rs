//! Display formatting for prices and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::NaiveDateTime;

/// Format a price as USD with thousands separators: `$1,234.56`.
pub fn format_price(price: f64) -> String {
    let negative = price < 0.0;
    let cents = (price.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}

/// Format a backend timestamp (`2024-01-05T14:30:00`, optional fractional
/// seconds) as `Jan 5, 2024, 02:30 PM`. Unparseable input is returned
/// verbatim rather than dropped.
pub fn format_date(raw: &str) -> String {
    let parsed = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"));
    match parsed {
        Ok(dt) => dt.format("%b %-d, %Y, %I:%M %p").to_string(),
        Err(_) => raw.to_owned(),
    }
}
