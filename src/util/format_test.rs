use super::*;

// =============================================================
// format_price
// =============================================================

#[test]
fn small_prices_have_two_decimals() {
    assert_eq!(format_price(0.0), "$0.00");
    assert_eq!(format_price(5.0), "$5.00");
    assert_eq!(format_price(24.99), "$24.99");
}

#[test]
fn thousands_are_grouped() {
    assert_eq!(format_price(1234.56), "$1,234.56");
    assert_eq!(format_price(1_000_000.0), "$1,000,000.00");
    assert_eq!(format_price(999.99), "$999.99");
}

#[test]
fn cents_round_half_up() {
    assert_eq!(format_price(10.005), "$10.01");
    assert_eq!(format_price(10.004), "$10.00");
}

#[test]
fn negative_prices_keep_the_sign() {
    assert_eq!(format_price(-12.5), "-$12.50");
}

// =============================================================
// format_date
// =============================================================

#[test]
fn backend_timestamps_format_as_short_date() {
    assert_eq!(format_date("2024-01-05T14:30:00"), "Jan 5, 2024, 02:30 PM");
    assert_eq!(format_date("2023-12-25T09:05:00"), "Dec 25, 2023, 09:05 AM");
}

#[test]
fn fractional_seconds_are_accepted() {
    assert_eq!(
        format_date("2024-01-05T14:30:00.123456"),
        "Jan 5, 2024, 02:30 PM"
    );
}

#[test]
fn unparseable_input_is_returned_verbatim() {
    assert_eq!(format_date("yesterday"), "yesterday");
    assert_eq!(format_date(""), "");
}
