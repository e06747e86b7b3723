use super::*;

// =============================================================
// Required and short-circuit ordering
// =============================================================

#[test]
fn required_fires_on_empty_input_regardless_of_other_rules() {
    let rules = Rules::new().required().min_length(3).email().price();
    let check = validate_field("Email", "", &rules);
    assert!(!check.is_valid);
    assert_eq!(check.error_message, "Email is required");

    let check = validate_field("Email", "   ", &rules);
    assert_eq!(check.error_message, "Email is required");
}

#[test]
fn optional_rules_skip_empty_input() {
    let rules = Rules::new().min_length(3).email().url().price();
    assert!(validate_field("Anything", "", &rules).is_valid);
}

#[test]
fn first_failing_rule_wins() {
    // "ab" fails min_length before the email check can run.
    let rules = Rules::new().required().min_length(3).email();
    let check = validate_field("Email", "ab", &rules);
    assert_eq!(check.error_message, "Email must be at least 3 characters");
}

#[test]
fn value_is_trimmed_before_checks() {
    let rules = Rules::new().required().max_length(3);
    assert!(validate_field("Code", "  abc  ", &rules).is_valid);
}

// =============================================================
// Length rules
// =============================================================

#[test]
fn min_length_counts_characters() {
    let rules = Rules::new().min_length(3);
    assert!(!validate_field("Name", "ab", &rules).is_valid);
    assert!(validate_field("Name", "abc", &rules).is_valid);
}

#[test]
fn max_length_rejects_long_values() {
    let rules = Rules::new().max_length(5);
    let check = validate_field("Title", "abcdef", &rules);
    assert_eq!(check.error_message, "Title must not exceed 5 characters");
}

// =============================================================
// Email
// =============================================================

#[test]
fn valid_emails_pass() {
    for email in ["a@b.com", "local@domain.tld", "first.last@sub.example.org"] {
        assert!(is_valid_email(email), "{email} should be valid");
    }
}

#[test]
fn invalid_emails_fail() {
    for email in [
        "plain",
        "no-at.com",
        "no-dot@domain",
        "@missing-local.com",
        "trailing@dot.",
        "a@.com",
        "two@@b.com",
        "spa ce@b.com",
        "",
    ] {
        assert!(!is_valid_email(email), "{email} should be invalid");
    }
}

#[test]
fn email_rule_reports_friendly_message() {
    let rules = Rules::new().email();
    let check = validate_field("Email", "not-an-email", &rules);
    assert_eq!(check.error_message, "Please enter a valid email address");
}

// =============================================================
// URL
// =============================================================

#[test]
fn absolute_urls_pass() {
    assert!(is_valid_url("https://example.com/image.png"));
    assert!(is_valid_url("data:image/png;base64,AAAA"));
}

#[test]
fn relative_and_garbage_urls_fail() {
    assert!(!is_valid_url("not a url"));
    assert!(!is_valid_url("/relative/path.png"));
}

// =============================================================
// Price
// =============================================================

#[test]
fn positive_numbers_are_valid_prices() {
    for price in ["0.01", "1", "24.99", "1000"] {
        assert!(is_valid_price(price), "{price} should be valid");
    }
}

#[test]
fn zero_negative_and_garbage_prices_fail() {
    for price in ["0", "0.0", "-5", "abc", "", "NaN", "inf"] {
        assert!(!is_valid_price(price), "{price} should be invalid");
    }
}

// =============================================================
// Custom predicate
// =============================================================

#[test]
fn custom_rule_runs_last_and_reports_its_message() {
    let rules = Rules::new().required().custom(|v| {
        if v.parse::<i32>().map_or(false, |n| n > 0) {
            Ok(())
        } else {
            Err("Quantity must be greater than 0".to_owned())
        }
    });
    assert!(validate_field("Quantity", "3", &rules).is_valid);
    let check = validate_field("Quantity", "0", &rules);
    assert_eq!(check.error_message, "Quantity must be greater than 0");
}

#[test]
fn custom_rule_empty_message_falls_back() {
    let rules = Rules::new().custom(|_| Err(String::new()));
    let check = validate_field("Field", "x", &rules);
    assert_eq!(check.error_message, "Invalid value");
}

// =============================================================
// Password checklist
// =============================================================

#[test]
fn strong_password_satisfies_every_requirement() {
    let checklist = PasswordChecklist::check("Abc123!@");
    assert!(checklist.length);
    assert!(checklist.uppercase);
    assert!(checklist.lowercase);
    assert!(checklist.digit);
    assert!(checklist.symbol);
    assert!(checklist.satisfied());
    assert!(checklist.first_failure().is_none());
}

#[test]
fn short_lowercase_password_fails_most_requirements() {
    let checklist = PasswordChecklist::check("abc");
    assert!(!checklist.length);
    assert!(!checklist.uppercase);
    assert!(checklist.lowercase);
    assert!(!checklist.digit);
    assert!(!checklist.symbol);
    assert!(!checklist.satisfied());
}

#[test]
fn requirements_are_reported_independently() {
    let checklist = PasswordChecklist::check("ABCDEFGH1!");
    assert!(checklist.length);
    assert!(checklist.uppercase);
    assert!(!checklist.lowercase);
    assert!(checklist.digit);
    assert!(checklist.symbol);
}

#[test]
fn first_failure_follows_requirement_order() {
    assert_eq!(
        PasswordChecklist::check("Aa1!").first_failure(),
        Some("Password must be at least 8 characters")
    );
    assert_eq!(
        PasswordChecklist::check("alllower1!").first_failure(),
        Some("Password must contain at least one uppercase letter")
    );
    assert_eq!(
        PasswordChecklist::check("Password!").first_failure(),
        Some("Password must contain at least one number")
    );
    assert_eq!(
        PasswordChecklist::check("Password1").first_failure(),
        Some("Password must contain at least one special character")
    );
}

#[test]
fn every_listed_symbol_counts() {
    for symbol in PASSWORD_SYMBOLS.chars() {
        let password = format!("Abcdefg1{symbol}");
        assert!(
            PasswordChecklist::check(&password).satisfied(),
            "{symbol} should satisfy the symbol requirement"
        );
    }
}
