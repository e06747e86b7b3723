//! Field-level form validation.
//!
//! A [`Rules`] value enumerates which checks apply to one field. Checks
//! run in a fixed order (required, min length, max length, email, url,
//! price, custom) and the first failure wins. Every check except
//! `required` is skipped on empty input so optional fields validate only
//! when filled in. Pure functions throughout; rendering decides where
//! the error message lands.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Symbols accepted by the password strength check.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Minimum password length for registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Which checks apply to a field.
#[derive(Default)]
pub struct Rules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub email: bool,
    pub url: bool,
    pub price: bool,
    pub custom: Option<Box<dyn Fn(&str) -> Result<(), String>>>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    pub fn url(mut self) -> Self {
        self.url = true;
        self
    }

    pub fn price(mut self) -> Self {
        self.price = true;
        self
    }

    pub fn custom(mut self, check: impl Fn(&str) -> Result<(), String> + 'static) -> Self {
        self.custom = Some(Box::new(check));
        self
    }
}

/// Outcome of validating one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldCheck {
    pub is_valid: bool,
    pub error_message: String,
}

impl FieldCheck {
    fn ok() -> Self {
        Self {
            is_valid: true,
            error_message: String::new(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: message.into(),
        }
    }
}

/// Evaluate a rule set against a field value. `label` names the field in
/// generated messages ("Title is required").
pub fn validate_field(label: &str, value: &str, rules: &Rules) -> FieldCheck {
    let value = value.trim();

    if rules.required && value.is_empty() {
        return FieldCheck::fail(format!("{label} is required"));
    }
    if value.is_empty() {
        return FieldCheck::ok();
    }

    if let Some(min) = rules.min_length {
        if value.chars().count() < min {
            return FieldCheck::fail(format!("{label} must be at least {min} characters"));
        }
    }
    if let Some(max) = rules.max_length {
        if value.chars().count() > max {
            return FieldCheck::fail(format!("{label} must not exceed {max} characters"));
        }
    }
    if rules.email && !is_valid_email(value) {
        return FieldCheck::fail("Please enter a valid email address");
    }
    if rules.url && !is_valid_url(value) {
        return FieldCheck::fail("Please enter a valid URL");
    }
    if rules.price && !is_valid_price(value) {
        return FieldCheck::fail("Please enter a valid price");
    }
    if let Some(custom) = &rules.custom {
        if let Err(message) = custom(value) {
            return FieldCheck::fail(if message.is_empty() {
                "Invalid value".to_owned()
            } else {
                message
            });
        }
    }

    FieldCheck::ok()
}

/// Permissive email shape check: non-whitespace-non-`@` local part, `@`,
/// domain containing a dot with characters on both sides. Deliberately
/// not full RFC validation.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if value.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}

/// URL validity via a full parse.
pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

/// A price is a finite number strictly greater than zero.
pub fn is_valid_price(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .is_ok_and(|p| p.is_finite() && p > 0.0)
}

/// Live password-strength checklist for the registration form.
///
/// Each requirement is reported independently so the UI can tick off
/// items as the user types, rather than a single pass/fail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordChecklist {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl PasswordChecklist {
    pub fn check(password: &str) -> Self {
        Self {
            length: password.chars().count() >= MIN_PASSWORD_LENGTH,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            symbol: password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)),
        }
    }

    /// True when every requirement is met.
    pub fn satisfied(self) -> bool {
        self.length && self.uppercase && self.lowercase && self.digit && self.symbol
    }

    /// First unmet requirement as an inline error message, if any.
    pub fn first_failure(self) -> Option<&'static str> {
        if !self.length {
            Some("Password must be at least 8 characters")
        } else if !self.uppercase {
            Some("Password must contain at least one uppercase letter")
        } else if !self.lowercase {
            Some("Password must contain at least one lowercase letter")
        } else if !self.digit {
            Some("Password must contain at least one number")
        } else if !self.symbol {
            Some("Password must contain at least one special character")
        } else {
            None
        }
    }
}
