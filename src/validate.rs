use std::sync::LazyLock;

use regex::Regex;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex compiles"));

/// Shallow `local@domain.tld` shape check shared by the form controller
/// and the intake endpoint. Not an RFC 5321 validator.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}
