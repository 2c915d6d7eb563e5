use std::sync::LazyLock;

use regex::RegexSet;

use super::errors::PasswordPolicyError;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 72;

/// Lowercase, uppercase, digit and special character classes. All four must
/// appear within a single line of the password.
static REQUIRED_CLASSES: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([r"[a-z]", r"[A-Z]", r"[0-9]", r"[!@#$%^&]"])
        .expect("password character class patterns are valid")
});

/// Check a candidate password against the strength policy.
///
/// Rules are checked in order and the first failure is returned:
/// length of at least 8, length of at most 72, no leading or trailing
/// space, and at least one lowercase letter, uppercase letter, digit and
/// one of `!@#$%^&`.
///
/// Length is counted in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts as two.
///
/// # Errors
/// The first violated rule as a `PasswordPolicyError`, whose `Display`
/// output is the reason shown to users.
pub fn validate_password(password: &str) -> Result<(), PasswordPolicyError> {
    let length = password.encode_utf16().count();

    if length < MIN_LENGTH {
        return Err(PasswordPolicyError::TooShort);
    }
    if length > MAX_LENGTH {
        return Err(PasswordPolicyError::TooLong);
    }
    if password.starts_with(' ') || password.ends_with(' ') {
        return Err(PasswordPolicyError::SurroundingSpaces);
    }
    if !has_required_classes(password) {
        return Err(PasswordPolicyError::MissingCharacterClasses);
    }

    Ok(())
}

fn has_required_classes(password: &str) -> bool {
    password
        .split(['\n', '\r', '\u{2028}', '\u{2029}'])
        .map(|line| line.trim_start())
        .any(|line| REQUIRED_CLASSES.matches(line).matched_all())
}
