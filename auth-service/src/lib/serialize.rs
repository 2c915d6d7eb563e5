//! Output sanitization for user and preference card records.
//!
//! Every emitted field is listed explicitly; anything not listed, including
//! the password hash, never leaves the service.

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::card::models::PreferenceCard;
use crate::domain::user::models::User;

/// Sanitized view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SerializedUser {
    pub id: String,
    pub full_name: String,
    pub user_name: String,
    /// Emitted as `date_create`, the key existing clients read.
    pub date_create: DateTime<Utc>,
}

impl From<&User> for SerializedUser {
    fn from(user: &User) -> Self {
        Self {
            id: escape_html(&user.id.to_string()),
            full_name: escape_html(&user.full_name),
            user_name: escape_html(user.user_name.as_str()),
            date_create: user.date_created,
        }
    }
}

/// Sanitized view of a preference card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SerializedCard {
    pub surgeon: String,
    pub procedure: String,
    pub position: String,
    pub glove_size: Option<i64>,
    pub glove_type: String,
    pub dominant_hand: String,
    pub equipment: String,
    pub supplies: String,
    pub instrumentation: String,
    pub suture_and_usage: String,
    pub dressings: String,
    pub skin_prep: String,
    pub medications: String,
    pub user_id: String,
}

impl From<&PreferenceCard> for SerializedCard {
    fn from(card: &PreferenceCard) -> Self {
        Self {
            surgeon: escape_optional(&card.surgeon),
            procedure: escape_optional(&card.procedure),
            position: escape_optional(&card.position),
            glove_size: card.glove_size.as_deref().and_then(parse_leading_int),
            glove_type: escape_optional(&card.glove_type),
            dominant_hand: escape_optional(&card.dominant_hand),
            equipment: escape_optional(&card.equipment),
            supplies: escape_optional(&card.supplies),
            instrumentation: escape_optional(&card.instrumentation),
            suture_and_usage: escape_optional(&card.suture_and_usage),
            dressings: escape_optional(&card.dressings),
            skin_prep: escape_optional(&card.skin_prep),
            medications: escape_optional(&card.medications),
            user_id: escape_html(&card.user_id.to_string()),
        }
    }
}

pub fn serialize_user(user: &User) -> SerializedUser {
    user.into()
}

pub fn serialize_card(card: &PreferenceCard) -> SerializedCard {
    card.into()
}

/// Escape HTML special characters so stored text renders inert.
pub fn escape_html(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

fn escape_optional(input: &Option<String>) -> String {
    input.as_deref().map(escape_html).unwrap_or_default()
}

/// Parse the integer prefix of `input`: `" 7.5"` is 7, `"0x1A"` is 26 and
/// `"large"` has none.
///
/// A prefix that does not fit in an `i64` also yields `None`.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -value } else { value })
}
