//! Collection keys
//!
//! The host runtime treats string and integer keys interchangeably,
//! silently coercing integer-like strings. `Key` makes that split a closed
//! variant, and the coercion rules become explicit, tested functions.

use std::fmt;

/// A collection key: named (string) or positional (integer).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A string-named key, e.g. `"color"`.
    Named(String),
    /// An integer-positioned key, e.g. `3`.
    Positional(i64),
}

impl Key {
    /// Build a key from a JSON object key.
    ///
    /// Canonical decimal-integer strings become [`Key::Positional`]:
    /// `"0"`, `"3"`, `"-12"`. Everything else stays [`Key::Named`],
    /// including `"08"`, `"-0"`, `"7.3"`, and strings outside the `i64`
    /// range. This mirrors the host runtime's array-key coercion.
    pub fn from_json_key(raw: &str) -> Key {
        match canonical_int(raw) {
            Some(index) => Key::Positional(index),
            None => Key::Named(raw.to_string()),
        }
    }

    /// True if this key is a named (string) key.
    pub fn is_named(&self) -> bool {
        matches!(self, Key::Named(_))
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Key {
        Key::Named(name.to_string())
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Key {
        Key::Positional(index)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Named(name) => f.write_str(name),
            Key::Positional(index) => write!(f, "{}", index),
        }
    }
}

/// Parse a numeric string key to an integer with truncation coercion.
///
/// Accepts integer and decimal strings with an optional sign: `"7"`,
/// `"+5"`, `"-2.9"`, `".5"`. The fractional part is dropped, truncating
/// toward zero: `"7.3"` is `7`, `"8.8"` is `8`, `"-2.9"` is `-2`. Returns
/// `None` for anything non-numeric or outside the `i64` range.
pub fn parse_numeric_key(raw: &str) -> Option<i64> {
    let text = raw.trim();
    let unsigned = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    // At least one digit somewhere; all characters must be digits.
    if int_part.is_empty() && frac_part.map_or(true, str::is_empty) {
        return None;
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(frac) = frac_part {
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }

    let magnitude: i64 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().ok()?
    };

    if text.starts_with('-') {
        Some(-magnitude)
    } else {
        Some(magnitude)
    }
}

/// Check for a canonical decimal-integer string: `0`, or an optional `-`
/// followed by a digit run with no leading zero.
fn canonical_int(raw: &str) -> Option<i64> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    // "-0" is not canonical
    if raw.starts_with('-') && digits == "0" {
        return None;
    }

    raw.parse().ok()
}
