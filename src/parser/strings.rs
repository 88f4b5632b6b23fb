//! PDF literal string escape decoding.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static OCTAL_ESCAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\([0-7]{3})").unwrap());

/// Simple escapes, applied one after another in this order.
const SIMPLE_ESCAPES: [(&str, &str); 8] = [
    (r"\n", "\n"),
    (r"\r", "\r"),
    (r"\t", "\t"),
    (r"\b", "\u{08}"),
    (r"\f", "\u{0C}"),
    (r"\(", "("),
    (r"\)", ")"),
    (r"\\", "\\"),
];

/// Decode the escape sequences of a literal string body.
///
/// Each rule is a separate substitution pass over the output of the
/// previous one, so an escaped backslash can combine with the characters
/// after it into a later escape (`\\101` decodes to `A`). Octal codes map
/// to the character with that code point.
pub fn decode_text_string(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }

    let mut text = raw.to_string();
    for (escape, replacement) in SIMPLE_ESCAPES {
        if text.contains(escape) {
            text = text.replace(escape, replacement);
        }
    }

    OCTAL_ESCAPE
        .replace_all(&text, |caps: &Captures| {
            u32::from_str_radix(&caps[1], 8)
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
