//! Whitespace as the scanner sees it.
//!
//! Buffers are decoded one char per byte, so Unicode whitespace rules
//! would treat the Latin-1 bytes 0x85 (NEL) and 0xA0 (NBSP) alike. Only
//! ASCII whitespace and NBSP count here; 0x85 is an ordinary character.

use regex::Regex;

/// Character class substituted for `\s` in scanner patterns.
const SPACE_CLASS: &str = r"[\t\n\x0B\x0C\r \xA0]";

/// Whether `c` is scanner whitespace.
pub fn is_pdf_space(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}')
}

/// Trim scanner whitespace from both ends.
pub fn trim_pdf_space(s: &str) -> &str {
    s.trim_matches(is_pdf_space)
}

/// Compile a pattern with every `\s` narrowed to scanner whitespace.
///
/// Works inside bracket classes too (`[^/\s]`), since the regex crate
/// accepts nested classes.
pub(crate) fn space_regex(pattern: &str) -> Regex {
    Regex::new(&pattern.replace(r"\s", SPACE_CLASS)).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nel_is_not_space() {
        assert!(!is_pdf_space('\u{85}'));
        assert!(is_pdf_space('\u{A0}'));
        assert_eq!(trim_pdf_space("\u{85}x\u{A0} \n"), "\u{85}x");
    }

    #[test]
    fn test_space_regex_narrows_classes() {
        let re = space_regex(r"a\s+b");
        assert!(re.is_match("a \u{A0}b"));
        assert!(!re.is_match("a\u{85}b"));

        let re = space_regex(r"^[^/\s]+$");
        assert!(re.is_match("x\u{85}y"));
        assert!(!re.is_match("x y"));
        assert!(!re.is_match("x/y"));
    }
}
