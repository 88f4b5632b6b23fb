//! Content-stream text decoding.
//!
//! There is no tokenizer here. Text is recovered by independent pattern
//! passes over the raw object content, each appended to the output in a
//! fixed order:
//!
//! 1. the first `stream ... endstream` body, with drawing and state
//!    operators stripped, run through operator extraction;
//! 2. operator extraction (`Tj` and `TJ`) over the whole content;
//! 3. a sweep of every `(...)` and `<...>` run, whatever its context.
//!
//! The passes overlap, so the same string usually shows up more than
//! once. Filtered (compressed) streams are not decoded and simply yield
//! whatever the patterns happen to match.

use once_cell::sync::Lazy;
use regex::Regex;

use super::options::{ExtractOptions, StripMode};
use super::space::{space_regex, trim_pdf_space};
use super::strings::decode_text_string;

static STREAM_BODY: Lazy<Regex> = Lazy::new(|| space_regex(r"(?s)stream\s*(.*?)\s*endstream"));

static SHOW_TEXT: Lazy<Regex> = Lazy::new(|| space_regex(r"\(([^)]*)\)\s*Tj"));

// Arrays do not span lines.
static SHOW_TEXT_ARRAY: Lazy<Regex> = Lazy::new(|| space_regex(r"\[([^\n\r]*?)\]\s*TJ"));

static PAREN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]*)\)").unwrap());

static ANGLE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<([^>]*)>").unwrap());

/// Operators removed by [`StripMode::Loose`].
static LOOSE_STRIP: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"\s*q\s*",
        r"\s*Q\s*",
        r"\s*BT\s*",
        r"\s*ET\s*",
        r"/[0-9A-Za-z_]+\s+\d+\s+Tf",
        r"\d+\s+\d+\s+Td",
        r"\d+\.?\d*\s+TL",
    ])
});

/// Operators removed by [`StripMode::Bounded`].
static BOUNDED_STRIP: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"\s*\bq\b\s*",
        r"\s*\bQ\b\s*",
        r"\s*\bBT\b\s*",
        r"\s*\bET\b\s*",
        r"/[0-9A-Za-z_]+\s+\d+\s+Tf",
        r"\d+\s+\d+\s+Td",
        r"\d+\.?\d*\s+TL",
    ])
});

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| space_regex(p)).collect()
}

/// Decode all recoverable text from a raw object span.
///
/// The result is trimmed once at the end; never fails.
pub fn decode_content(content: &str, options: &ExtractOptions) -> String {
    let mut text = String::new();

    if let Some(caps) = STREAM_BODY.captures(content) {
        text.push_str(&decode_stream_body(&caps[1], options.strip_mode));
    }

    text.push_str(&extract_text_operations(content));

    if options.bracket_sweep {
        sweep_runs(&PAREN_RUN, content, &mut text);
        sweep_runs(&ANGLE_RUN, content, &mut text);
    }

    trim_pdf_space(&text).to_string()
}

/// Strip drawing and state operators from a stream body, then extract
/// the shown strings.
pub fn decode_stream_body(body: &str, mode: StripMode) -> String {
    let patterns = match mode {
        StripMode::Loose => &*LOOSE_STRIP,
        StripMode::Bounded => &*BOUNDED_STRIP,
    };

    let mut stripped = body.to_string();
    for pattern in patterns {
        stripped = pattern.replace_all(&stripped, "").into_owned();
    }

    extract_text_operations(&stripped)
}

/// Extract the strings shown by `Tj` and `TJ` operators.
///
/// All `Tj` strings come first, then all `TJ` array strings; numeric
/// kerning inside arrays is ignored. Each string is followed by a space
/// and the result is trimmed.
pub fn extract_text_operations(content: &str) -> String {
    let mut text = String::new();

    for caps in SHOW_TEXT.captures_iter(content) {
        text.push_str(&decode_text_string(&caps[1]));
        text.push(' ');
    }

    for caps in SHOW_TEXT_ARRAY.captures_iter(content) {
        for part in PAREN_RUN.captures_iter(&caps[1]) {
            text.push_str(&decode_text_string(&part[1]));
            text.push(' ');
        }
    }

    trim_pdf_space(&text).to_string()
}

fn sweep_runs(pattern: &Regex, content: &str, out: &mut String) {
    for caps in pattern.captures_iter(content) {
        let inner = &caps[1];
        if !trim_pdf_space(inner).is_empty() {
            out.push_str(&decode_text_string(inner));
            out.push(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_sweep() -> ExtractOptions {
        ExtractOptions::new().with_bracket_sweep(false)
    }

    #[test]
    fn test_show_text_operator() {
        assert_eq!(extract_text_operations("BT (Hello) Tj ET"), "Hello");
    }

    #[test]
    fn test_show_text_array_ignores_kerning() {
        assert_eq!(
            extract_text_operations("[(Wo) -20 (rld) 5.5 (!)] TJ"),
            "Wo rld !"
        );
    }

    #[test]
    fn test_single_shows_precede_arrays() {
        assert_eq!(
            extract_text_operations("[(B)] TJ (A) Tj"),
            "A B"
        );
    }

    #[test]
    fn test_escapes_decoded_in_operators() {
        assert_eq!(extract_text_operations(r"(caf\351) Tj"), "caf\u{e9}");
    }

    #[test]
    fn test_loose_strip_eats_letters_in_words() {
        // "q" is removed from inside the string before extraction
        assert_eq!(
            decode_stream_body("q BT /F1 12 Tf 72 712 Td (quiet) Tj ET Q", StripMode::Loose),
            "uiet"
        );
    }

    #[test]
    fn test_bounded_strip_keeps_words() {
        assert_eq!(
            decode_stream_body("q BT /F1 12 Tf 72 712 Td (quiet) Tj ET Q", StripMode::Bounded),
            "quiet"
        );
    }

    #[test]
    fn test_leading_operator_stripped() {
        // Strip patterns run before extraction, so they reach into strings too
        assert_eq!(
            decode_stream_body("(Leading 14.5 TL here) Tj", StripMode::Loose),
            "Leading  here"
        );
        assert_eq!(
            decode_stream_body("(Leading 12 TL) Tj", StripMode::Bounded),
            "Leading"
        );
    }

    #[test]
    fn test_array_does_not_span_lines() {
        assert_eq!(extract_text_operations("[(A)\r(B)] TJ"), "");
    }

    #[test]
    fn test_decode_content_passes_concatenate() {
        let content = "<< /Length 10 >>\nstream\n(Hi) Tj\nendstream";
        // Stream-body pass and whole-content pass both find "Hi"
        assert_eq!(decode_content(content, &no_sweep()), "HiHi");
    }

    #[test]
    fn test_bracket_sweep_adds_false_positives() {
        let content = "<< /Length 10 >>\nstream\n(Hi) Tj\nendstream";
        let text = decode_content(content, &ExtractOptions::default());
        // The "<< ... >>" dictionary delimiters are swept as an angle run
        assert_eq!(text, "HiHiHi < /Length 10");
    }

    #[test]
    fn test_sweep_skips_blank_runs() {
        assert_eq!(decode_content("(  ) < > (x)", &ExtractOptions::default()), "x");
    }

    #[test]
    fn test_no_text_operators() {
        assert_eq!(decode_content("0 0 612 792 re f", &ExtractOptions::default()), "");
    }

    #[test]
    fn test_multiline_stream_body() {
        let content = "stream\nBT\n(Line one) Tj\n0 -14 Td\n(Line two) Tj\nET\nendstream";
        assert_eq!(
            decode_content(content, &no_sweep()),
            "Line one Line twoLine one Line two"
        );
    }
}
