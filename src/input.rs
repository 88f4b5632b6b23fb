//! Input adapters: base64 payloads and data URLs.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::error::Result;

/// Prefix stripped from data URLs before decoding.
pub const DATA_URL_PREFIX: &str = "data:application/pdf;base64,";

/// Standard alphabet, padding optional.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a base64 PDF payload, with or without the data URL prefix.
///
/// Line breaks and other ASCII whitespace inside the payload are ignored.
pub fn decode_base64_pdf(payload: &str) -> Result<Vec<u8>> {
    let body = payload.strip_prefix(DATA_URL_PREFIX).unwrap_or(payload);

    let compact: String = body.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(LENIENT_STANDARD.decode(compact)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_decode_plain_payload() {
        assert_eq!(decode_base64_pdf("JVBERi0xLjQ=").unwrap(), b"%PDF-1.4");
    }

    #[test]
    fn test_decode_data_url() {
        let url = format!("{}JVBERi0xLjQ=", DATA_URL_PREFIX);
        assert_eq!(decode_base64_pdf(&url).unwrap(), b"%PDF-1.4");
    }

    #[test]
    fn test_decode_unpadded_and_wrapped() {
        assert_eq!(decode_base64_pdf("JVBE\nRi0xLjQ").unwrap(), b"%PDF-1.4");
    }

    #[test]
    fn test_other_data_url_is_not_stripped() {
        let result = decode_base64_pdf("data:text/plain;base64,SGk=");
        assert!(matches!(result, Err(Error::Base64(_))));
    }

    #[test]
    fn test_empty_payload() {
        assert!(decode_base64_pdf("").unwrap().is_empty());
        assert!(decode_base64_pdf(DATA_URL_PREFIX).unwrap().is_empty());
    }
}
