//! Integration tests for the reader, file and base64 adapters.

use std::io::{self, Read, Write};

use base64::Engine;
use pdfscan::{
    extract_text_from_base64_pdf, extract_text_from_file, extract_text_from_pdf,
    extract_text_from_reader, Error, DATA_URL_PREFIX,
};

const SAMPLE: &[u8] = b"%PDF-1.4\n1 0 obj\n<< /Type /Page /Contents 2 0 R >>\nendobj\n2 0 obj\n<< /Length 22 >>\nstream\nBT (Adapter test) Tj ET\nendstream\nendobj\n";

/// Reader that fails after handing out a few bytes.
struct FailingReader {
    served: bool,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.served {
            return Err(io::Error::new(io::ErrorKind::Other, "Failed to read file"));
        }
        self.served = true;
        let n = buf.len().min(4);
        buf[..n].copy_from_slice(&SAMPLE[..n]);
        Ok(n)
    }
}

#[test]
fn test_reader_matches_buffer() {
    let result = extract_text_from_reader(SAMPLE).unwrap();
    assert_eq!(result, extract_text_from_pdf(SAMPLE));
    assert!(result.text.contains("Adapter test"));
}

#[test]
fn test_reader_failure_propagates() {
    let err = extract_text_from_reader(FailingReader { served: false }).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(err.to_string(), "I/O error: Failed to read file");
}

#[test]
fn test_file_adapter() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE).unwrap();

    let result = extract_text_from_file(file.path()).unwrap();
    assert!(result.success);
    assert_eq!(result.num_pages, 1);
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = extract_text_from_file(dir.path().join("missing.pdf"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_base64_data_url_round_trip() {
    let encoded = base64::engine::general_purpose::STANDARD.encode(SAMPLE);

    let from_url = extract_text_from_base64_pdf(&format!("{}{}", DATA_URL_PREFIX, encoded));
    let from_plain = extract_text_from_base64_pdf(&encoded);
    let direct = extract_text_from_pdf(SAMPLE);

    assert_eq!(from_url, direct);
    assert_eq!(from_plain, direct);
}

#[test]
fn test_base64_empty_payload() {
    let result = extract_text_from_base64_pdf(DATA_URL_PREFIX);
    assert!(result.success);
    assert_eq!(result.num_pages, 0);
    assert_eq!(result.text, "");
}

#[cfg(feature = "async")]
mod async_adapters {
    use super::*;
    use pdfscan::{
        extract_text_from_async_reader, extract_text_from_file_async,
        extract_text_from_file_async_with_options, ExtractOptions,
    };

    #[tokio::test(flavor = "current_thread")]
    async fn test_async_file_adapter() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE).unwrap();

        let result = extract_text_from_file_async(file.path()).await.unwrap();
        assert_eq!(result, extract_text_from_pdf(SAMPLE));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_async_file_adapter_honors_options() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"garbage!1 0 obj /Type /Page (Hi) Tj endobj").unwrap();

        let lenient = extract_text_from_file_async(file.path()).await.unwrap();
        assert!(lenient.success);
        assert_eq!(lenient.num_pages, 1);

        let strict =
            extract_text_from_file_async_with_options(file.path(), ExtractOptions::new().strict())
                .await
                .unwrap();
        assert!(!strict.success);
        assert_eq!(strict.num_pages, 0);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_async_reader_adapter() {
        let result = extract_text_from_async_reader(SAMPLE, ExtractOptions::default())
            .await
            .unwrap();
        assert!(result.text.contains("Adapter test"));
    }
}
