//! Text encoding detection.
//!
//! Byte input only qualifies as text when it is UTF-8 or when a detector is
//! confident about some other encoding that then decodes cleanly.

use encoding_rs::Encoding;

/// Detection below this confidence is treated as "unknown bytes".
const CONFIDENCE_THRESHOLD: f32 = 0.7;

/// Best-guess charset name and detector confidence for a byte sequence.
pub fn detect_encoding(data: &[u8]) -> (String, f32) {
    let (charset, confidence, _language) = chardet::detect(data);
    (charset, confidence)
}

/// Whether the bytes qualify as valid text.
pub fn is_valid_text(data: &[u8]) -> bool {
    if std::str::from_utf8(data).is_ok() {
        return true;
    }

    let (charset, confidence, _language) = chardet::detect(data);
    if confidence <= CONFIDENCE_THRESHOLD {
        tracing::debug!(charset = %charset, confidence, "encoding detection below threshold");
        return false;
    }
    match Encoding::for_label(chardet::charset2encoding(&charset).as_bytes()) {
        Some(encoding) => {
            let (_decoded, _actual, had_errors) = encoding.decode(data);
            !had_errors
        }
        None => false,
    }
}
