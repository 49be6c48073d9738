// ABOUTME: Decoding of saved page bytes into text.
// ABOUTME: Uses an explicit charset when known, otherwise detects one with chardetng.

/// Decode page bytes using `charset` (a label or a content-type value) or detection.
pub fn decode_html(bytes: &[u8], charset: Option<&str>) -> String {
    if let Some(label) = charset.map(charset_label) {
        if let Some(encoding) = encoding_rs::Encoding::for_label(label.as_bytes()) {
            let (decoded, _, _) = encoding.decode(bytes);
            return decoded.into_owned();
        }
        tracing::warn!(charset = %label, "unknown charset, detecting instead");
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    tracing::debug!(encoding = encoding.name(), "detected page encoding");
    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}

/// Accepts `iso-8859-1` as well as `text/html; charset=iso-8859-1`.
fn charset_label(value: &str) -> String {
    let lower = value.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            return charset.trim_matches('"').trim_matches('\'').to_string();
        }
    }
    lower.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_latin1() {
        let bytes = b"Pr\xfcfung";
        assert_eq!(decode_html(bytes, Some("iso-8859-1")), "Prüfung");
        assert_eq!(
            decode_html(bytes, Some("text/html; charset=\"ISO-8859-1\"")),
            "Prüfung"
        );
    }

    #[test]
    fn test_utf8_is_detected() {
        let text = "Prüfungsrücktritt bestanden";
        assert_eq!(decode_html(text.as_bytes(), None), text);
    }

    #[test]
    fn test_unknown_label_falls_back_to_detection() {
        assert_eq!(decode_html(b"plain ascii", Some("no-such-charset")), "plain ascii");
    }

    #[test]
    fn test_charset_label_variants() {
        assert_eq!(charset_label("UTF-8"), "utf-8");
        assert_eq!(charset_label("text/html; charset=windows-1252"), "windows-1252");
    }
}
