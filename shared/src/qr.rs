//! Rebuilds displayable QR images from the base64 the API hands back.
//!
//! Payloads arrive wrapped at 76 columns, with the URL-safe alphabet, without
//! padding, or already as a `data:` URL; all of these become one canonical
//! `data:<mime>;base64,<payload>` string usable as an `<img src>`.

use crate::error::{Result, SharedError};
use base64::{engine::general_purpose::STANDARD, Engine as _};

fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF8") {
        "image/gif"
    } else if bytes.starts_with(b"<svg") || bytes.starts_with(b"<?xml") {
        "image/svg+xml"
    } else {
        "image/png"
    }
}

/// Canonical standard-alphabet, padded base64 for `raw`.
fn normalize_payload(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_matches('"');
    let body = match trimmed.strip_prefix("data:") {
        Some(rest) => rest
            .split_once(',')
            .map(|(_, payload)| payload)
            .ok_or_else(|| SharedError::InvalidQrPayload("data URL without a payload".to_string()))?,
        None => trimmed,
    };

    let mut payload: String = body
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while payload.ends_with('=') {
        payload.pop();
    }
    if payload.is_empty() {
        return Err(SharedError::InvalidQrPayload("empty payload".to_string()));
    }
    match payload.len() % 4 {
        0 => {}
        1 => return Err(SharedError::InvalidQrPayload("truncated payload".to_string())),
        rem => payload.push_str(&"=".repeat(4 - rem)),
    }
    Ok(payload)
}

/// Returns an `<img src>`-ready data URL, or an error when the payload does not decode.
pub fn reconstruct_data_url(raw: &str) -> Result<String> {
    let payload = normalize_payload(raw)?;
    let bytes = STANDARD
        .decode(&payload)
        .map_err(|e| SharedError::InvalidQrPayload(e.to_string()))?;
    Ok(format!("data:{};base64,{}", sniff_mime(&bytes), payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use pretty_assertions::assert_eq;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0xFB, 0xFF];

    #[test]
    fn test_wrapped_standard_payload() {
        let encoded = STANDARD.encode(PNG_HEADER);
        let wrapped = format!("{}\n{}", &encoded[..6], &encoded[6..]);
        assert_eq!(
            reconstruct_data_url(&wrapped).unwrap(),
            format!("data:image/png;base64,{}", encoded)
        );
    }

    #[test]
    fn test_url_safe_unpadded_payload() {
        let encoded = URL_SAFE_NO_PAD.encode(PNG_HEADER);
        assert!(encoded.contains('-') || encoded.contains('_'));
        assert_eq!(
            reconstruct_data_url(&encoded).unwrap(),
            format!("data:image/png;base64,{}", STANDARD.encode(PNG_HEADER))
        );
    }

    #[test]
    fn test_existing_data_url_is_resniffed() {
        let svg = STANDARD.encode(b"<svg xmlns='http://www.w3.org/2000/svg'/>");
        let url = reconstruct_data_url(&format!("data:application/octet-stream;base64,{}", svg)).unwrap();
        assert!(url.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(reconstruct_data_url("   "), Err(SharedError::InvalidQrPayload(_))));
        assert!(matches!(reconstruct_data_url("abcde"), Err(SharedError::InvalidQrPayload(_))));
        assert!(matches!(reconstruct_data_url("ab!?"), Err(SharedError::InvalidQrPayload(_))));
        assert!(matches!(reconstruct_data_url("data:image/png;base64"), Err(SharedError::InvalidQrPayload(_))));
    }
}
