//! Profile Picture Resolver
//!
//! The `ProfilePicture` field carries either a remote URL or a base64 image
//! payload with no declared type. [`classify`] decides which one a value is,
//! [`resolve_image_source`] turns it into something an image widget can load.
//!
//! The rules, in order:
//!
//! 1. empty or missing: no image
//! 2. starts with `http://` or `https://`: remote URL, used unchanged
//! 3. longer than [`INLINE_THRESHOLD`] characters: inline payload, MIME type
//!    sniffed from the leading base64 characters (JPEG when unrecognized)
//! 4. anything else: no image
//!
//! Rule 3 is a length heuristic, not a format check. [`resolve_image_source`]
//! never decodes the payload; [`decode_inline_image`] does, for widgets that
//! need raw bytes.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Values longer than this (in characters) are treated as inline payloads
pub const INLINE_THRESHOLD: usize = 100;

/// Base64 of the PNG file signature
pub const PNG_SIGNATURE: &str = "iVBOR";

/// Base64 of the JPEG start-of-image marker
pub const JPEG_SIGNATURE: &str = "/9j";

/// Image type of an inline payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMime {
    Png,
    Jpeg,
}

impl ImageMime {
    /// Sniff the type from the payload's leading characters
    pub fn sniff(payload: &str) -> Self {
        match payload {
            p if p.starts_with(PNG_SIGNATURE) => ImageMime::Png,
            p if p.starts_with(JPEG_SIGNATURE) => ImageMime::Jpeg,
            // unrecognized payloads are assumed to be JPEG
            _ => ImageMime::Jpeg,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMime::Png => "image/png",
            ImageMime::Jpeg => "image/jpeg",
        }
    }

    /// File extension image decoders key on
    pub fn extension(&self) -> &'static str {
        match self {
            ImageMime::Png => "png",
            ImageMime::Jpeg => "jpg",
        }
    }
}

impl fmt::Display for ImageMime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a raw `ProfilePicture` value is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageClass {
    RemoteUrl,
    InlineImage(ImageMime),
    None,
}

/// Classify a raw `ProfilePicture` value
pub fn classify(raw: Option<&str>) -> ImageClass {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return ImageClass::None,
    };

    if raw.starts_with("http://") || raw.starts_with("https://") {
        return ImageClass::RemoteUrl;
    }

    if raw.chars().count() > INLINE_THRESHOLD {
        return ImageClass::InlineImage(ImageMime::sniff(raw));
    }

    ImageClass::None
}

/// Renderable source for a raw `ProfilePicture` value, `None` for a placeholder
pub fn resolve_image_source(raw: Option<&str>) -> Option<String> {
    let value = raw?;
    match classify(raw) {
        ImageClass::RemoteUrl => Some(value.to_string()),
        ImageClass::InlineImage(mime) => Some(format!("data:{};base64,{}", mime, value)),
        ImageClass::None => None,
    }
}

/// Decode an inline payload into its type and raw bytes
///
/// `None` for remote URLs, short or empty values, and payloads that are not
/// valid base64.
pub fn decode_inline_image(raw: Option<&str>) -> Option<(ImageMime, Vec<u8>)> {
    let ImageClass::InlineImage(mime) = classify(raw) else {
        return None;
    };
    let payload = raw?;

    match STANDARD.decode(payload) {
        Ok(bytes) => Some((mime, bytes)),
        Err(e) => {
            tracing::debug!("Profile picture payload is not valid base64: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(prefix: &str, len: usize) -> String {
        let mut value = prefix.to_string();
        while value.len() < len {
            value.push('A');
        }
        value
    }

    #[test]
    fn test_empty_and_missing_resolve_to_none() {
        assert_eq!(resolve_image_source(None), None);
        assert_eq!(resolve_image_source(Some("")), None);
        assert_eq!(classify(Some("")), ImageClass::None);
    }

    #[test]
    fn test_remote_url_is_unchanged() {
        assert_eq!(
            resolve_image_source(Some("http://x/y.png")).as_deref(),
            Some("http://x/y.png")
        );
        assert_eq!(classify(Some("https://cdn.example.com/a.jpg")), ImageClass::RemoteUrl);
    }

    #[test]
    fn test_url_prefix_is_case_sensitive() {
        assert_eq!(classify(Some("HTTP://x/y.png")), ImageClass::None);
    }

    #[test]
    fn test_png_payload() {
        let raw = payload("iVBORw0KGgo", 150);
        let source = resolve_image_source(Some(&raw)).unwrap();
        assert!(source.starts_with("data:image/png;base64,"));
        assert!(source.ends_with(&raw));
    }

    #[test]
    fn test_jpeg_payload() {
        let raw = payload("/9j/4AAQSkZJRg", 150);
        let source = resolve_image_source(Some(&raw)).unwrap();
        assert!(source.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_unknown_signature_defaults_to_jpeg() {
        let raw = payload("R0lGODlh", 150);
        assert_eq!(classify(Some(&raw)), ImageClass::InlineImage(ImageMime::Jpeg));
    }

    #[test]
    fn test_short_value_is_none() {
        assert_eq!(resolve_image_source(Some("short")), None);
    }

    #[test]
    fn test_threshold_is_strict() {
        let at_threshold = payload("iVBOR", INLINE_THRESHOLD);
        assert_eq!(classify(Some(&at_threshold)), ImageClass::None);

        let over_threshold = payload("iVBOR", INLINE_THRESHOLD + 1);
        assert_eq!(
            classify(Some(&over_threshold)),
            ImageClass::InlineImage(ImageMime::Png)
        );
    }

    #[test]
    fn test_long_url_stays_remote() {
        let url = payload("https://cdn.example.com/", 300);
        assert_eq!(classify(Some(&url)), ImageClass::RemoteUrl);
        assert_eq!(resolve_image_source(Some(&url)), Some(url));
    }

    #[test]
    fn test_decode_inline_png() {
        let mut bytes = vec![0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
        bytes.extend(std::iter::repeat(0u8).take(80));
        let raw = STANDARD.encode(&bytes);
        assert!(raw.starts_with("iVBORw0KGgo"));

        assert_eq!(decode_inline_image(Some(&raw)), Some((ImageMime::Png, bytes)));
    }

    #[test]
    fn test_decode_rejects_invalid_payload() {
        let raw = payload("/9j!!", 150);
        assert_eq!(classify(Some(&raw)), ImageClass::InlineImage(ImageMime::Jpeg));
        assert_eq!(decode_inline_image(Some(&raw)), None);
    }

    #[test]
    fn test_decode_skips_urls_and_short_values() {
        assert_eq!(decode_inline_image(Some("https://cdn.example.com/a.png")), None);
        assert_eq!(decode_inline_image(Some("short")), None);
        assert_eq!(decode_inline_image(None), None);
    }
}
