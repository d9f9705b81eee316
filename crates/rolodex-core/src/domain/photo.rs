use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Guesses an image MIME type from the file extension. Anything unknown is
/// still accepted and tagged as opaque bytes.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("ico") => "image/x-icon",
        Some("avif") => "image/avif",
        _ => FALLBACK_MIME,
    }
}

pub fn encode_data_uri(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

pub fn is_data_uri(value: &str) -> bool {
    value.starts_with("data:")
}

#[cfg(test)]
mod tests {
    use super::{encode_data_uri, is_data_uri, mime_for_path};
    use std::path::Path;

    #[test]
    fn mime_from_extension_is_case_insensitive() {
        assert_eq!(mime_for_path(Path::new("me.PNG")), "image/png");
        assert_eq!(mime_for_path(Path::new("/tmp/me.jpeg")), "image/jpeg");
        assert_eq!(
            mime_for_path(Path::new("notes.txt")),
            "application/octet-stream"
        );
        assert_eq!(
            mime_for_path(Path::new("no-extension")),
            "application/octet-stream"
        );
    }

    #[test]
    fn encode_data_uri_base64() {
        let uri = encode_data_uri(b"hi", "image/png");
        assert_eq!(uri, "data:image/png;base64,aGk=");
        assert!(is_data_uri(&uri));
        assert!(!is_data_uri("/placeholder.svg"));
    }
}
