//! Content-type resolution for upload tagging.
//!
//! Resolution order: a declared type wins unless it is the generic
//! octet-stream sentinel, then a fixed table of common web asset types,
//! then an extension lookup, then the binary fallback.

use std::path::Path;

use crate::constants::OCTET_STREAM;

/// Fixed types for common web asset suffixes. These take precedence over
/// the extension lookup, whose table answers `text/javascript` for `.js`.
const WEB_SUFFIX_TYPES: &[(&str, &str)] = &[
    (".md", "text/markdown"),
    (".html", "text/html"),
    (".htm", "text/html"),
    (".css", "text/css"),
    (".js", "application/javascript"),
    (".json", "application/json"),
];

/// Resolve the content type for a file name, preferring a declared type.
///
/// A declared type is trusted as-is unless it is empty or the octet-stream
/// sentinel, which many sources report for anything they did not sniff.
/// Always returns a usable type; unknown inputs fall back to
/// `application/octet-stream`.
pub fn resolve_content_type(file_name: &str, declared: Option<&str>) -> String {
    if let Some(declared) = declared {
        if !declared.is_empty() && declared != OCTET_STREAM {
            return declared.to_string();
        }
    }
    from_file_name(file_name)
}

/// Resolve the content type of an on-disk path from its file name alone.
pub fn content_type_from_path(path: &Path) -> String {
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => from_file_name(name),
        None => OCTET_STREAM.to_string(),
    }
}

fn from_file_name(file_name: &str) -> String {
    let lowered = file_name.to_ascii_lowercase();
    for (suffix, mime) in WEB_SUFFIX_TYPES {
        if lowered.ends_with(suffix) {
            return (*mime).to_string();
        }
    }

    if let Some(mime) = mime_guess::from_path(file_name).first_raw() {
        if mime != OCTET_STREAM {
            return mime.to_string();
        }
    }

    OCTET_STREAM.to_string()
}
