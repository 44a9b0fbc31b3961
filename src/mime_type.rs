//! MIME type detection by file extension.
//!
//! Provides functions to map file extensions to MIME types and vice versa.
//!
//! Forward lookups are total: anything not in the table, including the empty
//! string, maps to [`DEFAULT_MIME_TYPE`]. Reverse lookups return an empty
//! string when no extension is registered for the MIME type.
//!
//! When several extensions share a MIME type, reverse lookups pick the
//! lexicographically smallest one, so `image/jpeg` always yields `.jpeg`.

use crate::constants::DEFAULT_MIME_TYPE;
use crate::file::FileName;
use crate::table;
use std::path::Path;
use tracing::trace;

/// Returns the MIME type associated with the file extension ext.
///
/// The leading dot is optional and case is ignored, so "html", ".HTML" and
/// ".html" are equivalent. Unknown or empty extensions yield
/// `application/octet-stream`.
///
/// # Examples
///
/// ```
/// use mime_table::mime_type_for_extension;
///
/// assert_eq!(mime_type_for_extension("html"), "text/html");
/// assert_eq!(mime_type_for_extension(".HTML"), "text/html");
/// assert_eq!(mime_type_for_extension(".unknown"), "application/octet-stream");
/// assert_eq!(mime_type_for_extension(""), "application/octet-stream");
/// ```
pub fn mime_type_for_extension(ext: &str) -> &'static str {
    if ext.is_empty() {
        return DEFAULT_MIME_TYPE;
    }

    let normalized = normalize(ext);
    match table::lookup(&normalized) {
        Some(mime) => mime,
        None => {
            trace!(extension = %normalized, "unknown extension, using default");
            DEFAULT_MIME_TYPE
        }
    }
}

/// Returns the MIME type for the last path segment of a URL.
///
/// The URL is not parsed: query strings and fragments are part of the
/// string that gets scanned, so `demo.gif?v=2` has no known extension.
///
/// # Examples
///
/// ```
/// use mime_table::mime_type_for_url;
///
/// assert_eq!(mime_type_for_url("https://example.com/demo.gif"), "image/gif");
/// assert_eq!(
///     mime_type_for_url("https://example.com/demo.gif?v=2"),
///     "application/octet-stream"
/// );
/// ```
pub fn mime_type_for_url(url: &str) -> &'static str {
    mime_type_for_extension(extension_of(url, |c| c == '/'))
}

/// Returns the MIME type for a filesystem path.
///
/// # Examples
///
/// ```
/// use mime_table::mime_type_for_path;
///
/// assert_eq!(mime_type_for_path("path/demo.gif"), "image/gif");
/// assert_eq!(mime_type_for_path("archive.tar.7z"), "application/x-7z-compressed");
/// ```
pub fn mime_type_for_path(path: impl AsRef<Path>) -> &'static str {
    let path = path.as_ref().to_string_lossy();
    mime_type_for_extension(extension_of(&path, std::path::is_separator))
}

/// Returns the MIME type for a file the caller already opened.
///
/// Only the file's name is inspected; the handle is neither read nor closed.
pub fn mime_type_for_open_file<F: FileName + ?Sized>(file: &F) -> &'static str {
    mime_type_for_path(file.name())
}

/// Returns an extension registered for the MIME type, with its leading dot.
///
/// The MIME type must match exactly. Returns an empty string when there is
/// no match.
///
/// # Examples
///
/// ```
/// use mime_table::extension_for_mime_type;
///
/// assert_eq!(extension_for_mime_type("application/json"), ".json");
/// assert_eq!(extension_for_mime_type("image/jpeg"), ".jpeg");
/// assert_eq!(extension_for_mime_type("not/a/real-mime"), "");
/// ```
pub fn extension_for_mime_type(mime_type: &str) -> &'static str {
    table::entries()
        .filter(|(_, mime)| *mime == mime_type)
        .map(|(ext, _)| ext)
        .min()
        .unwrap_or("")
}

/// Same as [`extension_for_mime_type`] without the leading dot.
///
/// # Examples
///
/// ```
/// use mime_table::extension_name_for_mime_type;
///
/// assert_eq!(extension_name_for_mime_type("application/json"), "json");
/// ```
pub fn extension_name_for_mime_type(mime_type: &str) -> &'static str {
    extension_for_mime_type(mime_type).trim_start_matches('.')
}

/// Returns every extension registered for the MIME type, sorted.
///
/// # Examples
///
/// ```
/// use mime_table::extensions_for_mime_type;
///
/// assert_eq!(extensions_for_mime_type("image/jpeg"), vec![".jpeg", ".jpg"]);
/// assert!(extensions_for_mime_type("not/a/real-mime").is_empty());
/// ```
pub fn extensions_for_mime_type(mime_type: &str) -> Vec<&'static str> {
    let mut exts: Vec<_> = table::entries()
        .filter(|(_, mime)| *mime == mime_type)
        .map(|(ext, _)| ext)
        .collect();
    exts.sort_unstable();
    exts
}

/// Reports whether the extension has an entry of its own in the table.
///
/// Extensions mapped explicitly to `application/octet-stream` (".exe",
/// ".bin", ...) are known; ones that merely fall back to it are not.
pub fn is_known_extension(ext: &str) -> bool {
    !ext.is_empty() && table::lookup(&normalize(ext)).is_some()
}

/// Lower-cases the extension and adds the leading dot if missing.
fn normalize(ext: &str) -> String {
    let lower = if ext.is_ascii() {
        ext.to_ascii_lowercase()
    } else {
        ext.to_lowercase()
    };

    if lower.starts_with('.') {
        lower
    } else {
        format!(".{}", lower)
    }
}

/// Returns the suffix of name starting at the last dot of its final component.
///
/// Components are delimited by characters matching `is_separator`. Returns an
/// empty string when the final component has no dot.
fn extension_of(name: &str, is_separator: impl Fn(char) -> bool) -> &str {
    for (i, c) in name.char_indices().rev() {
        if is_separator(c) {
            break;
        }
        if c == '.' {
            return &name[i..];
        }
    }
    ""
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use std::path::PathBuf;

    #[test]
    fn test_mime_type_for_extension() {
        assert_eq!(mime_type_for_extension(".html"), TEXT_HTML);
        assert_eq!(mime_type_for_extension("html"), TEXT_HTML);
        assert_eq!(mime_type_for_extension(".HTML"), TEXT_HTML);
        assert_eq!(mime_type_for_extension("HtMl"), TEXT_HTML);
        assert_eq!(mime_type_for_extension(".jpg"), IMAGE_JPEG);
        assert_eq!(mime_type_for_extension(".jpeg"), IMAGE_JPEG);
        assert_eq!(mime_type_for_extension(".docx"), APP_DOCX);
        assert_eq!(mime_type_for_extension(".unknownext"), APP_OCTET_STREAM);
        assert_eq!(mime_type_for_extension(""), APP_OCTET_STREAM);
    }

    #[test]
    fn test_mime_type_for_extension_edge_cases() {
        // A lone dot normalizes to "." which is not a key
        assert_eq!(mime_type_for_extension("."), DEFAULT_MIME_TYPE);
        // Only one dot is added; existing ones are kept
        assert_eq!(mime_type_for_extension("..json"), DEFAULT_MIME_TYPE);
        assert_eq!(mime_type_for_extension(" .json"), DEFAULT_MIME_TYPE);
        assert_eq!(mime_type_for_extension("ÉXE"), DEFAULT_MIME_TYPE);
    }

    #[test]
    fn test_case_permutations() {
        for ext in ["woff2", ".WoFf2", "WOFF2", ".woff2"] {
            assert_eq!(mime_type_for_extension(ext), FONT_WOFF2, "{ext}");
        }
    }

    #[test]
    fn test_every_entry_round_trips_forward() {
        for (ext, mime) in table::entries() {
            assert_eq!(mime_type_for_extension(ext), mime);
            assert_eq!(mime_type_for_extension(&ext[1..]), mime);
            assert_eq!(mime_type_for_extension(&ext.to_uppercase()), mime);
        }
    }

    #[test]
    fn test_extension_of() {
        let slash = |c: char| c == '/';
        assert_eq!(extension_of("path/demo.gif", slash), ".gif");
        assert_eq!(extension_of("demo.tar.gz", slash), ".gz");
        assert_eq!(extension_of("dir.d/file", slash), "");
        assert_eq!(extension_of("noext", slash), "");
        assert_eq!(extension_of("trailing.", slash), ".");
        assert_eq!(extension_of(".bashrc", slash), ".bashrc");
        assert_eq!(extension_of("", slash), "");
        assert_eq!(extension_of("dir/", slash), "");
    }

    #[test]
    fn test_mime_type_for_url() {
        assert_eq!(mime_type_for_url("https://example.com/demo.gif"), IMAGE_GIF);
        assert_eq!(mime_type_for_url("https://example.com/a/b/Demo.PNG"), IMAGE_PNG);
        assert_eq!(
            mime_type_for_url("https://example.com/demo.gif?size=large"),
            APP_OCTET_STREAM
        );
        assert_eq!(
            mime_type_for_url("https://example.com/doc.pdf#page=2"),
            APP_OCTET_STREAM
        );
        assert_eq!(
            mime_type_for_url("https://example.com/v1.2/download"),
            APP_OCTET_STREAM
        );
        assert_eq!(mime_type_for_url(""), APP_OCTET_STREAM);
    }

    #[test]
    fn test_mime_type_for_url_scans_raw_string() {
        // The last '/' may sit inside the query string
        assert_eq!(mime_type_for_url("https://x/dl?f=/a.gif"), IMAGE_GIF);
        assert_eq!(mime_type_for_url("https://x/a.gif?v=2"), APP_OCTET_STREAM);
        // Fragments are not stripped either
        assert_eq!(mime_type_for_url("https://x/page#sec.pdf"), APP_PDF);
    }

    #[test]
    fn test_mime_type_for_path() {
        assert_eq!(mime_type_for_path("path/demo.gif"), IMAGE_GIF);
        assert_eq!(mime_type_for_path(Path::new("/srv/www/index.html")), TEXT_HTML);
        assert_eq!(mime_type_for_path(PathBuf::from("music/song.MIDI")), AUDIO_MIDI);
        assert_eq!(mime_type_for_path("releases.v2/README"), APP_OCTET_STREAM);
        assert_eq!(mime_type_for_path(""), APP_OCTET_STREAM);
    }

    #[test]
    fn test_mime_type_for_open_file() {
        assert_eq!(mime_type_for_open_file(Path::new("data/types.json")), APP_JSON);
        assert_eq!(
            mime_type_for_open_file(&PathBuf::from("slides.pptx")),
            APP_PPTX
        );
    }

    #[test]
    fn test_extension_for_mime_type() {
        assert_eq!(extension_for_mime_type(APP_DOCX), ".docx");
        assert_eq!(extension_for_mime_type(APP_JSON), ".json");
        assert_eq!(extension_for_mime_type("not/a/real-mime"), "");
        assert_eq!(extension_for_mime_type(""), "");
        // Exact match only
        assert_eq!(extension_for_mime_type("Application/JSON"), "");
        assert_eq!(extension_for_mime_type("application/json; charset=utf-8"), "");
    }

    #[test]
    fn test_extension_for_mime_type_tie_break() {
        assert_eq!(extension_for_mime_type(IMAGE_JPEG), ".jpeg");
        assert_eq!(extension_for_mime_type(APP_PERL), ".pl");
        assert_eq!(extension_for_mime_type(AUDIO_MIDI), ".kar");
        assert_eq!(extension_for_mime_type(APP_OCTET_STREAM), ".bin");
        assert_eq!(extension_for_mime_type(TEXT_HTML), ".htm");
    }

    #[test]
    fn test_extension_name_for_mime_type() {
        assert_eq!(extension_name_for_mime_type(APP_JSON), "json");
        assert_eq!(extension_name_for_mime_type(APP_7Z), "7z");
        assert_eq!(extension_name_for_mime_type("not/a/real-mime"), "");
    }

    #[test]
    fn test_reverse_lookup_is_consistent() {
        for (_, mime) in table::entries() {
            let ext = extension_for_mime_type(mime);
            assert_eq!(mime_type_for_extension(ext), mime);
            assert_eq!(extensions_for_mime_type(mime)[0], ext);
        }
    }

    #[test]
    fn test_extensions_for_mime_type() {
        assert_eq!(extensions_for_mime_type(AUDIO_MIDI), vec![".kar", ".mid", ".midi"]);
        assert_eq!(extensions_for_mime_type(APP_JAVA_ARCHIVE), vec![".ear", ".jar", ".war"]);
        assert!(extensions_for_mime_type(TEXT_MATHML).is_empty());
    }

    #[test]
    fn test_is_known_extension() {
        assert!(is_known_extension(".exe"));
        assert!(is_known_extension("EXE"));
        assert!(is_known_extension("json"));
        assert!(!is_known_extension(".unknownext"));
        assert!(!is_known_extension(""));
    }
}
