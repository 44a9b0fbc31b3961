//! The fixed extension table.
//!
//! Keys are lower-case and carry a single leading dot. Several keys may share
//! one value. The table is never modified after the index is built.

use crate::constants::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Built-in extension mappings (all lowercase extensions).
static ENTRIES: &[(&str, &str)] = &[
    // text
    (".html", TEXT_HTML),
    (".htm", TEXT_HTML),
    (".shtml", TEXT_HTML),
    (".css", TEXT_CSS),
    (".xml", TEXT_XML),
    (".txt", TEXT_PLAIN),
    (".jad", TEXT_VND_J2ME),
    (".wml", TEXT_VND_WAP_WML),
    (".htc", TEXT_COMPONENT),
    // image
    (".gif", IMAGE_GIF),
    (".jpeg", IMAGE_JPEG),
    (".jpg", IMAGE_JPEG),
    (".png", IMAGE_PNG),
    (".svg", IMAGE_SVG),
    (".svgz", IMAGE_SVG),
    (".tif", IMAGE_TIFF),
    (".tiff", IMAGE_TIFF),
    (".webp", IMAGE_WEBP),
    (".ico", IMAGE_ICO),
    (".jng", IMAGE_JNG),
    (".bmp", IMAGE_BMP),
    (".avif", IMAGE_AVIF),
    (".wbmp", IMAGE_VND_WAP_WBMP),
    // font
    (".woff", FONT_WOFF),
    (".woff2", FONT_WOFF2),
    (".eot", FONT_EOT),
    // application
    (".js", APP_JS),
    (".json", APP_JSON),
    (".pdf", APP_PDF),
    (".zip", APP_ZIP),
    (".wasm", APP_WASM),
    (".atom", APP_ATOM_XML),
    (".rss", APP_RSS_XML),
    (".jar", APP_JAVA_ARCHIVE),
    (".war", APP_JAVA_ARCHIVE),
    (".ear", APP_JAVA_ARCHIVE),
    (".hqx", APP_MAC_BINHEX40),
    (".ps", APP_POSTSCRIPT),
    (".eps", APP_POSTSCRIPT),
    (".ai", APP_POSTSCRIPT),
    (".rtf", APP_RTF),
    (".m3u8", APP_MPEGURL),
    (".kml", APP_KML),
    (".kmz", APP_KMZ),
    (".wmlc", APP_WMLC),
    (".7z", APP_7Z),
    (".cco", APP_COCOA),
    (".jardiff", APP_JAVA_DIFF),
    (".jnlp", APP_JNLP),
    (".run", APP_MAKESELF),
    (".pl", APP_PERL),
    (".pm", APP_PERL),
    (".prc", APP_PILOT),
    (".pdb", APP_PILOT),
    (".rar", APP_RAR),
    (".rpm", APP_RPM),
    (".sea", APP_SEA),
    (".swf", APP_SHOCKWAVE_FLASH),
    (".sit", APP_STUFFIT),
    (".tcl", APP_TCL),
    (".tk", APP_TCL),
    (".der", APP_X509),
    (".pem", APP_X509),
    (".crt", APP_X509),
    (".xpi", APP_XPINSTALL),
    (".xhtml", APP_XHTML),
    (".xspf", APP_XSPF),
    // office
    (".doc", APP_MS_WORD),
    (".xls", APP_MS_EXCEL),
    (".ppt", APP_MS_PPT),
    (".odg", APP_ODG),
    (".odp", APP_ODP),
    (".ods", APP_ODS),
    (".odt", APP_ODT),
    (".docx", APP_DOCX),
    (".xlsx", APP_XLSX),
    (".pptx", APP_PPTX),
    // binary
    (".bin", APP_OCTET_STREAM),
    (".exe", APP_OCTET_STREAM),
    (".dll", APP_OCTET_STREAM),
    (".deb", APP_OCTET_STREAM),
    (".dmg", APP_OCTET_STREAM),
    (".iso", APP_OCTET_STREAM),
    (".img", APP_OCTET_STREAM),
    (".msi", APP_OCTET_STREAM),
    (".msp", APP_OCTET_STREAM),
    // audio
    (".mid", AUDIO_MIDI),
    (".midi", AUDIO_MIDI),
    (".kar", AUDIO_MIDI),
    (".mp3", AUDIO_MP3),
    (".ogg", AUDIO_OGG),
    (".m4a", AUDIO_M4A),
    (".ra", AUDIO_REAL_AUDIO),
    // video
    (".3gpp", VIDEO_3GPP),
    (".3gp", VIDEO_3GPP),
    (".ts", VIDEO_MP2T),
    (".mp4", VIDEO_MP4),
    (".mpeg", VIDEO_MPEG),
    (".mpg", VIDEO_MPEG),
    (".mov", VIDEO_QUICKTIME),
    (".webm", VIDEO_WEBM),
    (".flv", VIDEO_FLV),
    (".m4v", VIDEO_M4V),
    (".mng", VIDEO_MNG),
    (".asx", VIDEO_MS_ASF),
    (".asf", VIDEO_MS_ASF),
    (".wmv", VIDEO_MS_WMV),
    (".avi", VIDEO_MS_VIDEO),
];

/// Maps lowercase extensions to MIME types.
/// Example: ".jpg" => "image/jpeg"
static INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ENTRIES.iter().copied().collect());

/// Returns the MIME type stored for an already normalized extension.
pub(crate) fn lookup(ext: &str) -> Option<&'static str> {
    INDEX.get(ext).copied()
}

/// Iterates over every `(extension, mime)` pair in definition order.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    ENTRIES.iter().copied()
}

/// Number of extensions in the table.
pub fn len() -> usize {
    ENTRIES.len()
}
