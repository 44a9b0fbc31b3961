//! Named MIME type constants.
//!
//! Every value stored in the extension table has a constant here, so callers
//! can compare lookup results without repeating string literals.

// text
pub const TEXT_HTML: &str = "text/html";
pub const TEXT_CSS: &str = "text/css";
pub const TEXT_XML: &str = "text/xml";
pub const TEXT_PLAIN: &str = "text/plain";
pub const TEXT_MATHML: &str = "text/mathml";
pub const TEXT_COMPONENT: &str = "text/x-component";
pub const TEXT_VND_J2ME: &str = "text/vnd.sun.j2me.app-descriptor";
pub const TEXT_VND_WAP_WML: &str = "text/vnd.wap.wml";

// image
pub const IMAGE_GIF: &str = "image/gif";
pub const IMAGE_JPEG: &str = "image/jpeg";
pub const IMAGE_PNG: &str = "image/png";
pub const IMAGE_SVG: &str = "image/svg+xml";
pub const IMAGE_TIFF: &str = "image/tiff";
pub const IMAGE_WEBP: &str = "image/webp";
pub const IMAGE_ICO: &str = "image/x-icon";
pub const IMAGE_JNG: &str = "image/x-jng";
pub const IMAGE_BMP: &str = "image/x-ms-bmp";
pub const IMAGE_AVIF: &str = "image/avif";
pub const IMAGE_VND_WAP_WBMP: &str = "image/vnd.wap.wbmp";

// font
pub const FONT_WOFF: &str = "font/woff";
pub const FONT_WOFF2: &str = "font/woff2";
pub const FONT_EOT: &str = "application/vnd.ms-fontobject";

// application
pub const APP_JS: &str = "application/javascript";
pub const APP_JSON: &str = "application/json";
pub const APP_PDF: &str = "application/pdf";
pub const APP_ZIP: &str = "application/zip";
pub const APP_WASM: &str = "application/wasm";
pub const APP_ATOM_XML: &str = "application/atom+xml";
pub const APP_RSS_XML: &str = "application/rss+xml";
pub const APP_JAVA_ARCHIVE: &str = "application/java-archive";
pub const APP_MAC_BINHEX40: &str = "application/mac-binhex40";
pub const APP_POSTSCRIPT: &str = "application/postscript";
pub const APP_RTF: &str = "application/rtf";
pub const APP_MPEGURL: &str = "application/vnd.apple.mpegurl";
pub const APP_KML: &str = "application/vnd.google-earth.kml+xml";
pub const APP_KMZ: &str = "application/vnd.google-earth.kmz";
pub const APP_WMLC: &str = "application/vnd.wap.wmlc";
pub const APP_7Z: &str = "application/x-7z-compressed";
pub const APP_COCOA: &str = "application/x-cocoa";
pub const APP_JAVA_DIFF: &str = "application/x-java-archive-diff";
pub const APP_JNLP: &str = "application/x-java-jnlp-file";
pub const APP_MAKESELF: &str = "application/x-makeself";
pub const APP_PERL: &str = "application/x-perl";
pub const APP_PILOT: &str = "application/x-pilot";
pub const APP_RAR: &str = "application/x-rar-compressed";
pub const APP_RPM: &str = "application/x-redhat-package-manager";
pub const APP_SEA: &str = "application/x-sea";
pub const APP_SHOCKWAVE_FLASH: &str = "application/x-shockwave-flash";
pub const APP_STUFFIT: &str = "application/x-stuffit";
pub const APP_TCL: &str = "application/x-tcl";
pub const APP_X509: &str = "application/x-x509-ca-cert";
pub const APP_XPINSTALL: &str = "application/x-xpinstall";
pub const APP_XHTML: &str = "application/xhtml+xml";
pub const APP_XSPF: &str = "application/xspf+xml";

// office
pub const APP_MS_WORD: &str = "application/msword";
pub const APP_MS_EXCEL: &str = "application/vnd.ms-excel";
pub const APP_MS_PPT: &str = "application/vnd.ms-powerpoint";
pub const APP_ODG: &str = "application/vnd.oasis.opendocument.graphics";
pub const APP_ODP: &str = "application/vnd.oasis.opendocument.presentation";
pub const APP_ODS: &str = "application/vnd.oasis.opendocument.spreadsheet";
pub const APP_ODT: &str = "application/vnd.oasis.opendocument.text";
pub const APP_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const APP_XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const APP_PPTX: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

// binary
pub const APP_OCTET_STREAM: &str = "application/octet-stream";

// audio
pub const AUDIO_MIDI: &str = "audio/midi";
pub const AUDIO_MP3: &str = "audio/mpeg";
pub const AUDIO_OGG: &str = "audio/ogg";
pub const AUDIO_M4A: &str = "audio/x-m4a";
pub const AUDIO_REAL_AUDIO: &str = "audio/x-realaudio";

// video
pub const VIDEO_3GPP: &str = "video/3gpp";
pub const VIDEO_MP2T: &str = "video/mp2t";
pub const VIDEO_MP4: &str = "video/mp4";
pub const VIDEO_MPEG: &str = "video/mpeg";
pub const VIDEO_QUICKTIME: &str = "video/quicktime";
pub const VIDEO_WEBM: &str = "video/webm";
pub const VIDEO_FLV: &str = "video/x-flv";
pub const VIDEO_M4V: &str = "video/x-m4v";
pub const VIDEO_MNG: &str = "video/x-mng";
pub const VIDEO_MS_ASF: &str = "video/x-ms-asf";
pub const VIDEO_MS_WMV: &str = "video/x-ms-wmv";
pub const VIDEO_MS_VIDEO: &str = "video/x-msvideo";

/// Returned by forward lookups when nothing matches.
pub const DEFAULT_MIME_TYPE: &str = APP_OCTET_STREAM;
