#![no_main]

use libfuzzer_sys::fuzz_target;
use mime_table::*;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mime = mime_type_for_extension(s);
        let _ = mime_type_for_url(s);
        let _ = mime_type_for_path(s);

        // Whatever the forward lookup returns must resolve back to an extension
        assert!(!extension_for_mime_type(mime).is_empty());
        let _ = extension_name_for_mime_type(s);
    }
});
