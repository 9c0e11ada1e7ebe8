#![no_main]

use libfuzzer_sys::fuzz_target;
use mediatype::{format_media_type, MediaType, MutableMediaType};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(mt) = MutableMediaType::parse(s) {
            // Decoded parameters are always writable, whatever the type part holds
            let params = format_media_type("", mt.parameters()).expect("decoded parameters must format");
            let (_, again) = mediatype::parse_media_type(&params).expect("formatted parameters must parse");
            assert_eq!(&again, mt.parameters());

            if let Ok(header) = mt.format() {
                let again = MutableMediaType::parse(&header).expect("formatted header must parse");
                assert_eq!(again, mt);
            }
        }
    }
});
