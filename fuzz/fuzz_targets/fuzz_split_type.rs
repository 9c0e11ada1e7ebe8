#![no_main]

use libfuzzer_sys::fuzz_target;
use mediatype::{split_type, MediaType};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mt = split_type(s);
        // Splitting a rebuilt type part gives the same components back
        let rebuilt = split_type(&mt.full_type());
        assert_eq!(rebuilt, mt);
    }
});
