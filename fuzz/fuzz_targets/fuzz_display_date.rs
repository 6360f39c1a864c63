#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(date) = intake::core::parse_display_date(s) {
            let shown = intake::core::format_display_date(date);
            assert_eq!(intake::core::parse_display_date(&shown).ok(), Some(date));
        }
    }
});
