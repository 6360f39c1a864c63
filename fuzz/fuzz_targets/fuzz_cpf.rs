#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; masking must not change the verdict.
        let verdict = intake::core::validate_cpf(s);
        let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() == 11 {
            assert_eq!(intake::core::validate_cpf(&intake::core::format_cpf(s)), verdict);
        }
    }
});
