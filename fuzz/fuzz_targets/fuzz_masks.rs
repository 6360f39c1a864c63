#![no_main]

use intake::core::{Mask, unmask};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for mask in [Mask::CPF, Mask::RG, Mask::CEP] {
            let once = mask.apply(s);
            assert_eq!(mask.apply(&once), once);
            assert!(once.len() <= mask.masked_len());
            assert!(unmask(&once).chars().all(|c| c.is_ascii_digit()));
        }
    }
});
