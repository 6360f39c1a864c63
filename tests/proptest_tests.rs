//! Property-based tests for the masks and the CPF checksum.
//!
//! Run with: `cargo test --test proptest_tests`

#![cfg(feature = "core")]

use intake::core::*;
use proptest::prelude::*;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Nine body digits, not all identical.
fn arb_cpf_body() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..10, 9).prop_filter("repeated digits", |d| {
        d.iter().any(|&x| x != d[0])
    })
}

/// A CPF with correct check digits.
fn arb_valid_cpf() -> impl Strategy<Value = String> {
    arb_cpf_body().prop_map(|mut digits| {
        digits.push(check_digit(&digits));
        digits.push(check_digit(&digits));
        digits.iter().map(|d| char::from_digit(*d, 10).unwrap()).collect()
    })
}

fn arb_mask() -> impl Strategy<Value = Mask> {
    prop_oneof![Just(Mask::CPF), Just(Mask::RG), Just(Mask::CEP)]
}

// ── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn valid_cpf_accepted(cpf in arb_valid_cpf()) {
        prop_assert!(validate_cpf(&cpf));
        prop_assert!(validate_cpf(&format_cpf(&cpf)));
    }

    #[test]
    fn check_digit_mutation_rejected(cpf in arb_valid_cpf(), pos in 9usize..11, delta in 1u32..10) {
        let mut digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();
        digits[pos] = (digits[pos] + delta) % 10;
        let mutated: String = digits.iter().map(|d| char::from_digit(*d, 10).unwrap()).collect();
        prop_assert!(!validate_cpf(&mutated));
    }

    #[test]
    fn repeated_digits_rejected(d in 0u32..10) {
        let cpf: String = std::iter::repeat_n(char::from_digit(d, 10).unwrap(), 11).collect();
        prop_assert!(!validate_cpf(&cpf));
    }

    #[test]
    fn wrong_length_rejected(digits in "[0-9]{0,10}|[0-9]{12,20}") {
        prop_assert!(!validate_cpf(&digits));
    }

    #[test]
    fn format_is_idempotent(mask in arb_mask(), input in "\\PC{0,30}") {
        let once = mask.apply(&input);
        prop_assert_eq!(mask.apply(&once), once);
    }

    #[test]
    fn unmask_inverts_format(mask in arb_mask(), seed in "[0-9]{20}") {
        let canonical = &seed[..mask.canonical_len];
        let masked = mask.apply(canonical);
        prop_assert_eq!(masked.len(), mask.masked_len());
        prop_assert!(mask.is_complete(&masked));
        prop_assert_eq!(unmask(&masked), canonical);
    }

    #[test]
    fn masked_output_never_ends_in_separator(mask in arb_mask(), input in "[0-9.\\- ]{0,20}") {
        let out = mask.apply(&input);
        prop_assert!(!out.ends_with('.') && !out.ends_with('-'));
        prop_assert!(out.len() <= mask.masked_len());
    }

    #[test]
    fn validate_never_panics(input in "\\PC{0,40}") {
        let _ = validate_cpf(&input);
    }
}
