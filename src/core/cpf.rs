//! CPF (Cadastro de Pessoas Físicas) checksum validation.

const CPF_LENGTH: usize = 11;

/// Validate a CPF, masked or not.
///
/// Non-digits are ignored. The remaining digits must be exactly 11, not
/// all identical, and end in the two mod-11 check digits.
pub fn validate_cpf(cpf: &str) -> bool {
    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != CPF_LENGTH {
        return false;
    }

    // 000.000.000-00, 111.111.111-11, ... pass the checksum but are invalid
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Compute the next CPF check digit for `digits`.
///
/// Weights run from `digits.len() + 1` down to 2. The sum is reduced mod 11
/// as it goes, so any slice length is accepted.
pub fn check_digit(digits: &[u32]) -> u32 {
    let top = digits.len() + 1;
    let rem = digits.iter().enumerate().fold(0u32, |acc, (i, &d)| {
        let weight = ((top - i) % 11) as u32;
        (acc + (d % 11) * weight) % 11
    });
    match rem {
        r if r < 2 => 0,
        r => 11 - r,
    }
}
