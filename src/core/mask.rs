//! As-you-type masks for fixed-length digit identifiers.

/// Characters removed by [`unmask`] before a record is transmitted.
pub const SEPARATORS: [char; 2] = ['.', '-'];

/// A fixed display mask over a canonical digit string.
///
/// Each separator is placed after a given number of digits. A separator is
/// only written once a digit follows it, so partial input never ends in
/// punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    /// Number of digits in the canonical form.
    pub canonical_len: usize,
    /// `(digits_before, separator)` pairs, ascending by position.
    pub separators: &'static [(usize, char)],
}

impl Mask {
    /// CPF: `000.000.000-00`.
    pub const CPF: Self = Self {
        canonical_len: 11,
        separators: &[(3, '.'), (6, '.'), (9, '-')],
    };
    /// RG: `00.000.000-0`.
    pub const RG: Self = Self {
        canonical_len: 9,
        separators: &[(2, '.'), (5, '.'), (8, '-')],
    };
    /// CEP: `00000-000`.
    pub const CEP: Self = Self {
        canonical_len: 8,
        separators: &[(5, '-')],
    };

    /// Length of a complete masked value.
    pub const fn masked_len(&self) -> usize {
        self.canonical_len + self.separators.len()
    }

    /// Format `input`, ignoring any non-digit and truncating extra digits.
    pub fn apply(&self, input: &str) -> String {
        let mut out = String::with_capacity(self.masked_len());
        let mut seps = self.separators.iter().peekable();
        let digits = input
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(self.canonical_len);

        for (written, digit) in digits.enumerate() {
            while let Some(&&(pos, sep)) = seps.peek() {
                if pos != written {
                    break;
                }
                out.push(sep);
                seps.next();
            }
            out.push(digit);
        }
        out
    }

    /// Whether `value` is a complete, well-formed masked value.
    pub fn is_complete(&self, value: &str) -> bool {
        value.len() == self.masked_len() && self.apply(value) == value
    }
}

/// Format a CPF as the user types (`52998224725` → `529.982.247-25`).
pub fn format_cpf(input: &str) -> String {
    Mask::CPF.apply(input)
}

/// Format an RG as the user types (`123456789` → `12.345.678-9`).
pub fn format_rg(input: &str) -> String {
    Mask::RG.apply(input)
}

/// Format a CEP as the user types (`01310930` → `01310-930`).
pub fn format_cep(input: &str) -> String {
    Mask::CEP.apply(input)
}

/// Strip mask punctuation, returning the canonical form.
pub fn unmask(value: &str) -> String {
    value.chars().filter(|c| !SEPARATORS.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_full() {
        assert_eq!(format_cpf("52998224725"), "529.982.247-25");
    }

    #[test]
    fn cpf_partial_has_no_trailing_separator() {
        assert_eq!(format_cpf("529"), "529");
        assert_eq!(format_cpf("5299"), "529.9");
        assert_eq!(format_cpf("529982247"), "529.982.247");
        assert_eq!(format_cpf("5299822472"), "529.982.247-2");
    }

    #[test]
    fn cpf_truncates_extra_digits() {
        assert_eq!(format_cpf("529982247251234"), "529.982.247-25");
    }

    #[test]
    fn rg_full() {
        assert_eq!(format_rg("123456789"), "12.345.678-9");
    }

    #[test]
    fn cep_reformats_previous_pass() {
        // user deletes a digit in the middle of an already masked value
        assert_eq!(format_cep("0131-0930"), "01310-930");
    }

    #[test]
    fn non_digits_dropped() {
        assert_eq!(format_cep("ab01c310 930"), "01310-930");
        assert_eq!(format_cpf(""), "");
    }

    #[test]
    fn masked_lengths() {
        assert_eq!(Mask::CPF.masked_len(), 14);
        assert_eq!(Mask::RG.masked_len(), 12);
        assert_eq!(Mask::CEP.masked_len(), 9);
    }

    #[test]
    fn completeness() {
        assert!(Mask::CEP.is_complete("01310-930"));
        assert!(!Mask::CEP.is_complete("01310930"));
        assert!(!Mask::CEP.is_complete("0131-0930"));
    }

    #[test]
    fn unmask_strips_dots_and_dashes() {
        assert_eq!(unmask("529.982.247-25"), "52998224725");
        assert_eq!(unmask("01310-930"), "01310930");
        assert_eq!(unmask("12.345.678-9"), "123456789");
    }
}
