use std::sync::LazyLock;

use regex::Regex;

use super::cpf::validate_cpf;
use super::error::{FieldErrors, IntakeError};
use super::mask::Mask;
use super::types::{Field, FormInput, RegistrationRecord};

/// Dot-atom local part, dotted domain, alphabetic top-level label.
static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^",
        r"[a-z0-9!#$%&'*+\-/=?^_`{|}~\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]+",
        r"(?:\.[a-z0-9!#$%&'*+\-/=?^_`{|}~\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]+)*",
        r"@",
        r"(?:[a-z0-9\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]",
        r"(?:[a-z0-9\-._~\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]*[a-z0-9\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])?\.)+",
        r"[a-z\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]",
        r"(?:[a-z0-9\-._~\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]*[a-z\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])?",
        r"$",
    ))
    .ok()
});

/// Validate every field of the form.
/// Returns one message per failing field (the first rule that failed).
///
/// Date pickers are not part of the schema; see [`check_required_dates`].
pub fn validate(input: &FormInput) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in Field::ALL {
        if let Some(message) = validate_field(input, field) {
            errors.insert(field, message);
        }
    }
    errors
}

/// Validate a single field, e.g. when it loses focus.
pub fn validate_field(input: &FormInput, field: Field) -> Option<String> {
    match field {
        Field::Name => {
            let v = &input.name;
            required(field, v).or_else(|| min_chars(field, v, 3))
        }
        Field::Email => {
            let v = &input.email;
            required(field, v).or_else(|| email(field, v))
        }
        Field::Cpf => {
            let v = &input.cpf;
            let len = Mask::CPF.masked_len();
            required(field, v)
                .or_else(|| min_chars(field, v, len))
                .or_else(|| max_chars(field, v, len))
                .or_else(|| (!validate_cpf(v)).then(|| "invalid CPF".to_string()))
        }
        Field::Rg => {
            let v = &input.rg;
            let len = Mask::RG.masked_len();
            required(field, v)
                .or_else(|| min_chars(field, v, len))
                .or_else(|| max_chars(field, v, len))
        }
        Field::RgIssuingAuthority => {
            let v = &input.rg_issuing_authority;
            required(field, v)
                .or_else(|| min_chars(field, v, 2))
                .or_else(|| max_chars(field, v, 3))
        }
        Field::Address => {
            let v = &input.address;
            required(field, v).or_else(|| min_chars(field, v, 5))
        }
        Field::City => required(field, &input.city),
        Field::State => required(field, &input.state),
        Field::Cep => {
            let v = &input.cep;
            let len = Mask::CEP.masked_len();
            required(field, v)
                .or_else(|| min_chars(field, v, len))
                .or_else(|| max_chars(field, v, len))
        }
        // Only presence is checked: the landline option carries an empty
        // value and therefore never passes.
        Field::PhoneType => required(field, &input.phone_type),
        Field::TermsAccepted => (!input.terms_accepted)
            .then(|| format!("{field} must be one of the following values: true")),
        Field::Cell | Field::DayOfBirth | Field::RgIssuingDate => None,
    }
}

/// Check the date pickers. Only the date of birth is required.
pub fn check_required_dates(input: &FormInput) -> Result<(), IntakeError> {
    if input.day_of_birth.is_none() {
        return Err(IntakeError::MissingDate(Field::DayOfBirth));
    }
    Ok(())
}

/// Run the schema and the date check, then canonicalize the input.
///
/// # Errors
///
/// `IntakeError::Validation` with every failing field, or
/// `IntakeError::MissingDate` when the schema passes without a date of birth.
pub fn prepare_submission(input: &FormInput) -> Result<RegistrationRecord, IntakeError> {
    let errors = validate(input);
    if !errors.is_empty() {
        return Err(IntakeError::Validation(errors));
    }
    check_required_dates(input)?;
    RegistrationRecord::from_input(input)
}

/// Whether `value` looks like an email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}

// Whitespace-only counts as present.
fn required(field: Field, value: &str) -> Option<String> {
    value
        .is_empty()
        .then(|| format!("{field} is a required field"))
}

fn min_chars(field: Field, value: &str, min: usize) -> Option<String> {
    (value.chars().count() < min).then(|| format!("{field} must be at least {min} characters"))
}

fn max_chars(field: Field, value: &str, max: usize) -> Option<String> {
    (value.chars().count() > max).then(|| format!("{field} must be at most {max} characters"))
}

fn email(field: Field, value: &str) -> Option<String> {
    (!is_valid_email(value)).then(|| format!("{field} must be a valid email"))
}
