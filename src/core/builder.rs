use chrono::NaiveDate;

use super::mask::{format_cep, format_cpf, format_rg};
use super::types::FormInput;

/// Builder for form input, mostly for tests and programmatic intake.
///
/// Identifier setters run the field mask, exactly as typing into the form
/// would.
///
/// ```
/// use intake::core::*;
///
/// let input = FormInputBuilder::new()
///     .cpf("52998224725")
///     .cep("01310930")
///     .build();
/// assert_eq!(input.cpf, "529.982.247-25");
/// assert_eq!(input.cep, "01310-930");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormInputBuilder {
    input: FormInput,
}

impl FormInputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.input.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.input.email = email.into();
        self
    }

    pub fn cpf(mut self, cpf: &str) -> Self {
        self.input.cpf = format_cpf(cpf);
        self
    }

    pub fn rg(mut self, rg: &str) -> Self {
        self.input.rg = format_rg(rg);
        self
    }

    pub fn rg_issuing_authority(mut self, authority: impl Into<String>) -> Self {
        self.input.rg_issuing_authority = authority.into();
        self
    }

    pub fn rg_issuing_date(mut self, date: NaiveDate) -> Self {
        self.input.rg_issuing_date = Some(date);
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.input.address = address.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.input.city = city.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.input.state = state.into();
        self
    }

    pub fn cep(mut self, cep: &str) -> Self {
        self.input.cep = format_cep(cep);
        self
    }

    pub fn cell(mut self, cell: impl Into<String>) -> Self {
        self.input.cell = cell.into();
        self
    }

    /// Raw radio value: `"1"` for mobile, `""` for landline.
    pub fn phone_type(mut self, value: impl Into<String>) -> Self {
        self.input.phone_type = value.into();
        self
    }

    pub fn terms_accepted(mut self, accepted: bool) -> Self {
        self.input.terms_accepted = accepted;
        self
    }

    pub fn day_of_birth(mut self, date: NaiveDate) -> Self {
        self.input.day_of_birth = Some(date);
        self
    }

    pub fn build(self) -> FormInput {
        self.input
    }
}
