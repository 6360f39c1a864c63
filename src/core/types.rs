use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::IntakeError;
use super::mask::unmask;

/// A field of the registration form, in on-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    DayOfBirth,
    Cpf,
    Rg,
    RgIssuingAuthority,
    RgIssuingDate,
    Address,
    State,
    City,
    Cep,
    Cell,
    PhoneType,
    TermsAccepted,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 14] = [
        Field::Name,
        Field::Email,
        Field::DayOfBirth,
        Field::Cpf,
        Field::Rg,
        Field::RgIssuingAuthority,
        Field::RgIssuingDate,
        Field::Address,
        Field::State,
        Field::City,
        Field::Cep,
        Field::Cell,
        Field::PhoneType,
        Field::TermsAccepted,
    ];

    /// Name used on the wire and in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::DayOfBirth => "dayofbirth",
            Self::Cpf => "cpf",
            Self::Rg => "rg",
            Self::RgIssuingAuthority => "rgissuingauthority",
            Self::RgIssuingDate => "rgissuingdate",
            Self::Address => "address",
            Self::State => "state",
            Self::City => "city",
            Self::Cep => "cep",
            Self::Cell => "cell",
            Self::PhoneType => "mobilephone",
            Self::TermsAccepted => "termosCondicoes",
        }
    }

    /// Look a field up by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Phone type radio. The radio carries sentinel string values rather than
/// the type itself: `"1"` means mobile, anything else is a landline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhoneType {
    Mobile,
    Landline,
}

impl PhoneType {
    /// Radio value of the "mobile" option.
    pub const MOBILE_VALUE: &'static str = "1";
    /// Radio value of the "landline" option.
    pub const LANDLINE_VALUE: &'static str = "";
    /// Radio value before the user touches the control.
    pub const INITIAL_VALUE: &'static str = "S";

    pub fn from_radio(value: &str) -> Self {
        if value == Self::MOBILE_VALUE {
            Self::Mobile
        } else {
            Self::Landline
        }
    }

    pub fn radio_value(&self) -> &'static str {
        match self {
            Self::Mobile => Self::MOBILE_VALUE,
            Self::Landline => Self::LANDLINE_VALUE,
        }
    }

    pub fn is_mobile(&self) -> bool {
        *self == Self::Mobile
    }
}

/// Raw form values as the user sees them (masked, untrimmed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    /// Masked CPF, e.g. "529.982.247-25".
    pub cpf: String,
    /// Masked RG, e.g. "12.345.678-9".
    pub rg: String,
    pub rg_issuing_authority: String,
    pub address: String,
    pub city: String,
    /// State (UF) as picked from the region list.
    pub state: String,
    /// Masked CEP, e.g. "01310-930".
    pub cep: String,
    /// Phone number, free text.
    pub cell: String,
    /// Phone type radio value, see [`PhoneType`].
    pub phone_type: String,
    pub terms_accepted: bool,
    pub day_of_birth: Option<NaiveDate>,
    pub rg_issuing_date: Option<NaiveDate>,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            cpf: String::new(),
            rg: String::new(),
            rg_issuing_authority: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            cep: String::new(),
            cell: String::new(),
            phone_type: PhoneType::INITIAL_VALUE.to_string(),
            terms_accepted: false,
            day_of_birth: None,
            rg_issuing_date: None,
        }
    }
}

impl FormInput {
    /// Text value of a field, `None` for non-text fields.
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Cpf => &self.cpf,
            Field::Rg => &self.rg,
            Field::RgIssuingAuthority => &self.rg_issuing_authority,
            Field::Address => &self.address,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::Cep => &self.cep,
            Field::Cell => &self.cell,
            Field::DayOfBirth | Field::RgIssuingDate | Field::PhoneType | Field::TermsAccepted => {
                return None;
            }
        };
        Some(value)
    }

    /// Mutable text value of a field, `None` for non-text fields.
    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        let value = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Cpf => &mut self.cpf,
            Field::Rg => &mut self.rg,
            Field::RgIssuingAuthority => &mut self.rg_issuing_authority,
            Field::Address => &mut self.address,
            Field::City => &mut self.city,
            Field::State => &mut self.state,
            Field::Cep => &mut self.cep,
            Field::Cell => &mut self.cell,
            Field::DayOfBirth | Field::RgIssuingDate | Field::PhoneType | Field::TermsAccepted => {
                return None;
            }
        };
        Some(value)
    }

    pub fn phone(&self) -> PhoneType {
        PhoneType::from_radio(&self.phone_type)
    }
}

/// The payload sent to the intake API.
///
/// Identifier fields are canonical (digits only). Serialized field names
/// match what the API expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub rg: String,
    #[serde(rename = "rgissuingauthority")]
    pub rg_issuing_authority: String,
    #[serde(rename = "rgissuingdate")]
    pub rg_issuing_date: Option<NaiveDate>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub cep: String,
    #[serde(rename = "dayofbirth")]
    pub day_of_birth: NaiveDate,
    pub cell: String,
    #[serde(rename = "mobilephone")]
    pub mobile_phone: bool,
    #[serde(rename = "termosCondicoes")]
    pub terms_accepted: bool,
}

impl RegistrationRecord {
    /// Canonicalize form input into a record.
    ///
    /// Does not run the field schema; callers validate first. Fails only
    /// when the date of birth is unset.
    pub fn from_input(input: &FormInput) -> Result<Self, IntakeError> {
        let day_of_birth = input
            .day_of_birth
            .ok_or(IntakeError::MissingDate(Field::DayOfBirth))?;

        let record = Self {
            name: input.name.clone(),
            email: input.email.clone(),
            cpf: unmask(&input.cpf),
            rg: unmask(&input.rg),
            rg_issuing_authority: input.rg_issuing_authority.clone(),
            rg_issuing_date: input.rg_issuing_date,
            address: input.address.clone(),
            city: input.city.clone(),
            state: input.state.clone(),
            cep: unmask(&input.cep),
            day_of_birth,
            cell: input.cell.clone(),
            mobile_phone: input.phone().is_mobile(),
            terms_accepted: input.terms_accepted,
        };
        tracing::debug!(
            cpf_len = record.cpf.len(),
            cep_len = record.cep.len(),
            "canonicalized registration record"
        );
        Ok(record)
    }
}
