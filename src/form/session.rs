use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::core::{
    Field, FieldErrors, FormInput, IntakeError, RegistrationRecord, RegistrationSink, format_cep,
    format_cpf, format_rg, prepare_submission, validate_field,
};

/// Result modal currently on screen. Success and error never show together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    None,
    Success,
    Error,
}

impl Modal {
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Success => Some("Cadastro realizado com sucesso!"),
            Self::Error => Some("Erro ao cadastrar o cliente!"),
        }
    }
}

/// Visual state shared by both date pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePickerStyle {
    Neutral,
    Valid,
    Invalid,
}

impl DatePickerStyle {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Neutral => "form-control",
            Self::Valid => "form-control is-valid",
            Self::Invalid => "form-control is-invalid",
        }
    }
}

/// Inline feedback state of a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldState {
    Untouched,
    Valid,
    Invalid(String),
}

/// What a call to [`RegistrationForm::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Schema failed; nothing was sent.
    Invalid(FieldErrors),
    /// Schema passed but the date of birth is unset; nothing was sent.
    MissingDate,
    /// The sink accepted the record; the success modal is open.
    Submitted(RegistrationRecord),
    /// The sink failed; the error modal is open.
    Failed,
}

/// One registration form session.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    input: FormInput,
    touched: BTreeSet<Field>,
    errors: FieldErrors,
    attempted: bool,
    modal: Modal,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a session from existing input.
    pub fn with_input(input: FormInput) -> Self {
        Self {
            input,
            ..Self::default()
        }
    }

    pub fn input_values(&self) -> &FormInput {
        &self.input
    }

    /// Handle a change event on a text field. CPF, RG and CEP are masked
    /// before being stored. Returns the stored value.
    pub fn input(&mut self, field: Field, raw: &str) -> Option<&str> {
        let value = match field {
            Field::Cpf => format_cpf(raw),
            Field::Rg => format_rg(raw),
            Field::Cep => format_cep(raw),
            _ => raw.to_string(),
        };
        let slot = self.input.text_mut(field)?;
        *slot = value;
        self.revalidate_if_touched(field);
        self.input.text(field)
    }

    /// Select a phone type radio value (`"1"` mobile, `""` landline).
    pub fn set_phone_type(&mut self, value: impl Into<String>) {
        self.input.phone_type = value.into();
        self.revalidate_if_touched(Field::PhoneType);
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.input.terms_accepted = accepted;
        self.revalidate_if_touched(Field::TermsAccepted);
    }

    pub fn set_day_of_birth(&mut self, date: Option<NaiveDate>) {
        self.input.day_of_birth = date;
    }

    pub fn set_rg_issuing_date(&mut self, date: Option<NaiveDate>) {
        self.input.rg_issuing_date = date;
    }

    /// Handle a blur event: the field becomes touched and is validated.
    ///
    /// Date pickers are never touched; their state is [`Self::date_picker_style`].
    pub fn blur(&mut self, field: Field) {
        if is_date_picker(field) {
            return;
        }
        self.touched.insert(field);
        self.revalidate(field);
    }

    pub fn field_state(&self, field: Field) -> FieldState {
        if !self.touched.contains(&field) {
            return FieldState::Untouched;
        }
        match self.errors.get(field) {
            Some(message) => FieldState::Invalid(message.to_string()),
            None => FieldState::Valid,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether a submit was blocked for a missing date.
    pub fn attempted(&self) -> bool {
        self.attempted
    }

    pub fn date_picker_style(&self) -> DatePickerStyle {
        if !self.attempted {
            DatePickerStyle::Neutral
        } else if self.input.day_of_birth.is_some() || self.input.rg_issuing_date.is_some() {
            DatePickerStyle::Valid
        } else {
            DatePickerStyle::Invalid
        }
    }

    pub fn modal(&self) -> Modal {
        self.modal
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::None;
    }

    /// Run the submit flow: schema, required date, canonicalize, send once.
    ///
    /// Every failure is final for this attempt. There is no retry and no
    /// guard against submitting again while a request is in flight.
    pub async fn submit<S: RegistrationSink>(&mut self, sink: &S) -> SubmitOutcome {
        self.touched
            .extend(Field::ALL.into_iter().filter(|&f| !is_date_picker(f)));
        let record = match prepare_submission(&self.input) {
            Ok(record) => {
                self.errors = FieldErrors::new();
                record
            }
            Err(IntakeError::Validation(errors)) => {
                tracing::debug!(fields = %errors, "submit blocked by validation");
                self.errors = errors.clone();
                return SubmitOutcome::Invalid(errors);
            }
            Err(e) => {
                tracing::debug!(error = %e, "submit blocked");
                self.errors = FieldErrors::new();
                self.attempted = true;
                return SubmitOutcome::MissingDate;
            }
        };

        match sink.submit(&record).await {
            Ok(()) => {
                self.modal = Modal::Success;
                SubmitOutcome::Submitted(record)
            }
            Err(e) => {
                tracing::warn!(error = %e, "registration submission failed");
                self.modal = Modal::Error;
                SubmitOutcome::Failed
            }
        }
    }

    fn revalidate_if_touched(&mut self, field: Field) {
        if self.touched.contains(&field) {
            self.revalidate(field);
        }
    }

    fn revalidate(&mut self, field: Field) {
        self.errors.remove(field);
        if let Some(message) = validate_field(&self.input, field) {
            self.errors.insert(field, message);
        }
    }
}

fn is_date_picker(field: Field) -> bool {
    matches!(field, Field::DayOfBirth | Field::RgIssuingDate)
}
