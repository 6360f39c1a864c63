#![cfg(feature = "form")]

use std::future::Future;
use std::sync::Mutex;

use chrono::NaiveDate;
use intake::core::*;
use intake::form::*;

/// Sink that records every record it is handed.
#[derive(Default)]
struct RecordingSink {
    calls: Mutex<Vec<RegistrationRecord>>,
    fail: bool,
}

impl RecordingSink {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<RegistrationRecord> {
        self.calls.lock().unwrap().clone()
    }
}

impl RegistrationSink for RecordingSink {
    fn submit(
        &self,
        record: &RegistrationRecord,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send {
        self.calls.lock().unwrap().push(record.clone());
        let result = if self.fail {
            Err(SubmitError::Network("connection refused".into()))
        } else {
            Ok(())
        };
        std::future::ready(result)
    }
}

/// Fill every field the way a user would, without the date of birth.
fn filled_form() -> RegistrationForm {
    let mut form = RegistrationForm::new();
    form.input(Field::Name, "Ana Beatriz Costa");
    form.input(Field::Email, "ana.costa@example.com");
    form.input(Field::Cpf, "529.982.2472");
    form.input(Field::Cpf, "529.982.247-25");
    form.input(Field::Rg, "123456789");
    form.input(Field::RgIssuingAuthority, "SSP");
    form.input(Field::Address, "Rua Augusta, 500");
    form.input(Field::State, "SP");
    form.input(Field::City, "São Paulo");
    form.input(Field::Cep, "01310930");
    form.input(Field::Cell, "11 3333-4444");
    form.set_phone_type(PhoneType::MOBILE_VALUE);
    form.set_terms_accepted(true);
    form
}

fn birthday() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1992, 4, 18)
}

#[tokio::test]
async fn missing_day_of_birth_blocks_submit() {
    let sink = RecordingSink::default();
    let mut form = filled_form();
    assert_eq!(form.date_picker_style(), DatePickerStyle::Neutral);

    let outcome = form.submit(&sink).await;

    assert_eq!(outcome, SubmitOutcome::MissingDate);
    assert!(sink.calls().is_empty());
    assert!(form.attempted());
    assert_eq!(form.date_picker_style(), DatePickerStyle::Invalid);
    assert_eq!(form.date_picker_style().css_class(), "form-control is-invalid");
    assert_eq!(form.modal(), Modal::None);
    // pickers report through their style, not the field state
    assert_eq!(form.field_state(Field::DayOfBirth), FieldState::Untouched);
    assert_eq!(form.field_state(Field::RgIssuingDate), FieldState::Untouched);
}

#[tokio::test]
async fn picking_the_date_after_blocked_submit_turns_pickers_valid() {
    let sink = RecordingSink::default();
    let mut form = filled_form();
    form.submit(&sink).await;

    form.set_day_of_birth(birthday());
    assert_eq!(form.date_picker_style(), DatePickerStyle::Valid);

    let outcome = form.submit(&sink).await;
    assert!(matches!(outcome, SubmitOutcome::Submitted(_)));
    assert_eq!(sink.calls().len(), 1);
}

#[tokio::test]
async fn schema_errors_block_submit_before_date_check() {
    let sink = RecordingSink::default();
    let mut form = RegistrationForm::new();

    let SubmitOutcome::Invalid(errors) = form.submit(&sink).await else {
        panic!("empty form must fail the schema");
    };

    assert!(errors.contains(Field::Name));
    assert!(errors.contains(Field::TermsAccepted));
    assert!(sink.calls().is_empty());
    // the date check never ran
    assert!(!form.attempted());
    // submit touches every field
    assert_eq!(
        form.field_state(Field::Email),
        FieldState::Invalid("email is a required field".into())
    );
    assert_eq!(form.field_state(Field::Cell), FieldState::Valid);
}

#[tokio::test]
async fn successful_submit_sends_canonical_record() {
    let sink = RecordingSink::default();
    let mut form = filled_form();
    form.set_day_of_birth(birthday());

    let outcome = form.submit(&sink).await;

    let calls = sink.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(outcome, SubmitOutcome::Submitted(calls[0].clone()));
    let record = &calls[0];
    assert_eq!(record.cpf, "52998224725");
    assert_eq!(record.rg, "123456789");
    assert_eq!(record.cep, "01310930");
    assert!(record.mobile_phone);
    assert_eq!(record.rg_issuing_date, None);
    assert_eq!(form.modal(), Modal::Success);

    form.close_modal();
    assert_eq!(form.modal(), Modal::None);
}

#[tokio::test]
async fn failed_submit_opens_error_modal_without_retry() {
    let sink = RecordingSink::failing();
    let mut form = filled_form();
    form.set_day_of_birth(birthday());

    let outcome = form.submit(&sink).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(sink.calls().len(), 1);
    assert_eq!(form.modal(), Modal::Error);
}

#[tokio::test]
async fn double_submit_is_not_guarded() {
    let sink = RecordingSink::default();
    let mut form = filled_form();
    form.set_day_of_birth(birthday());

    form.submit(&sink).await;
    form.submit(&sink).await;

    assert_eq!(sink.calls().len(), 2);
}

#[tokio::test]
async fn landline_selection_fails_phone_type_rule() {
    let sink = RecordingSink::default();
    let mut form = filled_form();
    form.set_day_of_birth(birthday());
    form.set_phone_type(PhoneType::LANDLINE_VALUE);

    let SubmitOutcome::Invalid(errors) = form.submit(&sink).await else {
        panic!("empty radio value must fail");
    };
    assert_eq!(
        errors.get(Field::PhoneType),
        Some("mobilephone is a required field")
    );
}

#[tokio::test]
async fn untouched_phone_type_submits_as_landline() {
    let sink = RecordingSink::default();
    let mut form = filled_form();
    form.set_phone_type(PhoneType::INITIAL_VALUE);
    form.set_day_of_birth(birthday());

    form.submit(&sink).await;

    assert!(!sink.calls()[0].mobile_phone);
}

#[test]
fn typing_past_mask_length_is_truncated() {
    let mut form = RegistrationForm::new();
    form.input(Field::Cep, "01310-9301");
    assert_eq!(form.input_values().cep, "01310-930");
}

#[test]
fn touched_field_revalidates_on_change() {
    let mut form = RegistrationForm::new();
    form.input(Field::Cpf, "52998224724");
    form.blur(Field::Cpf);
    assert_eq!(
        form.field_state(Field::Cpf),
        FieldState::Invalid("invalid CPF".into())
    );
    form.input(Field::Cpf, "52998224725");
    assert_eq!(form.field_state(Field::Cpf), FieldState::Valid);
}
