use chrono::NaiveDate;
use intake::client::{ApiClient, ApiConfig};
use intake::core::Field;
use intake::form::{RegistrationForm, SubmitOutcome};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // INTAKE_API_BASE_URL / INTAKE_API_PATH / INTAKE_API_TIMEOUT_SECS
    let config = ApiConfig::from_env()?;
    let client = ApiClient::new(&config)?;
    println!("Posting to {}", client.endpoint());

    let mut form = RegistrationForm::new();
    form.input(Field::Name, "Maria da Silva");
    form.input(Field::Email, "maria@example.com");
    form.input(Field::Cpf, "52998224725");
    form.input(Field::Rg, "123456789");
    form.input(Field::RgIssuingAuthority, "SSP");
    form.input(Field::Address, "Rua das Flores, 100");
    form.input(Field::State, "SP");
    form.input(Field::City, "São Paulo");
    form.input(Field::Cep, "01310930");
    form.input(Field::Cell, "11 98765-4321");
    form.set_phone_type("1");
    form.set_terms_accepted(true);

    // First attempt: no date of birth yet
    let outcome = form.submit(&client).await;
    println!(
        "Without date of birth: {outcome:?} (picker: {})",
        form.date_picker_style().css_class()
    );

    form.set_day_of_birth(NaiveDate::from_ymd_opt(1990, 3, 7));
    match form.submit(&client).await {
        SubmitOutcome::Submitted(record) => println!("Registered {}", record.name),
        other => println!("Not registered: {other:?}"),
    }
    if let Some(title) = form.modal().title() {
        println!("Modal: {title}");
    }

    Ok(())
}
