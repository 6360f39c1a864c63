//! Headless registration form session.
//!
//! Holds what the rendering layer would otherwise keep in component state:
//! the masked field values, which fields were touched, whether a submit was
//! attempted without a date, and which result modal is open.

mod session;

pub use session::{DatePickerStyle, FieldState, Modal, RegistrationForm, SubmitOutcome};
