use std::future::Future;

use super::error::SubmitError;
use super::types::RegistrationRecord;

/// Destination for a finished registration.
///
/// Implemented by the HTTP client; tests plug in recording fakes.
/// A single call per submit attempt, no retry.
pub trait RegistrationSink {
    fn submit(
        &self,
        record: &RegistrationRecord,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send;
}

