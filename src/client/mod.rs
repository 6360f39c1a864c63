//! HTTP submission of registration records.
//!
//! Posts the canonical [`RegistrationRecord`](crate::core::RegistrationRecord)
//! as JSON to a configurable endpoint. Any 2xx answer is success.
//!
//! # Example
//!
//! ```ignore
//! use intake::client::*;
//!
//! let config = ApiConfig::from_env()?;
//! let client = ApiClient::new(&config)?;
//! client.post_record(&record).await?;
//! ```

mod api;
mod config;

pub use api::ApiClient;
pub use config::{
    API_BASE_URL_VAR, API_PATH_VAR, API_TIMEOUT_VAR, ApiConfig, DEFAULT_BASE_URL, DEFAULT_PATH,
};
