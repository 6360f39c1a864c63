//! Core intake types, masks, CPF validation, and the field schema.
//!
//! Everything here is pure and synchronous. The only seam towards the
//! network is the [`RegistrationSink`] trait.

mod builder;
mod cpf;
pub mod date;
mod error;
mod mask;
mod sink;
mod types;
mod validation;

pub use builder::*;
pub use cpf::*;
pub use date::{DISPLAY_FORMAT, format_display_date, parse_display_date};
pub use error::*;
pub use mask::*;
pub use sink::*;
pub use types::*;
pub use validation::*;
