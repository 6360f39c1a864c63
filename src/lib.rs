//! # intake
//!
//! Customer intake core: the field formatting and validation layer behind a
//! registration form, plus the pieces needed to submit the result.
//!
//! - CPF (Brazilian taxpayer ID) checksum validation
//! - as-you-type masks for CPF, RG and CEP, and their inverse
//! - an explicit field schema returning per-field error messages
//! - a headless form session and an HTTP client for the intake API
//!
//! ## Quick Start
//!
//! ```rust
//! use intake::core::*;
//!
//! assert!(validate_cpf("529.982.247-25"));
//! assert_eq!(format_cep("01310930"), "01310-930");
//! assert_eq!(unmask("529.982.247-25"), "52998224725");
//!
//! let input = FormInputBuilder::new()
//!     .name("Maria da Silva")
//!     .email("maria@example.com")
//!     .cpf("52998224725")
//!     .build();
//! let errors = validate(&input);
//! assert!(errors.get(Field::Cpf).is_none());
//! assert!(errors.get(Field::Rg).is_some());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Masks, CPF checksum, field schema, display dates |
//! | `client` | `reqwest` client and endpoint configuration |
//! | `form` | Headless form session (submit flow, modals) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "form")]
pub mod form;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
