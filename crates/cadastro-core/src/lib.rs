//! cadastro-core
//!
//! Pure domain types for the customer registry: records, the create payload,
//! the raw input form and date transforms. No HTTP or runtime dependency.

pub mod dates;
pub mod error;
pub mod form;
pub mod models;
