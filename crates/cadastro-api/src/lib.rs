//! cadastro-api
//!
//! Client side of the remote customer service. Blocking HTTP calls over
//! `ureq`, wrapped in an async [`service::CustomerService`] for the session.

pub mod client;
pub mod customers;
pub mod error;
pub mod routes;
pub mod service;
