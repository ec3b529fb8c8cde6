//! cadastro-app library root.
//!
//! The record store, form controller and session live here so that the
//! terminal front end and the integration tests drive the same code.

pub mod config;
pub mod controller;
pub mod render;
pub mod session;
pub mod store;
