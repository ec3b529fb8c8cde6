//! Form controller: the six inputs plus the submit state machine.
//!
//! ```text
//!            submit (valid)            create ok
//! Editing ─────────────────► Submitting ─────────► Editing (inputs cleared)
//!    ▲  │ submit (missing)        │
//!    │  └──► Editing + field      │ create failed
//!    │       errors               ▼
//!    └──── edit / submit ◄──── Error(message)  (inputs kept)
//! ```
//!
//! The controller does no I/O. The session calls [`FormController::begin_submit`]
//! before the network call and [`FormController::finish_submit`] after it.

use serde::Serialize;
use tracing::{debug, warn};

use cadastro_api::error::ApiError;
use cadastro_core::error::MissingFields;
use cadastro_core::form::{CustomerForm, Field};
use cadastro_core::models::customer::{CustomerRecord, NewCustomer};

use crate::store::RecordStore;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum FormState {
    #[default]
    Editing,
    Submitting,
    Error(String),
}

/// Why a submit did not reach the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A create request is already in flight.
    Busy,
    /// These fields are empty.
    Invalid(Vec<Field>),
}

#[derive(Debug, Clone, Default)]
pub struct FormController {
    form: CustomerForm,
    state: FormState,
    field_errors: Vec<Field>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &CustomerForm {
        &self.form
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Fields flagged by the last rejected submit.
    pub fn field_errors(&self) -> &[Field] {
        &self.field_errors
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// Update one input. Ignored while a submit is in flight. Editing a
    /// flagged field clears its flag, and any edit leaves the error state.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.is_submitting() {
            debug!(%field, "edit ignored while submitting");
            return false;
        }
        self.form.set(field, value);
        if !self.form.get(field).trim().is_empty() {
            self.field_errors.retain(|f| *f != field);
        }
        if matches!(self.state, FormState::Error(_)) {
            self.state = FormState::Editing;
        }
        true
    }

    /// Reset the inputs. Ignored while a submit is in flight.
    pub fn clear(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.form.clear();
        self.field_errors.clear();
        self.state = FormState::Editing;
        true
    }

    /// Validate and transform. On success the form is `Submitting` and the
    /// returned payload should be sent.
    pub fn begin_submit(&mut self) -> Result<NewCustomer, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::Busy);
        }

        match self.form.to_new_customer() {
            Ok(payload) => {
                if payload.date_of_birth.is_none() {
                    warn!(
                        raw = %self.form.date_of_birth,
                        "date of birth not understood; submitting null"
                    );
                }
                self.field_errors.clear();
                self.state = FormState::Submitting;
                Ok(payload)
            }
            Err(MissingFields(fields)) => {
                debug!(missing = ?fields, "submit rejected");
                self.field_errors = fields.clone();
                self.state = FormState::Editing;
                Err(SubmitRejected::Invalid(fields))
            }
        }
    }

    /// Reconcile the outcome of a create request. Success appends to the
    /// store and clears the inputs; failure keeps both untouched.
    pub fn finish_submit(
        &mut self,
        result: Result<CustomerRecord, ApiError>,
        store: &mut RecordStore,
    ) -> Result<CustomerRecord, String> {
        match result {
            Ok(record) => {
                store.append(record.clone());
                self.form.clear();
                self.field_errors.clear();
                self.state = FormState::Editing;
                Ok(record)
            }
            Err(e) => {
                let message = e.to_string();
                self.state = FormState::Error(message.clone());
                Err(message)
            }
        }
    }
}
