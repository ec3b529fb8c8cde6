//! The owned state of one client session and the three network workflows
//! that mutate it.
//!
//! State sits behind a mutex that is never held across a service call: each
//! workflow locks to prepare, releases, awaits the service, then locks again
//! to reconcile. Remote failures are logged and kept as the session notice;
//! they never escape as errors.

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};

use cadastro_api::service::CustomerService;
use cadastro_core::form::{CustomerForm, Field};
use cadastro_core::models::customer::{CustomerId, CustomerRecord};

use crate::controller::{FormController, FormState, SubmitRejected};
use crate::store::RecordStore;

/// Load/delete traffic. Submits are tracked by [`FormState`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "activity", content = "id", rename_all = "snake_case")]
pub enum Activity {
    #[default]
    Idle,
    Loading,
    Deleting(CustomerId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The store now holds this many records.
    Loaded(usize),
    Failed(String),
    Busy,
    /// The session was closed before the response arrived.
    Discarded,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(CustomerRecord),
    /// Nothing was sent; these fields are empty.
    Invalid(Vec<Field>),
    Busy,
    Failed(String),
    Discarded,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted,
    Failed(String),
    Busy,
    Discarded,
}

/// Point-in-time copy of everything a front end renders.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub records: Vec<CustomerRecord>,
    pub form: CustomerForm,
    pub form_state: FormState,
    pub field_errors: Vec<Field>,
    pub activity: Activity,
    pub notice: Option<String>,
}

#[derive(Debug, Default)]
struct SessionState {
    store: RecordStore,
    form: FormController,
    activity: Activity,
    notice: Option<String>,
    closed: bool,
}

pub struct Session<S> {
    service: S,
    state: Mutex<SessionState>,
}

impl<S: CustomerService> Session<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: Mutex::new(SessionState::default()),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Replace the store with the service's listing. On failure the store
    /// keeps whatever it held before.
    #[instrument(skip(self))]
    pub async fn load(&self) -> LoadOutcome {
        {
            let mut state = self.state.lock().await;
            if state.closed {
                return LoadOutcome::Discarded;
            }
            if state.activity != Activity::Idle {
                return LoadOutcome::Busy;
            }
            state.activity = Activity::Loading;
        }

        let result = self.service.list().await;

        let mut state = self.state.lock().await;
        if state.closed {
            debug!("session closed; dropping listing");
            return LoadOutcome::Discarded;
        }
        state.activity = Activity::Idle;

        match result {
            Ok(records) => {
                state.store.replace(records);
                state.notice = None;
                info!(count = state.store.len(), "customers loaded");
                LoadOutcome::Loaded(state.store.len())
            }
            Err(e) => {
                error!(error = %e, "loading customers failed");
                let message = format!("could not load customers: {e}");
                state.notice = Some(message.clone());
                LoadOutcome::Failed(message)
            }
        }
    }

    /// Validate, transform and create. Missing fields never reach the
    /// network; a failed create keeps the inputs for another try.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> SubmitOutcome {
        let payload = {
            let mut state = self.state.lock().await;
            if state.closed {
                return SubmitOutcome::Discarded;
            }
            match state.form.begin_submit() {
                Ok(payload) => payload,
                Err(SubmitRejected::Busy) => return SubmitOutcome::Busy,
                Err(SubmitRejected::Invalid(fields)) => {
                    state.notice = Some(format!(
                        "fill in: {}",
                        fields.iter().map(|f| f.label()).collect::<Vec<_>>().join(", ")
                    ));
                    return SubmitOutcome::Invalid(fields);
                }
            }
        };

        let result = self.service.create(&payload).await;

        let mut state = self.state.lock().await;
        if state.closed {
            debug!("session closed; dropping create response");
            return SubmitOutcome::Discarded;
        }

        let SessionState {
            store, form, notice, ..
        } = &mut *state;
        match form.finish_submit(result, store) {
            Ok(record) => {
                info!(id = %record.id, total = store.len(), "customer created");
                *notice = None;
                SubmitOutcome::Created(record)
            }
            Err(message) => {
                error!(error = %message, "creating customer failed");
                let message = format!("could not save customer: {message}");
                *notice = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Delete on the service, then drop the record locally. A failed delete
    /// leaves the store as it was.
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn delete(&self, id: &CustomerId) -> DeleteOutcome {
        {
            let mut state = self.state.lock().await;
            if state.closed {
                return DeleteOutcome::Discarded;
            }
            if state.activity != Activity::Idle {
                return DeleteOutcome::Busy;
            }
            state.activity = Activity::Deleting(id.clone());
        }

        let result = self.service.delete(id).await;

        let mut state = self.state.lock().await;
        if state.closed {
            debug!("session closed; dropping delete response");
            return DeleteOutcome::Discarded;
        }
        state.activity = Activity::Idle;

        match result {
            Ok(()) => {
                if !state.store.remove(id) {
                    debug!("deleted id was not in the local store");
                }
                state.notice = None;
                info!(remaining = state.store.len(), "customer deleted");
                DeleteOutcome::Deleted
            }
            Err(e) => {
                warn!(error = %e, "deleting customer failed");
                let message = format!("could not delete customer {id}: {e}");
                state.notice = Some(message.clone());
                DeleteOutcome::Failed(message)
            }
        }
    }

    /// Update one form input. Returns false when the edit was ignored
    /// (submit in flight or session closed).
    pub async fn set_field(&self, field: Field, value: impl Into<String>) -> bool {
        let mut state = self.state.lock().await;
        if state.closed {
            return false;
        }
        state.form.set_field(field, value)
    }

    pub async fn clear_form(&self) -> bool {
        let mut state = self.state.lock().await;
        if state.closed {
            return false;
        }
        state.form.clear()
    }

    pub async fn view(&self) -> SessionView {
        let state = self.state.lock().await;
        SessionView {
            records: state.store.records().to_vec(),
            form: state.form.form().clone(),
            form_state: state.form.state().clone(),
            field_errors: state.form.field_errors().to_vec(),
            activity: state.activity.clone(),
            notice: state.notice.clone(),
        }
    }

    /// Tear the session down. Responses to requests still in flight are
    /// discarded when they arrive.
    pub async fn close(&self) {
        let mut state = self.state.lock().await;
        state.closed = true;
        info!("session closed");
    }

    pub async fn is_closed(&self) -> bool {
        self.state.lock().await.closed
    }
}
