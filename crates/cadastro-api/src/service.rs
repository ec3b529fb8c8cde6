use std::future::Future;

use tracing::{debug, info};
use ureq::Agent;

use cadastro_core::models::customer::{CustomerId, CustomerRecord, NewCustomer};

use crate::client::{self, ApiConfig};
use crate::customers;
use crate::error::ApiError;

/// The remote collection as seen by the session.
///
/// Each call is one suspension point; implementations must not touch
/// session state.
pub trait CustomerService: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<CustomerRecord>, ApiError>> + Send;

    fn create(
        &self,
        customer: &NewCustomer,
    ) -> impl Future<Output = Result<CustomerRecord, ApiError>> + Send;

    fn delete(&self, id: &CustomerId) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// [`CustomerService`] over HTTP. The blocking `ureq` calls run on tokio's
/// blocking pool.
#[derive(Clone)]
pub struct HttpCustomerService {
    agent: Agent,
    base_url: String,
}

impl HttpCustomerService {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let agent = client::build_agent(config)?;
        info!(base_url = %config.base_url, timeout = ?config.timeout, "customer service configured");
        Ok(Self {
            agent,
            base_url: config.base_url.trim().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn blocking<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&Agent, &str) -> Result<T, ApiError> + Send + 'static,
    {
        let agent = self.agent.clone();
        let base_url = self.base_url.clone();
        tokio::task::spawn_blocking(move || op(&agent, &base_url))
            .await
            .map_err(|e| ApiError::Runtime(e.to_string()))?
    }
}

impl CustomerService for HttpCustomerService {
    async fn list(&self) -> Result<Vec<CustomerRecord>, ApiError> {
        let records = self.blocking(customers::list_customers).await?;
        debug!(count = records.len(), "listed customers");
        Ok(records)
    }

    async fn create(&self, customer: &NewCustomer) -> Result<CustomerRecord, ApiError> {
        let payload = customer.clone();
        let record = self
            .blocking(move |agent, base| customers::create_customer(agent, base, &payload))
            .await?;
        debug!(id = %record.id, "created customer");
        Ok(record)
    }

    async fn delete(&self, id: &CustomerId) -> Result<(), ApiError> {
        let target = id.clone();
        self.blocking(move |agent, base| customers::delete_customer(agent, base, &target))
            .await?;
        debug!(%id, "deleted customer");
        Ok(())
    }
}
