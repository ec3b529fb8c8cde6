//! Blocking calls against the customer endpoints.

use ureq::Agent;

use cadastro_core::models::customer::{CustomerId, CustomerRecord, NewCustomer};

use crate::error::ApiError;
use crate::routes;

/// Fetch the whole collection, in service order.
pub fn list_customers(agent: &Agent, base_url: &str) -> Result<Vec<CustomerRecord>, ApiError> {
    let url = routes::customers(base_url);
    let mut resp = agent
        .get(&url)
        .header("Accept", "application/json")
        .call()
        .map_err(|e| ApiError::from_ureq(&url, e))?;

    resp.body_mut()
        .read_json::<Vec<CustomerRecord>>()
        .map_err(|e| ApiError::Decode {
            url: url.clone(),
            message: e.to_string(),
        })
}

/// Create a customer. Returns the record with service-assigned fields.
pub fn create_customer(
    agent: &Agent,
    base_url: &str,
    customer: &NewCustomer,
) -> Result<CustomerRecord, ApiError> {
    let url = routes::customer(base_url);
    let mut resp = agent
        .post(&url)
        .header("Accept", "application/json")
        .send_json(customer)
        .map_err(|e| ApiError::from_ureq(&url, e))?;

    resp.body_mut()
        .read_json::<CustomerRecord>()
        .map_err(|e| ApiError::Decode {
            url: url.clone(),
            message: e.to_string(),
        })
}

/// Delete a customer by id. The response body is not inspected.
pub fn delete_customer(agent: &Agent, base_url: &str, id: &CustomerId) -> Result<(), ApiError> {
    let url = routes::customer(base_url);
    agent
        .delete(&url)
        .query(routes::ID_PARAM, id.as_str())
        .call()
        .map_err(|e| ApiError::from_ureq(&url, e))?;
    Ok(())
}
