use thiserror::Error;

use crate::form::Field;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

/// Required inputs left empty, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", join_fields(.0))]
pub struct MissingFields(pub Vec<Field>);

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}
