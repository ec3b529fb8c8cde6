//! URL conventions of the remote service.
//!
//! Pure string functions. The collection is listed under the plural path;
//! create and delete share the singular one, with the id for deletes carried
//! as a query parameter rather than a path segment.

pub const LIST_PATH: &str = "/customers";

pub const ITEM_PATH: &str = "/customer";

pub const ID_PARAM: &str = "id";

pub fn customers(base_url: &str) -> String {
    format!("{}{LIST_PATH}", base_url.trim_end_matches('/'))
}

pub fn customer(base_url: &str) -> String {
    format!("{}{ITEM_PATH}", base_url.trim_end_matches('/'))
}
