//! Plain-text rendering of a [`SessionView`].

use std::fmt::Write;

use cadastro_core::dates::{self, DateStyle};
use cadastro_core::form::Field;
use cadastro_core::models::customer::CustomerRecord;

use crate::controller::FormState;
use crate::session::{Activity, SessionView};

pub const EMPTY_LIST: &str = "no customers registered";

pub fn status_label(active: bool) -> &'static str {
    if active { "ACTIVE" } else { "INACTIVE" }
}

pub fn record(record: &CustomerRecord, style: DateStyle) -> String {
    let date_of_birth = dates::display_date(record.date_of_birth.as_deref(), style);
    let rows = [
        (Field::Name.label(), record.name.as_str()),
        (Field::Address.label(), record.address.as_str()),
        (Field::City.label(), record.city.as_str()),
        (Field::DateOfBirth.label(), date_of_birth.as_str()),
        (Field::Phone.label(), record.phone.as_str()),
        (Field::Email.label(), record.email.as_str()),
        ("Status", status_label(record.status)),
    ];

    let mut out = format!("[{}]\n", record.id);
    for (label, value) in rows {
        let _ = writeln!(out, "  {label:<14} {value}");
    }
    out
}

pub fn records(records: &[CustomerRecord], style: DateStyle) -> String {
    if records.is_empty() {
        return format!("{EMPTY_LIST}\n");
    }
    records
        .iter()
        .map(|r| record(r, style))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn form(view: &SessionView) -> String {
    let mut out = String::new();
    for field in Field::ALL {
        let marker = if view.field_errors.contains(&field) {
            "  <- required"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "  {:<14} {:?}{marker}",
            field.key(),
            view.form.get(field)
        );
    }
    out
}

/// One-line summary of what the session is doing.
pub fn status(view: &SessionView) -> String {
    let mut parts = vec![format!("{} customer(s)", view.records.len())];
    match &view.activity {
        Activity::Idle => {}
        Activity::Loading => parts.push("loading".to_string()),
        Activity::Deleting(id) => parts.push(format!("deleting {id}")),
    }
    match &view.form_state {
        FormState::Editing => {}
        FormState::Submitting => parts.push("submitting".to_string()),
        FormState::Error(_) => parts.push("last submit failed".to_string()),
    }
    if let Some(notice) = &view.notice {
        parts.push(notice.clone());
    }
    parts.join(" | ")
}
