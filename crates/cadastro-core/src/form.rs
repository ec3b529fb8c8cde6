use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dates;
use crate::error::{CoreError, MissingFields};
use crate::models::customer::NewCustomer;

/// One of the six inputs of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Address,
    City,
    DateOfBirth,
    Phone,
    Email,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Address,
        Field::City,
        Field::DateOfBirth,
        Field::Phone,
        Field::Email,
    ];

    /// Wire/command key, e.g. `date_of_birth`.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Address => "address",
            Field::City => "city",
            Field::DateOfBirth => "date_of_birth",
            Field::Phone => "phone",
            Field::Email => "email",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Address => "Address",
            Field::City => "City",
            Field::DateOfBirth => "Date of birth",
            Field::Phone => "Phone",
            Field::Email => "Email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "name" => Ok(Field::Name),
            "address" => Ok(Field::Address),
            "city" => Ok(Field::City),
            "date_of_birth" | "dob" | "birth" => Ok(Field::DateOfBirth),
            "phone" => Ok(Field::Phone),
            "email" => Ok(Field::Email),
            _ => Err(CoreError::UnknownField(s.to_string())),
        }
    }
}

/// Current raw values of the six inputs. Plain data, bound to whatever
/// front end drives it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerForm {
    pub name: String,
    pub address: String,
    pub city: String,
    /// Raw date-picker value, `YYYY-MM-DD`.
    pub date_of_birth: String,
    pub phone: String,
    pub email: String,
}

impl CustomerForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Address => &self.address,
            Field::City => &self.city,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Address => &mut self.address,
            Field::City => &mut self.city,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
        };
        *slot = value.into();
    }

    /// Reset every input to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fields that are empty or whitespace-only, in form order. Only the
    /// check trims; submitted values keep their surrounding whitespace.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    /// Presence check followed by the date transform.
    ///
    /// Text fields are submitted exactly as typed. An unparsable date does
    /// not fail the submission; it becomes `None` (sent as `null`).
    pub fn to_new_customer(&self) -> Result<NewCustomer, MissingFields> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(MissingFields(missing));
        }

        Ok(NewCustomer {
            name: self.name.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            date_of_birth: dates::to_timestamp(&self.date_of_birth),
            phone: self.phone.clone(),
            email: self.email.clone(),
        })
    }
}
