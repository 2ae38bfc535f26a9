use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::core::types::ContactId;

/// A raw contact row: column name to cell value, as read from a CSV file
pub type ContactRecord = HashMap<String, String>;

/// Column names of the required contact fields
pub mod fields {
    pub const CONTACT_ID: &str = "contactID";
    pub const EMAIL: &str = "email";
    pub const FIRST_NAME: &str = "name";
    pub const LAST_NAME: &str = "name1";
    pub const ADDRESS: &str = "address";
    pub const POSTAL_ZIP: &str = "postalZip";

    /// All required columns, in the order they are validated
    pub const REQUIRED: [&str; 6] = [CONTACT_ID, EMAIL, FIRST_NAME, LAST_NAME, ADDRESS, POSTAL_ZIP];
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
}

/// A validated contact with every field used for duplicate scoring.
///
/// Blank values are allowed; only an absent column is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    #[serde(rename = "contactID")]
    pub id: ContactId,

    pub email: String,

    /// First name
    #[serde(rename = "name")]
    pub first_name: String,

    /// Last name
    #[serde(rename = "name1")]
    pub last_name: String,

    pub address: String,

    #[serde(rename = "postalZip")]
    pub postal_zip: String,
}

impl Contact {
    /// Create a contact with only an ID; use the `with_*` builders for the rest
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: ContactId::new(id),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            address: String::new(),
            postal_zip: String::new(),
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    #[must_use]
    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    #[must_use]
    pub fn with_postal_zip(mut self, postal_zip: impl Into<String>) -> Self {
        self.postal_zip = postal_zip.into();
        self
    }

    /// Build a contact from a raw record, checking that every required column is present
    ///
    /// # Errors
    ///
    /// Returns `ContactError::MissingField` naming the first absent column.
    pub fn from_record(record: &ContactRecord) -> Result<Self, ContactError> {
        let field = |name: &'static str| {
            record
                .get(name)
                .cloned()
                .ok_or(ContactError::MissingField(name))
        };

        Ok(Self {
            id: ContactId(field(fields::CONTACT_ID)?),
            email: field(fields::EMAIL)?,
            first_name: field(fields::FIRST_NAME)?,
            last_name: field(fields::LAST_NAME)?,
            address: field(fields::ADDRESS)?,
            postal_zip: field(fields::POSTAL_ZIP)?,
        })
    }

    /// Convert back into a raw record keyed by the CSV column names
    #[must_use]
    pub fn to_record(&self) -> ContactRecord {
        [
            (fields::CONTACT_ID, self.id.as_str()),
            (fields::EMAIL, self.email.as_str()),
            (fields::FIRST_NAME, self.first_name.as_str()),
            (fields::LAST_NAME, self.last_name.as_str()),
            (fields::ADDRESS, self.address.as_str()),
            (fields::POSTAL_ZIP, self.postal_zip.as_str()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }
}

/// The contact ID of a raw record, if the column is present
#[must_use]
pub fn record_id(record: &ContactRecord) -> Option<ContactId> {
    record.get(fields::CONTACT_ID).map(ContactId::new)
}

impl TryFrom<&ContactRecord> for Contact {
    type Error = ContactError;

    fn try_from(record: &ContactRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}
