use crate::domain::{ClientStatus, ContactMethod, NewContactRecord};
use crate::error::{CoreError, RequiredField};
use chrono::NaiveDate;

/// Raw form input before it is turned into a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub enterprise: String,
    pub client_name: String,
    pub unit: String,
    pub contact_method: Option<ContactMethod>,
    pub contact_info: Option<String>,
    pub contact_date: Option<NaiveDate>,
    pub observations: String,
    pub status: Option<ClientStatus>,
}

impl ContactDraft {
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.enterprise.trim().is_empty() {
            missing.push(RequiredField::Enterprise);
        }
        if self.client_name.trim().is_empty() {
            missing.push(RequiredField::ClientName);
        }
        if self.unit.trim().is_empty() {
            missing.push(RequiredField::Unit);
        }
        missing
    }

    /// `today` fills an unset contact date; method and status fall back to their defaults.
    pub fn validate(self, today: NaiveDate) -> Result<NewContactRecord, CoreError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CoreError::MissingFields(missing));
        }

        let contact_method = self.contact_method.unwrap_or_default();
        let contact_info = if contact_method.accepts_contact_info() {
            self.contact_info.and_then(non_empty_trimmed)
        } else {
            None
        };

        Ok(NewContactRecord {
            enterprise: self.enterprise.trim().to_string(),
            client_name: self.client_name.trim().to_string(),
            unit: self.unit.trim().to_string(),
            contact_method,
            contact_info,
            contact_date: self.contact_date.unwrap_or(today),
            observations: self.observations.trim().to_string(),
            status: self.status.unwrap_or_default(),
        })
    }
}

fn non_empty_trimmed(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
