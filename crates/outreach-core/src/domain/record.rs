use crate::domain::ids::RecordId;
use crate::domain::method::ContactMethod;
use crate::domain::status::ClientStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Storage slot the contact list is kept under unless configured otherwise.
pub const DEFAULT_SLOT: &str = "cobranca_contacts";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub id: RecordId,
    pub enterprise: String,
    pub client_name: String,
    pub unit: String,
    pub contact_method: ContactMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
    pub contact_date: NaiveDate,
    #[serde(default)]
    pub observations: String,
    pub status: ClientStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Members written by other tools; carried through every rewrite of the slot.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContactRecord {
    pub fn is_client(&self, name: &str) -> bool {
        crate::rules::same_client(&self.client_name, name)
    }

    /// Merges set fields over the record. Identity and timestamps are left to the caller.
    pub fn apply(&mut self, patch: ContactRecordPatch) {
        let ContactRecordPatch {
            enterprise,
            client_name,
            unit,
            contact_method,
            contact_info,
            contact_date,
            observations,
            status,
        } = patch;

        if let Some(value) = enterprise {
            self.enterprise = value;
        }
        if let Some(value) = client_name {
            self.client_name = value;
        }
        if let Some(value) = unit {
            self.unit = value;
        }
        if let Some(value) = contact_method {
            self.contact_method = value;
        }
        if let Some(value) = contact_info {
            self.contact_info = value;
        }
        if let Some(value) = contact_date {
            self.contact_date = value;
        }
        if let Some(value) = observations {
            self.observations = value;
        }
        if let Some(value) = status {
            self.status = value;
        }
    }
}

/// Caller-supplied fields of a record; the store adds `id` and the timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactRecord {
    pub enterprise: String,
    pub client_name: String,
    pub unit: String,
    pub contact_method: ContactMethod,
    pub contact_info: Option<String>,
    pub contact_date: NaiveDate,
    pub observations: String,
    pub status: ClientStatus,
}

impl NewContactRecord {
    pub fn into_record(self, id: RecordId, now: DateTime<Utc>) -> ContactRecord {
        ContactRecord {
            id,
            enterprise: self.enterprise,
            client_name: self.client_name,
            unit: self.unit,
            contact_method: self.contact_method,
            contact_info: self.contact_info,
            contact_date: self.contact_date,
            observations: self.observations,
            status: self.status,
            created_at: now,
            updated_at: now,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecordPatch {
    pub enterprise: Option<String>,
    pub client_name: Option<String>,
    pub unit: Option<String>,
    pub contact_method: Option<ContactMethod>,
    pub contact_info: Option<Option<String>>,
    pub contact_date: Option<NaiveDate>,
    pub observations: Option<String>,
    pub status: Option<ClientStatus>,
}

impl ContactRecordPatch {
    pub fn status(status: ClientStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn observations(observations: impl Into<String>) -> Self {
        Self {
            observations: Some(observations.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.enterprise.is_none()
            && self.client_name.is_none()
            && self.unit.is_none()
            && self.contact_method.is_none()
            && self.contact_info.is_none()
            && self.contact_date.is_none()
            && self.observations.is_none()
            && self.status.is_none()
    }
}
