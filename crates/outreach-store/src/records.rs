use crate::backend::{MemoryBackend, SlotBackend};
use crate::error::{Result, StoreError};
use crate::sqlite::SqliteBackend;
use crate::DEFAULT_SLOT;
use chrono::{DateTime, Utc};
use outreach_core::rules::{next_updated_at, stamp, unique_client_names};
use outreach_core::{ContactRecord, ContactRecordPatch, NewContactRecord, RecordId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Contact records kept as one JSON array in a named slot.
///
/// Every mutation reads the whole array, changes it, and writes the whole array
/// back. Newest records sit at the front.
pub struct RecordStore<B> {
    backend: B,
    slot: String,
}

impl RecordStore<SqliteBackend> {
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(SqliteBackend::open(path)?))
    }
}

impl RecordStore<MemoryBackend> {
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }
}

impl<B: SlotBackend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_slot(backend, DEFAULT_SLOT)
    }

    pub fn with_slot(backend: B, slot: impl Into<String>) -> Self {
        Self {
            backend,
            slot: slot.into(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Never fails: a missing, unreadable or corrupt slot reads as empty. Elements that
    /// do not decode as records are left out here but stay in the slot.
    pub fn list_all(&self) -> Vec<ContactRecord> {
        self.load()
            .into_iter()
            .filter_map(|entry| match entry {
                Entry::Record(record) => Some(record),
                Entry::Opaque(_) => None,
            })
            .collect()
    }

    pub fn get(&self, id: RecordId) -> Option<ContactRecord> {
        self.list_all().into_iter().find(|record| record.id == id)
    }

    /// Stores the fields as given; validation belongs to the caller.
    pub fn create(&self, now: DateTime<Utc>, input: NewContactRecord) -> Result<ContactRecord> {
        let mut entries = self.load();
        let mut id = RecordId::new();
        while entries.iter().any(|entry| entry.has_id(id)) {
            id = RecordId::new();
        }

        let record = input.into_record(id, stamp(now));
        entries.insert(0, Entry::Record(record.clone()));
        self.persist(&entries)?;
        debug!(id = %record.id, "record created");
        Ok(record)
    }

    /// `Ok(None)` when no record has `id`; the slot is not written in that case.
    pub fn update(
        &self,
        now: DateTime<Utc>,
        id: RecordId,
        patch: ContactRecordPatch,
    ) -> Result<Option<ContactRecord>> {
        let mut entries = self.load();
        let Some(record) = entries.iter_mut().find_map(|entry| match entry {
            Entry::Record(record) if record.id == id => Some(record),
            _ => None,
        }) else {
            debug!(%id, "update skipped, record not found");
            return Ok(None);
        };

        record.apply(patch);
        let previous = record.updated_at.max(record.created_at);
        record.updated_at = next_updated_at(previous, now);
        let updated = record.clone();

        self.persist(&entries)?;
        debug!(%id, "record updated");
        Ok(Some(updated))
    }

    pub fn delete(&self, id: RecordId) -> Result<bool> {
        let mut entries = self.load();
        let before = entries.len();
        entries.retain(|entry| !matches!(entry, Entry::Record(record) if record.id == id));
        if entries.len() == before {
            return Ok(false);
        }
        self.persist(&entries)?;
        debug!(%id, "record deleted");
        Ok(true)
    }

    pub fn list_by_client(&self, name: &str) -> Vec<ContactRecord> {
        self.list_all()
            .into_iter()
            .filter(|record| record.is_client(name))
            .collect()
    }

    pub fn list_unique_client_names(&self) -> Vec<String> {
        unique_client_names(&self.list_all())
    }

    /// Every element of the slot, undecodable ones included.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.load())?)
    }

    /// Replaces the whole collection and returns how many elements the slot now holds.
    /// The slot is left untouched unless `raw` is an array of objects whose decodable
    /// records have distinct ids. Objects that do not decode are stored as given.
    pub fn import_json(&self, raw: &str) -> Result<usize> {
        let elements: Vec<Value> =
            serde_json::from_str(raw).map_err(|err| StoreError::InvalidSnapshot(err.to_string()))?;
        if let Some(index) = elements.iter().position(|element| !element.is_object()) {
            return Err(StoreError::InvalidSnapshot(format!(
                "element {} is not an object",
                index
            )));
        }

        let entries: Vec<Entry> = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| self.decode(index, element))
            .collect();

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if let Entry::Record(record) = entry {
                if !seen.insert(record.id) {
                    return Err(StoreError::DuplicateId(record.id));
                }
            }
        }

        self.persist(&entries)?;
        debug!(count = entries.len(), "snapshot imported");
        Ok(entries.len())
    }

    fn load(&self) -> Vec<Entry> {
        let raw = match self.backend.read(&self.slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(slot = %self.slot, error = %err, "slot unreadable, treating as empty");
                return Vec::new();
            }
        };
        if raw.trim().is_empty() {
            return Vec::new();
        }
        let elements: Vec<Value> = match serde_json::from_str(&raw) {
            Ok(elements) => elements,
            Err(err) => {
                warn!(slot = %self.slot, error = %err, "slot content is corrupt, treating as empty");
                return Vec::new();
            }
        };
        elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| self.decode(index, element))
            .collect()
    }

    fn decode(&self, index: usize, element: Value) -> Entry {
        match ContactRecord::deserialize(&element) {
            Ok(record) => Entry::Record(record),
            Err(err) => {
                warn!(
                    slot = %self.slot,
                    index,
                    error = %err,
                    "element is not a valid record, keeping it as stored"
                );
                Entry::Opaque(element)
            }
        }
    }

    fn persist(&self, entries: &[Entry]) -> Result<()> {
        let raw = serde_json::to_string(entries)?;
        if let Err(err) = self.backend.write(&self.slot, &raw) {
            warn!(slot = %self.slot, error = %err, "slot write failed, change not persisted");
            return Err(err);
        }
        Ok(())
    }
}

/// One element of the slot array.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Entry {
    Record(ContactRecord),
    /// Written back exactly as read.
    Opaque(Value),
}

impl Entry {
    fn has_id(&self, id: RecordId) -> bool {
        match self {
            Entry::Record(record) => record.id == id,
            Entry::Opaque(value) => {
                value.get("id").and_then(Value::as_str) == Some(id.to_string().as_str())
            }
        }
    }
}
