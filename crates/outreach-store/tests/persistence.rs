use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use outreach_core::{ClientStatus, ContactMethod, ContactRecord, ContactRecordPatch, NewContactRecord};
use outreach_store::error::{Result, StoreError};
use outreach_store::{MemoryBackend, RecordStore, SlotBackend, DEFAULT_SLOT};
use serde_json::{json, Value};
use tempfile::TempDir;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

fn input(client_name: &str) -> NewContactRecord {
    NewContactRecord {
        enterprise: "Bresser".to_string(),
        client_name: client_name.to_string(),
        unit: "2308".to_string(),
        contact_method: ContactMethod::WhatsApp,
        contact_info: None,
        contact_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        observations: String::new(),
        status: ClientStatus::InProgress,
    }
}

struct ReadOnlyBackend {
    inner: MemoryBackend,
}

impl SlotBackend for ReadOnlyBackend {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        self.inner.read(slot)
    }

    fn write(&self, _slot: &str, _value: &str) -> Result<()> {
        Err(StoreError::Io(std::io::Error::other("quota exceeded")))
    }
}

#[test]
fn sqlite_store_survives_reopen() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("data").join("outreach.sqlite3");

    let created = {
        let store = RecordStore::open(&db_path).expect("open store");
        store.create(now(), input("Ana Silva")).expect("create")
    };

    let reopened = RecordStore::open(&db_path).expect("reopen store");
    let records = reopened.list_all();
    assert_eq!(records, vec![created]);
}

#[test]
fn slot_round_trips_including_enum_tags() {
    let store = RecordStore::in_memory();
    store.create(now(), input("Ana Silva")).expect("create");
    let second = store.create(now(), input("Bruno Costa")).expect("create");
    store
        .update(
            now(),
            second.id,
            ContactRecordPatch::status(ClientStatus::NoResponse),
        )
        .expect("update");
    let before = store.list_all();

    let raw = store.backend().raw(DEFAULT_SLOT).expect("slot written");
    let value: Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(value[0]["status"], "sem_retorno");
    assert_eq!(value[0]["contactMethod"], "whatsapp");

    let parsed: Vec<ContactRecord> = serde_json::from_str(&raw).expect("parse slot");
    let restored = RecordStore::new(MemoryBackend::with_slot(
        DEFAULT_SLOT,
        serde_json::to_string(&parsed).expect("serialize"),
    ));
    assert_eq!(restored.list_all(), before);
}

#[test]
fn unknown_fields_survive_updates() {
    let seeded = json!([{
        "id": "0b0c3f2e-5a55-4c4e-9d1c-2f5b8f8a7c11",
        "enterprise": "Bresser",
        "clientName": "Ana Silva",
        "unit": "101",
        "contactMethod": "telefone",
        "contactInfo": "",
        "contactDate": "2024-03-14",
        "observations": "",
        "status": "negociando",
        "createdAt": "2024-03-14T18:22:05.123Z",
        "updatedAt": "2024-03-14T18:22:05.123Z",
        "assignedTo": "maria"
    }]);
    let store = RecordStore::new(MemoryBackend::with_slot(
        DEFAULT_SLOT,
        seeded.to_string(),
    ));
    let id = store.list_all()[0].id;

    store
        .update(now(), id, ContactRecordPatch::status(ClientStatus::Finished))
        .expect("update")
        .expect("record exists");

    let raw = store.backend().raw(DEFAULT_SLOT).expect("slot");
    let value: Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(value[0]["assignedTo"], "maria");
    assert_eq!(value[0]["contactInfo"], "");
    assert_eq!(value[0]["status"], "finalizado");
    assert_eq!(value[0]["createdAt"], "2024-03-14T18:22:05.123Z");
}

#[test]
fn corrupt_slot_reads_as_empty_and_is_replaced_on_write() {
    let store = RecordStore::new(MemoryBackend::with_slot(DEFAULT_SLOT, "{not json"));
    assert!(store.list_all().is_empty());

    store.create(now(), input("Ana Silva")).expect("create");
    assert_eq!(store.list_all().len(), 1);
}

fn browser_record(id: &str, client_name: &str, contact_date: &str) -> Value {
    json!({
        "id": id,
        "enterprise": "Bresser",
        "clientName": client_name,
        "unit": "2308",
        "contactMethod": "whatsapp",
        "contactDate": contact_date,
        "observations": "",
        "status": "em_andamento",
        "createdAt": "2024-03-14T18:22:05.123Z",
        "updatedAt": "2024-03-14T18:22:05.123Z"
    })
}

#[test]
fn undecodable_element_does_not_hide_or_drop_its_neighbours() {
    let cleared_date = browser_record("9a1f4c2e-7b3d-4e5f-8a6b-0c1d2e3f4a5b", "Carla Dias", "");
    let seeded = json!([
        browser_record("0b0c3f2e-5a55-4c4e-9d1c-2f5b8f8a7c11", "Ana Silva", "2024-03-14"),
        browser_record("5d8e7f10-3c2b-4a19-8e6f-1a2b3c4d5e6f", "Bruno Costa", "2024-03-13"),
        cleared_date.clone(),
    ]);
    let store = RecordStore::new(MemoryBackend::with_slot(
        DEFAULT_SLOT,
        seeded.to_string(),
    ));

    let names: Vec<String> = store
        .list_all()
        .into_iter()
        .map(|record| record.client_name)
        .collect();
    assert_eq!(names, vec!["Ana Silva", "Bruno Costa"]);

    let created = store.create(now(), input("Edson Santos")).expect("create");
    let ana = store.list_all()[1].id;
    store.delete(ana).expect("delete");

    let raw = store.backend().raw(DEFAULT_SLOT).expect("slot");
    let value: Value = serde_json::from_str(&raw).expect("json");
    let elements = value.as_array().expect("array");
    assert_eq!(elements.len(), 3);
    assert_eq!(elements[0]["id"], created.id.to_string());
    assert_eq!(elements[1]["clientName"], "Bruno Costa");
    assert_eq!(elements[2], cleared_date);
}

#[test]
fn blank_slot_reads_as_empty() {
    let store = RecordStore::new(MemoryBackend::with_slot(DEFAULT_SLOT, "   "));
    assert!(store.list_all().is_empty());
}

#[test]
fn write_failure_is_surfaced() {
    let store = RecordStore::new(ReadOnlyBackend {
        inner: MemoryBackend::new(),
    });
    let err = store.create(now(), input("Ana Silva")).unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
    assert!(store.list_all().is_empty());
}

#[test]
fn slots_isolate_collections() {
    let backend = MemoryBackend::new();
    let work = RecordStore::with_slot(backend, "work");
    work.create(now(), input("Ana Silva")).expect("create");
    assert!(work.backend().raw(DEFAULT_SLOT).is_none());
    assert!(work.backend().raw("work").is_some());
}
