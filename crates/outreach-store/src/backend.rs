use crate::error::Result;
use std::cell::RefCell;
use std::collections::HashMap;

/// Durable home of named text slots. Each slot holds one serialized value and is
/// always read and written whole.
pub trait SlotBackend {
    fn read(&self, slot: &str) -> Result<Option<String>>;
    fn write(&self, slot: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(slot: &str, value: impl Into<String>) -> Self {
        let backend = Self::new();
        backend
            .slots
            .borrow_mut()
            .insert(slot.to_string(), value.into());
        backend
    }

    pub fn raw(&self, slot: &str) -> Option<String> {
        self.slots.borrow().get(slot).cloned()
    }
}

impl SlotBackend for MemoryBackend {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.raw(slot))
    }

    fn write(&self, slot: &str, value: &str) -> Result<()> {
        self.slots
            .borrow_mut()
            .insert(slot.to_string(), value.to_string());
        Ok(())
    }
}
