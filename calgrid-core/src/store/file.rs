//! Key-value file holding the event list under a named slot.
//!
//! The file is a JSON object mapping slot names to values. Only the
//! configured slot is read or replaced; other slots are written back as found.

use log::debug;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::EventStore;
use crate::constants::DEFAULT_STORE_SLOT;
use crate::error::{CalGridError, CalGridResult};
use crate::event::Event;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    slot: String,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_slot(path, DEFAULT_STORE_SLOT)
    }

    pub fn with_slot(path: impl Into<PathBuf>, slot: impl Into<String>) -> Self {
        FileStore {
            path: path.into(),
            slot: slot.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Read every slot. A missing or blank file is an empty map.
    fn read_slots(&self) -> CalGridResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            CalGridError::Serialization(format!("Could not read {}: {e}", self.path.display()))
        })
    }

    /// Write through a sibling temp file so a failed write leaves the old
    /// content in place.
    fn write_slots(&self, slots: &Map<String, Value>) -> CalGridResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(slots)?;
        let tmp_path = self.path.with_extension("tmp");

        std::fs::write(&tmp_path, content)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl EventStore for FileStore {
    fn load_all(&self) -> CalGridResult<Vec<Event>> {
        let mut slots = self.read_slots()?;

        let events: Vec<Event> = match slots.remove(&self.slot) {
            Some(Value::Null) | None => Vec::new(),
            Some(value) => serde_json::from_value(value).map_err(|e| {
                CalGridError::Serialization(format!(
                    "Invalid event list in slot '{}' of {}: {e}",
                    self.slot,
                    self.path.display()
                ))
            })?,
        };

        debug!(
            "event=store_load path={} slot={} count={}",
            self.path.display(),
            self.slot,
            events.len()
        );
        Ok(events)
    }

    fn save_all(&self, events: &[Event]) -> CalGridResult<()> {
        let mut slots = self.read_slots()?;
        slots.insert(self.slot.clone(), serde_json::to_value(events)?);
        self.write_slots(&slots)?;

        debug!(
            "event=store_save path={} slot={} count={}",
            self.path.display(),
            self.slot,
            events.len()
        );
        Ok(())
    }
}
