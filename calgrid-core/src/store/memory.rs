use std::cell::RefCell;

use super::EventStore;
use crate::error::CalGridResult;
use crate::event::Event;

/// Event list kept in memory for the lifetime of the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: RefCell<Vec<Event>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        MemoryStore {
            events: RefCell::new(events),
        }
    }
}

impl EventStore for MemoryStore {
    fn load_all(&self) -> CalGridResult<Vec<Event>> {
        Ok(self.events.borrow().clone())
    }

    fn save_all(&self, events: &[Event]) -> CalGridResult<()> {
        *self.events.borrow_mut() = events.to_vec();
        Ok(())
    }
}
