//! Persistence of the event list.
//!
//! The whole list lives in one named slot of a key-value store. Every
//! mutation reads the list, changes it and writes it back.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::CalGridResult;
use crate::event::Event;

pub trait EventStore {
    /// Read the full event list. A missing slot reads as an empty list.
    fn load_all(&self) -> CalGridResult<Vec<Event>>;

    /// Replace the full event list.
    fn save_all(&self, events: &[Event]) -> CalGridResult<()>;
}

impl<S: EventStore + ?Sized> EventStore for &S {
    fn load_all(&self) -> CalGridResult<Vec<Event>> {
        (**self).load_all()
    }

    fn save_all(&self, events: &[Event]) -> CalGridResult<()> {
        (**self).save_all(events)
    }
}
