//! Add, edit and delete events against an injected store.

use chrono::NaiveDate;
use log::info;

use crate::draft::EventDraft;
use crate::error::{CalGridError, CalGridResult};
use crate::event::{Event, generate_id};
use crate::store::EventStore;

pub struct EventBook<S: EventStore> {
    store: S,
}

impl<S: EventStore> EventBook<S> {
    pub fn new(store: S) -> Self {
        EventBook { store }
    }

    pub fn all(&self) -> CalGridResult<Vec<Event>> {
        self.store.load_all()
    }

    pub fn get(&self, id: &str) -> CalGridResult<Event> {
        self.all()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| CalGridError::EventNotFound(id.to_string()))
    }

    /// Events on `date`, in stored order.
    pub fn on_date(&self, date: NaiveDate) -> CalGridResult<Vec<Event>> {
        Ok(self.all()?.into_iter().filter(|e| e.date == date).collect())
    }

    /// Validate the draft and append it as a new event with a fresh id.
    pub fn add(&self, draft: &EventDraft) -> CalGridResult<Event> {
        let fields = draft.validate()?;
        let mut events = self.store.load_all()?;

        let id = unique_id(&events);
        let event = fields.into_event(id);
        events.push(event.clone());
        self.store.save_all(&events)?;

        info!("event=add id={} date={}", event.id, event.date);
        Ok(event)
    }

    /// Replace every field but the id of the event with this id.
    pub fn edit(&self, id: &str, draft: &EventDraft) -> CalGridResult<Event> {
        let fields = draft.validate()?;
        let mut events = self.store.load_all()?;

        let slot = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CalGridError::EventNotFound(id.to_string()))?;
        *slot = fields.into_event(id.to_string());
        let updated = slot.clone();

        self.store.save_all(&events)?;

        info!("event=edit id={} date={}", updated.id, updated.date);
        Ok(updated)
    }

    /// Remove the first event with this id and return it.
    pub fn delete(&self, id: &str) -> CalGridResult<Event> {
        let mut events = self.store.load_all()?;

        let index = events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CalGridError::EventNotFound(id.to_string()))?;
        let removed = events.remove(index);

        self.store.save_all(&events)?;

        info!("event=delete id={}", removed.id);
        Ok(removed)
    }
}

/// A fresh id not used by any stored event.
fn unique_id(events: &[Event]) -> String {
    loop {
        let id = generate_id();
        if !events.iter().any(|e| e.id == id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::test_support::event;
    use crate::store::{FileStore, MemoryStore};

    fn draft(title: &str, start: &str, end: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            date: "2025-03-20".to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            attendees: "alice".to_string(),
        }
    }

    #[test]
    fn test_add_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let book = EventBook::new(FileStore::new(dir.path().join("events.json")));

        let added = book.add(&draft("Standup", "09:00", "09:15")).unwrap();
        let loaded = book.all().unwrap();

        assert_eq!(loaded, vec![added.clone()]);
        assert_eq!(book.get(&added.id).unwrap(), added);
    }

    #[test]
    fn test_add_stores_free_text_unchanged() {
        let book = EventBook::new(MemoryStore::new());
        let mut spaced = draft("  Standup ", "09:00", "09:15");
        spaced.attendees = " a ".to_string();

        let added = book.add(&spaced).unwrap();
        let stored = book.get(&added.id).unwrap();

        assert_eq!(stored.title, "  Standup ");
        assert_eq!(stored.attendees, " a ");
    }

    #[test]
    fn test_each_add_gets_distinct_id() {
        let book = EventBook::new(MemoryStore::new());
        let a = book.add(&draft("Same", "09:00", "10:00")).unwrap();
        let b = book.add(&draft("Same", "09:00", "10:00")).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(book.all().unwrap().len(), 2);
    }

    #[test]
    fn test_add_rejects_invalid_draft_without_writing() {
        let book = EventBook::new(MemoryStore::new());
        let result = book.add(&draft("Bad", "10:00", "09:00"));

        assert!(matches!(result, Err(CalGridError::Validation(_))));
        assert!(book.all().unwrap().is_empty());
    }

    #[test]
    fn test_edit_keeps_id_and_position() {
        let store = MemoryStore::with_events(vec![
            event("a", "09:00", "10:00"),
            event("b", "10:00", "11:00"),
            event("c", "11:00", "12:00"),
        ]);
        let book = EventBook::new(store);

        let edited = book.edit("b", &draft("Renamed", "13:00", "14:30")).unwrap();
        assert_eq!(edited.id, "b");
        assert_eq!(edited.title, "Renamed");

        let events = book.all().unwrap();
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(events[1], edited);
        assert_eq!(events[0], event("a", "09:00", "10:00"));
    }

    #[test]
    fn test_edit_with_duplicate_ids_replaces_first_only() {
        let second = event("dup", "10:00", "11:00");
        let book = EventBook::new(MemoryStore::with_events(vec![
            event("dup", "09:00", "10:00"),
            second.clone(),
        ]));

        book.edit("dup", &draft("Renamed", "13:00", "14:00")).unwrap();

        let events = book.all().unwrap();
        assert_eq!(events[0].title, "Renamed");
        assert_eq!(events[1], second);
    }

    #[test]
    fn test_edit_missing_event() {
        let book = EventBook::new(MemoryStore::new());
        let result = book.edit("nope", &draft("x", "09:00", "10:00"));
        assert!(matches!(result, Err(CalGridError::EventNotFound(id)) if id == "nope"));
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let original = vec![
            event("a", "09:00", "10:00"),
            event("b", "10:00", "11:00"),
            event("c", "11:00", "12:00"),
        ];
        let book = EventBook::new(MemoryStore::with_events(original.clone()));

        let removed = book.delete("b").unwrap();
        assert_eq!(removed, original[1]);
        assert_eq!(book.all().unwrap(), vec![original[0].clone(), original[2].clone()]);
    }

    #[test]
    fn test_delete_with_duplicate_ids_removes_first_only() {
        let mut second = event("dup", "10:00", "11:00");
        second.title = "Second".to_string();
        let book = EventBook::new(MemoryStore::with_events(vec![
            event("dup", "09:00", "10:00"),
            second.clone(),
        ]));

        book.delete("dup").unwrap();
        assert_eq!(book.all().unwrap(), vec![second]);
    }

    #[test]
    fn test_delete_missing_event_leaves_store_alone() {
        let original = vec![event("a", "09:00", "10:00")];
        let book = EventBook::new(MemoryStore::with_events(original.clone()));

        assert!(matches!(book.delete("zzz"), Err(CalGridError::EventNotFound(_))));
        assert_eq!(book.all().unwrap(), original);
    }

    #[test]
    fn test_on_date() {
        let mut other_day = event("x", "09:00", "10:00");
        other_day.date = NaiveDate::from_ymd_opt(2025, 3, 21).unwrap();
        let book = EventBook::new(MemoryStore::with_events(vec![
            event("a", "09:00", "10:00"),
            other_day,
        ]));

        let events = book.on_date(NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "a");
    }

    #[test]
    fn test_book_over_borrowed_store() {
        let store = MemoryStore::new();
        {
            let book = EventBook::new(&store);
            book.add(&draft("Borrowed", "09:00", "10:00")).unwrap();
        }
        assert_eq!(store.load_all().unwrap().len(), 1);
    }
}
