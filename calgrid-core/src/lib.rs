//! Core types for calgrid.
//!
//! This crate provides everything the calgrid front ends share:
//! - `Event` and `EventDraft` for the stored event record and its form input
//! - `layout` for assigning side-by-side lanes to overlapping events
//! - `geometry` for turning lanes into pixel and percentage placement
//! - `view` for month/week/day grids, bucketing and navigation
//! - `store` and `book` for persisting and mutating the event list

pub mod book;
pub mod config;
pub mod constants;
pub mod draft;
pub mod error;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod store;
pub mod time;
pub mod view;

pub use book::EventBook;
pub use draft::EventDraft;
pub use error::{CalGridError, CalGridResult};
pub use event::Event;
pub use layout::{LaidOutEvent, layout};
