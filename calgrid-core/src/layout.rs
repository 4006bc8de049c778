//! Lane assignment for events that share an hour bucket.
//!
//! Events are swept in start order. Each event first drops every active event
//! that ended at or before its start, then joins the active set and takes its
//! position there as its lane. `active_count` is a snapshot of the active set
//! at that moment: it is not revised when later events join or leave, so two
//! events drawn side by side may disagree on how wide a lane is.

use crate::event::Event;
use crate::geometry::{EventGeometry, GeometryConfig};

/// An event with its lane in the rendered bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaidOutEvent {
    pub event: Event,
    /// Zero-based position among the events active when this one starts
    pub lane_index: usize,
    /// Number of events active when this one starts, itself included
    pub active_count: usize,
    /// Processing order, used only for stacking
    pub sequence_index: usize,
}

impl LaidOutEvent {
    pub fn geometry(&self, config: &GeometryConfig) -> EventGeometry {
        crate::geometry::geometry(self, config)
    }
}

/// Assign lanes to one bucket of events.
///
/// Output is in processing order: ascending start time, with events that
/// start together kept in their input order. Never fails; events that end at
/// or before they start go through the same sweep and get whatever lanes it
/// produces.
pub fn layout<'a, I>(events: I) -> Vec<LaidOutEvent>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut sorted: Vec<&Event> = events.into_iter().collect();
    // sort_by is stable
    sorted.sort_by(|a, b| a.start_time.cmp(&b.start_time));

    let mut active: Vec<&Event> = Vec::new();
    let mut laid_out = Vec::with_capacity(sorted.len());

    for event in sorted {
        active.retain(|a| a.end_time > event.start_time);
        active.push(event);

        // First match wins if ids repeat within the active set
        let lane_index = active
            .iter()
            .position(|a| a.id == event.id)
            .unwrap_or(active.len() - 1);

        laid_out.push(LaidOutEvent {
            event: event.clone(),
            lane_index,
            active_count: active.len(),
            sequence_index: laid_out.len(),
        });
    }

    laid_out
}
