//! Placement of a laid-out event inside its hour slot.
//!
//! Vertical values are pixels relative to the top of the slot the event starts
//! in. Horizontal values are percentages of the slot width.

use chrono::Timelike;

use crate::constants::{DEFAULT_SLOT_HEIGHT, DEFAULT_WIDTH_PERCENT, DEFAULT_Z_BASE, DEFAULT_Z_STEP};
use crate::layout::LaidOutEvent;

/// Constants the placement is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Pixels per hour
    pub slot_height: f64,
    /// Share of the slot width events may fill, in percent
    pub width_percent: f64,
    pub z_base: i64,
    pub z_step: i64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        GeometryConfig {
            slot_height: DEFAULT_SLOT_HEIGHT,
            width_percent: DEFAULT_WIDTH_PERCENT,
            z_base: DEFAULT_Z_BASE,
            z_step: DEFAULT_Z_STEP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventGeometry {
    pub top: f64,
    pub height: f64,
    pub width_percent: f64,
    pub left_percent: f64,
    pub z_index: i64,
}

/// Derive the placement of one laid-out event.
pub fn geometry(laid_out: &LaidOutEvent, config: &GeometryConfig) -> EventGeometry {
    let per_minute = config.slot_height / 60.0;
    let start = laid_out.event.start_time;
    let end = laid_out.event.end_time;

    let (duration_hours, duration_minutes) = duration(
        (start.hour() as i64, start.minute() as i64),
        (end.hour() as i64, end.minute() as i64),
    );

    let (width_percent, left_percent) = if laid_out.active_count > 1 {
        let lane_width = config.width_percent / laid_out.active_count as f64;
        (lane_width, laid_out.lane_index as f64 * lane_width)
    } else {
        (config.width_percent, 0.0)
    };

    EventGeometry {
        top: start.minute() as f64 * per_minute,
        height: duration_hours as f64 * config.slot_height + duration_minutes as f64 * per_minute,
        width_percent,
        left_percent,
        z_index: config.z_base + laid_out.sequence_index as i64 * config.z_step,
    }
}

/// Hours and minutes between two wall-clock times, borrowing an hour when the
/// end minute is below the start minute.
fn duration(start: (i64, i64), end: (i64, i64)) -> (i64, i64) {
    let (start_hour, start_minute) = start;
    let (end_hour, end_minute) = end;

    if end_minute >= start_minute {
        (end_hour - start_hour, end_minute - start_minute)
    } else {
        (end_hour - start_hour - 1, 60 + (end_minute - start_minute))
    }
}
