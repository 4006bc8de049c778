//! Terminal rendering for calgrid types.
//!
//! Day and week views draw each laid-out event as a bar across a fixed-width
//! track, placed by its derived geometry, so overlapping events show up side
//! by side.

use calgrid_core::Event;
use calgrid_core::geometry::{EventGeometry, GeometryConfig};
use calgrid_core::layout::LaidOutEvent;
use calgrid_core::view::{DayGrid, MonthGrid, ViewKind, WeekGrid};
use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;

/// Characters in the lane track of the day view.
const TRACK_WIDTH: usize = 20;

/// Characters per day column in the week and month views.
const COLUMN_WIDTH: usize = 14;

/// Events shown per month cell before collapsing into "+N more".
const MONTH_CELL_EVENTS: usize = 3;

const HOUR_LABEL_WIDTH: usize = 5;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.render_time_range().dimmed(),
            self.title.bold(),
            format!("({})", self.attendees).dimmed()
        )
    }
}

impl Render for LaidOutEvent {
    fn render(&self) -> String {
        let lane = if self.active_count > 1 {
            format!("[{}/{}] ", self.lane_index + 1, self.active_count)
        } else {
            String::new()
        };
        format!("{}{}", lane.yellow(), self.event.render())
    }
}

pub fn render_day(grid: &DayGrid, geometry: &GeometryConfig) -> String {
    let mut lines = vec![ViewKind::Day.title(grid.date).bold().to_string()];
    if grid.event_count() == 0 {
        lines.push("No events".dimmed().to_string());
    }
    lines.push(String::new());

    for row in &grid.rows {
        if row.events.is_empty() {
            lines.push(format!("{} │", pad_label(&row.label).dimmed()));
            continue;
        }

        for (i, laid_out) in row.events.iter().enumerate() {
            let label = if i == 0 { row.label.as_str() } else { "" };
            lines.push(format!(
                "{} │ {} {}",
                pad_label(label),
                lane_track(&laid_out.geometry(geometry)),
                laid_out.render()
            ));
        }
    }

    lines.join("\n")
}

pub fn render_week(grid: &WeekGrid, today: NaiveDate) -> String {
    let title = grid
        .days
        .first()
        .map(|d| ViewKind::Week.title(*d))
        .unwrap_or_default();
    let mut lines = vec![title.bold().to_string(), String::new()];

    let header: Vec<String> = grid
        .days
        .iter()
        .map(|d| {
            let weekday = WEEKDAYS[d.weekday().num_days_from_sunday() as usize];
            let text = fit(&format!("{} {}", weekday, d.format("%-d %b")), COLUMN_WIDTH);
            if *d == today {
                text.blue().bold().to_string()
            } else {
                text
            }
        })
        .collect();
    lines.push(format!("{} │ {}", pad_label(""), header.join(" ")));

    for row in &grid.rows {
        let depth = row.cells.iter().map(Vec::len).max().unwrap_or(0).max(1);

        for line in 0..depth {
            let label = if line == 0 { row.label.as_str() } else { "" };
            let cells: Vec<String> = row
                .cells
                .iter()
                .map(|cell| match cell.get(line) {
                    Some(laid_out) => {
                        fit(&week_cell_text(laid_out), COLUMN_WIDTH).blue().to_string()
                    }
                    None => " ".repeat(COLUMN_WIDTH),
                })
                .collect();

            let label = if row.cells.iter().all(Vec::is_empty) {
                pad_label(label).dimmed().to_string()
            } else {
                pad_label(label)
            };
            lines.push(format!("{} │ {}", label, cells.join(" ").trim_end()));
        }
    }

    lines.join("\n")
}

pub fn render_month(grid: &MonthGrid, today: NaiveDate) -> String {
    let mut lines = vec![ViewKind::Month.title(grid.anchor).bold().to_string(), String::new()];

    let header: Vec<String> = WEEKDAYS
        .iter()
        .map(|d| fit(d, COLUMN_WIDTH).bold().to_string())
        .collect();
    lines.push(header.join(" "));

    for week in grid.weeks() {
        let day_numbers: Vec<String> = week
            .iter()
            .map(|cell| {
                let text = fit(&cell.date.day().to_string(), COLUMN_WIDTH);
                if cell.date == today {
                    text.blue().bold().to_string()
                } else if !cell.in_month {
                    text.dimmed().to_string()
                } else {
                    text
                }
            })
            .collect();
        lines.push(day_numbers.join(" "));

        let depth = week
            .iter()
            .map(|c| c.events.len().min(MONTH_CELL_EVENTS + 1))
            .max()
            .unwrap_or(0);

        for line in 0..depth {
            let cells: Vec<String> = week
                .iter()
                .map(|cell| month_cell_line(&cell.events, line))
                .collect();
            lines.push(cells.join(" ").trim_end().to_string());
        }

        lines.push(String::new());
    }

    lines.join("\n")
}

/// Line `line` of a month cell: an event title, a "+N more" marker or blank.
fn month_cell_line(events: &[Event], line: usize) -> String {
    let overflow = events.len() > MONTH_CELL_EVENTS + 1;

    if overflow && line == MONTH_CELL_EVENTS {
        let more = format!("+{} more", events.len() - MONTH_CELL_EVENTS);
        return fit(&more, COLUMN_WIDTH).dimmed().to_string();
    }

    match events.get(line) {
        Some(event) => fit(&event.title, COLUMN_WIDTH).blue().to_string(),
        None => " ".repeat(COLUMN_WIDTH),
    }
}

/// e.g. "09:30 Review", or "2/3 09:30 Review" when sharing the slot.
fn week_cell_text(laid_out: &LaidOutEvent) -> String {
    let start = laid_out.event.start_time.format("%H:%M");
    if laid_out.active_count > 1 {
        format!(
            "{}/{} {} {}",
            laid_out.lane_index + 1,
            laid_out.active_count,
            start,
            laid_out.event.title
        )
    } else {
        format!("{} {}", start, laid_out.event.title)
    }
}

fn pad_label(label: &str) -> String {
    format!("{:>w$}", label, w = HOUR_LABEL_WIDTH)
}

/// Bar placed across the track according to the event's horizontal geometry.
fn lane_track(geometry: &EventGeometry) -> String {
    let offset = percent_of(geometry.left_percent, TRACK_WIDTH).min(TRACK_WIDTH - 1);
    let width = percent_of(geometry.width_percent, TRACK_WIDTH)
        .max(1)
        .min(TRACK_WIDTH - offset);

    format!(
        "{}{}{}",
        " ".repeat(offset),
        "█".repeat(width).blue(),
        " ".repeat(TRACK_WIDTH - offset - width)
    )
}

fn percent_of(percent: f64, total: usize) -> usize {
    (percent.max(0.0) / 100.0 * total as f64).round() as usize
}

/// Truncate or pad `s` to exactly `width` characters.
fn fit(s: &str, width: usize) -> String {
    let count = s.chars().count();
    if count > width {
        let mut truncated: String = s.chars().take(width.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    } else {
        format!("{}{}", s, " ".repeat(width - count))
    }
}
