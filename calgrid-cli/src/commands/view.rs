use anyhow::Result;
use calgrid_core::EventBook;
use calgrid_core::config::CalGridConfig;
use calgrid_core::store::EventStore;
use calgrid_core::view::{DayGrid, MonthGrid, ViewKind, WeekGrid};
use chrono::NaiveDate;

use crate::render::{render_day, render_month, render_week};

pub fn run<S: EventStore>(
    book: &EventBook<S>,
    config: &CalGridConfig,
    view: ViewKind,
    anchor: NaiveDate,
) -> Result<()> {
    let events = book.all()?;
    let today = crate::today();

    let output = match view {
        ViewKind::Month => render_month(&MonthGrid::build(&events, anchor), today),
        ViewKind::Week => render_week(&WeekGrid::build(&events, anchor), today),
        ViewKind::Day => render_day(&DayGrid::build(&events, anchor), &config.geometry()),
    };

    println!("{}", output);
    Ok(())
}
