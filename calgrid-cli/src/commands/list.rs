use anyhow::Result;
use calgrid_core::EventBook;
use calgrid_core::store::EventStore;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

pub fn run<S: EventStore>(book: &EventBook<S>, date: Option<NaiveDate>, json: bool) -> Result<()> {
    let mut events = match date {
        Some(date) => book.on_date(date)?,
        None => book.all()?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    events.sort_by(|a, b| (a.date, a.start_time).cmp(&(b.date, b.start_time)));

    // Group events by day and print
    let mut current_date: Option<NaiveDate> = None;

    for event in &events {
        if current_date != Some(event.date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", format_date_label(event.date).bold());
            current_date = Some(event.date);
        }

        println!(
            "  {} {} {}",
            event.render_time_range(),
            event.title,
            event.id.dimmed()
        );
    }

    Ok(())
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Thu Mar 20")
fn format_date_label(date: NaiveDate) -> String {
    let today = crate::today();

    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => date.format("%a %b %-d %Y").to_string(),
    }
}
