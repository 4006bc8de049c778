use anyhow::Result;
use calgrid_core::EventBook;
use calgrid_core::store::EventStore;
use calgrid_core::view::ViewKind;
use owo_colors::OwoColorize;

pub fn run<S: EventStore>(book: &EventBook<S>, id: &str) -> Result<()> {
    let event = book.get(id)?;

    println!("{}", event.title.bold());
    println!("  {} {}", label("Date"), ViewKind::Day.title(event.date));
    println!("  {} {}", label("Time"), event.render_time_range());
    println!("  {} {}", label("Attendees"), event.attendees);
    println!("  {} {}", label("Id"), event.id.dimmed());

    if !event.is_well_formed() {
        println!("  {}", "Ends before it starts".yellow());
    }

    Ok(())
}

fn label(name: &str) -> String {
    format!("{:<10}", name).dimmed().to_string()
}
