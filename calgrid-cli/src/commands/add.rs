use anyhow::Result;
use calgrid_core::store::EventStore;
use calgrid_core::{EventBook, EventDraft};
use owo_colors::OwoColorize;

use super::form::{self, FieldArgs};

pub fn run<S: EventStore>(book: &EventBook<S>, fields: FieldArgs, hour: Option<u32>) -> Result<()> {
    let today = crate::today();
    let mut draft = match hour {
        Some(hour) => EventDraft::for_slot(today, hour),
        None => EventDraft::for_date(today),
    };
    fields.apply(&mut draft);

    let interactive = !fields.is_complete();
    if interactive {
        draft = form::prompt(draft, &fields)?;
        println!();
    }

    let event = book.add(&draft)?;

    println!("{}", format!("  Created: {}", event.title).green());
    println!("  {}", event.id.dimmed());

    Ok(())
}
