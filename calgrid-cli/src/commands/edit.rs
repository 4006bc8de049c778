use anyhow::Result;
use calgrid_core::store::EventStore;
use calgrid_core::{EventBook, EventDraft};
use owo_colors::OwoColorize;

use super::form::{self, FieldArgs};
use crate::render::Render;

pub fn run<S: EventStore>(book: &EventBook<S>, id: &str, fields: FieldArgs) -> Result<()> {
    let current = book.get(id)?;
    let mut draft = EventDraft::from_event(&current);

    if fields.is_empty() {
        println!("{}", current.render());
        draft = form::prompt(draft, &fields)?;
        println!();
    } else {
        fields.apply(&mut draft);
    }

    let updated = book.edit(id, &draft)?;

    println!("{}", format!("  Updated: {}", updated.title).yellow());
    println!("  {}", updated.render());

    Ok(())
}
