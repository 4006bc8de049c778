use anyhow::Result;
use calgrid_core::EventBook;
use calgrid_core::store::EventStore;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run<S: EventStore>(book: &EventBook<S>, id: &str, force: bool) -> Result<()> {
    let event = book.get(id)?;

    if !force {
        println!("{}", event.render());
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete \"{}\"?", event.title))
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    let removed = book.delete(id)?;
    println!("{}", format!("  Deleted: {}", removed.title).red());

    Ok(())
}
