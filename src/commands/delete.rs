use anyhow::Result;
use eventry_core::registry::Registry;
use owo_colors::OwoColorize;

use crate::prompt;
use crate::render::Render;

pub fn run(registry: &Registry, id: u64, yes: bool) -> Result<()> {
    // Show what is about to be deleted before asking for confirmation
    let event = registry
        .list_events()
        .ok()
        .and_then(|events| events.into_iter().find(|event| event.id == id));
    let event = match event {
        Some(event) => event,
        None => anyhow::bail!("Event not found with the given ID."),
    };
    println!("{}", event.render());
    println!();

    if !yes && !prompt::confirm_deletion()? {
        println!("Deletion canceled.");
        return Ok(());
    }

    registry.delete_event(id)?;
    println!("{}", "Event deleted successfully!".green());

    Ok(())
}
