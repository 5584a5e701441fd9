use anyhow::Result;
use eventry_core::error::EventryError;
use eventry_core::registry::Registry;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(registry: &Registry) -> Result<()> {
    // A missing store and an empty store both render as "no events"
    let events = match registry.list_events() {
        Ok(events) => events,
        Err(EventryError::StoreMissing(_)) => Vec::new(),
        Err(err) => return Err(err.into()),
    };

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    println!("{}", "  ID  Type      Name  Date Time  Location".dimmed());
    for event in &events {
        println!("{}", event.render_line());
    }
    println!();
    println!("Total events: {}", events.len());

    Ok(())
}
