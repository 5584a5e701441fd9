use anyhow::Result;
use eventry_core::error::EventryError;
use eventry_core::registry::Registry;
use eventry_core::validate;
use owo_colors::OwoColorize;

use crate::prompt;
use crate::render::Render;

const EDITABLE_ATTRIBUTES: [&str; 4] = ["name", "date", "time", "location"];

pub fn run(
    registry: &Registry,
    id: u64,
    attribute: Option<String>,
    value: Option<String>,
) -> Result<()> {
    // Show the record being edited before prompting for anything
    let current = registry
        .list_events()
        .ok()
        .and_then(|events| events.into_iter().find(|event| event.id == id));
    let current = match current {
        Some(event) => event,
        None => anyhow::bail!("Event not found with the given ID. Run `eventry list` to see existing events."),
    };
    println!("{}", current.render());
    println!();

    let attribute = match attribute {
        Some(value) => value,
        None => prompt::text("Enter the attribute to edit (Name/Date/Time/Location)")?,
    };
    let attribute = attribute.to_lowercase();
    // An unknown attribute aborts the operation; there is no retry here
    if !EDITABLE_ATTRIBUTES.contains(&attribute.as_str()) {
        anyhow::bail!("Invalid input. You can only amend Name/Date/Time/Location.");
    }

    let value = match value {
        Some(value) => value,
        None => match attribute.as_str() {
            "date" => prompt::with_retry(
                "Enter event date (DD/MM/YYYY)",
                "Invalid date format. Please use DD/MM/YYYY format.",
                validate::is_valid_date,
            )?,
            "time" => prompt::with_retry(
                "Enter event time (HH:MM)",
                "Invalid time format. Please use HH:MM format.",
                validate::is_valid_time,
            )?,
            "name" => prompt::text("Enter event name/description")?,
            // Stored as-is: the edit path applies no location normalization
            _ => prompt::text("Enter event location")?,
        },
    };

    let updated = match registry.edit_event(id, &attribute, &value) {
        Ok(updated) => updated,
        Err(EventryError::EventNotFound(_)) => {
            anyhow::bail!("Event not found with the given ID. Run `eventry list` to see existing events.")
        }
        Err(err) => return Err(err.into()),
    };

    println!("{}", "Event updated successfully!".green());
    println!("{}", updated.render());

    Ok(())
}
