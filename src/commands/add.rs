use anyhow::Result;
use eventry_core::event::EventKind;
use eventry_core::registry::{NewEvent, Registry};
use eventry_core::validate;
use owo_colors::OwoColorize;

use crate::prompt;
use crate::render::Render;

pub fn run(
    registry: &Registry,
    kind: Option<String>,
    name: Option<String>,
    date: Option<String>,
    time: Option<String>,
    location: Option<String>,
    role: Option<String>,
) -> Result<()> {
    let kind = resolve_kind(kind)?;

    // Flag values that fail validation abort; prompted values retry until
    // they match.
    let date = match date {
        Some(value) => {
            if !validate::is_valid_date(&value) {
                anyhow::bail!("Invalid date '{}'. Please use DD/MM/YYYY format", value);
            }
            value
        }
        None => prompt::with_retry(
            "Enter event date (DD/MM/YYYY)",
            "Invalid date format. Please use DD/MM/YYYY format.",
            validate::is_valid_date,
        )?,
    };

    let time = match time {
        Some(value) => {
            if !validate::is_valid_time(&value) {
                anyhow::bail!("Invalid time '{}'. Please use HH:MM format", value);
            }
            value
        }
        None => prompt::with_retry(
            "Enter event time (HH:MM)",
            "Invalid time format. Please use HH:MM format.",
            validate::is_valid_time,
        )?,
    };

    let location = match location {
        Some(value) => value,
        None => prompt::text("Enter event location")?,
    };

    let role_prompt = match kind {
        EventKind::Wedding => "Enter the names of the bride and the groom",
        EventKind::Birthday => "Enter the name of the celebrant",
        EventKind::Business => "Enter the name of the business host",
    };
    let role_value = match role {
        Some(value) => value,
        None => prompt::text(role_prompt)?,
    };

    // Wedding and birthday events derive their name from the role value
    let name = match kind {
        EventKind::Business => Some(match name {
            Some(value) => value,
            None => prompt::text("Enter event name/title")?,
        }),
        _ => None,
    };

    let event = registry.add_event(
        kind,
        NewEvent {
            name,
            date,
            time,
            location,
            role_value,
        },
    )?;

    println!("{}", "Event added successfully!".green());
    println!("{}", event.render());

    Ok(())
}

/// Parse the kind flag, or prompt until a recognized kind is entered.
fn resolve_kind(kind: Option<String>) -> Result<EventKind> {
    if let Some(value) = kind {
        return Ok(value.parse()?);
    }

    loop {
        let input = prompt::text("Enter event type (wedding, birthday, business)")?;
        match input.parse() {
            Ok(kind) => return Ok(kind),
            Err(_) => {
                eprintln!(
                    "{}",
                    "Unrecognized event type. Please choose from the valid options.".red()
                );
            }
        }
    }
}
