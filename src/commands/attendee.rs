use anyhow::{Context, Result};
use eventry_core::error::EventryError;
use eventry_core::registry::{NewAttendee, Registry};
use owo_colors::OwoColorize;

use crate::prompt;
use crate::render::Render;

pub fn add(
    registry: &Registry,
    first_name: Option<String>,
    surname: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    event_id: Option<String>,
) -> Result<()> {
    let first_name = field(first_name, "Enter the attendee's first name")?;
    let surname = field(surname, "Enter the attendee's surname")?;
    let email = field(email, "Enter the attendee's email")?;
    let phone = field(phone, "Enter the attendee's phone")?;

    // The event reference is checked up front and re-prompted until it names
    // an existing event; there is no cancel path out of this loop.
    let mut input = field(event_id, "Enter the event ID they are attending")?;
    while !registry.event_id_exists(&input)? {
        eprintln!("{}", "Event not found. Enter an existing event id".red());
        input = prompt::text("Enter the event ID they are attending")?;
    }
    let event_id: u64 = input.parse().context("invalid event id")?;

    let attendee = registry.add_attendee(
        NewAttendee {
            first_name,
            surname,
            email,
            phone,
        },
        event_id,
    )?;

    println!("{}", "Attendee added to the event successfully!".green());
    println!("{}", attendee.render());

    Ok(())
}

pub fn list(registry: &Registry, event_id: u64) -> Result<()> {
    let attendees = match registry.list_attendees(event_id) {
        Ok(attendees) => attendees,
        Err(EventryError::StoreMissing(_)) => Vec::new(),
        Err(err) => return Err(err.into()),
    };

    if attendees.is_empty() {
        println!("{}", "No attendees found with the given event ID.".dimmed());
        return Ok(());
    }

    println!("Attendees of Event ID {event_id}:");
    println!();
    for attendee in &attendees {
        println!("{}", attendee.render_line());
    }
    println!();
    println!("Total attendees: {}", attendees.len());

    Ok(())
}

pub fn delete(registry: &Registry, attendee_id: u64, event_id: u64, yes: bool) -> Result<()> {
    // Show what is about to be deleted before asking for confirmation
    let attendee = registry
        .list_attendees(event_id)
        .ok()
        .and_then(|attendees| attendees.into_iter().find(|a| a.id == attendee_id));
    let attendee = match attendee {
        Some(attendee) => attendee,
        None => anyhow::bail!("Attendee not found with the given IDs."),
    };
    println!("{}", attendee.render());
    println!();

    if !yes && !prompt::confirm_deletion()? {
        println!("Deletion canceled.");
        return Ok(());
    }

    registry.delete_attendee(attendee_id, event_id)?;
    println!("{}", "Attendee deleted from the event successfully!".green());

    Ok(())
}

fn field(flag: Option<String>, prompt_label: &str) -> Result<String> {
    match flag {
        Some(value) => Ok(value),
        None => prompt::text(prompt_label),
    }
}
