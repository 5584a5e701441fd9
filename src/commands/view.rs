use anyhow::Result;
use eventry_core::error::EventryError;
use eventry_core::registry::Registry;

use crate::render::Render;

pub fn run(registry: &Registry, id: &str) -> Result<()> {
    // The id is matched as the raw string the user typed; see
    // Registry::get_event for the contract.
    let event = match registry.get_event(id) {
        Ok(event) => event,
        Err(EventryError::EventNotFound(_)) | Err(EventryError::StoreMissing(_)) => {
            anyhow::bail!("Event not found. Run `eventry list` to see existing events.");
        }
        Err(err) => return Err(err.into()),
    };

    println!("{}", event.render());

    Ok(())
}
