//! The event entity and its three kinds.
//!
//! All kinds share the same stored layout; the one field whose meaning
//! differs (`role_value`) is labeled per kind at display time. Storage is a
//! 7-column record: id, kind, name, date, time, location, role_value.

use std::fmt;
use std::str::FromStr;

use csv::StringRecord;

use crate::error::{EventryError, EventryResult};

/// Number of columns in an event record.
pub const EVENT_COLUMNS: usize = 7;

/// The kind of an event. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Wedding,
    Birthday,
    Business,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [EventKind::Wedding, EventKind::Birthday, EventKind::Business];

    /// Display label for the kind-specific role field.
    pub fn role_label(&self) -> &'static str {
        match self {
            EventKind::Wedding => "Bride and groom",
            EventKind::Birthday => "Celebrant",
            EventKind::Business => "Host",
        }
    }

    /// Wedding and birthday names are derived from the role value; business
    /// events carry a user-entered name instead (None here).
    pub fn derived_name(&self, role_value: &str) -> Option<String> {
        match self {
            EventKind::Wedding => Some(format!("wedding of {role_value}")),
            EventKind::Birthday => Some(format!("birthday of {role_value}")),
            EventKind::Business => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Wedding => "Wedding",
            EventKind::Birthday => "Birthday",
            EventKind::Business => "Business",
        };
        write!(f, "{name}")
    }
}

impl FromStr for EventKind {
    type Err = EventryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wedding" => Ok(EventKind::Wedding),
            "birthday" => Ok(EventKind::Birthday),
            "business" => Ok(EventKind::Business),
            other => Err(EventryError::UnknownKind(other.to_string())),
        }
    }
}

/// One event record.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: u64,
    pub kind: EventKind,
    pub name: String,
    /// `DD/MM/YYYY`, format-validated on input.
    pub date: String,
    /// `HH:MM`, format-validated on input.
    pub time: String,
    pub location: String,
    /// Bride-and-groom names, celebrant or host depending on `kind`.
    pub role_value: String,
}

impl Event {
    /// Fields in storage order.
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.kind.to_string(),
            self.name.clone(),
            self.date.clone(),
            self.time.clone(),
            self.location.clone(),
            self.role_value.clone(),
        ]
    }

    pub fn from_record(record: &StringRecord) -> EventryResult<Self> {
        if record.len() != EVENT_COLUMNS {
            return Err(EventryError::MalformedRecord(format!(
                "expected {EVENT_COLUMNS} event fields, found {}",
                record.len()
            )));
        }

        let id = record[0].parse::<u64>().map_err(|_| {
            EventryError::MalformedRecord(format!("non-numeric event id '{}'", &record[0]))
        })?;
        let kind = record[1].parse::<EventKind>()?;

        Ok(Event {
            id,
            kind,
            name: record[2].to_string(),
            date: record[3].to_string(),
            time: record[4].to_string(),
            location: record[5].to_string(),
            role_value: record[6].to_string(),
        })
    }
}
