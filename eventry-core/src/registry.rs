//! The operation layer: CRUD use-cases over the two record files.
//!
//! A [`Registry`] holds the paths of the event and attendee files and
//! nothing else; every operation re-reads its file, and mutations rewrite
//! it whole. Interactive concerns (prompting, retry loops, deletion
//! confirmation) belong to the caller — operations here either succeed or
//! return a typed error.

use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::{debug, info};

use crate::attendee::{Attendee, ATTENDEE_COLUMNS};
use crate::config::EventryConfig;
use crate::error::{EventryError, EventryResult};
use crate::event::{Event, EventKind, EVENT_COLUMNS};
use crate::store;
use crate::validate;

/// Field values for a new event, as collected by the driver.
///
/// Date and time must already match their formats; the registry rejects
/// rather than re-prompts.
pub struct NewEvent {
    /// Only used for business events; wedding and birthday derive theirs.
    pub name: Option<String>,
    pub date: String,
    pub time: String,
    pub location: String,
    pub role_value: String,
}

/// Field values for a new attendee. All free text.
pub struct NewAttendee {
    pub first_name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
}

pub struct Registry {
    event_file: PathBuf,
    attendee_file: PathBuf,
}

impl Registry {
    pub fn new(config: &EventryConfig) -> Self {
        Registry {
            event_file: config.event_file(),
            attendee_file: config.attendee_file(),
        }
    }

    /// Point the registry at explicit files (used by tests).
    pub fn with_files(event_file: PathBuf, attendee_file: PathBuf) -> Self {
        Registry {
            event_file,
            attendee_file,
        }
    }

    pub fn event_file(&self) -> &Path {
        &self.event_file
    }

    pub fn attendee_file(&self) -> &Path {
        &self.attendee_file
    }

    // EVENT OPERATIONS:

    /// Validate, assign the next id, normalize the location, derive the
    /// name (wedding/birthday) and append the record.
    pub fn add_event(&self, kind: EventKind, new: NewEvent) -> EventryResult<Event> {
        if !validate::is_valid_date(&new.date) {
            return Err(EventryError::InvalidDate(new.date));
        }
        if !validate::is_valid_time(&new.time) {
            return Err(EventryError::InvalidTime(new.time));
        }

        let id = store::next_id(&self.event_file)? + 1;
        let location = validate::normalize_location(&new.location);
        // Only the wedding role value has commas stripped.
        let role_value = match kind {
            EventKind::Wedding => validate::strip_commas(&new.role_value),
            _ => new.role_value,
        };
        let name = kind
            .derived_name(&role_value)
            .or(new.name)
            .unwrap_or_default();

        let event = Event {
            id,
            kind,
            name,
            date: new.date,
            time: new.time,
            location,
            role_value,
        };
        store::append(&self.event_file, &event.to_record())?;

        info!(id = event.id, kind = %event.kind, "event added");
        Ok(event)
    }

    /// Every event in file order.
    ///
    /// A missing store surfaces as [`EventryError::StoreMissing`]; callers
    /// render that the same way as an empty list.
    pub fn list_events(&self) -> EventryResult<Vec<Event>> {
        let records = store::read_all(&self.event_file)?;
        records.iter().map(Event::from_record).collect()
    }

    /// Look up one event by id, compared as the raw input string.
    ///
    /// Deliberately not an integer comparison: "01" does not match a stored
    /// id of 1. Delete and edit use integer equality instead; both behaviors
    /// are part of the existing contract.
    pub fn get_event(&self, id: &str) -> EventryResult<Event> {
        let found = store::find(&self.event_file, |record| record.get(0) == Some(id))?;
        match found {
            Some((_, record)) => Event::from_record(&record),
            None => Err(EventryError::EventNotFound(id.to_string())),
        }
    }

    /// Replace one attribute of one event and rewrite the store.
    ///
    /// `attribute` must be one of name, date, time, location (checked before
    /// any lookup, so a bad attribute never touches the file). Date and time
    /// values are re-validated. The location value is stored as-is on this
    /// path; only `add_event` normalizes it.
    pub fn edit_event(&self, id: u64, attribute: &str, new_value: &str) -> EventryResult<Event> {
        let column = match attribute.to_lowercase().as_str() {
            "name" => 2,
            "date" => 3,
            "time" => 4,
            "location" => 5,
            _ => return Err(EventryError::InvalidAttribute(attribute.to_string())),
        };

        if column == 3 && !validate::is_valid_date(new_value) {
            return Err(EventryError::InvalidDate(new_value.to_string()));
        }
        if column == 4 && !validate::is_valid_time(new_value) {
            return Err(EventryError::InvalidTime(new_value.to_string()));
        }

        let mut records = store::read_all(&self.event_file)?;
        let position = records
            .iter()
            .position(|record| field_as_id(record, 0) == Some(id))
            .ok_or_else(|| EventryError::EventNotFound(id.to_string()))?;

        let mut fields: Vec<String> =
            records[position].iter().map(str::to_string).collect();
        if fields.len() != EVENT_COLUMNS {
            return Err(EventryError::MalformedRecord(format!(
                "expected {EVENT_COLUMNS} event fields, found {}",
                fields.len()
            )));
        }
        fields[column] = new_value.to_string();
        records[position] = StringRecord::from(fields);

        store::rewrite_all(&self.event_file, &records)?;

        info!(id, attribute, "event updated");
        Event::from_record(&records[position])
    }

    /// Remove one event by id (integer equality) and rewrite the store.
    /// Returns the removed event. Confirmation is the caller's concern.
    pub fn delete_event(&self, id: u64) -> EventryResult<Event> {
        let mut records = store::read_all(&self.event_file)?;
        let position = records
            .iter()
            .position(|record| field_as_id(record, 0) == Some(id))
            .ok_or_else(|| EventryError::EventNotFound(id.to_string()))?;

        let removed = Event::from_record(&records[position])?;
        records.remove(position);
        store::rewrite_all(&self.event_file, &records)?;

        info!(id, "event deleted");
        Ok(removed)
    }

    /// Whether `id` matches the id field of any stored event, compared as
    /// strings. Used by the driver's re-prompt loop for attendee creation.
    pub fn event_id_exists(&self, id: &str) -> EventryResult<bool> {
        match store::read_all(&self.event_file) {
            Ok(records) => Ok(records.iter().any(|record| record.get(0) == Some(id))),
            Err(EventryError::StoreMissing(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }

    // ATTENDEE OPERATIONS:

    /// Assign the next attendee id and append the record. The event must
    /// exist at creation time; there is no ongoing foreign-key enforcement.
    pub fn add_attendee(&self, new: NewAttendee, event_id: u64) -> EventryResult<Attendee> {
        if !self.event_id_exists(&event_id.to_string())? {
            return Err(EventryError::EventNotFound(event_id.to_string()));
        }

        let id = store::next_id(&self.attendee_file)? + 1;
        let attendee = Attendee {
            id,
            first_name: new.first_name,
            surname: new.surname,
            email: new.email,
            phone: new.phone,
            event_id,
        };
        store::append(&self.attendee_file, &attendee.to_record())?;

        info!(id = attendee.id, event_id, "attendee added");
        Ok(attendee)
    }

    /// Attendees of one event, in insertion order. Empty is not an error.
    pub fn list_attendees(&self, event_id: u64) -> EventryResult<Vec<Attendee>> {
        let records = store::read_all(&self.attendee_file)?;
        records
            .iter()
            .filter(|record| field_as_id(record, ATTENDEE_COLUMNS - 1) == Some(event_id))
            .map(Attendee::from_record)
            .collect()
    }

    /// Remove the first attendee matching both ids (integer equality) and
    /// rewrite the store. Returns the removed attendee.
    pub fn delete_attendee(&self, attendee_id: u64, event_id: u64) -> EventryResult<Attendee> {
        let mut records = store::read_all(&self.attendee_file)?;
        let position = records
            .iter()
            .position(|record| {
                field_as_id(record, 0) == Some(attendee_id)
                    && field_as_id(record, ATTENDEE_COLUMNS - 1) == Some(event_id)
            })
            .ok_or(EventryError::AttendeeNotFound {
                attendee_id,
                event_id,
            })?;

        let removed = Attendee::from_record(&records[position])?;
        records.remove(position);
        store::rewrite_all(&self.attendee_file, &records)?;

        info!(attendee_id, event_id, "attendee deleted");
        Ok(removed)
    }
}

fn field_as_id(record: &StringRecord, index: usize) -> Option<u64> {
    let parsed = record.get(index).and_then(|field| field.parse::<u64>().ok());
    if parsed.is_none() {
        debug!(index, "skipping record with unparseable id field");
    }
    parsed
}
