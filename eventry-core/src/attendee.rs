//! The attendee entity.
//!
//! Attendees reference an event by id. The reference is checked when the
//! attendee is created; if the event is deleted later the attendee record is
//! simply orphaned. Storage is a 6-column record: id, first_name, surname,
//! email, phone, event_id.

use csv::StringRecord;

use crate::error::{EventryError, EventryResult};

/// Number of columns in an attendee record.
pub const ATTENDEE_COLUMNS: usize = 6;

/// One attendee record. Ids are sequenced independently from event ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Attendee {
    pub id: u64,
    pub first_name: String,
    pub surname: String,
    /// Free text, not validated.
    pub email: String,
    /// Free text, not validated.
    pub phone: String,
    pub event_id: u64,
}

impl Attendee {
    /// Fields in storage order.
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.first_name.clone(),
            self.surname.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.event_id.to_string(),
        ]
    }

    pub fn from_record(record: &StringRecord) -> EventryResult<Self> {
        if record.len() != ATTENDEE_COLUMNS {
            return Err(EventryError::MalformedRecord(format!(
                "expected {ATTENDEE_COLUMNS} attendee fields, found {}",
                record.len()
            )));
        }

        let id = record[0].parse::<u64>().map_err(|_| {
            EventryError::MalformedRecord(format!("non-numeric attendee id '{}'", &record[0]))
        })?;
        let event_id = record[5].parse::<u64>().map_err(|_| {
            EventryError::MalformedRecord(format!("non-numeric event id '{}'", &record[5]))
        })?;

        Ok(Attendee {
            id,
            first_name: record[1].to_string(),
            surname: record[2].to_string(),
            email: record[3].to_string(),
            phone: record[4].to_string(),
            event_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trip() {
        let attendee = Attendee {
            id: 3,
            first_name: "Dana".to_string(),
            surname: "Reyes".to_string(),
            email: "dana@example.com".to_string(),
            phone: "07000 000000".to_string(),
            event_id: 1,
        };
        let record = StringRecord::from(attendee.to_record());
        assert_eq!(Attendee::from_record(&record).unwrap(), attendee);
    }

    #[test]
    fn rejects_wrong_arity() {
        let record = StringRecord::from(vec!["1", "Dana"]);
        assert!(matches!(
            Attendee::from_record(&record),
            Err(EventryError::MalformedRecord(_))
        ));
    }
}
