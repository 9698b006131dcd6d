use chrono::{DateTime, Utc};
use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub const DEFAULT_TICKET_TYPE: &str = "Regular";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub event: String,
    pub ticket_type: String,
    pub created_at: DateTime<Utc>,
}

/// Creation body. Required fields are still `Option` so that a missing field
/// reaches the presence check instead of dying inside the JSON guard.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateBookingPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub ticket_type: Option<String>,
}

impl CreateBookingPayload {
    /// Validates in order: presence of name/email/event, then catalog
    /// membership of the event. Stamps defaults on success.
    pub fn into_booking(self, available_events: &[String]) -> Result<Booking, ApiError> {
        fn present(field: Option<String>) -> Option<String> {
            field.filter(|value| !value.is_empty())
        }

        let (name, email, event) =
            match (present(self.name), present(self.email), present(self.event)) {
                (Some(name), Some(email), Some(event)) => (name, email, event),
                _ => return Err(ApiError::invalid("Name, email, and event are required!")),
            };

        if !available_events.contains(&event) {
            return Err(ApiError::UnknownEvent(event));
        }

        Ok(Booking {
            id: None,
            name,
            email,
            event,
            ticket_type: present(self.ticket_type)
                .unwrap_or_else(|| DEFAULT_TICKET_TYPE.to_string()),
            created_at: Utc::now(),
        })
    }
}

/// Partial-update body: any subset of the mutable fields. `createdAt` and the
/// id are not reachable from here.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateBookingPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub ticket_type: Option<String>,
}

/// Validated update set: only fields that were actually supplied.
#[derive(Debug, Clone, Default)]
pub struct BookingUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub event: Option<String>,
    pub ticket_type: Option<String>,
}

impl BookingUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.event.is_none()
            && self.ticket_type.is_none()
    }

    /// Field document for the store's `$set`. Never empty: construction via
    /// `UpdateBookingPayload::into_update` rejects the all-absent case.
    pub fn into_set_document(self) -> Document {
        let mut set = Document::new();
        if let Some(name) = self.name {
            set.insert("name", name);
        }
        if let Some(email) = self.email {
            set.insert("email", email);
        }
        if let Some(event) = self.event {
            set.insert("event", event);
        }
        if let Some(ticket_type) = self.ticket_type {
            set.insert("ticketType", ticket_type);
        }
        set
    }
}

impl UpdateBookingPayload {
    /// A supplied-but-empty field is rejected rather than silently ignored;
    /// an absent field is left untouched. Clearing a field to empty is not
    /// supported by this operation.
    pub fn into_update(self, available_events: &[String]) -> Result<BookingUpdate, ApiError> {
        fn reject_empty(field: &Option<String>, label: &str) -> Result<(), ApiError> {
            match field {
                Some(value) if value.is_empty() => {
                    Err(ApiError::invalid(format!("{label} cannot be empty!")))
                }
                _ => Ok(()),
            }
        }

        reject_empty(&self.name, "Name")?;
        reject_empty(&self.email, "Email")?;
        reject_empty(&self.event, "Event")?;
        reject_empty(&self.ticket_type, "Ticket type")?;

        if let Some(event) = &self.event {
            if !available_events.contains(event) {
                return Err(ApiError::UnknownEvent(event.clone()));
            }
        }

        let update = BookingUpdate {
            name: self.name,
            email: self.email,
            event: self.event,
            ticket_type: self.ticket_type,
        };
        if update.is_empty() {
            return Err(ApiError::invalid("No fields to update!"));
        }
        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_EVENTS;

    fn events() -> Vec<String> {
        DEFAULT_EVENTS.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn create_defaults_ticket_type() {
        let payload = CreateBookingPayload {
            name: Some("A".into()),
            email: Some("a@x.com".into()),
            event: Some("Devhack".into()),
            ticket_type: None,
        };
        let booking = payload.into_booking(&events()).unwrap();
        assert_eq!(booking.ticket_type, "Regular");
        assert!(booking.id.is_none());
    }

    #[test]
    fn create_checks_presence_before_membership() {
        // Missing email and an unknown event: the presence error must win.
        let payload = CreateBookingPayload {
            name: Some("A".into()),
            email: None,
            event: Some("Unknown Fest".into()),
            ticket_type: None,
        };
        match payload.into_booking(&events()) {
            Err(ApiError::InvalidInput(msg)) => {
                assert_eq!(msg, "Name, email, and event are required!")
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn create_treats_empty_string_as_missing() {
        let payload = CreateBookingPayload {
            name: Some("".into()),
            email: Some("a@x.com".into()),
            event: Some("Devhack".into()),
            ticket_type: None,
        };
        assert!(matches!(
            payload.into_booking(&events()),
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[test]
    fn create_rejects_unknown_event() {
        let payload = CreateBookingPayload {
            name: Some("A".into()),
            email: Some("a@x.com".into()),
            event: Some("Unknown Fest".into()),
            ticket_type: None,
        };
        match payload.into_booking(&events()) {
            Err(ApiError::UnknownEvent(event)) => assert_eq!(event, "Unknown Fest"),
            other => panic!("expected UnknownEvent, got {other:?}"),
        }
    }

    #[test]
    fn update_keeps_only_supplied_fields() {
        let payload = UpdateBookingPayload {
            ticket_type: Some("VIP".into()),
            ..Default::default()
        };
        let set = payload.into_update(&events()).unwrap().into_set_document();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get_str("ticketType").unwrap(), "VIP");
    }

    #[test]
    fn update_rejects_empty_set() {
        let payload = UpdateBookingPayload::default();
        match payload.into_update(&events()) {
            Err(ApiError::InvalidInput(msg)) => assert_eq!(msg, "No fields to update!"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn update_rejects_supplied_empty_field() {
        let payload = UpdateBookingPayload {
            name: Some("".into()),
            ..Default::default()
        };
        match payload.into_update(&events()) {
            Err(ApiError::InvalidInput(msg)) => assert_eq!(msg, "Name cannot be empty!"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn update_rejects_unknown_event() {
        let payload = UpdateBookingPayload {
            event: Some("Unknown Fest".into()),
            ..Default::default()
        };
        assert!(matches!(
            payload.into_update(&events()),
            Err(ApiError::UnknownEvent(_))
        ));
    }

    #[test]
    fn booking_serializes_with_wire_field_names() {
        let booking = Booking {
            id: None,
            name: "A".into(),
            email: "a@x.com".into(),
            event: "Devhack".into(),
            ticket_type: "Regular".into(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&booking).unwrap();
        assert!(value.get("ticketType").is_some());
        assert!(value.get("createdAt").is_some());
        // Unset id stays off the wire entirely.
        assert!(value.get("_id").is_none());
    }
}
