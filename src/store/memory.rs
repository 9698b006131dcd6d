use anyhow::Result;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use parking_lot::Mutex;

use super::BookingStore;
use crate::models::booking::{Booking, BookingUpdate};

/// Insertion-ordered in-memory store with the same matched/deleted semantics
/// as the MongoDB collection. Backs the test suite.
#[derive(Default)]
pub struct MemoryBookingStore {
    bookings: Mutex<Vec<Booking>>,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn list(&self) -> Result<Vec<Booking>> {
        Ok(self.bookings.lock().clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<Booking>> {
        Ok(self
            .bookings
            .lock()
            .iter()
            .filter(|booking| booking.email == email)
            .cloned()
            .collect())
    }

    async fn find_by_event(&self, event: &str) -> Result<Vec<Booking>> {
        Ok(self
            .bookings
            .lock()
            .iter()
            .filter(|booking| booking.event == event)
            .cloned()
            .collect())
    }

    async fn get(&self, id: ObjectId) -> Result<Option<Booking>> {
        Ok(self
            .bookings
            .lock()
            .iter()
            .find(|booking| booking.id == Some(id))
            .cloned())
    }

    async fn insert(&self, mut booking: Booking) -> Result<ObjectId> {
        let id = ObjectId::new();
        booking.id = Some(id);
        self.bookings.lock().push(booking);
        Ok(id)
    }

    async fn update(&self, id: ObjectId, update: BookingUpdate) -> Result<bool> {
        let mut bookings = self.bookings.lock();
        match bookings.iter_mut().find(|booking| booking.id == Some(id)) {
            Some(booking) => {
                if let Some(name) = update.name {
                    booking.name = name;
                }
                if let Some(email) = update.email {
                    booking.email = email;
                }
                if let Some(event) = update.event {
                    booking.event = event;
                }
                if let Some(ticket_type) = update.ticket_type {
                    booking.ticket_type = ticket_type;
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<bool> {
        let mut bookings = self.bookings.lock();
        let before = bookings.len();
        bookings.retain(|booking| booking.id != Some(id));
        Ok(bookings.len() < before)
    }
}
