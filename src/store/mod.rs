pub mod memory;
pub mod mongo;

use anyhow::Result;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::models::booking::{Booking, BookingUpdate};

/// Seam over the document store: exactly the operations the booking
/// endpoints need. `mongo::MongoBookingStore` backs the running service,
/// `memory::MemoryBookingStore` backs the tests.
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Booking>>;

    async fn find_by_email(&self, email: &str) -> Result<Vec<Booking>>;

    async fn find_by_event(&self, event: &str) -> Result<Vec<Booking>>;

    async fn get(&self, id: ObjectId) -> Result<Option<Booking>>;

    /// Persists the booking and returns the generated id.
    async fn insert(&self, booking: Booking) -> Result<ObjectId>;

    /// Applies only the supplied fields; returns whether a document matched.
    async fn update(&self, id: ObjectId, update: BookingUpdate) -> Result<bool>;

    /// Returns whether a document was deleted.
    async fn delete(&self, id: ObjectId) -> Result<bool>;
}
