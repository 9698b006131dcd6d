use anyhow::{anyhow, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};

use super::BookingStore;
use crate::models::booking::{Booking, BookingUpdate};

pub struct MongoBookingStore {
    collection: Collection<Booking>,
}

impl MongoBookingStore {
    pub fn new(db: &Database) -> Self {
        MongoBookingStore {
            collection: db.collection("bookings"),
        }
    }

    async fn find_all(&self, filter: Document) -> Result<Vec<Booking>> {
        let mut cursor = self.collection.find(filter, None).await?;
        let mut bookings = Vec::new();
        while let Some(booking) = cursor.try_next().await? {
            bookings.push(booking);
        }
        Ok(bookings)
    }
}

#[async_trait]
impl BookingStore for MongoBookingStore {
    async fn list(&self) -> Result<Vec<Booking>> {
        self.find_all(doc! {}).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<Booking>> {
        self.find_all(doc! { "email": email }).await
    }

    async fn find_by_event(&self, event: &str) -> Result<Vec<Booking>> {
        self.find_all(doc! { "event": event }).await
    }

    async fn get(&self, id: ObjectId) -> Result<Option<Booking>> {
        Ok(self.collection.find_one(doc! { "_id": id }, None).await?)
    }

    async fn insert(&self, booking: Booking) -> Result<ObjectId> {
        let result = self.collection.insert_one(&booking, None).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| anyhow!("store returned a non-ObjectId insert id"))
    }

    async fn update(&self, id: ObjectId, update: BookingUpdate) -> Result<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": update.into_set_document() },
                None,
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: ObjectId) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        Ok(result.deleted_count > 0)
    }
}
