use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::{self, Json};
use rocket::{catch, catchers, delete, get, post, put, routes, Catcher, Route, State};
use serde_json::{json, Value};

use crate::config::Config;
use crate::error::ApiError;
use crate::models::booking::{Booking, CreateBookingPayload, UpdateBookingPayload};
use crate::store::BookingStore;

fn parse_booking_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::invalid("Invalid booking ID format!"))
}

// Bodies arrive as a Result so malformed JSON maps to our 400 shape instead
// of Rocket's 422.
fn parse_body<T>(body: Result<Json<T>, json::Error<'_>>) -> Result<T, ApiError> {
    body.map(Json::into_inner)
        .map_err(|_| ApiError::invalid("Invalid JSON body!"))
}

#[get("/bookings")]
pub async fn list_bookings(
    store: &State<Arc<dyn BookingStore>>,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let bookings = store
        .list()
        .await
        .map_err(|err| ApiError::store("Error fetching bookings", err))?;
    Ok(Json(bookings))
}

#[post("/bookings", data = "<payload>")]
pub async fn create_booking(
    store: &State<Arc<dyn BookingStore>>,
    config: &State<Config>,
    payload: Result<Json<CreateBookingPayload>, json::Error<'_>>,
) -> Result<Custom<Json<Value>>, ApiError> {
    let booking = parse_body(payload)?.into_booking(&config.available_events)?;
    let id = store
        .insert(booking)
        .await
        .map_err(|err| ApiError::store("Error creating booking", err))?;

    Ok(Custom(
        Status::Created,
        Json(json!({
            "message": "Booking created successfully!",
            "bookingId": id.to_hex(),
        })),
    ))
}

#[get("/bookings/search?<email>")]
pub async fn search_bookings(
    store: &State<Arc<dyn BookingStore>>,
    email: Option<&str>,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let email = email.ok_or_else(|| ApiError::invalid("Email query parameter required!"))?;
    let results = store
        .find_by_email(email)
        .await
        .map_err(|err| ApiError::store("Error searching bookings", err))?;

    // An empty match is a client-facing absence here, unlike the full list.
    if results.is_empty() {
        return Err(ApiError::not_found("No bookings found for this email!"));
    }
    Ok(Json(results))
}

#[get("/bookings/filter?<event>")]
pub async fn filter_bookings(
    store: &State<Arc<dyn BookingStore>>,
    event: Option<&str>,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let event = event.ok_or_else(|| ApiError::invalid("Event query parameter is required!"))?;

    // No catalog check: an unknown event name simply matches nothing.
    let bookings = store
        .find_by_event(event)
        .await
        .map_err(|err| ApiError::store("Error fetching bookings", err))?;

    if bookings.is_empty() {
        return Err(ApiError::not_found(format!(
            "No bookings found for event '{event}'"
        )));
    }
    Ok(Json(bookings))
}

#[get("/bookings/<id>")]
pub async fn get_booking(
    store: &State<Arc<dyn BookingStore>>,
    id: &str,
) -> Result<Json<Booking>, ApiError> {
    let object_id = parse_booking_id(id)?;
    let booking = store
        .get(object_id)
        .await
        .map_err(|err| ApiError::store("Error fetching booking", err))?;

    match booking {
        Some(booking) => Ok(Json(booking)),
        None => Err(ApiError::not_found("Booking not found!")),
    }
}

#[put("/bookings/<id>", data = "<payload>")]
pub async fn update_booking(
    store: &State<Arc<dyn BookingStore>>,
    config: &State<Config>,
    id: &str,
    payload: Result<Json<UpdateBookingPayload>, json::Error<'_>>,
) -> Result<Json<Value>, ApiError> {
    let object_id = parse_booking_id(id)?;
    let update = parse_body(payload)?.into_update(&config.available_events)?;

    let matched = store
        .update(object_id, update)
        .await
        .map_err(|err| ApiError::store("Error updating booking", err))?;
    if !matched {
        return Err(ApiError::not_found("Booking not found!"));
    }
    Ok(Json(json!({ "message": "Booking updated successfully!" })))
}

#[delete("/bookings/<id>")]
pub async fn delete_booking(
    store: &State<Arc<dyn BookingStore>>,
    id: &str,
) -> Result<Json<Value>, ApiError> {
    let object_id = parse_booking_id(id)?;
    let deleted = store
        .delete(object_id)
        .await
        .map_err(|err| ApiError::store("Error deleting booking", err))?;
    if !deleted {
        return Err(ApiError::not_found("Booking not found!"));
    }
    Ok(Json(json!({ "message": "Booking deleted successfully!" })))
}

pub fn routes() -> Vec<Route> {
    routes![
        list_bookings,
        create_booking,
        search_bookings,
        filter_bookings,
        get_booking,
        update_booking,
        delete_booking,
    ]
}

// Keep non-route errors on the same wire shape as handler errors.

#[catch(404)]
fn catch_not_found() -> Json<Value> {
    Json(json!({ "message": "Resource not found!" }))
}

#[catch(500)]
fn catch_internal_error() -> Json<Value> {
    Json(json!({ "message": "Internal server error!" }))
}

pub fn catchers() -> Vec<Catcher> {
    catchers![catch_not_found, catch_internal_error]
}
