pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Build, Request, Response, Rocket};

use config::Config;
use store::BookingStore;

pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, PUT, DELETE, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

/// Assembles the application over any store implementation. The binary wires
/// in MongoDB; tests wire in the in-memory store.
pub fn build_rocket(config: Config, store: Arc<dyn BookingStore>) -> Rocket<Build> {
    rocket::build()
        .manage(config)
        .manage(store)
        .attach(Cors)
        .mount("/api", routes::bookings::routes())
        .register("/", routes::bookings::catchers())
}
