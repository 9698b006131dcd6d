use std::sync::Arc;

use dotenvy::dotenv;
use rocket::launch;

use synergia_bookings::config::Config;
use synergia_bookings::db::init_db;
use synergia_bookings::store::mongo::MongoBookingStore;
use synergia_bookings::store::BookingStore;

#[launch]
async fn rocket() -> _ {
    dotenv().ok();
    let config = Config::from_env();
    let db = init_db(&config).await.expect("invalid MONGODB_URI");
    let store: Arc<dyn BookingStore> = Arc::new(MongoBookingStore::new(&db));

    synergia_bookings::build_rocket(config, store)
}
