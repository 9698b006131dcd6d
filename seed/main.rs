use bson::doc;
use chrono::Utc;
use dotenvy::dotenv;
use mongodb::{options::ClientOptions, Client, Collection};

use synergia_bookings::config::Config;
use synergia_bookings::models::booking::Booking;

fn booking(name: &str, email: &str, event: &str, ticket_type: &str) -> Booking {
    Booking {
        id: None,
        name: name.to_string(),
        email: email.to_string(),
        event: event.to_string(),
        ticket_type: ticket_type.to_string(),
        created_at: Utc::now(),
    }
}

#[tokio::main]
async fn main() -> mongodb::error::Result<()> {
    dotenv().ok();
    let config = Config::from_env();

    let mut client_options = ClientOptions::parse(&config.mongodb_uri).await?;
    client_options.app_name = Some("synergia_bookings_seed".to_string());
    let client = Client::with_options(client_options)?;
    let db = client.database(&config.db_name);

    let collection: Collection<Booking> = db.collection("bookings");
    collection.delete_many(doc! {}, None).await?;

    let bookings = vec![
        booking("Asha Nair", "asha@example.com", "Devhack", "Regular"),
        booking("Rohan Shetty", "rohan@example.com", "Devhack", "VIP"),
        booking("Meera Pai", "meera@example.com", "Bot sumo", "Regular"),
        booking("Kiran Rao", "kiran@example.com", "3D Vision", "Regular"),
        booking("Divya Kamath", "divya@example.com", "Aerophilia", "VIP"),
        booking("Arjun Hegde", "arjun@example.com", "Robosoccer", "Regular"),
    ];
    let count = bookings.len();
    collection.insert_many(bookings, None).await?;

    println!("Seeded {count} sample bookings into '{}'.", config.db_name);
    Ok(())
}
