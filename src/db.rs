use mongodb::{bson::doc, options::ClientOptions, Client, Database};

use crate::config::Config;

/// Builds the shared database handle. Connectivity is checked with a ping
/// and logged, but a down store is not fatal: requests fail individually.
pub async fn init_db(config: &Config) -> mongodb::error::Result<Database> {
    let mut client_options = ClientOptions::parse(&config.mongodb_uri).await?;
    client_options.app_name = Some("synergia_bookings".to_string());

    let client = Client::with_options(client_options)?;
    let db = client.database(&config.db_name);

    match db.run_command(doc! { "ping": 1 }, None).await {
        Ok(_) => println!("Connected to MongoDB successfully!"),
        Err(err) => eprintln!("MongoDB connection failed: {err}"),
    }

    Ok(db)
}
