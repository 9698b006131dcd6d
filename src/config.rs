use std::env;

/// Events bookings may be made against when nothing else is configured.
pub const DEFAULT_EVENTS: [&str; 5] =
    ["Devhack", "Bot sumo", "3D Vision", "Aerophilia", "Robosoccer"];

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub db_name: String,
    /// Closed list of event names accepted on create and update.
    pub available_events: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            mongodb_uri: env::var("MONGODB_URI").expect("MONGODB_URI must be set"),
            db_name: env::var("DB_NAME").unwrap_or_else(|_| "synergiaDB".to_string()),
            available_events: match env::var("AVAILABLE_EVENTS") {
                Ok(raw) => raw
                    .split(',')
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
                    .collect(),
                Err(_) => DEFAULT_EVENTS.iter().map(|name| name.to_string()).collect(),
            },
        }
    }
}
