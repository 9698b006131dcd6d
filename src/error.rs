use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::Request;
use serde_json::json;
use thiserror::Error;

/// Everything a booking operation can fail with. Handlers return this and
/// the `Responder` impl maps it to HTTP exactly once.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty required fields, malformed ids, unusable bodies.
    #[error("{0}")]
    InvalidInput(String),
    /// Event name outside the configured catalog.
    #[error("Event '{0}' does not exist!")]
    UnknownEvent(String),
    #[error("{0}")]
    NotFound(String),
    /// Unexpected store or communication failure.
    #[error("{context}")]
    Store {
        context: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ApiError::InvalidInput(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn store(context: impl Into<String>, source: anyhow::Error) -> Self {
        ApiError::Store { context: context.into(), source }
    }

    pub fn status(&self) -> Status {
        match self {
            ApiError::InvalidInput(_) | ApiError::UnknownEvent(_) => Status::BadRequest,
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::Store { .. } => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let body = match &self {
            ApiError::Store { context, source } => {
                eprintln!("{context}: {source:?}");
                json!({ "message": self.to_string(), "error": source.to_string() })
            }
            _ => json!({ "message": self.to_string() }),
        };
        (self.status(), Json(body)).respond_to(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_taxonomy() {
        assert_eq!(ApiError::invalid("x").status(), Status::BadRequest);
        assert_eq!(ApiError::UnknownEvent("x".into()).status(), Status::BadRequest);
        assert_eq!(ApiError::not_found("x").status(), Status::NotFound);
        let store = ApiError::store("ctx", anyhow::anyhow!("boom"));
        assert_eq!(store.status(), Status::InternalServerError);
    }

    #[test]
    fn unknown_event_message_names_the_value() {
        let err = ApiError::UnknownEvent("Unknown Fest".into());
        assert_eq!(err.to_string(), "Event 'Unknown Fest' does not exist!");
    }
}
