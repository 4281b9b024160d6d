//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert, expense::ValidationError, internal_server_error::InternalServerError,
    not_found::NotFoundError, store::TransportError,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A call to the remote store failed.
    ///
    /// The in-memory expense collection is not modified when this happens.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The user submitted an expense that cannot be sent to the remote store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Could not acquire the lock on the in-memory expense collection.
    #[error("could not acquire the expense collection lock")]
    CollectionLock,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidTimezone(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::Transport(error) => {
                tracing::error!("could not reach the expense store: {error}");
                InternalServerError {
                    description: "Could not load expenses",
                    fix: "The expense store could not be reached. Try again later.",
                }
                .into_response()
            }
            Error::CollectionLock => InternalServerError::default().into_response(),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::Validation(error) if error.is_missing_field() => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Alert::Error {
                    message: "Please fill in all required fields".to_owned(),
                    details: capitalize(&error.to_string()),
                },
            ),
            Error::Validation(error) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Alert::Error {
                    message: "Invalid expense".to_owned(),
                    details: capitalize(&error.to_string()),
                },
            ),
            // Alerts are only shown for form submissions, so a store failure
            // means the expense was not saved.
            Error::Transport(error) => (
                StatusCode::BAD_GATEWAY,
                Alert::Error {
                    message: "Failed to add expense".to_owned(),
                    details: format!(
                        "The expense store could not save the expense ({error}). \
                        Your input has been kept so you can try again."
                    ),
                },
            ),
            Error::InvalidTimezone(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
