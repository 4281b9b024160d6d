//! Alert system for displaying success and error messages to users.
//!
//! Alerts are swapped into the `#alert-container` element of the base page,
//! either as the target of an error response or out-of-band alongside a
//! successful response.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

const SUCCESS_STYLE: &str = "flex items-start gap-3 p-4 mb-4 rounded-lg shadow-lg \
    text-green-800 bg-green-50 border border-green-300 \
    dark:bg-gray-800 dark:text-green-400 dark:border-green-800";

const ERROR_STYLE: &str = "flex items-start gap-3 p-4 mb-4 rounded-lg shadow-lg \
    text-red-800 bg-red-50 border border-red-300 \
    dark:bg-gray-800 dark:text-red-400 dark:border-red-800";

/// A message shown to the user after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// The action succeeded.
    Success { message: String, details: String },
    /// The action failed, `details` should tell the user what to do next.
    Error { message: String, details: String },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (style, message, details) = match self {
            Alert::Success { message, details } => (SUCCESS_STYLE, message, details),
            Alert::Error { message, details } => (ERROR_STYLE, message, details),
        };

        html! {
            div role="alert" class=(style)
            {
                div class="flex-1 text-sm"
                {
                    p class="font-semibold" { (message) }

                    @if !details.is_empty() {
                        p class="mt-1" { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    class="ms-auto -mx-1.5 -my-1.5 p-1.5 rounded-lg hover:opacity-75"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "✕"
                }
            }
        }
    }

    /// Render the alert so that htmx swaps it into the alert container
    /// regardless of the request's target.
    pub fn into_oob_html(self) -> Markup {
        html! {
            div id="alert-container" hx-swap-oob="innerHTML"
            {
                (self.into_html())
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{alert::Alert, test_utils::assert_valid_html};

    #[test]
    fn error_alert_shows_message_and_details() {
        let alert = Alert::Error {
            message: "Failed to add expense".to_owned(),
            details: "Try again".to_owned(),
        };

        let html = Html::parse_fragment(&alert.into_html().into_string());

        assert_valid_html(&html);
        let paragraphs = html
            .select(&Selector::parse("[role=alert] p").unwrap())
            .map(|p| p.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(paragraphs, vec!["Failed to add expense", "Try again"]);
    }

    #[test]
    fn empty_details_are_omitted() {
        let alert = Alert::Success {
            message: "Expense added successfully!".to_owned(),
            details: String::new(),
        };

        let html = Html::parse_fragment(&alert.into_html().into_string());

        let paragraph_count = html.select(&Selector::parse("p").unwrap()).count();
        assert_eq!(paragraph_count, 1);
    }

    #[test]
    fn out_of_band_alert_targets_container() {
        let alert = Alert::Success {
            message: "Expense added successfully!".to_owned(),
            details: String::new(),
        };

        let html = Html::parse_fragment(&alert.into_oob_html().into_string());

        let container = html
            .select(&Selector::parse("#alert-container").unwrap())
            .next()
            .expect("no alert container");
        assert_eq!(container.value().attr("hx-swap-oob"), Some("innerHTML"));
        assert!(
            container
                .select(&Selector::parse("[role=alert]").unwrap())
                .next()
                .is_some()
        );
    }
}
