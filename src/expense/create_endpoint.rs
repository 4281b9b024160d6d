//! Defines the endpoint for adding a new expense.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use maud::html;

use crate::{
    AppState, Error,
    alert::Alert,
    collection::{ExpenseCollection, lock_collection},
    expense::form::{ExpenseForm, expense_form_view},
    html::format_currency,
    store::ExpenseStore,
    timezone::local_today,
};

/// The state needed to add an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The remote store that persists expenses.
    pub store: Arc<dyn ExpenseStore>,
    /// The server's copy of the expenses in the remote store.
    pub expenses: Arc<Mutex<ExpenseCollection>>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            expenses: state.expenses.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A route handler for adding a new expense.
///
/// On success the expense confirmed by the remote store is added to the
/// collection and the response is a blank form plus an out-of-band success
/// alert. On failure the response is an error alert and the form is left as
/// the user filled it in.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let today = match local_today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    let new_expense = match form.validate(today) {
        Ok(new_expense) => new_expense,
        Err(error) => {
            tracing::info!("rejected expense form: {error}");
            return Error::from(error).into_alert_response();
        }
    };

    let expense = match state.store.create(&new_expense).await {
        Ok(expense) => expense,
        Err(error) => {
            tracing::error!("could not create expense: {error}");
            return Error::from(error).into_alert_response();
        }
    };

    let details = format!(
        "{} on {} for {}.",
        format_currency(expense.amount),
        expense.category,
        expense.date
    );

    match lock_collection(&state.expenses) {
        Ok(mut expenses) => {
            if !expenses.append(expense) {
                tracing::debug!("created expense was already held by a concurrent refresh");
            }
        }
        Err(error) => return error.into_alert_response(),
    }

    let alert = Alert::Success {
        message: "Expense added successfully!".to_owned(),
        details,
    };

    html! {
        (expense_form_view(&ExpenseForm::blank(today), today))
        (alert.into_oob_html())
    }
    .into_response()
}
