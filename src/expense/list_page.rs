//! Defines the route handlers for the page that lists and filters expenses.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, RawQuery, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Query;
use axum_htmx::{HxReplaceUrl, HxRequest};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    collection::{ExpenseCollection, refresh_collection, snapshot},
    endpoints,
    expense::{
        core::Expense,
        filter::{ExpenseSummary, FilterCriteria, FilterQuery, filter_expenses},
        view::{expense_list_view, filter_form_view},
    },
    html::{PAGE_CONTAINER_STYLE, base, refresh_failed_notice},
    navigation::NavBar,
    store::ExpenseStore,
    timezone::local_today,
};

/// The state needed to list expenses.
#[derive(Debug, Clone)]
pub struct ExpenseListState {
    /// The remote store that persists expenses.
    pub store: Arc<dyn ExpenseStore>,
    /// The server's copy of the expenses in the remote store.
    pub expenses: Arc<Mutex<ExpenseCollection>>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl FromRef<AppState> for ExpenseListState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            expenses: state.expenses.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Display the expenses page.
///
/// The collection is refreshed from the remote store first. If that fails a
/// notice is shown and the expenses already held are listed instead.
pub async fn get_expenses_page(
    State(state): State<ExpenseListState>,
    Query(query): Query<FilterQuery>,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;
    let refresh_failed = refresh_collection(state.store.as_ref(), &state.expenses)
        .await
        .is_err();

    let criteria = FilterCriteria::from(query);
    let expenses = filter_expenses(&snapshot(&state.expenses)?, &criteria, today);

    Ok(expenses_page_view(&criteria, &expenses, refresh_failed).into_response())
}

/// Render only the filtered expense list from the expenses already held.
///
/// The browser's address bar is pointed at the full page with the same
/// filters, so a reload keeps them. Requests that did not come from htmx are
/// redirected to that page.
pub async fn get_expense_list_partial(
    State(state): State<ExpenseListState>,
    HxRequest(is_htmx_request): HxRequest,
    RawQuery(raw_query): RawQuery,
    Query(query): Query<FilterQuery>,
) -> Response {
    let page_url = expenses_page_url(raw_query);

    if !is_htmx_request {
        return Redirect::to(&page_url).into_response();
    }

    let criteria = FilterCriteria::from(query);
    let today = match local_today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };
    let expenses = match snapshot(&state.expenses) {
        Ok(expenses) => expenses,
        Err(error) => return error.into_alert_response(),
    };

    let filtered = filter_expenses(&expenses, &criteria, today);
    let summary = ExpenseSummary::from_expenses(&filtered);

    (
        HxReplaceUrl(page_url),
        expense_list_view(&filtered, summary),
    )
        .into_response()
}

/// The full expenses page showing the filters in `raw_query`.
fn expenses_page_url(raw_query: Option<String>) -> String {
    match raw_query.filter(|query| !query.is_empty()) {
        Some(query) => format!("{}?{query}", endpoints::EXPENSES_VIEW),
        None => endpoints::EXPENSES_VIEW.to_owned(),
    }
}

fn expenses_page_view(
    criteria: &FilterCriteria,
    expenses: &[Expense],
    refresh_failed: bool,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::EXPENSES_VIEW).into_html();
    let summary = ExpenseSummary::from_expenses(expenses);

    let content = html! {
        (nav_bar)

        div class={(PAGE_CONTAINER_STYLE) " max-w-screen-lg"}
        {
            h2 class="text-xl font-bold mb-4 self-start" { "Expenses" }

            @if refresh_failed {
                (refresh_failed_notice())
            }

            (filter_form_view(criteria))
            (expense_list_view(expenses, summary))
        }
    };

    base("Expenses", &[], &content)
}
