//! Defines the route handler for the analytics page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    analytics::{
        aggregation::{MonthlyCategoryTotals, monthly_category_totals},
        charts::{CHART_ID, chart_script, monthly_expenses_chart},
        tables::monthly_totals_table,
    },
    collection::{ExpenseCollection, refresh_collection, snapshot},
    endpoints,
    html::{ECHARTS_URL, HeadElement, PAGE_CONTAINER_STYLE, base, link, refresh_failed_notice},
    navigation::NavBar,
    store::ExpenseStore,
};

/// The state needed for the analytics page.
#[derive(Debug, Clone)]
pub struct AnalyticsState {
    /// The remote store that persists expenses.
    pub store: Arc<dyn ExpenseStore>,
    /// The server's copy of the expenses in the remote store.
    pub expenses: Arc<Mutex<ExpenseCollection>>,
}

impl FromRef<AppState> for AnalyticsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            expenses: state.expenses.clone(),
        }
    }
}

/// Display the monthly spending per category for every expense.
///
/// The collection is refreshed from the remote store first. If that fails the
/// expenses already held are used and a notice is shown.
pub async fn get_analytics_page(State(state): State<AnalyticsState>) -> Result<Response, Error> {
    let refresh_failed = refresh_collection(state.store.as_ref(), &state.expenses)
        .await
        .is_err();

    let rows = monthly_category_totals(&snapshot(&state.expenses)?);

    if rows.is_empty() {
        return Ok(analytics_no_data_view(refresh_failed).into_response());
    }

    Ok(analytics_view(&rows, refresh_failed).into_response())
}

fn analytics_no_data_view(refresh_failed: bool) -> Markup {
    let nav_bar = NavBar::new(endpoints::ANALYTICS_VIEW).into_html();
    let new_expense_link = link(endpoints::NEW_EXPENSE_VIEW, "Add an expense");

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold" { "Analytics" }

            @if refresh_failed {
                (refresh_failed_notice())
            }

            p id="no-analytics-data" class="py-8 text-center"
            {
                "No data available for analytics. Add some expenses first!"
            }

            p { (new_expense_link) }
        }
    };

    base("Analytics", &[], &content)
}

fn analytics_view(rows: &[MonthlyCategoryTotals], refresh_failed: bool) -> Markup {
    let nav_bar = NavBar::new(endpoints::ANALYTICS_VIEW).into_html();
    let chart = monthly_expenses_chart(rows);

    let content = html! {
        (nav_bar)

        div class={(PAGE_CONTAINER_STYLE) " max-w-screen-xl"}
        {
            h2 class="text-xl font-bold mb-4 self-start" { "Analytics" }

            @if refresh_failed {
                (refresh_failed_notice())
            }

            section id="charts" class="w-full mx-auto mb-8"
            {
                div id=(CHART_ID) class="min-h-[380px] rounded dark:bg-gray-100" {}
            }

            (monthly_totals_table(rows))
        }
    };

    let scripts = [
        HeadElement::ScriptLink(ECHARTS_URL.to_owned()),
        chart_script(&chart),
    ];

    base("Analytics", &scripts, &content)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        analytics::{
            charts::CHART_ID,
            handlers::{AnalyticsState, get_analytics_page},
        },
        collection::ExpenseCollection,
        expense::{Category, Expense, ExpenseId, PaymentMode},
        store::TransportError,
        test_utils::{FakeExpenseStore, assert_status_ok, assert_valid_html, parse_html_document},
    };

    fn expense(id: &str, amount: f64, category: Category) -> Expense {
        Expense {
            id: Some(ExpenseId::new(id)),
            amount,
            category,
            date: date!(2024 - 01 - 15),
            payment_mode: PaymentMode::CreditCard,
            notes: None,
        }
    }

    fn get_test_state(store: FakeExpenseStore, held: Vec<Expense>) -> AnalyticsState {
        AnalyticsState {
            store: Arc::new(store),
            expenses: Arc::new(Mutex::new(ExpenseCollection::from(held))),
        }
    }

    #[track_caller]
    fn assert_exists(html: &Html, selector: &str) {
        assert!(
            html.select(&Selector::parse(selector).unwrap())
                .next()
                .is_some(),
            "{selector} not found"
        );
    }

    #[tokio::test]
    async fn shows_chart_and_table() {
        let state = get_test_state(
            FakeExpenseStore::with_expenses(vec![
                expense("1", 1000.0, Category::Rental),
                expense("2", 500.0, Category::Groceries),
            ]),
            Vec::new(),
        );

        let response = get_analytics_page(State(state)).await.unwrap();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_exists(&html, &format!("#{CHART_ID}"));
        assert_exists(&html, "#monthly-totals table");
    }

    #[tokio::test]
    async fn shows_placeholder_without_expenses() {
        let state = get_test_state(FakeExpenseStore::default(), Vec::new());

        let response = get_analytics_page(State(state)).await.unwrap();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let text = html
            .select(&Selector::parse("#no-analytics-data").unwrap())
            .next()
            .expect("no placeholder")
            .text()
            .collect::<String>();
        assert_eq!(
            text.trim(),
            "No data available for analytics. Add some expenses first!"
        );
        assert!(
            html.select(&Selector::parse(&format!("#{CHART_ID}")).unwrap())
                .next()
                .is_none()
        );
    }

    #[tokio::test]
    async fn uses_held_expenses_when_refresh_fails() {
        let state = get_test_state(
            FakeExpenseStore::failing_fetch(TransportError::Status(StatusCode::BAD_GATEWAY)),
            vec![expense("1", 42.0, Category::Others)],
        );

        let response = get_analytics_page(State(state.clone())).await.unwrap();

        let html = parse_html_document(response).await;
        assert_exists(&html, "#refresh-failed");
        assert_exists(&html, "#monthly-totals table");
        assert_eq!(state.expenses.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn shows_notice_without_data_when_refresh_fails() {
        let state = get_test_state(
            FakeExpenseStore::failing_fetch(TransportError::Unreachable(
                "connection refused".to_owned(),
            )),
            Vec::new(),
        );

        let response = get_analytics_page(State(state)).await.unwrap();

        let html = parse_html_document(response).await;
        assert_exists(&html, "#refresh-failed");
        assert_exists(&html, "#no-analytics-data");
    }

    #[tokio::test]
    async fn no_notice_when_refresh_succeeds() {
        let state = get_test_state(
            FakeExpenseStore::with_expenses(vec![expense("1", 42.0, Category::Others)]),
            Vec::new(),
        );

        let response = get_analytics_page(State(state)).await.unwrap();

        let html = parse_html_document(response).await;
        assert!(
            html.select(&Selector::parse("#refresh-failed").unwrap())
                .next()
                .is_none()
        );
    }
}
