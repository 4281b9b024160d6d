//! Defines the route handler for the page for adding a new expense.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    AppState, Error, endpoints,
    expense::form::{ExpenseForm, expense_form_view},
    html::{FORM_CONTAINER_STYLE, base, rupee_input_styles},
    navigation::NavBar,
    timezone::local_today,
};

/// The state needed for the new expense page.
#[derive(Debug, Clone)]
pub struct NewExpensePageState {
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl FromRef<AppState> for NewExpensePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

fn new_expense_view(today: Date) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_EXPENSE_VIEW).into_html();
    let form = expense_form_view(&ExpenseForm::blank(today), today);

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            (form)
        }
    };

    base("Add Expense", &[rupee_input_styles()], &content)
}

/// Renders the page for adding an expense, with the date set to today.
pub async fn get_new_expense_page(
    State(state): State<NewExpensePageState>,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;

    Ok(new_expense_view(today).into_response())
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use time::OffsetDateTime;

    use crate::{
        Error, endpoints,
        expense::create_page::{NewExpensePageState, get_new_expense_page},
        test_utils::{
            assert_content_type, assert_form_input_with_value, assert_form_submit_button,
            assert_hx_endpoint, assert_status_ok, assert_valid_html, must_get_form,
            parse_html_document,
        },
    };

    #[tokio::test]
    async fn new_expense_page_returns_form() {
        let state = NewExpensePageState {
            local_timezone: "Etc/UTC".to_owned(),
        };

        let response = get_new_expense_page(State(state)).await.unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let document = parse_html_document(response).await;
        assert_valid_html(&document);

        let form = must_get_form(&document);
        assert_hx_endpoint(&form, endpoints::EXPENSES_API, "hx-post");
        assert_form_input_with_value(
            &form,
            "date",
            "date",
            &OffsetDateTime::now_utc().date().to_string(),
        );
        assert_form_submit_button(&form);
    }

    #[tokio::test]
    async fn invalid_timezone_is_an_error() {
        let state = NewExpensePageState {
            local_timezone: "Not/A_Zone".to_owned(),
        };

        let result = get_new_expense_page(State(state)).await;

        assert_eq!(
            result.map(|_| ()),
            Err(Error::InvalidTimezone("Not/A_Zone".to_owned()))
        );
    }
}
