//! The draft expense entered by the user, its validation, and the form that edits it.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    endpoints,
    expense::core::{Category, NewExpense, PaymentMode, parse_date},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, loading_spinner,
    },
};

/// Reasons a draft expense cannot be submitted.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ValidationError {
    /// The amount field was left blank.
    #[error("an amount is required")]
    MissingAmount,

    /// No category was selected.
    #[error("a category is required")]
    MissingCategory,

    /// No payment mode was selected.
    #[error("a payment mode is required")]
    MissingPaymentMode,

    /// The amount is not a number.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The amount is less than zero.
    #[error("the amount cannot be negative")]
    NegativeAmount,

    /// The category is not one of the known categories.
    #[error("\"{0}\" is not a known category")]
    UnknownCategory(String),

    /// The payment mode is not one of the known payment modes.
    #[error("\"{0}\" is not a known payment mode")]
    UnknownPaymentMode(String),

    /// The date is missing or is not formatted as YYYY-MM-DD.
    #[error("\"{0}\" is not a valid date")]
    InvalidDate(String),

    /// Expenses record money that has already been spent.
    #[error("{0} is a date in the future, which is not allowed")]
    FutureDate(Date),
}

impl ValidationError {
    /// Whether the error is caused by a required field being left blank.
    pub fn is_missing_field(&self) -> bool {
        matches!(
            self,
            ValidationError::MissingAmount
                | ValidationError::MissingCategory
                | ValidationError::MissingPaymentMode
        )
    }
}

/// The raw, unvalidated contents of the new expense form.
///
/// Every field is kept as text exactly as the browser sent it. Missing
/// fields deserialize to empty strings so that they are reported by
/// [ExpenseForm::validate] instead of rejected by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseForm {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub payment_mode: String,
    #[serde(default)]
    pub notes: String,
}

impl ExpenseForm {
    /// An empty form with the date set to `today`.
    pub fn blank(today: Date) -> Self {
        Self {
            date: today.to_string(),
            ..Default::default()
        }
    }

    /// Check the draft and convert it into an expense that can be sent to
    /// the remote store.
    ///
    /// # Errors
    /// Returns the first problem found. Blank required fields are checked
    /// before the contents of any field are parsed.
    pub fn validate(&self, today: Date) -> Result<NewExpense, ValidationError> {
        let amount = self.amount.trim();
        let category = self.category.trim();
        let payment_mode = self.payment_mode.trim();

        if amount.is_empty() {
            return Err(ValidationError::MissingAmount);
        }

        if category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }

        if payment_mode.is_empty() {
            return Err(ValidationError::MissingPaymentMode);
        }

        let amount = match amount.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => return Err(ValidationError::InvalidAmount(amount.to_owned())),
        };

        if amount < 0.0 {
            return Err(ValidationError::NegativeAmount);
        }

        let category: Category = category.parse()?;
        let payment_mode: PaymentMode = payment_mode.parse()?;

        let date = parse_date(&self.date)
            .map_err(|_| ValidationError::InvalidDate(self.date.clone()))?;

        if date > today {
            return Err(ValidationError::FutureDate(date));
        }

        Ok(NewExpense {
            amount,
            category,
            date,
            payment_mode,
            notes: self.notes.trim().to_owned(),
        })
    }
}

/// Renders the new expense form pre-filled with `draft`.
///
/// The form replaces itself with the server response on success, errors go
/// to the alert container so the user's input is kept. The submit button is
/// disabled while a request is in flight to prevent duplicate expenses.
pub fn expense_form_view(draft: &ExpenseForm, max_date: Date) -> Markup {
    let spinner = loading_spinner();

    html! {
        form
            id="expense-form"
            hx-post=(endpoints::EXPENSES_API)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            hx-disabled-elt="find button[type='submit']"
            class="w-full space-y-4 md:space-y-6"
        {
            h2 class="text-xl font-bold" { "Add New Expense" }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount (₹) *"
                }

                // w-full needed to ensure input takes the full width when prefilled with a value
                div class="input-wrapper w-full"
                {
                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="1"
                        min="0"
                        placeholder="Enter amount"
                        required
                        autofocus
                        value=(draft.amount)
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label
                    for="category"
                    class=(FORM_LABEL_STYLE)
                {
                    "Category *"
                }

                select
                    name="category"
                    id="category"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" { "Select category" }

                    @for category in Category::ALL {
                        option
                            value=(category.label())
                            selected[draft.category == category.label()]
                        {
                            (category.label())
                        }
                    }
                }
            }

            div
            {
                label
                    for="date"
                    class=(FORM_LABEL_STYLE)
                {
                    "Date *"
                }

                input
                    name="date"
                    id="date"
                    type="date"
                    max=(max_date)
                    value=(draft.date)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="payment_mode"
                    class=(FORM_LABEL_STYLE)
                {
                    "Payment Mode *"
                }

                select
                    name="payment_mode"
                    id="payment_mode"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" { "Select payment mode" }

                    @for mode in PaymentMode::ALL {
                        option
                            value=(mode.label())
                            selected[draft.payment_mode == mode.label()]
                        {
                            (mode.label())
                        }
                    }
                }
            }

            div
            {
                label
                    for="notes"
                    class=(FORM_LABEL_STYLE)
                {
                    "Notes"
                }

                input
                    name="notes"
                    id="notes"
                    type="text"
                    placeholder="Add a description (optional)"
                    value=(draft.notes)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                span class="htmx-indicator" { (spinner) }
                " Add Expense"
            }
        }
    }
}


#[cfg(test)]
mod view_tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        endpoints,
        expense::form::{ExpenseForm, expense_form_view},
        test_utils::{
            assert_form_input_with_value, assert_form_submit_button, assert_hx_endpoint,
            assert_valid_html, must_get_form,
        },
    };

    #[test]
    fn blank_form_has_all_fields() {
        let today = date!(2024 - 06 - 15);
        let html = Html::parse_fragment(
            &expense_form_view(&ExpenseForm::blank(today), today).into_string(),
        );

        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::EXPENSES_API, "hx-post");
        assert_form_input_with_value(&form, "amount", "number", "");
        assert_form_input_with_value(&form, "date", "date", "2024-06-15");
        assert_form_submit_button(&form);

        let category_options = form
            .select(&Selector::parse("select[name=category] option").unwrap())
            .count();
        let payment_options = form
            .select(&Selector::parse("select[name=payment_mode] option").unwrap())
            .count();
        // Each select also has an empty placeholder option.
        assert_eq!(category_options, 6);
        assert_eq!(payment_options, 5);
    }

    #[test]
    fn date_is_capped_at_today() {
        let today = date!(2024 - 06 - 15);
        let html = Html::parse_fragment(
            &expense_form_view(&ExpenseForm::blank(today), today).into_string(),
        );

        let date_input = html
            .select(&Selector::parse("input[name=date]").unwrap())
            .next()
            .expect("no date input");
        assert_eq!(date_input.value().attr("max"), Some("2024-06-15"));
    }

    #[test]
    fn submit_button_is_disabled_while_in_flight() {
        let today = date!(2024 - 06 - 15);
        let html = Html::parse_fragment(
            &expense_form_view(&ExpenseForm::blank(today), today).into_string(),
        );

        let form = must_get_form(&html);
        assert!(
            form.value().attr("hx-disabled-elt").is_some(),
            "want the form to disable its submit button during requests"
        );
    }

    #[test]
    fn draft_selection_is_kept() {
        let today = date!(2024 - 06 - 15);
        let draft = ExpenseForm {
            category: "Travel".to_owned(),
            payment_mode: "Cash".to_owned(),
            ..ExpenseForm::blank(today)
        };
        let html = Html::parse_fragment(&expense_form_view(&draft, today).into_string());

        let selected = html
            .select(&Selector::parse("option[selected]").unwrap())
            .map(|option| option.value().attr("value").unwrap_or_default().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(selected, vec!["Travel".to_owned(), "Cash".to_owned()]);
    }
}
